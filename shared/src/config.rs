use serde::{Deserialize, Serialize};

/// Local storage keys the modal reads and writes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageKeys {
    /// JSON array of books in the shopping list
    pub books_data: String,
    /// JSON boolean set by the auth flow when a user is signed in
    pub user_data: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            books_data: "books-data".to_string(),
            user_data: "user-data".to_string(),
        }
    }
}

/// CSS selectors for the page elements and the rendered modal controls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DomSelectors {
    pub backdrop: String,
    pub modal: String,
    pub loader: String,
    pub add_button: String,
    pub remove_block: String,
    pub remove_button: String,
    pub close_button: String,
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self {
            backdrop: ".backdrop-js".to_string(),
            modal: ".modal-js".to_string(),
            loader: ".loader-js".to_string(),
            add_button: ".modal__add-btn-js".to_string(),
            remove_block: ".modal__remove-block-js".to_string(),
            remove_button: ".modal__remove-btn-js".to_string(),
            close_button: ".modal__close-btn-js".to_string(),
        }
    }
}

/// State classes toggled on DOM nodes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StateClasses {
    /// Applied to hidden elements (backdrop, modal, controls, loader)
    pub hidden: String,
    /// Applied to `body` while the modal is open to lock page scroll
    pub scroll_lock: String,
}

impl Default for StateClasses {
    fn default() -> Self {
        Self {
            hidden: "is-hidden".to_string(),
            scroll_lock: "modal-open".to_string(),
        }
    }
}

/// Store logo assets rendered next to each buy link, at 1x and 2x density
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreImages {
    pub amazon_src_x1: String,
    pub amazon_src_x2: String,
    pub apple_books_src_x1: String,
    pub apple_books_src_x2: String,
    pub barnes_and_noble_src_x1: String,
    pub barnes_and_noble_src_x2: String,
}

impl Default for StoreImages {
    fn default() -> Self {
        Self {
            amazon_src_x1: "./images/modal/image-1@1x.png".to_string(),
            amazon_src_x2: "./images/modal/image-1@2x.png".to_string(),
            apple_books_src_x1: "./images/modal/image-2@1x.png".to_string(),
            apple_books_src_x2: "./images/modal/image-2@2x.png".to_string(),
            barnes_and_noble_src_x1: "./images/modal/image-3@1x.png".to_string(),
            barnes_and_noble_src_x2: "./images/modal/image-3@2x.png".to_string(),
        }
    }
}

/// Configuration for the book details modal
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModalConfig {
    pub storage: StorageKeys,
    pub selectors: DomSelectors,
    pub classes: StateClasses,
    pub images: StoreImages,
    /// Append a book even when one with the same id is already listed.
    /// Off by default: the shopping list is unique by book id.
    pub allow_duplicates: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: ModalConfig = serde_json::from_str(
            r#"{"storage": {"books_data": "cart"}, "allow_duplicates": true}"#,
        )
        .unwrap();

        assert_eq!(config.storage.books_data, "cart");
        assert_eq!(config.storage.user_data, "user-data");
        assert_eq!(config.selectors, DomSelectors::default());
        assert!(config.allow_duplicates);
    }

    #[test]
    fn test_default_dom_contract() {
        let selectors = DomSelectors::default();
        assert_eq!(selectors.backdrop, ".backdrop-js");
        assert_eq!(selectors.modal, ".modal-js");
        assert_eq!(selectors.add_button, ".modal__add-btn-js");
        assert_eq!(selectors.remove_block, ".modal__remove-block-js");
        assert_eq!(selectors.remove_button, ".modal__remove-btn-js");
        assert_eq!(selectors.close_button, ".modal__close-btn-js");
    }
}
