use gloo_storage::{LocalStorage, Storage};
use shared::{KeyValueStore, ModalError, Result};

/// The page's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| ModalError::Storage(format!("Failed to read '{}': {:?}", key, e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| ModalError::Storage(format!("Failed to write '{}': {:?}", key, e)))
    }
}
