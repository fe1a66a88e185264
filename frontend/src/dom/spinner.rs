use log::warn;
use shared::config::{DomSelectors, StateClasses};
use shared::modal::Spinner;
use web_sys::Element;

use crate::dom::{query_document, toggle_class};

/// Page loader toggled with the hidden class. Pages without a loader get a
/// no-op spinner.
pub struct DomSpinner {
    loader: Option<Element>,
    hidden_class: String,
}

impl DomSpinner {
    pub fn new(selectors: &DomSelectors, classes: &StateClasses) -> Self {
        let loader = match query_document(&gloo::utils::document(), &selectors.loader) {
            Ok(loader) => Some(loader),
            Err(e) => {
                warn!("No loading indicator on the page: {}", e);
                None
            }
        };

        Self {
            loader,
            hidden_class: classes.hidden.clone(),
        }
    }

    fn set_hidden(&self, hidden: bool) {
        if let Some(loader) = &self.loader {
            if let Err(e) = toggle_class(loader, &self.hidden_class, hidden) {
                warn!("Failed to toggle loading indicator: {}", e);
            }
        }
    }
}

impl Spinner for DomSpinner {
    fn show(&self) {
        self.set_hidden(false);
    }

    fn hide(&self) {
        self.set_hidden(true);
    }
}
