//! `web-sys` implementations of the modal's view, spinner and listeners.

pub mod listeners;
pub mod spinner;
pub mod view;

pub use listeners::DomListenerBinder;
pub use spinner::DomSpinner;
pub use view::DomModalView;

use shared::config::DomSelectors;
use shared::{ModalError, Result};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

/// Page elements that exist before any modal content is rendered
#[derive(Debug, Clone)]
pub struct DomRefs {
    pub body: HtmlElement,
    pub backdrop: Element,
    pub modal: Element,
}

impl DomRefs {
    pub fn query(selectors: &DomSelectors) -> Result<Self> {
        let document = gloo::utils::document();
        let body = document
            .body()
            .ok_or_else(|| ModalError::DomBinding("body".to_string()))?;

        Ok(Self {
            body,
            backdrop: query_document(&document, &selectors.backdrop)?,
            modal: query_document(&document, &selectors.modal)?,
        })
    }
}

pub(crate) fn query_document(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)
        .map_err(|e| js_error(selector, e))?
        .ok_or_else(|| ModalError::DomBinding(selector.to_string()))
}

pub(crate) fn query_within(root: &Element, selector: &str) -> Result<Element> {
    root.query_selector(selector)
        .map_err(|e| js_error(selector, e))?
        .ok_or_else(|| ModalError::DomBinding(selector.to_string()))
}

/// Adds `class` when `on` is true, removes it otherwise
pub(crate) fn toggle_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|e| js_error(class, e))
}

fn js_error(context: &str, value: JsValue) -> ModalError {
    ModalError::DomBinding(format!("{}: {:?}", context, value))
}
