use shared::config::{DomSelectors, StateClasses};
use shared::modal::{ControlVisibility, ModalView};
use shared::{ModalError, Result};
use web_sys::Element;

use crate::dom::{query_within, toggle_class, DomRefs};

struct BoundControls {
    add_button: Element,
    remove_block: Element,
}

/// Drives the modal through CSS classes on the page's backdrop and modal
/// elements
pub struct DomModalView {
    refs: DomRefs,
    selectors: DomSelectors,
    classes: StateClasses,
    controls: Option<BoundControls>,
}

impl DomModalView {
    pub fn new(refs: DomRefs, selectors: DomSelectors, classes: StateClasses) -> Self {
        Self {
            refs,
            selectors,
            classes,
            controls: None,
        }
    }
}

impl ModalView for DomModalView {
    fn set_visible(&mut self, visible: bool) -> Result<()> {
        toggle_class(&self.refs.modal, &self.classes.hidden, !visible)?;
        toggle_class(&self.refs.backdrop, &self.classes.hidden, !visible)
    }

    fn set_scroll_locked(&mut self, locked: bool) -> Result<()> {
        toggle_class(&self.refs.body, &self.classes.scroll_lock, locked)
    }

    fn set_content(&mut self, html: &str) -> Result<()> {
        self.controls = None;
        self.refs.modal.set_inner_html(html);
        Ok(())
    }

    fn clear_content(&mut self) -> Result<()> {
        self.set_content("")
    }

    fn bind_controls(&mut self) -> Result<()> {
        let modal = &self.refs.modal;
        let add_button = query_within(modal, &self.selectors.add_button)?;
        let remove_block = query_within(modal, &self.selectors.remove_block)?;
        // Listeners attach to these later; fail now rather than half-open.
        query_within(modal, &self.selectors.remove_button)?;
        query_within(modal, &self.selectors.close_button)?;

        self.controls = Some(BoundControls {
            add_button,
            remove_block,
        });
        Ok(())
    }

    fn apply_controls(&mut self, controls: ControlVisibility) -> Result<()> {
        let bound = self
            .controls
            .as_ref()
            .ok_or_else(|| ModalError::DomBinding("modal controls are not bound".to_string()))?;

        toggle_class(&bound.add_button, &self.classes.hidden, !controls.add_button)?;
        toggle_class(&bound.remove_block, &self.classes.hidden, !controls.remove_block)
    }
}
