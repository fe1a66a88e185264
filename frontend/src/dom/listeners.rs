use std::cell::RefCell;
use std::rc::Weak;

use gloo::events::EventListener;
use log::warn;
use shared::config::DomSelectors;
use shared::listeners::{ListenerBinder, ListenerHandle, ListenerKind};
use shared::modal::ModalController;
use shared::Result;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{EventTarget, KeyboardEvent};

use crate::dom::{query_within, DomRefs};

type ControllerRef = Weak<RefCell<ModalController>>;

/// Attaches `gloo` event listeners that forward to the controller's handlers
pub struct DomListenerBinder {
    refs: DomRefs,
    selectors: DomSelectors,
    controller: ControllerRef,
}

impl DomListenerBinder {
    pub fn new(refs: DomRefs, selectors: DomSelectors, controller: ControllerRef) -> Self {
        Self {
            refs,
            selectors,
            controller,
        }
    }

    fn on_click(&self, selector: &str, handler: fn(&mut ModalController)) -> Result<EventListener> {
        let element = query_within(&self.refs.modal, selector)?;
        let controller = self.controller.clone();
        Ok(EventListener::new(&element, "click", move |_| {
            dispatch(&controller, handler);
        }))
    }
}

impl ListenerBinder for DomListenerBinder {
    fn bind(&mut self, kind: ListenerKind) -> Result<ListenerHandle> {
        let window = gloo::utils::window();
        let listener = match kind {
            ListenerKind::EscapeKey => {
                let controller = self.controller.clone();
                EventListener::new(&window, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        let code = event.code();
                        dispatch(&controller, move |modal| modal.handle_key(&code));
                    }
                })
            }
            ListenerKind::BackdropClick => {
                let controller = self.controller.clone();
                let backdrop = self.refs.backdrop.clone();
                EventListener::new(&window, "click", move |event| {
                    let backdrop_target: &EventTarget = backdrop.as_ref();
                    let on_backdrop = event.target().as_ref() == Some(backdrop_target);
                    dispatch(&controller, move |modal| modal.handle_backdrop_click(on_backdrop));
                })
            }
            ListenerKind::AddClick => self.on_click(&self.selectors.add_button, ModalController::handle_add_click)?,
            ListenerKind::RemoveClick => {
                self.on_click(&self.selectors.remove_button, ModalController::handle_remove_click)?
            }
            ListenerKind::CloseClick => {
                self.on_click(&self.selectors.close_button, ModalController::handle_close_click)?
            }
        };

        Ok(ListenerHandle::new(kind, listener))
    }
}

/// Runs `action` on the controller from a fresh task. Handlers may dispose
/// the listener that invoked them, which must not happen inside its own
/// callback.
fn dispatch<F>(controller: &ControllerRef, action: F)
where
    F: FnOnce(&mut ModalController) + 'static,
{
    let controller = controller.clone();
    spawn_local(async move {
        let Some(controller) = controller.upgrade() else {
            return;
        };
        match controller.try_borrow_mut() {
            Ok(mut modal) => action(&mut modal),
            Err(_) => warn!("Book modal is busy; dropping event"),
        };
    });
}
