use std::cell::RefCell;

use log::{error, info, warn};
use shared::ModalConfig;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod config;
pub mod dom;
pub mod modal;
pub mod storage;
pub mod templates;

pub use modal::BookModal;

thread_local! {
    static BOOK_MODAL: RefCell<Option<BookModal>> = RefCell::new(None);
}

fn mounted_modal() -> Option<BookModal> {
    BOOK_MODAL.with(|slot| slot.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    // Set up panic hook
    console_error_panic_hook::set_once();

    match BookModal::mount(ModalConfig::default()) {
        Ok(modal) => {
            BOOK_MODAL.with(|slot| *slot.borrow_mut() = Some(modal));
            info!("Book modal ready");
        }
        Err(e) => error!("Failed to mount book modal: {}", e),
    }

    Ok(())
}

/// Opens the details modal for a book. Called from the book list's click
/// handlers.
#[wasm_bindgen(js_name = openBookModal)]
pub fn open_book_modal(book_id: String) {
    let Some(modal) = mounted_modal() else {
        warn!("Book modal is not mounted; cannot open {}", book_id);
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        modal.open(&book_id).await;
    });
}

#[wasm_bindgen(js_name = closeBookModal)]
pub fn close_book_modal() {
    if let Some(modal) = mounted_modal() {
        modal.close();
    }
}
