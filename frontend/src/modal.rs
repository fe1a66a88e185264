use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};
use shared::modal::{BookFetcher, ModalController, ModalDeps};
use shared::{Book, KeyValueStore, ModalConfig, Result, ShoppingList};
use wasm_bindgen_futures::spawn_local;

use crate::api::books::HttpBookFetcher;
use crate::api::user_data::RemoteUserDataWriter;
use crate::dom::{DomListenerBinder, DomModalView, DomRefs, DomSpinner};
use crate::storage::BrowserStorage;
use crate::templates::BookModalTemplate;

/// The book details modal wired to the page.
///
/// Cloning shares the same controller.
#[derive(Clone)]
pub struct BookModal {
    controller: Rc<RefCell<ModalController>>,
}

impl BookModal {
    pub fn mount(config: ModalConfig) -> Result<Self> {
        Self::mount_with_fetcher(config, Rc::new(HttpBookFetcher))
    }

    /// Mounts the modal on the page's backdrop and modal elements, fetching
    /// books through `fetcher`
    pub fn mount_with_fetcher(config: ModalConfig, fetcher: Rc<dyn BookFetcher>) -> Result<Self> {
        let refs = DomRefs::query(&config.selectors)?;
        let store: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
        let list = ShoppingList::load(store.as_ref(), &config.storage.books_data)?;
        info!("Mounting book modal with {} books in the shopping list", list.len());

        let controller = Rc::new_cyclic(|controller| {
            let deps = ModalDeps {
                fetcher,
                renderer: Box::new(BookModalTemplate),
                spinner: Box::new(DomSpinner::new(&config.selectors, &config.classes)),
                writer: Box::new(RemoteUserDataWriter),
                view: Box::new(DomModalView::new(
                    refs.clone(),
                    config.selectors.clone(),
                    config.classes.clone(),
                )),
                binder: Box::new(DomListenerBinder::new(
                    refs,
                    config.selectors.clone(),
                    controller.clone(),
                )),
                store,
            };
            RefCell::new(ModalController::with_list(deps, config, list))
        });

        Ok(Self { controller })
    }

    /// Opens the modal for `book_id`. Failures are logged and leave the modal
    /// closed; nothing is returned to the caller.
    pub async fn open(&self, book_id: &str) {
        let fetcher = match self.controller.try_borrow_mut() {
            Ok(mut controller) => match controller.begin_open(book_id) {
                Ok(()) => controller.fetcher(),
                Err(e) => {
                    warn!("Book modal not opened for {}: {}", book_id, e);
                    return;
                }
            },
            Err(_) => {
                warn!("Book modal is busy; dropping open request for {}", book_id);
                return;
            }
        };

        let fetched = fetcher.get_book_by_id(book_id).await;

        if self.controller.try_borrow_mut().is_ok() {
            finish(&self.controller, book_id, fetched);
        } else {
            // Retry once the current borrow is released so the modal does not
            // stay stuck in `Opening`.
            warn!("Book modal is busy; deferring fetched book {}", book_id);
            let controller = Rc::clone(&self.controller);
            let book_id = book_id.to_string();
            spawn_local(async move {
                finish(&controller, &book_id, fetched);
            });
        }
    }

    pub fn close(&self) {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.close(),
            Err(_) => warn!("Book modal is busy; close request dropped"),
        };
    }

    pub fn is_open(&self) -> bool {
        self.controller
            .try_borrow()
            .map(|controller| controller.is_open())
            .unwrap_or(false)
    }

    /// Number of page listeners the open modal holds
    pub fn attached_listeners(&self) -> usize {
        self.controller
            .try_borrow()
            .map(|controller| controller.listeners().len())
            .unwrap_or(0)
    }
}

fn finish(controller: &RefCell<ModalController>, book_id: &str, fetched: Result<Book>) {
    match controller.try_borrow_mut() {
        Ok(mut controller) => {
            if let Err(e) = controller.finish_open(book_id, fetched) {
                debug!("Book modal for {} was closed after an error: {}", book_id, e);
            }
        }
        Err(_) => {
            error!("Book modal is still busy; abandoning book {}", book_id);
        }
    }
}
