use std::rc::Rc;

use log::{debug, error, info, warn};

use crate::config::ModalConfig;
use crate::error::{ModalError, Result};
use crate::listeners::{ListenerBinder, ListenerKind, ListenerRegistry};
use crate::models::book::Book;
use crate::modal::ports::{BookFetcher, ModalView, Spinner, TemplateRenderer, UserDataWriter};
use crate::modal::template::ModalTemplateData;
use crate::modal::ControlVisibility;
use crate::session;
use crate::shopping_list::ShoppingList;
use crate::storage::KeyValueStore;

/// `KeyboardEvent.code` that dismisses the modal
pub const ESCAPE_KEY_CODE: &str = "Escape";

/// Collaborators the controller drives
pub struct ModalDeps {
    pub fetcher: Rc<dyn BookFetcher>,
    pub renderer: Box<dyn TemplateRenderer>,
    pub spinner: Box<dyn Spinner>,
    pub writer: Box<dyn UserDataWriter>,
    pub view: Box<dyn ModalView>,
    pub binder: Box<dyn ListenerBinder>,
    pub store: Rc<dyn KeyValueStore>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    /// Waiting for the book service
    Opening { book_id: String },
    Open {
        book: Book,
        logged_in: bool,
        controls: ControlVisibility,
    },
}

/// Opens and closes the book details modal and keeps the shopping list in
/// step with storage.
pub struct ModalController {
    fetcher: Rc<dyn BookFetcher>,
    renderer: Box<dyn TemplateRenderer>,
    spinner: Box<dyn Spinner>,
    writer: Box<dyn UserDataWriter>,
    view: Box<dyn ModalView>,
    binder: Box<dyn ListenerBinder>,
    store: Rc<dyn KeyValueStore>,
    config: ModalConfig,
    list: ShoppingList,
    listeners: ListenerRegistry,
    state: ModalState,
}

impl ModalController {
    /// Builds a controller, loading the shopping list from storage
    pub fn new(deps: ModalDeps, config: ModalConfig) -> Result<Self> {
        let list = ShoppingList::load(deps.store.as_ref(), &config.storage.books_data)?;
        Ok(Self::with_list(deps, config, list))
    }

    pub fn with_list(deps: ModalDeps, config: ModalConfig, list: ShoppingList) -> Self {
        Self {
            fetcher: deps.fetcher,
            renderer: deps.renderer,
            spinner: deps.spinner,
            writer: deps.writer,
            view: deps.view,
            binder: deps.binder,
            store: deps.store,
            config,
            list,
            listeners: ListenerRegistry::new(),
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    pub fn fetcher(&self) -> Rc<dyn BookFetcher> {
        Rc::clone(&self.fetcher)
    }

    /// Fetches the book and presents the modal.
    ///
    /// On failure the modal is closed again before the error is returned.
    pub async fn open(&mut self, book_id: &str) -> Result<()> {
        self.begin_open(book_id)?;
        let fetcher = self.fetcher();
        let fetched = fetcher.get_book_by_id(book_id).await;
        self.finish_open(book_id, fetched)
    }

    /// First half of [`open`](Self::open): guards against a second open and
    /// shows the spinner. Callers that cannot hold the controller across the
    /// fetch await the fetcher themselves and then call `finish_open`.
    pub fn begin_open(&mut self, book_id: &str) -> Result<()> {
        if self.state != ModalState::Closed {
            warn!("Ignoring request to open book {} while the modal is busy", book_id);
            return Err(ModalError::AlreadyOpen);
        }

        debug!("Opening book modal for {}", book_id);
        self.spinner.show();
        self.state = ModalState::Opening {
            book_id: book_id.to_string(),
        };
        Ok(())
    }

    /// Second half of [`open`](Self::open). A result for a book the
    /// controller is no longer waiting on is dropped.
    pub fn finish_open(&mut self, book_id: &str, fetched: Result<Book>) -> Result<()> {
        match &self.state {
            ModalState::Opening { book_id: pending } if pending == book_id => {}
            _ => {
                debug!("Discarding stale fetch result for book {}", book_id);
                return Ok(());
            }
        }

        let outcome = fetched.and_then(|book| self.present(book));
        if let Err(e) = &outcome {
            error!("Failed to open book modal for {}: {}", book_id, e);
            self.spinner.hide();
            self.teardown();
        }
        outcome
    }

    fn present(&mut self, book: Book) -> Result<()> {
        let logged_in = session::is_user_logged_in(self.store.as_ref(), &self.config.storage.user_data);
        let links = book.purchase_links()?;

        self.view.set_visible(true)?;
        self.view.set_scroll_locked(true)?;

        let data = ModalTemplateData::new(book.clone(), links, self.config.images.clone());
        let html = self.renderer.render(&data)?;
        self.view.set_content(&html)?;
        self.spinner.hide();

        self.view.bind_controls()?;
        let controls = ControlVisibility::for_session(logged_in, self.list.contains(&book.id));
        self.view.apply_controls(controls)?;

        for kind in ListenerKind::ALL {
            let handle = self.binder.bind(kind)?;
            self.listeners.attach(handle);
        }

        info!("Book modal open for '{}' ({})", book.title, book.id);
        self.state = ModalState::Open {
            book,
            logged_in,
            controls,
        };
        Ok(())
    }

    /// Adds the open book to the shopping list, persists it locally and
    /// remotely, then swaps the add button for the remove block.
    pub fn add(&mut self) -> Result<()> {
        let book = match &self.state {
            ModalState::Open { book, .. } => book.clone(),
            _ => return Err(ModalError::NotOpen),
        };

        if self.list.contains(&book.id) && !self.config.allow_duplicates {
            debug!("Book {} is already in the shopping list", book.id);
        } else {
            let previous = self.list.clone();
            self.list.push(book);
            self.persist(previous)?;
        }

        self.set_controls(ControlVisibility::added())
    }

    /// Removes the open book from the shopping list, persists it locally and
    /// remotely, then swaps the remove block for the add button. Unless
    /// duplicates are allowed, every copy of the book is removed.
    pub fn remove(&mut self) -> Result<()> {
        let book_id = match &self.state {
            ModalState::Open { book, .. } => book.id.clone(),
            _ => return Err(ModalError::NotOpen),
        };

        let previous = self.list.clone();
        let removed = if self.config.allow_duplicates {
            usize::from(self.list.remove(&book_id).is_some())
        } else {
            self.list.remove_all(&book_id)
        };
        if removed > 0 {
            self.persist(previous)?;
        } else {
            debug!("Book {} is not in the shopping list", book_id);
        }

        self.set_controls(ControlVisibility::removed())
    }

    /// Hides the modal and backdrop, detaches listeners, clears the content
    /// and unlocks page scroll. Closing a closed modal does nothing.
    pub fn close(&mut self) {
        match self.state {
            ModalState::Closed => debug!("Book modal already closed"),
            ModalState::Opening { .. } => {
                debug!("Closing book modal before the book arrived");
                self.spinner.hide();
                self.state = ModalState::Closed;
            }
            ModalState::Open { .. } => {
                self.teardown();
                info!("Book modal closed");
            }
        }
    }

    pub fn handle_key(&mut self, code: &str) {
        if self.is_open() && code == ESCAPE_KEY_CODE {
            self.close();
        }
    }

    pub fn handle_backdrop_click(&mut self, on_backdrop: bool) {
        if self.is_open() && on_backdrop {
            self.close();
        }
    }

    pub fn handle_close_click(&mut self) {
        if self.is_open() {
            self.close();
        }
    }

    pub fn handle_add_click(&mut self) {
        let logged_in = match &self.state {
            ModalState::Open { logged_in, .. } => *logged_in,
            _ => return,
        };
        if !logged_in {
            warn!("Ignoring add click from a signed-out session");
            return;
        }
        if let Err(e) = self.add() {
            error!("Failed to add book to shopping list: {}", e);
        }
    }

    pub fn handle_remove_click(&mut self) {
        if !self.is_open() {
            return;
        }
        if let Err(e) = self.remove() {
            error!("Failed to remove book from shopping list: {}", e);
        }
    }

    /// Writes the list through to storage and the remote copy. When the local
    /// write fails the in-memory list is restored to `previous`.
    fn persist(&mut self, previous: ShoppingList) -> Result<()> {
        if let Err(e) = self.list.save(self.store.as_ref(), &self.config.storage.books_data) {
            self.list = previous;
            return Err(e);
        }
        self.writer.write_user_data(self.list.books());
        Ok(())
    }

    fn set_controls(&mut self, next: ControlVisibility) -> Result<()> {
        if let ModalState::Open { controls, .. } = &mut self.state {
            *controls = next;
        }
        self.view.apply_controls(next)
    }

    fn teardown(&mut self) {
        if let Err(e) = self.view.set_visible(false) {
            warn!("Failed to hide book modal: {}", e);
        }
        self.listeners.dispose();
        if let Err(e) = self.view.clear_content() {
            warn!("Failed to clear book modal content: {}", e);
        }
        if let Err(e) = self.view.set_scroll_locked(false) {
            warn!("Failed to unlock page scroll: {}", e);
        }
        self.state = ModalState::Closed;
    }
}
