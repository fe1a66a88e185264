use async_trait::async_trait;

use crate::error::Result;
use crate::models::book::Book;
use crate::modal::template::ModalTemplateData;
use crate::modal::ControlVisibility;

/// Looks up a book record by id
#[async_trait(?Send)]
pub trait BookFetcher {
    async fn get_book_by_id(&self, id: &str) -> Result<Book>;
}

/// Turns template data into modal markup
pub trait TemplateRenderer {
    fn render(&self, data: &ModalTemplateData) -> Result<String>;
}

/// Page-level loading indicator
pub trait Spinner {
    fn show(&self);
    fn hide(&self);
}

/// Remote copy of the user's shopping list. Writes are fire-and-forget; the
/// implementation reports its own failures.
pub trait UserDataWriter {
    fn write_user_data(&self, books: &[Book]);
}

/// The modal's DOM surface: container, backdrop, page scroll lock and the
/// controls inside the rendered content.
pub trait ModalView {
    /// Shows or hides both the modal container and the backdrop
    fn set_visible(&mut self, visible: bool) -> Result<()>;

    fn set_scroll_locked(&mut self, locked: bool) -> Result<()>;

    /// Replaces the modal content. Previously bound controls are released.
    fn set_content(&mut self, html: &str) -> Result<()>;

    fn clear_content(&mut self) -> Result<()>;

    /// Looks up the controls in the rendered content, failing if any is absent
    fn bind_controls(&mut self) -> Result<()>;

    /// Requires a successful `bind_controls` since the last content change
    fn apply_controls(&mut self, controls: ControlVisibility) -> Result<()>;
}
