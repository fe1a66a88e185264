use askama::Template;
use shared::modal::{ModalTemplateData, TemplateRenderer};
use shared::{Book, ModalError, Result, Store};

/// Renders the book details markup with the store links and shopping list
/// controls the modal binds to
#[derive(Debug, Clone, Copy, Default)]
pub struct BookModalTemplate;

impl TemplateRenderer for BookModalTemplate {
    fn render(&self, data: &ModalTemplateData) -> Result<String> {
        render_book_modal(data)
    }
}

struct StoreLink<'a> {
    name: &'static str,
    url: &'a str,
    src_x1: &'a str,
    src_x2: &'a str,
}

#[derive(Template)]
#[template(path = "book_modal.html")]
struct BookModalHtml<'a> {
    book: &'a Book,
    stores: [StoreLink<'a>; 3],
}

pub fn render_book_modal(data: &ModalTemplateData) -> Result<String> {
    let links = &data.links;
    let images = &data.images;

    let stores = [
        StoreLink {
            name: Store::Amazon.link_name(),
            url: &links.amazon_url,
            src_x1: &images.amazon_src_x1,
            src_x2: &images.amazon_src_x2,
        },
        StoreLink {
            name: Store::AppleBooks.link_name(),
            url: &links.apple_books_url,
            src_x1: &images.apple_books_src_x1,
            src_x2: &images.apple_books_src_x2,
        },
        StoreLink {
            name: Store::BarnesAndNoble.link_name(),
            url: &links.barnes_and_noble_url,
            src_x1: &images.barnes_and_noble_src_x1,
            src_x2: &images.barnes_and_noble_src_x2,
        },
    ];

    BookModalHtml {
        book: &data.book,
        stores,
    }
    .render()
    .map_err(|e| ModalError::Render(e.to_string()))
}
