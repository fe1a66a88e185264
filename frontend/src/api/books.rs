use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use shared::modal::BookFetcher;
use shared::{Book, ModalError};
use validator::Validate;

use crate::api::api_url;
use crate::config::Config;

pub fn book_url(id: &str) -> String {
    format!("{}/{}", api_url(Config::books_path()), urlencoding::encode(id))
}

pub async fn get_book_by_id(id: &str) -> Result<Book, String> {
    debug!("Fetching book with ID: {}", id);

    let response = Request::get(&book_url(id))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch book: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Book service responded with {} {} for {}",
            response.status(),
            response.status_text(),
            id
        ));
    }

    let book = response
        .json::<Book>()
        .await
        .map_err(|e| format!("Failed to parse book response: {}", e))?;

    debug!("Successfully fetched book: {}", book.title);
    Ok(book)
}

/// Book service client used by the modal
pub struct HttpBookFetcher;

#[async_trait(?Send)]
impl BookFetcher for HttpBookFetcher {
    async fn get_book_by_id(&self, id: &str) -> shared::Result<Book> {
        let book = get_book_by_id(id).await.map_err(ModalError::Fetch)?;
        book.validate()?;
        Ok(book)
    }
}
