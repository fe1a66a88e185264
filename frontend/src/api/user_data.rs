use log::{debug, error};
use shared::modal::UserDataWriter;
use shared::Book;
use wasm_bindgen_futures::spawn_local;

use crate::api::api_url;
use crate::api::utils::authenticated_put;
use crate::config::Config;

/// Replaces the remote shopping list with `books`
pub async fn put_shopping_list(books: &[Book]) -> Result<(), String> {
    debug!("Syncing shopping list with {} books", books.len());

    let response = authenticated_put(&api_url(Config::user_data_path()))
        .json(books)
        .map_err(|e| format!("Failed to serialize shopping list: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to sync shopping list: {}", e))?;

    if !response.ok() {
        return Err(format!("User data service responded with {}", response.status()));
    }

    debug!("Shopping list synced");
    Ok(())
}

/// Pushes every shopping list change to the user data service in the
/// background
pub struct RemoteUserDataWriter;

impl UserDataWriter for RemoteUserDataWriter {
    fn write_user_data(&self, books: &[Book]) {
        let books = books.to_vec();
        spawn_local(async move {
            if let Err(e) = put_shopping_list(&books).await {
                error!("Shopping list sync failed: {}", e);
            }
        });
    }
}
