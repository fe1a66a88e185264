pub mod models {
    pub mod book;
}

pub mod config;
pub mod error;
pub mod listeners;
pub mod modal;
pub mod session;
pub mod shopping_list;
pub mod storage;

// Re-export commonly used items
pub use config::ModalConfig;
pub use error::{ModalError, Result};
pub use models::book::{Book, BuyLink, PurchaseLinks, Store};
pub use shopping_list::ShoppingList;
pub use storage::{KeyValueStore, MemoryStore};
