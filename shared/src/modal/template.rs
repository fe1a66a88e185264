use serde::Serialize;

use crate::config::StoreImages;
use crate::models::book::{Book, PurchaseLinks};

/// Everything the modal template interpolates
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModalTemplateData {
    #[serde(flatten)]
    pub book: Book,
    #[serde(flatten)]
    pub links: PurchaseLinks,
    #[serde(flatten)]
    pub images: StoreImages,
}

impl ModalTemplateData {
    pub fn new(book: Book, links: PurchaseLinks, images: StoreImages) -> Self {
        Self { book, links, images }
    }
}
