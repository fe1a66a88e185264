use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::{ModalError, Result};

/// A retailer link from the book service's `buy_links` list
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct BuyLink {
    #[validate(length(min = 1, message = "Store name is required"))]
    pub name: String,
    pub url: String,
}

impl BuyLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Retailers the book modal links to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Store {
    Amazon,
    AppleBooks,
    BarnesAndNoble,
}

impl Store {
    pub const ALL: [Store; 3] = [Store::Amazon, Store::AppleBooks, Store::BarnesAndNoble];

    /// Name of the store as it appears in `buy_links`
    pub fn link_name(self) -> &'static str {
        match self {
            Store::Amazon => "Amazon",
            Store::AppleBooks => "Apple Books",
            Store::BarnesAndNoble => "Barnes and Noble",
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.link_name())
    }
}

/// Resolved retailer URLs for one book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseLinks {
    pub amazon_url: String,
    pub apple_books_url: String,
    pub barnes_and_noble_url: String,
}

impl PurchaseLinks {
    pub fn urls(&self) -> [&str; 3] {
        [
            &self.amazon_url,
            &self.apple_books_url,
            &self.barnes_and_noble_url,
        ]
    }
}

/// A book record as returned by the book service.
///
/// Fields the modal does not read are kept in `extra` so a book written to
/// local storage carries everything the service sent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Book {
    /// Book's ID
    #[serde(rename = "_id")]
    #[validate(length(min = 1, message = "Book id is required"))]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub description: String,

    /// Cover image URL
    #[serde(default)]
    pub book_image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Bestseller list the book was fetched from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,

    #[serde(default)]
    #[validate]
    pub buy_links: Vec<BuyLink>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            description: String::new(),
            book_image: String::new(),
            publisher: None,
            list_name: None,
            buy_links: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_buy_link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.buy_links.push(BuyLink::new(name, url));
        self
    }

    /// URL of the first buy link for `store`
    pub fn buy_link(&self, store: Store) -> Result<&str> {
        self.buy_links
            .iter()
            .find(|link| link.name == store.link_name())
            .map(|link| link.url.as_str())
            .ok_or(ModalError::MissingBuyLink(store))
    }

    /// Resolves the Amazon, Apple Books and Barnes and Noble URLs, failing on
    /// the first store that has no link.
    pub fn purchase_links(&self) -> Result<PurchaseLinks> {
        Ok(PurchaseLinks {
            amazon_url: self.buy_link(Store::Amazon)?.to_string(),
            apple_books_url: self.buy_link(Store::AppleBooks)?.to_string(),
            barnes_and_noble_url: self.buy_link(Store::BarnesAndNoble)?.to_string(),
        })
    }
}
