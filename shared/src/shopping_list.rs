use log::{debug, warn};

use crate::error::{ModalError, Result};
use crate::models::book::Book;
use crate::storage::{read_json, write_json, KeyValueStore};

/// Books the user has marked for purchase, in the order they were added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    books: Vec<Book>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Loads the list stored under `key`. When nothing is stored yet, or the
    /// stored value cannot be read as a list of books, the key is reset to an
    /// empty array.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Result<Self> {
        match read_json::<Vec<Book>>(store, key) {
            Ok(Some(books)) => {
                debug!("Loaded {} books from '{}'", books.len(), key);
                Ok(Self { books })
            }
            Ok(None) => {
                debug!("No shopping list under '{}', initializing it", key);
                Self::reset(store, key)
            }
            Err(ModalError::Conversion(e)) => {
                warn!("Discarding unreadable shopping list under '{}': {}", key, e);
                Self::reset(store, key)
            }
            Err(e) => Err(e),
        }
    }

    fn reset(store: &dyn KeyValueStore, key: &str) -> Result<Self> {
        let list = Self::new();
        list.save(store, key)?;
        Ok(list)
    }

    pub fn save(&self, store: &dyn KeyValueStore, key: &str) -> Result<()> {
        write_json(store, key, &self.books)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes the first book with `id`
    pub fn remove(&mut self, id: &str) -> Option<Book> {
        let index = self.position(id)?;
        Some(self.books.remove(index))
    }

    /// Removes every book with `id`, returning how many were dropped
    pub fn remove_all(&mut self, id: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.id != id);
        before - self.books.len()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_load_initializes_missing_key() {
        let store = MemoryStore::new();
        let list = ShoppingList::load(&store, "books-data").unwrap();

        assert!(list.is_empty());
        assert_eq!(store.raw("books-data").as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_initializes_null_value() {
        let store = MemoryStore::new().with_item("books-data", "null");
        let list = ShoppingList::load(&store, "books-data").unwrap();

        assert!(list.is_empty());
        assert_eq!(store.raw("books-data").as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_existing_books_in_order() {
        let store = MemoryStore::new().with_item(
            "books-data",
            r#"[{"_id":"a","title":"First"},{"_id":"b","title":"Second"}]"#,
        );
        let list = ShoppingList::load(&store, "books-data").unwrap();

        let ids: Vec<&str> = list.iter().map(|book| book.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(list.position("b"), Some(1));
    }

    #[test]
    fn test_remove_takes_first_match_only() {
        let mut list = ShoppingList::from_books(vec![
            Book::new("a", "First", ""),
            Book::new("b", "Second", ""),
            Book::new("a", "First again", ""),
        ]);

        let removed = list.remove("a").unwrap();
        assert_eq!(removed.title, "First");
        assert_eq!(list.len(), 2);
        assert!(list.contains("a"));
        assert_eq!(list.remove("zzz"), None);
    }

    #[rstest]
    #[case::invalid_json("{not json")]
    #[case::book_without_id(r#"[{"title":"no id"}]"#)]
    #[case::not_a_list(r#"{"_id":"a"}"#)]
    fn test_load_resets_unreadable_value(#[case] raw: &str) {
        let store = MemoryStore::new().with_item("books-data", raw);
        let list = ShoppingList::load(&store, "books-data").unwrap();

        assert!(list.is_empty());
        assert_eq!(store.raw("books-data").as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_all_drops_every_copy() {
        let mut list = ShoppingList::from_books(vec![
            Book::new("a", "First", ""),
            Book::new("b", "Second", ""),
            Book::new("a", "First again", ""),
        ]);

        assert_eq!(list.remove_all("a"), 2);
        assert!(!list.contains("a"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.remove_all("a"), 0);
    }

    #[test]
    fn test_save_writes_full_list() {
        let store = MemoryStore::new();
        let mut list = ShoppingList::new();
        list.push(Book::new("a", "First", "Someone"));
        list.save(&store, "books-data").unwrap();

        let reloaded = ShoppingList::load(&store, "books-data").unwrap();
        assert_eq!(reloaded, list);
    }
}
