use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// String key/value storage with the shape of the browser's `localStorage`
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Reads and deserializes a JSON value. Absent keys and stored `null` both
/// yield `None`.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get_item(key)? {
        Some(raw) => Ok(serde_json::from_str::<Option<T>>(&raw)?),
        None => Ok(None),
    }
}

pub fn write_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

/// In-process store, used where no browser storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModalError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_json_absent_and_null() {
        let store = MemoryStore::new().with_item("flag", "null");

        assert_eq!(read_json::<bool>(&store, "missing").unwrap(), None);
        assert_eq!(read_json::<bool>(&store, "flag").unwrap(), None);
    }

    #[test]
    fn test_write_then_read_json() {
        let store = MemoryStore::new();
        write_json(&store, "numbers", &[1, 2, 3]).unwrap();

        assert_eq!(store.raw("numbers").as_deref(), Some("[1,2,3]"));
        assert_eq!(read_json::<Vec<i32>>(&store, "numbers").unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_read_json_reports_corrupt_value() {
        let store = MemoryStore::new().with_item("books-data", "{not json");
        let result = read_json::<Vec<i32>>(&store, "books-data");

        assert!(matches!(result, Err(ModalError::Conversion(_))));
    }
}
