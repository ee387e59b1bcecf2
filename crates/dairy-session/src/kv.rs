//! Key-Value store abstraction with typed JSON values.

use crate::SessionError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;

/// A string-to-string store scoped to one browser session.
pub trait KeyValueStore {
    /// Read a raw value. Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a raw value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove a key. Removing a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), SessionError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, SessionError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-process store; its contents end with the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), SessionError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Typed view over a [`KeyValueStore`]; values are stored as JSON text.
///
/// # Example
///
/// ```
/// use dairy_session::{Cache, MemoryStore};
///
/// let mut cache = Cache::new(MemoryStore::new());
/// cache.set("isAdmin", &true).unwrap();
/// assert_eq!(cache.get::<bool>("isAdmin").unwrap(), Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// text is not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        match self.store.get(key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), SessionError> {
        let text = serde_json::to_string(value)?;
        self.store.set(key, &text)
    }

    /// Delete a key from the cache.
    pub fn delete(&mut self, key: &str) -> Result<(), SessionError> {
        self.store.delete(key)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, SessionError> {
        self.store.exists(key)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        theme: String,
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert!(store.exists("k").unwrap());

        store.delete("k").unwrap();
        store.delete("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_cache_stores_json_text() {
        let mut cache = Cache::new(MemoryStore::new());
        cache
            .set("prefs", &Prefs { theme: "dark".to_string() })
            .unwrap();

        assert_eq!(
            cache.store().get("prefs").unwrap().as_deref(),
            Some(r#"{"theme":"dark"}"#)
        );
        assert_eq!(
            cache.get::<Prefs>("prefs").unwrap(),
            Some(Prefs { theme: "dark".to_string() })
        );
    }

    #[test]
    fn test_cache_rejects_malformed_value() {
        let mut store = MemoryStore::new();
        store.set("prefs", "not json").unwrap();
        let cache = Cache::new(store);

        assert!(matches!(
            cache.get::<Prefs>("prefs"),
            Err(SessionError::SerializeError(_))
        ));
    }
}
