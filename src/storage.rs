//! Persistence port over the browser's local storage.
//!
//! The session survives reloads through two fixed keys. Components never
//! touch storage directly; everything goes through [`SessionStore`], which
//! owns the keys and the JSON encoding, over a swappable [`StorageBackend`]
//! so the coordinator can be exercised off-browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{CartItem, User};

/// Key holding the serialized session user.
pub const USER_KEY: &str = "gaumeoshop_user";
/// Key holding the serialized cart lines.
pub const CART_KEY: &str = "gaumeoshop_cart";

/// Failures raised by the persistence layer. None of these are fatal:
/// callers keep the in-memory state as the authority and report the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available: {0}")]
    Unavailable(String),
    #[error("storage rejected the operation: {0}")]
    Backend(String),
    #[error("malformed record under '{key}': {detail}")]
    Malformed { key: &'static str, detail: String },
}

/// Plain string key/value store the session persists through.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// The browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("local storage is disabled".to_string()))
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }
}

/// In-memory backend for tests. Clones share one map, so a test can keep a
/// handle on the store its session writes to.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Typed reads and writes for the session's two records.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: StorageBackend> SessionStore<S> {
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The persisted user, if any. A malformed record is an error, not a
    /// missing user, so the caller can tell the difference.
    pub fn load_user(&self) -> Result<Option<User>, StorageError> {
        self.load_record(USER_KEY)
    }

    pub fn save_user(&self, user: &User) -> Result<(), StorageError> {
        self.save_record(USER_KEY, user)
    }

    pub fn clear_user(&self) -> Result<(), StorageError> {
        self.backend.remove(USER_KEY)
    }

    /// The persisted cart lines; an absent record is an empty cart.
    pub fn load_cart(&self) -> Result<Vec<CartItem>, StorageError> {
        Ok(self
            .load_record::<Vec<CartItem>>(CART_KEY)?
            .unwrap_or_default())
    }

    pub fn save_cart(&self, items: &[CartItem]) -> Result<(), StorageError> {
        self.save_record(CART_KEY, items)
    }

    pub fn clear_cart(&self) -> Result<(), StorageError> {
        self.backend.remove(CART_KEY)
    }

    fn load_record<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, StorageError> {
        match self.backend.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| StorageError::Malformed {
                    key,
                    detail: err.to_string(),
                }),
            None => Ok(None),
        }
    }

    fn save_record<T: Serialize + ?Sized>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|err| StorageError::Malformed {
            key,
            detail: err.to_string(),
        })?;
        self.backend.set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PetType, Product, Role};

    fn store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
        let backend = MemoryStorage::new();
        (SessionStore::new(backend.clone()), backend)
    }

    fn shopper() -> User {
        User {
            id: 3,
            email: "mai@example.com".to_string(),
            name: "Mai".to_string(),
            role: Role::User,
        }
    }

    fn cart_line() -> CartItem {
        CartItem {
            product: Product {
                id: 11,
                name: "Feather Teaser Wand".to_string(),
                category: Category::Toys,
                pet_type: PetType::Cat,
                price: 6.5,
                image: String::new(),
                description: String::new(),
                stock: 58,
            },
            quantity: 2,
        }
    }

    #[test]
    fn test_memory_backend_round_trips() {
        let backend = MemoryStorage::new();
        assert_eq!(backend.get("k").unwrap(), None);
        backend.set("k", "v").unwrap();
        assert_eq!(backend.get("k").unwrap(), Some("v".to_string()));
        backend.remove("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
    }

    #[test]
    fn test_memory_backend_clones_share_entries() {
        let backend = MemoryStorage::new();
        let other = backend.clone();
        backend.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_user_record_round_trips() {
        let (store, _) = store();
        assert_eq!(store.load_user().unwrap(), None);
        store.save_user(&shopper()).unwrap();
        assert_eq!(store.load_user().unwrap(), Some(shopper()));
        store.clear_user().unwrap();
        assert_eq!(store.load_user().unwrap(), None);
    }

    #[test]
    fn test_cart_record_round_trips() {
        let (store, backend) = store();
        assert!(store.load_cart().unwrap().is_empty());
        store.save_cart(&[cart_line()]).unwrap();
        assert_eq!(store.load_cart().unwrap(), vec![cart_line()]);
        store.clear_cart().unwrap();
        assert_eq!(backend.get(CART_KEY).unwrap(), None);
    }

    #[test]
    fn test_records_use_the_fixed_keys() {
        let (store, backend) = store();
        store.save_user(&shopper()).unwrap();
        store.save_cart(&[cart_line()]).unwrap();
        assert!(backend.get("gaumeoshop_user").unwrap().is_some());
        assert!(backend.get("gaumeoshop_cart").unwrap().is_some());
    }

    #[test]
    fn test_malformed_record_reports_its_key() {
        let (store, backend) = store();
        backend.set(USER_KEY, "{not json").unwrap();
        let err = store.load_user().unwrap_err();
        assert!(matches!(err, StorageError::Malformed { key, .. } if key == USER_KEY));
    }

    #[test]
    fn test_wrong_shape_is_malformed_not_missing() {
        let (store, backend) = store();
        backend.set(CART_KEY, "42").unwrap();
        assert!(store.load_cart().is_err());
    }
}
