use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::Mutex as AsyncMutex;

use crate::client::errors::ClientError;

/// Storage key for the cached admin profile JSON blob
pub(crate) const KEY_PROFILE: &str = "profile";
/// Storage key for the backend bearer token
pub(crate) const KEY_TOKEN: &str = "token";
/// Literal value some storage layers write for an absent JS value.
/// Treated as corruption and purged.
pub(crate) const CORRUPT_SENTINEL: &str = "undefined";

/// Persistent key/value storage backing the client session state
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError>;
    async fn put(&self, key: &str, value: &str) -> Result<(), ClientError>;
    async fn remove(&self, key: &str) -> Result<(), ClientError>;
}

/// In-memory StateStore for tests and single-process embedding
#[derive(Default)]
pub struct MemoryStateStore {
    entries: AsyncMutex<HashMap<String, String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

/// Cookie writes the client performs to mirror the session cookie.
///
/// Writes are synchronous, matching a browser's document-cookie model.
pub trait CookieJar: Send + Sync {
    /// Set a cookie. A non-positive `max_age` deletes it.
    fn set(&self, name: &str, value: &str, max_age: i64);
    fn get(&self, name: &str) -> Option<String>;
    fn clear(&self, name: &str);
}

/// In-memory CookieJar for tests and single-process embedding
#[derive(Default)]
pub struct MemoryCookieJar {
    cookies: Mutex<HashMap<String, String>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.cookies.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CookieJar for MemoryCookieJar {
    fn set(&self, name: &str, value: &str, max_age: i64) {
        if max_age <= 0 {
            self.lock().remove(name);
        } else {
            self.lock().insert(name.to_string(), value.to_string());
        }
    }

    fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    fn clear(&self, name: &str) {
        self.lock().remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_store_put_get_remove() {
        // Given an empty store
        let store = MemoryStateStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        // When a value is written
        store.put("k", "v").await.unwrap();

        // Then it can be read back and removed
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_state_store_overwrite() {
        let store = MemoryStateStore::new();
        store.put("k", "first").await.unwrap();
        store.put("k", "second").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_cookie_jar_set_get_clear() {
        let jar = MemoryCookieJar::new();
        assert_eq!(jar.get("session"), None);

        jar.set("session", "tok", 3600);
        assert_eq!(jar.get("session"), Some("tok".to_string()));

        jar.clear("session");
        assert_eq!(jar.get("session"), None);
    }

    #[test]
    fn test_cookie_jar_expiry_deletes() {
        let jar = MemoryCookieJar::new();
        jar.set("session", "tok", 3600);
        jar.set("session", "", -86400);
        assert_eq!(jar.get("session"), None);
    }
}
