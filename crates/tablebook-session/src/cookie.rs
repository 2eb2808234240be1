//! Cookie persistence backends

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use tablebook_storage::Database;

use crate::Result;

/// Key-value cookie jar with absolute expiry.
///
/// `get` must never return a value past its expiry, and `remove` of a
/// missing cookie succeeds.
pub trait CookieStore: Send + Sync {
    fn get(&self, name: &str) -> Result<Option<String>>;
    fn set(&self, name: &str, value: &str, expires_at: DateTime<Utc>) -> Result<()>;
    fn remove(&self, name: &str) -> Result<()>;
}

/// Cookie jar persisted in SQLite, survives restarts
#[derive(Clone)]
pub struct DatabaseCookieStore {
    db: Database,
}

impl DatabaseCookieStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl CookieStore for DatabaseCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.db.get_cookie(name)?)
    }

    fn set(&self, name: &str, value: &str, expires_at: DateTime<Utc>) -> Result<()> {
        Ok(self.db.set_cookie(name, value, expires_at)?)
    }

    fn remove(&self, name: &str) -> Result<()> {
        Ok(self.db.remove_cookie(name)?)
    }
}

/// Process-local cookie jar
#[derive(Clone, Default)]
pub struct MemoryCookieStore {
    cookies: Arc<RwLock<HashMap<String, (String, DateTime<Utc>)>>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        let now = Utc::now();
        let mut cookies = self.cookies.write();

        match cookies.get(name) {
            Some((value, expires_at)) if *expires_at > now => Ok(Some(value.clone())),
            Some(_) => {
                cookies.remove(name);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&self, name: &str, value: &str, expires_at: DateTime<Utc>) -> Result<()> {
        self.cookies
            .write()
            .insert(name.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.cookies.write().remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn exercise(store: &dyn CookieStore) {
        let tomorrow = Utc::now() + Duration::days(1);

        assert!(store.get("user").unwrap().is_none());

        store.set("user", "v1", tomorrow).unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("v1"));

        store.set("user", "stale", Utc::now() - Duration::seconds(1)).unwrap();
        assert!(store.get("user").unwrap().is_none());

        store.remove("user").unwrap();
        store.remove("user").unwrap();
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryCookieStore::new());
    }

    #[test]
    fn test_database_store() {
        let db = Database::open_in_memory().unwrap();
        exercise(&DatabaseCookieStore::new(db));
    }
}
