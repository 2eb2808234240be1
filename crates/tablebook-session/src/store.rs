//! Session store: the `user` cookie holding a serialized profile

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::cookie::CookieStore;
use crate::profile::UserProfile;
use crate::Result;

/// Cookie key for the signed-in user
pub const SESSION_COOKIE: &str = "user";

/// Lifetime of the session cookie
pub const DEFAULT_TTL_DAYS: u32 = 1;

pub struct SessionStore {
    cookies: Arc<dyn CookieStore>,
}

impl SessionStore {
    pub fn new(cookies: Arc<dyn CookieStore>) -> Self {
        Self { cookies }
    }

    /// Read the stored profile.
    ///
    /// Never fails: a missing cookie, unreadable jar or malformed JSON all
    /// read as "no profile".
    pub fn read(&self) -> Option<UserProfile> {
        let raw = match self.cookies.get(SESSION_COOKIE) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session cookie");
                return None;
            }
        };

        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed session cookie");
                None
            }
        }
    }

    /// Persist the profile with an expiry `ttl_days` from now
    pub fn write(&self, profile: &UserProfile, ttl_days: u32) -> Result<()> {
        let value = serde_json::to_string(profile)?;
        let expires_at = Utc::now() + Duration::days(i64::from(ttl_days));

        self.cookies.set(SESSION_COOKIE, &value, expires_at)?;

        tracing::debug!(user_id = %profile.id, %expires_at, "Wrote session cookie");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.cookies.remove(SESSION_COOKIE)
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            cookies: Arc::clone(&self.cookies),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookie::MemoryCookieStore;

    fn store_with_jar() -> (SessionStore, MemoryCookieStore) {
        let jar = MemoryCookieStore::new();
        (SessionStore::new(Arc::new(jar.clone())), jar)
    }

    #[test]
    fn test_write_then_read() {
        let (store, _) = store_with_jar();
        let profile = UserProfile::new("1", "Ada", "ada@example.com")
            .with_picture("https://example.com/ada.png");

        store.write(&profile, DEFAULT_TTL_DAYS).unwrap();
        assert_eq!(store.read(), Some(profile));
    }

    #[test]
    fn test_malformed_cookie_reads_as_none() {
        let (store, jar) = store_with_jar();
        let tomorrow = Utc::now() + Duration::days(1);

        let malformed = [
            "",
            "not json",
            "{",
            "null",
            "[]",
            "42",
            "\"user\"",
            r#"{"id":1,"name":"Ada","email":"ada@example.com"}"#,
            r#"{"name":"Ada","email":"ada@example.com"}"#,
            "{\"id\":\"1\",\"name\":\"Ada\",\"email\":\"ada@example.com\"",
        ];

        for raw in malformed {
            jar.set(SESSION_COOKIE, raw, tomorrow).unwrap();
            assert_eq!(store.read(), None, "cookie {:?} should read as none", raw);
        }
    }

    #[test]
    fn test_unreadable_jar_reads_as_none() {
        use crate::cookie::DatabaseCookieStore;
        use tablebook_storage::Database;

        let db = Database::open_in_memory().unwrap();
        let store = SessionStore::new(Arc::new(DatabaseCookieStore::new(db.clone())));
        store
            .write(&UserProfile::new("1", "Ada", "ada@example.com"), 1)
            .unwrap();

        db.with_connection(|conn| {
            conn.execute("DROP TABLE cookies", [])?;
            Ok(())
        })
        .unwrap();

        assert_eq!(store.read(), None);
    }

    #[test]
    fn test_zero_ttl_is_already_expired() {
        let (store, _) = store_with_jar();
        store
            .write(&UserProfile::new("1", "Ada", "ada@example.com"), 0)
            .unwrap();

        assert_eq!(store.read(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (store, _) = store_with_jar();
        store
            .write(&UserProfile::new("1", "Ada", "ada@example.com"), 1)
            .unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.read(), None);
    }
}
