//! Database connection and cookie operations

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::migrations::run_migrations;
use crate::Result;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode so a second CLI invocation can read while another writes
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Get a live cookie value. Expired cookies read as absent and are dropped.
    pub fn get_cookie(&self, name: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            let row: Option<(String, String)> = conn
                .query_row(
                    "SELECT value, expires_at FROM cookies WHERE name = ?1",
                    [name],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            let Some((value, expires_at)) = row else {
                return Ok(None);
            };

            // An unparsable expiry is treated like an expired cookie
            let live = DateTime::parse_from_rfc3339(&expires_at)
                .map(|dt| dt.with_timezone(&Utc) > Utc::now())
                .unwrap_or(false);

            if live {
                Ok(Some(value))
            } else {
                tracing::debug!(cookie = %name, "Dropping expired cookie");
                drop_stale_cookie(conn, name, &expires_at)?;
                Ok(None)
            }
        })
    }

    pub fn set_cookie(&self, name: &str, value: &str, expires_at: DateTime<Utc>) -> Result<()> {
        let expires_at = format_timestamp(expires_at);
        let updated_at = format_timestamp(Utc::now());

        self.with_connection(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO cookies (name, value, expires_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![name, value, expires_at, updated_at],
            )?;
            Ok(())
        })
    }

    /// Remove a cookie. Removing a missing cookie is not an error.
    pub fn remove_cookie(&self, name: &str) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute("DELETE FROM cookies WHERE name = ?1", [name])?;
            Ok(())
        })
    }

    /// Delete every expired cookie, returning how many were removed
    pub fn purge_expired_cookies(&self) -> Result<usize> {
        let now = format_timestamp(Utc::now());
        let removed = self.with_connection(|conn| {
            Ok(conn.execute("DELETE FROM cookies WHERE expires_at <= ?1", [now])?)
        })?;

        if removed > 0 {
            tracing::info!(removed, "Purged expired cookies");
        }

        Ok(removed)
    }
}

// Only the row that was read is deleted; a cookie rewritten by another
// process in the meantime carries a new expiry and survives.
fn drop_stale_cookie(conn: &Connection, name: &str, expires_at: &str) -> Result<usize> {
    Ok(conn.execute(
        "DELETE FROM cookies WHERE name = ?1 AND expires_at = ?2",
        [name, expires_at],
    )?)
}

// Fixed-width UTC so timestamps also order correctly as text in SQL
fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}
