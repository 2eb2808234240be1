//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the cookie jar database
    pub database_path: PathBuf,
    /// Booking backend base URL
    pub backend_url: String,
    /// OAuth client id registered with the identity provider
    pub google_client_id: String,
    /// Where the identity provider sends the authorization code
    pub redirect_uri: String,
    /// Public origin of this frontend, used for shareable table links
    pub frontend_url: String,
    /// Restaurant whose tables the booking widget shows
    pub restaurant_id: String,
    /// Backend request timeout
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("tablebook.db"),
            backend_url: "http://localhost:8000".to_string(),
            google_client_id: String::new(),
            redirect_uri: "http://localhost:8000/auth/google".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            restaurant_id: "tst1".to_string(),
            request_timeout_secs: tablebook_booking::DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("tablebook"))
            .unwrap_or_else(|| PathBuf::from(".tablebook"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
