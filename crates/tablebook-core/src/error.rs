//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] tablebook_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] tablebook_session::SessionError),

    #[error("{0}")]
    AuthCallback(#[from] tablebook_session::AuthCallbackError),

    #[error("{0}")]
    Fetch(#[from] tablebook_booking::FetchError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Please log in to access the dashboard.")]
    NotLoggedIn,
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
