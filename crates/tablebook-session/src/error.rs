//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] tablebook_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while handling the identity provider redirect.
/// None of these establish a session.
#[derive(Error, Debug)]
pub enum AuthCallbackError {
    #[error("Authentication Error: {0}")]
    Provider(String),

    #[error("Failed to parse user data: {0}")]
    InvalidProfile(#[source] serde_json::Error),

    #[error("Callback carried neither a user nor an error")]
    MissingParameters,

    #[error("Invalid callback URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
