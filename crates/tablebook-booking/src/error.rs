//! Backend client error types

use thiserror::Error;

/// Reading table availability (or the restaurant list) failed
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Submitting a booking failed
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Booking rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
