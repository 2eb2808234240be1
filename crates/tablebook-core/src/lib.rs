//! Tablebook Core
//!
//! Central coordination layer: one `App` per running instance owns the
//! cookie jar, the signed-in session and the backend client. Views go
//! through it and never reach into storage directly.

mod app;
mod config;
mod error;

pub use app::App;
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use tablebook_booking::{
    AvailabilityClient, BookingClient, BookingError, FetchError, HttpBackend, Restaurant,
    SelectionView, Table, TableSelection, TableStatus, BOOKING_FAILED_MESSAGE,
    FETCH_FAILED_MESSAGE,
};
pub use tablebook_session::{AuthCallbackError, AuthSession, AuthState, SessionError, UserProfile};
pub use tablebook_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so command output on stdout stays machine-readable
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
