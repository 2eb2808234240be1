//! Tablebook Session
//!
//! - The signed-in user lives in a single `user` cookie (JSON, 1 day TTL)
//! - `AuthSession` is the only writer of that cookie
//! - Cookie persistence sits behind `CookieStore`, so the jar can be swapped
//! - Identity provider redirects are turned into a `UserProfile` here

mod context;
mod cookie;
mod error;
mod oauth;
mod profile;
mod store;

pub use context::{AuthSession, AuthState};
pub use cookie::{CookieStore, DatabaseCookieStore, MemoryCookieStore};
pub use error::{AuthCallbackError, SessionError};
pub use oauth::{profile_from_callback_query, profile_from_callback_url, sign_in_url};
pub use profile::UserProfile;
pub use store::{SessionStore, DEFAULT_TTL_DAYS, SESSION_COOKIE};

pub type Result<T> = std::result::Result<T, SessionError>;
