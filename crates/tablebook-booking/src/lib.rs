//! Tablebook Booking
//!
//! - `AvailabilityClient` lists a restaurant's tables
//! - `BookingClient` submits a single booking request
//! - `TableSelection` drives both for one visit to the booking widget,
//!   updating table status optimistically once the backend accepts

mod client;
mod error;
mod http;
mod selection;
mod table;

pub use client::{AvailabilityClient, BookingClient};
pub use error::{BookingError, FetchError};
pub use http::{HttpBackend, DEFAULT_TIMEOUT_SECS};
pub use selection::{SelectionView, TableSelection, BOOKING_FAILED_MESSAGE, FETCH_FAILED_MESSAGE};
pub use table::{BookingRequest, Restaurant, Table, TableStatus, TablesResponse};
