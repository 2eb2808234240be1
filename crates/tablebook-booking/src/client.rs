//! Backend collaborator traits

use async_trait::async_trait;

use crate::error::{BookingError, FetchError};
use crate::table::Table;

#[async_trait]
pub trait AvailabilityClient: Send + Sync {
    /// Tables for one restaurant, in backend order
    async fn fetch_tables(&self, restaurant_id: &str) -> Result<Vec<Table>, FetchError>;
}

#[async_trait]
pub trait BookingClient: Send + Sync {
    /// Submit a booking. `Ok` only means the backend accepted it; no
    /// canonical table state comes back.
    ///
    /// Callers are expected to pick an available table and a non-empty time,
    /// neither is checked here.
    async fn book_table(
        &self,
        table_id: &str,
        restaurant_id: &str,
        time: &str,
    ) -> Result<(), BookingError>;
}
