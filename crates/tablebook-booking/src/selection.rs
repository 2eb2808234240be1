//! Table selection flow
//!
//! One activation of the booking widget: load the restaurant's tables, let
//! the user pick a time and click tables, and reflect accepted bookings
//! locally without waiting for fresh state from the backend.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use crate::client::{AvailabilityClient, BookingClient};
use crate::error::{BookingError, FetchError};
use crate::table::{Table, TableStatus};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch table statuses";
pub const BOOKING_FAILED_MESSAGE: &str = "Failed to book the table";

/// Snapshot of what the widget renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub restaurant_id: String,
    pub tables: Vec<Table>,
    pub selected_time: String,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct SelectionState {
    tables: Vec<Table>,
    selected_time: String,
    error: Option<String>,
}

pub struct TableSelection<C> {
    client: Arc<C>,
    restaurant_id: String,
    /// Never held across an await
    state: Arc<RwLock<SelectionState>>,
}

impl<C> TableSelection<C>
where
    C: AvailabilityClient + BookingClient,
{
    pub fn new(client: Arc<C>, restaurant_id: impl Into<String>) -> Self {
        Self {
            client,
            restaurant_id: restaurant_id.into(),
            state: Arc::new(RwLock::new(SelectionState::default())),
        }
    }

    pub fn restaurant_id(&self) -> &str {
        &self.restaurant_id
    }

    /// Load table statuses. A failure empties the list and sets the visible
    /// error; the only retry is activating again.
    pub async fn activate(&self) -> Result<(), FetchError> {
        self.state.write().error = None;

        match self.client.fetch_tables(&self.restaurant_id).await {
            Ok(tables) => {
                tracing::info!(
                    restaurant_id = %self.restaurant_id,
                    table_count = tables.len(),
                    "Loaded tables"
                );
                self.state.write().tables = tables;
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    restaurant_id = %self.restaurant_id,
                    error = %e,
                    "Error fetching table statuses"
                );
                let mut state = self.state.write();
                state.tables.clear();
                state.error = Some(FETCH_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Free-text time sent with the next booking. Not validated.
    pub fn set_selected_time(&self, time: impl Into<String>) {
        self.state.write().selected_time = time.into();
    }

    /// Submit a booking for `table_id` with the current time.
    ///
    /// On acceptance only that table flips, to `booked` when `select` is set
    /// and back to `available` otherwise. On failure the list is untouched
    /// and the visible error is set.
    ///
    /// Nothing here checks the table's status or that a time was chosen, and
    /// concurrent calls for the same table each send their own request.
    pub async fn select_table(&self, table_id: &str, select: bool) -> Result<(), BookingError> {
        let time = self.state.read().selected_time.clone();

        match self
            .client
            .book_table(table_id, &self.restaurant_id, &time)
            .await
        {
            Ok(()) => {
                let status = if select {
                    TableStatus::Booked
                } else {
                    TableStatus::Available
                };

                let mut state = self.state.write();
                for table in state.tables.iter_mut().filter(|t| t.id == table_id) {
                    table.status = status;
                }

                tracing::info!(table_id = %table_id, status = %status, "Updated table status");
                Ok(())
            }
            Err(e) => {
                tracing::error!(table_id = %table_id, error = %e, "Error booking table");
                self.state.write().error = Some(BOOKING_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// A click on a table card: selects when the card shows `available`,
    /// deselects otherwise. Unknown ids count as not available.
    pub async fn click_table(&self, table_id: &str) -> Result<(), BookingError> {
        let is_available = self
            .state
            .read()
            .tables
            .iter()
            .find(|t| t.id == table_id)
            .map(Table::is_available)
            .unwrap_or(false);

        self.select_table(table_id, is_available).await
    }

    pub fn tables(&self) -> Vec<Table> {
        self.state.read().tables.clone()
    }

    pub fn selected_time(&self) -> String {
        self.state.read().selected_time.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn view(&self) -> SelectionView {
        let state = self.state.read();
        SelectionView {
            restaurant_id: self.restaurant_id.clone(),
            tables: state.tables.clone(),
            selected_time: state.selected_time.clone(),
            error: state.error.clone(),
        }
    }
}

impl<C> Clone for TableSelection<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            restaurant_id: self.restaurant_id.clone(),
            state: Arc::clone(&self.state),
        }
    }
}
