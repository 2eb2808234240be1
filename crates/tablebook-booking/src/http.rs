//! HTTP client for the booking backend

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::client::{AvailabilityClient, BookingClient};
use crate::error::{BookingError, FetchError};
use crate::table::{BookingRequest, Restaurant, Table, TablesResponse};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Talks to the booking backend over HTTP.
///
/// Endpoints:
/// - `GET  {base}/tables?restaurantId=<id>` → `{ "tables": [...] }`
/// - `POST {base}/book-table` with `{tableId, restaurantId, time}`
/// - `GET  {base}/api/restaurants` → `[{id, name, description}]`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, base_url)
    }

    /// Use a preconfigured reqwest client (proxy, TLS roots, ...)
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, FetchError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}/{}", self.base_url, path.trim_start_matches('/')))
    }

    /// Restaurants shown on the homepage
    pub async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, FetchError> {
        let url = self.endpoint("api/restaurants")?;
        let body = self.get_json_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_json_text(&self, url: Url) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl AvailabilityClient for HttpBackend {
    async fn fetch_tables(&self, restaurant_id: &str) -> Result<Vec<Table>, FetchError> {
        let mut url = self.endpoint("tables")?;
        url.query_pairs_mut()
            .append_pair("restaurantId", restaurant_id);

        let body = self.get_json_text(url).await?;
        let response: TablesResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            restaurant_id = %restaurant_id,
            table_count = response.tables.len(),
            "Fetched table statuses"
        );

        Ok(response.tables)
    }
}

#[async_trait]
impl BookingClient for HttpBackend {
    async fn book_table(
        &self,
        table_id: &str,
        restaurant_id: &str,
        time: &str,
    ) -> Result<(), BookingError> {
        let url = self.endpoint("book-table")?;
        let request = BookingRequest::new(table_id, restaurant_id, time);

        let response = self.client.post(url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BookingError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(
            table_id = %table_id,
            restaurant_id = %restaurant_id,
            time = %time,
            "Booking accepted"
        );

        Ok(())
    }
}
