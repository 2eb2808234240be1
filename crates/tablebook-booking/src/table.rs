//! Table, booking and restaurant data structures

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Available,
    Booked,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Available => "available",
            TableStatus::Booked => "booked",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, TableStatus::Available)
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub number: u32,
    pub status: TableStatus,
}

impl Table {
    pub fn new(id: impl Into<String>, number: u32, status: TableStatus) -> Self {
        Self {
            id: id.into(),
            number,
            status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}

/// `GET /tables?restaurantId=<id>` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesResponse {
    pub tables: Vec<Table>,
}

/// `POST /book-table` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub table_id: String,
    pub restaurant_id: String,
    pub time: String,
}

impl BookingRequest {
    pub fn new(table_id: &str, restaurant_id: &str, time: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            restaurant_id: restaurant_id.to_string(),
            time: time.to_string(),
        }
    }
}

/// Homepage listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// Backends disagree on whether ids are strings or integers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tables_response() {
        let body = r#"{"tables":[{"id":"1","number":1,"status":"available"}]}"#;
        let response: TablesResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.tables, vec![Table::new("1", 1, TableStatus::Available)]);
    }

    #[test]
    fn test_numeric_ids_are_normalized() {
        let body = r#"{"tables":[{"id":12,"number":3,"status":"booked"}]}"#;
        let response: TablesResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.tables[0].id, "12");
        assert_eq!(response.tables[0].status, TableStatus::Booked);
    }

    #[test]
    fn test_schema_mismatch_is_rejected() {
        // Missing `tables`
        assert!(serde_json::from_str::<TablesResponse>(r#"{"items":[]}"#).is_err());
        // Unknown status
        assert!(serde_json::from_str::<TablesResponse>(
            r#"{"tables":[{"id":"1","number":1,"status":"reserved"}]}"#
        )
        .is_err());
        // Missing number
        assert!(serde_json::from_str::<TablesResponse>(
            r#"{"tables":[{"id":"1","status":"available"}]}"#
        )
        .is_err());
    }

    #[test]
    fn test_booking_request_wire_format() {
        let request = BookingRequest::new("1", "tst1", "19:30");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"tableId": "1", "restaurantId": "tst1", "time": "19:30"})
        );
    }

    #[test]
    fn test_status_display_matches_wire_value() {
        for status in [TableStatus::Available, TableStatus::Booked] {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::json!(status.to_string())
            );
        }
    }
}
