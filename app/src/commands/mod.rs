//! Commands
//!
//! These bridge the views to the core. Views hold no state of their own.

pub mod auth;
pub mod home;
pub mod tables;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> CommandResult<T> {
    /// Erase the payload type so different commands can share one output path
    pub fn into_json(self) -> CommandResult<serde_json::Value> {
        let data = match self.data.map(serde_json::to_value).transpose() {
            Ok(data) => data,
            Err(e) => return CommandResult::err(e.to_string()),
        };

        CommandResult {
            success: self.success,
            data,
            error: self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_json() {
        let ok = CommandResult::ok(vec![1, 2]).into_json();
        assert!(ok.success);
        assert_eq!(ok.data, Some(serde_json::json!([1, 2])));

        let err = CommandResult::<()>::err("boom".to_string()).into_json();
        assert!(!err.success);
        assert!(err.data.is_none());
        assert_eq!(err.error.as_deref(), Some("boom"));
    }
}
