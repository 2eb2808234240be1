//! Homepage and customer page commands
use tablebook_core::Restaurant;

use super::CommandResult;
use crate::state::AppState;

pub async fn list_restaurants(state: &AppState) -> CommandResult<Vec<Restaurant>> {
    let app = match state.app() {
        Ok(app) => app,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    match app.restaurants().await {
        Ok(restaurants) => CommandResult::ok(restaurants),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load restaurants");
            CommandResult::err(e.to_string())
        }
    }
}

/// Link encoded into a table's printable QR card
pub fn table_link(state: &AppState, table_id: String) -> CommandResult<String> {
    match state.with_app(|app| app.table_link(&table_id)) {
        Ok(link) => CommandResult::ok(link),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
