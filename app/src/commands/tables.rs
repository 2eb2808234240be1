//! Booking widget commands
use tablebook_core::{SelectionView, FETCH_FAILED_MESSAGE};

use super::CommandResult;
use crate::state::AppState;

/// Open the booking widget and list the restaurant's tables
pub async fn load_tables(state: &AppState) -> CommandResult<SelectionView> {
    let selection = match state.with_app(|app| app.table_selection()) {
        Ok(selection) => selection,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    match selection.activate().await {
        Ok(()) => CommandResult::ok(selection.view()),
        Err(_) => CommandResult::err(
            selection
                .error()
                .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string()),
        ),
    }
}

/// Pick a time and click a table card, as the widget would.
///
/// The click books an available table and releases a booked one; the
/// widget does not stop either.
pub async fn book_table(
    state: &AppState,
    table_id: String,
    time: String,
) -> CommandResult<SelectionView> {
    let selection = match state.with_app(|app| app.table_selection()) {
        Ok(selection) => selection,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    if selection.activate().await.is_err() {
        return CommandResult::err(
            selection
                .error()
                .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string()),
        );
    }

    selection.set_selected_time(time);

    match selection.click_table(&table_id).await {
        Ok(()) => CommandResult::ok(selection.view()),
        Err(e) => CommandResult::err(selection.error().unwrap_or_else(|| e.to_string())),
    }
}
