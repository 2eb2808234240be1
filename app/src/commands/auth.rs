//! Sign-in, callback, logout and dashboard commands
use serde::{Deserialize, Serialize};
use tablebook_core::{AuthState, UserProfile};

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthInfo {
    pub is_logged_in: bool,
    pub user: Option<UserProfile>,
}

impl From<AuthState> for AuthInfo {
    fn from(state: AuthState) -> Self {
        Self {
            is_logged_in: state.is_logged_in(),
            user: state.user().cloned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardInfo {
    pub greeting: String,
    pub user: UserProfile,
}

pub fn get_auth_state(state: &AppState) -> CommandResult<AuthInfo> {
    match state.with_app(|app| Ok(app.auth().state())) {
        Ok(auth) => CommandResult::ok(auth.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn sign_in_url(state: &AppState) -> CommandResult<String> {
    match state.with_app(|app| app.sign_in_url()) {
        Ok(url) => CommandResult::ok(url),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Landing point of the identity provider redirect
pub fn complete_sign_in(state: &AppState, callback_url: String) -> CommandResult<AuthInfo> {
    match state.with_app(|app| {
        app.complete_sign_in(&callback_url)?;
        Ok(app.auth().state())
    }) {
        Ok(auth) => CommandResult::ok(auth.into()),
        Err(e) => {
            tracing::error!(error = %e, "Sign-in callback failed");
            CommandResult::err(e.to_string())
        }
    }
}

pub fn logout(state: &AppState) -> CommandResult<()> {
    match state.with_app(|app| app.logout()) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_dashboard(state: &AppState) -> CommandResult<DashboardInfo> {
    match state.with_app(|app| app.dashboard_user()) {
        Ok(user) => CommandResult::ok(DashboardInfo {
            greeting: format!("Welcome, {}!", user.name),
            user,
        }),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
