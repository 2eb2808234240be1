//! Main application state container

use std::sync::Arc;
use std::time::Duration;
use url::Url;

use tablebook_booking::{HttpBackend, Restaurant, TableSelection};
use tablebook_session::{
    profile_from_callback_url, sign_in_url, AuthSession, AuthState, DatabaseCookieStore,
    SessionStore, UserProfile,
};
use tablebook_storage::Database;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Application instance
///
/// Holds the one `AuthSession` for this instance and hands out booking
/// widgets bound to the configured restaurant.
pub struct App {
    config: Config,
    db: Database,
    auth: AuthSession,
    backend: Arc<HttpBackend>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Self::with_database(config, db)
    }

    pub fn with_database(config: Config, db: Database) -> Result<Self> {
        let backend = HttpBackend::with_timeout(
            &config.backend_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;

        Ok(Self::with_backend(config, db, backend))
    }

    /// Wire an already built backend client, e.g. one with custom proxy rules
    pub fn with_backend(config: Config, db: Database, backend: HttpBackend) -> Self {
        let cookies = Arc::new(DatabaseCookieStore::new(db.clone()));
        let auth = AuthSession::new(SessionStore::new(cookies));

        Self {
            config,
            db,
            auth,
            backend: Arc::new(backend),
        }
    }

    /// Drop stale cookies and restore the signed-in user, if any
    pub fn initialize(&self) -> Result<AuthState> {
        self.db.purge_expired_cookies()?;
        let state = self.auth.initialize();

        tracing::info!(logged_in = state.is_logged_in(), "App initialized");
        Ok(state)
    }

    // === Auth operations ===

    pub fn auth(&self) -> &AuthSession {
        &self.auth
    }

    pub fn sign_in_url(&self) -> Result<String> {
        if self.config.google_client_id.trim().is_empty() {
            return Err(CoreError::Config(
                "google client id is not configured".to_string(),
            ));
        }

        sign_in_url(&self.config.google_client_id, &self.config.redirect_uri)
            .map_err(|e| CoreError::Config(format!("invalid redirect uri: {}", e)))
    }

    /// Handle the identity provider redirect: on success the profile becomes
    /// the signed-in user, on any error no session is established.
    pub fn complete_sign_in(&self, callback_url: &str) -> Result<UserProfile> {
        let profile = profile_from_callback_url(callback_url)?;
        self.auth.login(profile.clone())?;
        Ok(profile)
    }

    pub fn logout(&self) -> Result<()> {
        Ok(self.auth.logout()?)
    }

    /// The dashboard's user, or `NotLoggedIn` for anonymous visitors
    pub fn dashboard_user(&self) -> Result<UserProfile> {
        self.auth.user().ok_or(CoreError::NotLoggedIn)
    }

    // === Booking operations ===

    /// A fresh, not yet activated booking widget. Only shown on the
    /// dashboard, so it needs a signed-in user.
    pub fn table_selection(&self) -> Result<TableSelection<HttpBackend>> {
        self.dashboard_user()?;
        Ok(TableSelection::new(
            Arc::clone(&self.backend),
            self.config.restaurant_id.clone(),
        ))
    }

    pub async fn restaurants(&self) -> Result<Vec<Restaurant>> {
        Ok(self.backend.fetch_restaurants().await?)
    }

    /// Shareable link to a table's page, printed as a QR card for diners
    pub fn table_link(&self, table_id: &str) -> Result<String> {
        let mut url = Url::parse(&self.config.frontend_url)
            .map_err(|e| CoreError::Config(format!("invalid frontend url: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| CoreError::Config("frontend url cannot be a base".to_string()))?
            .pop_if_empty()
            .push("table")
            .push(table_id);

        Ok(url.into())
    }
}

impl Clone for App {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            auth: self.auth.clone(),
            backend: Arc::clone(&self.backend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config() -> Config {
        let mut config = Config::new(PathBuf::from("/tmp/tablebook-test"));
        config.google_client_id = "client-123".to_string();
        config
    }

    fn callback_for(profile: &UserProfile) -> String {
        let mut url = Url::parse("http://localhost:3000/auth/callback").unwrap();
        url.query_pairs_mut()
            .append_pair("user", &serde_json::to_string(profile).unwrap());
        url.into()
    }

    fn ada() -> UserProfile {
        UserProfile::new("USER - 1", "Ada", "ada@example.com")
    }

    #[test]
    fn test_sign_in_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let app = App::with_database(test_config(), db).unwrap();
        assert_eq!(app.initialize().unwrap(), AuthState::Anonymous);
        assert!(matches!(app.dashboard_user(), Err(CoreError::NotLoggedIn)));

        let profile = app.complete_sign_in(&callback_for(&ada())).unwrap();
        assert_eq!(profile, ada());
        assert_eq!(app.dashboard_user().unwrap(), ada());

        app.logout().unwrap();
        assert!(!app.auth().is_logged_in());
    }

    #[test]
    fn test_session_survives_restart() {
        let db = Database::open_in_memory().unwrap();
        let first = App::with_database(test_config(), db.clone()).unwrap();
        first.complete_sign_in(&callback_for(&ada())).unwrap();

        let second = App::with_database(test_config(), db).unwrap();
        assert_eq!(
            second.initialize().unwrap(),
            AuthState::Authenticated(ada())
        );
    }

    #[test]
    fn test_callback_error_establishes_no_session() {
        let db = Database::open_in_memory().unwrap();
        let app = App::with_database(test_config(), db).unwrap();

        let err = app
            .complete_sign_in("http://localhost:3000/auth/callback?error=%22denied%22")
            .unwrap_err();
        assert_eq!(err.to_string(), "Authentication Error: denied");
        assert!(!app.auth().is_logged_in());
    }

    #[test]
    fn test_table_selection_requires_login() {
        let db = Database::open_in_memory().unwrap();
        let app = App::with_database(test_config(), db).unwrap();
        assert!(matches!(app.table_selection(), Err(CoreError::NotLoggedIn)));

        app.complete_sign_in(&callback_for(&ada())).unwrap();
        let selection = app.table_selection().unwrap();
        assert_eq!(selection.restaurant_id(), "tst1");
        assert!(selection.tables().is_empty());
    }

    #[test]
    fn test_sign_in_url_needs_client_id() {
        let db = Database::open_in_memory().unwrap();
        let mut config = test_config();
        config.google_client_id = String::new();
        let app = App::with_database(config, db).unwrap();

        assert!(matches!(app.sign_in_url(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_table_link() {
        let db = Database::open_in_memory().unwrap();
        let app = App::with_database(test_config(), db).unwrap();

        assert_eq!(
            app.table_link("7").unwrap(),
            "http://localhost:3000/table/7"
        );
        assert_eq!(
            app.table_link("a b").unwrap(),
            "http://localhost:3000/table/a%20b"
        );
    }
}
