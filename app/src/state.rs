//! Application state management
use parking_lot::RwLock;
use std::sync::Arc;
use tablebook_core::{App, AuthState, Config, CoreError, Result};

/// Thread-safe application state wrapper
pub struct AppState {
    app: Arc<RwLock<Option<App>>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::from_app(App::new(config)?))
    }

    pub fn from_app(app: App) -> Self {
        Self {
            app: Arc::new(RwLock::new(Some(app))),
        }
    }

    pub fn initialize(&self) -> Result<AuthState> {
        self.with_app(|app| app.initialize())
    }

    pub fn with_app<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&App) -> Result<T>,
    {
        let guard = self.app.read();
        match guard.as_ref() {
            Some(app) => f(app),
            None => Err(CoreError::Config("application not initialized".to_string())),
        }
    }

    /// Owned handle for async commands, so no lock is held across an await
    pub fn app(&self) -> Result<App> {
        self.with_app(|app| Ok(app.clone()))
    }
}
