//! Auth session context
//!
//! ```text
//! Anonymous ──login──▶ Authenticated
//!     ▲                    │  ▲
//!     └──────logout────────┘  └─login (replace profile)
//! ```

use parking_lot::RwLock;
use std::sync::Arc;

use crate::profile::UserProfile;
use crate::store::{SessionStore, DEFAULT_TTL_DAYS};
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(UserProfile),
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            AuthState::Authenticated(profile) => Some(profile),
            AuthState::Anonymous => None,
        }
    }
}

/// Who is signed in, for the lifetime of one application instance.
///
/// Views observe `is_logged_in`/`user` and call `login`/`logout`; nothing
/// else touches the session cookie.
pub struct AuthSession {
    store: SessionStore,
    state: Arc<RwLock<AuthState>>,
}

impl AuthSession {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(AuthState::Anonymous)),
        }
    }

    /// Restore state from the session cookie, if one is present and valid
    pub fn initialize(&self) -> AuthState {
        let mut state = self.state.write();
        let restored = match self.store.read() {
            Some(profile) => {
                tracing::info!(user_id = %profile.id, "Restored session from cookie");
                AuthState::Authenticated(profile)
            }
            None => AuthState::Anonymous,
        };

        *state = restored.clone();
        restored
    }

    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_logged_in()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.read().user().cloned()
    }

    /// Sign in (or switch user). The cookie is written first, so on a storage
    /// failure the previous state is kept. The state lock is held across the
    /// cookie write so the two never disagree.
    pub fn login(&self, profile: UserProfile) -> Result<()> {
        let mut state = self.state.write();
        self.store.write(&profile, DEFAULT_TTL_DAYS)?;

        tracing::info!(user_id = %profile.id, email = %profile.email, "Logged in");
        *state = AuthState::Authenticated(profile);

        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        let mut state = self.state.write();
        self.store.clear()?;

        let previous = std::mem::take(&mut *state);
        if let AuthState::Authenticated(profile) = previous {
            tracing::info!(user_id = %profile.id, "Logged out");
        }

        Ok(())
    }
}

impl Clone for AuthSession {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            state: Arc::clone(&self.state),
        }
    }
}
