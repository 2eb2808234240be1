//! User profile data structure

use serde::{Deserialize, Serialize};

/// Signed-in user as handed back by the identity provider redirect.
///
/// Extra fields in the payload (access token, status messages) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar URL, absent for accounts without one
    #[serde(default)]
    pub picture: Option<String>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            picture: None,
        }
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }
}
