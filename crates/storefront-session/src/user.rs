//! Session and profile types.

use serde::{Deserialize, Serialize};

/// An authenticated session.
///
/// Created at sign-in, destroyed at sign-out. Passed explicitly wherever a
/// signed-in user is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identity-service user id.
    pub user_id: String,
    /// Email the user signed in with.
    pub email: String,
}

impl Session {
    /// Create a session.
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
        }
    }
}

/// The user's profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Postal address as a single line.
    pub address: String,
    /// URL of the uploaded profile picture, if any.
    pub profile_picture: Option<String>,
}
