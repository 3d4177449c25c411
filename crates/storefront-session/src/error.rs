//! Session and identity error types.

use thiserror::Error;

/// Errors surfaced by the identity, profile and file-storage collaborators.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Authentication rejected by the identity service.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Local form validation failed before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Profile document or file storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Operation requires a signed-in user.
    #[error("Not signed in")]
    NotSignedIn,
}

impl SessionError {
    /// Display-ready message, never empty.
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error occurred".to_string()
        } else {
            message
        }
    }
}
