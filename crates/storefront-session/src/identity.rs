//! Collaborator traits over the managed identity/document/file-storage service.

use async_trait::async_trait;

use crate::error::SessionError;
use crate::user::{Session, UserProfile};

/// Authentication against the managed identity service.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError>;

    /// Create an account and sign in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, SessionError>;

    /// End the given session.
    async fn sign_out(&self, session: Session) -> Result<(), SessionError>;

    /// The currently signed-in session, if any.
    async fn current_user(&self) -> Option<Session>;
}

/// Profile document storage, keyed by user id.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the profile document for a user.
    async fn load(&self, user_id: &str) -> Result<UserProfile, SessionError>;

    /// Write the profile document for a user.
    async fn save(&self, user_id: &str, profile: &UserProfile) -> Result<(), SessionError>;
}

/// Binary file storage for profile pictures.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Upload bytes to the given storage path, returning a download URL.
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<String, SessionError>;

    /// Resolve the download URL for an existing storage path.
    async fn download_url(&self, path: &str) -> Result<String, SessionError>;
}
