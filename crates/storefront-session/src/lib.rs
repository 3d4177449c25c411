//! Explicit session and identity collaborators.
//!
//! The managed auth/document/file-storage service sits behind the traits in
//! [`identity`]; nothing in this workspace relies on ambient global auth
//! state. A [`Session`] is created at sign-in, passed explicitly into every
//! controller that needs it, and destroyed at sign-out.

pub mod auth;
pub mod error;
pub mod identity;
pub mod user;

pub use auth::{entry_route, AuthController, AuthMode, AuthState, Route};
pub use error::SessionError;
pub use identity::{FileStorage, IdentityService, ProfileStore};
pub use user::{Session, UserProfile};
