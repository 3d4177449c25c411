//! Sign-in / sign-up state machine and entry routing.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::SessionError;
use crate::identity::IdentityService;
use crate::user::Session;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Whether the auth form submits a sign-in or a sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Observable authentication state.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Nothing submitted yet.
    Initial,
    /// Submission in flight.
    Loading,
    /// Signed in.
    Authenticated(Session),
    /// Submission rejected; carries a display-ready message.
    Failed(String),
}

/// Drives sign-in and sign-up against the identity service.
pub struct AuthController<I: IdentityService + ?Sized> {
    identity: Arc<I>,
    mode: AuthMode,
    state: AuthState,
}

impl<I: IdentityService + ?Sized> AuthController<I> {
    /// Create a controller in sign-in mode.
    pub fn new(identity: Arc<I>) -> Self {
        Self {
            identity,
            mode: AuthMode::SignIn,
            state: AuthState::Initial,
        }
    }

    /// Current state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Current form mode.
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Toggle between sign-in and sign-up; clears a previous failure.
    pub fn switch_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        if matches!(self.state, AuthState::Failed(_)) {
            self.state = AuthState::Initial;
        }
    }

    /// Submit the form. Validates locally before calling the service.
    pub async fn submit(&mut self, email: &str, password: &str) {
        if let Err(e) = validate_credentials(email, password) {
            self.state = AuthState::Failed(e.display_message());
            return;
        }

        self.state = AuthState::Loading;
        let result = match self.mode {
            AuthMode::SignIn => self.identity.sign_in(email, password).await,
            AuthMode::SignUp => self.identity.sign_up(email, password).await,
        };

        match result {
            Ok(session) => {
                debug!(user_id = %session.user_id, "authenticated");
                self.state = AuthState::Authenticated(session);
            }
            Err(e) => {
                warn!(error = %e, "authentication failed");
                self.state = AuthState::Failed(e.display_message());
            }
        }
    }
}

/// Local credential checks applied before any network call.
fn validate_credentials(email: &str, password: &str) -> Result<(), SessionError> {
    if !is_valid_email(email) {
        return Err(SessionError::Validation("Invalid email address".to_string()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(SessionError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Entry screens reachable from startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Catalog browsing, for a signed-in user.
    Home,
    /// The auth screen, when no session exists.
    SignIn,
}

/// Startup routing: authenticated users land on the catalog.
pub fn entry_route(current: Option<&Session>) -> Route {
    match current {
        Some(_) => Route::Home,
        None => Route::SignIn,
    }
}
