//! Profile screen: profile document CRUD with staged picture upload.

use std::sync::Arc;

use storefront_session::{FileStorage, IdentityService, ProfileStore, Session, UserProfile};
use tracing::{debug, warn};

use crate::location::LocationProvider;

/// Observable state of the profile screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    /// Profile document fields.
    pub profile: UserProfile,
    /// Email from the session (not editable here).
    pub email: String,
    /// Edit mode active.
    pub editing: bool,
    /// Load or save in flight.
    pub loading: bool,
    /// Location lookup in flight.
    pub loading_location: bool,
    /// Last failure, display-ready.
    pub error: Option<String>,
}

/// Drives the profile screen for an explicit session.
pub struct ProfileController<I, P, F, L>
where
    I: IdentityService + ?Sized,
    P: ProfileStore + ?Sized,
    F: FileStorage + ?Sized,
    L: LocationProvider + ?Sized,
{
    identity: Arc<I>,
    profiles: Arc<P>,
    files: Arc<F>,
    location: Arc<L>,
    session: Session,
    state: ProfileState,
    /// Picture bytes staged for upload on the next save.
    staged_picture: Option<Vec<u8>>,
}

impl<I, P, F, L> ProfileController<I, P, F, L>
where
    I: IdentityService + ?Sized,
    P: ProfileStore + ?Sized,
    F: FileStorage + ?Sized,
    L: LocationProvider + ?Sized,
{
    /// Create a controller for the given session.
    pub fn new(
        identity: Arc<I>,
        profiles: Arc<P>,
        files: Arc<F>,
        location: Arc<L>,
        session: Session,
    ) -> Self {
        let state = ProfileState {
            email: session.email.clone(),
            ..ProfileState::default()
        };
        Self {
            identity,
            profiles,
            files,
            location,
            session,
            state,
            staged_picture: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Load the profile document.
    pub async fn load(&mut self) {
        self.state.loading = true;
        match self.profiles.load(&self.session.user_id).await {
            Ok(profile) => {
                self.state.profile = profile;
                self.state.error = None;
            }
            Err(e) => {
                warn!(user_id = %self.session.user_id, error = %e, "profile load failed");
                self.state.error = Some(e.display_message());
            }
        }
        self.state.loading = false;
    }

    /// Enter edit mode.
    pub fn start_editing(&mut self) {
        self.state.editing = true;
    }

    /// Update the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.profile.name = name.into();
    }

    /// Update the phone number.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.state.profile.phone = phone.into();
    }

    /// Update the address line.
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.state.profile.address = address.into();
    }

    /// Stage a new profile picture; uploaded on the next save.
    pub fn stage_picture(&mut self, bytes: Vec<u8>) {
        self.staged_picture = Some(bytes);
    }

    /// Save the profile document, uploading any staged picture first, then
    /// reload to reflect what the store now holds.
    pub async fn save(&mut self) {
        self.state.loading = true;

        if let Some(bytes) = self.staged_picture.take() {
            let path = format!("profile_pictures/{}", self.session.user_id);
            match self.files.upload(&path, bytes).await {
                Ok(url) => self.state.profile.profile_picture = Some(url),
                Err(e) => {
                    warn!(user_id = %self.session.user_id, error = %e, "picture upload failed");
                    self.state.error = Some(e.display_message());
                    self.state.loading = false;
                    return;
                }
            }
        }

        let result = self
            .profiles
            .save(&self.session.user_id, &self.state.profile)
            .await;

        match result {
            Ok(()) => {
                debug!(user_id = %self.session.user_id, "profile saved");
                self.state.editing = false;
                self.state.error = None;
                self.state.loading = false;
                self.load().await;
            }
            Err(e) => {
                warn!(user_id = %self.session.user_id, error = %e, "profile save failed");
                self.state.error = Some(e.display_message());
                self.state.loading = false;
            }
        }
    }

    /// Fill the address from the device location.
    pub async fn use_current_location(&mut self) {
        if !self.location.has_permission() {
            self.state.error =
                Some(crate::location::LocationError::PermissionDenied.to_string());
            return;
        }

        self.state.loading_location = true;
        let location = Arc::clone(&self.location);
        let looked_up = async move {
            let point = location.current_location().await?;
            location.reverse_geocode(point).await
        }
        .await;
        self.state.loading_location = false;

        match looked_up {
            Ok(address) => self.state.profile.address = address.one_line(),
            Err(e) => {
                warn!(error = %e, "location lookup failed");
                self.state.error = Some(e.to_string());
            }
        }
    }

    /// Clear the error slot.
    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    /// Sign out, consuming the controller and destroying the session.
    pub async fn sign_out(self) -> Result<(), storefront_session::SessionError> {
        self.identity.sign_out(self.session).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{GeoPoint, LocationError, PostalAddress};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use storefront_session::SessionError;

    #[derive(Default)]
    struct StubIdentity {
        signed_out: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl IdentityService for StubIdentity {
        async fn sign_in(&self, email: &str, _password: &str) -> Result<Session, SessionError> {
            Ok(Session::new("user-1", email))
        }

        async fn sign_up(&self, email: &str, _password: &str) -> Result<Session, SessionError> {
            Ok(Session::new("user-1", email))
        }

        async fn sign_out(&self, session: Session) -> Result<(), SessionError> {
            self.signed_out.lock().unwrap().push(session.user_id);
            Ok(())
        }

        async fn current_user(&self) -> Option<Session> {
            None
        }
    }

    #[derive(Default)]
    struct MemoryProfiles {
        docs: Mutex<HashMap<String, UserProfile>>,
    }

    #[async_trait]
    impl ProfileStore for MemoryProfiles {
        async fn load(&self, user_id: &str) -> Result<UserProfile, SessionError> {
            self.docs
                .lock()
                .unwrap()
                .get(user_id)
                .cloned()
                .ok_or_else(|| SessionError::Storage("profile not found".to_string()))
        }

        async fn save(&self, user_id: &str, profile: &UserProfile) -> Result<(), SessionError> {
            self.docs
                .lock()
                .unwrap()
                .insert(user_id.to_string(), profile.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryFiles {
        uploads: Mutex<HashMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl FileStorage for MemoryFiles {
        async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<String, SessionError> {
            self.uploads
                .lock()
                .unwrap()
                .insert(path.to_string(), bytes);
            Ok(format!("https://files.example.com/{path}"))
        }

        async fn download_url(&self, path: &str) -> Result<String, SessionError> {
            Ok(format!("https://files.example.com/{path}"))
        }
    }

    struct GrantedLocation;

    #[async_trait]
    impl LocationProvider for GrantedLocation {
        fn has_permission(&self) -> bool {
            true
        }

        async fn current_location(&self) -> Result<GeoPoint, LocationError> {
            Ok(GeoPoint {
                latitude: 54.57,
                longitude: -1.23,
            })
        }

        async fn reverse_geocode(&self, _point: GeoPoint) -> Result<PostalAddress, LocationError> {
            Ok(PostalAddress {
                line1: "2 Borough Road".to_string(),
                city: "Middlesbrough".to_string(),
                postcode: "TS1 2AB".to_string(),
                country: "United Kingdom".to_string(),
            })
        }
    }

    type TestController =
        ProfileController<StubIdentity, MemoryProfiles, MemoryFiles, GrantedLocation>;

    fn controller(profiles: Arc<MemoryProfiles>, identity: Arc<StubIdentity>) -> TestController {
        ProfileController::new(
            identity,
            profiles,
            Arc::new(MemoryFiles::default()),
            Arc::new(GrantedLocation),
            Session::new("user-1", "user@example.com"),
        )
    }

    #[tokio::test]
    async fn test_load_missing_profile_is_error() {
        let mut profile = controller(
            Arc::new(MemoryProfiles::default()),
            Arc::new(StubIdentity::default()),
        );
        profile.load().await;
        assert!(profile.state().error.is_some());
        assert!(!profile.state().loading);
    }

    #[tokio::test]
    async fn test_edit_and_save_round_trip() {
        let profiles = Arc::new(MemoryProfiles::default());
        profiles
            .save("user-1", &UserProfile::default())
            .await
            .unwrap();

        let mut profile = controller(profiles.clone(), Arc::new(StubIdentity::default()));
        profile.load().await;
        profile.start_editing();
        profile.set_name("Ada");
        profile.set_phone("07000 000000");
        profile.set_address("2 Borough Road");
        profile.save().await;

        assert!(!profile.state().editing);
        assert_eq!(profile.state().profile.name, "Ada");

        let stored = profiles.load("user-1").await.unwrap();
        assert_eq!(stored.phone, "07000 000000");
    }

    #[tokio::test]
    async fn test_staged_picture_uploaded_on_save() {
        let profiles = Arc::new(MemoryProfiles::default());
        profiles
            .save("user-1", &UserProfile::default())
            .await
            .unwrap();

        let mut profile = controller(profiles.clone(), Arc::new(StubIdentity::default()));
        profile.load().await;
        profile.stage_picture(vec![1, 2, 3]);
        profile.save().await;

        let stored = profiles.load("user-1").await.unwrap();
        assert_eq!(
            stored.profile_picture.as_deref(),
            Some("https://files.example.com/profile_pictures/user-1")
        );
    }

    #[tokio::test]
    async fn test_location_fills_address_field() {
        let profiles = Arc::new(MemoryProfiles::default());
        let mut profile = controller(profiles, Arc::new(StubIdentity::default()));
        profile.use_current_location().await;
        assert!(profile.state().profile.address.contains("Borough Road"));
    }

    #[tokio::test]
    async fn test_sign_out_consumes_session() {
        let identity = Arc::new(StubIdentity::default());
        let profile = controller(Arc::new(MemoryProfiles::default()), identity.clone());
        profile.sign_out().await.unwrap();
        assert_eq!(*identity.signed_out.lock().unwrap(), vec!["user-1"]);
    }
}
