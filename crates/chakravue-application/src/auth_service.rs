//! Login flow controller.
//!
//! Runs the credential exchange and leaves the session store in a
//! consistent post-state: the session is persisted before the caller is
//! told of success, so anything reacting to "login succeeded" can
//! immediately read a consistent session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use chakravue_core::api::DoctorApi;
use chakravue_core::auth::{AuthError, SessionInfo};
use chakravue_core::error::Result;
use chakravue_core::session::SessionStore;

/// Executes the login protocol and transitions the session store.
///
/// A single attempt moves Idle → Submitting → Success/Failed. A `login`
/// call while another is submitting is rejected with
/// [`AuthError::InProgress`] rather than superseding it.
pub struct AuthService {
    api: Arc<dyn DoctorApi>,
    store: Arc<dyn SessionStore>,
    submitting: AtomicBool,
}

impl AuthService {
    pub fn new(api: Arc<dyn DoctorApi>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            api,
            store,
            submitting: AtomicBool::new(false),
        }
    }

    /// Exchanges credentials for a session.
    ///
    /// Blankness validation is the caller's job; this method submits
    /// whatever it is given. On success the identity is persisted and the
    /// device push token (if any) is registered with the backend as a
    /// best-effort side effect that never fails the login.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionInfo, AuthError> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AuthError::InProgress);
        }

        let result = self.submit(email, password).await;
        self.submitting.store(false, Ordering::SeqCst);
        result
    }

    async fn submit(&self, email: &str, password: &str) -> Result<SessionInfo, AuthError> {
        let info = self.api.login(email, password).await?;

        self.store
            .save_session(&info.id, &info.name, &info.email)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        info!(doctor_id = %info.id, "login succeeded, session persisted");

        let token = self.store.push_token();
        if !token.is_empty() && !self.api.register_push_token(&info.id, &token).await {
            warn!("push token registration after login failed");
        }

        Ok(info)
    }

    /// Clears the session. The device push token survives.
    pub fn logout(&self) -> Result<()> {
        self.store.logout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemorySessionStore, MockDoctorApi};
    use chakravue_core::session::SessionStore;
    use std::time::Duration;

    fn service(api: Arc<MockDoctorApi>, store: Arc<MemorySessionStore>) -> AuthService {
        AuthService::new(api, store)
    }

    fn identity() -> SessionInfo {
        SessionInfo {
            id: "doc-1".to_string(),
            name: "Dr. Rao".to_string(),
            email: "rao@x.in".to_string(),
        }
    }

    #[tokio::test]
    async fn successful_login_persists_session_before_returning() {
        let api = Arc::new(MockDoctorApi::default());
        api.set_login_result(Ok(identity()));
        let store = Arc::new(MemorySessionStore::default());
        let auth = service(api, store.clone());

        let info = auth.login("rao@x.in", "secret").await.unwrap();

        assert_eq!(info.id, "doc-1");
        assert!(store.is_logged_in());
        assert_eq!(store.doctor_name(), "Dr. Rao");
        assert_eq!(store.doctor_email(), "rao@x.in");
    }

    #[tokio::test]
    async fn rejected_login_surfaces_detail_and_saves_nothing() {
        let api = Arc::new(MockDoctorApi::default());
        api.set_login_result(Err(AuthError::Rejected("Invalid credentials".to_string())));
        let store = Arc::new(MemorySessionStore::default());
        let auth = service(api, store.clone());

        let err = auth.login("rao@x.in", "wrong").await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!store.is_logged_in());
    }

    #[tokio::test]
    async fn connection_failure_saves_nothing() {
        let api = Arc::new(MockDoctorApi::default());
        api.set_login_result(Err(AuthError::connection("")));
        let store = Arc::new(MemorySessionStore::default());
        let auth = service(api, store.clone());

        let err = auth.login("rao@x.in", "secret").await.unwrap_err();

        assert_eq!(err.to_string(), "Connection failed");
        assert!(!store.is_logged_in());
    }

    #[tokio::test]
    async fn stored_push_token_is_registered_after_login() {
        let api = Arc::new(MockDoctorApi::default());
        api.set_login_result(Ok(identity()));
        let store = Arc::new(MemorySessionStore::default());
        store.save_push_token("device-token").unwrap();
        let auth = service(api.clone(), store);

        auth.login("rao@x.in", "secret").await.unwrap();

        assert_eq!(api.register_calls(), 1);
    }

    #[tokio::test]
    async fn push_registration_failure_never_fails_the_login() {
        let api = Arc::new(MockDoctorApi::default());
        api.set_login_result(Ok(identity()));
        api.set_register_result(false);
        let store = Arc::new(MemorySessionStore::default());
        store.save_push_token("device-token").unwrap();
        let auth = service(api.clone(), store.clone());

        let result = auth.login("rao@x.in", "secret").await;

        assert!(result.is_ok());
        assert!(store.is_logged_in());
    }

    #[tokio::test]
    async fn missing_push_token_skips_registration() {
        let api = Arc::new(MockDoctorApi::default());
        api.set_login_result(Ok(identity()));
        let store = Arc::new(MemorySessionStore::default());
        let auth = service(api.clone(), store);

        auth.login("rao@x.in", "secret").await.unwrap();

        assert_eq!(api.register_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_login_is_rejected() {
        let api = Arc::new(MockDoctorApi::default());
        api.set_login_result(Ok(identity()));
        api.set_login_delay(Duration::from_millis(100));
        let store = Arc::new(MemorySessionStore::default());
        let auth = Arc::new(service(api.clone(), store));

        let first = {
            let auth = Arc::clone(&auth);
            tokio::spawn(async move { auth.login("rao@x.in", "secret").await })
        };
        // Let the first attempt reach its submitting state.
        tokio::time::sleep(Duration::from_millis(10)).await;

        let second = auth.login("rao@x.in", "secret").await;
        assert_eq!(second.unwrap_err(), AuthError::InProgress);

        assert!(first.await.unwrap().is_ok());
        // The rejected attempt never reached the network.
        assert_eq!(api.login_calls(), 1);
    }

    #[tokio::test]
    async fn login_is_possible_again_after_a_failure() {
        let api = Arc::new(MockDoctorApi::default());
        api.set_login_result(Err(AuthError::connection("boom")));
        let store = Arc::new(MemorySessionStore::default());
        let auth = service(api.clone(), store);

        assert!(auth.login("rao@x.in", "secret").await.is_err());

        api.set_login_result(Ok(identity()));
        assert!(auth.login("rao@x.in", "secret").await.is_ok());
    }

    #[tokio::test]
    async fn logout_clears_session_through_the_file_store() {
        use chakravue_infrastructure::FileSessionStore;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileSessionStore::with_path(dir.path().join("session.json")));
        let api = Arc::new(MockDoctorApi::default());
        api.set_login_result(Ok(identity()));
        let auth = AuthService::new(api, store.clone());

        store.save_push_token("device-token").unwrap();
        auth.login("rao@x.in", "secret").await.unwrap();
        assert!(store.is_logged_in());

        auth.logout().unwrap();
        assert!(!store.is_logged_in());
        // Device token survives the logout.
        assert_eq!(store.push_token(), "device-token");
    }
}
