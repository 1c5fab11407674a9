//! Device push-token lifecycle.
//!
//! The push token identifies the device, not the account: it is stored
//! whenever the platform issues or rotates one, survives logout, and is
//! re-registered with the backend only while a session exists.

use std::sync::Arc;

use tracing::{debug, warn};

use chakravue_core::api::DoctorApi;
use chakravue_core::session::SessionStore;

/// Keeps the locally stored push token and the backend registration in sync.
pub struct PushTokenSync {
    api: Arc<dyn DoctorApi>,
    store: Arc<dyn SessionStore>,
}

impl PushTokenSync {
    pub fn new(api: Arc<dyn DoctorApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Handles a token issued or rotated by the platform.
    ///
    /// The token is always persisted locally. Registration with the backend
    /// only happens while logged in; the returned bool reports that
    /// registration (false when logged out or when the backend declined).
    pub async fn token_rotated(&self, token: &str) -> bool {
        if let Err(e) = self.store.save_push_token(token) {
            warn!("failed to persist push token: {}", e);
        }

        if !self.store.is_logged_in() {
            debug!("skipping push token registration: not logged in");
            return false;
        }

        self.api
            .register_push_token(&self.store.doctor_id(), token)
            .await
    }

    /// App-start path: re-registers the current platform token only when it
    /// differs from the stored one and a session exists.
    pub async fn ensure_registered(&self, current_token: &str) -> bool {
        if !self.store.is_logged_in() {
            debug!("skipping push token registration: not logged in");
            return false;
        }

        if current_token == self.store.push_token() {
            debug!("push token unchanged, skipping re-registration");
            return false;
        }

        self.token_rotated(current_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemorySessionStore, MockDoctorApi};

    #[tokio::test]
    async fn rotation_while_logged_out_saves_locally_without_registering() {
        let api = Arc::new(MockDoctorApi::default());
        let store = Arc::new(MemorySessionStore::default());
        let sync = PushTokenSync::new(api.clone(), store.clone());

        let registered = sync.token_rotated("t1").await;

        assert!(!registered);
        assert_eq!(store.push_token(), "t1");
        assert_eq!(api.register_calls(), 0);
    }

    #[tokio::test]
    async fn rotation_while_logged_in_registers_with_backend() {
        let api = Arc::new(MockDoctorApi::default());
        let store = Arc::new(MemorySessionStore::default());
        store.save_session("doc-1", "Dr. Rao", "").unwrap();
        let sync = PushTokenSync::new(api.clone(), store.clone());

        let registered = sync.token_rotated("t1").await;

        assert!(registered);
        assert_eq!(store.push_token(), "t1");
        assert_eq!(api.register_calls(), 1);
    }

    #[tokio::test]
    async fn ensure_registered_skips_unchanged_token() {
        let api = Arc::new(MockDoctorApi::default());
        let store = Arc::new(MemorySessionStore::default());
        store.save_session("doc-1", "Dr. Rao", "").unwrap();
        store.save_push_token("t1").unwrap();
        let sync = PushTokenSync::new(api.clone(), store);

        assert!(!sync.ensure_registered("t1").await);
        assert_eq!(api.register_calls(), 0);
    }

    #[tokio::test]
    async fn ensure_registered_re_registers_changed_token() {
        let api = Arc::new(MockDoctorApi::default());
        let store = Arc::new(MemorySessionStore::default());
        store.save_session("doc-1", "Dr. Rao", "").unwrap();
        store.save_push_token("t1").unwrap();
        let sync = PushTokenSync::new(api.clone(), store.clone());

        assert!(sync.ensure_registered("t2").await);
        assert_eq!(store.push_token(), "t2");
        assert_eq!(api.register_calls(), 1);
    }

    #[tokio::test]
    async fn ensure_registered_skips_when_logged_out() {
        let api = Arc::new(MockDoctorApi::default());
        let store = Arc::new(MemorySessionStore::default());
        store.save_push_token("t1").unwrap();
        let sync = PushTokenSync::new(api.clone(), store.clone());

        assert!(!sync.ensure_registered("t2").await);
        assert_eq!(api.register_calls(), 0);
        // Stored token is left alone on the skip path.
        assert_eq!(store.push_token(), "t1");
    }
}
