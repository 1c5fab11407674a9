//! Shared mock implementations of the trait seams for application tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use chakravue_core::api::DoctorApi;
use chakravue_core::auth::{AuthError, SessionInfo};
use chakravue_core::error::Result;
use chakravue_core::models::{
    AdherencePatient, CallTokenResponse, NotificationItem, PatientRecord, PatientSimple,
    SlitLampImage, Submission, SubmissionDetail, VideoCallRequest,
};
use chakravue_core::session::SessionStore;

/// In-memory `SessionStore` with the same field semantics as the file one.
#[derive(Default)]
pub(crate) struct MemorySessionStore {
    doctor_id: Mutex<Option<String>>,
    doctor_name: Mutex<Option<String>>,
    doctor_email: Mutex<Option<String>>,
    push_token: Mutex<Option<String>>,
}

impl SessionStore for MemorySessionStore {
    fn save_session(&self, id: &str, name: &str, email: &str) -> Result<()> {
        *self.doctor_id.lock().unwrap() = Some(id.to_string());
        *self.doctor_name.lock().unwrap() = Some(name.to_string());
        if !email.is_empty() {
            *self.doctor_email.lock().unwrap() = Some(email.to_string());
        }
        Ok(())
    }

    fn doctor_id(&self) -> String {
        self.doctor_id.lock().unwrap().clone().unwrap_or_default()
    }

    fn doctor_name(&self) -> String {
        self.doctor_name
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "Doctor".to_string())
    }

    fn doctor_email(&self) -> String {
        self.doctor_email.lock().unwrap().clone().unwrap_or_default()
    }

    fn logout(&self) -> Result<()> {
        *self.doctor_id.lock().unwrap() = None;
        *self.doctor_name.lock().unwrap() = None;
        *self.doctor_email.lock().unwrap() = None;
        Ok(())
    }

    fn save_push_token(&self, token: &str) -> Result<()> {
        *self.push_token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn push_token(&self) -> String {
        self.push_token.lock().unwrap().clone().unwrap_or_default()
    }
}

/// Configurable `DoctorApi` mock with call counting and optional delays.
pub(crate) struct MockDoctorApi {
    login_result: Mutex<std::result::Result<SessionInfo, AuthError>>,
    login_delay: Mutex<Duration>,
    fetch_delay: Mutex<Duration>,
    urgent: Mutex<Vec<Submission>>,
    history: Mutex<Vec<Submission>>,
    vision: Mutex<Vec<Submission>>,
    video_calls: Mutex<Vec<VideoCallRequest>>,
    adherence: Mutex<Vec<AdherencePatient>>,
    register_result: AtomicBool,
    register_count: AtomicUsize,
    login_count: AtomicUsize,
    list_fetches: AtomicUsize,
}

impl Default for MockDoctorApi {
    fn default() -> Self {
        Self {
            login_result: Mutex::new(Err(AuthError::connection("mock: no login configured"))),
            login_delay: Mutex::new(Duration::ZERO),
            fetch_delay: Mutex::new(Duration::ZERO),
            urgent: Mutex::new(Vec::new()),
            history: Mutex::new(Vec::new()),
            vision: Mutex::new(Vec::new()),
            video_calls: Mutex::new(Vec::new()),
            adherence: Mutex::new(Vec::new()),
            register_result: AtomicBool::new(true),
            register_count: AtomicUsize::new(0),
            login_count: AtomicUsize::new(0),
            list_fetches: AtomicUsize::new(0),
        }
    }
}

impl MockDoctorApi {
    pub(crate) fn set_login_result(&self, result: std::result::Result<SessionInfo, AuthError>) {
        *self.login_result.lock().unwrap() = result;
    }

    pub(crate) fn set_login_delay(&self, delay: Duration) {
        *self.login_delay.lock().unwrap() = delay;
    }

    pub(crate) fn set_fetch_delay(&self, delay: Duration) {
        *self.fetch_delay.lock().unwrap() = delay;
    }

    pub(crate) fn set_register_result(&self, ok: bool) {
        self.register_result.store(ok, Ordering::SeqCst);
    }

    pub(crate) fn set_urgent(&self, items: Vec<Submission>) {
        *self.urgent.lock().unwrap() = items;
    }

    pub(crate) fn set_history(&self, items: Vec<Submission>) {
        *self.history.lock().unwrap() = items;
    }

    pub(crate) fn set_video_calls(&self, items: Vec<VideoCallRequest>) {
        *self.video_calls.lock().unwrap() = items;
    }

    pub(crate) fn set_adherence(&self, items: Vec<AdherencePatient>) {
        *self.adherence.lock().unwrap() = items;
    }

    pub(crate) fn register_calls(&self) -> usize {
        self.register_count.load(Ordering::SeqCst)
    }

    pub(crate) fn login_calls(&self) -> usize {
        self.login_count.load(Ordering::SeqCst)
    }

    /// Total invocations across the five dashboard list endpoints.
    pub(crate) fn list_fetches(&self) -> usize {
        self.list_fetches.load(Ordering::SeqCst)
    }

    async fn list_fetch<T: Clone>(&self, source: &Mutex<Vec<T>>) -> Vec<T> {
        self.list_fetches.fetch_add(1, Ordering::SeqCst);
        let delay = *self.fetch_delay.lock().unwrap();
        if delay > Duration::ZERO {
            tokio::time::sleep(delay).await;
        }
        source.lock().unwrap().clone()
    }
}

#[async_trait]
impl DoctorApi for MockDoctorApi {
    async fn login(&self, _email: &str, _password: &str) -> std::result::Result<SessionInfo, AuthError> {
        self.login_count.fetch_add(1, Ordering::SeqCst);
        let delay = *self.login_delay.lock().unwrap();
        if delay > Duration::ZERO {
            tokio::time::sleep(delay).await;
        }
        self.login_result.lock().unwrap().clone()
    }

    async fn urgent_submissions(&self, _doctor_id: &str) -> Vec<Submission> {
        self.list_fetch(&self.urgent).await
    }

    async fn submission_history(&self, _doctor_id: &str) -> Vec<Submission> {
        self.list_fetch(&self.history).await
    }

    async fn vision_submissions(&self, _doctor_id: &str) -> Vec<Submission> {
        self.list_fetch(&self.vision).await
    }

    async fn submission_details(&self, _submission_id: &str) -> Option<SubmissionDetail> {
        None
    }

    async fn send_submission_note(
        &self,
        _submission_id: &str,
        _note: &str,
        _doctor_id: &str,
    ) -> bool {
        true
    }

    async fn patients(&self) -> Vec<PatientSimple> {
        Vec::new()
    }

    async fn patient_profile(&self, _query: &str) -> Option<PatientRecord> {
        None
    }

    async fn call_token(&self, _channel_name: &str) -> Option<CallTokenResponse> {
        None
    }

    async fn initiate_call(
        &self,
        _doctor_id: &str,
        _patient_id: &str,
        _channel_name: &str,
    ) -> bool {
        true
    }

    async fn video_call_requests(&self, _status: Option<&str>) -> Vec<VideoCallRequest> {
        self.list_fetch(&self.video_calls).await
    }

    async fn send_notification(
        &self,
        _doctor_id: &str,
        _title: &str,
        _message: &str,
        _send_to_all: bool,
        _emails: &[String],
    ) -> bool {
        true
    }

    async fn notifications(&self, _doctor_id: &str) -> Vec<NotificationItem> {
        Vec::new()
    }

    async fn adherence_list(&self, _doctor_id: &str) -> Vec<AdherencePatient> {
        self.list_fetch(&self.adherence).await
    }

    async fn slit_lamp_images(&self) -> Vec<SlitLampImage> {
        Vec::new()
    }

    async fn register_push_token(&self, _doctor_id: &str, _token: &str) -> bool {
        self.register_count.fetch_add(1, Ordering::SeqCst);
        self.register_result.load(Ordering::SeqCst)
    }
}
