//! Remote API trait.
//!
//! The seam between the coordinator/auth services and the HTTP client.
//! Read operations degrade silently: a transport or decoding failure is an
//! empty list or `None`, never an error crossing this boundary. Mutating
//! operations report plain success booleans. Only `login` returns a
//! `Result`, because its failure message is user-visible.

use async_trait::async_trait;

use crate::auth::{AuthError, SessionInfo};
use crate::models::{
    AdherencePatient, CallTokenResponse, NotificationItem, PatientRecord, PatientSimple,
    SlitLampImage, Submission, SubmissionDetail, VideoCallRequest,
};

#[async_trait]
pub trait DoctorApi: Send + Sync {
    /// Exchanges credentials for a doctor identity.
    ///
    /// Does not touch session storage; persisting the identity is the
    /// caller's responsibility.
    async fn login(&self, email: &str, password: &str) -> Result<SessionInfo, AuthError>;

    /// Urgent (unviewed) submissions for the doctor.
    async fn urgent_submissions(&self, doctor_id: &str) -> Vec<Submission>;

    /// All submissions for the doctor.
    async fn submission_history(&self, doctor_id: &str) -> Vec<Submission>;

    /// Vision-test submissions. The endpoint may not be deployed; an
    /// absent endpoint is an empty list.
    async fn vision_submissions(&self, doctor_id: &str) -> Vec<Submission>;

    /// Full record for one submission.
    async fn submission_details(&self, submission_id: &str) -> Option<SubmissionDetail>;

    /// Sends the reply note and archives the submission.
    async fn send_submission_note(
        &self,
        submission_id: &str,
        note: &str,
        doctor_id: &str,
    ) -> bool;

    /// All patients, for notification recipient selection.
    async fn patients(&self) -> Vec<PatientSimple>;

    /// Case-record search. An empty query short-circuits to `None`.
    async fn patient_profile(&self, query: &str) -> Option<PatientRecord>;

    /// Fetches join credentials for a call channel.
    async fn call_token(&self, channel_name: &str) -> Option<CallTokenResponse>;

    /// Signals the patient that a call is starting.
    async fn initiate_call(&self, doctor_id: &str, patient_id: &str, channel_name: &str) -> bool;

    /// Pending video-consultation requests, optionally filtered by status.
    async fn video_call_requests(&self, status: Option<&str>) -> Vec<VideoCallRequest>;

    /// Broadcasts a notification to all patients or a selected set.
    async fn send_notification(
        &self,
        doctor_id: &str,
        title: &str,
        message: &str,
        send_to_all: bool,
        emails: &[String],
    ) -> bool;

    /// Notifications previously sent by the doctor.
    async fn notifications(&self, doctor_id: &str) -> Vec<NotificationItem>;

    /// Drug-adherence listing for the doctor's patients.
    async fn adherence_list(&self, doctor_id: &str) -> Vec<AdherencePatient>;

    /// All shared slit-lamp captures.
    async fn slit_lamp_images(&self) -> Vec<SlitLampImage>;

    /// Registers the device push token for the doctor. Best-effort.
    async fn register_push_token(&self, doctor_id: &str, token: &str) -> bool;
}
