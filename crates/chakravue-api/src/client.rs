//! reqwest implementation of the `DoctorApi` seam.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use chakravue_core::api::DoctorApi;
use chakravue_core::auth::{AuthError, SessionInfo};
use chakravue_core::models::{
    AdherencePatient, CallTokenResponse, NotificationItem, NotificationsResponse, PatientRecord,
    PatientSimple, SlitLampImage, SlitLampImagesResponse, Submission, SubmissionDetail,
    VideoCallRequest,
};

use crate::config::ApiConfig;
use crate::decode;

const PUSH_PLATFORM: &str = "android";
const PUSH_APP_TYPE: &str = "doctor_app";

/// HTTP client for the doctor backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a client with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// GET + decode. Any failure (transport, non-2xx, malformed body)
    /// surfaces as an error string for the caller to fold.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, String> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status));
        }

        response.json::<T>().await.map_err(|e| e.to_string())
    }

    /// List read with silent degradation to empty.
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str, what: &str) -> Vec<T> {
        match self.get_json::<Vec<T>>(path, &[]).await {
            Ok(items) => items,
            Err(e) => {
                warn!("failed to fetch {}: {}", what, e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl DoctorApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<SessionInfo, AuthError> {
        let response = self
            .client
            .post(self.url("/login/doctor"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| AuthError::connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::connection(e.to_string()))?;

        decode::classify_login(status, &body)
    }

    async fn urgent_submissions(&self, doctor_id: &str) -> Vec<Submission> {
        self.fetch_list(
            &format!("/submissions/doctor/{}", doctor_id),
            "urgent submissions",
        )
        .await
    }

    async fn submission_history(&self, doctor_id: &str) -> Vec<Submission> {
        self.fetch_list(
            &format!("/submissions/doctor/{}/history", doctor_id),
            "submission history",
        )
        .await
    }

    async fn vision_submissions(&self, doctor_id: &str) -> Vec<Submission> {
        // Endpoint may not be deployed yet; a 404 is an empty list like
        // any other fetch failure.
        self.fetch_list(
            &format!("/submissions/doctor/{}/vision-tests", doctor_id),
            "vision submissions",
        )
        .await
    }

    async fn submission_details(&self, submission_id: &str) -> Option<SubmissionDetail> {
        match self
            .get_json::<SubmissionDetail>(&format!("/submissions/{}", submission_id), &[])
            .await
        {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!("failed to fetch submission details: {}", e);
                None
            }
        }
    }

    async fn send_submission_note(
        &self,
        submission_id: &str,
        note: &str,
        doctor_id: &str,
    ) -> bool {
        let result = self
            .client
            .post(self.url(&format!("/submissions/{}/notes", submission_id)))
            .json(&serde_json::json!({ "note": note, "doctorId": doctor_id }))
            .timeout(self.config.request_timeout)
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("failed to send submission note: {}", e);
                false
            }
        }
    }

    async fn patients(&self) -> Vec<PatientSimple> {
        self.fetch_list("/patients", "patients").await
    }

    async fn patient_profile(&self, query: &str) -> Option<PatientRecord> {
        if query.is_empty() {
            return None;
        }

        match self
            .get_json::<PatientRecord>("/patients/case/search/", &[("query", query)])
            .await
        {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("failed to fetch patient profile: {}", e);
                None
            }
        }
    }

    async fn call_token(&self, channel_name: &str) -> Option<CallTokenResponse> {
        let result = self
            .client
            .post(self.url("/call/token"))
            .query(&[("channel_name", channel_name)])
            .timeout(self.config.request_timeout)
            .send()
            .await;

        let response = match result {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!("call token request returned HTTP {}", response.status());
                return None;
            }
            Err(e) => {
                warn!("failed to fetch call token: {}", e);
                return None;
            }
        };

        match response.json::<CallTokenResponse>().await {
            Ok(token) => Some(token),
            Err(e) => {
                warn!("failed to decode call token: {}", e);
                None
            }
        }
    }

    async fn initiate_call(&self, doctor_id: &str, patient_id: &str, channel_name: &str) -> bool {
        let result = self
            .client
            .post(self.url("/call/initiate"))
            .json(&serde_json::json!({
                "doctor_id": doctor_id,
                "patient_id": patient_id,
                "channel_name": channel_name,
            }))
            .timeout(self.config.request_timeout)
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("failed to initiate call: {}", e);
                false
            }
        }
    }

    async fn video_call_requests(&self, status: Option<&str>) -> Vec<VideoCallRequest> {
        let mut request = self
            .client
            .get(self.url("/videocallrequests"))
            .timeout(self.config.request_timeout);
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            request = request.query(&[("status", status)]);
        }

        let body = match request.send().await {
            Ok(response) => match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("failed to read video call requests: {}", e);
                    return Vec::new();
                }
            },
            Err(e) => {
                warn!("failed to fetch video call requests: {}", e);
                return Vec::new();
            }
        };

        decode::parse_video_call_requests(&body)
    }

    async fn send_notification(
        &self,
        doctor_id: &str,
        title: &str,
        message: &str,
        send_to_all: bool,
        emails: &[String],
    ) -> bool {
        let recipients = if send_to_all {
            serde_json::json!({ "all": true })
        } else {
            serde_json::json!({ "all": false, "emails": emails })
        };

        let form = reqwest::multipart::Form::new()
            .text("doctor_id", doctor_id.to_string())
            .text("title", title.to_string())
            .text("message", message.to_string())
            .text("recipients", recipients.to_string());

        let result = self
            .client
            .post(self.url("/notifications"))
            .multipart(form)
            .timeout(self.config.request_timeout)
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("failed to send notification: {}", e);
                false
            }
        }
    }

    async fn notifications(&self, doctor_id: &str) -> Vec<NotificationItem> {
        match self
            .get_json::<NotificationsResponse>("/notifications", &[("doctor_id", doctor_id)])
            .await
        {
            Ok(response) => response.notifications,
            Err(e) => {
                warn!("failed to fetch notifications: {}", e);
                Vec::new()
            }
        }
    }

    async fn adherence_list(&self, doctor_id: &str) -> Vec<AdherencePatient> {
        self.fetch_list(
            &format!("/doctors/{}/adherence-list", doctor_id),
            "adherence list",
        )
        .await
    }

    async fn slit_lamp_images(&self) -> Vec<SlitLampImage> {
        match self
            .get_json::<SlitLampImagesResponse>("/slit-lamp/all", &[])
            .await
        {
            Ok(response) => response.images,
            Err(e) => {
                warn!("failed to fetch slit lamp images: {}", e);
                Vec::new()
            }
        }
    }

    async fn register_push_token(&self, doctor_id: &str, token: &str) -> bool {
        let result = self
            .client
            .post(self.url(&format!("/doctors/{}/fcm-token", doctor_id)))
            .json(&serde_json::json!({
                "fcm_token": token,
                "platform": PUSH_PLATFORM,
                "app_type": PUSH_APP_TYPE,
            }))
            .timeout(self.config.request_timeout)
            .send()
            .await;

        match result {
            Ok(response) => {
                let ok = response.status().is_success();
                if ok {
                    debug!("push token registered with backend");
                } else {
                    warn!(
                        "push token registration returned HTTP {}",
                        response.status()
                    );
                }
                ok
            }
            Err(e) => {
                warn!("failed to register push token: {}", e);
                false
            }
        }
    }
}
