//! Video-call request and token records.

use serde::{Deserialize, Serialize};

use super::null_default;

/// A patient's request for a video consultation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoCallRequest {
    #[serde(rename = "_id", default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "patient_name", default, deserialize_with = "null_default")]
    pub patient_name: String,
    #[serde(rename = "patient_id", default, deserialize_with = "null_default")]
    pub patient_id: String,
    #[serde(rename = "created_at", default, deserialize_with = "null_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_default")]
    pub reason: String,
}

/// Wrapped shape of the video-call-requests endpoint. The backend also
/// serves a bare array; see the api crate's decode fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoCallRequestsResponse {
    #[serde(rename = "videocallrequests", default)]
    pub requests: Vec<VideoCallRequest>,
}

/// Credentials for joining a call channel, issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTokenResponse {
    pub token: String,
    pub app_id: String,
}
