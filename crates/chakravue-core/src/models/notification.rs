//! Doctor-broadcast notification records.

use serde::{Deserialize, Serialize};

use super::null_default;

/// A notification previously sent by the doctor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationItem {
    #[serde(rename = "_id", default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub message: String,
    #[serde(rename = "created_at", default, deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_default")]
    pub sent: bool,
}

/// Wrapper shape of the notification listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub notifications: Vec<NotificationItem>,
}
