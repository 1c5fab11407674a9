//! Patient submission records (pain-scale and vision-test forms).

use serde::{Deserialize, Serialize};

use super::null_default;

/// A submission row as returned by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "_id", default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "patient_name", default, deserialize_with = "null_default")]
    pub patient_name: String,
    #[serde(rename = "pain_scale", default, deserialize_with = "null_default")]
    pub pain_scale: i32,
    #[serde(default, deserialize_with = "null_default")]
    pub timestamp: String,
    #[serde(rename = "image_file_id", default, deserialize_with = "null_default")]
    pub image_id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub is_viewed: bool,
    #[serde(rename = "form_name", default, deserialize_with = "null_default")]
    pub form_name: String,
    #[serde(
        rename = "submission_type",
        default,
        deserialize_with = "null_default"
    )]
    pub submission_type: String,
}

/// The full per-submission record, with all scalar measurements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDetail {
    #[serde(rename = "_id", default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "patient_name", default, deserialize_with = "null_default")]
    pub patient_name: String,
    #[serde(rename = "patient_id", default, deserialize_with = "null_default")]
    pub patient_id: String,
    #[serde(rename = "patient_email", default, deserialize_with = "null_default")]
    pub patient_email: String,
    #[serde(rename = "pain_scale", default, deserialize_with = "null_default")]
    pub pain_scale: i32,
    #[serde(default, deserialize_with = "null_default")]
    pub swelling: i32,
    #[serde(default, deserialize_with = "null_default")]
    pub redness: i32,
    #[serde(default, deserialize_with = "null_default")]
    pub discharge: i32,
    #[serde(default, deserialize_with = "null_default")]
    pub comments: String,
    #[serde(default, deserialize_with = "null_default")]
    pub timestamp: String,
    #[serde(rename = "image_file_id", default, deserialize_with = "null_default")]
    pub image_id: String,
    #[serde(rename = "is_viewed", default, deserialize_with = "null_default")]
    pub is_viewed: bool,
    #[serde(rename = "is_archived", default, deserialize_with = "null_default")]
    pub is_archived: bool,
}

/// A slit-lamp capture shared by a patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlitLampImage {
    #[serde(rename = "_id", default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "patientId", default, deserialize_with = "null_default")]
    pub patient_id: String,
    #[serde(rename = "patientName", default, deserialize_with = "null_default")]
    pub patient_name: String,
    #[serde(rename = "doctorName", default, deserialize_with = "null_default")]
    pub doctor_name: String,
    /// Base64 encoded image payload.
    #[serde(default, deserialize_with = "null_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_default")]
    pub timestamp: String,
    /// "Left", "Right", or "Both".
    #[serde(rename = "eyeSide", default, deserialize_with = "null_default")]
    pub eye_side: String,
}

/// Wrapper shape of the slit-lamp listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlitLampImagesResponse {
    #[serde(default)]
    pub images: Vec<SlitLampImage>,
}
