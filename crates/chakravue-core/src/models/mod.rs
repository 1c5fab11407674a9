//! Flat DTOs mirroring remote JSON records.
//!
//! The backend omits fields freely and occasionally sends explicit nulls.
//! Every field uses the same rule: absent or null maps to the typed default
//! (0, empty string, empty list, false) via [`null_default`], applied here
//! at the DTO layer rather than ad hoc at call sites.

pub mod adherence;
pub mod notification;
pub mod patient;
pub mod submission;
pub mod video_call;

pub use adherence::{AdherencePatient, MedicationEntry};
pub use notification::{NotificationItem, NotificationsResponse};
pub use patient::{
    ComplaintItem, DoctorInfo, DrugHistory, HistoryEntry, MedicationItem, PatientDetails,
    PatientRecord, PatientSimple, PresentingComplaints,
};
pub use submission::{SlitLampImage, SlitLampImagesResponse, Submission, SubmissionDetail};
pub use video_call::{CallTokenResponse, VideoCallRequest, VideoCallRequestsResponse};

use serde::{Deserialize, Deserializer};

/// Deserializes an optional/nullable remote field into its typed default.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_take_typed_defaults() {
        let submission: Submission = serde_json::from_str(r#"{"_id":"s1"}"#).unwrap();
        assert_eq!(submission.id, "s1");
        assert_eq!(submission.pain_scale, 0);
        assert_eq!(submission.patient_name, "");
        assert!(!submission.is_viewed);
    }

    #[test]
    fn explicit_nulls_take_typed_defaults() {
        let submission: Submission =
            serde_json::from_str(r#"{"_id":"s1","pain_scale":null,"patient_name":null}"#).unwrap();
        assert_eq!(submission.pain_scale, 0);
        assert_eq!(submission.patient_name, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let patient: AdherencePatient =
            serde_json::from_str(r#"{"patient_id":"p1","brand_new_field":true}"#).unwrap();
        assert_eq!(patient.patient_id, "p1");
        assert!(patient.medication_history.is_empty());
    }
}
