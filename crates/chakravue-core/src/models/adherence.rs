//! Drug-adherence tracking records.

use serde::{Deserialize, Serialize};

use super::null_default;

/// One patient in the adherence listing, with their medication history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdherencePatient {
    #[serde(rename = "patient_id", default, deserialize_with = "null_default")]
    pub patient_id: String,
    #[serde(rename = "patient_name", default, deserialize_with = "null_default")]
    pub patient_name: String,
    #[serde(
        rename = "last_medication_at",
        default,
        deserialize_with = "null_default"
    )]
    pub last_medication_at: String,
    #[serde(
        rename = "medication_history",
        default,
        deserialize_with = "null_default"
    )]
    pub medication_history: Vec<MedicationEntry>,
}

/// One taken/skipped medication event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationEntry {
    #[serde(default, deserialize_with = "null_default")]
    pub medicine: String,
    /// 1 when the dose was taken, 0 otherwise.
    #[serde(default, deserialize_with = "null_default")]
    pub taken: i32,
    #[serde(rename = "created_at", default, deserialize_with = "null_default")]
    pub created_at: String,
}
