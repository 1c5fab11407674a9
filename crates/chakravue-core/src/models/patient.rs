//! Patient directory and case-record models.

use serde::{Deserialize, Serialize};

use super::null_default;

/// A patient row in the directory listing (notification recipients).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientSimple {
    #[serde(rename = "_id", default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
}

/// The full case record returned by the patient search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(rename = "_id", default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "registrationId", default, deserialize_with = "null_default")]
    pub registration_id: String,
    #[serde(rename = "patientDetails", default, deserialize_with = "null_default")]
    pub patient_details: PatientDetails,
    #[serde(
        rename = "presentingComplaints",
        default,
        deserialize_with = "null_default"
    )]
    pub presenting_complaints: PresentingComplaints,
    #[serde(rename = "drugHistory", default, deserialize_with = "null_default")]
    pub drug_history: DrugHistory,
    #[serde(default, deserialize_with = "null_default")]
    pub history: Vec<HistoryEntry>,
    #[serde(default, deserialize_with = "null_default")]
    pub doctor: DoctorInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientDetails {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentingComplaints {
    #[serde(default, deserialize_with = "null_default")]
    pub complaints: Vec<ComplaintItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplaintItem {
    #[serde(default, deserialize_with = "null_default")]
    pub complaint: String,
    #[serde(default, deserialize_with = "null_default")]
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrugHistory {
    #[serde(rename = "currentMeds", default, deserialize_with = "null_default")]
    pub current_meds: Vec<MedicationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationItem {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub drug: String,
    #[serde(default, deserialize_with = "null_default")]
    pub dosage: String,
    #[serde(default, deserialize_with = "null_default")]
    pub indication: String,
}

/// One consultation entry in a patient's case history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "null_default")]
    pub at: String,
    #[serde(default, deserialize_with = "null_default")]
    pub problem: String,
    #[serde(rename = "doctor_notes", default, deserialize_with = "null_default")]
    pub doctor_notes: String,
    #[serde(default, deserialize_with = "null_default")]
    pub medicines: Vec<String>,
    #[serde(rename = "procedure_type", default, deserialize_with = "null_default")]
    pub procedure_type: String,
    #[serde(rename = "procedure_done", default, deserialize_with = "null_default")]
    pub procedure_done: bool,
}

/// Prescription map attached by the treating doctor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorInfo {
    #[serde(default, deserialize_with = "null_default")]
    pub prescription: std::collections::HashMap<String, String>,
}
