//! File-backed session store.
//!
//! Persists the doctor session as a flat JSON document under the platform
//! config directory. Login fields and the device push token share the file
//! but not a lifecycle: `logout` clears the former and leaves the latter.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use chakravue_core::error::Result;
use chakravue_core::session::SessionStore;

use crate::paths::ChakraPaths;
use crate::storage::AtomicJsonFile;

const DEFAULT_DOCTOR_NAME: &str = "Doctor";

/// The persisted settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionRecord {
    #[serde(rename = "doctorId", skip_serializing_if = "Option::is_none")]
    doctor_id: Option<String>,
    #[serde(rename = "doctorName", skip_serializing_if = "Option::is_none")]
    doctor_name: Option<String>,
    #[serde(rename = "doctorEmail", skip_serializing_if = "Option::is_none")]
    doctor_email: Option<String>,
    #[serde(rename = "fcmToken", skip_serializing_if = "Option::is_none")]
    fcm_token: Option<String>,
}

/// `SessionStore` implementation over an atomic JSON file.
pub struct FileSessionStore {
    file: AtomicJsonFile<SessionRecord>,
}

impl FileSessionStore {
    /// Creates a store at the default path (~/.config/chakravue/session.json).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ChakraPaths::session_file()?))
    }

    /// Creates a store with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Reads the current record; an unreadable file degrades to empty.
    fn record(&self) -> SessionRecord {
        match self.file.load() {
            Ok(record) => record.unwrap_or_default(),
            Err(e) => {
                warn!("failed to read session file, treating as empty: {}", e);
                SessionRecord::default()
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn save_session(&self, id: &str, name: &str, email: &str) -> Result<()> {
        self.file.update(SessionRecord::default(), |record| {
            record.doctor_id = Some(id.to_string());
            record.doctor_name = Some(name.to_string());
            if !email.is_empty() {
                record.doctor_email = Some(email.to_string());
            }
            Ok(())
        })
    }

    fn doctor_id(&self) -> String {
        self.record().doctor_id.unwrap_or_default()
    }

    fn doctor_name(&self) -> String {
        self.record()
            .doctor_name
            .unwrap_or_else(|| DEFAULT_DOCTOR_NAME.to_string())
    }

    fn doctor_email(&self) -> String {
        self.record().doctor_email.unwrap_or_default()
    }

    fn logout(&self) -> Result<()> {
        self.file.update(SessionRecord::default(), |record| {
            record.doctor_id = None;
            record.doctor_name = None;
            record.doctor_email = None;
            // fcm_token stays: it identifies the device, not the account
            Ok(())
        })
    }

    fn save_push_token(&self, token: &str) -> Result<()> {
        self.file.update(SessionRecord::default(), |record| {
            record.fcm_token = Some(token.to_string());
            Ok(())
        })
    }

    fn push_token(&self) -> String {
        self.record().fcm_token.unwrap_or_default()
    }
}
