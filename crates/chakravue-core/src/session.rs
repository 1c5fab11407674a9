//! Session storage trait.
//!
//! Single source of truth for "who is logged in" on this device. The login
//! fields (id, name, email) live and die together; the push token has an
//! independent, device-scoped lifecycle and survives logout.

use crate::error::Result;

/// Durable local storage for the doctor session.
///
/// Getters never fail: an absent key (or an unreadable backing file) yields
/// the documented default. Mutators return `Result` because the backing
/// store is a file, but callers other than tests treat failures as
/// log-and-continue.
pub trait SessionStore: Send + Sync {
    /// True iff a non-empty doctor identifier is stored.
    fn is_logged_in(&self) -> bool {
        !self.doctor_id().is_empty()
    }

    /// Persists identifier and name; persists email only when non-empty,
    /// so a blank email never overwrites a previously stored one.
    /// Idempotent.
    fn save_session(&self, id: &str, name: &str, email: &str) -> Result<()>;

    /// Stored doctor id, or `""`.
    fn doctor_id(&self) -> String;

    /// Stored doctor name, or `"Doctor"`.
    fn doctor_name(&self) -> String;

    /// Stored doctor email, or `""`.
    fn doctor_email(&self) -> String;

    /// Clears id, name, and email together. The push token is NOT cleared:
    /// device identity is independent of account identity.
    fn logout(&self) -> Result<()>;

    /// Stores the device push-notification token.
    fn save_push_token(&self, token: &str) -> Result<()>;

    /// Stored push token, or `""`.
    fn push_token(&self) -> String;

    /// True iff a push token is stored.
    fn has_push_token(&self) -> bool {
        !self.push_token().is_empty()
    }
}
