//! Dashboard snapshot model.
//!
//! An immutable view of "what the dashboard should currently show",
//! replaced wholesale by the coordinator on every load/refresh cycle.

use crate::models::{AdherencePatient, Submission, VideoCallRequest};

/// Published dashboard contents.
///
/// `is_loading` is true only until the first load cycle completes (success
/// or not); `is_refreshing` is true only while a user-initiated refresh is
/// in flight. Silent refreshes toggle neither.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub doctor_name: String,
    pub urgent_reviews: Vec<Submission>,
    pub history: Vec<Submission>,
    pub vision_submissions: Vec<Submission>,
    pub video_call_requests: Vec<VideoCallRequest>,
    pub adherence_patients: Vec<AdherencePatient>,
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self {
            is_loading: true,
            is_refreshing: false,
            doctor_name: String::new(),
            urgent_reviews: Vec::new(),
            history: Vec::new(),
            vision_submissions: Vec::new(),
            video_call_requests: Vec::new(),
            adherence_patients: Vec::new(),
        }
    }
}

impl DashboardSnapshot {
    /// Urgent reviews whose timestamp falls on the given `YYYY-MM-DD` date.
    ///
    /// Timestamps are ISO-8601 strings; the date component is compared as a
    /// string prefix, not parsed.
    pub fn urgent_reviews_today(&self, date: &str) -> usize {
        count_on_date(self.urgent_reviews.iter().map(|s| s.timestamp.as_str()), date)
    }

    /// Video-call requests whose timestamp falls on the given date.
    pub fn call_requests_today(&self, date: &str) -> usize {
        count_on_date(
            self.video_call_requests.iter().map(|r| r.timestamp.as_str()),
            date,
        )
    }
}

/// Today's local calendar date as `YYYY-MM-DD`, for the `*_today` counts.
pub fn local_date_string() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn count_on_date<'a>(timestamps: impl Iterator<Item = &'a str>, date: &str) -> usize {
    timestamps
        .filter(|ts| !date.is_empty() && ts.starts_with(date))
        .count()
}
