//! Sink for feedback, quick reports and general feedback.
//!
//! There is no collection endpoint; every record is logged to the console as
//! a single JSON line tagged with its channel.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use leptos::logging::{log, warn};
use serde::Serialize;

/// Channel a record was emitted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    MessageFeedback,
    QuickReport,
    FeedbackForm,
    SceneEdit,
}

impl Channel {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MessageFeedback => "message_feedback",
            Self::QuickReport => "quick_report",
            Self::FeedbackForm => "feedback_form",
            Self::SceneEdit => "scene_edit",
        }
    }
}

/// Encode `record` as the line that [`emit`] logs.
///
/// # Errors
///
/// Returns the serialization error for records that cannot be encoded.
pub fn encode<T: Serialize>(channel: Channel, record: &T) -> Result<String, serde_json::Error> {
    Ok(format!("[{}] {}", channel.name(), serde_json::to_string(record)?))
}

/// Log `record` on `channel`.
pub fn emit<T: Serialize>(channel: Channel, record: &T) {
    match encode(channel, record) {
        Ok(line) => log!("{line}"),
        Err(e) => warn!("report: failed to encode {} record: {e}", channel.name()),
    }
}
