//! Simulated external events raised from the floating test panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no generation backend; these helpers stand in for the events a
//! real task runner would deliver (task finished, task failed, plan ready).

#[cfg(test)]
#[path = "simulate_test.rs"]
mod simulate_test;

use plans::{Payload, PlanError};

use crate::state::messages::{Attachments, MessageStore};
use crate::state::notification::{ErrorInfo, NotificationState};

const DEMO_PLANS_JSON: &str = include_str!("../../fixtures/plans.json");

pub const SUCCESS_TEXT: &str = "Here's the business card you asked for - I've finished it!";
pub const SUCCESS_PREVIEW_URL: &str =
    "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=465&h=279&fit=crop";

/// Error shown when a task fails.
#[must_use]
pub fn task_failure() -> ErrorInfo {
    ErrorInfo::new("IMA Task Data Error", "Please check the network connection and try again.")
}

/// Task finished: clear any error and post the result.
pub fn complete_task(store: &mut MessageStore, notification: &mut NotificationState) -> u64 {
    notification.close();
    store.push_assistant(SUCCESS_TEXT, Attachments::video(SUCCESS_PREVIEW_URL), None)
}

/// Task failed: raise the error banner.
pub fn fail_task(notification: &mut NotificationState) {
    notification.show(task_failure());
}

/// Post a planning payload as a new assistant message.
pub fn post_plan(store: &mut MessageStore, payload: Payload) -> u64 {
    let text = format!("Here's the {} I put together.", describe(&payload));
    store.push_assistant(text, Attachments::default(), Some(payload))
}

fn describe(payload: &Payload) -> &'static str {
    match payload {
        Payload::TaskPlanning(_) => "task plan",
        Payload::VideoPlanning(_) => "video plan",
        Payload::Storyboard(_) => "storyboard",
        Payload::Script(_) => "script",
    }
}

/// Bundled plan payloads cycled by the test panel.
///
/// # Errors
///
/// Returns the decode error if the bundled fixture is malformed.
pub fn demo_plans() -> Result<Vec<Payload>, PlanError> {
    plans::decode_payloads(DEMO_PLANS_JSON)
}
