//! Per-message satisfaction feedback.
//!
//! DESIGN
//! ======
//! Reactions are stored for every message id that ever received one, but only
//! the newest assistant message accepts updates. Every mutating call takes the
//! transcript so that rule is checked here instead of in each view.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::collections::HashMap;

use serde::Serialize;

use crate::state::messages::MessageStore;

pub const POSITIVE_TAGS: [&str; 4] = ["Accurate", "Clear", "Helpful", "Fast"];
pub const NEGATIVE_TAGS: [&str; 4] = ["Inaccurate", "Unclear", "Not helpful", "Too slow"];

/// Thumbs up / thumbs down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Positive,
    Negative,
}

impl Reaction {
    /// Quick-select tags offered in the detail form for this reaction.
    #[must_use]
    pub fn quick_tags(self) -> &'static [&'static str] {
        match self {
            Self::Positive => &POSITIVE_TAGS,
            Self::Negative => &NEGATIVE_TAGS,
        }
    }

    /// Prompt shown above the quick tags.
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Positive => "Thank you for your feedback! What did you like?",
            Self::Negative => "Sorry we couldn't help. What went wrong?",
        }
    }
}

/// Feedback recorded against one message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageFeedback {
    pub reaction: Option<Reaction>,
    pub detail_open: bool,
    /// Selected tags in selection order.
    pub tags: Vec<String>,
    pub comment: String,
}

impl MessageFeedback {
    #[must_use]
    pub fn detail_visible(&self) -> bool {
        self.reaction.is_some() && self.detail_open
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Record handed to the feedback sink on submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub message_id: u64,
    pub reaction: Reaction,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Feedback for all messages in the session.
#[derive(Clone, Debug, Default)]
pub struct FeedbackTracker {
    entries: HashMap<u64, MessageFeedback>,
}

impl FeedbackTracker {
    /// Feedback for `id`, or the empty state.
    #[must_use]
    pub fn entry(&self, id: u64) -> MessageFeedback {
        self.entries.get(&id).cloned().unwrap_or_default()
    }

    /// Whether `id` currently accepts feedback.
    #[must_use]
    pub fn is_eligible(store: &MessageStore, id: u64) -> bool {
        store.last_assistant_id() == Some(id)
    }

    fn eligible_entry(&mut self, store: &MessageStore, id: u64) -> Option<&mut MessageFeedback> {
        if !Self::is_eligible(store, id) {
            return None;
        }
        Some(self.entries.entry(id).or_default())
    }

    /// Toggle a reaction.
    ///
    /// Choosing the active reaction again clears it and hides the detail form;
    /// choosing the other one replaces it and shows the form. Returns `false`
    /// when the message is not eligible.
    pub fn react(&mut self, store: &MessageStore, id: u64, reaction: Reaction) -> bool {
        let Some(entry) = self.eligible_entry(store, id) else {
            return false;
        };
        if entry.reaction == Some(reaction) {
            entry.reaction = None;
            entry.detail_open = false;
        } else {
            entry.reaction = Some(reaction);
            entry.detail_open = true;
        }
        true
    }

    /// Toggle a quick-select tag. Returns `false` when the message is not eligible.
    pub fn toggle_tag(&mut self, store: &MessageStore, id: u64, tag: &str) -> bool {
        let Some(entry) = self.eligible_entry(store, id) else {
            return false;
        };
        if let Some(pos) = entry.tags.iter().position(|t| t == tag) {
            entry.tags.remove(pos);
        } else {
            entry.tags.push(tag.to_owned());
        }
        true
    }

    pub fn set_comment(&mut self, store: &MessageStore, id: u64, comment: String) -> bool {
        let Some(entry) = self.eligible_entry(store, id) else {
            return false;
        };
        entry.comment = comment;
        true
    }

    /// Hide the detail form, keeping the reaction ("Skip").
    pub fn close_detail(&mut self, id: u64) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.detail_open = false;
        }
    }

    /// Close the detail form and return the submission to record.
    ///
    /// Returns `None` when the message is not eligible or has no reaction.
    pub fn submit(&mut self, store: &MessageStore, id: u64) -> Option<FeedbackSubmission> {
        let entry = self.eligible_entry(store, id)?;
        let reaction = entry.reaction?;
        entry.detail_open = false;
        Some(FeedbackSubmission {
            message_id: id,
            reaction,
            tags: entry.tags.clone(),
            comment: entry.comment.trim().to_owned(),
        })
    }
}
