//! General feedback / error report form.
//!
//! DESIGN
//! ======
//! Submission is simulated: `begin_submit` validates and hands back a ticket,
//! the view waits [`SUBMIT_DELAY_MS`], then presents the ticket to
//! `complete_submit`. Closing or resetting the form bumps the sequence number
//! so a completion that arrives afterwards is dropped.

#[cfg(test)]
#[path = "feedback_form_test.rs"]
mod feedback_form_test;

use serde::Serialize;

use crate::state::notification::ErrorInfo;

/// Fake network latency for a submission.
pub const SUBMIT_DELAY_MS: u64 = 1000;
pub const MAX_SCREENSHOTS: usize = 3;
/// Tag preselected when the form is opened from an error banner.
pub const ERROR_DEFAULT_TAG: &str = "Unexpected Behavior";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    #[default]
    Bug,
    Feature,
    Other,
}

impl FeedbackKind {
    pub const ALL: [Self; 3] = [Self::Bug, Self::Feature, Self::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bug => "Bug Report",
            Self::Feature => "Feature Request",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn tag_options(self) -> &'static [&'static str] {
        match self {
            Self::Bug => &["UI Issue", "Performance", "Crash", "Data Loss", "Unexpected Behavior"],
            Self::Feature => &["Productivity", "Integration", "Customization", "Automation", "Accessibility"],
            Self::Other => &["Question", "Documentation", "Suggestion", "Compliment", "General"],
        }
    }
}

/// Image picked for upload. Only metadata is kept; the bytes stay in the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screenshot {
    pub name: String,
    pub mime: String,
}

impl Screenshot {
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self { name: name.into(), mime: mime.into() }
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// Name truncated for the preview badge.
    #[must_use]
    pub fn short_name(&self) -> String {
        if self.name.chars().count() > 8 {
            let head: String = self.name.chars().take(8).collect();
            format!("{head}...")
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("description is required")]
    EmptyDescription,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

/// Proof that a submission was started for the current form contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// Payload recorded when a submission completes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReport {
    pub kind: FeedbackKind,
    pub subject: String,
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    pub include_session: bool,
    pub screenshots: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackForm {
    pub open: bool,
    pub kind: FeedbackKind,
    pub subject: String,
    pub description: String,
    pub email: String,
    pub include_session: bool,
    pub screenshots: Vec<Screenshot>,
    pub tags: Vec<String>,
    /// Error the form was opened for, if any.
    pub error: Option<ErrorInfo>,
    submitting: bool,
    seq: u64,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            open: false,
            kind: FeedbackKind::Bug,
            subject: String::new(),
            description: String::new(),
            email: String::new(),
            include_session: true,
            screenshots: Vec::new(),
            tags: Vec::new(),
            error: None,
            submitting: false,
            seq: 0,
        }
    }
}

impl FeedbackForm {
    /// Open a blank general-feedback form.
    pub fn open_blank(&mut self) {
        self.reset();
        self.open = true;
    }

    /// Open the form pre-filled from an error banner.
    pub fn open_for_error(&mut self, error: &ErrorInfo) {
        self.reset();
        self.open = true;
        self.kind = FeedbackKind::Bug;
        self.subject.clone_from(&error.title);
        self.description = format!("Error: {}", error.message);
        self.tags = vec![ERROR_DEFAULT_TAG.to_owned()];
        self.error = Some(error.clone());
    }

    /// Close without submitting. Cancels any pending completion.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        let seq = self.seq + 1;
        *self = Self { seq, ..Self::default() };
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Switch kind. Tag options differ per kind, so the selection is cleared.
    pub fn set_kind(&mut self, kind: FeedbackKind) {
        self.kind = kind;
        self.tags.clear();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_owned());
        }
    }

    /// Add picked files, keeping images only and at most [`MAX_SCREENSHOTS`].
    ///
    /// Returns how many files were accepted.
    pub fn add_screenshots(&mut self, files: impl IntoIterator<Item = Screenshot>) -> usize {
        let before = self.screenshots.len();
        self.screenshots.extend(files.into_iter().filter(Screenshot::is_image));
        self.screenshots.truncate(MAX_SCREENSHOTS);
        self.screenshots.len().saturating_sub(before)
    }

    pub fn remove_screenshot(&mut self, index: usize) {
        if index < self.screenshots.len() {
            self.screenshots.remove(index);
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.description.trim().is_empty() {
            return Err(FormError::EmptyDescription);
        }
        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.validate().is_ok()
    }

    /// Start a submission.
    ///
    /// # Errors
    ///
    /// Fails when a submission is already running or the fields are invalid.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        self.validate()?;
        self.submitting = true;
        Ok(SubmitTicket(self.seq))
    }

    /// Finish a submission started with `ticket`.
    ///
    /// Returns the report and resets and closes the form. Returns `None` when
    /// the form was closed or reset since the ticket was issued.
    pub fn complete_submit(&mut self, ticket: SubmitTicket) -> Option<FeedbackReport> {
        if !self.submitting || ticket.0 != self.seq {
            return None;
        }
        let report = FeedbackReport {
            kind: self.kind,
            subject: self.subject.trim().to_owned(),
            description: self.description.trim().to_owned(),
            email: self.email.trim().to_owned(),
            include_session: self.include_session,
            screenshots: self.screenshots.iter().map(|s| s.name.clone()).collect(),
            tags: self.tags.clone(),
            error: self.error.clone(),
        };
        self.reset();
        Some(report)
    }
}

fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !raw.contains(char::is_whitespace)
}
