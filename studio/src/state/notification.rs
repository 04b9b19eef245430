//! Error banner state.
//!
//! DESIGN
//! ======
//! The banner moves through `Hidden -> Showing -> Reported -> Hidden`. The
//! auto-dismiss after a quick report is driven by a delay owned by the view;
//! each banner instance gets a new sequence number so a stale dismissal from a
//! previous banner can never close the current one.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use serde::Serialize;

/// Delay between a quick report and the banner closing itself.
pub const AUTO_DISMISS_MS: u64 = 2000;

/// Title and body of a user-visible failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub title: String,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into() }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerPhase {
    #[default]
    Hidden,
    Showing,
    /// Quick report sent; waiting for the auto-dismiss.
    Reported,
}

/// Identifies the banner instance an auto-dismiss was scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissToken(u64);

/// Synthetic report produced by the quick-report action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuickReport {
    pub error: ErrorInfo,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    error: Option<ErrorInfo>,
    phase: BannerPhase,
    seq: u64,
}

impl NotificationState {
    #[must_use]
    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> BannerPhase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != BannerPhase::Hidden
    }

    /// Show `error`, replacing any current banner and invalidating its timers.
    pub fn show(&mut self, error: ErrorInfo) {
        self.seq += 1;
        self.error = Some(error);
        self.phase = BannerPhase::Showing;
    }

    /// Send a quick report for the visible error.
    ///
    /// Returns the report to record and the token the auto-dismiss must
    /// present. `None` unless the banner is showing and not yet reported.
    pub fn quick_report(&mut self) -> Option<(QuickReport, DismissToken)> {
        if self.phase != BannerPhase::Showing {
            return None;
        }
        let error = self.error.clone()?;
        self.phase = BannerPhase::Reported;
        Some((QuickReport { error }, DismissToken(self.seq)))
    }

    /// Apply a scheduled auto-dismiss. Ignored unless `token` belongs to the
    /// current, reported banner. Returns whether the banner closed.
    pub fn auto_dismiss(&mut self, token: DismissToken) -> bool {
        if token.0 != self.seq || self.phase != BannerPhase::Reported {
            return false;
        }
        self.hide();
        true
    }

    /// Close the banner immediately.
    pub fn close(&mut self) {
        self.hide();
    }

    fn hide(&mut self) {
        self.seq += 1;
        self.error = None;
        self.phase = BannerPhase::Hidden;
    }
}
