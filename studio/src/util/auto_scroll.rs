//! Auto-scroll controller for the transcript and the plan card stack.
//!
//! DESIGN
//! ======
//! The controller is a three-phase state machine:
//!
//! - `Idle`: pinned to the latest entry; list growth emits a scroll command.
//! - `AutoScrolling { seq }`: a programmatic scroll is in flight. Scroll
//!   events are ignored so the browser's own scroll is never mistaken for the
//!   user's, and growth is deferred until the scroll finishes.
//! - `UserControlled`: the user scrolled away; growth emits nothing until the
//!   offset returns within [`PIN_TOLERANCE_PX`] of the pinned position.
//!
//! The in-flight scroll ends on `scrollend` or on the [`GUARD_FALLBACK_MS`]
//! timer, whichever fires first; the later one carries a stale sequence
//! number and is ignored.
//!
//! With only the timer available, a real user scroll that lands inside the
//! guard window is dropped.

#[cfg(test)]
#[path = "auto_scroll_test.rs"]
mod auto_scroll_test;

/// Maximum distance from the pinned offset still treated as "at the latest entry".
pub const PIN_TOLERANCE_PX: f64 = 50.0;
/// Guard release when `scrollend` never arrives.
pub const GUARD_FALLBACK_MS: u64 = 600;

/// What the panel keeps in view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Bottom of a linear transcript.
    Bottom,
    /// Top edge of the newest card in a stack.
    LatestTop,
}

/// Layout snapshot of a scroll container, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    /// Offset of the newest entry's top edge within the scroll content.
    /// `None` while it has not been measured.
    pub latest_top: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    #[default]
    Idle,
    AutoScrolling { seq: u64 },
    UserControlled,
}

/// Request to scroll the panel to its pinned offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollCommand {
    pub seq: u64,
    pub anchor: Anchor,
}

impl ScrollCommand {
    /// Target `scroll_top`, or `None` when the layout is not measurable yet.
    #[must_use]
    pub fn target(&self, metrics: &ScrollMetrics) -> Option<f64> {
        pinned_offset(self.anchor, metrics)
    }
}

#[derive(Clone, Debug)]
pub struct AutoScroll {
    anchor: Anchor,
    phase: ScrollPhase,
    tracked_len: usize,
    seq: u64,
    deferred: bool,
}

impl AutoScroll {
    #[must_use]
    pub fn new(anchor: Anchor) -> Self {
        Self { anchor, phase: ScrollPhase::Idle, tracked_len: 0, seq: 0, deferred: false }
    }

    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Tracked list length changed.
    pub fn on_len_change(&mut self, len: usize) -> Option<ScrollCommand> {
        let grew = len > self.tracked_len;
        self.tracked_len = len;
        if !grew {
            return None;
        }
        match self.phase {
            ScrollPhase::Idle => Some(self.start()),
            ScrollPhase::AutoScrolling { .. } => {
                self.deferred = true;
                None
            }
            ScrollPhase::UserControlled => None,
        }
    }

    /// Container scrolled. Re-evaluates whether the user has left the pinned offset.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) {
        if matches!(self.phase, ScrollPhase::AutoScrolling { .. }) {
            return;
        }
        let Some(pinned) = pinned_offset(self.anchor, metrics) else {
            return;
        };
        self.phase = if (metrics.scroll_top - pinned).abs() > PIN_TOLERANCE_PX {
            ScrollPhase::UserControlled
        } else {
            ScrollPhase::Idle
        };
    }

    /// The scroll started with `seq` has completed.
    ///
    /// Returns a follow-up command when the list grew during the guard.
    pub fn finish(&mut self, seq: u64) -> Option<ScrollCommand> {
        if self.phase != (ScrollPhase::AutoScrolling { seq }) {
            return None;
        }
        self.phase = ScrollPhase::Idle;
        if std::mem::take(&mut self.deferred) {
            return Some(self.start());
        }
        None
    }

    fn start(&mut self) -> ScrollCommand {
        self.seq += 1;
        self.phase = ScrollPhase::AutoScrolling { seq: self.seq };
        ScrollCommand { seq: self.seq, anchor: self.anchor }
    }
}

/// Offset the panel rests at when pinned to its anchor.
#[must_use]
pub fn pinned_offset(anchor: Anchor, metrics: &ScrollMetrics) -> Option<f64> {
    match anchor {
        Anchor::Bottom => {
            if metrics.scroll_height <= 0.0 {
                return None;
            }
            Some((metrics.scroll_height - metrics.client_height).max(0.0))
        }
        Anchor::LatestTop => metrics.latest_top,
    }
}

/// Spacer height below the newest card so its top edge can reach the container top.
///
/// `padding_below` is whatever layout space already separates the card from
/// the spacer.
#[must_use]
pub fn trailing_spacer(container_height: f64, latest_card_height: f64, padding_below: f64) -> f64 {
    (container_height - latest_card_height - padding_below).max(0.0)
}
