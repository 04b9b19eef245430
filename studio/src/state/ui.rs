//! Local UI chrome state (sidebar, test panel).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of transcript and feedback state
//! so layout controls can evolve independently of message data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Number of entries listed in the sidebar history.
pub const SIDEBAR_HISTORY_LIMIT: usize = 10;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Desktop sidebar collapsed to its icon rail.
    pub sidebar_collapsed: bool,
    /// Mobile sidebar overlay shown.
    pub mobile_sidebar_open: bool,
    /// Index of the next bundled plan payload the test panel will post.
    pub next_demo_plan: usize,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn open_mobile_sidebar(&mut self) {
        self.mobile_sidebar_open = true;
    }

    /// Close the mobile overlay. Returns whether it was open.
    pub fn close_mobile_sidebar(&mut self) -> bool {
        std::mem::replace(&mut self.mobile_sidebar_open, false)
    }

    /// Advance the demo plan cursor over `count` payloads, returning the index to post.
    pub fn take_demo_plan(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let index = self.next_demo_plan % count;
        self.next_demo_plan = index + 1;
        Some(index)
    }
}
