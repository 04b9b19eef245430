//! Position and drag handling for the floating test panel.

#[cfg(test)]
#[path = "drag_position_test.rs"]
mod drag_position_test;

use serde::{Deserialize, Serialize};

use crate::util::settings::Setting;

/// Where the panel's top-left corner was last dropped.
pub const TEST_PANEL_POSITION: Setting<Position> = Setting::new("ima_studio_test_panel_position");

/// Gap kept between the panel and the right viewport edge by default.
pub const EDGE_MARGIN_PX: f64 = 24.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Viewport and panel sizes in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub panel_width: f64,
    pub panel_height: f64,
}

impl Bounds {
    /// Right edge, vertically centred.
    #[must_use]
    pub fn default_position(&self) -> Position {
        Position {
            x: (self.viewport_width - self.panel_width - EDGE_MARGIN_PX).max(0.0),
            y: ((self.viewport_height - self.panel_height) / 2.0).max(0.0),
        }
    }

    /// Keep the whole panel on screen.
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        let max_x = (self.viewport_width - self.panel_width).max(0.0);
        let max_y = (self.viewport_height - self.panel_height).max(0.0);
        Position { x: pos.x.clamp(0.0, max_x), y: pos.y.clamp(0.0, max_y) }
    }
}

/// Pointer drag in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    grab_offset: Position,
}

impl Drag {
    /// Start dragging a panel at `origin` from pointer `pointer`.
    #[must_use]
    pub fn start(origin: Position, pointer: Position) -> Self {
        Self { grab_offset: Position { x: pointer.x - origin.x, y: pointer.y - origin.y } }
    }

    /// Panel position for the current pointer, kept inside `bounds`.
    #[must_use]
    pub fn move_to(&self, pointer: Position, bounds: &Bounds) -> Position {
        bounds.clamp(Position { x: pointer.x - self.grab_offset.x, y: pointer.y - self.grab_offset.y })
    }
}
