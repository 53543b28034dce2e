//! Win overlay layout
//!
//! The renderer draws the overlay; hit-testing its reset button lives here so
//! the host can route canvas clicks without knowing the layout.

use glam::DVec2;

use crate::sim::Bounds;

pub const RESET_BUTTON_WIDTH: f64 = 180.0;
pub const RESET_BUTTON_HEIGHT: f64 = 50.0;
/// Gap between the play-area center line and the button's top edge
pub const RESET_BUTTON_OFFSET_Y: f64 = 30.0;

/// Axis-aligned reset button shown once the puzzle is solved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResetButton {
    pub min: DVec2,
    pub size: DVec2,
}

impl ResetButton {
    /// Button centered horizontally, just below the middle of the play area
    pub fn for_bounds(bounds: &Bounds) -> Self {
        let center = bounds.center();
        Self {
            min: DVec2::new(
                center.x - RESET_BUTTON_WIDTH / 2.0,
                center.y + RESET_BUTTON_OFFSET_Y,
            ),
            size: DVec2::new(RESET_BUTTON_WIDTH, RESET_BUTTON_HEIGHT),
        }
    }

    /// Edges are inclusive
    pub fn contains(&self, point: DVec2) -> bool {
        let max = self.min + self.size;
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }
}
