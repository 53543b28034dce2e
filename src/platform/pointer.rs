//! Pointer tracking for the play area
//!
//! The host feeds raw mouse events in; the simulation only ever sees
//! `cursor()`, which is `None` whenever the pointer is outside the canvas.

use glam::DVec2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub inside: bool,
    /// Last known position in canvas pixels
    pub pos: Option<DVec2>,
}

impl PointerState {
    pub fn enter(&mut self) {
        self.inside = true;
    }

    /// Pointer left the canvas: forget where it was
    pub fn leave(&mut self) {
        self.inside = false;
        self.pos = None;
    }

    /// Record a move given in client (CSS) pixels
    ///
    /// The canvas may be drawn at a different size than its backing store,
    /// so the offset from the element's top-left corner is scaled by
    /// `canvas_size / rect_size`.
    pub fn move_client(&mut self, client: DVec2, rect_origin: DVec2, rect_size: DVec2, canvas_size: DVec2) {
        let scale = DVec2::new(
            if rect_size.x > 0.0 { canvas_size.x / rect_size.x } else { 1.0 },
            if rect_size.y > 0.0 { canvas_size.y / rect_size.y } else { 1.0 },
        );
        self.pos = Some((client - rect_origin) * scale);
    }

    /// Cursor position to feed the simulation
    pub fn cursor(&self) -> Option<DVec2> {
        if self.inside { self.pos } else { None }
    }
}
