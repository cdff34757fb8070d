//! Pivot input
//!
//! The rotation center comes from two sources: values the user types, and
//! clicks on the glyph canvas while capture is switched on. The most recent
//! click wins until the user types again.

use kurbo::Point;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotInput {
    typed: Point,
    captured: Option<Point>,
    capture_enabled: bool,
}

impl PivotInput {
    pub fn new(typed: Point, capture_enabled: bool) -> Self {
        Self {
            typed,
            captured: None,
            capture_enabled,
        }
    }

    /// The user edited the coordinate fields
    pub fn edit_fields(&mut self, x: f64, y: f64) {
        self.typed = Point::new(x, y);
        self.captured = None;
    }

    /// A click landed on the canvas.
    ///
    /// Returns the new pivot when capture is on; the click is snapped to
    /// whole units the same way typed values are.
    pub fn capture_click(&mut self, click: Point) -> Option<Point> {
        if !self.capture_enabled {
            return None;
        }
        let pivot = click.round();
        debug!("Captured pivot ({}, {})", pivot.x, pivot.y);
        self.captured = Some(pivot);
        Some(pivot)
    }

    pub fn set_capture_enabled(&mut self, enabled: bool) {
        self.capture_enabled = enabled;
    }

    pub fn capture_enabled(&self) -> bool {
        self.capture_enabled
    }

    /// The pivot to rotate around right now
    pub fn current(&self) -> Point {
        self.captured.unwrap_or(self.typed)
    }
}

impl Default for PivotInput {
    fn default() -> Self {
        Self::new(Point::ORIGIN, false)
    }
}
