//! Points in a glyph outline
//!
//! The compositor works on plain geometric data. An [`OutlinePoint`] is a
//! position in glyph design space plus the UFO point type and smooth flag,
//! which is all a rotation needs to carry through unchanged.

use kurbo::{Affine, Point};

/// The role a point plays in its contour, mirroring the UFO point types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    Move,     // Start of an open contour
    Line,     // On-curve, straight segment ends here
    Curve,    // On-curve, cubic segment ends here
    QCurve,   // On-curve, quadratic spline ends here
    OffCurve, // Control point
}

impl PointKind {
    /// Checks if this point lies on the curve
    pub fn is_on_curve(&self) -> bool {
        !matches!(self, PointKind::OffCurve)
    }
}

/// A single point of a contour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlinePoint {
    pub position: Point, // Position in glyph coordinate space
    pub kind: PointKind,
    pub smooth: bool,
}

impl OutlinePoint {
    pub fn new(position: impl Into<Point>, kind: PointKind, smooth: bool) -> Self {
        Self {
            position: position.into(),
            kind,
            smooth,
        }
    }

    /// Shorthand for an on-curve line point
    pub fn line(x: f64, y: f64) -> Self {
        Self::new((x, y), PointKind::Line, false)
    }

    /// Shorthand for an off-curve control point
    pub fn off(x: f64, y: f64) -> Self {
        Self::new((x, y), PointKind::OffCurve, false)
    }

    /// Shorthand for an on-curve point ending a cubic segment
    pub fn curve(x: f64, y: f64, smooth: bool) -> Self {
        Self::new((x, y), PointKind::Curve, smooth)
    }

    pub fn transform(&mut self, affine: Affine) {
        self.position = affine * self.position;
    }

    /// Rounds both coordinates to the nearest integer, halves away from zero
    pub fn round(&mut self) {
        self.position = self.position.round();
    }
}
