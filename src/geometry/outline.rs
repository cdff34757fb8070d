//! Glyph outlines as plain geometric data
//!
//! An [`Outline`] is an ordered list of contours, each an ordered list of
//! points. This is the data the compositor takes in and hands back; the
//! host layer converts to and from its own glyph objects at the boundary.

use kurbo::{Affine, BezPath, Point};

use super::point::{OutlinePoint, PointKind};

/// A single path of a glyph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    pub points: Vec<OutlinePoint>,
}

impl Contour {
    pub fn new(points: Vec<OutlinePoint>) -> Self {
        Self { points }
    }

    /// A contour is open when it begins with a move point
    pub fn is_closed(&self) -> bool {
        self.points
            .first()
            .map_or(true, |point| point.kind != PointKind::Move)
    }

    pub fn transform(&mut self, affine: Affine) {
        for point in &mut self.points {
            point.transform(affine);
        }
    }

    pub fn round(&mut self) {
        for point in &mut self.points {
            point.round();
        }
    }

    /// Converts the point list to a drawable path.
    ///
    /// Returns `None` for point sequences that don't describe a valid UFO
    /// contour (empty, off-curves before a line, more than two off-curves
    /// before a cubic, a move point anywhere but first).
    pub fn to_bezpath(&self) -> Option<BezPath> {
        if self.points.is_empty() {
            return None;
        }

        let mut path = BezPath::new();

        if !self.is_closed() {
            path.move_to(self.points[0].position);
            let mut pending = Vec::new();
            for point in &self.points[1..] {
                push_point(&mut path, &mut pending, point)?;
            }
            // Trailing off-curves of an open contour draw nothing
            return Some(path);
        }

        let Some(last_on_curve) =
            self.points.iter().rposition(|p| p.kind.is_on_curve())
        else {
            return Some(quadratic_loop(&self.points));
        };

        // Start at the last on-curve point so every segment ends on-curve and
        // the final one comes back around to where we started
        path.move_to(self.points[last_on_curve].position);
        let mut pending = Vec::new();
        let count = self.points.len();
        for offset in 1..=count {
            let point = &self.points[(last_on_curve + offset) % count];
            push_point(&mut path, &mut pending, point)?;
        }
        path.close_path();

        Some(path)
    }
}

/// Feeds one point into the path, buffering off-curves until the on-curve
/// point that ends their segment arrives.
fn push_point(
    path: &mut BezPath,
    pending: &mut Vec<Point>,
    point: &OutlinePoint,
) -> Option<()> {
    match point.kind {
        PointKind::OffCurve => {
            pending.push(point.position);
            return Some(());
        }
        PointKind::Move => return None,
        PointKind::Line => {
            if !pending.is_empty() {
                return None;
            }
            path.line_to(point.position);
        }
        PointKind::Curve => match pending.as_slice() {
            [] => path.line_to(point.position),
            [control] => path.quad_to(*control, point.position),
            [first, second] => path.curve_to(*first, *second, point.position),
            _ => return None,
        },
        PointKind::QCurve => {
            if let Some((last, rest)) = pending.split_last() {
                let mut previous = rest.first().copied();
                for control in rest.iter().skip(1) {
                    if let Some(prev) = previous {
                        path.quad_to(prev, prev.midpoint(*control));
                    }
                    previous = Some(*control);
                }
                if let Some(prev) = previous {
                    path.quad_to(prev, prev.midpoint(*last));
                }
                path.quad_to(*last, point.position);
            } else {
                path.line_to(point.position);
            }
        }
    }
    pending.clear();
    Some(())
}

/// A closed contour with no on-curve points at all: every on-curve point
/// is implied halfway between two neighbouring controls.
fn quadratic_loop(points: &[OutlinePoint]) -> BezPath {
    let mut path = BezPath::new();
    let count = points.len();
    let at = |i: usize| points[i % count].position;

    path.move_to(at(count - 1).midpoint(at(0)));
    for i in 0..count {
        path.quad_to(at(i), at(i).midpoint(at(i + 1)));
    }
    path.close_path();
    path
}

/// An ordered collection of contours
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    contours: Vec<Contour>,
}

impl Outline {
    pub fn new(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.contours.iter().map(|c| c.points.len()).sum()
    }

    pub fn push(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    /// Appends a copy of every contour in `other`, keeping their order
    pub fn append(&mut self, other: &Outline) {
        self.contours.extend(other.contours.iter().cloned());
    }

    pub fn transform(&mut self, affine: Affine) {
        for contour in &mut self.contours {
            contour.transform(affine);
        }
    }

    /// Rotates every point in place around `pivot`.
    ///
    /// Positive angles turn counter-clockwise in the y-up glyph space.
    pub fn rotate_about(&mut self, degrees: f64, pivot: Point) {
        self.transform(Affine::rotate_about(degrees.to_radians(), pivot));
    }

    /// Rounds every coordinate to the nearest integer
    pub fn round(&mut self) {
        for contour in &mut self.contours {
            contour.round();
        }
    }
}

impl FromIterator<Contour> for Outline {
    fn from_iter<I: IntoIterator<Item = Contour>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}
