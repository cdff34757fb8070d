//! Radial contour composition
//!
//! Rotates a working copy of some contours around a pivot, again and again,
//! collecting each rotated copy. Together with the untouched original on the
//! glyph the copies form a ring with `n`-fold rotational symmetry.

use kurbo::Point;
use tracing::debug;

use crate::geometry::{Outline, StepPlan};

/// Everything the compositor needs besides the contours themselves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeOptions {
    pub pivot: Point,
    pub step_count: i32,
    pub round_output: bool,
}

impl ComposeOptions {
    pub fn plan(&self) -> StepPlan {
        StepPlan::new(self.step_count)
    }
}

/// Builds the rotated copies of `source` around `pivot`.
///
/// The result holds only the new copies; the original placement is assumed
/// to be on the glyph already. `source` itself is never modified.
pub fn compose(
    source: &Outline,
    pivot: Point,
    step_count: i32,
    round_output: bool,
) -> Outline {
    let plan = StepPlan::new(step_count);
    let mut result = Outline::default();

    if source.is_empty() {
        return result;
    }

    let mut working = source.clone();
    for _ in 0..plan.copies {
        // Cumulative: each pass turns the previous copy a step further
        working.rotate_about(plan.angle_degrees, pivot);
        result.append(&working);
    }

    if round_output {
        result.round();
    }

    debug!(
        "Composed {} copies at {}° around ({}, {}): {} contours",
        plan.copies,
        plan.angle_label(),
        pivot.x,
        pivot.y,
        result.len()
    );

    result
}

/// [`compose`] with the options bundled
pub fn compose_options(source: &Outline, options: &ComposeOptions) -> Outline {
    compose(source, options.pivot, options.step_count, options.round_output)
}
