//! A rotator tool session
//!
//! Holds the values the user is working with (pivot, steps, rounding,
//! capture) and runs the compositor against a host glyph, either as a
//! throwaway preview or as an undoable commit.

use kurbo::Point;
use tracing::{debug, info};

use crate::core::errors::{validate_finite_coords, RotatorResult};
use crate::core::settings::{RotatorSettings, UNDO_LABEL};
use crate::editing::compose::{compose_options, ComposeOptions};
use crate::editing::pivot::PivotInput;
use crate::geometry::{Outline, StepPlan};
use crate::host::GlyphHost;

#[derive(Debug, Clone)]
pub struct RotatorSession {
    pivot: PivotInput,
    steps: i32,
    rounding: bool,
    /// Carried through so `settings` hands back what it was given
    base: RotatorSettings,
}

impl RotatorSession {
    pub fn new(settings: RotatorSettings) -> Self {
        Self {
            pivot: PivotInput::new(
                Point::new(settings.pivot_x, settings.pivot_y),
                settings.capture_clicks,
            ),
            steps: settings.steps,
            rounding: settings.round_result,
            base: settings,
        }
    }

    pub fn set_steps(&mut self, steps: i32) {
        self.steps = steps;
    }

    pub fn set_rounding(&mut self, rounding: bool) {
        self.rounding = rounding;
    }

    pub fn set_capture(&mut self, enabled: bool) {
        self.pivot.set_capture_enabled(enabled);
    }

    /// The user typed new pivot coordinates
    pub fn edit_pivot(&mut self, x: f64, y: f64) -> RotatorResult<()> {
        validate_finite_coords(x, y)?;
        self.pivot.edit_fields(x, y);
        Ok(())
    }

    /// A click on the canvas; moves the pivot only while capture is on
    pub fn handle_click(&mut self, click: Point) -> Option<Point> {
        self.pivot.capture_click(click)
    }

    pub fn pivot(&self) -> Point {
        self.pivot.current()
    }

    pub fn plan(&self) -> StepPlan {
        StepPlan::new(self.steps)
    }

    pub fn options(&self) -> ComposeOptions {
        ComposeOptions {
            pivot: self.pivot.current(),
            step_count: self.steps,
            round_output: self.rounding,
        }
    }

    /// The copies a commit would add, without touching the glyph
    pub fn preview(&self, host: &impl GlyphHost) -> Outline {
        let source = host.selection().resolve(&host.contours());
        compose_options(&source, &self.options())
    }

    /// Appends the rotated copies to the glyph as one undoable action.
    ///
    /// Returns what was appended. Nothing to append records no action.
    pub fn commit(&self, host: &mut impl GlyphHost) -> Outline {
        let rotated = self.preview(&*host);
        if rotated.is_empty() {
            debug!("Nothing to rotate on '{}'", host.glyph_name());
            return rotated;
        }

        host.begin_undoable_action(UNDO_LABEL);
        host.append_outline(&rotated);
        host.commit();

        let plan = self.plan();
        info!(
            "Added {} contours to '{}' ({} copies at {}°)",
            rotated.len(),
            host.glyph_name(),
            plan.copies,
            plan.angle_label()
        );
        rotated
    }

    /// Current values, ready to be saved for next time
    pub fn settings(&self) -> RotatorSettings {
        let pivot = self.pivot.current();
        RotatorSettings {
            pivot_x: pivot.x,
            pivot_y: pivot.y,
            steps: self.steps,
            capture_clicks: self.pivot.capture_enabled(),
            round_result: self.rounding,
            ..self.base.clone()
        }
    }
}

impl Default for RotatorSession {
    fn default() -> Self {
        Self::new(RotatorSettings::default())
    }
}
