//! Step count to rotation plan

/// Angle used when the step count is too small to divide a full turn
pub const DEGENERATE_ANGLE: f64 = 90.0;

/// How many rotated copies to emit and how far apart they are
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    /// Number of rotated copies, not counting the original
    pub copies: usize,
    /// Angle between successive copies, in degrees
    pub angle_degrees: f64,
}

impl StepPlan {
    /// Works out the plan for a nominal step count.
    ///
    /// Counts with magnitude below two collapse to a single quarter-turn copy.
    /// Otherwise the original already sits on the glyph, so `|n| - 1` copies
    /// are emitted `360 / n` degrees apart. Negative counts turn clockwise.
    /// Negative counts are not folded into the quarter turn as a group;
    /// only their magnitude decides that.
    pub fn new(step_count: i32) -> Self {
        let magnitude = step_count.unsigned_abs();
        if magnitude < 2 {
            return Self {
                copies: 1,
                angle_degrees: DEGENERATE_ANGLE,
            };
        }

        Self {
            copies: (magnitude - 1) as usize,
            angle_degrees: 360.0 / f64::from(step_count),
        }
    }

    /// The angle as a short label: two decimals, with `.00` dropped
    pub fn angle_label(&self) -> String {
        let label = format!("{:.2}", self.angle_degrees);
        match label.strip_suffix(".00") {
            Some(whole) => whole.to_string(),
            None => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_counts_give_one_quarter_turn() {
        for steps in [-1, 0, 1] {
            let plan = StepPlan::new(steps);
            assert_eq!(plan.copies, 1, "steps = {steps}");
            assert_eq!(plan.angle_degrees, 90.0, "steps = {steps}");
        }
    }

    #[test]
    fn test_regular_counts() {
        let plan = StepPlan::new(12);
        assert_eq!(plan.copies, 11);
        assert_eq!(plan.angle_degrees, 30.0);

        let plan = StepPlan::new(2);
        assert_eq!(plan.copies, 1);
        assert_eq!(plan.angle_degrees, 180.0);
    }

    #[test]
    fn test_negative_counts_turn_clockwise() {
        let plan = StepPlan::new(-3);
        assert_eq!(plan.copies, 2);
        assert_eq!(plan.angle_degrees, -120.0);
    }

    #[test]
    fn test_extreme_counts_do_not_overflow() {
        let plan = StepPlan::new(i32::MIN);
        assert_eq!(plan.copies, i32::MAX as usize);
        assert!(plan.angle_degrees < 0.0);
    }

    #[test]
    fn test_angle_label() {
        assert_eq!(StepPlan::new(12).angle_label(), "30");
        assert_eq!(StepPlan::new(-3).angle_label(), "-120");
        assert_eq!(StepPlan::new(7).angle_label(), "51.43");
        assert_eq!(StepPlan::new(0).angle_label(), "90");
        assert_eq!(StepPlan::new(8).angle_label(), "45");
        assert_eq!(StepPlan::new(16).angle_label(), "22.50");
    }
}
