//! Command line arguments for the rotator

use std::path::PathBuf;

use anyhow::ensure;
use clap::Parser;
use kurbo::Point;

use crate::core::errors::RotatorResult;
use crate::core::settings::validate_step_count;
use crate::editing::selection::ContourSelection;
use crate::editing::session::RotatorSession;

/// Rotate glyph contours around a pivot to build radially symmetric shapes
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// path to the ufo font to edit
    #[arg(long = "load-ufo")]
    pub ufo_path: PathBuf,

    /// name of the glyph to rotate, in the default layer
    #[arg(long)]
    pub glyph: String,

    /// number of copies in a full turn, the original included
    #[arg(long, allow_negative_numbers = true)]
    pub steps: Option<i32>,

    /// x coordinate of the rotation center
    #[arg(long, allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// y coordinate of the rotation center
    #[arg(long, allow_negative_numbers = true)]
    pub y: Option<f64>,

    /// round every coordinate of the result to whole units
    #[arg(long, default_value_t = false)]
    pub round: bool,

    /// contour indices to rotate (default: all contours)
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<usize>,

    /// let canvas clicks set the rotation center
    #[arg(long, default_value_t = false)]
    pub capture: bool,

    /// canvas click as X,Y; the last one wins while capture is on
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub click: Vec<Point>,

    /// write an svg preview of the rotation to this path
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// only preview; leave the font untouched
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// save the edited font here instead of over the input
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// json settings file to start from
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// save the values used back to the settings file
    #[arg(long, default_value_t = false)]
    pub remember: bool,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CliArgs {
    /// Check argument combinations clap can't express
    pub fn validate(&self) -> RotatorResult<()> {
        if let Some(steps) = self.steps {
            validate_step_count(steps)?;
        }
        ensure!(
            !(self.remember && self.config.is_none()),
            "--remember needs a --config file to write to"
        );
        ensure!(
            !(self.dry_run && self.output.is_some()),
            "--output has no effect with --dry-run"
        );
        Ok(())
    }

    pub fn selection(&self) -> ContourSelection {
        self.select.iter().copied().collect()
    }

    /// Applies the values given on the command line over the session's
    pub fn apply_to(&self, session: &mut RotatorSession) -> RotatorResult<()> {
        if let Some(steps) = self.steps {
            session.set_steps(steps);
        }
        if self.round {
            session.set_rounding(true);
        }
        if self.x.is_some() || self.y.is_some() {
            let current = session.pivot();
            session.edit_pivot(self.x.unwrap_or(current.x), self.y.unwrap_or(current.y))?;
        }
        if self.capture {
            session.set_capture(true);
        }
        for click in &self.click {
            session.handle_click(*click);
        }
        Ok(())
    }
}

/// Parses `X,Y` into a point
fn parse_point(text: &str) -> Result<Point, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{text}'"))?;
    let parse = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{value}': {e}"))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["rosette", "--load-ufo", "font.ufo", "--glyph", "a"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_minimal_args() {
        let cli = args(&[]);
        assert_eq!(cli.glyph, "a");
        assert!(cli.steps.is_none());
        assert!(cli.selection().is_empty());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_negative_values_parse() {
        let cli = args(&["--steps", "-6", "--x", "-20.5", "--click", "-3,4"]);
        assert_eq!(cli.steps, Some(-6));
        assert_eq!(cli.x, Some(-20.5));
        assert_eq!(cli.click, vec![Point::new(-3.0, 4.0)]);
    }

    #[test]
    fn test_select_list() {
        let cli = args(&["--select", "2,0,5"]);
        let selection = cli.selection();
        assert_eq!(selection.len(), 3);
        assert!(selection.contains(5));
    }

    #[test]
    fn test_apply_overrides_session() {
        let cli = args(&["--steps", "8", "--y", "300", "--round"]);
        let mut session = RotatorSession::default();
        cli.apply_to(&mut session).unwrap();

        let options = session.options();
        assert_eq!(options.step_count, 8);
        assert_eq!(options.pivot, Point::new(0.0, 300.0));
        assert!(options.round_output);
    }

    #[test]
    fn test_clicks_need_capture() {
        let mut session = RotatorSession::default();
        args(&["--click", "10,10"]).apply_to(&mut session).unwrap();
        assert_eq!(session.pivot(), Point::ORIGIN);

        let mut session = RotatorSession::default();
        args(&["--x", "5", "--capture", "--click", "10,10", "--click", "20.6,30"])
            .apply_to(&mut session)
            .unwrap();
        assert_eq!(session.pivot(), Point::new(21.0, 30.0));
    }

    #[test]
    fn test_validate_rejects_bad_combinations() {
        assert!(args(&["--steps", "100000"]).validate().is_err());
        assert!(args(&["--remember"]).validate().is_err());
        assert!(args(&["--dry-run", "--output", "x.ufo"]).validate().is_err());
    }

    #[test]
    fn test_parse_point_errors() {
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,b").is_err());
        assert_eq!(parse_point(" 1 , 2 ").unwrap(), Point::new(1.0, 2.0));
    }
}
