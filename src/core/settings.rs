// Settings ///////////////////////////////////////////////////////////////////
// This module contains all the settings for the rotator.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::errors::{RotatorContext, RotatorResult};

// Rotation Defaults //////////////////////////////////////////////////////////

/// Step count a fresh session starts with (30° per step)
pub const DEFAULT_STEPS: i32 = 12;

/// Largest step count magnitude the command line accepts
pub const MAX_STEPS: i32 = 3600;

/// Rejects step counts whose magnitude is past [`MAX_STEPS`]
pub fn validate_step_count(steps: i32) -> RotatorResult<()> {
    ensure!(
        steps.unsigned_abs() <= MAX_STEPS.unsigned_abs(),
        "Step count {} is out of range (at most {} either way)",
        steps,
        MAX_STEPS
    );
    Ok(())
}

/// Name of the undo action a commit is recorded under
pub const UNDO_LABEL: &str = "Rotate";

// Preview ////////////////////////////////////////////////////////////////////

/// Overlay color as RGBA, each channel 0.0 to 1.0
pub const DEFAULT_PREVIEW_COLOR: [f64; 4] = [0.0, 0.0, 0.8, 0.8];

/// Overlay stroke width in design units
pub const DEFAULT_PREVIEW_STROKE_WIDTH: f64 = 1.0;

// Undo ///////////////////////////////////////////////////////////////////////

/// How many snapshots a glyph's undo history keeps
pub const UNDO_STACK_SIZE: usize = 128;

/// User-facing values a rotator session starts from.
///
/// Loaded once at startup and handed to the session; nothing reads these
/// behind the session's back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatorSettings {
    pub pivot_x: f64,
    pub pivot_y: f64,
    pub steps: i32,
    pub capture_clicks: bool,
    pub round_result: bool,
    pub preview_color: [f64; 4],
    pub preview_stroke_width: f64,
}

impl Default for RotatorSettings {
    fn default() -> Self {
        Self {
            pivot_x: 0.0,
            pivot_y: 0.0,
            steps: DEFAULT_STEPS,
            capture_clicks: false,
            round_result: false,
            preview_color: DEFAULT_PREVIEW_COLOR,
            preview_stroke_width: DEFAULT_PREVIEW_STROKE_WIDTH,
        }
    }
}

impl RotatorSettings {
    /// Reads settings from a JSON file, or defaults if there is none yet
    pub fn load(path: impl AsRef<Path>) -> RotatorResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).with_file_context("read", path)?;
        let settings: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid settings file: {}", path.display()))?;
        validate_step_count(settings.steps)
            .with_context(|| format!("Invalid settings file: {}", path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> RotatorResult<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_file_context("write", path)?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }
}
