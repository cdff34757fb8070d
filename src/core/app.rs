//! Running the rotator from the command line

use tracing::info;

use crate::core::cli::CliArgs;
use crate::core::errors::RotatorResult;
use crate::core::settings::{validate_step_count, RotatorSettings};
use crate::data::ufo::{load_font, save_font, UfoGlyph};
use crate::editing::session::RotatorSession;
use crate::host::GlyphHost;
use crate::rendering::preview::{render_svg, write_svg, PreviewStyle};

/// What a run did, for the caller to report
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub glyph: String,
    pub copies: usize,
    pub angle_label: String,
    pub contours_added: usize,
    pub committed: bool,
}

/// Loads settings and font, previews and (unless dry-running) commits
pub fn run(args: &CliArgs) -> RotatorResult<RunSummary> {
    args.validate()?;

    let settings = match &args.config {
        Some(path) => RotatorSettings::load(path)?,
        None => RotatorSettings::default(),
    };
    let mut session = RotatorSession::new(settings);
    args.apply_to(&mut session)?;
    validate_step_count(session.settings().steps)?;

    let mut font = load_font(&args.ufo_path)?;
    let mut glyph = UfoGlyph::from_font(&font, &args.glyph)?.with_selection(args.selection());

    let plan = session.plan();
    let pivot = session.pivot();
    info!(
        "Rotating '{}': {} copies at {}° around ({}, {})",
        glyph.glyph_name(),
        plan.copies,
        plan.angle_label(),
        pivot.x,
        pivot.y
    );

    let preview = session.preview(&glyph);
    if let Some(path) = &args.preview {
        let style = PreviewStyle::from_settings(&session.settings());
        let document = render_svg(&glyph.contours(), &preview, pivot, &style);
        write_svg(&document, path)?;
        info!("Wrote preview to {}", path.display());
    }

    let mut summary = RunSummary {
        glyph: args.glyph.clone(),
        copies: plan.copies,
        angle_label: plan.angle_label(),
        contours_added: preview.len(),
        committed: false,
    };

    if args.dry_run {
        info!("Dry run: {} contours would be added", preview.len());
        return Ok(summary);
    }

    let added = session.commit(&mut glyph);
    glyph.store(&mut font);
    let destination = args.output.as_ref().unwrap_or(&args.ufo_path);
    save_font(&font, destination)?;

    if args.remember {
        if let Some(path) = &args.config {
            session.settings().save(path)?;
        }
    }

    summary.contours_added = added.len();
    summary.committed = true;
    Ok(summary)
}
