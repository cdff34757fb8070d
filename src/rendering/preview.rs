//! Rotation preview overlay
//!
//! The preview is never merged into the glyph. It is drawn as a stroked
//! overlay on top of the glyph's own (filled) outline, here as an SVG
//! document that can be written out and inspected.

use std::path::Path;

use kurbo::{Affine, BezPath, Point, Rect, Shape};
use svg::node::element::{Circle, Group, Path as SvgPath};
use svg::Document;
use tracing::{debug, warn};

use crate::core::errors::{RotatorContext, RotatorResult};
use crate::core::settings::RotatorSettings;
use crate::geometry::Outline;

/// Margin around the drawing, in design units
const VIEW_MARGIN: f64 = 50.0;

/// Fill for the glyph's own contours underneath the overlay
const SOURCE_FILL: &str = "#d8d8d8";

/// Radius of the pivot marker, in design units
const PIVOT_RADIUS: f64 = 4.0;

/// How the overlay is stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewStyle {
    /// RGBA, each channel 0.0 to 1.0
    pub color: [f64; 4],
    pub stroke_width: f64,
}

impl PreviewStyle {
    pub fn from_settings(settings: &RotatorSettings) -> Self {
        Self {
            color: settings.preview_color,
            stroke_width: settings.preview_stroke_width,
        }
    }

    fn stroke_rgb(&self) -> String {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgb({},{},{})",
            channel(self.color[0]),
            channel(self.color[1]),
            channel(self.color[2])
        )
    }

    fn stroke_opacity(&self) -> f64 {
        self.color[3].clamp(0.0, 1.0)
    }
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self::from_settings(&RotatorSettings::default())
    }
}

/// Drawable paths for an outline; contours that can't be drawn are skipped
pub fn overlay_paths(outline: &Outline) -> Vec<BezPath> {
    let mut skipped = 0;
    let paths: Vec<BezPath> = outline
        .iter()
        .filter_map(|contour| {
            let path = contour.to_bezpath();
            if path.is_none() {
                skipped += 1;
            }
            path
        })
        .collect();

    if skipped > 0 {
        warn!("Skipped {} malformed contours in preview", skipped);
    }
    paths
}

/// Renders the glyph outline with the rotated copies stroked on top.
///
/// Glyph space is y-up, so everything is flipped into SVG's y-down space.
pub fn render_svg(
    source: &Outline,
    overlay: &Outline,
    pivot: Point,
    style: &PreviewStyle,
) -> Document {
    let flip = Affine::scale_non_uniform(1.0, -1.0);
    let flipped = |paths: Vec<BezPath>| -> Vec<BezPath> {
        paths.into_iter().map(|path| flip * path).collect()
    };
    let source_paths = flipped(overlay_paths(source));
    let rotated_paths = flipped(overlay_paths(overlay));
    let pivot = flip * pivot;

    let bounds = source_paths
        .iter()
        .chain(&rotated_paths)
        .map(|path| path.bounding_box())
        .fold(Rect::from_points(pivot, pivot), |acc, rect| acc.union(rect))
        .inflate(VIEW_MARGIN, VIEW_MARGIN);

    let source_group = source_paths.iter().fold(
        Group::new().set("fill", SOURCE_FILL).set("stroke", "none"),
        |group, path| group.add(SvgPath::new().set("d", path.to_svg())),
    );

    let overlay_group = rotated_paths.iter().fold(
        Group::new()
            .set("fill", "none")
            .set("stroke", style.stroke_rgb())
            .set("stroke-opacity", style.stroke_opacity().to_string())
            .set("stroke-width", style.stroke_width.to_string()),
        |group, path| group.add(SvgPath::new().set("d", path.to_svg())),
    );

    let pivot_marker = Circle::new()
        .set("cx", pivot.x.to_string())
        .set("cy", pivot.y.to_string())
        .set("r", PIVOT_RADIUS.to_string())
        .set("fill", style.stroke_rgb());

    debug!(
        "Rendered preview: {} source paths, {} overlay paths",
        source_paths.len(),
        rotated_paths.len()
    );

    Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                bounds.x0,
                bounds.y0,
                bounds.width(),
                bounds.height()
            ),
        )
        .add(source_group)
        .add(overlay_group)
        .add(pivot_marker)
}

pub fn write_svg(document: &Document, path: impl AsRef<Path>) -> RotatorResult<()> {
    let path = path.as_ref();
    svg::save(path, document).with_file_context("write", path)?;
    Ok(())
}
