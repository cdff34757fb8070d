//! UFO file I/O and the UFO-backed glyph host
//!
//! This module loads and saves UFO fonts with norad, converts norad
//! contours to and from the rotator's plain outlines, and wraps one glyph of
//! the default layer as a [`GlyphHost`].

use std::path::Path;

use norad::{Font, Glyph, PointType};
use tracing::{debug, info};

use crate::core::errors::{validate_ufo_path, RotatorContext, RotatorResult};
use crate::editing::selection::ContourSelection;
use crate::editing::undo::UndoState;
use crate::geometry::{Contour, Outline, OutlinePoint, PointKind};
use crate::glyph_not_found;
use crate::host::GlyphHost;

/// Load a UFO font from disk
pub fn load_font(path: impl AsRef<Path>) -> RotatorResult<Font> {
    let path = path.as_ref();
    validate_ufo_path(path)?;

    let font = Font::load(path).with_file_context("load", path)?;
    info!("Loaded font: {}", path.display());
    Ok(font)
}

/// Write a UFO font to disk, replacing whatever is there
pub fn save_font(font: &Font, path: impl AsRef<Path>) -> RotatorResult<()> {
    let path = path.as_ref();
    font.save(path).with_file_context("save", path)?;
    info!("Saved font: {}", path.display());
    Ok(())
}

// Conversions ----------------------------------------------------------------

fn kind_from_norad(typ: &PointType) -> PointKind {
    match typ {
        PointType::Move => PointKind::Move,
        PointType::Line => PointKind::Line,
        PointType::OffCurve => PointKind::OffCurve,
        PointType::Curve => PointKind::Curve,
        PointType::QCurve => PointKind::QCurve,
    }
}

fn kind_to_norad(kind: PointKind) -> PointType {
    match kind {
        PointKind::Move => PointType::Move,
        PointKind::Line => PointType::Line,
        PointKind::OffCurve => PointType::OffCurve,
        PointKind::Curve => PointType::Curve,
        PointKind::QCurve => PointType::QCurve,
    }
}

pub fn contour_from_norad(contour: &norad::Contour) -> Contour {
    Contour::new(
        contour
            .points
            .iter()
            .map(|p| OutlinePoint::new((p.x, p.y), kind_from_norad(&p.typ), p.smooth))
            .collect(),
    )
}

/// Builds a fresh norad contour.
///
/// Names and identifiers are left off: the copies are new contours, and
/// identifiers must stay unique within a glyph.
pub fn contour_to_norad(contour: &Contour) -> norad::Contour {
    let points = contour
        .points
        .iter()
        .map(|p| {
            norad::ContourPoint::new(
                p.position.x,
                p.position.y,
                kind_to_norad(p.kind),
                p.smooth,
                None,
                None,
            )
        })
        .collect();
    norad::Contour::new(points, None)
}

pub fn outline_from_glyph(glyph: &Glyph) -> Outline {
    glyph.contours.iter().map(contour_from_norad).collect()
}

// Host -----------------------------------------------------------------------

/// One glyph of a UFO's default layer, edited through [`GlyphHost`].
///
/// The glyph is worked on as a copy; [`UfoGlyph::store`] puts it back into
/// the font. Undo snapshots keep the norad contours themselves so names and
/// identifiers of the original contours come back untouched.
#[derive(Debug, Clone)]
pub struct UfoGlyph {
    glyph: Glyph,
    name: String,
    selection: ContourSelection,
    history: UndoState<Vec<norad::Contour>>,
    open_action: Option<String>,
}

impl UfoGlyph {
    /// Copies the named glyph out of the font's default layer
    pub fn from_font(font: &Font, name: &str) -> RotatorResult<Self> {
        let layer = font.default_layer();
        let Some(glyph) = layer.get_glyph(name) else {
            let mut available: Vec<String> =
                layer.iter().map(|g| g.name().to_string()).collect();
            available.sort();
            return Err(glyph_not_found!(name, available.join(", ")));
        };

        debug!(
            "Editing glyph '{}' with {} contours",
            name,
            glyph.contours.len()
        );
        Ok(Self {
            history: UndoState::new(glyph.contours.clone()),
            glyph: glyph.clone(),
            name: name.to_string(),
            selection: ContourSelection::all(),
            open_action: None,
        })
    }

    pub fn with_selection(mut self, selection: ContourSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn glyph(&self) -> &Glyph {
        &self.glyph
    }

    pub fn history(&self) -> &UndoState<Vec<norad::Contour>> {
        &self.history
    }

    /// Writes the edited glyph back into the font's default layer
    pub fn store(&self, font: &mut Font) {
        font.default_layer_mut().insert_glyph(self.glyph.clone());
    }
}

impl GlyphHost for UfoGlyph {
    fn glyph_name(&self) -> &str {
        &self.name
    }

    fn contours(&self) -> Outline {
        outline_from_glyph(&self.glyph)
    }

    fn selection(&self) -> ContourSelection {
        self.selection.clone()
    }

    fn begin_undoable_action(&mut self, label: &str) {
        self.open_action = Some(label.to_string());
    }

    fn append_outline(&mut self, outline: &Outline) {
        self.glyph
            .contours
            .extend(outline.iter().map(contour_to_norad));
    }

    fn commit(&mut self) {
        if let Some(label) = self.open_action.take() {
            self.history.push(label, self.glyph.contours.clone());
        }
    }

    fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(contours) => {
                self.glyph.contours = contours.clone();
                true
            }
            None => false,
        }
    }

    fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(contours) => {
                self.glyph.contours = contours.clone();
                true
            }
            None => false,
        }
    }
}
