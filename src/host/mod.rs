//! The editor the rotator runs inside
//!
//! The rotator never touches a concrete editor's glyph objects. It reads
//! contours and the selection through [`GlyphHost`], and writes back by
//! appending an outline inside an undoable action. The UFO-backed host lives
//! in `data::ufo`; [`MemoryGlyph`] is a host with no file behind it.

use tracing::debug;

use crate::editing::selection::ContourSelection;
use crate::editing::undo::UndoState;
use crate::geometry::Outline;

/// Capabilities the rotator needs from the glyph being edited
pub trait GlyphHost {
    fn glyph_name(&self) -> &str;

    /// A copy of the glyph's current contours
    fn contours(&self) -> Outline;

    /// Which contours the user has selected; empty means all of them
    fn selection(&self) -> ContourSelection;

    /// Opens an action that `commit` closes as a single undo step
    fn begin_undoable_action(&mut self, label: &str);

    fn append_outline(&mut self, outline: &Outline);

    fn commit(&mut self);

    /// Reverts the last committed action; false when there is none
    fn undo(&mut self) -> bool;

    fn redo(&mut self) -> bool;
}

/// A glyph held entirely in memory
#[derive(Debug, Clone)]
pub struct MemoryGlyph {
    name: String,
    outline: Outline,
    selection: ContourSelection,
    history: UndoState<Outline>,
    open_action: Option<String>,
}

impl MemoryGlyph {
    pub fn new(name: impl Into<String>, outline: Outline) -> Self {
        Self {
            name: name.into(),
            history: UndoState::new(outline.clone()),
            outline,
            selection: ContourSelection::all(),
            open_action: None,
        }
    }

    pub fn with_selection(mut self, selection: ContourSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn history(&self) -> &UndoState<Outline> {
        &self.history
    }
}

impl GlyphHost for MemoryGlyph {
    fn glyph_name(&self) -> &str {
        &self.name
    }

    fn contours(&self) -> Outline {
        self.outline.clone()
    }

    fn selection(&self) -> ContourSelection {
        self.selection.clone()
    }

    fn begin_undoable_action(&mut self, label: &str) {
        self.open_action = Some(label.to_string());
    }

    fn append_outline(&mut self, outline: &Outline) {
        self.outline.append(outline);
    }

    fn commit(&mut self) {
        if let Some(label) = self.open_action.take() {
            debug!("Committing '{}' on glyph '{}'", label, self.name);
            self.history.push(label, self.outline.clone());
        }
    }

    fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.outline = previous.clone();
                true
            }
            None => false,
        }
    }

    fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.outline = next.clone();
                true
            }
            None => false,
        }
    }
}
