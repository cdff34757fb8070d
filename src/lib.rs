//! Rotate the contours of a glyph around a pivot, again and again, to build
//! rosettes, asterisks and other radially symmetric shapes.

pub mod core;
pub mod data;
pub mod editing;
pub mod geometry;
pub mod host;
pub mod rendering;
pub mod utils;

#[cfg(test)]
mod tests;

pub use editing::{compose, ComposeOptions, ContourSelection, RotatorSession};
pub use geometry::{Contour, Outline, OutlinePoint, PointKind, StepPlan};
pub use host::{GlyphHost, MemoryGlyph};
