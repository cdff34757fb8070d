//! Rendering and Visualization
//!
//! Drawing the rotation preview on top of the glyph.

pub mod preview;

pub use preview::PreviewStyle;
