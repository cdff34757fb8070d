//! Font data management and loading
//!
//! This module handles all font-related data operations:
//! - UFO (Unified Font Object) file format support
//! - Conversion between norad contours and rotator outlines

pub mod ufo;

pub use ufo::UfoGlyph;
