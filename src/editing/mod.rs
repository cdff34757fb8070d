pub mod compose;
pub mod pivot;
pub mod selection;
pub mod session;
pub mod undo;

// Re-export important types
pub use compose::{compose, compose_options, ComposeOptions};
pub use pivot::PivotInput;
pub use selection::ContourSelection;
pub use session::RotatorSession;
pub use undo::UndoState;
