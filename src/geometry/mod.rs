//! Geometric Primitives and Operations

pub mod outline;
pub mod point;
pub mod step;

// Re-export commonly used items
pub use outline::{Contour, Outline};
pub use point::{OutlinePoint, PointKind};
pub use step::StepPlan;
