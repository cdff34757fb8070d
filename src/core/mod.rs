//! Core application functionality
//!
//! This module contains the application shell around the compositor:
//! - Running a rotation from the command line
//! - Settings and CLI handling
//! - Error handling helpers

pub mod app;
pub mod cli;
pub mod errors;
pub mod settings;

// Re-export commonly used items
pub use app::{run, RunSummary};
pub use cli::CliArgs;
pub use settings::RotatorSettings;
