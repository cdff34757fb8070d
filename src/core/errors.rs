//!    Error handling
//!
//! Errors at the edges of the tool (files, glyph lookups, user input) use
//! anyhow with context describing what was being attempted. The compositor
//! itself cannot fail.

pub use anyhow::{ensure, Error};
use anyhow::{Context, Result};

/// Result type alias used throughout the crate
pub type RotatorResult<T> = Result<T>;

/// Attaches the file being worked on to an error
pub trait RotatorContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> RotatorResult<T>;
}

impl<T, E> RotatorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> RotatorResult<T> {
        self.with_context(|| {
            format!("Failed to {} file: {}", operation, path.as_ref().display())
        })
    }
}

#[macro_export]
macro_rules! glyph_not_found {
    ($name:expr, $available:expr) => {
        anyhow::anyhow!(
            "Glyph '{}' not found in font (available glyphs: {})",
            $name,
            $available
        )
    };
}

/// Pivot coordinates must be usable by the rotation
pub fn validate_finite_coords(x: f64, y: f64) -> RotatorResult<()> {
    ensure!(x.is_finite(), "X coordinate must be finite, got: {}", x);
    ensure!(y.is_finite(), "Y coordinate must be finite, got: {}", y);
    Ok(())
}

pub fn validate_ufo_path<P: AsRef<std::path::Path>>(path: P) -> RotatorResult<()> {
    let path = path.as_ref();

    ensure!(path.exists(), "UFO path does not exist: {}", path.display());
    ensure!(
        path.is_dir(),
        "UFO path must be a directory: {}",
        path.display()
    );

    let metainfo = path.join("metainfo.plist");
    ensure!(
        metainfo.exists(),
        "Invalid UFO: missing metainfo.plist in {}",
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_coords_rejected() {
        assert!(validate_finite_coords(1.0, -2.0).is_ok());
        assert!(validate_finite_coords(f64::NAN, 0.0).is_err());
        assert!(validate_finite_coords(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_ufo_path_needs_metainfo() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_ufo_path(dir.path()).unwrap_err();
        assert!(err.to_string().contains("metainfo.plist"));

        let missing = dir.path().join("nope.ufo");
        assert!(validate_ufo_path(missing).is_err());
    }

    #[test]
    fn test_file_context_names_the_path() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = result.with_file_context("read", "/tmp/x.json").unwrap_err();
        assert_eq!(err.to_string(), "Failed to read file: /tmp/x.json");
    }
}
