//! Contour selection
//!
//! The host reports which contours the user has selected. An empty
//! selection means the whole glyph.

use std::collections::BTreeSet;

use tracing::warn;

use crate::geometry::Outline;

/// A set of selected contour indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContourSelection {
    indices: BTreeSet<usize>,
}

impl ContourSelection {
    /// Nothing selected, which resolves to every contour
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// The selected contours of `outline`, in glyph order.
    ///
    /// With an empty selection this is a copy of the whole outline.
    pub fn resolve(&self, outline: &Outline) -> Outline {
        if self.is_empty() {
            return outline.clone();
        }

        if let Some(&last) = self.indices.last() {
            if last >= outline.len() {
                warn!(
                    "Ignoring selected contour indices past {} (glyph has {} contours)",
                    outline.len().saturating_sub(1),
                    outline.len()
                );
            }
        }

        outline
            .iter()
            .enumerate()
            .filter(|(index, _)| self.contains(*index))
            .map(|(_, contour)| contour.clone())
            .collect()
    }
}

impl FromIterator<usize> for ContourSelection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}
