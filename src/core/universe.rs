//! core::universe
//!
//! The ordered glyph alphabet used by text transformation.

use super::graph::Lattice;
use super::types::GlyphLabel;
use serde::Serialize;
use std::collections::HashSet;

/// Ordered, deduplicated sequence of glyph labels.
///
/// Position matters: the transformer addresses glyphs by index. Duplicates
/// are dropped at construction, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GlyphUniverse {
    labels: Vec<GlyphLabel>,
}

impl GlyphUniverse {
    /// Build a universe from labels, dropping repeats.
    pub fn new(labels: impl IntoIterator<Item = GlyphLabel>) -> Self {
        let mut seen = HashSet::new();
        let labels = labels
            .into_iter()
            .filter(|label| seen.insert(label.clone()))
            .collect();
        Self { labels }
    }

    /// Universe made of a lattice's labels in definition order.
    pub fn from_lattice(lattice: &Lattice) -> Self {
        Self::new(lattice.labels().cloned())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GlyphLabel> {
        self.labels.get(index)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.as_str() == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlyphLabel> {
        self.labels.iter()
    }

    pub fn as_slice(&self) -> &[GlyphLabel] {
        &self.labels
    }
}

impl FromIterator<GlyphLabel> for GlyphUniverse {
    fn from_iter<I: IntoIterator<Item = GlyphLabel>>(iter: I) -> Self {
        Self::new(iter)
    }
}
