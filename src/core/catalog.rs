//! core::catalog
//!
//! Typed glyph metadata used for human-readable reports.
//!
//! # Format
//!
//! The on-disk form is a JSON object keyed by glyph label:
//!
//! ```json
//! {
//!   "Δ": { "name": "DINGIR", "meaning": "Seed of origin", "origin": "Sumerian" },
//!   "φ": { "name": "PHI" }
//! }
//! ```
//!
//! Every field is optional and unknown fields are ignored. Lookups never
//! fail: a missing glyph or field is replaced by [`UNKNOWN_NAME`] or
//! [`NO_DESCRIPTION`].

use super::types::GlyphLabel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder for a missing name.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Placeholder for a missing meaning.
pub const NO_DESCRIPTION: &str = "No description";

/// Errors from loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read glyph catalog '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse glyph catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Metadata for one glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

/// Resolved display strings for a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description<'a> {
    pub name: &'a str,
    pub meaning: &'a str,
}

/// Label-keyed glyph metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlyphCatalog {
    records: HashMap<GlyphLabel, GlyphInfo>,
}

impl GlyphCatalog {
    /// Empty catalog; every lookup yields the placeholders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&contents)
    }

    /// Raw record for a glyph, if present.
    pub fn get(&self, label: &str) -> Option<&GlyphInfo> {
        self.records.get(label)
    }

    /// Display strings for a glyph, substituting placeholders.
    pub fn describe(&self, label: &str) -> Description<'_> {
        let info = self.records.get(label);
        Description {
            name: info
                .and_then(|i| i.name.as_deref())
                .unwrap_or(UNKNOWN_NAME),
            meaning: info
                .and_then(|i| i.meaning.as_deref())
                .unwrap_or(NO_DESCRIPTION),
        }
    }

    /// Add or replace a record.
    pub fn insert(&mut self, label: GlyphLabel, info: GlyphInfo) {
        self.records.insert(label, info);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(GlyphLabel, GlyphInfo)> for GlyphCatalog {
    fn from_iter<I: IntoIterator<Item = (GlyphLabel, GlyphInfo)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_label_uses_placeholders() {
        let catalog = GlyphCatalog::new();
        let d = catalog.describe("Δ");
        assert_eq!(d.name, "Unknown");
        assert_eq!(d.meaning, "No description");
    }

    #[test]
    fn missing_field_uses_placeholder() {
        let catalog = GlyphCatalog::from_json_str(r#"{"Δ": {"name": "DINGIR"}}"#).unwrap();
        let d = catalog.describe("Δ");
        assert_eq!(d.name, "DINGIR");
        assert_eq!(d.meaning, NO_DESCRIPTION);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let catalog = GlyphCatalog::from_json_str(
            r#"{"φ": {"name": "PHI", "meaning": "end", "origin": "Greek", "color": "gold"}}"#,
        )
        .unwrap();
        let info = catalog.get("φ").unwrap();
        assert_eq!(info.origin.as_deref(), Some("Greek"));
    }

    #[test]
    fn invalid_label_key_is_a_parse_error() {
        let result = GlyphCatalog::from_json_str(r#"{"": {"name": "blank"}}"#);
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("glyph_table.json");
        fs::write(&path, r#"{"Ω": {"name": "OMEGA", "meaning": "closure"}}"#).unwrap();

        let catalog = GlyphCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.describe("Ω").meaning, "closure");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = GlyphCatalog::load(&temp.path().join("absent.json"));
        assert!(matches!(result, Err(CatalogError::ReadError { .. })));
    }
}
