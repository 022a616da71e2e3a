//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Labels are validated while parsing (they deserialize into
//! [`GlyphLabel`]). Remaining checks run in [`FileConfig::validate`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;
use crate::core::graph::NodeSpec;
use crate::core::types::GlyphLabel;

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// start = "Δ"
/// universe = ["Δ", "Ω", "Σ"]
/// catalog = "glyph_table.json"
///
/// [walk]
/// max_steps = 64
///
/// [sentinels]
/// space = "·"
///
/// [[nodes]]
/// label = "Δ"
/// reward = 0.1
/// neighbors = ["Ω"]
///
/// [[nodes]]
/// label = "Ω"
/// reward = 1.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Start label for walks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<GlyphLabel>,

    /// Ordered glyph universe for text transformation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universe: Option<Vec<GlyphLabel>>,

    /// Path to a glyph metadata document (JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Walker settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walk: Option<WalkConfig>,

    /// Sentinel label overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentinels: Option<SentinelConfig>,

    /// Lattice definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<NodeSpec>>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(walk) = &self.walk {
            walk.validate()?;
        }

        if let Some(universe) = &self.universe {
            if universe.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "universe cannot be empty".to_string(),
                ));
            }
        }

        if let Some(nodes) = &self.nodes {
            if nodes.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "nodes cannot be empty when given".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Walker settings.
///
/// ```toml
/// [walk]
/// max_steps = 64
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WalkConfig {
    /// Step bound; defaults to the lattice's node count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,
}

impl WalkConfig {
    /// Validate walker settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == Some(0) {
            return Err(ConfigError::InvalidValue(
                "walk.max_steps must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sentinel overrides. Unset entries keep their defaults.
///
/// ```toml
/// [sentinels]
/// space = "_"
/// convergence = "φ"
/// stabilization = "π"
/// return_to_seed = "Δ"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SentinelConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<GlyphLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convergence: Option<GlyphLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stabilization: Option<GlyphLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to_seed: Option<GlyphLabel>,
}
