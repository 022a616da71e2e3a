//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Configuration supplies the definition data the core needs: the lattice,
//! the start label, the glyph universe, sentinel labels, the walker step
//! bound and the location of the glyph catalog. Every value is optional and
//! falls back to the built-in reference definitions.
//!
//! # Locations
//!
//! Searched in order, first hit wins:
//! 1. `--config <path>` (must exist)
//! 2. `$GLYPHWAVE_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/glyphwave/config.toml`
//! 4. `~/.glyphwave/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use glyphwave::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! let lattice = config.lattice().unwrap();
//! let result = config.walker().walk(&lattice, config.start()).unwrap();
//! println!("{} moves", result.moves());
//! ```

pub mod schema;

pub use schema::{FileConfig, SentinelConfig, WalkConfig};

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::core::graph::{Lattice, LatticeError, NodeSpec};
use crate::core::reference;
use crate::core::transform::{GlyphTransformer, Sentinels};
use crate::core::types::GlyphLabel;
use crate::core::universe::GlyphUniverse;
use crate::core::walker::GreedyWalker;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "GLYPHWAVE_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Where the configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` flag
    Flag,
    /// `$GLYPHWAVE_CONFIG`
    Env,
    /// `$XDG_CONFIG_HOME/glyphwave/config.toml`
    Xdg,
    /// `~/.glyphwave/config.toml`
    Home,
    /// No file found; built-in definitions
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigSource::Flag => "--config",
            ConfigSource::Env => CONFIG_ENV,
            ConfigSource::Xdg => "XDG_CONFIG_HOME",
            ConfigSource::Home => "home",
            ConfigSource::Defaults => "defaults",
        };
        f.write_str(name)
    }
}

/// Inputs used to locate a config file.
///
/// Separated from the process environment so resolution can be tested
/// without mutating global state.
#[derive(Debug, Clone, Default)]
pub struct SearchPaths {
    pub env_config: Option<PathBuf>,
    pub xdg_config_home: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl SearchPaths {
    /// Read search inputs from the process environment.
    pub fn from_env() -> Self {
        Self {
            env_config: std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            xdg_config_home: std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            home: dirs::home_dir(),
        }
    }

    /// Candidate files in precedence order.
    fn candidates(&self) -> Vec<(PathBuf, ConfigSource)> {
        let mut out = Vec::new();
        if let Some(path) = &self.env_config {
            out.push((path.clone(), ConfigSource::Env));
        }
        if let Some(xdg) = &self.xdg_config_home {
            out.push((xdg.join("glyphwave/config.toml"), ConfigSource::Xdg));
        }
        if let Some(home) = &self.home {
            out.push((home.join(".glyphwave/config.toml"), ConfigSource::Home));
        }
        out
    }
}

/// Resolved configuration.
///
/// Accessors apply defaults so callers never see a missing value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed file contents (empty when running on defaults)
    pub file: FileConfig,
    source: ConfigSource,
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: FileConfig::default(),
            source: ConfigSource::Defaults,
            path: None,
        }
    }
}

impl Config {
    /// Load configuration from the flag path or the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing, or if a config file
    /// exists but cannot be read, parsed or validated. Missing files in the
    /// standard locations are not an error (defaults are used).
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        Self::load_with(explicit, &SearchPaths::from_env())
    }

    /// Load configuration using explicit search inputs.
    pub fn load_with(explicit: Option<&Path>, search: &SearchPaths) -> Result<Config, ConfigError> {
        let found = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some((path.to_path_buf(), ConfigSource::Flag))
            }
            None => search
                .candidates()
                .into_iter()
                .find(|(path, _)| path.exists()),
        };

        let Some((path, source)) = found else {
            info!("no config file found, using built-in definitions");
            return Ok(Config::default());
        };

        let file = Self::read_config(&path)?;
        file.validate()?;
        info!(path = %path.display(), %source, "loaded config");

        Ok(Config {
            file,
            source,
            path: Some(path),
        })
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for the user config.
    ///
    /// Returns `~/.glyphwave/config.toml`.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".glyphwave/config.toml"))
    }

    /// Write a config file atomically.
    ///
    /// Creates parent directories if needed. Writes to a temp file in the
    /// same directory, then renames over the target.
    pub fn write(path: &Path, config: &FileConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// A fully populated config holding the reference definitions.
    pub fn reference_file() -> FileConfig {
        Config::default().effective()
    }

    /// Every setting with defaults filled in, in file form.
    ///
    /// The walker bound and catalog stay unset unless configured.
    pub fn effective(&self) -> FileConfig {
        let sentinels = self.sentinels();
        FileConfig {
            start: Some(
                self.file
                    .start
                    .clone()
                    .unwrap_or_else(|| GlyphLabel::from_static(reference::START)),
            ),
            universe: Some(self.universe().as_slice().to_vec()),
            catalog: self.catalog_path(),
            walk: self.file.walk.clone(),
            sentinels: Some(SentinelConfig {
                space: Some(sentinels.space),
                convergence: Some(sentinels.convergence),
                stabilization: Some(sentinels.stabilization),
                return_to_seed: Some(sentinels.return_to_seed),
            }),
            nodes: Some(self.node_specs()),
        }
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Where the configuration was loaded from.
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Path of the loaded config file, if any.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Start label. Defaults to the reference start `Δ`.
    pub fn start(&self) -> &str {
        self.file
            .start
            .as_ref()
            .map(|s| s.as_str())
            .unwrap_or(reference::START)
    }

    /// Lattice definition records. Defaults to the reference lattice.
    pub fn node_specs(&self) -> Vec<NodeSpec> {
        self.file.nodes.clone().unwrap_or_else(reference::nodes)
    }

    /// Build the configured lattice.
    pub fn lattice(&self) -> Result<Lattice, LatticeError> {
        Lattice::build(self.node_specs())
    }

    /// Glyph universe.
    ///
    /// Uses `universe` if set, else the configured node labels, else the
    /// reference universe.
    pub fn universe(&self) -> GlyphUniverse {
        match (&self.file.universe, &self.file.nodes) {
            (Some(labels), _) => GlyphUniverse::new(labels.iter().cloned()),
            (None, Some(nodes)) => GlyphUniverse::new(nodes.iter().map(|n| n.label.clone())),
            (None, None) => reference::universe(),
        }
    }

    /// Sentinel labels with overrides applied.
    pub fn sentinels(&self) -> Sentinels {
        let defaults = Sentinels::default();
        let Some(overrides) = &self.file.sentinels else {
            return defaults;
        };
        Sentinels {
            space: overrides.space.clone().unwrap_or(defaults.space),
            convergence: overrides.convergence.clone().unwrap_or(defaults.convergence),
            stabilization: overrides
                .stabilization
                .clone()
                .unwrap_or(defaults.stabilization),
            return_to_seed: overrides
                .return_to_seed
                .clone()
                .unwrap_or(defaults.return_to_seed),
        }
    }

    /// Transformer using the configured sentinels.
    pub fn transformer(&self) -> GlyphTransformer {
        GlyphTransformer::with_sentinels(self.sentinels())
    }

    /// Walker using the configured step bound.
    pub fn walker(&self) -> GreedyWalker {
        match self.file.walk.as_ref().and_then(|w| w.max_steps) {
            Some(max) => GreedyWalker::with_max_steps(max),
            None => GreedyWalker::new(),
        }
    }

    /// Catalog path, resolved against the config file's directory when
    /// relative.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let catalog = self.file.catalog.as_ref()?;
        if catalog.is_absolute() {
            return Some(catalog.clone());
        }
        match self.path.as_deref().and_then(Path::parent) {
            Some(dir) => Some(dir.join(catalog)),
            None => Some(catalog.clone()),
        }
    }
}
