//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration through the [`Context`]
//! 2. Calls into [`crate::core`] to do the work
//! 3. Formats and displays output (text or JSON)
//!
//! Handlers never compute anything the core could.

mod completion;
mod config_cmd;
mod demo;
mod encode;
mod geometry;
mod lattice;
mod walk;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{init as config_init, path as config_path, show as config_show};
pub use demo::demo;
pub use encode::encode;
pub use geometry::{bindus, phi_nodes, pi_corners};
pub use lattice::{check as lattice_check, show as lattice_show};
pub use walk::walk;

use std::path::Path;

use crate::cli::args::{Command, ConfigAction, GeometryKind, LatticeAction};
use crate::cli::Context;
use crate::core::catalog::GlyphCatalog;
use crate::core::config::Config;
use crate::core::reference;
use anyhow::{Context as _, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Walk {
            start,
            catalog,
            trace,
        } => walk::walk(ctx, start.as_deref(), catalog.as_deref(), trace),
        Command::Encode { text, stage } => encode::encode(ctx, &text, stage),
        Command::Lattice { action } => match action {
            LatticeAction::Show => lattice::show(ctx),
            LatticeAction::Check => lattice::check(ctx),
        },
        Command::Geometry { kind } => match kind {
            GeometryKind::PhiNodes { count, converge } => geometry::phi_nodes(ctx, count, converge),
            GeometryKind::PiCorners => geometry::pi_corners(ctx),
            GeometryKind::Bindus { depth, frequency } => {
                geometry::bindus(ctx, usize::from(depth), frequency)
            }
        },
        Command::Demo => demo::demo(ctx),
        Command::Config { action } => match action {
            ConfigAction::Path => config_cmd::path(ctx),
            ConfigAction::Show => config_cmd::show(ctx),
            ConfigAction::Init { force } => config_cmd::init(ctx, force),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Resolve the glyph catalog for a command.
///
/// An explicit path wins over the configured one. With neither, the
/// reference catalog describes the reference lattice and a custom lattice
/// gets an empty catalog (every glyph falls back to the placeholders).
pub(crate) fn resolve_catalog(config: &Config, explicit: Option<&Path>) -> Result<GlyphCatalog> {
    let path = explicit.map(Path::to_path_buf).or_else(|| config.catalog_path());
    match path {
        Some(path) => GlyphCatalog::load(&path)
            .with_context(|| format!("Failed to load glyph catalog '{}'", path.display())),
        None if config.file.nodes.is_none() => Ok(reference::catalog()),
        None => Ok(GlyphCatalog::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reference_catalog_by_default() {
        let catalog = resolve_catalog(&Config::default(), None).unwrap();
        assert_eq!(catalog, reference::catalog());
    }

    #[test]
    fn custom_lattice_gets_empty_catalog() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[[nodes]]\nlabel = \"x\"\nreward = 1.0\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(resolve_catalog(&config, None).unwrap().is_empty());
    }

    #[test]
    fn explicit_catalog_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("glyphs.json");
        fs::write(&path, r#"{"x": {"name": "EX", "meaning": "A test glyph"}}"#).unwrap();

        let catalog = resolve_catalog(&Config::default(), Some(&path)).unwrap();
        assert_eq!(catalog.describe("x").name, "EX");
    }

    #[test]
    fn missing_explicit_catalog_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = resolve_catalog(&Config::default(), Some(&temp.path().join("none.json")))
            .unwrap_err();
        assert!(format!("{err:#}").contains("none.json"));
    }
}
