//! cli
//!
//! Command-line interface layer for Glyphwave.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and build core values
//! - Delegate to command handlers and format their output
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and calls into
//! [`crate::core`]; all algorithmic work happens there.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::Config;
use crate::ui::logging;
use crate::ui::output::Verbosity;
use anyhow::{Context as _, Result};
use std::path::PathBuf;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Machine-readable output.
    pub json: bool,
}

impl Context {
    /// Output verbosity for these flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Load configuration honoring `--config`.
    pub fn load_config(&self) -> Result<Config> {
        Config::load(self.config.as_deref()).context("Failed to load configuration")
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        config: cli.config.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        json: cli.json,
    };

    logging::init(ctx.verbosity());

    commands::dispatch(cli.command, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context() {
        let ctx = Context::default();
        assert!(ctx.config.is_none());
        assert!(!ctx.debug);
        assert!(!ctx.quiet);
        assert!(!ctx.json);
        assert_eq!(ctx.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn quiet_context() {
        let ctx = Context {
            quiet: true,
            debug: true,
            ..Default::default()
        };
        assert_eq!(ctx.verbosity(), Verbosity::Quiet);
    }
}
