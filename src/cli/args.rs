//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::geometry::{validate_frequency, DEFAULT_BINDU_FREQUENCY};

/// Glyphwave - greedy glyph-lattice walks and glyph transformations
#[derive(Parser, Debug)]
#[command(name = "glyphwave")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk the lattice greedily from the start glyph
    #[command(
        name = "walk",
        long_about = "Walk the glyph lattice greedily from the start glyph.\n\n\
            At every glyph the walker moves to the neighbor with the highest reward, \
            preferring the earlier neighbor on ties, until it reaches a glyph with no \
            neighbors. The start glyph's own reward is not counted.",
        after_help = "\
EXAMPLES:
    # Walk the reference lattice from Δ
    glyphwave walk

    # Start somewhere else and show running totals
    glyphwave walk --start Σ --trace

    # Describe glyphs from a metadata document
    glyphwave walk --catalog glyph_table.json"
    )]
    Walk {
        /// Start glyph (defaults to the configured start)
        #[arg(long)]
        start: Option<String>,

        /// Glyph metadata document (JSON)
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,

        /// Show each step with its running total
        #[arg(long)]
        trace: bool,
    },

    /// Map text to glyphs and apply the golden and circular passes
    #[command(
        name = "encode",
        long_about = "Map text into the glyph universe and re-label it.\n\n\
            Letters map to glyphs through a golden-ratio index, spaces map to the \
            space sentinel, and anything else is dropped. The golden pass then marks \
            convergence positions and the circular pass marks stabilization positions.",
        after_help = "\
EXAMPLES:
    # All three stages
    glyphwave encode \"hello world\"

    # Only the final sequence
    glyphwave encode \"hello world\" --stage circular"
    )]
    Encode {
        /// Text to encode
        text: String,

        /// Which stage to print
        #[arg(long, value_enum, default_value_t = Stage::All)]
        stage: Stage,
    },

    /// Inspect the configured lattice
    Lattice {
        #[command(subcommand)]
        action: LatticeAction,
    },

    /// Generate φ-node, π-corner and bindu point sets
    Geometry {
        #[command(subcommand)]
        kind: GeometryKind,
    },

    /// Run the walk, an encoding preview and the geometry generators in turn
    Demo,

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    glyphwave completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    glyphwave completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Encoding stage to print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Text mapped to glyphs
    Glyphs,
    /// After the golden pass
    Golden,
    /// After the circular pass
    Circular,
    /// Every stage
    All,
}

/// Lattice subcommands.
#[derive(Subcommand, Debug)]
pub enum LatticeAction {
    /// List nodes with rewards and neighbors
    Show,
    /// Check that a walk from the start glyph can terminate
    Check,
}

/// Geometry subcommands.
#[derive(Subcommand, Debug)]
pub enum GeometryKind {
    /// Golden-angle spiral of φ-nodes
    PhiNodes {
        /// Number of nodes
        #[arg(long, default_value_t = 20)]
        count: usize,

        /// Apply the collapse convergence to the spiral
        #[arg(long)]
        converge: bool,
    },
    /// The eight π-corners of the stabilized cube
    PiCorners,
    /// Recursive bindu field
    Bindus {
        /// Recursion depth
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=5))]
        depth: u8,

        /// Base pulse frequency, in (0, 4]
        #[arg(long, default_value_t = DEFAULT_BINDU_FREQUENCY, value_parser = parse_frequency)]
        frequency: f64,
    },
}

fn parse_frequency(value: &str) -> Result<f64, String> {
    let frequency: f64 = value.parse().map_err(|e| format!("{e}"))?;
    validate_frequency(frequency).map_err(|e| e.to_string())
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show which config file is in use
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the reference configuration to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Supported shells for completion
#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["glyphwave", "walk", "--json", "-q"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Command::Walk { .. }));
    }

    #[test]
    fn encode_defaults_to_all_stages() {
        let cli = Cli::try_parse_from(["glyphwave", "encode", "abc"]).unwrap();
        match cli.command {
            Command::Encode { text, stage } => {
                assert_eq!(text, "abc");
                assert_eq!(stage, Stage::All);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn bindu_depth_is_bounded() {
        assert!(Cli::try_parse_from(["glyphwave", "geometry", "bindus", "--depth", "9"]).is_err());
        assert!(Cli::try_parse_from(["glyphwave", "geometry", "bindus", "--depth", "2"]).is_ok());
    }

    #[test]
    fn bindu_frequency_is_bounded() {
        let parse = |f: &str| {
            Cli::try_parse_from(["glyphwave", "geometry", "bindus", "--frequency", f])
        };
        assert!(parse("1e300").is_err());
        assert!(parse("inf").is_err());
        assert!(parse("0").is_err());
        assert!(parse("-1").is_err());
        assert!(parse("abc").is_err());
        assert!(parse("2.5").is_ok());
    }
}
