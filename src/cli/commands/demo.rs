//! demo command - Walk, encoding preview and geometry summary in one run

use serde::Serialize;

use super::resolve_catalog;
use crate::cli::Context;
use crate::core::geometry::{self, CUBE_EDGES, DEFAULT_BINDU_FREQUENCY};
use crate::core::transform::TransformTrace;
use crate::core::walker::WalkResult;
use crate::ui::output;
use crate::ui::report;
use anyhow::{Context as _, Result};

/// Phrase fed through the transformer.
const SAMPLE_TEXT: &str = "glyph wave";

/// φ-nodes in the spiral summary.
const PHI_NODE_COUNT: usize = 20;

/// Deepest bindu level summarized.
const BINDU_DEPTH: usize = 3;

#[derive(Debug, Serialize)]
struct DemoOutput {
    walk: WalkResult,
    sample: &'static str,
    encoding: TransformTrace,
    phi_nodes: usize,
    pi_corners: usize,
    cube_edges: usize,
    bindus_per_depth: Vec<usize>,
}

/// Run every stage against the active configuration.
pub fn demo(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let lattice = config.lattice().context("Failed to build lattice")?;
    let catalog = resolve_catalog(&config, None)?;

    let walk = config
        .walker()
        .walk(&lattice, config.start())
        .with_context(|| format!("Walk from '{}' failed", config.start()))?;
    let encoding = config
        .transformer()
        .pipeline(SAMPLE_TEXT, &config.universe())
        .context("Failed to encode sample text")?;

    let spiral = geometry::converge(&geometry::phi_nodes(PHI_NODE_COUNT));
    let corners = geometry::pi_corners();
    let bindus_per_depth = (0..=BINDU_DEPTH)
        .map(|depth| geometry::bindu_recursion(depth, DEFAULT_BINDU_FREQUENCY).map(|f| f.len()))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to generate bindu field")?;

    if ctx.json {
        output::json(&DemoOutput {
            walk,
            sample: SAMPLE_TEXT,
            encoding,
            phi_nodes: spiral.len(),
            pi_corners: corners.len(),
            cube_edges: CUBE_EDGES.len(),
            bindus_per_depth,
        })?;
        return Ok(());
    }

    let verbosity = ctx.verbosity();

    if verbosity.is_quiet() {
        output::result(report::path_line(&walk));
    } else {
        output::result(report::walk_report(&walk, &catalog));
    }

    output::section(format!("Encoding \"{}\"", SAMPLE_TEXT), verbosity);
    output::print(
        format!("  glyphs:   {}", report::sequence_line(&encoding.glyphs)),
        verbosity,
    );
    output::print(
        format!("  golden:   {}", report::sequence_line(&encoding.golden)),
        verbosity,
    );
    output::result(format!(
        "  circular: {}",
        report::sequence_line(&encoding.circular)
    ));

    output::section("Geometry", verbosity);
    output::print(
        format!("  φ-nodes:   {} collapsed toward the origin", spiral.len()),
        verbosity,
    );
    output::print(
        format!(
            "  π-corners: {} corners, {} edges",
            corners.len(),
            CUBE_EDGES.len()
        ),
        verbosity,
    );
    let counts: Vec<String> = bindus_per_depth.iter().map(ToString::to_string).collect();
    output::print(
        format!("  bindus:    {} (depth 0..={})", counts.join(", "), BINDU_DEPTH),
        verbosity,
    );

    Ok(())
}
