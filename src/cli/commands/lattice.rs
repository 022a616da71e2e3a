//! lattice command - Show or check the configured lattice

use serde::Serialize;
use std::collections::HashSet;

use crate::cli::Context;
use crate::core::graph::Lattice;
use crate::core::types::GlyphLabel;
use crate::ui::output;
use crate::ui::report;
use anyhow::{bail, Context as _, Result};

/// List every node with its reward and neighbors.
pub fn show(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let lattice = config.lattice().context("Failed to build lattice")?;

    if ctx.json {
        let nodes: Vec<_> = lattice.nodes().collect();
        output::json(&nodes)?;
    } else {
        output::result(report::lattice_listing(&lattice));
    }

    Ok(())
}

/// Findings for a lattice as seen from a start glyph.
#[derive(Debug, Serialize)]
struct LatticeCheck {
    start: String,
    nodes: usize,
    terminals: Vec<GlyphLabel>,
    reachable: usize,
    unreachable: Vec<GlyphLabel>,
    cycle_from_start: Option<GlyphLabel>,
    cycle_elsewhere: Option<GlyphLabel>,
}

impl LatticeCheck {
    fn inspect(lattice: &Lattice, start: &str) -> Self {
        let reachable = lattice.reachable_from(start);
        let seen: HashSet<&GlyphLabel> = reachable.iter().collect();
        let unreachable = lattice
            .labels()
            .filter(|label| !seen.contains(label))
            .cloned()
            .collect();
        let cycle_from_start = lattice.find_cycle_from(start);
        let cycle_elsewhere = match cycle_from_start {
            Some(_) => None,
            None => lattice.find_cycle(),
        };

        Self {
            start: start.to_string(),
            nodes: lattice.len(),
            terminals: lattice.terminals().map(|n| n.label.clone()).collect(),
            reachable: reachable.len(),
            unreachable,
            cycle_from_start,
            cycle_elsewhere,
        }
    }
}

/// Verify that a walk from the configured start glyph terminates.
///
/// Fails when the start glyph is missing or a cycle is reachable from it.
/// Unreachable nodes and cycles the walk cannot reach are warnings.
pub fn check(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let lattice = config.lattice().context("Failed to build lattice")?;
    let start = config.start();

    if !lattice.contains(start) {
        bail!("Start glyph '{}' is not in the lattice", start);
    }

    let findings = LatticeCheck::inspect(&lattice, start);
    let verbosity = ctx.verbosity();

    if ctx.json {
        output::json(&findings)?;
    } else {
        output::print(
            format!(
                "{} nodes, {} terminal ({}), {} reachable from {}",
                findings.nodes,
                findings.terminals.len(),
                report::sequence_line(&findings.terminals),
                findings.reachable,
                findings.start
            ),
            verbosity,
        );
        if !findings.unreachable.is_empty() {
            output::warn(
                format!(
                    "unreachable from {}: {}",
                    findings.start,
                    report::sequence_line(&findings.unreachable)
                ),
                verbosity,
            );
        }
        if let Some(label) = &findings.cycle_elsewhere {
            output::warn(
                format!("cycle through '{}' is not reachable from {}", label, findings.start),
                verbosity,
            );
        }
    }

    if let Some(label) = &findings.cycle_from_start {
        bail!(
            "Cycle through '{}' is reachable from '{}'; a greedy walk may not terminate",
            label,
            start
        );
    }

    if !verbosity.is_quiet() && !ctx.json {
        output::result("ok");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::NodeSpec;
    use crate::core::reference;

    fn specs(defs: &[(&str, f64, &[&str])]) -> Vec<NodeSpec> {
        defs.iter()
            .map(|(l, r, n)| NodeSpec::new(l, *r, n).unwrap())
            .collect()
    }

    #[test]
    fn reference_lattice_is_clean() {
        let findings = LatticeCheck::inspect(&reference::lattice(), reference::START);
        assert_eq!(findings.nodes, 13);
        assert_eq!(findings.reachable, 13);
        assert!(findings.unreachable.is_empty());
        assert_eq!(findings.terminals.len(), 1);
        assert_eq!(findings.terminals[0].as_str(), "φ");
        assert!(findings.cycle_from_start.is_none());
        assert!(findings.cycle_elsewhere.is_none());
    }

    #[test]
    fn cycle_reachable_from_start() {
        let lattice = Lattice::build(specs(&[
            ("a", 0.0, &["b"]),
            ("b", 1.0, &["a"]),
        ]))
        .unwrap();
        let findings = LatticeCheck::inspect(&lattice, "a");
        assert!(findings.cycle_from_start.is_some());
        assert!(findings.terminals.is_empty());
    }

    #[test]
    fn unreachable_cycle_is_reported_separately() {
        let lattice = Lattice::build(specs(&[
            ("a", 0.0, &["end"]),
            ("end", 1.0, &[]),
            ("x", 0.0, &["y"]),
            ("y", 0.0, &["x"]),
        ]))
        .unwrap();
        let findings = LatticeCheck::inspect(&lattice, "a");
        assert!(findings.cycle_from_start.is_none());
        assert!(findings.cycle_elsewhere.is_some());
        let unreachable: Vec<_> = findings.unreachable.iter().map(|l| l.as_str()).collect();
        assert_eq!(unreachable, vec!["x", "y"]);
    }

    #[test]
    fn large_disconnected_lattice_is_partitioned() {
        let mut defs: Vec<NodeSpec> = (0..20_000)
            .map(|i| NodeSpec::new(&format!("n{i}"), 1.0, &[] as &[&str]).unwrap())
            .collect();
        defs.push(NodeSpec::new("root", 0.0, &["n0"]).unwrap());
        let lattice = Lattice::build(defs).unwrap();

        let findings = LatticeCheck::inspect(&lattice, "root");
        assert_eq!(findings.reachable, 2);
        assert_eq!(findings.unreachable.len(), 19_999);
        assert_eq!(findings.terminals.len(), 20_000);
    }
}
