//! ui::report
//!
//! Plain-text rendering of core results.
//!
//! Every function returns a `String`; printing is left to the caller.

use std::fmt::Write as _;

use crate::core::catalog::GlyphCatalog;
use crate::core::graph::Lattice;
use crate::core::types::GlyphLabel;
use crate::core::walker::WalkResult;

/// Render a walk the way the simulation reports it: one line per glyph with
/// name, meaning and reward, then the accumulated total.
pub fn walk_report(result: &WalkResult, catalog: &GlyphCatalog) -> String {
    let mut out = String::from("Glyphwave Simulation Result\nPath:\n");
    for step in &result.trace {
        let d = catalog.describe(step.label.as_str());
        let _ = writeln!(
            out,
            "  {}: {} - {} (reward={:?})",
            step.label, d.name, d.meaning, step.reward
        );
    }
    let _ = write!(out, "Total reward accumulated: {:?}", result.total_reward);
    out
}

/// Render a walk as `Δ → Ω → …`.
pub fn path_line(result: &WalkResult) -> String {
    join(&result.path, " → ")
}

/// Render a walk trace with running totals.
pub fn trace_lines(result: &WalkResult) -> String {
    result
        .trace
        .iter()
        .enumerate()
        .map(|(i, step)| {
            format!(
                "{:>3}  {:<4} reward={:<6?} total={:.4}",
                i, step.label, step.reward, step.total
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a glyph sequence separated by single spaces.
pub fn sequence_line(sequence: &[GlyphLabel]) -> String {
    join(sequence, " ")
}

/// Render the lattice as one line per node in definition order.
pub fn lattice_listing(lattice: &Lattice) -> String {
    lattice
        .nodes()
        .map(|node| {
            if node.is_terminal() {
                format!("{} ({:?}) -> (terminal)", node.label, node.reward)
            } else {
                format!(
                    "{} ({:?}) -> {}",
                    node.label,
                    node.reward,
                    join(&node.neighbors, ", ")
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn join(labels: &[GlyphLabel], sep: &str) -> String {
    labels
        .iter()
        .map(GlyphLabel::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::NodeSpec;
    use crate::core::reference;
    use crate::core::walker::GreedyWalker;

    #[test]
    fn reference_walk_report() {
        let lattice = reference::lattice();
        let result = GreedyWalker::new().walk(&lattice, "Δ").unwrap();
        let report = walk_report(&result, &reference::catalog());

        insta::assert_snapshot!(report, @r"
        Glyphwave Simulation Result
        Path:
          Δ: DINGIR - Seed of origin; the first mark (reward=0.1)
          Ω: OMEGA - Closure that opens the next cycle (reward=0.2)
          ∴: THEREFORE - Inference drawn from what came before (reward=0.1)
          ⨳: CROSS-WEAVE - Knot where paths interlace (reward=0.1)
          ΞB: XI-BRIDGE - Passage between strata (reward=0.4)
          φ: PHI - Golden convergence; the terminal state (reward=1.0)
        Total reward accumulated: 1.8
        ");
    }

    #[test]
    fn report_without_catalog_uses_placeholders() {
        let lattice = Lattice::build(vec![NodeSpec::new("solo", 0.5, &[]).unwrap()]).unwrap();
        let result = GreedyWalker::new().walk(&lattice, "solo").unwrap();
        let report = walk_report(&result, &GlyphCatalog::new());
        assert!(report.contains("solo: Unknown - No description (reward=0.5)"));
        assert!(report.ends_with("Total reward accumulated: 0.0"));
    }

    #[test]
    fn path_line_uses_arrows() {
        let lattice = reference::lattice();
        let result = GreedyWalker::new().walk(&lattice, "Δ").unwrap();
        assert_eq!(path_line(&result), "Δ → Ω → ∴ → ⨳ → ΞB → φ");
    }

    #[test]
    fn lattice_listing_marks_terminals() {
        let listing = lattice_listing(&reference::lattice());
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Δ (0.1) -> Σ, Ω");
        assert_eq!(lines[12], "φ (1.0) -> (terminal)");
    }

    #[test]
    fn sequence_line_is_space_separated() {
        let seq: Vec<_> = ["Δ", "·", "Ω"]
            .iter()
            .map(|s| GlyphLabel::new(*s).unwrap())
            .collect();
        assert_eq!(sequence_line(&seq), "Δ · Ω");
    }
}
