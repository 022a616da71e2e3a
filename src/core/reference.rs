//! core::reference
//!
//! Built-in reference definitions: the 13-glyph lattice, its universe and
//! the matching catalog records.
//!
//! These are plain definition data. Callers build their own values from
//! them; nothing here is shared global state.
//!
//! # Catalog records
//!
//! Only the Δ record (DINGIR) comes from the source glyph table. The other
//! names and meanings are placeholders so the built-in walk report reads
//! end to end. Load a real `glyph_table.json` with `--catalog` or the
//! `catalog` config key to replace them.

use super::catalog::{GlyphCatalog, GlyphInfo};
use super::graph::{Lattice, NodeSpec};
use super::types::GlyphLabel;
use super::universe::GlyphUniverse;

/// Start label of the reference lattice.
pub const START: &str = "Δ";

/// (label, reward, neighbors) in definition order.
const NODES: &[(&str, f64, &[&str])] = &[
    ("Δ", 0.1, &["Σ", "Ω"]),
    ("Ω", 0.2, &["Ξ", "∴"]),
    ("Σ", 0.1, &["ψ", "Ξ"]),
    ("ψ", 0.5, &["Θ", "Φ"]),
    ("Θ", 0.0, &["Φ", "ΞB"]),
    ("Ξ", 0.0, &["Φ", "⨳"]),
    ("Φ", 0.3, &["ΞB", "φ"]),
    ("ΞB", 0.4, &["Λ", "φ"]),
    ("Λ", 0.2, &["φ"]),
    ("∴", 0.1, &["⨳"]),
    ("⨳", 0.1, &["Γ", "ΞB"]),
    ("Γ", 0.05, &["Φ", "Λ"]),
    ("φ", 1.0, &[]),
];

/// (label, name, meaning) for the reference glyphs. Placeholders apart
/// from Δ; see the module docs.
const RECORDS: &[(&str, &str, &str)] = &[
    ("Δ", "DINGIR", "Seed of origin; the first mark"),
    ("Ω", "OMEGA", "Closure that opens the next cycle"),
    ("Σ", "SIGMA", "Gathering of scattered parts"),
    ("ψ", "PSI-PULSE", "Breath of the field; interference and memory"),
    ("Θ", "THETA", "Threshold of stillness"),
    ("Ξ", "XI", "Layered strata awaiting order"),
    ("Φ", "PHI-NODE", "Anchor of golden proportion"),
    ("ΞB", "XI-BRIDGE", "Passage between strata"),
    ("Λ", "LAMBDA", "Ascent toward resolution"),
    ("∴", "THEREFORE", "Inference drawn from what came before"),
    ("⨳", "CROSS-WEAVE", "Knot where paths interlace"),
    ("Γ", "GAMMA", "Corner where direction turns"),
    ("φ", "PHI", "Golden convergence; the terminal state"),
];

/// Definition records of the reference lattice.
pub fn nodes() -> Vec<NodeSpec> {
    NODES
        .iter()
        .map(|(label, reward, neighbors)| NodeSpec {
            label: GlyphLabel::from_static(*label),
            reward: *reward,
            neighbors: neighbors
                .iter()
                .map(|n| GlyphLabel::from_static(*n))
                .collect(),
        })
        .collect()
}

/// The reference lattice.
pub fn lattice() -> Lattice {
    // NODES is closed and duplicate-free, checked by the tests below.
    Lattice::build(nodes()).unwrap_or_default()
}

/// The reference universe: lattice labels in definition order.
pub fn universe() -> GlyphUniverse {
    NODES
        .iter()
        .map(|(label, _, _)| GlyphLabel::from_static(*label))
        .collect()
}

/// Catalog records for the reference glyphs (placeholder descriptions).
pub fn catalog() -> GlyphCatalog {
    RECORDS
        .iter()
        .map(|(label, name, meaning)| {
            (
                GlyphLabel::from_static(*label),
                GlyphInfo {
                    name: Some((*name).to_string()),
                    meaning: Some((*meaning).to_string()),
                    origin: None,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_nodes_build_cleanly() {
        assert!(Lattice::build(nodes()).is_ok());
        assert_eq!(lattice().len(), 13);
    }

    #[test]
    fn every_static_label_is_valid() {
        for (label, _, neighbors) in NODES {
            assert!(GlyphLabel::new(*label).is_ok());
            for n in *neighbors {
                assert!(GlyphLabel::new(*n).is_ok());
            }
        }
        for (label, _, _) in RECORDS {
            assert!(GlyphLabel::new(*label).is_ok());
        }
    }

    #[test]
    fn reference_lattice_is_acyclic_with_single_terminal() {
        let lattice = lattice();
        assert!(lattice.find_cycle().is_none());
        let terminals: Vec<_> = lattice.terminals().map(|n| n.label.as_str()).collect();
        assert_eq!(terminals, vec!["φ"]);
        assert!(lattice.contains(START));
    }

    #[test]
    fn catalog_covers_every_node() {
        let catalog = catalog();
        for node in lattice().nodes() {
            assert!(catalog.get(node.label.as_str()).is_some());
        }
    }

    #[test]
    fn universe_matches_lattice_order() {
        let from_lattice = GlyphUniverse::from_lattice(&lattice());
        assert_eq!(universe(), from_lattice);
    }
}
