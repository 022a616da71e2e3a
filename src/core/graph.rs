//! core::graph
//!
//! Glyph lattice representation.
//!
//! # Architecture
//!
//! The lattice is a directed graph where:
//! - Nodes are glyphs, each carrying an immediate reward
//! - Edges are the ordered outgoing neighbor list of each node
//! - A node with no neighbors is terminal
//!
//! The start label is chosen by the caller at walk time and is not stored.
//!
//! # Invariants
//!
//! - Every neighbor label names a node of the lattice (checked at build time)
//! - Labels are unique
//! - Rewards are finite
//! - The lattice is never mutated after [`Lattice::build`] returns

use super::types::GlyphLabel;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

/// Errors from lattice construction.
#[derive(Debug, Error, PartialEq)]
pub enum LatticeError {
    #[error("glyph '{from}' points at unknown glyph '{to}'")]
    UnknownLabel { from: GlyphLabel, to: GlyphLabel },

    #[error("glyph '{0}' is defined more than once")]
    DuplicateLabel(GlyphLabel),

    #[error("glyph '{label}' has non-finite reward {reward}")]
    NonFiniteReward { label: GlyphLabel, reward: f64 },
}

/// Definition record for one lattice node.
///
/// This is the shape used by configuration files and by the built-in
/// reference lattice.
///
/// ```toml
/// [[nodes]]
/// label = "Δ"
/// reward = 0.1
/// neighbors = ["Σ", "Ω"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub label: GlyphLabel,
    pub reward: f64,
    #[serde(default)]
    pub neighbors: Vec<GlyphLabel>,
}

impl NodeSpec {
    /// Convenience constructor for definitions written in code.
    ///
    /// # Errors
    ///
    /// Returns an error if the label or any neighbor label is invalid.
    pub fn new(
        label: &str,
        reward: f64,
        neighbors: &[&str],
    ) -> Result<Self, super::types::TypeError> {
        Ok(Self {
            label: GlyphLabel::new(label)?,
            reward,
            neighbors: neighbors
                .iter()
                .map(|n| GlyphLabel::new(*n))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// One vertex of the lattice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphNode {
    /// Unique identifier of the node.
    pub label: GlyphLabel,
    /// Reward earned on entering this node.
    pub reward: f64,
    /// Outgoing edges, in definition order.
    pub neighbors: Vec<GlyphLabel>,
}

impl GlyphNode {
    /// A node with no outgoing edges ends every walk that reaches it.
    pub fn is_terminal(&self) -> bool {
        self.neighbors.is_empty()
    }
}

/// Immutable glyph lattice.
///
/// Nodes keep their definition order so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct Lattice {
    nodes: Vec<GlyphNode>,
    index: HashMap<GlyphLabel, usize>,
}

impl Lattice {
    /// Build a lattice from node definitions.
    ///
    /// # Errors
    ///
    /// - `DuplicateLabel` if two definitions share a label
    /// - `NonFiniteReward` if a reward is NaN or infinite
    /// - `UnknownLabel` if a neighbor names a glyph that is not defined
    ///
    /// # Example
    ///
    /// ```
    /// use glyphwave::core::graph::{Lattice, NodeSpec};
    ///
    /// let lattice = Lattice::build(vec![
    ///     NodeSpec::new("a", 0.0, &["b"]).unwrap(),
    ///     NodeSpec::new("b", 1.0, &[]).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(lattice.len(), 2);
    /// assert!(lattice.get("b").unwrap().is_terminal());
    /// ```
    pub fn build(specs: impl IntoIterator<Item = NodeSpec>) -> Result<Self, LatticeError> {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();

        for spec in specs {
            if !spec.reward.is_finite() {
                return Err(LatticeError::NonFiniteReward {
                    label: spec.label,
                    reward: spec.reward,
                });
            }
            if index.contains_key(&spec.label) {
                return Err(LatticeError::DuplicateLabel(spec.label));
            }
            index.insert(spec.label.clone(), nodes.len());
            nodes.push(GlyphNode {
                label: spec.label,
                reward: spec.reward,
                neighbors: spec.neighbors,
            });
        }

        // Edges are checked once every node is known, so definitions may
        // reference glyphs declared later.
        for node in &nodes {
            if let Some(missing) = node.neighbors.iter().find(|n| !index.contains_key(*n)) {
                return Err(LatticeError::UnknownLabel {
                    from: node.label.clone(),
                    to: missing.clone(),
                });
            }
        }

        Ok(Self { nodes, index })
    }

    /// Look up a node by label.
    pub fn get(&self, label: &str) -> Option<&GlyphNode> {
        self.index.get(label).map(|&i| &self.nodes[i])
    }

    /// Check whether a label is defined.
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the lattice has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in definition order.
    pub fn nodes(&self) -> impl Iterator<Item = &GlyphNode> {
        self.nodes.iter()
    }

    /// All labels in definition order.
    pub fn labels(&self) -> impl Iterator<Item = &GlyphLabel> {
        self.nodes.iter().map(|n| &n.label)
    }

    /// Terminal nodes in definition order.
    pub fn terminals(&self) -> impl Iterator<Item = &GlyphNode> {
        self.nodes.iter().filter(|n| n.is_terminal())
    }

    /// Labels reachable from `start` (including `start`), breadth-first.
    ///
    /// Returns an empty vector if `start` is not defined.
    pub fn reachable_from(&self, start: &str) -> Vec<GlyphLabel> {
        let Some(root) = self.get(start) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([&root.label]);

        while let Some(label) = queue.pop_front() {
            if !seen.insert(label) {
                continue;
            }
            order.push(label.clone());
            if let Some(node) = self.get(label.as_str()) {
                queue.extend(node.neighbors.iter());
            }
        }

        order
    }

    /// Find a cycle reachable from `start`.
    ///
    /// Returns `Some(label)` for a node that lies on a cycle, or `None` if
    /// every path from `start` ends at a terminal node.
    pub fn find_cycle_from(&self, start: &str) -> Option<GlyphLabel> {
        let root = *self.index.get(start)?;
        self.cycle_from(root, &mut HashSet::new())
    }

    /// Find any cycle in the lattice.
    pub fn find_cycle(&self) -> Option<GlyphLabel> {
        let mut visited = HashSet::new();
        (0..self.nodes.len()).find_map(|root| self.cycle_from(root, &mut visited))
    }

    /// Depth-first search from node `root` with an explicit stack.
    ///
    /// Each frame is a node index and the position of the next neighbor to
    /// visit. Nodes already in `visited` were fully explored by an earlier
    /// search and cannot lead to a new cycle.
    fn cycle_from(&self, root: usize, visited: &mut HashSet<usize>) -> Option<GlyphLabel> {
        if !visited.insert(root) {
            return None;
        }

        let mut on_path = HashSet::from([root]);
        let mut stack = vec![(root, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let (at, next) = *frame;
            match self.nodes[at].neighbors.get(next) {
                Some(label) => {
                    frame.1 += 1;
                    let Some(&child) = self.index.get(label.as_str()) else {
                        continue;
                    };
                    if on_path.contains(&child) {
                        return Some(self.nodes[child].label.clone());
                    }
                    if visited.insert(child) {
                        on_path.insert(child);
                        stack.push((child, 0));
                    }
                }
                None => {
                    on_path.remove(&at);
                    stack.pop();
                }
            }
        }

        None
    }
}

/// Build a lattice from definition records.
///
/// Free-function form of [`Lattice::build`] for callers that hold a slice.
pub fn build_lattice(defs: &[NodeSpec]) -> Result<Lattice, LatticeError> {
    Lattice::build(defs.iter().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(label: &str, reward: f64, neighbors: &[&str]) -> NodeSpec {
        NodeSpec::new(label, reward, neighbors).unwrap()
    }

    fn diamond() -> Lattice {
        Lattice::build(vec![
            node("a", 0.0, &["b", "c"]),
            node("b", 0.5, &["d"]),
            node("c", 0.2, &["d"]),
            node("d", 1.0, &[]),
        ])
        .unwrap()
    }

    #[test]
    fn build_preserves_definition_order() {
        let lattice = diamond();
        let labels: Vec<_> = lattice.labels().map(|l| l.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn forward_references_are_allowed() {
        let lattice = Lattice::build(vec![node("x", 0.0, &["y"]), node("y", 0.0, &[])]);
        assert!(lattice.is_ok());
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let err = Lattice::build(vec![node("a", 0.0, &["ghost"])]).unwrap_err();
        assert_eq!(
            err,
            LatticeError::UnknownLabel {
                from: GlyphLabel::new("a").unwrap(),
                to: GlyphLabel::new("ghost").unwrap(),
            }
        );
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let err = Lattice::build(vec![node("a", 0.0, &[]), node("a", 1.0, &[])]).unwrap_err();
        assert!(matches!(err, LatticeError::DuplicateLabel(_)));
    }

    #[test]
    fn non_finite_reward_is_rejected() {
        let err = Lattice::build(vec![node("a", f64::NAN, &[])]).unwrap_err();
        assert!(matches!(err, LatticeError::NonFiniteReward { .. }));
    }

    #[test]
    fn terminals_are_nodes_without_neighbors() {
        let lattice = diamond();
        let terminals: Vec<_> = lattice.terminals().map(|n| n.label.as_str()).collect();
        assert_eq!(terminals, vec!["d"]);
    }

    #[test]
    fn reachable_from_is_breadth_first() {
        let lattice = diamond();
        let reach: Vec<_> = lattice
            .reachable_from("a")
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(reach, vec!["a", "b", "c", "d"]);
        assert!(lattice.reachable_from("missing").is_empty());
    }

    #[test]
    fn acyclic_lattice_has_no_cycle() {
        let lattice = diamond();
        assert!(lattice.find_cycle().is_none());
        assert!(lattice.find_cycle_from("a").is_none());
    }

    #[test]
    fn cycle_is_detected() {
        let lattice = Lattice::build(vec![
            node("a", 0.0, &["b"]),
            node("b", 0.0, &["c"]),
            node("c", 0.0, &["a"]),
            node("island", 0.0, &[]),
        ])
        .unwrap();
        assert!(lattice.find_cycle().is_some());
        assert!(lattice.find_cycle_from("a").is_some());
        assert!(lattice.find_cycle_from("island").is_none());
    }

    fn chain(len: usize, close: bool) -> Lattice {
        let labels: Vec<String> = (0..len).map(|i| format!("n{i}")).collect();
        let defs = (0..len).map(|i| {
            let next = match (i + 1 < len, close) {
                (true, _) => vec![labels[i + 1].as_str()],
                (false, true) => vec![labels[0].as_str()],
                (false, false) => vec![],
            };
            node(&labels[i], i as f64, &next)
        });
        Lattice::build(defs).unwrap()
    }

    #[test]
    fn deep_chain_cycle_search_does_not_recurse() {
        let open = chain(200_000, false);
        assert!(open.find_cycle_from("n0").is_none());
        assert!(open.find_cycle().is_none());

        let closed = chain(200_000, true);
        assert_eq!(closed.find_cycle_from("n0").unwrap().as_str(), "n0");
        assert!(closed.find_cycle().is_some());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let lattice = Lattice::build(vec![node("a", 0.0, &["a"])]).unwrap();
        assert_eq!(lattice.find_cycle_from("a").unwrap().as_str(), "a");
    }

    #[test]
    fn build_lattice_matches_build() {
        let defs = vec![node("a", 0.0, &["b"]), node("b", 1.0, &[])];
        let lattice = build_lattice(&defs).unwrap();
        assert_eq!(lattice.len(), 2);
        assert!(lattice.contains("a"));
        assert!(!lattice.contains("c"));
    }
}
