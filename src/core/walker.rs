//! core::walker
//!
//! Deterministic greedy traversal of a [`Lattice`].
//!
//! # Algorithm
//!
//! Starting from the caller's start label, repeatedly move to the neighbor
//! with the highest reward until a terminal node is reached. Ties go to the
//! neighbor listed first. The start node's own reward is not counted.
//!
//! # Termination
//!
//! A greedy walk over a cyclic lattice can loop forever. The walker bounds
//! the number of moves (by default the node count, which no acyclic walk can
//! exceed) and reports [`WalkError::NonTerminating`] instead of hanging.

use super::graph::{GlyphNode, Lattice};
use super::types::GlyphLabel;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors from a walk.
#[derive(Debug, Error, PartialEq)]
pub enum WalkError {
    #[error("start glyph '{0}' is not in the lattice")]
    UnknownLabel(String),

    #[error("walk did not reach a terminal glyph within {steps} steps (stopped at '{last}')")]
    NonTerminating { steps: usize, last: GlyphLabel },
}

/// One entry of a walk trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Glyph visited.
    pub label: GlyphLabel,
    /// Reward of the visited glyph.
    pub reward: f64,
    /// Accumulated reward after entering this glyph.
    pub total: f64,
}

/// Outcome of a completed walk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkResult {
    /// Visited labels, start first, terminal last.
    pub path: Vec<GlyphLabel>,
    /// Sum of rewards over `path[1..]`.
    pub total_reward: f64,
    /// Per-glyph trace aligned with `path`. The start entry has `total == 0`.
    pub trace: Vec<Step>,
}

impl WalkResult {
    /// The glyph the walk ended on.
    pub fn terminal(&self) -> &GlyphLabel {
        // path always holds at least the start label
        &self.path[self.path.len() - 1]
    }

    /// Number of moves taken.
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }
}

/// Pick the neighbor of `node` with the highest reward.
///
/// Ties resolve to the earliest neighbor in definition order. Returns `None`
/// for terminal nodes.
pub fn choose_next<'a>(lattice: &'a Lattice, node: &GlyphNode) -> Option<&'a GlyphNode> {
    node.neighbors
        .iter()
        .filter_map(|label| lattice.get(label.as_str()))
        .fold(None::<&'a GlyphNode>, |best, candidate| match best {
            Some(b) if candidate.reward <= b.reward => Some(b),
            _ => Some(candidate),
        })
}

/// Lazy sequence of greedy moves.
///
/// Yields every node entered after the start. The iterator itself is
/// unbounded; [`GreedyWalker::walk`] applies the step bound.
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    lattice: &'a Lattice,
    current: &'a GlyphNode,
}

impl<'a> Steps<'a> {
    /// The node the walk is currently on.
    pub fn current(&self) -> &'a GlyphNode {
        self.current
    }
}

impl<'a> Iterator for Steps<'a> {
    type Item = &'a GlyphNode;

    fn next(&mut self) -> Option<Self::Item> {
        let next = choose_next(self.lattice, self.current)?;
        self.current = next;
        Some(next)
    }
}

/// Greedy walker configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyWalker {
    max_steps: Option<usize>,
}

impl GreedyWalker {
    /// Walker whose step bound is the lattice's node count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walker with an explicit step bound.
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }

    /// Configured step bound, if any.
    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    /// Step bound that applies to `lattice`.
    pub fn bound_for(&self, lattice: &Lattice) -> usize {
        self.max_steps.unwrap_or(lattice.len())
    }

    /// Iterate the greedy moves from `start` without a bound.
    ///
    /// # Errors
    ///
    /// Returns `WalkError::UnknownLabel` if `start` is not in the lattice.
    pub fn steps<'a>(&self, lattice: &'a Lattice, start: &str) -> Result<Steps<'a>, WalkError> {
        let current = lattice
            .get(start)
            .ok_or_else(|| WalkError::UnknownLabel(start.to_string()))?;
        Ok(Steps { lattice, current })
    }

    /// Walk from `start` to a terminal node.
    ///
    /// # Errors
    ///
    /// - `UnknownLabel` if `start` is not in the lattice
    /// - `NonTerminating` if the step bound is exceeded
    ///
    /// # Example
    ///
    /// ```
    /// use glyphwave::core::graph::{Lattice, NodeSpec};
    /// use glyphwave::core::walker::GreedyWalker;
    ///
    /// let lattice = Lattice::build(vec![
    ///     NodeSpec::new("s", 9.0, &["low", "high"]).unwrap(),
    ///     NodeSpec::new("low", 0.1, &[]).unwrap(),
    ///     NodeSpec::new("high", 0.7, &[]).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let result = GreedyWalker::new().walk(&lattice, "s").unwrap();
    /// assert_eq!(result.terminal().as_str(), "high");
    /// assert_eq!(result.total_reward, 0.7);
    /// ```
    pub fn walk(&self, lattice: &Lattice, start: &str) -> Result<WalkResult, WalkError> {
        let steps = self.steps(lattice, start)?;
        let origin = steps.current();
        let bound = self.bound_for(lattice);

        let mut path = vec![origin.label.clone()];
        let mut trace = vec![Step {
            label: origin.label.clone(),
            reward: origin.reward,
            total: 0.0,
        }];
        let mut total = 0.0;

        debug!(start = %origin.label, bound, "starting greedy walk");

        for (taken, node) in steps.enumerate() {
            if taken >= bound {
                return Err(WalkError::NonTerminating {
                    steps: bound,
                    last: path[path.len() - 1].clone(),
                });
            }
            total += node.reward;
            debug!(glyph = %node.label, reward = node.reward, total, "greedy step");
            path.push(node.label.clone());
            trace.push(Step {
                label: node.label.clone(),
                reward: node.reward,
                total,
            });
        }

        debug!(moves = path.len() - 1, total, "walk reached terminal");

        Ok(WalkResult {
            path,
            total_reward: total,
            trace,
        })
    }
}
