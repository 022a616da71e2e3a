//! Glyphwave - greedy glyph-lattice walks and glyph transformations
//!
//! Glyphwave models a fixed directed graph of labeled glyphs, each carrying a
//! reward, and walks it greedily from a start glyph to a terminal glyph. A
//! companion transformer maps text into glyph sequences and re-labels them
//! with golden-ratio and circular passes.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, algorithms and configuration
//! - [`cli`] - Command-line interface layer (parses args, calls core)
//! - [`ui`] - Output formatting and logging setup
//!
//! # Example
//!
//! ```
//! use glyphwave::core::reference;
//! use glyphwave::core::transform::GlyphTransformer;
//! use glyphwave::core::walker::GreedyWalker;
//!
//! let lattice = reference::lattice();
//! let walk = GreedyWalker::new().walk(&lattice, reference::START).unwrap();
//! assert_eq!(walk.terminal().as_str(), "φ");
//!
//! let trace = GlyphTransformer::new()
//!     .pipeline("abc", &reference::universe())
//!     .unwrap();
//! assert_eq!(trace.circular.len(), 3);
//! ```

pub mod cli;
pub mod core;
pub mod ui;

pub use crate::core::graph::{build_lattice, GlyphNode, Lattice, LatticeError, NodeSpec};
pub use crate::core::transform::{GlyphTransformer, Sentinels, TransformError};
pub use crate::core::universe::GlyphUniverse;
pub use crate::core::walker::{GreedyWalker, WalkError, WalkResult};
