//! core
//!
//! Core domain types and algorithms for Glyphwave.
//!
//! # Modules
//!
//! - [`types`] - Strong types: GlyphLabel
//! - [`graph`] - Lattice representation and construction
//! - [`walker`] - Greedy traversal of a lattice
//! - [`universe`] - Ordered glyph alphabet for text transformation
//! - [`transform`] - Text-to-glyph mapping and the golden / circular passes
//! - [`catalog`] - Glyph metadata with default substitution
//! - [`geometry`] - φ-node, π-corner and bindu point generators
//! - [`reference`] - Built-in reference definitions
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Definitions are plain data passed into constructors
//! - Constructed values are immutable and freely shareable
//! - Every operation is deterministic

pub mod catalog;
pub mod config;
pub mod geometry;
pub mod graph;
pub mod reference;
pub mod transform;
pub mod types;
pub mod universe;
pub mod walker;
