//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing
//! - [`report`] - Text rendering of walks, sequences and lattices
//! - [`logging`] - Diagnostic logging setup
//!
//! # Design
//!
//! All output goes through this module so quiet mode and JSON mode are
//! handled in one place. The core never prints.

pub mod logging;
pub mod output;
pub mod report;
