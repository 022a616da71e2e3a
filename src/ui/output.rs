//! ui::output
//!
//! Terminal output for commands.
//!
//! # Streams
//!
//! - stdout carries the command's answer: [`result`] lines or a [`json`]
//!   document. Answers are printed even under `--quiet`.
//! - Commentary around the answer ([`print`], [`section`]) goes to stdout
//!   and is dropped under `--quiet`.
//! - [`warn`] and [`error`] go to stderr.

use serde::Serialize;
use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet`: answers only
    Quiet,
    /// Default
    Normal,
    /// `--debug`: also enables debug logging
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. Quiet wins over debug.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    pub fn is_quiet(self) -> bool {
        self == Verbosity::Quiet
    }
}

/// Commentary line, dropped in quiet mode.
pub fn print(message: impl Display, verbosity: Verbosity) {
    if !verbosity.is_quiet() {
        println!("{}", message);
    }
}

/// Blank line and heading before a block of commentary.
pub fn section(title: impl Display, verbosity: Verbosity) {
    if !verbosity.is_quiet() {
        println!();
        println!("{}", title);
    }
}

/// Answer line, always shown.
pub fn result(message: impl Display) {
    println!("{}", message);
}

/// Answer as pretty JSON.
pub fn json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Error on stderr (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Warning on stderr, dropped in quiet mode.
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if !verbosity.is_quiet() {
        eprintln!("warning: {}", message);
    }
}

/// One item per line, each behind `prefix`.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
