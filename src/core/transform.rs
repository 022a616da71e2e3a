//! core::transform
//!
//! Text-to-glyph mapping and the golden / circular re-labeling passes.
//!
//! # Passes
//!
//! 1. [`GlyphTransformer::text_to_glyph_sequence`] - letters map into the
//!    universe through a φ-scaled index, spaces map to the space sentinel,
//!    anything else is skipped
//! 2. [`GlyphTransformer::apply_golden_transform`] - positions whose
//!    fractional `i·φ` exceeds `φ − 1` become the convergence sentinel
//! 3. [`GlyphTransformer::apply_circular_transform`] - positions on the
//!    upper or lower lobe of `sin(iπ/n)` become the stabilization or
//!    return-to-seed sentinel
//!
//! Every pass is a pure function of its input and returns a new sequence.

use super::types::GlyphLabel;
use super::universe::GlyphUniverse;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;
use tracing::debug;

/// The golden ratio, `(1 + √5) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Errors from text transformation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("glyph universe is empty; cannot map text into it")]
    EmptyUniverse,
}

/// Fixed labels the passes substitute in.
///
/// ```toml
/// [sentinels]
/// space = "·"
/// convergence = "φ"
/// stabilization = "π"
/// return_to_seed = "Δ"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sentinels {
    /// Emitted for a space in the input text.
    pub space: GlyphLabel,
    /// Emitted by the golden pass.
    pub convergence: GlyphLabel,
    /// Emitted by the circular pass on the upper lobe.
    pub stabilization: GlyphLabel,
    /// Emitted by the circular pass on the lower lobe.
    pub return_to_seed: GlyphLabel,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            space: GlyphLabel::from_static("·"),
            convergence: GlyphLabel::from_static("φ"),
            stabilization: GlyphLabel::from_static("π"),
            return_to_seed: GlyphLabel::from_static("Δ"),
        }
    }
}

/// Every stage of the chained passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformTrace {
    /// Output of pass 1.
    pub glyphs: Vec<GlyphLabel>,
    /// Output of pass 2.
    pub golden: Vec<GlyphLabel>,
    /// Output of pass 3.
    pub circular: Vec<GlyphLabel>,
}

/// Stateless glyph transformer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTransformer {
    sentinels: Sentinels,
}

impl GlyphTransformer {
    /// Transformer with the default sentinels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transformer with custom sentinels.
    pub fn with_sentinels(sentinels: Sentinels) -> Self {
        Self { sentinels }
    }

    pub fn sentinels(&self) -> &Sentinels {
        &self.sentinels
    }

    /// Map text into a glyph sequence.
    ///
    /// The input is lowercased first. ASCII letter `c` maps to
    /// `universe[floor((c - 'a') · φ mod |universe|)]`, a space maps to the
    /// space sentinel, and every other character is skipped.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EmptyUniverse` if `universe` has no glyphs.
    ///
    /// # Example
    ///
    /// ```
    /// use glyphwave::core::reference;
    /// use glyphwave::core::transform::GlyphTransformer;
    ///
    /// let universe = reference::universe();
    /// let glyphs = GlyphTransformer::new()
    ///     .text_to_glyph_sequence("a b", &universe)
    ///     .unwrap();
    /// let shown: Vec<_> = glyphs.iter().map(|g| g.as_str()).collect();
    /// assert_eq!(shown, vec!["Δ", "·", "Ω"]);
    /// ```
    pub fn text_to_glyph_sequence(
        &self,
        text: &str,
        universe: &GlyphUniverse,
    ) -> Result<Vec<GlyphLabel>, TransformError> {
        if universe.is_empty() {
            return Err(TransformError::EmptyUniverse);
        }
        let size = universe.len();

        let glyphs = text
            .chars()
            .flat_map(char::to_lowercase)
            .filter_map(|c| {
                if c.is_ascii_lowercase() {
                    let index = glyph_index(c, size);
                    universe.get(index).cloned()
                } else if c == ' ' {
                    Some(self.sentinels.space.clone())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        debug!(chars = text.chars().count(), glyphs = glyphs.len(), "mapped text to glyphs");
        Ok(glyphs)
    }

    /// Replace positions whose fractional `i·φ` exceeds `φ − 1` with the
    /// convergence sentinel.
    pub fn apply_golden_transform(&self, sequence: &[GlyphLabel]) -> Vec<GlyphLabel> {
        let threshold = PHI - 1.0;
        sequence
            .iter()
            .enumerate()
            .map(|(i, glyph)| {
                let phi_factor = (i as f64 * PHI) % 1.0;
                if phi_factor > threshold {
                    self.sentinels.convergence.clone()
                } else {
                    glyph.clone()
                }
            })
            .collect()
    }

    /// Replace positions by the sign lobe of `sin(iπ/n)`.
    ///
    /// Above 0.5 becomes the stabilization sentinel, below −0.5 the
    /// return-to-seed sentinel. An empty sequence stays empty.
    pub fn apply_circular_transform(&self, sequence: &[GlyphLabel]) -> Vec<GlyphLabel> {
        let n = sequence.len();
        if n == 0 {
            return Vec::new();
        }

        sequence
            .iter()
            .enumerate()
            .map(|(i, glyph)| {
                let pi_factor = (i as f64 * PI / n as f64).sin();
                if pi_factor > 0.5 {
                    self.sentinels.stabilization.clone()
                } else if pi_factor < -0.5 {
                    // sin stays non-negative for i in 0..n, so this arm is
                    // never taken; the return-to-seed sentinel is still part
                    // of the configurable set.
                    self.sentinels.return_to_seed.clone()
                } else {
                    glyph.clone()
                }
            })
            .collect()
    }

    /// Run all three passes and keep each stage.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EmptyUniverse` if `universe` has no glyphs.
    pub fn pipeline(
        &self,
        text: &str,
        universe: &GlyphUniverse,
    ) -> Result<TransformTrace, TransformError> {
        let glyphs = self.text_to_glyph_sequence(text, universe)?;
        let golden = self.apply_golden_transform(&glyphs);
        let circular = self.apply_circular_transform(&golden);
        Ok(TransformTrace {
            glyphs,
            golden,
            circular,
        })
    }
}

/// Universe position for an ASCII lowercase letter.
fn glyph_index(c: char, size: usize) -> usize {
    let ordinal = (c as u32 - 'a' as u32) as f64;
    let index = ((ordinal * PHI) % size as f64).floor() as usize;
    // fmod result is strictly below size, the clamp only guards rounding
    index.min(size - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference;

    fn labels(names: &[&str]) -> Vec<GlyphLabel> {
        names.iter().map(|n| GlyphLabel::new(*n).unwrap()).collect()
    }

    fn shown(seq: &[GlyphLabel]) -> Vec<&str> {
        seq.iter().map(|g| g.as_str()).collect()
    }

    #[test]
    fn phi_constant_matches_definition() {
        assert_eq!(PHI, (1.0 + 5f64.sqrt()) / 2.0);
    }

    #[test]
    fn single_a_maps_to_first_glyph() {
        let universe = reference::universe();
        let out = GlyphTransformer::new()
            .text_to_glyph_sequence("a", &universe)
            .unwrap();
        assert_eq!(out, vec![universe.get(0).unwrap().clone()]);
    }

    #[test]
    fn empty_text_is_empty_sequence() {
        let universe = reference::universe();
        let out = GlyphTransformer::new()
            .text_to_glyph_sequence("", &universe)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn empty_universe_is_rejected() {
        let err = GlyphTransformer::new()
            .text_to_glyph_sequence("abc", &GlyphUniverse::default())
            .unwrap_err();
        assert_eq!(err, TransformError::EmptyUniverse);
    }

    #[test]
    fn case_is_ignored() {
        let universe = reference::universe();
        let t = GlyphTransformer::new();
        assert_eq!(
            t.text_to_glyph_sequence("AbC", &universe).unwrap(),
            t.text_to_glyph_sequence("abc", &universe).unwrap()
        );
    }

    #[test]
    fn non_letters_are_skipped_and_spaces_kept() {
        let universe = reference::universe();
        let out = GlyphTransformer::new()
            .text_to_glyph_sequence("hello, world!", &universe)
            .unwrap();
        assert_eq!(
            shown(&out),
            vec!["Γ", "Φ", "Θ", "Θ", "∴", "·", "∴", "∴", "Ω", "Θ", "Θ"]
        );
    }

    #[test]
    fn tabs_and_digits_are_not_spaces() {
        let universe = reference::universe();
        let out = GlyphTransformer::new()
            .text_to_glyph_sequence("a\t1\nb", &universe)
            .unwrap();
        assert_eq!(shown(&out), vec!["Δ", "Ω"]);
    }

    #[test]
    fn index_wraps_around_small_universe() {
        let universe = GlyphUniverse::new(labels(&["x", "y"]));
        // c: floor(2φ mod 2) = floor(1.236) = 1
        let out = GlyphTransformer::new()
            .text_to_glyph_sequence("c", &universe)
            .unwrap();
        assert_eq!(shown(&out), vec!["y"]);
    }

    #[test]
    fn golden_pass_marks_high_fractions() {
        let seq = labels(&["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
        let out = GlyphTransformer::new().apply_golden_transform(&seq);
        // fractional parts: 0, .618 (equal, kept), .236, .854, .472, .090, .708, .326, .944
        assert_eq!(shown(&out), vec!["a", "b", "c", "φ", "e", "f", "φ", "h", "φ"]);
    }

    #[test]
    fn circular_pass_marks_upper_lobe() {
        let seq = labels(&["a", "b", "c"]);
        let out = GlyphTransformer::new().apply_circular_transform(&seq);
        assert_eq!(shown(&out), vec!["a", "π", "π"]);
    }

    #[test]
    fn circular_pass_on_empty_is_empty() {
        let out = GlyphTransformer::new().apply_circular_transform(&[]);
        assert!(out.is_empty());
    }

    #[test]
    fn passes_do_not_touch_input() {
        let seq = labels(&["a", "b", "c", "d"]);
        let before = seq.clone();
        let t = GlyphTransformer::new();
        let _ = t.apply_golden_transform(&seq);
        let _ = t.apply_circular_transform(&seq);
        assert_eq!(seq, before);
    }

    #[test]
    fn custom_sentinels_are_used() {
        let sentinels = Sentinels {
            space: GlyphLabel::new("_").unwrap(),
            convergence: GlyphLabel::new("C").unwrap(),
            stabilization: GlyphLabel::new("S").unwrap(),
            return_to_seed: GlyphLabel::new("R").unwrap(),
        };
        let t = GlyphTransformer::with_sentinels(sentinels);
        let universe = reference::universe();
        let trace = t.pipeline("a b c d", &universe).unwrap();
        assert_eq!(trace.glyphs[1].as_str(), "_");
        assert_eq!(trace.golden[3].as_str(), "C");
        assert!(trace.circular.iter().any(|g| g.as_str() == "S"));
    }

    #[test]
    fn pipeline_chains_every_pass() {
        let universe = reference::universe();
        let trace = GlyphTransformer::new()
            .pipeline("hello world", &universe)
            .unwrap();
        assert_eq!(
            shown(&trace.golden),
            vec!["Γ", "Φ", "Θ", "φ", "∴", "·", "φ", "∴", "φ", "Θ", "Θ"]
        );
        assert_eq!(
            shown(&trace.circular),
            vec!["Γ", "Φ", "π", "π", "π", "π", "π", "π", "π", "π", "Θ"]
        );
    }

    #[test]
    fn circular_pass_never_returns_to_seed() {
        let sentinels = Sentinels {
            space: GlyphLabel::new("_").unwrap(),
            convergence: GlyphLabel::new("C").unwrap(),
            stabilization: GlyphLabel::new("S").unwrap(),
            return_to_seed: GlyphLabel::new("R").unwrap(),
        };
        let t = GlyphTransformer::with_sentinels(sentinels);
        for len in 1..=64 {
            let seq = vec![GlyphLabel::new("x").unwrap(); len];
            let out = t.apply_circular_transform(&seq);
            assert_eq!(out.len(), len);
            assert!(out.iter().all(|g| g.as_str() != "R"), "length {len}");
        }
    }
}
