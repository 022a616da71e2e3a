//! encode command - Text to glyphs through the transformation pipeline

use crate::cli::args::Stage;
use crate::cli::Context;
use crate::core::transform::TransformTrace;
use crate::core::types::GlyphLabel;
use crate::ui::output;
use crate::ui::report;
use anyhow::{Context as _, Result};

/// Encode `text` and print the requested stage.
pub fn encode(ctx: &Context, text: &str, stage: Stage) -> Result<()> {
    let config = ctx.load_config()?;
    let universe = config.universe();
    let trace = config
        .transformer()
        .pipeline(text, &universe)
        .context("Failed to encode text")?;

    if ctx.json {
        match stage_of(&trace, stage) {
            Some(sequence) => output::json(&sequence)?,
            None => output::json(&trace)?,
        }
        return Ok(());
    }

    match stage_of(&trace, stage) {
        Some(sequence) => output::result(report::sequence_line(sequence)),
        None if ctx.verbosity().is_quiet() => {
            output::result(report::sequence_line(&trace.circular))
        }
        None => {
            output::result(format!("glyphs:   {}", report::sequence_line(&trace.glyphs)));
            output::result(format!("golden:   {}", report::sequence_line(&trace.golden)));
            output::result(format!("circular: {}", report::sequence_line(&trace.circular)));
        }
    }

    Ok(())
}

/// The single sequence for `stage`, or `None` for every stage.
fn stage_of(trace: &TransformTrace, stage: Stage) -> Option<&[GlyphLabel]> {
    match stage {
        Stage::Glyphs => Some(&trace.glyphs),
        Stage::Golden => Some(&trace.golden),
        Stage::Circular => Some(&trace.circular),
        Stage::All => None,
    }
}
