//! walk command - Greedy walk over the configured lattice

use std::path::Path;

use serde::Serialize;

use super::resolve_catalog;
use crate::cli::Context;
use crate::core::catalog::GlyphCatalog;
use crate::core::types::GlyphLabel;
use crate::core::walker::WalkResult;
use crate::ui::output::{self, Verbosity};
use crate::ui::report;
use anyhow::{Context as _, Result};

#[derive(Debug, Serialize)]
struct WalkOutput<'a> {
    start: &'a str,
    path: &'a [GlyphLabel],
    total_reward: f64,
    steps: Vec<StepOutput<'a>>,
}

#[derive(Debug, Serialize)]
struct StepOutput<'a> {
    label: &'a GlyphLabel,
    name: &'a str,
    meaning: &'a str,
    reward: f64,
    total: f64,
}

impl<'a> WalkOutput<'a> {
    fn new(start: &'a str, result: &'a WalkResult, catalog: &'a GlyphCatalog) -> Self {
        let steps = result
            .trace
            .iter()
            .map(|step| {
                let d = catalog.describe(step.label.as_str());
                StepOutput {
                    label: &step.label,
                    name: d.name,
                    meaning: d.meaning,
                    reward: step.reward,
                    total: step.total,
                }
            })
            .collect();
        Self {
            start,
            path: &result.path,
            total_reward: result.total_reward,
            steps,
        }
    }
}

/// Walk the lattice from `start` (or the configured start) and report the
/// path.
pub fn walk(ctx: &Context, start: Option<&str>, catalog: Option<&Path>, trace: bool) -> Result<()> {
    let config = ctx.load_config()?;
    let lattice = config.lattice().context("Failed to build lattice")?;
    let catalog = resolve_catalog(&config, catalog)?;
    let start = start.unwrap_or(config.start());

    let result = config
        .walker()
        .walk(&lattice, start)
        .with_context(|| format!("Walk from '{}' failed", start))?;

    if ctx.json {
        output::json(&WalkOutput::new(start, &result, &catalog))?;
        return Ok(());
    }

    match ctx.verbosity() {
        Verbosity::Quiet => output::result(report::path_line(&result)),
        _ => {
            output::result(report::walk_report(&result, &catalog));
            if trace {
                output::result("");
                output::result(report::trace_lines(&result));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference;
    use crate::core::walker::GreedyWalker;

    #[test]
    fn json_output_carries_descriptions() {
        let lattice = reference::lattice();
        let result = GreedyWalker::new().walk(&lattice, "Δ").unwrap();
        let catalog = reference::catalog();

        let value = serde_json::to_value(WalkOutput::new("Δ", &result, &catalog)).unwrap();
        assert_eq!(value["start"], "Δ");
        assert_eq!(value["path"].as_array().unwrap().len(), 6);
        assert_eq!(value["steps"][5]["label"], "φ");
        assert_eq!(value["steps"][5]["name"], "PHI");
        assert!((value["total_reward"].as_f64().unwrap() - 1.8).abs() < 1e-9);
    }
}
