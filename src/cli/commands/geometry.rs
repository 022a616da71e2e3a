//! geometry command - Emit φ-node, π-corner and bindu point sets

use std::fmt;

use serde::Serialize;

use crate::cli::Context;
use crate::core::geometry::{self, Bindu, Point3, CUBE_EDGES};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Text form of a point, fixed precision.
struct Xyz<'a>(&'a Point3);

impl fmt::Display for Xyz<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>10.6} {:>10.6} {:>10.6}", self.0.x, self.0.y, self.0.z)
    }
}

/// Text form of a bindu, fixed precision.
struct Pulse<'a>(&'a Bindu);

impl fmt::Display for Pulse<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>10.6} {:>10.6} intensity={:.6}",
            self.0.x, self.0.y, self.0.intensity
        )
    }
}

fn print_points(points: &[Point3]) {
    let rows: Vec<_> = points.iter().map(Xyz).collect();
    output::result(output::format_list(&rows, ""));
}

/// Golden-angle spiral, optionally collapsed toward the origin.
pub fn phi_nodes(ctx: &Context, count: usize, converge: bool) -> Result<()> {
    let nodes = geometry::phi_nodes(count);
    let nodes = if converge {
        geometry::converge(&nodes)
    } else {
        nodes
    };

    if ctx.json {
        output::json(&nodes)?;
    } else {
        print_points(&nodes);
    }
    Ok(())
}

#[derive(Serialize)]
struct Cube {
    corners: Vec<Point3>,
    edges: &'static [(usize, usize)],
}

/// Stabilized cube corners and the edges joining them.
pub fn pi_corners(ctx: &Context) -> Result<()> {
    let corners = geometry::pi_corners();

    if ctx.json {
        output::json(&Cube {
            corners,
            edges: &CUBE_EDGES,
        })?;
    } else {
        print_points(&corners);
        output::print(format!("{} edges", CUBE_EDGES.len()), ctx.verbosity());
    }
    Ok(())
}

/// Recursive bindu field.
pub fn bindus(ctx: &Context, depth: usize, frequency: f64) -> Result<()> {
    let field = geometry::bindu_recursion(depth, frequency)
        .context("Failed to generate bindu field")?;

    if ctx.json {
        output::json(&field)?;
    } else {
        let rows: Vec<_> = field.iter().map(Pulse).collect();
        output::result(output::format_list(&rows, ""));
        output::print(
            format!("{} bindus at depth {}", field.len(), depth),
            ctx.verbosity(),
        );
    }
    Ok(())
}
