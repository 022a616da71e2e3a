//! core::geometry
//!
//! Point generators for the φ-node / π-corner collapse and the fractal bindu
//! field. Only coordinates are produced here; drawing them is left to
//! whatever consumes the data.

use super::transform::PHI;
use serde::Serialize;
use std::f64::consts::PI;
use thiserror::Error;

/// Base frequency used for bindu recursion when none is given.
pub const DEFAULT_BINDU_FREQUENCY: f64 = 1.618;

/// Largest accepted base frequency.
pub const MAX_BINDU_FREQUENCY: f64 = 4.0;

/// Upper bound on the number of bindus in one field.
pub const MAX_BINDUS: usize = 2_000_000;

/// Intensity multiplier applied at every bindu split.
const BINDU_DECAY: f64 = 0.618;

/// Errors from the point generators.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("bindu frequency must be finite and in (0, {max}], got {0}", max = MAX_BINDU_FREQUENCY)]
    InvalidFrequency(f64),

    #[error("bindu field would exceed {max} points at level {level}", max = MAX_BINDUS)]
    FieldTooLarge { level: usize },
}

/// Check a bindu base frequency.
pub fn validate_frequency(frequency: f64) -> Result<f64, GeometryError> {
    if frequency.is_finite() && frequency > 0.0 && frequency <= MAX_BINDU_FREQUENCY {
        Ok(frequency)
    } else {
        Err(GeometryError::InvalidFrequency(frequency))
    }
}

/// A point in three dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A weighted point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bindu {
    pub x: f64,
    pub y: f64,
    pub intensity: f64,
}

/// Golden-angle spiral of `count` points rising along z.
pub fn phi_nodes(count: usize) -> Vec<Point3> {
    (0..count)
        .map(|i| {
            let t = i as f64 * PHI;
            let damping = 1.0 + t * 0.1;
            Point3 {
                x: t.cos() / damping,
                y: t.sin() / damping,
                z: t * 0.1,
            }
        })
        .collect()
}

/// The eight cube vertices at `±π/4`, x-major order.
pub fn pi_corners() -> Vec<Point3> {
    let half = PI / 4.0;
    let signs = [-1.0, 1.0];
    let mut corners = Vec::with_capacity(8);
    for sx in signs {
        for sy in signs {
            for sz in signs {
                corners.push(Point3 {
                    x: sx * half,
                    y: sy * half,
                    z: sz * half,
                });
            }
        }
    }
    corners
}

/// Index pairs of the twelve edges joining [`pi_corners`].
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Pull points toward the origin: point `i` of `n` is scaled by `(n - i) / n`.
pub fn converge(points: &[Point3]) -> Vec<Point3> {
    let n = points.len() as f64;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let factor = (n - i as f64) / n;
            Point3 {
                x: p.x * factor,
                y: p.y * factor,
                z: p.z * factor,
            }
        })
        .collect()
}

/// Recursive bindu field.
///
/// Starts from a single unit bindu at the origin. At each level every bindu
/// so far spawns `floor(6·f^level)` children on a ring of radius
/// `intensity·(level+1)·0.3`, each with intensity scaled by 0.618. Children
/// are appended after their parents.
///
/// # Errors
///
/// - `InvalidFrequency` unless `base_frequency` is finite and in
///   `(0, MAX_BINDU_FREQUENCY]`
/// - `FieldTooLarge` if a level would push the field past [`MAX_BINDUS`]
pub fn bindu_recursion(depth: usize, base_frequency: f64) -> Result<Vec<Bindu>, GeometryError> {
    validate_frequency(base_frequency)?;

    let mut bindus = vec![Bindu {
        x: 0.0,
        y: 0.0,
        intensity: 1.0,
    }];

    for level in 0..depth {
        let pulse = base_frequency.powi(level as i32);
        let slots = 6.0 * pulse;
        let count = slots.floor() as usize;

        let total = bindus
            .len()
            .checked_mul(count)
            .and_then(|spawned| spawned.checked_add(bindus.len()));
        if total.map_or(true, |total| total > MAX_BINDUS) {
            return Err(GeometryError::FieldTooLarge { level });
        }

        let spawned: Vec<Bindu> = bindus
            .iter()
            .flat_map(|parent| {
                let radius = parent.intensity * (level + 1) as f64 * 0.3;
                (0..count).map(move |k| {
                    let angle = k as f64 * 2.0 * PI / slots;
                    Bindu {
                        x: parent.x + radius * angle.cos(),
                        y: parent.y + radius * angle.sin(),
                        intensity: parent.intensity * BINDU_DECAY,
                    }
                })
            })
            .collect();

        bindus.extend(spawned);
    }

    Ok(bindus)
}
