//! Shape heuristics applied before a stroke is trusted as a circle attempt.
//!
//! A hand-drawn circle turns by a roughly constant amount at every sample,
//! wobbling a little. Straight lines and clean polygons barely vary (or only
//! at a few corners); scribbles vary wildly. [`is_circular`] keeps strokes
//! whose turn-angle variance falls strictly inside the configured band.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use crate::config::ScoringConfig;
use crate::consts::MIN_TURN_VECTOR_LEN;
use crate::geom::Point;

/// Total length of the polyline through `points`, in pixels.
#[must_use]
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

/// Turn angle in degrees at `at`, between the vectors to `prev` and `next`.
///
/// Returns `0.0` when either vector is shorter than [`MIN_TURN_VECTOR_LEN`].
#[must_use]
pub fn turn_angle(prev: Point, at: Point, next: Point) -> f64 {
    let v1 = at.to(prev);
    let v2 = at.to(next);
    let m1 = v1.magnitude();
    let m2 = v2.magnitude();
    if m1 < MIN_TURN_VECTOR_LEN || m2 < MIN_TURN_VECTOR_LEN {
        return 0.0;
    }
    let cos = (v1.dot(v2) / (m1 * m2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Turn angles at every interior point, dropping zero angles.
#[must_use]
pub fn turn_angles(points: &[Point]) -> Vec<f64> {
    points
        .windows(3)
        .map(|w| turn_angle(w[0], w[1], w[2]))
        .filter(|a| *a > 0.0)
        .collect()
}

/// Population variance of the stroke's turn angles (degrees²).
///
/// Zero when at most one angle survives filtering.
#[must_use]
pub fn turn_angle_variance(points: &[Point]) -> f64 {
    population_variance(&turn_angles(points))
}

/// Whether the stroke turns regularly enough to be a circle attempt.
#[must_use]
pub fn is_circular(points: &[Point], config: &ScoringConfig) -> bool {
    if points.len() < 3 {
        return false;
    }
    let variance = turn_angle_variance(points);
    config.min_turn_variance < variance && variance < config.max_turn_variance
}

#[allow(clippy::cast_precision_loss)]
fn population_variance(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}
