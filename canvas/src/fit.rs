//! Least-squares circle fitting.
//!
//! DESIGN
//! ======
//! Fits the algebraic form `x² + y² = 2ax + 2by + c` by ordinary least
//! squares. Each point contributes a design row `[2x, 2y, 1]` with target
//! `x² + y²`; the 3×3 normal equations `(AᵀA) p = Aᵀb` are solved by Gaussian
//! elimination with partial pivoting. The circle is center `(a, b)`, radius
//! `sqrt(a² + b² + c)`.
//!
//! Points are shifted by their centroid before accumulation. The residual
//! `(x − a)² + (y − b)² − r²` is translation invariant, so the fitted circle
//! is the same, but sums of fourth powers of canvas coordinates no longer
//! swamp the pivots.
//!
//! ERROR HANDLING
//! ==============
//! Collinear or coincident input makes `AᵀA` singular. That is reported as
//! [`DegenerateFit`] instead of returning a NaN circle.

#[cfg(test)]
#[path = "fit_test.rs"]
mod fit_test;

use crate::consts::SINGULAR_PIVOT_EPS;
use crate::geom::{FittedCircle, Point};

/// Why a point set has no meaningful best-fit circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DegenerateFit {
    /// Fewer than three points were supplied.
    #[error("need at least 3 points to fit a circle, got {0}")]
    TooFewPoints(usize),
    /// A coordinate was NaN or infinite.
    #[error("stroke contains a non-finite coordinate")]
    NonFinite,
    /// The normal equations have no unique solution (collinear or coincident points).
    #[error("normal equations are singular")]
    Singular,
    /// The solution implies `r² < 0`.
    #[error("fitted radius is imaginary")]
    ImaginaryRadius,
}

/// Fit a circle to `points` by least squares.
///
/// # Errors
///
/// Returns [`DegenerateFit`] when fewer than three points are given, when a
/// coordinate is non-finite, when the points are collinear or coincident, or
/// when the solution has no real radius.
pub fn fit_circle(points: &[Point]) -> Result<FittedCircle, DegenerateFit> {
    if points.len() < 3 {
        return Err(DegenerateFit::TooFewPoints(points.len()));
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(DegenerateFit::NonFinite);
    }

    let origin = centroid(points);
    let mut ata = [[0.0_f64; 3]; 3];
    let mut atb = [0.0_f64; 3];
    for p in points {
        let x = p.x - origin.x;
        let y = p.y - origin.y;
        let row = [2.0 * x, 2.0 * y, 1.0];
        let target = x.mul_add(x, y * y);
        for (i, ri) in row.iter().enumerate() {
            atb[i] += ri * target;
            for (j, rj) in row.iter().enumerate() {
                ata[i][j] += ri * rj;
            }
        }
    }

    let [a, b, c] = solve3(ata, atb).ok_or(DegenerateFit::Singular)?;
    let radius_sq = a.mul_add(a, b.mul_add(b, c));
    if !radius_sq.is_finite() || radius_sq < 0.0 {
        return Err(DegenerateFit::ImaginaryRadius);
    }

    Ok(FittedCircle {
        center: Point::new(a + origin.x, b + origin.y),
        radius: radius_sq.sqrt(),
    })
}

#[allow(clippy::cast_precision_loss)]
fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Solve `m · x = rhs` for a dense 3×3 system.
///
/// Returns `None` when a pivot is at most [`SINGULAR_PIVOT_EPS`] times the
/// largest entry of `m`.
fn solve3(mut m: [[f64; 3]; 3], mut rhs: [f64; 3]) -> Option<[f64; 3]> {
    let scale = m.iter().flatten().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if !scale.is_finite() || scale <= 0.0 {
        return None;
    }
    let tol = SINGULAR_PIVOT_EPS * scale;

    for col in 0..3 {
        let pivot = (col..3).max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))?;
        if m[pivot][col].abs() <= tol {
            return None;
        }
        m.swap(col, pivot);
        rhs.swap(col, pivot);

        for row in col + 1..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..3 {
                m[row][k] -= factor * m[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut x = [0.0_f64; 3];
    for row in (0..3).rev() {
        let tail: f64 = (row + 1..3).map(|k| m[row][k] * x[k]).sum();
        x[row] = (rhs[row] - tail) / m[row][row];
    }
    Some(x)
}
