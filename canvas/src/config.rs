//! Tunable scoring constants.
//!
//! Every threshold the scorer applies lives in [`ScoringConfig`]. The
//! defaults come from [`crate::consts`]; hosts may override any subset by
//! passing a JSON object (missing keys keep their defaults).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DEVIATION_THRESHOLD, DEFAULT_MAX_TURN_VARIANCE, DEFAULT_MIN_PATH_LENGTH, DEFAULT_MIN_SAMPLES,
    DEFAULT_MIN_TURN_VARIANCE, DEFAULT_SCORED_RADIUS, DEFAULT_TOO_SMALL_RADIUS,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid scoring config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{field}` must be a finite, non-negative number (got {value})")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("`deviation_threshold` must be positive (got {0})")]
    NonPositiveThreshold(f64),
    #[error("turn variance band is empty: min {min} >= max {max}")]
    EmptyVarianceBand { min: f64, max: f64 },
    #[error("`too_small_radius` ({too_small}) exceeds `scored_radius` ({scored})")]
    RadiusTiersInverted { too_small: f64, scored: f64 },
}

/// Thresholds for the length gate, circularity gate, scoring, and radius tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Fewest samples a stroke needs before it is fitted.
    pub min_samples: usize,
    /// Minimum stroke length in pixels.
    pub min_path_length: f64,
    /// Exclusive lower bound on turn-angle variance (degrees²).
    pub min_turn_variance: f64,
    /// Exclusive upper bound on turn-angle variance (degrees²).
    pub max_turn_variance: f64,
    /// Mean radial deviation in pixels that drives the score to zero.
    pub deviation_threshold: f64,
    /// Radii below this are "too small".
    pub too_small_radius: f64,
    /// Radii at or above this show the numeric score.
    pub scored_radius: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_samples: DEFAULT_MIN_SAMPLES,
            min_path_length: DEFAULT_MIN_PATH_LENGTH,
            min_turn_variance: DEFAULT_MIN_TURN_VARIANCE,
            max_turn_variance: DEFAULT_MAX_TURN_VARIANCE,
            deviation_threshold: DEFAULT_DEVIATION_THRESHOLD,
            too_small_radius: DEFAULT_TOO_SMALL_RADIUS,
            scored_radius: DEFAULT_SCORED_RADIUS,
        }
    }
}

impl ScoringConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or a range error
    /// from [`ScoringConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every threshold is usable.
    ///
    /// The variance bounds may be negative: a negative `min_turn_variance`
    /// disables the lower bound, which is useful for synthetic strokes.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_path_length", self.min_path_length),
            ("deviation_threshold", self.deviation_threshold),
            ("too_small_radius", self.too_small_radius),
            ("scored_radius", self.scored_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if self.deviation_threshold <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold(self.deviation_threshold));
        }
        if self.min_turn_variance.is_nan()
            || self.max_turn_variance.is_nan()
            || self.min_turn_variance >= self.max_turn_variance
        {
            return Err(ConfigError::EmptyVarianceBand {
                min: self.min_turn_variance,
                max: self.max_turn_variance,
            });
        }
        if self.too_small_radius > self.scored_radius {
            return Err(ConfigError::RadiusTiersInverted {
                too_small: self.too_small_radius,
                scored: self.scored_radius,
            });
        }
        Ok(())
    }
}
