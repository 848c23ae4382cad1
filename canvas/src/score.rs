//! Stroke scoring: gates, fit, deviation score, and feedback tier.
//!
//! DESIGN
//! ======
//! [`score`] is a pure function of the finished stroke and the config. It
//! runs the cheap gates first (path length, then turn-angle circularity,
//! then sample count), fits a circle only when all pass, and maps the mean
//! radial deviation onto a 0..=100 percentage.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a classification, not an error: rejected strokes come
//! back as a [`ScoreResult`] with `valid == false` and a tier explaining why.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ScoringConfig;
use crate::fit::fit_circle;
use crate::geom::{FittedCircle, Point};
use crate::shape::{is_circular, path_length, turn_angle_variance};

/// Qualitative bucket that decides what feedback the player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackTier {
    /// Stroke shorter than the minimum path length.
    TooShort,
    /// Turn angles too regular or too erratic for a circle attempt.
    Irregular,
    /// Too few samples for a meaningful fit.
    InsufficientSamples,
    /// The points admit no best-fit circle.
    Degenerate,
    /// Fitted radius below `too_small_radius`.
    TooSmallRadius,
    /// Fitted radius in `[too_small_radius, scored_radius)`.
    SmallRadius,
    /// Fitted radius at or above `scored_radius`; the percentage is shown.
    Scored,
}

impl FeedbackTier {
    /// Tier for a successfully fitted circle of the given radius.
    #[must_use]
    pub fn for_radius(radius: f64, config: &ScoringConfig) -> Self {
        if radius < config.too_small_radius {
            Self::TooSmallRadius
        } else if radius < config.scored_radius {
            Self::SmallRadius
        } else {
            Self::Scored
        }
    }

    /// Whether strokes in this tier carry a numeric score.
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::TooSmallRadius | Self::SmallRadius | Self::Scored)
    }

    /// Stable kebab-case name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TooShort => "too-short",
            Self::Irregular => "irregular",
            Self::InsufficientSamples => "insufficient-samples",
            Self::Degenerate => "degenerate",
            Self::TooSmallRadius => "too-small-radius",
            Self::SmallRadius => "small-radius",
            Self::Scored => "scored",
        }
    }

    /// Reaction emoji shown for this tier.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Irregular | Self::Degenerate => "😱",
            Self::TooShort | Self::InsufficientSamples => "🤏",
            Self::TooSmallRadius => "🐜",
            Self::SmallRadius => "🙂",
            Self::Scored => "🎯",
        }
    }

    /// Short caption shown next to the emoji.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TooShort => "Too short, draw a bigger circle",
            Self::Irregular => "That's not a circle",
            Self::InsufficientSamples => "Keep drawing a little longer",
            Self::Degenerate => "Couldn't find a circle in that",
            Self::TooSmallRadius => "Way too small",
            Self::SmallRadius => "A bit small",
            Self::Scored => "",
        }
    }
}

/// Outcome of scoring one stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// The stroke passed every gate and was fitted.
    pub valid: bool,
    /// Percentage in `0..=100`, present when `valid`.
    pub score: Option<f64>,
    /// Best-fit circle, present when `valid`.
    pub circle: Option<FittedCircle>,
    pub tier: FeedbackTier,
}

impl ScoreResult {
    fn rejected(tier: FeedbackTier) -> Self {
        Self { valid: false, score: None, circle: None, tier }
    }

    /// The score formatted for display (`"97.25%"`), only for the `Scored` tier.
    #[must_use]
    pub fn percent_label(&self) -> Option<String> {
        match (self.tier, self.score) {
            (FeedbackTier::Scored, Some(score)) => Some(format!("{score:.2}%")),
            _ => None,
        }
    }
}

/// Average of `|distance(p, center) − radius|` over `points`. Zero for no points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_radial_deviation(points: &[Point], circle: &FittedCircle) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total: f64 = points.iter().map(|p| circle.radial_deviation(*p)).sum();
    total / points.len() as f64
}

/// Map a mean deviation onto `0..=100`: each `threshold` pixels costs 100 points.
#[must_use]
pub fn deviation_score(mean_deviation: f64, threshold: f64) -> f64 {
    (100.0 - (mean_deviation / threshold) * 100.0).clamp(0.0, 100.0)
}

/// Score a finished stroke.
#[must_use]
pub fn score(points: &[Point], config: &ScoringConfig) -> ScoreResult {
    let length = path_length(points);
    if length < config.min_path_length {
        debug!(samples = points.len(), length, "stroke rejected: too short");
        return ScoreResult::rejected(FeedbackTier::TooShort);
    }

    if !is_circular(points, config) {
        debug!(
            samples = points.len(),
            variance = turn_angle_variance(points),
            "stroke rejected: irregular"
        );
        return ScoreResult::rejected(FeedbackTier::Irregular);
    }

    if points.len() < config.min_samples {
        debug!(samples = points.len(), min = config.min_samples, "stroke rejected: too few samples");
        return ScoreResult::rejected(FeedbackTier::InsufficientSamples);
    }

    let circle = match fit_circle(points) {
        Ok(circle) => circle,
        Err(e) => {
            warn!(error = %e, samples = points.len(), "circle fit degenerate");
            return ScoreResult::rejected(FeedbackTier::Degenerate);
        }
    };

    let deviation = mean_radial_deviation(points, &circle);
    let value = deviation_score(deviation, config.deviation_threshold);
    let tier = FeedbackTier::for_radius(circle.radius, config);
    debug!(
        samples = points.len(),
        radius = circle.radius,
        deviation,
        score = value,
        ?tier,
        "stroke scored"
    );

    ScoreResult { valid: true, score: Some(value), circle: Some(circle), tier }
}
