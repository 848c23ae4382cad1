#![allow(clippy::float_cmp)]

use std::f64::consts::TAU;

use super::*;

const HAND_JITTER: [f64; 8] = [0.0, 1.0, -0.5, 2.0, -1.0, 0.5, -2.0, 0.0];

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// `n` samples over `loops` turns of a circle, radius perturbed by `jitter[i % len]`.
#[allow(clippy::cast_precision_loss)]
fn looped_circle(cx: f64, cy: f64, r: f64, n: usize, loops: f64, jitter: &[f64]) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = TAU * loops * i as f64 / n as f64;
            let ri = r + jitter[i % jitter.len()];
            pt(cx + ri * t.cos(), cy + ri * t.sin())
        })
        .collect()
}

fn hand_drawn_circle() -> Vec<Point> {
    looped_circle(300.0, 300.0, 150.0, 100, 1.0, &HAND_JITTER)
}

fn exact_circle() -> Vec<Point> {
    looped_circle(300.0, 300.0, 150.0, 100, 1.0, &[0.0])
}

fn no_lower_variance_bound() -> ScoringConfig {
    ScoringConfig { min_turn_variance: -1.0, ..ScoringConfig::default() }
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn hand_drawn_circle_scores_at_least_ninety() {
    let result = score(&hand_drawn_circle(), &ScoringConfig::default());
    assert!(result.valid);
    assert_eq!(result.tier, FeedbackTier::Scored);
    let value = result.score.unwrap();
    assert!(value >= 90.0, "score = {value}");
    let circle = result.circle.unwrap();
    assert!((circle.center.x - 300.0).abs() <= 3.0);
    assert!((circle.center.y - 300.0).abs() <= 3.0);
    assert!((circle.radius - 150.0).abs() <= 3.0);
}

#[test]
fn exact_circle_scores_one_hundred_without_lower_variance_bound() {
    let result = score(&exact_circle(), &no_lower_variance_bound());
    assert_eq!(result.tier, FeedbackTier::Scored);
    assert!((result.score.unwrap() - 100.0).abs() < 1e-6);
    let circle = result.circle.unwrap();
    assert!((circle.center.x - 300.0).abs() < 1e-6);
    assert!((circle.center.y - 300.0).abs() < 1e-6);
    assert!((circle.radius - 150.0).abs() < 1e-6);
}

#[test]
fn exact_circle_is_too_regular_for_default_gate() {
    let result = score(&exact_circle(), &ScoringConfig::default());
    assert!(!result.valid);
    assert_eq!(result.tier, FeedbackTier::Irregular);
}

#[test]
fn tight_cluster_is_rejected_by_length_gate() {
    let pts: Vec<Point> = (0..25_u32)
        .map(|i| pt(100.0 + f64::from(i * 37 % 11) / 2.0, 100.0 + f64::from(i * 53 % 7) * 0.7))
        .collect();
    assert!(path_length(&pts) < 650.0);
    let result = score(&pts, &ScoringConfig::default());
    assert!(!result.valid);
    assert_eq!(result.tier, FeedbackTier::TooShort);
    assert!(result.score.is_none());
    assert!(result.circle.is_none());
}

#[test]
fn long_straight_line_is_irregular() {
    let pts: Vec<Point> = (0..40).map(|i| pt(10.0 + 20.0 * f64::from(i), 50.0)).collect();
    assert_eq!(score(&pts, &ScoringConfig::default()).tier, FeedbackTier::Irregular);
}

#[test]
fn square_is_irregular() {
    let mut pts = Vec::new();
    for k in 0..20 {
        pts.push(pt(10.0 * f64::from(k), 0.0));
    }
    for k in 0..20 {
        pts.push(pt(200.0, 10.0 * f64::from(k)));
    }
    for k in 0..20 {
        pts.push(pt(200.0 - 10.0 * f64::from(k), 200.0));
    }
    for k in 0..20 {
        pts.push(pt(0.0, 200.0 - 10.0 * f64::from(k)));
    }
    pts.push(pt(0.0, 0.0));
    assert!(path_length(&pts) >= 650.0);
    assert_eq!(score(&pts, &ScoringConfig::default()).tier, FeedbackTier::Irregular);
}

#[test]
fn square_corners_are_irregular() {
    let pts = [pt(0.0, 0.0), pt(200.0, 0.0), pt(200.0, 200.0), pt(0.0, 200.0), pt(0.0, 0.0)];
    assert_eq!(score(&pts, &ScoringConfig::default()).tier, FeedbackTier::Irregular);
}

#[test]
fn sparse_circle_has_insufficient_samples() {
    let pts = looped_circle(300.0, 300.0, 150.0, 12, 1.0, &[2.0, -2.0]);
    let result = score(&pts, &ScoringConfig::default());
    assert!(!result.valid);
    assert_eq!(result.tier, FeedbackTier::InsufficientSamples);
}

#[test]
fn collinear_stroke_past_the_gates_is_degenerate() {
    let pts: Vec<Point> = (0..40).map(|i| pt(10.0 + 20.0 * f64::from(i), 50.0)).collect();
    let result = score(&pts, &no_lower_variance_bound());
    assert!(!result.valid);
    assert_eq!(result.tier, FeedbackTier::Degenerate);
    assert!(result.score.is_none());
}

#[test]
fn empty_stroke_is_too_short() {
    assert_eq!(score(&[], &ScoringConfig::default()).tier, FeedbackTier::TooShort);
}

#[test]
fn tiny_loops_get_too_small_radius_tier() {
    let pts = looped_circle(100.0, 100.0, 30.0, 120, 4.0, &[0.1, -0.1]);
    let result = score(&pts, &ScoringConfig::default());
    assert!(result.valid);
    assert_eq!(result.tier, FeedbackTier::TooSmallRadius);
    assert!(result.score.is_some());
    assert!(result.percent_label().is_none());
}

#[test]
fn small_loops_get_small_radius_tier() {
    let pts = looped_circle(100.0, 100.0, 60.0, 120, 2.0, &[0.2, -0.2]);
    let result = score(&pts, &ScoringConfig::default());
    assert!(result.valid);
    assert_eq!(result.tier, FeedbackTier::SmallRadius);
    assert!(result.percent_label().is_none());
}

#[test]
fn score_never_mutates_or_keeps_the_stroke() {
    let pts = hand_drawn_circle();
    let before = pts.clone();
    let first = score(&pts, &ScoringConfig::default());
    let second = score(&pts, &ScoringConfig::default());
    assert_eq!(pts, before);
    assert_eq!(first, second);
}

// =============================================================
// deviation_score / mean_radial_deviation
// =============================================================

#[test]
fn zero_deviation_scores_one_hundred() {
    assert_eq!(deviation_score(0.0, 10.0), 100.0);
}

#[test]
fn deviation_score_is_linear_inside_threshold() {
    assert!((deviation_score(2.5, 10.0) - 75.0).abs() < 1e-12);
    assert!((deviation_score(1.0, 4.0) - 75.0).abs() < 1e-12);
}

#[test]
fn deviation_beyond_threshold_clamps_to_zero() {
    assert_eq!(deviation_score(10.0, 10.0), 0.0);
    assert_eq!(deviation_score(35.0, 10.0), 0.0);
}

#[test]
fn deviation_score_is_monotonic() {
    let mut previous = f64::INFINITY;
    for step in 0..200 {
        let value = deviation_score(f64::from(step) * 0.1, 10.0);
        assert!(value <= previous);
        previous = value;
    }
}

#[test]
fn pushing_a_point_outward_never_raises_the_score() {
    let circle = FittedCircle { center: pt(0.0, 0.0), radius: 100.0 };
    let mut pts = looped_circle(0.0, 0.0, 100.0, 40, 1.0, &[0.0]);
    let mut previous = f64::INFINITY;
    for step in 0..30 {
        pts[5] = pt(100.0 + f64::from(step), 0.0);
        let value = deviation_score(mean_radial_deviation(&pts, &circle), 10.0);
        assert!(value <= previous, "step {step}: {value} > {previous}");
        previous = value;
    }
}

#[test]
fn mean_radial_deviation_of_exact_circle_is_zero() {
    let circle = FittedCircle { center: pt(300.0, 300.0), radius: 150.0 };
    assert!(mean_radial_deviation(&exact_circle(), &circle) < 1e-9);
}

#[test]
fn mean_radial_deviation_averages_absolute_offsets() {
    let circle = FittedCircle { center: pt(0.0, 0.0), radius: 10.0 };
    let pts = [pt(12.0, 0.0), pt(0.0, 9.0), pt(-10.0, 0.0), pt(0.0, -14.0)];
    assert!((mean_radial_deviation(&pts, &circle) - 7.0 / 4.0).abs() < 1e-12);
}

#[test]
fn mean_radial_deviation_of_nothing_is_zero() {
    let circle = FittedCircle { center: pt(0.0, 0.0), radius: 10.0 };
    assert_eq!(mean_radial_deviation(&[], &circle), 0.0);
}

// =============================================================
// FeedbackTier
// =============================================================

#[test]
fn radius_tier_boundaries() {
    let config = ScoringConfig::default();
    assert_eq!(FeedbackTier::for_radius(0.0, &config), FeedbackTier::TooSmallRadius);
    assert_eq!(FeedbackTier::for_radius(49.999, &config), FeedbackTier::TooSmallRadius);
    assert_eq!(FeedbackTier::for_radius(50.0, &config), FeedbackTier::SmallRadius);
    assert_eq!(FeedbackTier::for_radius(99.999, &config), FeedbackTier::SmallRadius);
    assert_eq!(FeedbackTier::for_radius(100.0, &config), FeedbackTier::Scored);
    assert_eq!(FeedbackTier::for_radius(1e6, &config), FeedbackTier::Scored);
}

#[test]
fn radius_tiers_follow_config() {
    let config = ScoringConfig { too_small_radius: 10.0, scored_radius: 20.0, ..ScoringConfig::default() };
    assert_eq!(FeedbackTier::for_radius(15.0, &config), FeedbackTier::SmallRadius);
    assert_eq!(FeedbackTier::for_radius(20.0, &config), FeedbackTier::Scored);
}

#[test]
fn only_radius_tiers_are_valid() {
    assert!(!FeedbackTier::TooShort.is_valid());
    assert!(!FeedbackTier::Irregular.is_valid());
    assert!(!FeedbackTier::InsufficientSamples.is_valid());
    assert!(!FeedbackTier::Degenerate.is_valid());
    assert!(FeedbackTier::TooSmallRadius.is_valid());
    assert!(FeedbackTier::SmallRadius.is_valid());
    assert!(FeedbackTier::Scored.is_valid());
}

#[test]
fn every_tier_has_an_emoji() {
    let tiers = [
        FeedbackTier::TooShort,
        FeedbackTier::Irregular,
        FeedbackTier::InsufficientSamples,
        FeedbackTier::Degenerate,
        FeedbackTier::TooSmallRadius,
        FeedbackTier::SmallRadius,
        FeedbackTier::Scored,
    ];
    for tier in tiers {
        assert!(!tier.emoji().is_empty(), "{tier:?}");
    }
    assert_eq!(FeedbackTier::Irregular.emoji(), "😱");
}

#[test]
fn tier_serializes_kebab_case() {
    let json = serde_json::to_value(FeedbackTier::TooSmallRadius).unwrap();
    assert_eq!(json, serde_json::json!("too-small-radius"));
}

#[test]
fn tier_names_match_serialized_form() {
    let tiers = [
        FeedbackTier::TooShort,
        FeedbackTier::Irregular,
        FeedbackTier::InsufficientSamples,
        FeedbackTier::Degenerate,
        FeedbackTier::TooSmallRadius,
        FeedbackTier::SmallRadius,
        FeedbackTier::Scored,
    ];
    for tier in tiers {
        assert_eq!(serde_json::to_value(tier).unwrap(), serde_json::json!(tier.as_str()));
    }
}

// =============================================================
// ScoreResult
// =============================================================

#[test]
fn percent_label_has_two_decimals() {
    let result = ScoreResult {
        valid: true,
        score: Some(97.254),
        circle: Some(FittedCircle { center: pt(0.0, 0.0), radius: 120.0 }),
        tier: FeedbackTier::Scored,
    };
    assert_eq!(result.percent_label().as_deref(), Some("97.25%"));
}

#[test]
fn percent_label_of_perfect_score() {
    let result = ScoreResult {
        valid: true,
        score: Some(100.0),
        circle: Some(FittedCircle { center: pt(0.0, 0.0), radius: 120.0 }),
        tier: FeedbackTier::Scored,
    };
    assert_eq!(result.percent_label().as_deref(), Some("100.00%"));
}

#[test]
fn rejected_result_has_no_label() {
    assert!(ScoreResult::rejected(FeedbackTier::Irregular).percent_label().is_none());
}

#[test]
fn score_result_serializes_for_the_host() {
    let result = score(&hand_drawn_circle(), &ScoringConfig::default());
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["valid"], serde_json::json!(true));
    assert_eq!(json["tier"], serde_json::json!("scored"));
    assert!(json["circle"]["center"]["x"].is_f64());
    assert!(json["score"].is_f64());
}
