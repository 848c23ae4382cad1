//! Synthetic strokes for trying out thresholds without a browser.
//!
//! Samples are spread evenly over `loops` turns of a circle, one per display
//! frame, with the radius of each perturbed by uniform jitter.

#[cfg(test)]
#[path = "synth_test.rs"]
mod synth_test;

use std::f64::consts::TAU;

use canvas::input::Sample;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Spacing between generated samples, one 60 Hz frame.
const FRAME_MS: f64 = 16.0;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SynthParams {
    /// Center x in pixels.
    #[arg(long, default_value_t = 300.0)]
    pub cx: f64,
    /// Center y in pixels.
    #[arg(long, default_value_t = 300.0)]
    pub cy: f64,
    #[arg(long, default_value_t = 150.0)]
    pub radius: f64,
    /// Number of samples.
    #[arg(long, default_value_t = 100)]
    pub points: usize,
    /// Maximum radial jitter in pixels, applied uniformly in `[-jitter, jitter]`.
    #[arg(long, default_value_t = 2.0)]
    pub jitter: f64,
    /// Turns around the circle.
    #[arg(long, default_value_t = 1.0)]
    pub loops: f64,
    /// Seed for reproducible jitter. Omit for a fresh stroke each run.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self { cx: 300.0, cy: 300.0, radius: 150.0, points: 100, jitter: 2.0, loops: 1.0, seed: None }
    }
}

/// Generate a stroke from `params`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate(params: &SynthParams) -> Vec<Sample> {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let jitter = params.jitter.abs();
    let n = params.points as f64;

    (0..params.points)
        .map(|i| {
            let t = TAU * params.loops * i as f64 / n;
            let offset = if jitter > 0.0 { rng.random_range(-jitter..=jitter) } else { 0.0 };
            let r = params.radius + offset;
            Sample::new(params.cx + r * t.cos(), params.cy + r * t.sin(), i as f64 * FRAME_MS)
        })
        .collect()
}
