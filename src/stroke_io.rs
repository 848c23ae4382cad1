//! Stroke files: reading recorded strokes and writing synthetic ones.
//!
//! A stroke is a JSON array in capture order. Each element is either a bare
//! `[x, y]` pair or a `{"x": .., "y": .., "t": ..}` sample (`t` optional,
//! milliseconds). Both forms may be mixed.

#[cfg(test)]
#[path = "stroke_io_test.rs"]
mod stroke_io_test;

use std::io::Read;

use canvas::config::{ConfigError, ScoringConfig};
use canvas::engine::{Action, EngineCore};
use canvas::input::Sample;
use canvas::score::{ScoreResult, score};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum StrokeError {
    #[error("failed to read stroke: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid stroke JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSample {
    Pair([f64; 2]),
    Timed(Sample),
}

impl From<RawSample> for Sample {
    fn from(raw: RawSample) -> Self {
        match raw {
            RawSample::Pair([x, y]) => Sample::new(x, y, 0.0),
            RawSample::Timed(sample) => sample,
        }
    }
}

/// Parse a stroke from JSON text.
///
/// # Errors
///
/// Returns [`StrokeError::Json`] if the text is not an array of samples.
pub fn parse_stroke(raw: &str) -> Result<Vec<Sample>, StrokeError> {
    let raw: Vec<RawSample> = serde_json::from_str(raw)?;
    Ok(raw.into_iter().map(Sample::from).collect())
}

/// Read a whole stroke from `reader`.
///
/// # Errors
///
/// Returns [`StrokeError::Io`] on read failure or [`StrokeError::Json`] on bad input.
pub fn read_stroke(mut reader: impl Read) -> Result<Vec<Sample>, StrokeError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_stroke(&raw)
}

/// Serialize a stroke as a JSON array of `{"x", "y", "t"}` objects.
///
/// # Errors
///
/// Returns [`StrokeError::Json`] if serialization fails.
pub fn write_stroke(samples: &[Sample]) -> Result<String, StrokeError> {
    Ok(serde_json::to_string(samples)?)
}

/// Play a recorded stroke through the gesture engine and return its evaluation.
///
/// An empty recording never presses the pointer, so it is scored directly
/// (and rejected as too short).
///
/// # Errors
///
/// Returns the validation error if `config` is unusable.
pub fn replay(samples: &[Sample], config: ScoringConfig) -> Result<ScoreResult, ConfigError> {
    let mut core = EngineCore::with_config(config)?;
    let Some((first, rest)) = samples.split_first() else {
        return Ok(score(&[], &config));
    };

    core.on_pointer_down(*first);
    for sample in rest {
        core.on_pointer_move(*sample);
    }
    let result = core.on_pointer_up().into_iter().find_map(|action| match action {
        Action::ScoreReady(result) => Some(result),
        _ => None,
    });
    debug!(samples = samples.len(), segments = core.segments.len(), "replayed stroke");
    Ok(result.unwrap_or_else(|| score(core.stroke().points(), &config)))
}
