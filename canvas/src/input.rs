//! Input model: pointer samples, the stroke buffer, and the gesture state machine.
//!
//! `Sample` is one pointer position with its capture time. `Stroke` is the
//! append-only buffer of samples for the gesture in progress. `GestureState`
//! tracks where the player is in a round: idle, drawing, or looking at the
//! evaluation of their last stroke.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BRUSH_WIDTH, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};
use crate::geom::Point;
use crate::score::ScoreResult;

/// A pointer position captured during a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Position in canvas pixels.
    #[serde(flatten)]
    pub point: Point,
    /// Capture time in milliseconds (the DOM event's `timeStamp`).
    #[serde(default, rename = "t")]
    pub time_ms: f64,
}

impl Sample {
    #[must_use]
    pub fn new(x: f64, y: f64, time_ms: f64) -> Self {
        Self { point: Point::new(x, y), time_ms }
    }
}

/// The samples of one continuous pointer-down to pointer-up gesture.
#[derive(Debug, Clone, Default)]
pub struct Stroke {
    samples: Vec<Sample>,
    points: Vec<Point>,
}

impl Stroke {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample; insertion order is capture order.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
        self.points.push(sample.point);
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.points.clear();
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Positions only, in capture order. This is what the scorer consumes.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn last(&self) -> Option<Sample> {
        self.samples.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// One drawn piece of the stroke, kept so the scene can be redrawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    /// Brush width in CSS pixels.
    pub width: f64,
}

/// Pen width for the segment `from -> to`, thinner the faster the pointer moves.
///
/// Speed is measured in pixels per millisecond. A non-positive time delta
/// (coalesced or out-of-order events) falls back to the default width.
#[must_use]
pub fn brush_width(from: Sample, to: Sample) -> f64 {
    let dt = to.time_ms - from.time_ms;
    if dt <= 0.0 || !dt.is_finite() {
        return DEFAULT_BRUSH_WIDTH;
    }
    let speed = from.point.distance_to(to.point) / dt;
    (MAX_BRUSH_WIDTH - speed).clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH)
}

/// Where the player is in the current round.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// Waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer is down and samples are being collected.
    Drawing {
        /// Most recent sample, used for segment drawing and brush speed.
        last: Sample,
    },
    /// The stroke was released and scored.
    Evaluated(ScoreResult),
}

impl GestureState {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}
