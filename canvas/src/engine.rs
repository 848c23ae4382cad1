use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use tracing::debug;

use crate::config::{ConfigError, ScoringConfig};
use crate::input::{GestureState, Sample, Segment, Stroke, brush_width};
use crate::render;
use crate::score::{ScoreResult, score};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new piece of the stroke; the host may draw it immediately.
    StrokeSegment(Segment),
    /// The stroke was released and evaluated.
    ScoreReady(ScoreResult),
    /// Everything drawn so far should be wiped.
    ClearCanvas,
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: ScoringConfig,
    pub state: GestureState,
    pub stroke: Stroke,
    pub segments: Vec<Segment>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
            state: GestureState::default(),
            stroke: Stroke::new(),
            segments: Vec::new(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that scores with `config`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is unusable.
    pub fn with_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, ..Self::default() })
    }

    /// Replace the scoring thresholds. The current stroke is not re-scored.
    ///
    /// # Errors
    ///
    /// Returns the validation error and keeps the old config if `config` is unusable.
    pub fn set_config(&mut self, config: ScoringConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    // --- Input events ---

    /// Start a new stroke. Ignored while a stroke is already in progress.
    pub fn on_pointer_down(&mut self, sample: Sample) -> Vec<Action> {
        if self.state.is_drawing() {
            return Vec::new();
        }
        self.stroke.clear();
        self.segments.clear();
        self.stroke.push(sample);
        self.state = GestureState::Drawing { last: sample };
        debug!(x = sample.point.x, y = sample.point.y, "gesture: drawing");
        vec![Action::ClearCanvas, Action::RenderNeeded]
    }

    /// Extend the stroke. Ignored unless drawing.
    pub fn on_pointer_move(&mut self, sample: Sample) -> Vec<Action> {
        let GestureState::Drawing { last } = self.state else {
            return Vec::new();
        };
        let segment = Segment { from: last.point, to: sample.point, width: brush_width(last, sample) };
        self.stroke.push(sample);
        self.segments.push(segment);
        self.state = GestureState::Drawing { last: sample };
        vec![Action::StrokeSegment(segment), Action::RenderNeeded]
    }

    /// Finish the stroke and score it. Ignored unless drawing.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if !self.state.is_drawing() {
            return Vec::new();
        }
        let result = score(self.stroke.points(), &self.config);
        self.state = GestureState::Evaluated(result);
        debug!(samples = self.stroke.len(), tier = ?result.tier, "gesture: evaluated");
        vec![Action::ScoreReady(result), Action::RenderNeeded]
    }

    /// Abandon the stroke without scoring (pointer capture lost, touch cancelled).
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        if !self.state.is_drawing() {
            return Vec::new();
        }
        debug!(samples = self.stroke.len(), "gesture: cancelled");
        self.reset();
        vec![Action::ClearCanvas, Action::RenderNeeded]
    }

    /// Wipe the canvas and start over.
    pub fn new_round(&mut self) -> Vec<Action> {
        self.reset();
        debug!("gesture: new round");
        vec![Action::ClearCanvas, Action::RenderNeeded]
    }

    /// Score the current stroke again, e.g. after a config change.
    ///
    /// Returns `None` when there is no stroke. Mid-gesture the result is
    /// returned without leaving the drawing state.
    pub fn rescore(&mut self) -> Option<ScoreResult> {
        if self.stroke.is_empty() {
            return None;
        }
        let result = score(self.stroke.points(), &self.config);
        if !self.state.is_drawing() {
            self.state = GestureState::Evaluated(result);
        }
        Some(result)
    }

    fn reset(&mut self) {
        self.stroke.clear();
        self.segments.clear();
        self.state = GestureState::Idle;
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    #[must_use]
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// The evaluation shown for the current round, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<&ScoreResult> {
        match &self.state {
            GestureState::Evaluated(result) => Some(result),
            _ => None,
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated inputs ---

    /// # Errors
    ///
    /// See [`EngineCore::set_config`].
    pub fn set_config(&mut self, config: ScoringConfig) -> Result<(), ConfigError> {
        self.core.set_config(config)
    }

    /// Parse a JSON config from the host and apply it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed or invalid input.
    pub fn set_config_json(&mut self, raw: &str) -> Result<(), ConfigError> {
        let config = ScoringConfig::from_json(raw)?;
        self.core.set_config(config)
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
    }

    pub fn on_pointer_down(&mut self, sample: Sample) -> Vec<Action> {
        self.core.on_pointer_down(sample)
    }

    pub fn on_pointer_move(&mut self, sample: Sample) -> Vec<Action> {
        self.core.on_pointer_move(sample)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    pub fn new_round(&mut self) -> Vec<Action> {
        self.core.new_round()
    }

    pub fn rescore(&mut self) -> Option<ScoreResult> {
        self.core.rescore()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = context_2d(&self.canvas)?;
        render::draw(
            &ctx,
            &self.core.segments,
            self.core.last_result(),
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    /// Snapshot the canvas as a PNG data URL on a white background.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no document is available or a canvas call fails.
    pub fn export_png(&self) -> Result<String, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let scratch: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        scratch.set_width(self.canvas.width());
        scratch.set_height(self.canvas.height());
        let ctx = context_2d(&scratch)?;
        render::export_onto(&ctx, &self.canvas)?;
        scratch.to_data_url_with_type("image/png")
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn last_result(&self) -> Option<&ScoreResult> {
        self.core.last_result()
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}
