//! Rendering: draws the stroke and the round's feedback to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the stroke segments and the latest
//! [`ScoreResult`] and produces pixels. It does not mutate engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{EMOJI_FONT, EMOJI_OFFSET_PX, OVERLAY_COLOR, SCORE_COLOR, SCORE_FONT, STROKE_COLOR};
use crate::geom::Point;
use crate::input::Segment;
use crate::score::{FeedbackTier, ScoreResult};

/// Overlay line width in CSS pixels.
const OVERLAY_WIDTH: f64 = 2.0;

/// Caption font under the emoji.
const LABEL_FONT: &str = "16px sans-serif";

/// Vertical gap between the emoji and its caption.
const LABEL_GAP_PX: f64 = 36.0;

/// Draw the full scene: stroke first, feedback on top.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    segments: &[Segment],
    result: Option<&ScoreResult>,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    draw_stroke(ctx, segments);

    if let Some(result) = result {
        draw_feedback(ctx, result, viewport_w, viewport_h)?;
    }
    Ok(())
}

/// Paint `source` onto `ctx` over an opaque white background.
///
/// # Errors
///
/// Returns `Err` if the image copy fails.
pub fn export_onto(ctx: &CanvasRenderingContext2d, source: &HtmlCanvasElement) -> Result<(), JsValue> {
    ctx.set_fill_style_str("white");
    ctx.fill_rect(0.0, 0.0, f64::from(source.width()), f64::from(source.height()));
    ctx.draw_image_with_html_canvas_element(source, 0.0, 0.0)
}

// =============================================================
// Stroke
// =============================================================

fn draw_stroke(ctx: &CanvasRenderingContext2d, segments: &[Segment]) {
    ctx.set_stroke_style_str(STROKE_COLOR);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    for seg in segments {
        ctx.set_line_width(seg.width);
        ctx.begin_path();
        ctx.move_to(seg.from.x, seg.from.y);
        ctx.line_to(seg.to.x, seg.to.y);
        ctx.stroke();
    }
}

// =============================================================
// Feedback
// =============================================================

fn draw_feedback(
    ctx: &CanvasRenderingContext2d,
    result: &ScoreResult,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    if let (FeedbackTier::Scored, Some(circle)) = (result.tier, result.circle) {
        ctx.set_stroke_style_str(OVERLAY_COLOR);
        ctx.set_line_width(OVERLAY_WIDTH);
        ctx.begin_path();
        ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU)?;
        ctx.stroke();

        if let Some(text) = result.percent_label() {
            ctx.set_fill_style_str(SCORE_COLOR);
            ctx.set_font(SCORE_FONT);
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            ctx.fill_text(&text, circle.center.x, circle.center.y)?;
        }
    }

    let anchor = emoji_anchor(result, viewport_w, viewport_h);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(EMOJI_FONT);
    ctx.fill_text(result.tier.emoji(), anchor.x, anchor.y)?;

    let label = result.tier.label();
    if !label.is_empty() {
        ctx.set_fill_style_str(STROKE_COLOR);
        ctx.set_font(LABEL_FONT);
        ctx.fill_text(label, anchor.x, anchor.y + LABEL_GAP_PX)?;
    }
    Ok(())
}

/// Where the tier emoji goes: just above a fitted circle, else the viewport center.
///
/// The position is kept at least one offset below the top edge so the emoji
/// stays visible for circles touching the top of the canvas.
#[must_use]
pub fn emoji_anchor(result: &ScoreResult, viewport_w: f64, viewport_h: f64) -> Point {
    match result.circle {
        Some(circle) => Point::new(
            circle.center.x,
            (circle.center.y - circle.radius - EMOJI_OFFSET_PX).max(EMOJI_OFFSET_PX),
        ),
        None => Point::new(viewport_w * 0.5, viewport_h * 0.5),
    }
}
