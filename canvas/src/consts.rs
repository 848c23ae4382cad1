//! Shared numeric constants for the canvas crate.

// ── Scoring defaults ────────────────────────────────────────────

/// Fewest samples a stroke needs before a fit is attempted.
pub const DEFAULT_MIN_SAMPLES: usize = 20;

/// Minimum stroke length in pixels for an attempt to count.
pub const DEFAULT_MIN_PATH_LENGTH: f64 = 650.0;

/// Turn-angle variance (degrees²) at or below which a stroke is too regular
/// to be a hand-drawn circle (straight lines, polygons).
pub const DEFAULT_MIN_TURN_VARIANCE: f64 = 5.0;

/// Turn-angle variance (degrees²) at or above which a stroke is a scribble.
pub const DEFAULT_MAX_TURN_VARIANCE: f64 = 100.0;

/// Mean radial deviation in pixels that costs the full 100 points.
pub const DEFAULT_DEVIATION_THRESHOLD: f64 = 10.0;

/// Fitted radii below this get the "too small" reaction only.
pub const DEFAULT_TOO_SMALL_RADIUS: f64 = 50.0;

/// Fitted radii at or above this surface the numeric score.
pub const DEFAULT_SCORED_RADIUS: f64 = 100.0;

// ── Geometry ────────────────────────────────────────────────────

/// Vectors shorter than this contribute no turn angle.
pub const MIN_TURN_VECTOR_LEN: f64 = 0.01;

/// Relative pivot magnitude below which the normal equations are singular.
pub const SINGULAR_PIVOT_EPS: f64 = 1e-12;

// ── Brush ───────────────────────────────────────────────────────

/// Brush width used for the first segment of a stroke.
pub const DEFAULT_BRUSH_WIDTH: f64 = 5.0;

/// Thinnest brush width, reached when drawing fast.
pub const MIN_BRUSH_WIDTH: f64 = 1.0;

/// Thickest brush width, reached when drawing slowly.
pub const MAX_BRUSH_WIDTH: f64 = 10.0;

// ── Rendering ───────────────────────────────────────────────────

/// Stroke color for the user's drawing.
pub const STROKE_COLOR: &str = "black";

/// Overlay color for the fitted ideal circle.
pub const OVERLAY_COLOR: &str = "rgba(255, 0, 0, 0.5)";

/// Score label color.
pub const SCORE_COLOR: &str = "blue";

/// Score label font.
pub const SCORE_FONT: &str = "20px Arial";

/// Reaction emoji font.
pub const EMOJI_FONT: &str = "48px sans-serif";

/// Gap in pixels between the circle's top edge and the reaction emoji.
pub const EMOJI_OFFSET_PX: f64 = 32.0;

/// Suggested filename for exported drawings.
pub const EXPORT_FILENAME: &str = "circle-drawing.png";
