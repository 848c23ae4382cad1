//! Scoring engine and canvas front end for the circle-drawing game.
//!
//! The player draws one freehand stroke; on release the engine decides
//! whether it was a genuine circle attempt, fits the best circle through it,
//! and reports how closely the stroke followed that circle as a percentage.
//! The crate compiles to WebAssembly for the browser and natively for tests
//! and the command-line harness. The host JavaScript layer only wires DOM
//! pointer events to the engine and reacts to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`input`] | Pointer samples, the stroke buffer, and the gesture state machine |
//! | [`score`] | Gates, deviation score, and feedback tiers |
//! | [`shape`] | Path length and the turn-angle circularity check |
//! | [`fit`] | Algebraic least-squares circle fit |
//! | [`geom`] | Points and fitted circles |
//! | [`config`] | Tunable scoring thresholds |
//! | [`render`] | Stroke, overlay, and feedback drawing; PNG export |
//! | [`consts`] | Shared numeric constants (defaults, brush limits, colors) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod fit;
pub mod geom;
pub mod input;
pub mod render;
pub mod score;
pub mod shape;
