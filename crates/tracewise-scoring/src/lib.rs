//! tracewise-scoring: Accuracy scoring for tracing therapy exercises (sans-IO).
//!
//! A learner traces a guide path (a letter, digit or shape) with one or
//! more freehand strokes, or taps numbered dots in order. This crate turns
//! that input into a `0..=100` score:
//!
//! guide waypoints -> dense guide -> stroke sampling ->
//! proximity / coverage / stray -> hard gates -> blended score.
//!
//! It has **no I/O dependencies** and never reads the wall clock directly.
//! Rendering, persistence and input capture live in callers.

pub mod accuracy;
pub mod attempt;
pub mod catalog;
pub mod clock;
pub mod dots;
pub mod expand;
pub mod feedback;
pub mod sample;
pub mod types;

pub use accuracy::{Gate, ScoreBreakdown, analyze, score_drawing, score_drawing_dense};
pub use attempt::TracingAttempt;
pub use catalog::{DotPatternKind, ExerciseId, ShapeKind};
pub use clock::{Clock, ManualClock, SystemClock};
pub use dots::{DotRules, DotSequence, DotState, TapOutcome, dot_score};
pub use expand::expand_guide;
pub use feedback::FeedbackTier;
pub use sample::sample_strokes;
pub use types::{
    BoundingBox, DenseGuide, Dimensions, Guide, Point, ScoreResult, ScoringConfig, ScoringError,
    Stroke,
};
