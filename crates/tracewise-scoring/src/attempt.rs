//! One tracing attempt: collect strokes, then score them.
//!
//! [`TracingAttempt`] holds the state the input layer accumulates while a
//! learner draws: finished strokes, the stroke under the pen, and when the
//! attempt started. The guide is expanded once on construction and reused
//! for every scoring call and every reset.
//!
//! Letter and digit canvases keep every released stroke, so a learner who
//! dots along the guide is still scored. Shape canvases drop single-point
//! strokes. [`TracingAttempt::for_exercise`] picks the rule from the
//! exercise.

use crate::accuracy::{ScoreBreakdown, analyze};
use crate::catalog::ExerciseId;
use crate::clock::{Clock, whole_seconds};
use crate::expand::expand_guide;
use crate::types::{DenseGuide, Guide, Point, ScoreResult, ScoringConfig, ScoringError, Stroke};

/// Default shortest stroke kept on pen-up: every stroke, taps included.
pub const DEFAULT_MIN_STROKE_POINTS: usize = 1;

/// Shortest stroke a shape canvas keeps.
pub const SHAPE_MIN_STROKE_POINTS: usize = 2;

/// An in-progress tracing attempt.
#[derive(Debug)]
pub struct TracingAttempt<C: Clock> {
    guide: DenseGuide,
    config: ScoringConfig,
    clock: C,
    started: C::Instant,
    strokes: Vec<Stroke>,
    current: Option<Vec<Point>>,
    min_stroke_points: usize,
}

impl<C: Clock> TracingAttempt<C> {
    /// Start an attempt at `guide`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidConfig`] if `config` fails
    /// [`ScoringConfig::validate`].
    pub fn new(guide: &Guide, config: ScoringConfig, clock: C) -> Result<Self, ScoringError> {
        config.validate()?;
        let dense = expand_guide(guide, config.guide_step);
        Ok(Self::with_dense_guide(dense, config, clock))
    }

    /// Start an attempt at a built-in tracing exercise, with the stroke
    /// length rule that exercise uses.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::NotATracingExercise`] for dot patterns and
    /// [`ScoringError::InvalidConfig`] if `config` fails validation.
    pub fn for_exercise(
        exercise: ExerciseId,
        config: ScoringConfig,
        clock: C,
    ) -> Result<Self, ScoringError> {
        let guide = exercise.guide()?;
        Ok(Self::new(&guide, config, clock)?.with_min_stroke_points(exercise.min_stroke_points()))
    }

    /// Start an attempt at a guide the caller already expanded.
    ///
    /// `config` is trusted as-is.
    pub fn with_dense_guide(guide: DenseGuide, config: ScoringConfig, clock: C) -> Self {
        let started = clock.now();
        Self {
            guide,
            config,
            clock,
            started,
            strokes: Vec::new(),
            current: None,
            min_stroke_points: DEFAULT_MIN_STROKE_POINTS,
        }
    }

    /// Drop strokes shorter than `points` on pen-up. Values below 1 keep
    /// every stroke.
    #[must_use]
    pub fn with_min_stroke_points(mut self, points: usize) -> Self {
        self.min_stroke_points = points;
        self
    }

    /// Begin a stroke at `p`. An unfinished stroke is committed first.
    pub fn pen_down(&mut self, p: Point) {
        self.pen_up();
        self.current = Some(vec![p]);
    }

    /// Extend the current stroke. Ignored while the pen is up.
    pub fn pen_move(&mut self, p: Point) {
        if let Some(points) = self.current.as_mut() {
            points.push(p);
        }
    }

    /// Finish the current stroke, keeping it only if it meets the
    /// attempt's minimum stroke length.
    pub fn pen_up(&mut self) {
        let Some(points) = self.current.take() else {
            return;
        };
        if points.len() >= self.min_stroke_points {
            self.strokes.push(Stroke::new(points));
        } else {
            tracing::trace!(points = points.len(), "dropped short stroke");
        }
    }

    /// Whether the pen is currently down.
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// Finished strokes in the order they were drawn.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The expanded guide being traced.
    #[must_use]
    pub const fn guide(&self) -> &DenseGuide {
        &self.guide
    }

    /// Scoring happens only once at least one stroke is finished.
    #[must_use]
    pub fn can_finish(&self) -> bool {
        !self.strokes.is_empty()
    }

    /// Score the finished strokes so far.
    #[must_use]
    pub fn breakdown(&self) -> ScoreBreakdown {
        analyze(&self.strokes, &self.guide, &self.config)
    }

    /// Score the attempt and measure its duration.
    ///
    /// Returns `None` before any stroke is finished. The attempt is left
    /// untouched so the caller may keep drawing or [`reset`](Self::reset).
    #[must_use]
    pub fn finish(&self) -> Option<ScoreResult> {
        if !self.can_finish() {
            return None;
        }
        let result = ScoreResult {
            score: self.breakdown().score,
            duration_secs: whole_seconds(self.clock.elapsed(&self.started)),
        };
        tracing::debug!(
            strokes = self.strokes.len(),
            score = result.score,
            duration_secs = result.duration_secs,
            "tracing attempt finished"
        );
        Some(result)
    }

    /// Discard every stroke and restart the timer.
    pub fn reset(&mut self) {
        self.strokes.clear();
        self.current = None;
        self.started = self.clock.now();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clock::ManualClock;

    fn line_guide() -> Guide {
        Guide::from_pairs(&[(100.0, 160.0), (300.0, 160.0)])
    }

    fn draw_line(attempt: &mut TracingAttempt<&ManualClock>, y: f64) {
        attempt.pen_down(Point::new(100.0, y));
        for x in (102_i32..=300).step_by(2) {
            attempt.pen_move(Point::new(f64::from(x), y));
        }
        attempt.pen_up();
    }

    #[test]
    fn invalid_config_is_rejected() {
        let clock = ManualClock::default();
        let config = ScoringConfig {
            stroke_decimation: 0,
            ..ScoringConfig::default()
        };
        assert!(TracingAttempt::new(&line_guide(), config, &clock).is_err());
    }

    #[test]
    fn finish_requires_a_stroke() {
        let clock = ManualClock::default();
        let attempt = TracingAttempt::new(&line_guide(), ScoringConfig::default(), &clock).unwrap();
        assert!(!attempt.can_finish());
        assert!(attempt.finish().is_none());
    }

    #[test]
    fn single_point_strokes_are_dropped_when_required() {
        let clock = ManualClock::default();
        let mut attempt = TracingAttempt::new(&line_guide(), ScoringConfig::default(), &clock)
            .unwrap()
            .with_min_stroke_points(SHAPE_MIN_STROKE_POINTS);
        attempt.pen_down(Point::new(150.0, 160.0));
        assert!(attempt.is_drawing());
        attempt.pen_up();
        assert!(!attempt.is_drawing());
        assert!(attempt.strokes().is_empty());
    }

    #[test]
    fn taps_are_kept_by_default() {
        let clock = ManualClock::default();
        let mut attempt =
            TracingAttempt::new(&line_guide(), ScoringConfig::default(), &clock).unwrap();
        attempt.pen_down(Point::new(150.0, 160.0));
        attempt.pen_up();
        assert_eq!(attempt.strokes().len(), 1);
        assert!(attempt.can_finish());
    }

    #[test]
    fn tapped_letter_is_scored() {
        let clock = ManualClock::default();
        let config = ScoringConfig::default();
        let exercise = ExerciseId::Letter('L');
        let dense = expand_guide(&exercise.guide().unwrap(), config.guide_step);
        let mut attempt = TracingAttempt::for_exercise(exercise, config, &clock).unwrap();

        for p in dense.points().iter().step_by(2) {
            attempt.pen_down(*p);
            attempt.pen_up();
        }

        assert!(!attempt.strokes().is_empty());
        assert!(attempt.finish().unwrap().score > 0);
    }

    #[test]
    fn shape_attempt_drops_taps() {
        let clock = ManualClock::default();
        let mut attempt = TracingAttempt::for_exercise(
            ExerciseId::Shape(crate::catalog::ShapeKind::Circle),
            ScoringConfig::default(),
            &clock,
        )
        .unwrap();
        attempt.pen_down(Point::new(210.0, 50.0));
        attempt.pen_up();
        assert!(attempt.finish().is_none());
    }

    #[test]
    fn dot_pattern_has_no_attempt() {
        let clock = ManualClock::default();
        let exercise = ExerciseId::DotPattern(crate::catalog::DotPatternKind::Fish);
        assert!(matches!(
            TracingAttempt::for_exercise(exercise, ScoringConfig::default(), &clock),
            Err(ScoringError::NotATracingExercise(_))
        ));
    }

    #[test]
    fn moves_without_pen_down_are_ignored() {
        let clock = ManualClock::default();
        let mut attempt =
            TracingAttempt::new(&line_guide(), ScoringConfig::default(), &clock).unwrap();
        attempt.pen_move(Point::new(150.0, 160.0));
        attempt.pen_up();
        assert!(attempt.strokes().is_empty());
    }

    #[test]
    fn pen_down_commits_an_open_stroke() {
        let clock = ManualClock::default();
        let mut attempt =
            TracingAttempt::new(&line_guide(), ScoringConfig::default(), &clock).unwrap();
        attempt.pen_down(Point::new(100.0, 160.0));
        attempt.pen_move(Point::new(110.0, 160.0));
        attempt.pen_down(Point::new(200.0, 160.0));
        assert_eq!(attempt.strokes().len(), 1);
        assert_eq!(attempt.strokes()[0].len(), 2);
    }

    #[test]
    fn accurate_trace_scores_high_with_duration() {
        let clock = ManualClock::default();
        let mut attempt =
            TracingAttempt::new(&line_guide(), ScoringConfig::default(), &clock).unwrap();
        draw_line(&mut attempt, 165.0);
        clock.advance(Duration::from_millis(4_600));

        let result = attempt.finish().unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(result.duration_secs, 5);
    }

    #[test]
    fn reset_clears_strokes_and_timer() {
        let clock = ManualClock::default();
        let mut attempt =
            TracingAttempt::new(&line_guide(), ScoringConfig::default(), &clock).unwrap();
        draw_line(&mut attempt, 160.0);
        clock.advance(Duration::from_secs(30));

        attempt.reset();
        assert!(!attempt.can_finish());

        draw_line(&mut attempt, 160.0);
        clock.advance(Duration::from_secs(2));
        assert_eq!(attempt.finish().unwrap().duration_secs, 2);
    }

    #[test]
    fn guide_is_expanded_once() {
        let clock = ManualClock::default();
        let attempt = TracingAttempt::new(&line_guide(), ScoringConfig::default(), &clock).unwrap();
        // 200-unit segment at step 4 → 50 sub-intervals → 51 points.
        assert_eq!(attempt.guide().len(), 51);
    }

    #[test]
    fn wrong_place_is_capped() {
        let clock = ManualClock::default();
        let mut attempt =
            TracingAttempt::new(&line_guide(), ScoringConfig::default(), &clock).unwrap();
        draw_line(&mut attempt, 300.0);
        let breakdown = attempt.breakdown();
        assert!(breakdown.is_gated());
        assert!(attempt.finish().unwrap().score <= 40);
    }
}
