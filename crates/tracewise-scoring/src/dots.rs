//! Dot-connection exercise: tap numbered dots in order.
//!
//! Correctness is a strict sequence: only the next expected dot advances
//! the attempt. Any other dot within reach counts as a wrong tap,
//! including dots that were already connected. The score is a flat
//! penalty per wrong tap with a floor of [`MIN_DOT_SCORE`] so even a
//! struggling learner finishes with something to build on.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, whole_seconds};
use crate::types::{Point, ScoreResult, ScoringError};

/// Lowest score a completed dot pattern can earn.
pub const MIN_DOT_SCORE: u8 = 30;

/// Points deducted per wrong tap.
pub const WRONG_TAP_PENALTY: u8 = 8;

/// How long callers should keep the completed pattern on screen before
/// revealing the result. Cosmetic; the core never waits.
pub const RESULT_REVEAL_DELAY: Duration = Duration::from_millis(600);

/// Score for a completed pattern: `max(30, 100 - 8 * wrong_taps)`.
///
/// ```
/// use tracewise_scoring::dots::dot_score;
///
/// assert_eq!(dot_score(0), 100);
/// assert_eq!(dot_score(1), 92);
/// assert_eq!(dot_score(50), 30);
/// ```
#[must_use]
pub fn dot_score(wrong_taps: u32) -> u8 {
    let penalty = wrong_taps.saturating_mul(u32::from(WRONG_TAP_PENALTY));
    let score = 100_u32.saturating_sub(penalty).max(u32::from(MIN_DOT_SCORE));
    u8::try_from(score).unwrap_or(100)
}

/// Tap matching parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotRules {
    /// A tap must be strictly closer than this to a dot to count.
    pub max_tap_distance: f64,
    /// Repeat taps on the same dot within this window are ignored.
    pub debounce: Duration,
}

impl DotRules {
    /// Default reach of a tap.
    pub const DEFAULT_MAX_TAP_DISTANCE: f64 = 80.0;
    /// Default debounce window.
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
}

impl Default for DotRules {
    fn default() -> Self {
        Self {
            max_tap_distance: Self::DEFAULT_MAX_TAP_DISTANCE,
            debounce: Self::DEFAULT_DEBOUNCE,
        }
    }
}

/// Lifecycle of a dot attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DotState {
    /// Dots remain to be connected.
    InProgress,
    /// Every dot is connected; further taps are ignored until reset.
    Complete,
}

/// What a single tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapOutcome {
    /// No dot within reach.
    Missed,
    /// Same dot as the previous tap, inside the debounce window.
    Debounced {
        /// Index of the dot.
        dot: usize,
    },
    /// The expected dot was connected.
    Connected {
        /// Index of the dot.
        dot: usize,
    },
    /// The final dot was connected and the attempt is scored.
    Completed {
        /// Index of the dot.
        dot: usize,
        /// Score and duration of the attempt.
        result: ScoreResult,
    },
    /// A dot other than the expected one was tapped.
    Wrong {
        /// Index of the dot, for the transient wrong-tap indicator.
        dot: usize,
    },
    /// The attempt was already complete.
    AlreadyComplete,
}

/// Most recent registered tap, for debouncing.
#[derive(Debug, Clone, Copy)]
struct LastTap<I> {
    dot: usize,
    at: I,
}

/// One attempt at a dot pattern.
///
/// Owned by the input-handling path for that attempt; reset it rather
/// than sharing it between attempts.
#[derive(Debug)]
pub struct DotSequence<C: Clock> {
    dots: Vec<Point>,
    rules: DotRules,
    clock: C,
    started: C::Instant,
    connected: Vec<usize>,
    wrong_taps: u32,
    last_tap: Option<LastTap<C::Instant>>,
    result: Option<ScoreResult>,
}

impl<C: Clock> DotSequence<C> {
    /// Start an attempt at `dots` with default rules.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidConfig`] if `dots` is empty.
    pub fn new(dots: Vec<Point>, clock: C) -> Result<Self, ScoringError> {
        Self::with_rules(dots, DotRules::default(), clock)
    }

    /// Start an attempt at `dots` with custom tap rules.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidConfig`] if `dots` is empty or the
    /// tap distance is not positive.
    pub fn with_rules(dots: Vec<Point>, rules: DotRules, clock: C) -> Result<Self, ScoringError> {
        if dots.is_empty() {
            return Err(ScoringError::InvalidConfig(
                "dot pattern needs at least one dot".to_string(),
            ));
        }
        if !(rules.max_tap_distance.is_finite() && rules.max_tap_distance > 0.0) {
            return Err(ScoringError::InvalidConfig(format!(
                "max_tap_distance must be positive, got {}",
                rules.max_tap_distance
            )));
        }
        let started = clock.now();
        Ok(Self {
            connected: Vec::with_capacity(dots.len()),
            dots,
            rules,
            clock,
            started,
            wrong_taps: 0,
            last_tap: None,
            result: None,
        })
    }

    /// Handle a tap (or a drag sample) at `at`.
    pub fn tap(&mut self, at: Point) -> TapOutcome {
        if self.state() == DotState::Complete {
            return TapOutcome::AlreadyComplete;
        }

        let Some(dot) = self.nearest_dot(at) else {
            return TapOutcome::Missed;
        };

        let now = self.clock.now();
        if let Some(last) = self.last_tap
            && last.dot == dot
            && self.clock.elapsed(&last.at) < self.rules.debounce
        {
            return TapOutcome::Debounced { dot };
        }
        self.last_tap = Some(LastTap { dot, at: now });

        if dot != self.next_expected() {
            self.wrong_taps = self.wrong_taps.saturating_add(1);
            tracing::trace!(dot, expected = self.next_expected(), "wrong dot");
            return TapOutcome::Wrong { dot };
        }

        self.connected.push(dot);
        if self.connected.len() < self.dots.len() {
            return TapOutcome::Connected { dot };
        }

        let result = ScoreResult {
            score: dot_score(self.wrong_taps),
            duration_secs: whole_seconds(self.clock.elapsed(&self.started)),
        };
        self.result = Some(result);
        tracing::debug!(
            wrong_taps = self.wrong_taps,
            score = result.score,
            duration_secs = result.duration_secs,
            "dot pattern complete"
        );
        TapOutcome::Completed { dot, result }
    }

    /// Clear all progress and restart the timer. Valid in any state.
    pub fn reset(&mut self) {
        self.connected.clear();
        self.wrong_taps = 0;
        self.last_tap = None;
        self.result = None;
        self.started = self.clock.now();
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DotState {
        if self.connected.len() == self.dots.len() {
            DotState::Complete
        } else {
            DotState::InProgress
        }
    }

    /// Index of the dot that must be tapped next.
    #[must_use]
    pub fn next_expected(&self) -> usize {
        self.connected.len()
    }

    /// Connected dot indices, always `0..next_expected()`.
    #[must_use]
    pub fn connected(&self) -> &[usize] {
        &self.connected
    }

    /// Number of wrong taps so far.
    #[must_use]
    pub const fn wrong_taps(&self) -> u32 {
        self.wrong_taps
    }

    /// Fraction of dots connected (0-1).
    #[must_use]
    pub fn progress(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.connected.len() as f64 / self.dots.len() as f64;
        fraction
    }

    /// The score, once complete.
    #[must_use]
    pub const fn result(&self) -> Option<ScoreResult> {
        self.result
    }

    /// The target dots in required order.
    #[must_use]
    pub fn dots(&self) -> &[Point] {
        &self.dots
    }

    /// Nearest dot strictly within reach of `at`. Ties keep the lower index.
    fn nearest_dot(&self, at: Point) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        let mut limit = self.rules.max_tap_distance;
        for (i, dot) in self.dots.iter().enumerate() {
            let d = dot.distance(at);
            if d < limit {
                limit = d;
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}
