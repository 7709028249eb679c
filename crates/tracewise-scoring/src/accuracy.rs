//! Stroke accuracy scoring against a known guide.
//!
//! A drawing is judged on three components:
//!
//! 1. **Proximity** (0-100): how closely the drawn points hug the guide.
//! 2. **Coverage** (0-100): how much of the guide has a drawn point near it.
//!    Stops a single accurate dab from scoring well on a long guide.
//! 3. **Stray ratio** (0-1): the fraction of drawn points outside the
//!    guide's padded bounding box. Catches drawings made in the wrong place,
//!    such as tracing a different letter.
//!
//! A weighted blend of the three alone lets a wrong shape score moderately
//! when a few of its points happen to land on the guide. Hard gates run
//! first: if proximity, coverage, or stray ratio misses its threshold, the
//! result is capped at [`ScoringConfig::gate_cap`] no matter how high the
//! blend computes. Any score above the cap therefore implies the drawing
//! both followed and covered the guide.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expand::expand_guide;
use crate::sample::sample_strokes;
use crate::types::{DenseGuide, Guide, Point, ScoringConfig, Stroke};

/// A hard threshold whose failure caps the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Proximity fell below [`ScoringConfig::min_proximity`].
    Proximity,
    /// Coverage fell below [`ScoringConfig::min_coverage`].
    Coverage,
    /// Stray ratio exceeded [`ScoringConfig::max_stray_ratio`].
    Stray,
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Proximity => "proximity",
            Self::Coverage => "coverage",
            Self::Stray => "stray",
        })
    }
}

/// Every intermediate value of one accuracy computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Drawn points left after stroke decimation.
    pub sampled_points: usize,
    /// Points in the dense guide.
    pub guide_points: usize,
    /// Proximity component (0-100).
    pub proximity: f64,
    /// Coverage component (0-100).
    pub coverage: f64,
    /// Stray ratio (0-1).
    pub stray_ratio: f64,
    /// Gates that failed, in evaluation order.
    pub failed_gates: Vec<Gate>,
    /// Weighted blend before clamping and rounding.
    pub raw: f64,
    /// Final score (0-100).
    pub score: u8,
}

impl ScoreBreakdown {
    /// Breakdown for input that cannot be scored (no drawing, no guide).
    const fn degenerate(sampled_points: usize, guide_points: usize) -> Self {
        Self {
            sampled_points,
            guide_points,
            proximity: 0.0,
            coverage: 0.0,
            stray_ratio: 0.0,
            failed_gates: Vec::new(),
            raw: 0.0,
            score: 0,
        }
    }

    /// Whether any gate capped the score.
    #[must_use]
    pub fn is_gated(&self) -> bool {
        !self.failed_gates.is_empty()
    }

    /// Format the breakdown as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let gates = if self.failed_gates.is_empty() {
            "none".to_string()
        } else {
            self.failed_gates
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        [
            format!("Accuracy Breakdown\n{}", "=".repeat(40)),
            format!("Sampled drawn points: {}", self.sampled_points),
            format!("Dense guide points:   {}", self.guide_points),
            format!("Proximity:   {:>6.1} / 100", self.proximity),
            format!("Coverage:    {:>6.1} / 100", self.coverage),
            format!("Stray ratio: {:>6.1}%", self.stray_ratio * 100.0),
            format!("Failed gates: {gates}"),
            format!("Raw blend:   {:>6.1}", self.raw),
            format!("Score:       {:>4}", self.score),
        ]
        .join("\n")
    }
}

/// Score `strokes` against a sparse `guide`, expanding it with
/// [`ScoringConfig::guide_step`].
///
/// Returns 0 for an empty drawing or a guide with fewer than 2 waypoints.
#[must_use]
pub fn score_drawing(strokes: &[Stroke], guide: &Guide, config: &ScoringConfig) -> u8 {
    let dense = expand_guide(guide, config.guide_step);
    analyze(strokes, &dense, config).score
}

/// Score `strokes` against a guide that was already expanded.
///
/// Lets callers pay the expansion cost once per exercise.
#[must_use]
pub fn score_drawing_dense(strokes: &[Stroke], guide: &DenseGuide, config: &ScoringConfig) -> u8 {
    analyze(strokes, guide, config).score
}

/// Run the full accuracy computation and keep every intermediate value.
#[must_use]
pub fn analyze(strokes: &[Stroke], guide: &DenseGuide, config: &ScoringConfig) -> ScoreBreakdown {
    let guide_pts = guide.points();
    if strokes.is_empty() || !guide.is_usable() {
        return ScoreBreakdown::degenerate(0, guide_pts.len());
    }

    let drawn = sample_strokes(strokes, config.stroke_decimation);
    if drawn.is_empty() {
        return ScoreBreakdown::degenerate(0, guide_pts.len());
    }

    let proximity = proximity_score(&drawn, guide_pts, config);
    let coverage = coverage_score(&drawn, guide_pts, config);
    let stray = stray_ratio(&drawn, guide, config);

    let mut failed_gates = Vec::new();
    if proximity < config.min_proximity {
        failed_gates.push(Gate::Proximity);
    }
    if coverage / 100.0 < config.min_coverage {
        failed_gates.push(Gate::Coverage);
    }
    if stray > config.max_stray_ratio {
        failed_gates.push(Gate::Stray);
    }

    // The stray term is (1 - stray) on a 0-100 scale times its weight,
    // i.e. (1 - stray) * 15 with the default weight, in both branches.
    let stray_score = (1.0 - stray) * 100.0;
    let raw = config.stray_weight.mul_add(
        stray_score,
        proximity.mul_add(config.proximity_weight, coverage * config.coverage_weight),
    );
    let ceiling = if failed_gates.is_empty() {
        100.0
    } else {
        config.gate_cap
    };
    let score = round_score(raw.max(0.0).min(ceiling));

    tracing::debug!(
        sampled = drawn.len(),
        guide = guide_pts.len(),
        proximity,
        coverage,
        stray,
        ?failed_gates,
        raw,
        score,
        "scored drawing"
    );

    ScoreBreakdown {
        sampled_points: drawn.len(),
        guide_points: guide_pts.len(),
        proximity,
        coverage,
        stray_ratio: stray,
        failed_gates,
        raw,
        score,
    }
}

/// Proximity component (0-100): mean per-point credit times 100.
///
/// A drawn point within [`ScoringConfig::on_track_radius`] of its nearest
/// guide sample earns 1.0; credit decays linearly to 0.0 at
/// [`ScoringConfig::far_away_radius`] and stays 0.0 beyond it.
#[must_use]
pub fn proximity_score(drawn: &[Point], guide: &[Point], config: &ScoringConfig) -> f64 {
    if drawn.is_empty() || guide.is_empty() {
        return 0.0;
    }

    let band = config.far_away_radius - config.on_track_radius;
    let total: f64 = drawn
        .iter()
        .map(|&p| {
            let d = nearest_distance(p, guide);
            if d <= config.on_track_radius {
                1.0
            } else if d <= config.far_away_radius {
                1.0 - (d - config.on_track_radius) / band
            } else {
                0.0
            }
        })
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let mean = total / drawn.len() as f64;
    mean * 100.0
}

/// Coverage component (0-100): the share of every
/// [`ScoringConfig::guide_decimation`]-th guide sample that has a drawn
/// point within [`ScoringConfig::coverage_radius`].
#[must_use]
pub fn coverage_score(drawn: &[Point], guide: &[Point], config: &ScoringConfig) -> f64 {
    let radius_sq = config.coverage_radius().powi(2);
    let (covered, total) = guide
        .iter()
        .step_by(config.guide_decimation.max(1))
        .fold((0_usize, 0_usize), |(covered, total), &g| {
            let hit = drawn.iter().any(|&p| p.distance_squared(g) <= radius_sq);
            (covered + usize::from(hit), total + 1)
        });

    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let share = covered as f64 / total as f64;
    share * 100.0
}

/// Stray ratio (0-1): the fraction of drawn points outside the guide's
/// bounding box padded by [`ScoringConfig::bbox_padding`].
#[must_use]
pub fn stray_ratio(drawn: &[Point], guide: &DenseGuide, config: &ScoringConfig) -> f64 {
    let Some(bounds) = guide.bounding_box() else {
        return 0.0;
    };
    if drawn.is_empty() {
        return 0.0;
    }

    let area = bounds.padded(config.bbox_padding);
    let stray = drawn.iter().filter(|&&p| !area.contains(p)).count();

    #[allow(clippy::cast_precision_loss)]
    let ratio = stray as f64 / drawn.len() as f64;
    ratio
}

/// Distance from `p` to the closest point in `guide` (full scan).
fn nearest_distance(p: Point, guide: &[Point]) -> f64 {
    guide
        .iter()
        .map(|&g| p.distance_squared(g))
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

/// Round a clamped score to the nearest integer, halves up.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_score(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}
