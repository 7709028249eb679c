//! Shared types for the tracewise scoring engine.

use serde::{Deserialize, Serialize};

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (units from left edge).
    pub x: f64,
    /// Vertical position (units from top edge).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// One continuous pen-down to pen-up gesture.
///
/// Points are in the order they were captured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke(Vec<Point>);

impl Stroke {
    /// Create a stroke from captured points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the stroke has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the stroke.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the stroke and returns the underlying points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

/// Sparse reference waypoints for a letter, digit, or shape outline.
///
/// Expanded into a [`DenseGuide`] by [`expand_guide`](crate::expand::expand_guide)
/// before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guide(Vec<Point>);

impl Guide {
    /// Create a guide from waypoints.
    #[must_use]
    pub const fn new(waypoints: Vec<Point>) -> Self {
        Self(waypoints)
    }

    /// Build a guide from `(x, y)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self(pairs.iter().copied().map(Point::from).collect())
    }

    /// Returns the number of waypoints.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the guide has no waypoints.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a slice of all waypoints.
    #[must_use]
    pub fn waypoints(&self) -> &[Point] {
        &self.0
    }
}

/// A guide interpolated to evenly spaced samples.
///
/// Nearest-sample distance over these points stands in for true
/// point-to-segment distance. Depends only on the sparse guide and the
/// step, so one instance can be reused for every attempt at the same
/// exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseGuide {
    points: Vec<Point>,
    step: f64,
}

impl DenseGuide {
    /// Wrap already-dense points sampled at `step` units.
    #[must_use]
    pub const fn new(points: Vec<Point>, step: f64) -> Self {
        Self { points, step }
    }

    /// The dense sample points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The sampling step this guide was expanded with.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of dense points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no dense points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A guide needs at least two samples to describe a path.
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Axis-aligned bounds of the dense points, or `None` when empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of(&self.points)
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Smallest x coordinate.
    pub min_x: f64,
    /// Smallest y coordinate.
    pub min_y: f64,
    /// Largest x coordinate.
    pub max_x: f64,
    /// Largest y coordinate.
    pub max_y: f64,
}

impl BoundingBox {
    /// Bounds of `points`, or `None` if the slice is empty.
    #[must_use]
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points[1..].iter().fold(init, |bb, p| Self {
            min_x: bb.min_x.min(p.x),
            min_y: bb.min_y.min(p.y),
            max_x: bb.max_x.max(p.x),
            max_y: bb.max_y.max(p.y),
        }))
    }

    /// Grow the box by `amount` on every side.
    #[must_use]
    pub fn padded(self, amount: f64) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    /// Whether `p` lies inside the box (edges inclusive).
    #[must_use]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Canvas dimensions shared by guides and drawn input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in canvas units.
    pub width: f64,
    /// Height in canvas units.
    pub height: f64,
}

impl Dimensions {
    /// The canvas size all built-in exercises are laid out on.
    pub const CANVAS: Self = Self {
        width: 420.0,
        height: 330.0,
    };
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::CANVAS
    }
}

/// Outcome of one completed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Accuracy in `0..=100` (`30..=100` for dot patterns).
    pub score: u8,
    /// Whole seconds between attempt start and completion.
    pub duration_secs: u64,
}

/// Tunable parameters of the accuracy scorer.
///
/// The thresholds were calibrated on the 420x330 canvas with the default
/// decimation factors. Use [`scaled`](Self::scaled) when scoring on a
/// canvas of a different resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Spacing between dense guide samples.
    pub guide_step: f64,

    /// Keep every n-th point of each drawn stroke.
    pub stroke_decimation: usize,

    /// Check every n-th dense guide point for coverage.
    pub guide_decimation: usize,

    /// Drawn points at most this far from the guide earn full credit.
    pub on_track_radius: f64,

    /// Drawn points beyond this distance earn no credit. Credit decays
    /// linearly between `on_track_radius` and here.
    pub far_away_radius: f64,

    /// A guide sample counts as covered when a drawn point lies within
    /// `on_track_radius + coverage_margin`.
    pub coverage_margin: f64,

    /// Padding added around the guide bounds before a drawn point is
    /// considered stray.
    pub bbox_padding: f64,

    /// Proximity (0-100) below which the score is capped.
    pub min_proximity: f64,

    /// Coverage fraction (0-1) below which the score is capped.
    pub min_coverage: f64,

    /// Stray fraction (0-1) above which the score is capped.
    pub max_stray_ratio: f64,

    /// Ceiling applied when any gate triggers.
    pub gate_cap: f64,

    /// Blend weight of the proximity component.
    pub proximity_weight: f64,

    /// Blend weight of the coverage component.
    pub coverage_weight: f64,

    /// Blend weight of the stray component.
    pub stray_weight: f64,
}

impl ScoringConfig {
    /// Default dense guide step.
    pub const DEFAULT_GUIDE_STEP: f64 = 4.0;
    /// Smallest guide step [`validate`](Self::validate) accepts.
    pub const MIN_GUIDE_STEP: f64 = 0.01;
    /// Default stroke decimation.
    pub const DEFAULT_STROKE_DECIMATION: usize = 3;
    /// Default guide decimation for coverage.
    pub const DEFAULT_GUIDE_DECIMATION: usize = 3;
    /// Default on-track radius.
    pub const DEFAULT_ON_TRACK_RADIUS: f64 = 18.0;
    /// Default far-away radius.
    pub const DEFAULT_FAR_AWAY_RADIUS: f64 = 40.0;
    /// Default coverage margin.
    pub const DEFAULT_COVERAGE_MARGIN: f64 = 10.0;
    /// Default bounding box padding.
    pub const DEFAULT_BBOX_PADDING: f64 = 28.0;
    /// Default proximity gate.
    pub const DEFAULT_MIN_PROXIMITY: f64 = 45.0;
    /// Default coverage gate.
    pub const DEFAULT_MIN_COVERAGE: f64 = 0.65;
    /// Default stray gate.
    pub const DEFAULT_MAX_STRAY_RATIO: f64 = 0.20;
    /// Default gated ceiling.
    pub const DEFAULT_GATE_CAP: f64 = 40.0;
    /// Default proximity weight.
    pub const DEFAULT_PROXIMITY_WEIGHT: f64 = 0.50;
    /// Default coverage weight.
    pub const DEFAULT_COVERAGE_WEIGHT: f64 = 0.35;
    /// Default stray weight.
    pub const DEFAULT_STRAY_WEIGHT: f64 = 0.15;

    /// Radius within which a drawn point covers a guide sample.
    #[must_use]
    pub fn coverage_radius(&self) -> f64 {
        self.on_track_radius + self.coverage_margin
    }

    /// Scale every distance threshold by `factor`.
    ///
    /// Ratios, weights, and decimation are resolution independent and are
    /// left untouched.
    ///
    /// ```
    /// use tracewise_scoring::ScoringConfig;
    ///
    /// let half = ScoringConfig::default().scaled(0.5);
    /// assert!((half.on_track_radius - 9.0).abs() < 1e-12);
    /// assert!((half.min_coverage - 0.65).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            guide_step: self.guide_step * factor,
            on_track_radius: self.on_track_radius * factor,
            far_away_radius: self.far_away_radius * factor,
            coverage_margin: self.coverage_margin * factor,
            bbox_padding: self.bbox_padding * factor,
            ..self.clone()
        }
    }

    /// Check the invariants the scorer relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidConfig`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let invalid = |msg: String| Err(ScoringError::InvalidConfig(msg));

        if !(self.guide_step.is_finite() && self.guide_step >= Self::MIN_GUIDE_STEP) {
            return invalid(format!(
                "guide_step must be at least {}, got {}",
                Self::MIN_GUIDE_STEP,
                self.guide_step
            ));
        }
        if self.stroke_decimation == 0 {
            return invalid("stroke_decimation must be at least 1".to_string());
        }
        if self.guide_decimation == 0 {
            return invalid("guide_decimation must be at least 1".to_string());
        }
        for (name, value) in [
            ("on_track_radius", self.on_track_radius),
            ("coverage_margin", self.coverage_margin),
            ("bbox_padding", self.bbox_padding),
            ("proximity_weight", self.proximity_weight),
            ("coverage_weight", self.coverage_weight),
            ("stray_weight", self.stray_weight),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return invalid(format!("{name} must be non-negative, got {value}"));
            }
        }
        if self.far_away_radius <= self.on_track_radius {
            return invalid(format!(
                "far_away_radius ({}) must exceed on_track_radius ({})",
                self.far_away_radius, self.on_track_radius,
            ));
        }
        for (name, value) in [
            ("min_coverage", self.min_coverage),
            ("max_stray_ratio", self.max_stray_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return invalid(format!("{name} must be within 0..=1, got {value}"));
            }
        }
        if !(0.0..=100.0).contains(&self.min_proximity) {
            return invalid(format!(
                "min_proximity must be within 0..=100, got {}",
                self.min_proximity
            ));
        }
        if !(0.0..=100.0).contains(&self.gate_cap) {
            return invalid(format!("gate_cap must be within 0..=100, got {}", self.gate_cap));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            guide_step: Self::DEFAULT_GUIDE_STEP,
            stroke_decimation: Self::DEFAULT_STROKE_DECIMATION,
            guide_decimation: Self::DEFAULT_GUIDE_DECIMATION,
            on_track_radius: Self::DEFAULT_ON_TRACK_RADIUS,
            far_away_radius: Self::DEFAULT_FAR_AWAY_RADIUS,
            coverage_margin: Self::DEFAULT_COVERAGE_MARGIN,
            bbox_padding: Self::DEFAULT_BBOX_PADDING,
            min_proximity: Self::DEFAULT_MIN_PROXIMITY,
            min_coverage: Self::DEFAULT_MIN_COVERAGE,
            max_stray_ratio: Self::DEFAULT_MAX_STRAY_RATIO,
            gate_cap: Self::DEFAULT_GATE_CAP,
            proximity_weight: Self::DEFAULT_PROXIMITY_WEIGHT,
            coverage_weight: Self::DEFAULT_COVERAGE_WEIGHT,
            stray_weight: Self::DEFAULT_STRAY_WEIGHT,
        }
    }
}

/// Errors raised by configuration and exercise lookup.
///
/// Scoring itself never fails: degenerate input scores 0.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// A configuration value violates an invariant.
    #[error("invalid scoring configuration: {0}")]
    InvalidConfig(String),

    /// An exercise id did not parse or does not exist.
    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    /// A tracing exercise was used where a dot pattern is required.
    #[error("exercise {0} is not a dot pattern")]
    NotADotPattern(String),

    /// A dot pattern was used where a tracing guide is required.
    #[error("exercise {0} has no tracing guide")]
    NotATracingExercise(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- Point tests ---

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_squared(b) - 25.0).abs() < f64::EPSILON);
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn point_from_tuple() {
        assert_eq!(Point::from((1.5, -2.0)), Point::new(1.5, -2.0));
    }

    // --- Stroke / Guide serde ---

    #[test]
    fn stroke_serializes_as_plain_array() {
        let stroke = Stroke::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        let json = serde_json::to_string(&stroke).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":2.0},{"x":3.0,"y":4.0}]"#);
        let back: Stroke = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stroke);
    }

    #[test]
    fn guide_from_pairs() {
        let guide = Guide::from_pairs(&[(0.0, 0.0), (10.0, 5.0)]);
        assert_eq!(guide.len(), 2);
        assert_eq!(guide.waypoints()[1], Point::new(10.0, 5.0));
    }

    // --- BoundingBox ---

    #[test]
    fn bounding_box_of_empty_is_none() {
        assert!(BoundingBox::of(&[]).is_none());
    }

    #[test]
    fn bounding_box_spans_points() {
        let bb = BoundingBox::of(&[
            Point::new(5.0, 1.0),
            Point::new(-2.0, 8.0),
            Point::new(3.0, -4.0),
        ])
        .unwrap();
        assert_eq!(
            bb,
            BoundingBox {
                min_x: -2.0,
                min_y: -4.0,
                max_x: 5.0,
                max_y: 8.0,
            }
        );
    }

    #[test]
    fn padded_box_contains_edges() {
        let bb = BoundingBox::of(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)])
            .unwrap()
            .padded(5.0);
        assert!(bb.contains(Point::new(-5.0, 15.0)));
        assert!(!bb.contains(Point::new(-5.1, 0.0)));
        assert!(!bb.contains(Point::new(0.0, 15.1)));
    }

    // --- ScoringConfig ---

    #[test]
    fn default_config_is_valid() {
        ScoringConfig::default().validate().unwrap();
    }

    #[test]
    fn default_coverage_radius_is_28() {
        assert!((ScoringConfig::default().coverage_radius() - 28.0).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_zero_step() {
        let config = ScoringConfig {
            guide_step: 0.0,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScoringError::InvalidConfig(ref msg)) if msg.contains("guide_step")
        ));
    }

    #[test]
    fn validate_rejects_vanishing_step() {
        let config = ScoringConfig {
            guide_step: 1e-9,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
        let config = ScoringConfig {
            guide_step: ScoringConfig::MIN_GUIDE_STEP,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_decimation() {
        let config = ScoringConfig {
            stroke_decimation: 0,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
        let config = ScoringConfig {
            guide_decimation: 0,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_radii() {
        let config = ScoringConfig {
            far_away_radius: 18.0,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScoringError::InvalidConfig(ref msg)) if msg.contains("far_away_radius")
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_ratios() {
        let config = ScoringConfig {
            min_coverage: 1.5,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
        let config = ScoringConfig {
            max_stray_ratio: -0.1,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
        let config = ScoringConfig {
            gate_cap: 120.0,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let config = ScoringConfig {
            coverage_weight: -0.35,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScoringError::InvalidConfig(ref msg)) if msg.contains("coverage_weight")
        ));
    }

    #[test]
    fn scaled_config_stays_valid() {
        let config = ScoringConfig::default().scaled(2.0);
        config.validate().unwrap();
        assert!((config.far_away_radius - 80.0).abs() < f64::EPSILON);
        assert!((config.bbox_padding - 56.0).abs() < f64::EPSILON);
        assert_eq!(config.stroke_decimation, 3);
    }

    #[test]
    fn config_partial_json_fills_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"on_track_radius": 12.0}"#).unwrap();
        assert!((config.on_track_radius - 12.0).abs() < f64::EPSILON);
        assert_eq!(config.guide_decimation, ScoringConfig::DEFAULT_GUIDE_DECIMATION);
    }
}
