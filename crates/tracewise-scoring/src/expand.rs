//! Guide expansion: interpolate sparse waypoints into dense samples.
//!
//! The accuracy scorer measures distance to a guide by nearest-neighbor
//! search over its samples instead of true point-to-segment distance.
//! That approximation is only as good as the sample spacing, so every
//! segment between waypoints is split into pieces no longer than `step`.

use crate::types::{DenseGuide, Guide, Point};

/// Most sub-intervals a single segment is split into.
pub const MAX_SEGMENT_SUBDIVISIONS: usize = 10_000;

/// Expand `guide` into evenly spaced samples at most `step` units apart.
///
/// Each waypoint pair contributes `ceil(length / step) + 1` points
/// (at least 2), from its first waypoint to its second inclusive. The
/// endpoint shared by consecutive segments therefore appears twice,
/// which does not affect nearest-distance queries. A zero-length
/// segment contributes its point twice. A segment is never split into
/// more than [`MAX_SEGMENT_SUBDIVISIONS`] pieces, so a tiny `step`
/// cannot blow up the allocation.
///
/// Returns an empty guide when `guide` has fewer than 2 waypoints or
/// `step` is not a positive finite number.
///
/// # Examples
///
/// ```
/// use tracewise_scoring::{Guide, Point};
/// use tracewise_scoring::expand::expand_guide;
///
/// let guide = Guide::from_pairs(&[(0.0, 0.0), (10.0, 0.0)]);
/// let dense = expand_guide(&guide, 5.0);
/// // 10-unit segment / 5-unit step → 2 sub-intervals → 3 points
/// assert_eq!(dense.points(), &[
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 0.0),
///     Point::new(10.0, 0.0),
/// ]);
/// ```
#[must_use]
pub fn expand_guide(guide: &Guide, step: f64) -> DenseGuide {
    let waypoints = guide.waypoints();
    if waypoints.len() < 2 || !(step.is_finite() && step > 0.0) {
        return DenseGuide::new(Vec::new(), step);
    }

    let mut points = Vec::with_capacity(waypoints.len() * 2);

    for window in waypoints.windows(2) {
        let a = window[0];
        let b = window[1];

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let n = ((a.distance(b) / step).ceil() as usize).clamp(1, MAX_SEGMENT_SUBDIVISIONS);
        #[allow(clippy::cast_precision_loss)]
        let n_f = n as f64;

        for i in 0..=n {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / n_f;
            let x = (b.x - a.x).mul_add(t, a.x);
            let y = (b.y - a.y).mul_add(t, a.y);
            points.push(Point::new(x, y));
        }
    }

    DenseGuide::new(points, step)
}
