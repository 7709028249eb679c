//! Stroke sampling: thin drawn strokes before scoring.
//!
//! Touch input arrives far denser than the guide samples. Keeping every
//! n-th point bounds the cost of the nearest-neighbor scans and damps
//! jitter. The scoring thresholds were tuned at a decimation of 3.

use crate::types::{Point, Stroke};

/// Flatten `strokes` into one list, keeping every `decimation`-th point
/// of each stroke starting with its first.
///
/// A `decimation` of 0 is treated as 1 (keep everything).
///
/// # Examples
///
/// ```
/// use tracewise_scoring::{Point, Stroke};
/// use tracewise_scoring::sample::sample_strokes;
///
/// let stroke = Stroke::new((0..7_i32).map(|i| Point::new(f64::from(i), 0.0)).collect());
/// let sampled = sample_strokes(&[stroke], 3);
/// let xs: Vec<f64> = sampled.iter().map(|p| p.x).collect();
/// assert_eq!(xs, [0.0, 3.0, 6.0]);
/// ```
#[must_use]
pub fn sample_strokes(strokes: &[Stroke], decimation: usize) -> Vec<Point> {
    let every = decimation.max(1);
    strokes
        .iter()
        .flat_map(|stroke| stroke.points().iter().copied().step_by(every))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(n: u32, y: f64) -> Stroke {
        Stroke::new((0..n).map(|i| Point::new(f64::from(i), y)).collect())
    }

    #[test]
    fn no_strokes_yields_nothing() {
        assert!(sample_strokes(&[], 3).is_empty());
    }

    #[test]
    fn empty_strokes_yield_nothing() {
        assert!(sample_strokes(&[Stroke::default(), Stroke::default()], 3).is_empty());
    }

    #[test]
    fn short_stroke_keeps_first_point() {
        let sampled = sample_strokes(&[stroke(2, 0.0)], 3);
        assert_eq!(sampled, vec![Point::new(0.0, 0.0)]);
    }

    #[test]
    fn decimation_restarts_per_stroke() {
        // 4 points → indices 0, 3; 5 points → indices 0, 3.
        let sampled = sample_strokes(&[stroke(4, 0.0), stroke(5, 1.0)], 3);
        assert_eq!(
            sampled,
            vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(3.0, 1.0),
            ]
        );
    }

    #[test]
    fn zero_decimation_keeps_every_point() {
        assert_eq!(sample_strokes(&[stroke(5, 0.0)], 0).len(), 5);
        assert_eq!(sample_strokes(&[stroke(5, 0.0)], 1).len(), 5);
    }
}
