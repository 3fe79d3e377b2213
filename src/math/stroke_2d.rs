use super::{Point2, Vector2};

/// Returns the arithmetic mean of the points.
///
/// Callers are expected to pass a non-empty slice; an empty slice yields the
/// origin instead of a NaN point.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / points.len() as f64)
}

/// Returns the sum of Euclidean distances between consecutive points.
///
/// A single point (or an empty slice) has zero length.
#[must_use]
pub fn path_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| nalgebra::distance(&w[0], &w[1]))
        .sum()
}

/// Returns the mean of index-aligned Euclidean distances between `a` and `b`.
///
/// This is not a curve distance: point `i` of `a` is only ever compared with
/// point `i` of `b`, so both sequences must share the same parameterization.
/// The two sequences must have equal lengths.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_pointwise_distance(a: &[Point2], b: &[Point2]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "pointwise distance needs equal lengths");
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let total: f64 = a
        .iter()
        .zip(b)
        .map(|(p, q)| nalgebra::distance(p, q))
        .sum();
    total / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn centroid_of_square_corners() {
        let c = centroid(&[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]);
        assert!((c.x - 1.0).abs() < TOL && (c.y - 1.0).abs() < TOL, "c={c}");
    }

    #[test]
    fn centroid_counts_duplicates() {
        // Duplicates are not collapsed, so they pull the mean.
        let c = centroid(&[p(0.0, 0.0), p(0.0, 0.0), p(3.0, 0.0)]);
        assert!((c.x - 1.0).abs() < TOL, "c={c}");
    }

    #[test]
    fn centroid_of_empty_is_origin() {
        assert_eq!(centroid(&[]), Point2::origin());
    }

    #[test]
    fn path_length_sums_segments() {
        let len = path_length(&[p(0.0, 0.0), p(3.0, 4.0), p(3.0, 10.0)]);
        assert!((len - 11.0).abs() < TOL, "len={len}");
    }

    #[test]
    fn path_length_single_point_is_zero() {
        assert!(path_length(&[p(5.0, 5.0)]).abs() < TOL);
    }

    #[test]
    fn pointwise_distance_is_index_aligned() {
        let a = [p(0.0, 0.0), p(1.0, 0.0)];
        let b = [p(1.0, 0.0), p(0.0, 0.0)];
        // Same point set, reversed order: every pair is 1 apart.
        let d = mean_pointwise_distance(&a, &b);
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn pointwise_distance_of_identical_is_zero() {
        let a = [p(1.0, 2.0), p(3.0, 4.0), p(-1.0, 0.5)];
        assert!(mean_pointwise_distance(&a, &a).abs() < TOL);
    }
}
