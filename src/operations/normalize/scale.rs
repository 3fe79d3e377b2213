use crate::math::bounds_2d::non_zero_or_one;
use crate::math::{Bounds2, Point2};

/// Scales a point sequence non-uniformly so its bounding box becomes a
/// `size` × `size` square with its minimum corner at the origin.
///
/// A zero width or height is treated as 1, which leaves that axis
/// unscaled instead of dividing by zero.
pub struct ScaleToSquare {
    size: f64,
}

impl ScaleToSquare {
    /// Creates a new `ScaleToSquare` operation.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Executes the scaling, returning the scaled points.
    #[must_use]
    pub fn execute(&self, points: &[Point2]) -> Vec<Point2> {
        let Some(bounds) = Bounds2::from_points(points) else {
            return Vec::new();
        };
        let sx = self.size / non_zero_or_one(bounds.width());
        let sy = self.size / non_zero_or_one(bounds.height());
        points
            .iter()
            .map(|p| Point2::new((p.x - bounds.min.x) * sx, (p.y - bounds.min.y) * sy))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn rectangle_fills_square() {
        let out = ScaleToSquare::new(250.0).execute(&[p(10.0, 10.0), p(60.0, 30.0), p(35.0, 20.0)]);
        let b = Bounds2::from_points(&out).unwrap();
        assert!((b.width() - 250.0).abs() < TOL);
        assert!((b.height() - 250.0).abs() < TOL);
        assert!(b.min.x.abs() < TOL && b.min.y.abs() < TOL);
        // Midpoint stays a midpoint on each axis.
        assert!((out[2].x - 125.0).abs() < TOL && (out[2].y - 125.0).abs() < TOL);
    }

    #[test]
    fn flat_stroke_keeps_zero_height() {
        let out = ScaleToSquare::new(100.0).execute(&[p(0.0, 5.0), p(4.0, 5.0)]);
        assert!((out[1].x - 100.0).abs() < TOL);
        assert!(out[0].y.abs() < TOL && out[1].y.abs() < TOL);
    }

    #[test]
    fn single_point_is_moved_to_origin() {
        let out = ScaleToSquare::new(100.0).execute(&[p(7.0, -3.0)]);
        assert_eq!(out, vec![p(0.0, 0.0)]);
    }
}
