use nalgebra::Rotation2;

use crate::math::{centroid, Point2};

/// Returns the angle from the first point to the centroid, in radians.
///
/// Returns 0 for an empty slice.
#[must_use]
pub fn indicative_angle(points: &[Point2]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let c = centroid(points);
    (c.y - first.y).atan2(c.x - first.x)
}

/// Rotates a point sequence about its centroid.
pub struct RotateBy {
    angle: f64,
}

impl RotateBy {
    /// Creates a new `RotateBy` operation.
    ///
    /// * `angle` - Rotation angle in radians, counter-clockwise.
    #[must_use]
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    /// Rotation that brings the indicative angle of `points` to zero.
    #[must_use]
    pub fn to_zero(points: &[Point2]) -> Self {
        Self::new(-indicative_angle(points))
    }

    /// Executes the rotation, returning the rotated points.
    #[must_use]
    pub fn execute(&self, points: &[Point2]) -> Vec<Point2> {
        let c = centroid(points);
        let rot = Rotation2::new(self.angle);
        points.iter().map(|p| c + rot * (p - c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn indicative_angle_of_rightward_segment_is_zero() {
        let a = indicative_angle(&[p(0.0, 0.0), p(2.0, 0.0)]);
        assert!(a.abs() < TOL, "a={a}");
    }

    #[test]
    fn indicative_angle_points_at_centroid() {
        let a = indicative_angle(&[p(0.0, 0.0), p(2.0, 2.0)]);
        assert!((a - FRAC_PI_4).abs() < TOL, "a={a}");
        let a = indicative_angle(&[p(2.0, 0.0), p(0.0, 0.0)]);
        assert!((a.abs() - PI).abs() < TOL, "a={a}");
    }

    #[test]
    fn rotate_quarter_turn_about_centroid() {
        // Segment (0,0)-(2,0) has centroid (1,0); a quarter turn makes it vertical.
        let out = RotateBy::new(FRAC_PI_2).execute(&[p(0.0, 0.0), p(2.0, 0.0)]);
        assert!((out[0].x - 1.0).abs() < TOL && (out[0].y + 1.0).abs() < TOL);
        assert!((out[1].x - 1.0).abs() < TOL && (out[1].y - 1.0).abs() < TOL);
    }

    #[test]
    fn to_zero_aligns_first_point_with_centroid() {
        let pts = [p(3.0, 7.0), p(5.0, 2.0), p(9.0, 4.0), p(4.0, 4.0)];
        let out = RotateBy::to_zero(&pts).execute(&pts);
        let a = indicative_angle(&out);
        assert!(a.abs() < 1e-9, "a={a}");
    }

    #[test]
    fn rotation_keeps_centroid() {
        let pts = [p(3.0, 7.0), p(5.0, 2.0), p(9.0, 4.0)];
        let before = centroid(&pts);
        let after = centroid(&RotateBy::new(1.234).execute(&pts));
        assert!(nalgebra::distance(&before, &after) < TOL);
    }
}
