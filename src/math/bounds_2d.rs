use super::Point2;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Bounds2 {
    /// Computes the bounding box of a point sequence.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for pt in rest {
            min.x = min.x.min(pt.x);
            min.y = min.y.min(pt.y);
            max.x = max.x.max(pt.x);
            max.y = max.y.max(pt.y);
        }
        Some(Self { min, max })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Length of the box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }

    /// Width divided by height, with a zero height treated as 1.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width() / non_zero_or_one(self.height())
    }
}

/// Substitutes 1 for an exactly-zero extent so it can be used as a divisor.
#[must_use]
pub fn non_zero_or_one(extent: f64) -> f64 {
    if extent == 0.0 {
        1.0
    } else {
        extent
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_scattered_points() {
        let b = Bounds2::from_points(&[
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(b.min, Point2::new(-2.0, -1.0));
        assert_eq!(b.max, Point2::new(4.0, 5.0));
        assert!((b.width() - 6.0).abs() < 1e-12);
        assert!((b.height() - 6.0).abs() < 1e-12);
        assert!((b.aspect_ratio() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_has_no_bounds() {
        assert!(Bounds2::from_points(&[]).is_none());
    }

    #[test]
    fn flat_box_aspect_uses_unit_height() {
        let b = Bounds2::from_points(&[Point2::new(0.0, 2.0), Point2::new(8.0, 2.0)]).unwrap();
        assert!((b.aspect_ratio() - 8.0).abs() < 1e-12);
    }
}
