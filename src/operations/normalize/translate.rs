use crate::math::{centroid, Point2};

/// Translates a point sequence so its centroid lands on `target`.
pub struct TranslateTo {
    target: Point2,
}

impl TranslateTo {
    /// Creates a new `TranslateTo` operation.
    #[must_use]
    pub fn new(target: Point2) -> Self {
        Self { target }
    }

    /// Executes the translation, returning the moved points.
    #[must_use]
    pub fn execute(&self, points: &[Point2]) -> Vec<Point2> {
        let offset = self.target - centroid(points);
        points.iter().map(|p| p + offset).collect()
    }
}
