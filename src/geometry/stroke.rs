use crate::error::{Result, StrokeError};
use crate::math::{Point2, Vector2};

/// The ordered points of one continuous pointer gesture, from press to release.
///
/// A `Stroke` is never empty and every coordinate is finite. Consecutive
/// duplicates are kept as captured.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point2>,
}

impl Stroke {
    /// Creates a stroke from points listed in temporal order.
    ///
    /// # Errors
    ///
    /// Returns `StrokeError::Empty` if there are no points and
    /// `StrokeError::NonFinite` if any coordinate is NaN or infinite.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.is_empty() {
            return Err(StrokeError::Empty.into());
        }
        if let Some((index, pt)) = points
            .iter()
            .enumerate()
            .find(|(_, pt)| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(StrokeError::NonFinite {
                index,
                x: pt.x,
                y: pt.y,
            }
            .into());
        }
        Ok(Self { points })
    }

    /// Creates a stroke from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Stroke::new`].
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Point2 {
        self.points[0]
    }

    #[must_use]
    pub fn last(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Vector from the first to the last point.
    #[must_use]
    pub fn displacement(&self) -> Vector2 {
        self.last() - self.first()
    }
}

/// A stroke resampled to a fixed point count, rotated to indicative angle
/// zero, scaled into the normalization square and centred on the target
/// origin. Two normalized strokes of the same length compare point by point.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStroke {
    points: Vec<Point2>,
}

impl NormalizedStroke {
    pub(crate) fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
