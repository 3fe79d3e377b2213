mod resample;
mod rotate;
mod scale;
mod translate;

pub use resample::Resample;
pub use rotate::{indicative_angle, RotateBy};
pub use scale::ScaleToSquare;
pub use translate::TranslateTo;

use crate::config::RecognizerConfig;
use crate::geometry::NormalizedStroke;
use crate::math::Point2;

/// Runs the full normalization pipeline: resample, rotate to indicative
/// angle zero, scale into the square, translate the centroid to the origin.
///
/// The order is fixed. Rotation assumes evenly resampled points, and the
/// final translation assumes the scale has already been applied.
#[derive(Debug, Clone, Copy)]
pub struct Normalize {
    count: usize,
    square_size: f64,
    origin: Point2,
}

impl Normalize {
    /// Creates a new `Normalize` operation.
    #[must_use]
    pub fn new(count: usize, square_size: f64, origin: Point2) -> Self {
        Self {
            count,
            square_size,
            origin,
        }
    }

    /// Creates the pipeline described by a recognizer configuration.
    #[must_use]
    pub fn from_config(config: &RecognizerConfig) -> Self {
        Self::new(config.resample_points, config.square_size, config.origin)
    }

    /// Executes the pipeline on raw points.
    #[must_use]
    pub fn execute(&self, points: &[Point2]) -> NormalizedStroke {
        let resampled = Resample::new(self.count).execute(points);
        let rotated = RotateBy::to_zero(&resampled).execute(&resampled);
        let scaled = ScaleToSquare::new(self.square_size).execute(&rotated);
        let translated = TranslateTo::new(self.origin).execute(&scaled);
        NormalizedStroke::from_points(translated)
    }
}
