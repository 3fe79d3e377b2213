use crate::config::CircleThresholds;
use crate::geometry::NormalizedStroke;
use crate::math::bounds_2d::non_zero_or_one;
use crate::math::{centroid, path_length, Bounds2};

/// Shape statistics gathered by [`ClosedCircleTest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleVerdict {
    /// First-to-last gap over the square's diagonal.
    pub gap_ratio: f64,
    /// Bounding-box width over height.
    pub aspect_ratio: f64,
    /// Population standard deviation of the radial distances over their mean.
    pub radial_cv: f64,
    /// Total length of the normalized path.
    pub path_length: f64,
    pub closed: bool,
    pub roundish: bool,
    pub circular: bool,
    pub long_enough: bool,
}

impl CircleVerdict {
    /// All four conditions hold.
    #[must_use]
    pub fn is_circle(&self) -> bool {
        self.closed && self.roundish && self.circular && self.long_enough
    }
}

/// Decides whether a normalized stroke is a closed loop.
///
/// Index-aligned template distance copes badly with loops: where the stroke
/// closes is arbitrary. This test looks at shape statistics instead.
pub struct ClosedCircleTest {
    thresholds: CircleThresholds,
    square_size: f64,
}

impl ClosedCircleTest {
    /// Creates a new `ClosedCircleTest`.
    #[must_use]
    pub fn new(thresholds: CircleThresholds, square_size: f64) -> Self {
        Self {
            thresholds,
            square_size,
        }
    }

    /// Evaluates the normalized stroke.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, stroke: &NormalizedStroke) -> CircleVerdict {
        let t = &self.thresholds;
        let pts = stroke.points();
        let (Some(first), Some(last), Some(bounds)) =
            (pts.first(), pts.last(), Bounds2::from_points(pts))
        else {
            return CircleVerdict {
                gap_ratio: f64::INFINITY,
                aspect_ratio: 0.0,
                radial_cv: f64::INFINITY,
                path_length: 0.0,
                closed: false,
                roundish: false,
                circular: false,
                long_enough: false,
            };
        };

        let diagonal = self.square_size.hypot(self.square_size);
        let gap_ratio = nalgebra::distance(first, last) / diagonal;

        let aspect_ratio = bounds.aspect_ratio();

        let c = centroid(pts);
        let n = pts.len() as f64;
        let radii: Vec<f64> = pts.iter().map(|p| nalgebra::distance(p, &c)).collect();
        let mean = radii.iter().sum::<f64>() / n;
        let variance = radii.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / n;
        let radial_cv = variance.sqrt() / non_zero_or_one(mean);

        let length = path_length(pts);

        CircleVerdict {
            gap_ratio,
            aspect_ratio,
            radial_cv,
            path_length: length,
            closed: gap_ratio < t.closed_ratio,
            roundish: aspect_ratio > t.aspect_min && aspect_ratio < t.aspect_max,
            circular: radial_cv < t.max_radial_cv,
            long_enough: length > self.square_size * t.min_length_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;
    use crate::config::RecognizerConfig;
    use crate::math::Point2;
    use crate::operations::Normalize;

    fn verdict(raw: &[Point2]) -> CircleVerdict {
        let cfg = RecognizerConfig::default();
        let normalized = Normalize::from_config(&cfg).execute(raw);
        ClosedCircleTest::new(cfg.circle, cfg.square_size).execute(&normalized)
    }

    fn ring(count: u32, radius: f64, wobble: f64) -> Vec<Point2> {
        (0..count)
            .map(|i| {
                let t = f64::from(i) / f64::from(count - 1) * TAU;
                let r = radius + wobble * (f64::from(i) * 0.9).sin();
                Point2::new(200.0 + r * t.cos(), 200.0 + r * t.sin())
            })
            .collect()
    }

    #[test]
    fn closed_ring_passes_every_condition() {
        let v = verdict(&ring(40, 100.0, 0.0));
        assert!(v.closed && v.roundish && v.circular && v.long_enough, "{v:?}");
        assert!(v.is_circle());
        assert!(v.radial_cv < 0.05, "cv={}", v.radial_cv);
    }

    #[test]
    fn wobbly_ring_is_still_a_circle() {
        assert!(verdict(&ring(60, 100.0, 6.0)).is_circle());
    }

    #[test]
    fn open_arc_is_not_closed() {
        // Three quarters of a ring.
        let arc: Vec<Point2> = (0..40)
            .map(|i| {
                let t = f64::from(i) / 39.0 * TAU * 0.75;
                Point2::new(100.0 * t.cos(), 100.0 * t.sin())
            })
            .collect();
        let v = verdict(&arc);
        assert!(!v.closed, "gap={}", v.gap_ratio);
        assert!(!v.is_circle());
    }

    #[test]
    fn straight_line_fails() {
        let line: Vec<Point2> = (0..30).map(|i| Point2::new(f64::from(i) * 10.0, 5.0)).collect();
        let v = verdict(&line);
        assert!(!v.closed);
        assert!(!v.long_enough, "len={}", v.path_length);
        assert!(!v.is_circle());
    }

    #[test]
    fn empty_stroke_is_not_a_circle() {
        let cfg = RecognizerConfig::default();
        let v = ClosedCircleTest::new(cfg.circle, cfg.square_size)
            .execute(&NormalizedStroke::from_points(Vec::new()));
        assert!(!v.is_circle());
    }
}
