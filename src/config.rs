use crate::error::{ConfigError, Result};
use crate::math::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Score above which a caller should treat a classification as a successful
/// recognition. The recognizer never applies it itself.
pub const DEFAULT_SUCCESS_THRESHOLD: f64 = 0.6;

/// Thresholds for the closed-circle heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CircleThresholds {
    /// Maximum first-to-last gap, as a fraction of the square's diagonal.
    pub closed_ratio: f64,
    /// Exclusive lower bound on the bounding-box aspect ratio.
    pub aspect_min: f64,
    /// Exclusive upper bound on the bounding-box aspect ratio.
    pub aspect_max: f64,
    /// Maximum coefficient of variation of the radial distances.
    pub max_radial_cv: f64,
    /// Minimum normalized path length, in multiples of the square size.
    pub min_length_factor: f64,
    /// Score reported when the heuristic claims a stroke.
    pub score: f64,
}

impl Default for CircleThresholds {
    fn default() -> Self {
        Self {
            closed_ratio: 0.12,
            aspect_min: 0.65,
            aspect_max: 1.35,
            max_radial_cv: 0.38,
            min_length_factor: 1.6,
            score: 0.92,
        }
    }
}

/// Thresholds for recovering left/right from the raw displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DirectionThresholds {
    /// Displacements shorter than this are too ambiguous to decide.
    pub min_displacement: f64,
    /// `|dx|` must be at least this multiple of `|dy|`.
    pub horizontal_ratio: f64,
}

impl Default for DirectionThresholds {
    fn default() -> Self {
        Self {
            min_displacement: 30.0,
            horizontal_ratio: 0.7,
        }
    }
}

/// Parameters controlling normalization and classification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RecognizerConfig {
    /// Number of points every stroke is resampled to.
    pub resample_points: usize,
    /// Side of the bounding square strokes are scaled into.
    pub square_size: f64,
    /// Point the normalized centroid is moved to.
    pub origin: Point2,
    pub circle: CircleThresholds,
    pub direction: DirectionThresholds,
    /// Raw strokes whose bounding-box diagonal is below this are candidates
    /// for rejection as jitter.
    pub min_extent: f64,
    /// A candidate is rejected when its normalized length exceeds this many
    /// square sides.
    pub max_path_ratio: f64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            resample_points: 96,
            square_size: 250.0,
            origin: Point2::origin(),
            circle: CircleThresholds::default(),
            direction: DirectionThresholds::default(),
            min_extent: 10.0,
            max_path_ratio: 6.0,
        }
    }
}

impl RecognizerConfig {
    /// Diagonal of the normalization square, the largest plausible per-point
    /// separation between two normalized strokes.
    #[must_use]
    pub fn max_distance(&self) -> f64 {
        self.square_size.hypot(self.square_size)
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.resample_points < 2 {
            return Err(ConfigError::TooFewPoints {
                points: self.resample_points,
            }
            .into());
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(ConfigError::InvalidSquare(self.square_size).into());
        }
        for (name, value) in [("origin.x", self.origin.x), ("origin.y", self.origin.y)] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidThreshold { name, value }.into());
            }
        }

        let c = &self.circle;
        let d = &self.direction;
        let positive = [
            ("circle.closed_ratio", c.closed_ratio),
            ("circle.aspect_min", c.aspect_min),
            ("circle.aspect_max", c.aspect_max),
            ("circle.max_radial_cv", c.max_radial_cv),
            ("circle.min_length_factor", c.min_length_factor),
            ("direction.horizontal_ratio", d.horizontal_ratio),
            ("max_path_ratio", self.max_path_ratio),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value }.into());
            }
        }
        if c.aspect_min >= c.aspect_max {
            return Err(ConfigError::InvalidThreshold {
                name: "circle.aspect_min",
                value: c.aspect_min,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&c.score) {
            return Err(ConfigError::InvalidThreshold {
                name: "circle.score",
                value: c.score,
            }
            .into());
        }
        let non_negative = [
            ("direction.min_displacement", d.min_displacement),
            ("min_extent", self.min_extent),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value }.into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RecognizerError;

    #[test]
    fn default_config_is_valid() {
        RecognizerConfig::default().validate().unwrap();
    }

    #[test]
    fn max_distance_is_square_diagonal() {
        let cfg = RecognizerConfig::default();
        assert!((cfg.max_distance() - 250.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn single_point_resample_is_rejected() {
        let cfg = RecognizerConfig {
            resample_points: 1,
            ..RecognizerConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(
            err,
            RecognizerError::Config(ConfigError::TooFewPoints { points: 1 })
        ));
    }

    #[test]
    fn zero_square_is_rejected() {
        let cfg = RecognizerConfig {
            square_size: 0.0,
            ..RecognizerConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            RecognizerError::Config(ConfigError::InvalidSquare(_))
        ));
    }

    #[test]
    fn inverted_aspect_bounds_are_rejected() {
        let mut cfg = RecognizerConfig::default();
        cfg.circle.aspect_min = 1.5;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            RecognizerError::Config(ConfigError::InvalidThreshold {
                name: "circle.aspect_min",
                ..
            })
        ));
    }

    #[test]
    fn circle_score_must_be_a_probability() {
        let mut cfg = RecognizerConfig::default();
        cfg.circle.score = 1.2;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_min_extent_is_rejected() {
        let cfg = RecognizerConfig {
            min_extent: -1.0,
            ..RecognizerConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            RecognizerError::Config(ConfigError::InvalidThreshold {
                name: "min_extent",
                ..
            })
        ));
        RecognizerConfig {
            min_extent: 0.0,
            ..RecognizerConfig::default()
        }
        .validate()
        .unwrap();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: RecognizerConfig =
            serde_json::from_str(r#"{ "resample_points": 64, "direction": { "min_displacement": 40.0 } }"#)
                .unwrap();
        assert_eq!(cfg.resample_points, 64);
        assert!((cfg.square_size - 250.0).abs() < 1e-12);
        assert!((cfg.direction.min_displacement - 40.0).abs() < 1e-12);
        assert!((cfg.direction.horizontal_ratio - 0.7).abs() < 1e-12);
        cfg.validate().unwrap();
    }
}
