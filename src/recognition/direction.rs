use crate::config::DirectionThresholds;
use crate::geometry::Stroke;
use crate::math::Vector2;

use super::GestureKind;

/// Horizontal travel direction recovered from a raw stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    /// Too short, or more vertical than horizontal.
    Unknown,
}

impl HorizontalDirection {
    /// Classifies a first-to-last displacement.
    #[must_use]
    pub fn from_displacement(displacement: Vector2, thresholds: &DirectionThresholds) -> Self {
        let (dx, dy) = (displacement.x, displacement.y);
        if dx.hypot(dy) < thresholds.min_displacement {
            return Self::Unknown;
        }
        if dx.abs() < dy.abs() * thresholds.horizontal_ratio {
            return Self::Unknown;
        }
        if dx < 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Corrects the left/right suffix of a line or arrow match from the raw,
/// unnormalized stroke. Rotation to the indicative angle erases most of
/// the travel direction, so the matcher alone cannot be trusted with it.
pub struct Disambiguate {
    thresholds: DirectionThresholds,
}

impl Disambiguate {
    /// Creates a new `Disambiguate` operation.
    #[must_use]
    pub fn new(thresholds: DirectionThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the class with its suffix matching the stroke's travel, or
    /// `kind` unchanged when it is not directional or the direction is
    /// ambiguous.
    #[must_use]
    pub fn execute(&self, kind: GestureKind, stroke: &Stroke) -> GestureKind {
        if !kind.is_directional() {
            return kind;
        }
        let direction = HorizontalDirection::from_displacement(stroke.displacement(), &self.thresholds);
        let corrected = kind.with_direction(direction);
        if corrected != kind {
            tracing::debug!(from = %kind, to = %corrected, "direction override");
        }
        corrected
    }
}
