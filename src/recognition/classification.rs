use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::HorizontalDirection;

/// The closed set of gesture classes the recognizer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum GestureKind {
    LineRight,
    LineLeft,
    ArrowRight,
    ArrowLeft,
    Circle,
    Z,
    Unknown,
}

impl GestureKind {
    /// Template classes in matching order. Ties go to the earlier entry.
    pub const TEMPLATES: [GestureKind; 6] = [
        GestureKind::LineRight,
        GestureKind::LineLeft,
        GestureKind::ArrowRight,
        GestureKind::ArrowLeft,
        GestureKind::Circle,
        GestureKind::Z,
    ];

    /// Canonical name, e.g. `"arrow-left"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LineRight => "line-right",
            Self::LineLeft => "line-left",
            Self::ArrowRight => "arrow-right",
            Self::ArrowLeft => "arrow-left",
            Self::Circle => "circle",
            Self::Z => "z",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the class carries a left/right suffix.
    #[must_use]
    pub fn is_directional(self) -> bool {
        matches!(
            self,
            Self::LineRight | Self::LineLeft | Self::ArrowRight | Self::ArrowLeft
        )
    }

    /// Replaces the directional suffix, keeping the line/arrow family.
    ///
    /// Non-directional classes and an unknown direction leave `self` as is.
    #[must_use]
    pub fn with_direction(self, direction: HorizontalDirection) -> Self {
        match (self, direction) {
            (Self::LineRight | Self::LineLeft, HorizontalDirection::Left) => Self::LineLeft,
            (Self::LineRight | Self::LineLeft, HorizontalDirection::Right) => Self::LineRight,
            (Self::ArrowRight | Self::ArrowLeft, HorizontalDirection::Left) => Self::ArrowLeft,
            (Self::ArrowRight | Self::ArrowLeft, HorizontalDirection::Right) => Self::ArrowRight,
            (kind, _) => kind,
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a name that is not a gesture class.
#[derive(Debug, Error, PartialEq)]
#[error("unknown gesture name: {0}")]
pub struct ParseGestureKindError(pub String);

impl FromStr for GestureKind {
    type Err = ParseGestureKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GestureKind::TEMPLATES
            .into_iter()
            .chain(std::iter::once(GestureKind::Unknown))
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseGestureKindError(s.to_owned()))
    }
}

/// The outcome of classifying one stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Classification {
    /// Recognized class.
    pub kind: GestureKind,
    /// Similarity in `[0, 1]`; 1 is a perfect match.
    pub score: f64,
    /// Mean pointwise distance to the winning template, if one was compared.
    pub distance: Option<f64>,
}

impl Classification {
    /// Result for a stroke no template was compared against.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            kind: GestureKind::Unknown,
            score: 0.0,
            distance: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Whether the score clears a caller-chosen threshold (strictly greater).
    #[must_use]
    pub fn is_success(&self, threshold: f64) -> bool {
        self.score > threshold
    }
}
