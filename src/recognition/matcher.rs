use crate::error::{MatchError, Result};
use crate::geometry::NormalizedStroke;
use crate::math::mean_pointwise_distance;
use crate::templates::TemplateSet;

use super::{Classification, GestureKind};

/// Score of a stroke against a single template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateScore {
    pub kind: GestureKind,
    pub score: f64,
    pub distance: f64,
}

/// Compares a normalized stroke with every template and keeps the best.
pub struct MatchTemplate<'a> {
    templates: &'a TemplateSet,
    max_distance: f64,
}

impl<'a> MatchTemplate<'a> {
    /// Creates a new `MatchTemplate` query.
    ///
    /// * `max_distance` - Distance at which the score bottoms out at 0,
    ///   normally the normalization square's diagonal.
    #[must_use]
    pub fn new(templates: &'a TemplateSet, max_distance: f64) -> Self {
        Self {
            templates,
            max_distance,
        }
    }

    /// Scores the stroke against every template, in matching order.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::LengthMismatch` if the stroke and a template were
    /// normalized to different point counts.
    pub fn scores(&self, stroke: &NormalizedStroke) -> Result<Vec<TemplateScore>> {
        self.templates
            .iter()
            .map(|template| -> Result<TemplateScore> {
                if template.stroke.len() != stroke.len() {
                    return Err(MatchError::LengthMismatch {
                        expected: template.stroke.len(),
                        actual: stroke.len(),
                    }
                    .into());
                }
                let distance = mean_pointwise_distance(stroke.points(), template.stroke.points());
                let score = 1.0 - (distance / self.max_distance).min(1.0);
                tracing::trace!(template = %template.kind, score, distance, "template score");
                Ok(TemplateScore {
                    kind: template.kind,
                    score,
                    distance,
                })
            })
            .collect()
    }

    /// Returns the best-scoring template.
    ///
    /// Only a strictly greater score replaces the current best, so ties go
    /// to the template listed first. With no template scoring above 0 the
    /// result is `unknown`.
    ///
    /// # Errors
    ///
    /// Same as [`MatchTemplate::scores`].
    pub fn execute(&self, stroke: &NormalizedStroke) -> Result<Classification> {
        let mut best = Classification::unknown();
        for candidate in self.scores(stroke)? {
            if candidate.score > best.score {
                best = Classification {
                    kind: candidate.kind,
                    score: candidate.score,
                    distance: Some(candidate.distance),
                };
            }
        }
        Ok(best)
    }
}
