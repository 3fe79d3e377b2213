use std::sync::OnceLock;

use crate::config::RecognizerConfig;
use crate::error::Result;
use crate::geometry::{NormalizedStroke, Stroke};
use crate::math::{path_length, Bounds2, Point2};
use crate::operations::Normalize;
use crate::templates::TemplateSet;

use super::{Classification, ClosedCircleTest, Disambiguate, GestureKind, MatchTemplate, TemplateScore};

/// Classifies single strokes against the built-in template set.
///
/// Holds only data that is immutable after construction, so one instance
/// can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Recognizer {
    config: RecognizerConfig,
    normalize: Normalize,
    templates: TemplateSet,
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::build(RecognizerConfig::default())
    }
}

impl Recognizer {
    /// Creates a recognizer and generates its templates.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration is invalid.
    pub fn new(config: RecognizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RecognizerConfig) -> Self {
        let templates = TemplateSet::new(&config);
        tracing::debug!(
            templates = templates.len(),
            points = config.resample_points,
            square = config.square_size,
            "recognizer ready"
        );
        Self {
            normalize: Normalize::from_config(&config),
            config,
            templates,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    #[must_use]
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Runs the normalization pipeline with this recognizer's settings.
    #[must_use]
    pub fn normalize(&self, stroke: &Stroke) -> NormalizedStroke {
        self.normalize.execute(stroke.points())
    }

    /// Classifies a stroke.
    ///
    /// A closed loop is reported as `circle` with the heuristic's fixed score
    /// and zero distance, without consulting the templates. Jitter, a stroke
    /// that is both tiny in raw space and scribbled, is reported as
    /// `unknown`. Anything else gets the best template, with a line or arrow
    /// suffix corrected from the raw travel direction.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::LengthMismatch` only if templates and strokes
    /// were normalized differently, which a recognizer never does.
    pub fn recognize(&self, stroke: &Stroke) -> Result<Classification> {
        let normalized = self.normalize(stroke);

        let verdict =
            ClosedCircleTest::new(self.config.circle, self.config.square_size).execute(&normalized);
        if verdict.is_circle() {
            tracing::debug!(radial_cv = verdict.radial_cv, "closed circle");
            return Ok(Classification {
                kind: GestureKind::Circle,
                score: self.config.circle.score,
                distance: Some(0.0),
            });
        }

        if self.is_jitter(stroke, &normalized) {
            tracing::debug!(points = stroke.len(), "jitter stroke");
            return Ok(Classification::unknown());
        }

        let best = MatchTemplate::new(&self.templates, self.config.max_distance()).execute(&normalized)?;
        let kind = Disambiguate::new(self.config.direction).execute(best.kind, stroke);
        let result = Classification { kind, ..best };
        tracing::debug!(gesture = %result.kind, score = result.score, "stroke classified");
        Ok(result)
    }

    /// Non-uniform scaling inflates any wobble across a thin stroke, so path
    /// length alone cannot tell jitter from a hand-drawn line. Only strokes
    /// whose raw extent is below `min_extent` are judged by it.
    fn is_jitter(&self, stroke: &Stroke, normalized: &NormalizedStroke) -> bool {
        let extent = Bounds2::from_points(stroke.points()).as_ref().map_or(0.0, Bounds2::diagonal);
        extent < self.config.min_extent
            && path_length(normalized.points()) > self.config.max_path_ratio * self.config.square_size
    }

    /// Validates raw points and classifies them.
    ///
    /// # Errors
    ///
    /// Returns `StrokeError::Empty` or `StrokeError::NonFinite` for unusable
    /// input.
    pub fn recognize_points(&self, points: &[Point2]) -> Result<Classification> {
        let stroke = Stroke::new(points.to_vec())?;
        self.recognize(&stroke)
    }

    /// Scores a stroke against every template, for diagnostics.
    ///
    /// # Errors
    ///
    /// Same as [`Recognizer::recognize`].
    pub fn template_scores(&self, stroke: &Stroke) -> Result<Vec<TemplateScore>> {
        MatchTemplate::new(&self.templates, self.config.max_distance()).scores(&self.normalize(stroke))
    }
}

/// The process-wide recognizer with default settings, built on first use.
pub fn default_recognizer() -> &'static Recognizer {
    static DEFAULT: OnceLock<Recognizer> = OnceLock::new();
    DEFAULT.get_or_init(Recognizer::default)
}

/// Classifies raw points with the default recognizer.
///
/// # Errors
///
/// Same as [`Recognizer::recognize_points`].
pub fn recognize(points: &[Point2]) -> Result<Classification> {
    default_recognizer().recognize_points(points)
}
