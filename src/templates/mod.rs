//! The fixed set of gesture templates.

pub mod generate;

pub use generate::raw_path;

use crate::config::RecognizerConfig;
use crate::geometry::NormalizedStroke;
use crate::operations::Normalize;
use crate::recognition::GestureKind;

/// A gesture class together with its idealized normalized shape.
#[derive(Debug, Clone)]
pub struct Template {
    pub kind: GestureKind,
    pub stroke: NormalizedStroke,
}

/// All templates, normalized with one configuration, in matching order.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    /// Generates every template and runs it through the same pipeline that
    /// strokes go through.
    #[must_use]
    pub fn new(config: &RecognizerConfig) -> Self {
        let normalize = Normalize::from_config(config);
        let templates = GestureKind::TEMPLATES
            .into_iter()
            .filter_map(|kind| {
                raw_path(kind, config.resample_points).map(|raw| Template {
                    kind,
                    stroke: normalize.execute(&raw),
                })
            })
            .collect();
        Self { templates }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Looks up the template for a class.
    #[must_use]
    pub fn get(&self, kind: GestureKind) -> Option<&Template> {
        self.templates.iter().find(|t| t.kind == kind)
    }
}
