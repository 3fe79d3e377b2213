mod circle;
mod classification;
mod direction;
mod matcher;
mod recognizer;

pub use circle::{CircleVerdict, ClosedCircleTest};
pub use classification::{Classification, GestureKind, ParseGestureKindError};
pub use direction::{Disambiguate, HorizontalDirection};
pub use matcher::{MatchTemplate, TemplateScore};
pub use recognizer::{default_recognizer, recognize, Recognizer};
