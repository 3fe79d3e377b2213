pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod recognition;
pub mod session;
pub mod templates;

pub use config::{RecognizerConfig, DEFAULT_SUCCESS_THRESHOLD};
pub use error::{RecognizerError, Result};
pub use geometry::Stroke;
pub use recognition::{recognize, Classification, GestureKind, Recognizer};
