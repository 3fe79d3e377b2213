pub mod stroke;

pub use stroke::{NormalizedStroke, Stroke};
