pub mod normalize;

pub use normalize::{indicative_angle, Normalize, Resample, RotateBy, ScaleToSquare, TranslateTo};
