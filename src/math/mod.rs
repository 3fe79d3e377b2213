pub mod bounds_2d;
pub mod stroke_2d;

pub use bounds_2d::Bounds2;
pub use stroke_2d::{centroid, mean_pointwise_distance, path_length};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
