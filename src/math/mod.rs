pub mod distance_2d;
pub mod primitives_2d;
pub mod scalar;

pub use distance_2d::point_segment_distance_squared;
pub use primitives_2d::{cross, normalize, points_nearly_equal, triangle_signed_area_2x};
pub use scalar::clamp;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// 3x4 matrix, the widened layout of an affine transform.
pub type Matrix3x4 = nalgebra::Matrix3x4<f32>;

/// Threshold below which vector lengths are treated as zero.
pub const DEGENERATE_EPSILON: f32 = 1e-6;
