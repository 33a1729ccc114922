//! Conversions from [`Affine2D`] into the layouts rendering backends expect
//! for per-draw uniform data.

use super::Affine2D;
use crate::math::Matrix3x4;

/// Widens a transform into a 3x4 matrix.
///
/// ```text
/// | m11 m12 0 0 |
/// | m21 m22 0 0 |
/// | m31 m32 1 0 |
/// ```
#[must_use]
#[rustfmt::skip]
pub fn widen_to_3x4(t: &Affine2D) -> Matrix3x4 {
    Matrix3x4::new(
        t.m11(), t.m12(), 0.0, 0.0,
        t.m21(), t.m22(), 0.0, 0.0,
        t.m31(), t.m32(), 1.0, 0.0,
    )
}

/// Linearizes a 3x4 matrix in row-major order.
///
/// `nalgebra` stores matrices column-major, so this does not reuse the
/// backing storage. Downstream buffers depend on this exact element order.
#[must_use]
pub fn flatten(wide: &Matrix3x4) -> [f32; 12] {
    std::array::from_fn(|i| wide[(i / 4, i % 4)])
}

impl Affine2D {
    /// Returns the 12-float row-major 3x4 uniform layout of this transform.
    #[must_use]
    pub fn to_uniform_array(self) -> [f32; 12] {
        flatten(&widen_to_3x4(&self))
    }
}
