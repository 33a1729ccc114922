mod layout;

pub use layout::{flatten, widen_to_3x4};

use std::f32::consts::PI;

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

/// Determinant magnitude below which a transform is treated as singular.
const SINGULAR_DETERMINANT: f64 = 1e-6;

/// A 2D affine transform stored as the six significant coefficients of
///
/// ```text
/// | m11 m12 0 |
/// | m21 m22 0 |
/// | m31 m32 1 |
/// ```
///
/// acting on row vectors `[x y 1]`. The value is immutable: every operation
/// returns a new transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2D {
    m11: f32,
    m12: f32,
    m21: f32,
    m22: f32,
    m31: f32,
    m32: f32,
}

impl Affine2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a transform from its six coefficients.
    #[must_use]
    pub const fn new(m11: f32, m12: f32, m21: f32, m22: f32, m31: f32, m32: f32) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            m31,
            m32,
        }
    }

    /// Creates a transform from `[m11, m12, m21, m22, m31, m32]`.
    #[must_use]
    pub const fn from_array(m: [f32; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }

    /// Returns the coefficients as `[m11, m12, m21, m22, m31, m32]`.
    #[must_use]
    pub const fn to_array(self) -> [f32; 6] {
        [self.m11, self.m12, self.m21, self.m22, self.m31, self.m32]
    }

    #[must_use]
    pub const fn m11(self) -> f32 {
        self.m11
    }

    #[must_use]
    pub const fn m12(self) -> f32 {
        self.m12
    }

    #[must_use]
    pub const fn m21(self) -> f32 {
        self.m21
    }

    #[must_use]
    pub const fn m22(self) -> f32 {
        self.m22
    }

    #[must_use]
    pub const fn m31(self) -> f32 {
        self.m31
    }

    #[must_use]
    pub const fn m32(self) -> f32 {
        self.m32
    }

    /// A pure translation by `(x, y)`.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// A pure scale by `(x, y)` about the origin.
    #[must_use]
    pub const fn scale(x: f32, y: f32) -> Self {
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// A rotation by `angle` degrees.
    ///
    /// The second row is `[-sin, -cos]`, so `rotate(0.0)` mirrors the y axis
    /// rather than being the identity. Consumers of this kernel rely on that
    /// sign pattern.
    #[must_use]
    pub fn rotate(angle: f32) -> Self {
        let rads = angle * PI / 180.0;
        let cs = rads.cos();
        let sn = rads.sin();
        Self::new(cs, sn, -sn, -cs, 0.0, 0.0)
    }

    /// A horizontal skew by `angle` degrees.
    #[must_use]
    pub fn skew_x(angle: f32) -> Self {
        let rads = angle * PI / 180.0;
        Self::new(1.0, 0.0, rads.tan(), 1.0, 0.0, 0.0)
    }

    /// A vertical skew by `angle` degrees.
    #[must_use]
    pub fn skew_y(angle: f32) -> Self {
        let rads = angle * PI / 180.0;
        Self::new(1.0, rads.tan(), 0.0, 1.0, 0.0, 0.0)
    }

    /// Returns the transform that applies `self` first and then `next`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            m11: self.m11 * next.m11 + self.m12 * next.m21,
            m12: self.m11 * next.m12 + self.m12 * next.m22,
            m21: self.m21 * next.m11 + self.m22 * next.m21,
            m22: self.m21 * next.m12 + self.m22 * next.m22,
            m31: self.m31 * next.m11 + self.m32 * next.m21 + next.m31,
            m32: self.m31 * next.m12 + self.m32 * next.m22 + next.m32,
        }
    }

    /// Composes two transforms so that the result applies `inner` first and
    /// then `outer`.
    ///
    /// This is how a transform stack is updated: the current transform is
    /// `outer`, and the newly pushed transform `inner` acts in its local space.
    #[must_use]
    pub fn compose(outer: Self, inner: Self) -> Self {
        inner.then(outer)
    }

    /// Determinant of the linear part, computed in double precision.
    #[must_use]
    pub fn determinant(self) -> f64 {
        f64::from(self.m11) * f64::from(self.m22) - f64::from(self.m21) * f64::from(self.m12)
    }

    /// Returns the inverse transform.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Singular`] if `|det| < 1e-6`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn try_inverse(self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() < SINGULAR_DETERMINANT {
            return Err(GeometryError::Singular { determinant: det }.into());
        }
        let inv_det = 1.0 / det;

        let (m11, m12) = (f64::from(self.m11), f64::from(self.m12));
        let (m21, m22) = (f64::from(self.m21), f64::from(self.m22));
        let (m31, m32) = (f64::from(self.m31), f64::from(self.m32));

        Ok(Self {
            m11: (m22 * inv_det) as f32,
            m12: (-m12 * inv_det) as f32,
            m21: (-m21 * inv_det) as f32,
            m22: (m11 * inv_det) as f32,
            m31: ((m21 * m32 - m22 * m31) * inv_det) as f32,
            m32: ((m12 * m31 - m11 * m32) * inv_det) as f32,
        })
    }

    /// Returns the inverse transform, or the identity if `self` is singular.
    ///
    /// The renderer treats a collapsed transform as "draw untransformed";
    /// use [`Affine2D::try_inverse`] to detect that case instead.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self.try_inverse() {
            Ok(inv) => inv,
            Err(err) => {
                tracing::debug!(%err, "inverting singular transform, using identity");
                Self::IDENTITY
            }
        }
    }

    /// Transforms a point, translation included.
    #[must_use]
    pub fn apply_to_point(self, point: &Point2) -> Point2 {
        Point2::new(
            point.x * self.m11 + point.y * self.m21 + self.m31,
            point.x * self.m12 + point.y * self.m22 + self.m32,
        )
    }

    /// Transforms a direction, ignoring translation.
    #[must_use]
    pub fn apply_to_vector(self, v: &Vector2) -> Vector2 {
        Vector2::new(
            v.x * self.m11 + v.y * self.m21,
            v.x * self.m12 + v.y * self.m22,
        )
    }

    /// Approximates the uniform scale factor as the mean length of the two
    /// columns of the linear part.
    #[must_use]
    pub fn average_scale(self) -> f32 {
        let sx = (self.m11 * self.m11 + self.m21 * self.m21).sqrt();
        let sy = (self.m12 * self.m12 + self.m22 * self.m22).sqrt();
        (sx + sy) * 0.5
    }
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AbsDiffEq for Affine2D {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Affine2D {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
