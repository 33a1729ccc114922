use crate::error::{Result, TessellationError};
use crate::math::{clamp, points_nearly_equal};
use crate::transform::Affine2D;

use super::curve_subdivisions;

/// Upper bound on a stroke width after it has been scaled into device space.
pub const MAX_STROKE_WIDTH: f32 = 200.0;

/// Tolerances controlling tessellation quality, derived from the device
/// pixel ratio of the render target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationParams {
    /// Maximum allowed deviation between a curve and its flattened chords.
    pub tess_tol: f32,
    /// Distance below which consecutive points are merged.
    pub dist_tol: f32,
    /// Width of the antialiasing fringe.
    pub fringe_width: f32,
}

impl TessellationParams {
    /// Creates parameters for a target with the given device pixel ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if `device_pixel_ratio` is not a positive finite number.
    pub fn new(device_pixel_ratio: f32) -> Result<Self> {
        if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
            tracing::debug!(device_pixel_ratio, "rejecting tessellation parameters");
            return Err(TessellationError::InvalidParameters(format!(
                "device pixel ratio must be positive and finite, got {device_pixel_ratio}"
            ))
            .into());
        }
        Ok(Self {
            tess_tol: 0.25 / device_pixel_ratio,
            dist_tol: 0.01 / device_pixel_ratio,
            fringe_width: 1.0 / device_pixel_ratio,
        })
    }

    /// Number of segments for an arc of `radius` spanning `arc_span` radians.
    #[must_use]
    pub fn arc_subdivisions(&self, radius: f32, arc_span: f32) -> u32 {
        curve_subdivisions(radius, arc_span, self.tess_tol)
    }

    /// Returns `true` if the two points are close enough to be merged.
    #[must_use]
    pub fn points_coincide(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> bool {
        points_nearly_equal(x1, y1, x2, y2, self.dist_tol)
    }

    /// Scales a stroke width by the average scale of `xform`, clamped to
    /// `[0, MAX_STROKE_WIDTH]`.
    #[must_use]
    pub fn scaled_stroke_width(&self, width: f32, xform: &Affine2D) -> f32 {
        clamp(width * xform.average_scale(), 0.0, MAX_STROKE_WIDTH)
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tess_tol: 0.25,
            dist_tol: 0.01,
            fringe_width: 1.0,
        }
    }
}
