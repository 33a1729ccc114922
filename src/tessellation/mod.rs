mod params;

pub use params::{TessellationParams, MAX_STROKE_WIDTH};

/// Ratio of the control-point distance to the radius when a quarter circle
/// is approximated by a single cubic bezier.
pub const KAPPA: f32 = 0.552_284_75;

/// Computes how many segments are needed to approximate an arc of `radius`
/// spanning `arc_span` radians so that no chord strays further than
/// `tolerance` from the true arc.
///
/// Always returns at least 2. Inputs are not validated: `radius` and
/// `tolerance` must be positive.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn curve_subdivisions(radius: f32, arc_span: f32, tolerance: f32) -> u32 {
    // Largest angular step whose chord sagitta stays within tolerance.
    let da = (radius / (radius + tolerance)).acos() * 2.0;
    let n = (arc_span / da).ceil() as u32;
    n.max(2)
}
