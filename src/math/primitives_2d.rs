use super::{Point2, Vector2, DEGENERATE_EPSILON};

/// Returns twice the signed area of the triangle `(a, b, c)`.
///
/// The sign encodes the winding of the three points; callers halve the
/// result themselves when they need the true area.
#[must_use]
pub fn triangle_signed_area_2x(a: &Point2, b: &Point2, c: &Point2) -> f32 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let acx = c.x - a.x;
    let acy = c.y - a.y;
    acx * aby - abx * acy
}

/// Returns `true` if `(x1, y1)` and `(x2, y2)` are closer than `tol`.
///
/// The comparison is strict and done on squared distances.
#[must_use]
pub fn points_nearly_equal(x1: f32, y1: f32, x2: f32, y2: f32, tol: f32) -> bool {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy < tol * tol
}

/// 2D cross product of `(dx0, dy0)` and `(dx1, dy1)`, computed as
/// `dx1 * dy0 - dx0 * dy1`.
///
/// The operand order is the reverse of the textbook `a × b`; winding tests
/// in the stroker depend on this sign.
#[must_use]
pub fn cross(dx0: f32, dy0: f32, dx1: f32, dy1: f32) -> f32 {
    dx1 * dy0 - dx0 * dy1
}

/// Normalizes `v`, returning the unit vector together with the original length.
///
/// Vectors no longer than [`DEGENERATE_EPSILON`] are returned unchanged, so
/// callers must check the length before relying on the direction.
#[must_use]
pub fn normalize(v: Vector2) -> (Vector2, f32) {
    let d = (v.x * v.x + v.y * v.y).sqrt();
    if d > DEGENERATE_EPSILON {
        let id = 1.0 / d;
        (v * id, d)
    } else {
        (v, d)
    }
}
