/// Returns the squared distance from point `(x, y)` to the line segment
/// from `(px, py)` to `(qx, qy)`.
///
/// A zero-length segment skips the normalization of the projection
/// parameter, which then clamps to the start point `p`.
#[must_use]
pub fn point_segment_distance_squared(x: f32, y: f32, px: f32, py: f32, qx: f32, qy: f32) -> f32 {
    let pqx = qx - px;
    let pqy = qy - py;
    let dx = x - px;
    let dy = y - py;
    let d = pqx * pqx + pqy * pqy;

    let mut t = pqx * dx + pqy * dy;
    if d > 0.0 {
        t /= d;
    }
    let t = super::clamp(t, 0.0, 1.0);

    let dx = px + t * pqx - x;
    let dy = py + t * pqy - y;
    dx * dx + dy * dy
}
