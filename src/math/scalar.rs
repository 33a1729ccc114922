/// Clamps `value` to the range `[lo, hi]`.
///
/// Works for integers and floats alike. Unlike [`f32::clamp`] this never
/// panics when `lo > hi`: the lower bound is tested first, so `lo` wins
/// for values below it and `hi` for values above it.
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}
