/// Linear map of `x` from `[x0, x1]` to `[y0, y1]` with clamped
/// extrapolation on both sides.
///
/// Inputs left of `x0` return `y0`, inputs right of `x1` return `y1`. The
/// output range may be descending (`y0 > y1`), which is how fade-outs are
/// expressed. A degenerate input range (`x0 == x1`) snaps to `y0` below the
/// point and `y1` at or above it.
pub fn map_range_clamped(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if x0 == x1 {
        return if x < x0 { y0 } else { y1 };
    }
    let t = ((x - x0) / (x1 - x0)).clamp(0.0, 1.0);
    y0 + (y1 - y0) * t
}
