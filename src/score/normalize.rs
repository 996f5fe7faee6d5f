/// Rescale `value` from `[min, max]` into `[0, 1]`.
///
/// A degenerate range (`min == max`) yields 0.0 instead of dividing by
/// zero. With `inverse` set a lower raw value scores higher, which is how
/// distance-style signals are read. No clamping is applied: out-of-range
/// values map outside `[0, 1]` and callers accept that.
pub fn normalize(value: f64, min: f64, max: f64, inverse: bool) -> f64 {
    if min == max {
        return 0.0;
    }
    let normalized = (value - min) / (max - min);
    if inverse {
        1.0 - normalized
    } else {
        normalized
    }
}
