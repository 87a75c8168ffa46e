//! Shared numeric helpers.

/// Round to the nearest integer, halves toward positive infinity.
///
/// `round_half_up(-2.5) == -2.0`, unlike `f64::round` which gives `-3.0`.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Reduce `x` into `[0, period)`.
///
/// Uses a truncating remainder and shifts negative results up by one period.
/// A shifted value that rounds up to `period` itself folds back to 0.
pub fn normalize_to_period(x: f64, period: f64) -> f64 {
    let r = x % period;
    if r >= 0.0 {
        return r;
    }
    let shifted = r + period;
    if shifted >= period { 0.0 } else { shifted }
}
