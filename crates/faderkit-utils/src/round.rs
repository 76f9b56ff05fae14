//! Rounding helpers.
//!
//! Every quantizer in the model rounds exact halves up, including negative
//! halves (`-0.5` becomes `0`), unlike `f64::round`.

/// Round to the nearest integer, with exact halves going up (`floor(x + 0.5)`).
///
/// ```
/// use faderkit_utils::round_half_up;
///
/// assert_eq!(round_half_up(63.5), 64.0);
/// assert_eq!(round_half_up(63.49), 63.0);
/// assert_eq!(round_half_up(-0.5), 0.0);
/// ```
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    // `x - floor(x)` is exact; `x + 0.5` is not near 0.5 or above 2^52
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round half up and convert to an integer clamped to `[0, max]`.
///
/// Non-finite input maps to 0, except positive infinity which maps to `max`.
#[inline]
pub fn round_to_u64(x: f64, max: u64) -> u64 {
    if x.is_nan() {
        return 0;
    }
    let rounded = round_half_up(x);
    if rounded <= 0.0 {
        0
    } else if rounded >= max as f64 {
        max
    } else {
        rounded as u64
    }
}
