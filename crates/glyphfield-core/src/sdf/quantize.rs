/// Map a signed distance in `[-clamp, +clamp]` to one 8-bit sample.
///
/// - Guarantees `-clamp -> 0`
/// - Guarantees `+clamp -> 255`
/// - Fractional results truncate toward zero.
///
/// No extra clamping: the search radius equals `clamp`, so inputs never
/// leave the range.
#[inline]
pub fn quantize(d: f64, clamp: i32) -> u8 {
    debug_assert!(clamp >= 1);
    (((d / (2.0 * clamp as f64)) + 0.5) * 255.0) as u8
}
