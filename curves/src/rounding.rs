///
/// Rounds a value to a number of decimal places
///
/// The value is multiplied by `10^decimal_places`, rounded to the nearest integer and divided back
/// again. Ties round away from zero, so `round(0.125, 2)` is `0.13` and `round(-0.125, 2)` is
/// `-0.13`.
///
/// The multiplication happens in binary floating point, so values that look like ties in decimal
/// may not be: `1.005 * 100.0` is `100.49999999999999`, which makes `round(1.005, 2)` equal to `1.0`.
///
#[inline]
pub fn round(value: f64, decimal_places: u32) -> f64 {
    let multiplier = f64::powi(10.0, decimal_places as i32);

    f64::round(value * multiplier) / multiplier
}
