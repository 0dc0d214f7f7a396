//! Result formatting

/// Fractional digits kept when rendering a result.
pub const PRECISION: usize = 10;

/// Render `value` for the display: rounded to [`PRECISION`] decimal places,
/// always in plain decimal notation, without trailing zeros or a dangling
/// decimal point.
pub fn format_result(value: f64) -> String {
    let s = format!("{:.*}", PRECISION, value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    // -0.00000000001 rounds to "-0"
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
