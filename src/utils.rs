/// Rounds to one decimal, the resolution of centesimal hours.
///
/// Summing tenths in floating point drifts (`0.1 + 0.2`), so totals go through
/// this before they are shown.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn format_centesimal(hours: f64) -> String {
    format!("{:.1}", round_one_decimal(hours))
}
