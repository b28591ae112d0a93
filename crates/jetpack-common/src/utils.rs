//! Shared numeric and formatting helpers.

/// Formats a tick position the way it is shown as a tick label.
///
/// Values are rounded to ten decimal places so that accumulated floating point
/// noise (`0.30000000000000004`) does not leak into labels, and integral values
/// print without a fractional part.
pub fn format_tick_label(value: f64) -> String {
    if !value.is_finite() || value.abs() >= 1e12 {
        return format!("{value}");
    }
    // adding 0.0 turns -0.0 into 0.0
    let rounded = (value * 1e10).round() / 1e10 + 0.0;
    format!("{rounded}")
}

/// Returns `count` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let steps = (count - 1) as f64;
            (0..count)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let t = i as f64 / steps;
                    start + (end - start) * t
                })
                .collect()
        }
    }
}

/// Whether two floats are equal within an absolute tolerance.
pub fn approx_eq(left: f64, right: f64, tolerance: f64) -> bool {
    (left - right).abs() <= tolerance
}
