//! Tests for tick label formatting and numeric helpers.

use jetpack_common::utils::*;

#[test]
fn test_integral_labels_have_no_fraction() {
    for (value, expected) in [(0.0, "0"), (10.0, "10"), (-3.0, "-3"), (1e6, "1000000")] {
        assert_eq!(format_tick_label(value), expected);
    }
}

#[test]
fn test_float_noise_is_hidden() {
    let third_step = 3.0 * 0.2;
    assert_eq!(format_tick_label(third_step), "0.6");
}

#[test]
fn test_linspace_matches_default_ticks() {
    let labels: Vec<String> = linspace(0.0, 1.0, 6)
        .into_iter()
        .map(format_tick_label)
        .collect();
    assert_eq!(labels, ["0", "0.2", "0.4", "0.6", "0.8", "1"]);
}

#[test]
fn test_linspace_descending() {
    let values = linspace(10.0, 0.0, 3);
    assert!(approx_eq(values[0], 10.0, 1e-12));
    assert!(approx_eq(values[1], 5.0, 1e-12));
    assert!(approx_eq(values[2], 0.0, 1e-12));
}
