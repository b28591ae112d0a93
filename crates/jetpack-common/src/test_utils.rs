//! Test utilities and shared test helpers for Jetpack.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // another harness may already own the global subscriber
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal YAML configuration that only overrides the colour.
    pub fn minimal_config_yaml() -> &'static str {
        r##"
style:
  color: "#222222"
"##
    }

    /// A full YAML configuration touching every section.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "style:\n",
            "  font_size: 14\n",
            "  color: \"#336699\"\n",
            "  breathe:\n",
            "    factor: 0.1\n",
            "    direction: in\n",
            "  spines:\n",
            "    left: false\n",
            "    bottom: false\n",
            "    top: true\n",
            "    right: false\n",
            "  preset:\n",
            "    font_size: true\n",
            "    breathe: true\n",
            "    color: false\n",
            "\n",
            "logging:\n",
            "  level: debug\n",
            "  json_format: true\n",
            "  pretty_format: false\n",
        )
    }

    /// A full TOML configuration equivalent in shape to [`full_config_yaml`].
    pub fn full_config_toml() -> &'static str {
        concat!(
            "[style]\n",
            "font_size = 12.5\n",
            "color = \"#aa0000\"\n",
            "\n",
            "[style.breathe]\n",
            "factor = 0.2\n",
            "direction = \"inout\"\n",
            "\n",
            "[style.spines]\n",
            "left = true\n",
            "bottom = false\n",
            "top = true\n",
            "right = true\n",
            "\n",
            "[logging]\n",
            "level = \"warn\"\n",
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::Color;
    use proptest::prelude::*;

    /// Strategy for generating valid (positive) font sizes.
    pub fn font_size_strategy() -> impl Strategy<Value = f64> {
        0.5f64..200.0
    }

    /// Strategy for generating padding factors.
    pub fn factor_strategy() -> impl Strategy<Value = f64> {
        0.0f64..1.0
    }

    /// Strategy for generating opaque colours.
    pub fn color_strategy() -> impl Strategy<Value = Color> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::rgb(r, g, b))
    }
}
