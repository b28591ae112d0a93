//! Default values for every configuration section.

use crate::schema::*;
use jetpack_common::{Color, TickDirection};

/// Default tick label font size.
pub const DEFAULT_FONT_SIZE: f64 = 18.0;

/// Default padding factor for `breathe`.
pub const DEFAULT_BREATHE_FACTOR: f64 = 0.05;

/// Default colour for `setcolor`.
pub const DEFAULT_COLOR: Color = Color::DARK_GRAY;

impl Default for Config {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            color: DEFAULT_COLOR,
            breathe: BreatheConfig::default(),
            spines: SpinesConfig::default(),
            preset: PresetConfig::default(),
        }
    }
}

impl Default for BreatheConfig {
    fn default() -> Self {
        Self {
            factor: DEFAULT_BREATHE_FACTOR,
            direction: TickDirection::Out,
        }
    }
}

impl Default for SpinesConfig {
    fn default() -> Self {
        Self {
            left: false,
            bottom: false,
            top: true,
            right: true,
        }
    }
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            font_size: false,
            breathe: true,
            color: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: true,
            file_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_spines_hide_top_and_right() {
        let spines = SpinesConfig::default();
        assert!(spines.top && spines.right);
        assert!(!spines.left && !spines.bottom);
    }
}
