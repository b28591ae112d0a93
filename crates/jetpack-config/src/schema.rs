//! Configuration schema definitions using serde.

use jetpack_common::{validate_level, Color, JetpackError, LoggingConfig, TickDirection};
use serde::{Deserialize, Serialize};

/// Main configuration structure for Jetpack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Styling defaults.
    pub style: StyleConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Defaults used by the styling operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Tick label font size used by `setfontsize`.
    pub font_size: f64,
    /// Colour used by `setcolor`.
    pub color: Color,
    /// Padding configuration.
    pub breathe: BreatheConfig,
    /// Spines hidden by `nospines`.
    pub spines: SpinesConfig,
    /// Which operations the preset applies.
    pub preset: PresetConfig,
}

/// Padding configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreatheConfig {
    /// Fraction of the data range added on each side.
    pub factor: f64,
    /// Tick direction applied after padding.
    pub direction: TickDirection,
}

/// Which spines to hide; `true` hides the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinesConfig {
    /// Hide the left spine.
    pub left: bool,
    /// Hide the bottom spine.
    pub bottom: bool,
    /// Hide the top spine.
    pub top: bool,
    /// Hide the right spine.
    pub right: bool,
}

/// Steps run by the configured preset, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetConfig {
    /// Resize tick labels.
    pub font_size: bool,
    /// Pad the axes.
    pub breathe: bool,
    /// Recolour ticks and labels.
    pub color: bool,
}

/// Logging configuration as it appears in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `jetpack_chart=debug`.
    pub level: String,
    /// One JSON object per log line.
    pub json_format: bool,
    /// Pretty multi-line output.
    pub pretty_format: bool,
    /// Log file; stdout when absent.
    pub file_path: Option<String>,
}

impl From<&LoggingSettings> for LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            json_format: settings.json_format,
            pretty_format: settings.pretty_format,
            file_path: settings.file_path.clone(),
            ..Self::default()
        }
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), JetpackError> {
        let style = &self.style;

        if !(style.font_size.is_finite() && style.font_size > 0.0) {
            return Err(JetpackError::validation_field(
                format!("font size must be positive, got {}", style.font_size),
                "style.font_size",
            ));
        }

        if !(style.breathe.factor.is_finite() && style.breathe.factor >= 0.0) {
            return Err(JetpackError::validation_field(
                format!(
                    "breathe factor must be a non-negative number, got {}",
                    style.breathe.factor
                ),
                "style.breathe.factor",
            ));
        }

        validate_level(&self.logging.level)?;

        Ok(())
    }
}
