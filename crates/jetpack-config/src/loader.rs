//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use jetpack_common::{Color, JetpackError, TickDirection};
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "JETPACK_CONFIG_PATH";

/// File names probed in the working directory, in order.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["jetpack.yaml", "jetpack.yml", "jetpack.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading or writing the configuration file
    #[error("Failed to access configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or writing error
    #[error("Failed to process YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML writing error
    #[error("Failed to write TOML configuration: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(#[source] JetpackError),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Unrecognised file extension
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl From<ConfigError> for JetpackError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation(inner) => inner,
            err @ (ConfigError::Yaml(_)
            | ConfigError::TomlParse(_)
            | ConfigError::TomlWrite(_)) => Self::serialization_with_source(err.to_string(), err),
            other => Self::config_with_source(other.to_string(), other),
        }
    }
}

/// On-disk configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl ConfigFormat {
    /// Picks a format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parses configuration text in this format.
    pub fn parse(self, content: &str) -> Result<Config, ConfigError> {
        Ok(match self {
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
        })
    }

    /// Renders configuration text in this format.
    pub fn render(self, config: &Config) -> Result<String, ConfigError> {
        Ok(match self {
            Self::Yaml => serde_yaml::to_string(config)?,
            Self::Toml => toml::to_string_pretty(config)?,
        })
    }
}

/// Configuration loader with atomic file operations.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this loader reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from file, applies environment overrides and validates it.
    pub fn load_file(&self) -> Result<Config, ConfigError> {
        let format = ConfigFormat::from_path(&self.path)?;
        let content = std::fs::read_to_string(&self.path)?;
        let mut config = format.parse(&content)?;

        apply_env_overrides(&mut config)?;
        config.validate().map_err(ConfigError::Validation)?;

        info!(path = %self.path.display(), "loaded configuration");
        Ok(config)
    }

    /// Saves configuration to file atomically.
    ///
    /// The text is written to a temporary file next to the target and then
    /// renamed over it, so readers never observe a partial file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let format = ConfigFormat::from_path(&self.path)?;
        let rendered = format.render(config)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(rendered.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| ConfigError::Io(e.error))?;

        debug!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    /// Load configuration from environment variables and files
    ///
    /// Uses `JETPACK_CONFIG_PATH` when set, otherwise the first of
    /// [`DEFAULT_CONFIG_FILES`] present in the working directory, otherwise
    /// the defaults. Environment overrides apply in every case.
    pub fn load() -> jetpack_common::Result<Config> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Ok(Self::new(path).load_file()?);
        }

        if let Some(found) = DEFAULT_CONFIG_FILES
            .into_iter()
            .map(Path::new)
            .find(|candidate| candidate.exists())
        {
            return Ok(Self::new(found).load_file()?);
        }

        debug!("no configuration file found, using defaults");
        let mut config = Config::default();
        apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_env<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::EnvParse {
                var: var.to_string(),
                source: Box::new(e),
            }),
        Err(_) => Ok(None),
    }
}

/// Apply environment variable overrides to configuration
pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
    if let Some(size) = parse_env::<f64>("JETPACK_FONT_SIZE")? {
        config.style.font_size = size;
    }

    if let Some(factor) = parse_env::<f64>("JETPACK_BREATHE_FACTOR")? {
        config.style.breathe.factor = factor;
    }

    if let Some(direction) = parse_env::<TickDirection>("JETPACK_TICK_DIRECTION")? {
        config.style.breathe.direction = direction;
    }

    if let Some(color) = parse_env::<Color>("JETPACK_COLOR")? {
        config.style.color = color;
    }

    if let Ok(level) = env::var("JETPACK_LOG_LEVEL") {
        config.logging.level = level;
    }

    Ok(())
}
