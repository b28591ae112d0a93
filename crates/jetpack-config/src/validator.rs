//! Runtime validation of loaded configuration.

use crate::schema::Config;
use jetpack_common::Result;
use tracing::debug;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        config.validate()?;
        debug!(
            font_size = config.style.font_size,
            factor = config.style.breathe.factor,
            color = %config.style.color,
            "configuration validated"
        );
        Ok(())
    }
}
