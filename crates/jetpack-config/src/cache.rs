//! Thread-safe configuration caching with arc-swap for lock-free reads.

use crate::loader::ConfigLoader;
use crate::schema::Config;
use arc_swap::ArcSwap;
use jetpack_common::Result;
use std::sync::Arc;
use tracing::info;

/// Thread-safe configuration cache using arc-swap for lock-free reads.
pub struct ConfigCache {
    config: ArcSwap<Config>,
}

impl ConfigCache {
    /// Creates a new configuration cache with the given initial configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Updates the configuration atomically.
    pub fn update(&self, config: Config) {
        self.config.store(Arc::new(config));
    }

    /// Re-reads the loader's file and swaps it in.
    ///
    /// On failure the cached configuration is left untouched.
    pub fn reload(&self, loader: &ConfigLoader) -> Result<()> {
        let config = loader.load_file()?;
        self.update(config);
        info!(path = %loader.path().display(), "configuration reloaded");
        Ok(())
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
