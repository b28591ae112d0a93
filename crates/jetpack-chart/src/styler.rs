//! Styling with defaults taken from the loaded configuration.

use crate::axes::Axes;
use crate::context::PlotContext;
use crate::resolve::{resolve, Resolution, Target};
use crate::style::{
    breathe, breathe_state, nospines, setcolor, setcolor_state, setfontsize, setfontsize_state,
    BreatheOptions, SpineMask,
};
use jetpack_common::Result;
use jetpack_config::{Config, ConfigCache, StyleConfig};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Applies the styling helpers with the current configuration's defaults.
///
/// The configuration is read from the cache on every call, so updates made
/// through [`ConfigCache::update`] or [`ConfigCache::reload`] apply to the
/// next call.
#[derive(Clone)]
pub struct Styler {
    cache: Arc<ConfigCache>,
}

impl Styler {
    /// A styler reading from a shared cache.
    pub const fn new(cache: Arc<ConfigCache>) -> Self {
        Self { cache }
    }

    /// A styler with its own cache holding `config`.
    pub fn from_config(config: Config) -> Self {
        Self::new(Arc::new(ConfigCache::new(config)))
    }

    /// The configuration calls will use right now.
    pub fn config(&self) -> Arc<Config> {
        self.cache.get()
    }

    fn breathe_options(style: &StyleConfig) -> BreatheOptions {
        BreatheOptions {
            spines: SpineMask::from(style.spines),
            ..BreatheOptions::from(style.breathe)
        }
    }

    /// [`setfontsize`] with the configured size.
    pub fn setfontsize(&self, ctx: &mut PlotContext, target: Target) -> Result<Axes> {
        setfontsize(ctx, self.config().style.font_size, target)
    }

    /// [`nospines`] with the configured spine mask.
    pub fn nospines(&self, ctx: &mut PlotContext, target: Target) -> Result<Axes> {
        nospines(ctx, SpineMask::from(self.config().style.spines), target)
    }

    /// [`breathe`] with the configured factor, direction and spine mask.
    pub fn breathe(&self, ctx: &mut PlotContext, target: Target) -> Result<Axes> {
        let options = Self::breathe_options(&self.config().style);
        breathe(ctx, options, target)
    }

    /// [`setcolor`] with the configured colour.
    pub fn setcolor(&self, ctx: &mut PlotContext, target: Target) -> Result<Axes> {
        setcolor(ctx, self.config().style.color, target)
    }

    /// Runs the configured preset on one axes: font size, then padding, then
    /// colour, each only if enabled.
    ///
    /// The axes is created when needed only if the preset sizes fonts, the
    /// one step that may create axes on its own.
    #[instrument(level = "debug", skip_all)]
    pub fn apply(&self, ctx: &mut PlotContext, target: Target) -> Result<Axes> {
        let config = self.config();
        let style = &config.style;
        let resolution = if style.preset.font_size {
            Resolution::CreateIfAbsent
        } else {
            Resolution::NeverCreate
        };
        let (figure, axes) = resolve(ctx, target, resolution)?;

        {
            let mut state = axes.write();
            if style.preset.font_size {
                setfontsize_state(&mut state, style.font_size);
            }
            if style.preset.breathe {
                breathe_state(&mut state, Self::breathe_options(style))?;
            }
            if style.preset.color {
                setcolor_state(&mut state, style.color);
            }
        }

        debug!(
            figure = %figure.id(),
            font_size = style.preset.font_size,
            breathe = style.preset.breathe,
            color = style.preset.color,
            "applied preset"
        );
        Ok(axes)
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
