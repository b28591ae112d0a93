//! The axis styling helpers.
//!
//! Each public function resolves its [`Target`], applies one cosmetic change
//! to the axes under a single write lock and returns the axes for chaining.
//! The `*_state` variants do the same work on an already locked
//! [`AxesState`].

use crate::axes::{Axes, AxesState};
use crate::axis::AxisKind;
use crate::context::PlotContext;
use crate::interval::Interval;
use crate::resolve::{resolve, Resolution, Target};
use crate::spine::Side;
use jetpack_common::{format_tick_label, Color, Result, TickDirection};
use jetpack_config::{BreatheConfig, SpinesConfig, DEFAULT_BREATHE_FACTOR};
use tracing::{debug, trace};

/// Which spines [`nospines`] hides; `true` hides the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpineMask {
    /// Hide the left spine.
    pub left: bool,
    /// Hide the bottom spine.
    pub bottom: bool,
    /// Hide the top spine.
    pub top: bool,
    /// Hide the right spine.
    pub right: bool,
}

impl SpineMask {
    /// Whether `side` is hidden.
    pub const fn hides(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }
}

impl Default for SpineMask {
    /// Hide top and right, keep left and bottom.
    fn default() -> Self {
        Self {
            left: false,
            bottom: false,
            top: true,
            right: true,
        }
    }
}

impl From<SpinesConfig> for SpineMask {
    fn from(config: SpinesConfig) -> Self {
        Self {
            left: config.left,
            bottom: config.bottom,
            top: config.top,
            right: config.right,
        }
    }
}

/// Options for [`breathe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreatheOptions {
    /// Fraction of the data range added on each side.
    pub factor: f64,
    /// Tick direction applied afterwards.
    pub direction: TickDirection,
    /// Spines hidden afterwards.
    pub spines: SpineMask,
}

impl Default for BreatheOptions {
    fn default() -> Self {
        Self {
            factor: DEFAULT_BREATHE_FACTOR,
            direction: TickDirection::Out,
            spines: SpineMask::default(),
        }
    }
}

impl From<BreatheConfig> for BreatheOptions {
    fn from(config: BreatheConfig) -> Self {
        Self {
            factor: config.factor,
            direction: config.direction,
            spines: SpineMask::default(),
        }
    }
}

/// Resolves `target`, runs `op` on the locked axes and hands the axes back.
fn styled<F>(
    ctx: &mut PlotContext,
    target: Target,
    resolution: Resolution,
    name: &'static str,
    op: F,
) -> Result<Axes>
where
    F: FnOnce(&mut AxesState) -> Result<()>,
{
    let (figure, axes) = resolve(ctx, target, resolution)?;
    {
        let mut state = axes.write();
        op(&mut state)?;
    }
    debug!(op = name, figure = %figure.id(), "styled axes");
    Ok(axes)
}

/// Sets the tick label font size on both axes.
///
/// Labels are rewritten from the current tick positions at `size`. Creates a
/// figure and axes when `target` names none.
pub fn setfontsize(ctx: &mut PlotContext, size: f64, target: Target) -> Result<Axes> {
    styled(ctx, target, Resolution::CreateIfAbsent, "setfontsize", |state| {
        setfontsize_state(state, size);
        Ok(())
    })
}

/// [`setfontsize`] on a locked axes.
pub fn setfontsize_state(state: &mut AxesState, size: f64) {
    for kind in AxisKind::BOTH {
        let axis = state.axis_mut(kind);
        let labels: Vec<String> = axis
            .tick_positions()
            .into_iter()
            .map(format_tick_label)
            .collect();
        axis.set_ticklabels(labels, Some(size));
        axis.set_label_size(size);
    }
}

/// Removes every tick and tick label, e.g. for image axes.
pub fn noticks(ctx: &mut PlotContext, target: Target) -> Result<Axes> {
    styled(ctx, target, Resolution::NeverCreate, "noticks", |state| {
        noticks_state(state);
        Ok(())
    })
}

/// [`noticks`] on a locked axes.
pub fn noticks_state(state: &mut AxesState) {
    state.xaxis_mut().clear_ticks();
    state.yaxis_mut().clear_ticks();
}

/// Hides the spines selected by `mask` and moves ticks off hidden sides.
///
/// Per axis: both sides hidden removes the ticks, one side hidden puts the
/// ticks on the other, neither leaves them alone.
pub fn nospines(ctx: &mut PlotContext, mask: SpineMask, target: Target) -> Result<Axes> {
    styled(ctx, target, Resolution::NeverCreate, "nospines", |state| {
        nospines_state(state, mask)
    })
}

/// [`nospines`] on a locked axes.
pub fn nospines_state(state: &mut AxesState, mask: SpineMask) -> Result<()> {
    for side in Side::ALL {
        if mask.hides(side) {
            state.spine_mut(side).set_color(None);
        }
    }

    for kind in AxisKind::BOTH {
        let (low, high) = kind.sides();
        let axis = state.axis_mut(kind);
        match (mask.hides(low), mask.hides(high)) {
            (true, true) => axis.clear_ticks(),
            (false, true) => axis.set_ticks_position(low)?,
            (true, false) => axis.set_ticks_position(high)?,
            (false, false) => {}
        }
    }
    Ok(())
}

/// The meaningful extent of an axis.
///
/// Explicit spine bounds win. Otherwise the first and last ticks with a
/// non-empty label give the range, and with fewer than two labelled ticks the
/// full display limits are returned.
pub fn get_bounds(ctx: &mut PlotContext, kind: AxisKind, target: Target) -> Result<Interval> {
    let (_, axes) = resolve(ctx, target, Resolution::NeverCreate)?;
    let bounds = bounds_state(&axes.read(), kind);
    Ok(bounds)
}

/// [`get_bounds`] on a locked axes.
pub fn bounds_state(state: &AxesState, kind: AxisKind) -> Interval {
    if let Some(bounds) = state.spine(kind.bound_spine()).bounds() {
        trace!(axis = %kind, %bounds, "bounds from spine");
        return bounds;
    }

    let mut lower = None;
    let mut upper = None;
    for tick in state.axis(kind).ticks() {
        if tick.label.is_empty() {
            continue;
        }
        if lower.is_none() {
            lower = Some(tick.position);
        } else {
            upper = Some(tick.position);
        }
    }

    match (lower, upper) {
        (Some(lower), Some(upper)) => Interval::new(lower, upper),
        _ => {
            let limits = state.limits(kind);
            trace!(axis = %kind, %limits, "too few labelled ticks, using limits");
            limits
        }
    }
}

/// Pads the display limits around the data and tidies the spines.
///
/// For each axis the limits grow by `factor * range` on both sides while the
/// bottom / left spine stays drawn over the unpadded range. Then hides
/// `options.spines` and points ticks in `options.direction`.
pub fn breathe(ctx: &mut PlotContext, options: BreatheOptions, target: Target) -> Result<Axes> {
    styled(ctx, target, Resolution::NeverCreate, "breathe", |state| {
        breathe_state(state, options)
    })
}

/// [`breathe`] on a locked axes.
pub fn breathe_state(state: &mut AxesState, options: BreatheOptions) -> Result<()> {
    for kind in AxisKind::BOTH {
        let bounds = bounds_state(state, kind);
        let padded = bounds.padded(options.factor);
        state.set_limits(kind, padded.lower, padded.upper);
        state
            .spine_mut(kind.bound_spine())
            .set_bounds(bounds.lower, bounds.upper);
        trace!(axis = %kind, %bounds, limits = %padded, "padded axis");
    }

    nospines_state(state, options.spines)?;
    tickdir_state(state, options.direction);
    Ok(())
}

/// Points the tick marks of both axes in `direction`.
pub fn tickdir(ctx: &mut PlotContext, direction: TickDirection, target: Target) -> Result<Axes> {
    styled(ctx, target, Resolution::NeverCreate, "tickdir", |state| {
        tickdir_state(state, direction);
        Ok(())
    })
}

/// [`tickdir`] on a locked axes.
pub fn tickdir_state(state: &mut AxesState, direction: TickDirection) {
    for kind in AxisKind::BOTH {
        state.axis_mut(kind).set_tick_direction(direction);
    }
}

/// Uses one colour for tick marks, tick labels and axis labels of both axes.
pub fn setcolor(ctx: &mut PlotContext, color: Color, target: Target) -> Result<Axes> {
    styled(ctx, target, Resolution::NeverCreate, "setcolor", |state| {
        setcolor_state(state, color);
        Ok(())
    })
}

/// [`setcolor`] on a locked axes.
pub fn setcolor_state(state: &mut AxesState, color: Color) {
    for kind in AxisKind::BOTH {
        let axis = state.axis_mut(kind);
        axis.set_tick_colors(color);
        let text = axis.label().text.clone();
        axis.set_label(text, Some(color));
    }
}
