//! # Jetpack Chart
//!
//! Cosmetic styling helpers for 2-D chart axes.
//!
//! The crate carries a minimal in-memory figure/axes model (ticks, tick
//! labels, spines, limits and axis labels) and a set of free functions that
//! restyle an axes and hand it back for chaining:
//!
//! | function        | effect                                              |
//! |-----------------|-----------------------------------------------------|
//! | [`setfontsize`] | tick label font size on both axes                   |
//! | [`noticks`]     | remove every tick and tick label                    |
//! | [`nospines`]    | hide spines and move ticks off the hidden sides     |
//! | [`get_bounds`]  | the meaningful extent of an axis                    |
//! | [`breathe`]     | pad the limits while keeping the spines at the data |
//! | [`tickdir`]     | point ticks in or out                               |
//! | [`setcolor`]    | one colour for ticks, tick labels and axis labels   |
//!
//! Every function takes the explicit [`PlotContext`] and a [`Target`] naming
//! the axes and/or figure to work on. Missing pieces are filled in by
//! [`resolve`]: `setfontsize` creates a figure and axes when none is given,
//! the rest bind to the context's current axes and never create one.
//!
//! ```
//! use jetpack_chart::{breathe, nospines, setcolor, BreatheOptions, PlotContext, SpineMask, Target};
//! use jetpack_common::Color;
//!
//! # fn main() -> jetpack_common::Result<()> {
//! let mut ctx = PlotContext::new();
//! let figure = ctx.figure();
//! let axes = figure.add_subplot(jetpack_chart::SubplotSpec::single());
//!
//! breathe(&mut ctx, BreatheOptions::default(), Target::none())?;
//! let axes = setcolor(&mut ctx, Color::DARK_GRAY, Target::from(&axes))?;
//! nospines(&mut ctx, SpineMask::default(), Target::from(&axes))?;
//! assert!(!axes.read().spines().top.is_visible());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod axes;
pub mod axis;
pub mod context;
pub mod figure;
pub mod interval;
pub mod resolve;
pub mod spine;
pub mod style;
pub mod styler;
pub mod text;

pub use axes::*;
pub use axis::*;
pub use context::*;
pub use figure::*;
pub use interval::*;
pub use resolve::*;
pub use spine::*;
pub use style::*;
pub use styler::*;
pub use text::*;
