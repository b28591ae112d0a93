//! Resolving which figure and axes a styling call works on.

use crate::axes::Axes;
use crate::context::PlotContext;
use crate::figure::{Figure, SubplotSpec};
use jetpack_common::{JetpackError, Result};
use tracing::{debug, trace};

/// The axes and/or figure a styling call was given.
///
/// Either may be left out; [`resolve`] fills in the rest.
#[derive(Debug, Clone, Default)]
pub struct Target {
    axes: Option<Axes>,
    figure: Option<Figure>,
}

impl Target {
    /// Nothing named: use (or create) the current axes.
    pub const fn none() -> Self {
        Self {
            axes: None,
            figure: None,
        }
    }

    /// Work on `axes`; its figure is looked up from the axes.
    pub const fn from_axes(axes: Axes) -> Self {
        Self {
            axes: Some(axes),
            figure: None,
        }
    }

    /// Work on `figure`'s current axes, or a new axes on it.
    pub const fn from_figure(figure: Figure) -> Self {
        Self {
            axes: None,
            figure: Some(figure),
        }
    }

    /// Names the axes.
    #[must_use]
    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes = Some(axes);
        self
    }

    /// Names the figure.
    #[must_use]
    pub fn with_figure(mut self, figure: Figure) -> Self {
        self.figure = Some(figure);
        self
    }

    /// The named axes.
    pub const fn axes(&self) -> Option<&Axes> {
        self.axes.as_ref()
    }

    /// The named figure.
    pub const fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }
}

impl From<Axes> for Target {
    fn from(axes: Axes) -> Self {
        Self::from_axes(axes)
    }
}

impl From<&Axes> for Target {
    fn from(axes: &Axes) -> Self {
        Self::from_axes(axes.clone())
    }
}

impl From<&Figure> for Target {
    fn from(figure: &Figure) -> Self {
        Self::from_figure(figure.clone())
    }
}

/// What to do when no axes is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Create a figure (if none is named) and add a single subplot to it.
    CreateIfAbsent,
    /// Bind to the current axes; fail with [`JetpackError::NoCurrentAxes`]
    /// rather than create anything.
    NeverCreate,
}

/// Turns a [`Target`] into a concrete `(figure, axes)` pair.
///
/// - axes and figure named: used as given.
/// - only axes named: the figure is the one holding the axes.
/// - no axes, [`Resolution::CreateIfAbsent`]: a new single-subplot axes on
///   the named figure, or on a new figure registered with `ctx`.
/// - no axes, [`Resolution::NeverCreate`]: the current axes of the named
///   figure, or of `ctx`'s current figure.
pub fn resolve(
    ctx: &mut PlotContext,
    target: Target,
    resolution: Resolution,
) -> Result<(Figure, Axes)> {
    match (target.axes, target.figure) {
        (Some(axes), Some(figure)) => {
            trace!(figure = %figure.id(), "using named axes and figure");
            Ok((figure, axes))
        }
        (Some(axes), None) => {
            let figure = axes.figure()?;
            trace!(figure = %figure.id(), "using named axes");
            Ok((figure, axes))
        }
        (None, figure) => match resolution {
            Resolution::CreateIfAbsent => {
                let figure = figure.unwrap_or_else(|| ctx.figure());
                let axes = figure.add_subplot(SubplotSpec::single());
                debug!(figure = %figure.id(), "created axes for styling");
                Ok((figure, axes))
            }
            Resolution::NeverCreate => {
                let figure = match figure {
                    Some(figure) => figure,
                    None => ctx.current_figure().ok_or(JetpackError::NoCurrentAxes)?,
                };
                let axes = figure.current_axes().ok_or(JetpackError::NoCurrentAxes)?;
                trace!(figure = %figure.id(), "using current axes");
                Ok((figure, axes))
            }
        },
    }
}
