//! Axes: a plot region within a figure, and the shared handle to it.

use crate::axis::{Axis, AxisKind};
use crate::figure::{Figure, FigureShared, SubplotSpec};
use crate::interval::Interval;
use crate::spine::{Side, Spine, Spines};
use jetpack_common::{linspace, JetpackError, Result};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::{Arc, Weak};

/// Limits given to both axes of a new axes.
pub const DEFAULT_LIMITS: Interval = Interval::new(0.0, 1.0);

/// Number of ticks a new axes starts with on each axis.
pub const DEFAULT_TICK_COUNT: usize = 6;

/// Everything the styling helpers read and write on an axes.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesState {
    spec: SubplotSpec,
    xaxis: Axis,
    yaxis: Axis,
    spines: Spines,
    xlim: Interval,
    ylim: Interval,
}

impl AxesState {
    /// A fresh axes: unit limits, six labelled ticks per axis, all spines visible.
    pub fn new(spec: SubplotSpec) -> Self {
        let ticks = linspace(DEFAULT_LIMITS.lower, DEFAULT_LIMITS.upper, DEFAULT_TICK_COUNT);
        let mut xaxis = Axis::new(AxisKind::X);
        let mut yaxis = Axis::new(AxisKind::Y);
        xaxis.set_ticks(&ticks);
        yaxis.set_ticks(&ticks);

        Self {
            spec,
            xaxis,
            yaxis,
            spines: Spines::default(),
            xlim: DEFAULT_LIMITS,
            ylim: DEFAULT_LIMITS,
        }
    }

    /// Grid position within the figure.
    pub const fn spec(&self) -> SubplotSpec {
        self.spec
    }

    /// The horizontal axis.
    pub const fn xaxis(&self) -> &Axis {
        &self.xaxis
    }

    /// Mutable horizontal axis.
    pub fn xaxis_mut(&mut self) -> &mut Axis {
        &mut self.xaxis
    }

    /// The vertical axis.
    pub const fn yaxis(&self) -> &Axis {
        &self.yaxis
    }

    /// Mutable vertical axis.
    pub fn yaxis_mut(&mut self) -> &mut Axis {
        &mut self.yaxis
    }

    /// The axis selected by `kind`.
    pub const fn axis(&self, kind: AxisKind) -> &Axis {
        match kind {
            AxisKind::X => &self.xaxis,
            AxisKind::Y => &self.yaxis,
        }
    }

    /// Mutable axis selected by `kind`.
    pub fn axis_mut(&mut self, kind: AxisKind) -> &mut Axis {
        match kind {
            AxisKind::X => &mut self.xaxis,
            AxisKind::Y => &mut self.yaxis,
        }
    }

    /// All four spines.
    pub const fn spines(&self) -> &Spines {
        &self.spines
    }

    /// The spine on `side`.
    pub const fn spine(&self, side: Side) -> &Spine {
        self.spines.get(side)
    }

    /// Mutable spine on `side`.
    pub fn spine_mut(&mut self, side: Side) -> &mut Spine {
        self.spines.get_mut(side)
    }

    /// Display limits of the axis selected by `kind`.
    pub const fn limits(&self, kind: AxisKind) -> Interval {
        match kind {
            AxisKind::X => self.xlim,
            AxisKind::Y => self.ylim,
        }
    }

    /// Sets the display limits of the axis selected by `kind`.
    pub fn set_limits(&mut self, kind: AxisKind, lower: f64, upper: f64) {
        let limits = Interval::new(lower, upper);
        match kind {
            AxisKind::X => self.xlim = limits,
            AxisKind::Y => self.ylim = limits,
        }
    }

    /// Horizontal display limits.
    pub const fn xlim(&self) -> Interval {
        self.xlim
    }

    /// Sets the horizontal display limits.
    pub fn set_xlim(&mut self, lower: f64, upper: f64) {
        self.set_limits(AxisKind::X, lower, upper);
    }

    /// Vertical display limits.
    pub const fn ylim(&self) -> Interval {
        self.ylim
    }

    /// Sets the vertical display limits.
    pub fn set_ylim(&mut self, lower: f64, upper: f64) {
        self.set_limits(AxisKind::Y, lower, upper);
    }
}

/// Shared handle to an axes.
///
/// Clones refer to the same axes. The handle keeps a weak link to its figure:
/// the figure owns its axes, not the other way round.
#[derive(Debug, Clone)]
pub struct Axes {
    state: Arc<RwLock<AxesState>>,
    figure: Weak<FigureShared>,
}

impl Axes {
    pub(crate) fn new(spec: SubplotSpec, figure: Weak<FigureShared>) -> Self {
        Self {
            state: Arc::new(RwLock::new(AxesState::new(spec))),
            figure,
        }
    }

    /// Locks the axes for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, AxesState> {
        self.state.read()
    }

    /// Locks the axes for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, AxesState> {
        self.state.write()
    }

    /// The figure holding this axes.
    pub fn figure(&self) -> Result<Figure> {
        self.figure
            .upgrade()
            .map(Figure::from_shared)
            .ok_or(JetpackError::DetachedAxes)
    }

    /// Whether both handles refer to the same axes.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.state, &b.state)
    }
}
