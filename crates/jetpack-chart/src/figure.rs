//! Figures: drawing surfaces holding one or more axes.

use crate::axes::Axes;
use jetpack_common::{JetpackError, Result};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Number identifying a figure within a [`crate::PlotContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(pub u32);

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an axes in a `rows x cols` grid, `index` counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubplotSpec {
    rows: u16,
    cols: u16,
    index: u16,
}

impl SubplotSpec {
    /// Validates and builds a grid position.
    pub fn new(rows: u16, cols: u16, index: u16) -> Result<Self> {
        let cells = u32::from(rows) * u32::from(cols);
        if rows == 0 || cols == 0 {
            return Err(JetpackError::validation_field(
                format!("subplot grid {rows}x{cols} is empty"),
                "subplot",
            ));
        }
        if index == 0 || u32::from(index) > cells {
            return Err(JetpackError::validation_field(
                format!("subplot index {index} outside 1..={cells}"),
                "subplot",
            ));
        }
        Ok(Self { rows, cols, index })
    }

    /// The single full-figure axes, `111`.
    pub const fn single() -> Self {
        Self {
            rows: 1,
            cols: 1,
            index: 1,
        }
    }

    /// Parses the three-digit shorthand, e.g. `221` for the first cell of a 2x2 grid.
    pub fn from_code(code: u16) -> Result<Self> {
        if !(100..=999).contains(&code) {
            return Err(JetpackError::validation_field(
                format!("subplot code {code} must have three digits"),
                "subplot",
            ));
        }
        Self::new(code / 100, code / 10 % 10, code % 10)
    }

    /// Grid rows.
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Grid columns.
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// One-based cell index.
    pub const fn index(&self) -> u16 {
        self.index
    }
}

impl Default for SubplotSpec {
    fn default() -> Self {
        Self::single()
    }
}

#[derive(Debug, Default)]
pub(crate) struct FigureState {
    axes: Vec<Axes>,
    current: Option<usize>,
}

#[derive(Debug)]
pub(crate) struct FigureShared {
    id: FigureId,
    state: RwLock<FigureState>,
}

/// Shared handle to a figure.
#[derive(Debug, Clone)]
pub struct Figure {
    shared: Arc<FigureShared>,
}

impl Figure {
    /// An empty figure. Figures made through [`crate::PlotContext::figure`]
    /// are numbered and tracked by the context; this one is not.
    pub fn new(id: FigureId) -> Self {
        Self {
            shared: Arc::new(FigureShared {
                id,
                state: RwLock::new(FigureState::default()),
            }),
        }
    }

    pub(crate) const fn from_shared(shared: Arc<FigureShared>) -> Self {
        Self { shared }
    }

    /// The figure number.
    pub fn id(&self) -> FigureId {
        self.shared.id
    }

    /// Adds an axes at `spec` and makes it the current axes.
    pub fn add_subplot(&self, spec: SubplotSpec) -> Axes {
        let axes = Axes::new(spec, Arc::downgrade(&self.shared));
        let mut state = self.shared.state.write();
        state.axes.push(axes.clone());
        state.current = Some(state.axes.len() - 1);
        debug!(
            figure = %self.shared.id,
            rows = spec.rows(),
            cols = spec.cols(),
            index = spec.index(),
            "added subplot"
        );
        axes
    }

    /// All axes in creation order.
    pub fn axes(&self) -> Vec<Axes> {
        self.shared.state.read().axes.clone()
    }

    /// The axes styling calls bind to when none is named.
    pub fn current_axes(&self) -> Option<Axes> {
        let state = self.shared.state.read();
        state.current.and_then(|i| state.axes.get(i).cloned())
    }

    /// Makes `axes`, which must belong to this figure, the current axes.
    pub fn set_current_axes(&self, axes: &Axes) -> Result<()> {
        let mut state = self.shared.state.write();
        let index = state
            .axes
            .iter()
            .position(|candidate| Axes::ptr_eq(candidate, axes))
            .ok_or_else(|| {
                JetpackError::validation(format!(
                    "axes does not belong to figure {}",
                    self.shared.id
                ))
            })?;
        state.current = Some(index);
        Ok(())
    }

    /// Whether `axes` belongs to this figure.
    pub fn contains(&self, axes: &Axes) -> bool {
        self.shared
            .state
            .read()
            .axes
            .iter()
            .any(|candidate| Axes::ptr_eq(candidate, axes))
    }

    /// Whether both handles refer to the same figure.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.shared, &b.shared)
    }
}
