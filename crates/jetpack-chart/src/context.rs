//! The explicit plotting context: open figures and which one is current.

use crate::axes::Axes;
use crate::figure::{Figure, FigureId};
use jetpack_common::{JetpackError, Result};
use tracing::debug;

/// Open figures and the current figure.
///
/// Styling calls that are not told which axes to use bind to
/// `current_axes()`. The context is a plain value owned by the caller; there
/// is no process-wide current figure.
#[derive(Debug, Default)]
pub struct PlotContext {
    figures: Vec<Figure>,
    current: Option<usize>,
    last_id: u32,
}

impl PlotContext {
    /// An empty context with no figures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new figure, registers it and makes it current.
    pub fn figure(&mut self) -> Figure {
        let figure = Figure::new(self.next_id());
        self.figures.push(figure.clone());
        self.current = Some(self.figures.len() - 1);
        debug!(figure = %figure.id(), "created figure");
        figure
    }

    /// The current figure, if any. Never creates one.
    pub fn current_figure(&self) -> Option<Figure> {
        self.current.and_then(|i| self.figures.get(i).cloned())
    }

    /// The current axes of the current figure, if any. Never creates one.
    pub fn current_axes(&self) -> Option<Axes> {
        self.current_figure()?.current_axes()
    }

    /// Makes `figure` current, registering it if the context did not know it.
    ///
    /// Open figures have distinct ids: registering a figure whose id is
    /// already held by another open figure fails.
    pub fn set_current_figure(&mut self, figure: &Figure) -> Result<()> {
        let index = match self.index_of(figure) {
            Some(index) => index,
            None => {
                self.check_id_free(figure.id())?;
                self.last_id = self.last_id.max(figure.id().0);
                self.figures.push(figure.clone());
                self.figures.len() - 1
            }
        };
        self.current = Some(index);
        Ok(())
    }

    /// Makes `axes` current in its figure and that figure current here.
    pub fn set_current_axes(&mut self, axes: &Axes) -> Result<()> {
        let figure = axes.figure()?;
        if self.index_of(&figure).is_none() {
            self.check_id_free(figure.id())?;
        }
        figure.set_current_axes(axes)?;
        self.set_current_figure(&figure)
    }

    /// Forgets `figure`; the most recently opened remaining figure becomes
    /// current. Returns whether the figure was open.
    pub fn close(&mut self, figure: &Figure) -> bool {
        let Some(index) = self.index_of(figure) else {
            return false;
        };
        self.figures.remove(index);
        self.current = self.figures.len().checked_sub(1);
        debug!(figure = %figure.id(), remaining = self.figures.len(), "closed figure");
        true
    }

    /// All open figures in opening order.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Number of open figures.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Whether no figure is open.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// The id after the highest one handed out or registered. Once `u32::MAX`
    /// is taken, falls back to the lowest id no open figure holds.
    fn next_id(&mut self) -> FigureId {
        if let Some(id) = self.last_id.checked_add(1) {
            self.last_id = id;
            return FigureId(id);
        }
        let free = (1..=u32::MAX).find(|&id| !self.holds_id(FigureId(id)));
        FigureId(free.unwrap_or(0))
    }

    fn holds_id(&self, id: FigureId) -> bool {
        self.figures.iter().any(|figure| figure.id() == id)
    }

    fn check_id_free(&self, id: FigureId) -> Result<()> {
        if self.holds_id(id) {
            return Err(JetpackError::validation_field(
                format!("figure {id} is already open"),
                "figure",
            ));
        }
        Ok(())
    }

    fn index_of(&self, figure: &Figure) -> Option<usize> {
        self.figures
            .iter()
            .position(|candidate| Figure::ptr_eq(candidate, figure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::SubplotSpec;

    #[test]
    fn test_empty_context_has_nothing_current() {
        let ctx = PlotContext::new();
        assert!(ctx.is_empty());
        assert!(ctx.current_figure().is_none());
        assert!(ctx.current_axes().is_none());
    }

    #[test]
    fn test_figures_are_numbered_and_current() {
        let mut ctx = PlotContext::new();
        let first = ctx.figure();
        let second = ctx.figure();

        assert_eq!(first.id(), FigureId(1));
        assert_eq!(second.id(), FigureId(2));
        assert!(Figure::ptr_eq(&ctx.current_figure().unwrap(), &second));
        // a figure without axes has no current axes
        assert!(ctx.current_axes().is_none());
    }

    #[test]
    fn test_set_current_axes_switches_figure() {
        let mut ctx = PlotContext::new();
        let first = ctx.figure();
        let axes = first.add_subplot(SubplotSpec::single());
        let _second = ctx.figure();

        ctx.set_current_axes(&axes).unwrap();

        assert!(Figure::ptr_eq(&ctx.current_figure().unwrap(), &first));
        assert!(Axes::ptr_eq(&ctx.current_axes().unwrap(), &axes));
    }

    #[test]
    fn test_set_current_axes_registers_foreign_figure() {
        let mut ctx = PlotContext::new();
        let outside = Figure::new(FigureId(42));
        let axes = outside.add_subplot(SubplotSpec::single());

        ctx.set_current_axes(&axes).unwrap();

        assert_eq!(ctx.len(), 1);
        assert!(Axes::ptr_eq(&ctx.current_axes().unwrap(), &axes));
    }

    #[test]
    fn test_duplicate_figure_id_is_rejected() {
        let mut ctx = PlotContext::new();
        let first = ctx.figure();
        let first_axes = first.add_subplot(SubplotSpec::single());
        let clash = Figure::new(FigureId(1));
        let clash_axes = clash.add_subplot(SubplotSpec::single());

        assert!(matches!(
            ctx.set_current_axes(&clash_axes),
            Err(JetpackError::Validation { .. })
        ));
        assert!(ctx.set_current_figure(&clash).is_err());

        assert_eq!(ctx.len(), 1);
        assert!(Axes::ptr_eq(&ctx.current_axes().unwrap(), &first_axes));
        // re-selecting an already open figure is fine
        ctx.set_current_figure(&first).unwrap();
    }

    #[test]
    fn test_ids_continue_after_exhausted_counter() {
        let mut ctx = PlotContext::new();
        let first = ctx.figure();
        let top = Figure::new(FigureId(u32::MAX));
        ctx.set_current_figure(&top).unwrap();

        let next = ctx.figure();
        assert_eq!(next.id(), FigureId(2));
        let after = ctx.figure();
        assert_eq!(after.id(), FigureId(3));

        ctx.close(&first);
        assert_eq!(ctx.figure().id(), FigureId(1));
        assert_eq!(ctx.len(), 4);
    }

    #[test]
    fn test_close() {
        let mut ctx = PlotContext::new();
        let first = ctx.figure();
        let second = ctx.figure();

        assert!(ctx.close(&second));
        assert!(!ctx.close(&second));
        assert!(Figure::ptr_eq(&ctx.current_figure().unwrap(), &first));

        assert!(ctx.close(&first));
        assert!(ctx.current_figure().is_none());
    }
}
