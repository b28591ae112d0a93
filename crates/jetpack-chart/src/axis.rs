//! Tick marks, tick labels and the axis label of one axis.

use crate::spine::Side;
use crate::text::{Text, DEFAULT_FONT_SIZE};
use jetpack_common::{format_tick_label, Color, JetpackError, Result, TickDirection};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Selects the horizontal or vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl AxisKind {
    /// Both axes, x first.
    pub const BOTH: [Self; 2] = [Self::X, Self::Y];

    /// The spine whose bounds describe this axis' extent.
    pub const fn bound_spine(&self) -> Side {
        match self {
            Self::X => Side::Bottom,
            Self::Y => Side::Left,
        }
    }

    /// The two sides this axis can put its ticks on, low side first.
    pub const fn sides(&self) -> (Side, Side) {
        match self {
            Self::X => (Side::Bottom, Side::Top),
            Self::Y => (Side::Left, Side::Right),
        }
    }

    /// Lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl FromStr for AxisKind {
    type Err = JetpackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            other => Err(JetpackError::validation_field(
                format!("unknown axis {other:?}, expected \"x\" or \"y\""),
                "axis",
            )),
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled position along an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Data coordinate of the tick.
    pub position: f64,
    /// Label drawn next to the tick; empty for an unlabelled tick.
    pub label: Text,
}

/// Appearance shared by all ticks of an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickParams {
    /// Which way the marks point.
    pub direction: TickDirection,
    /// Colour of the marks.
    pub color: Color,
    /// Colour given to new tick labels.
    pub label_color: Color,
    /// Font size given to new tick labels.
    pub label_size: f64,
}

impl Default for TickParams {
    fn default() -> Self {
        Self {
            direction: TickDirection::Out,
            color: Color::BLACK,
            label_color: Color::BLACK,
            label_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// One axis of an axes: its ticks, tick appearance and label.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    kind: AxisKind,
    ticks: Vec<Tick>,
    params: TickParams,
    position: Option<Side>,
    label: Text,
}

impl Axis {
    /// An axis with no ticks and an empty label.
    pub fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            ticks: Vec::new(),
            params: TickParams::default(),
            position: None,
            label: Text::default(),
        }
    }

    /// Horizontal or vertical.
    pub const fn kind(&self) -> AxisKind {
        self.kind
    }

    /// The ticks in order.
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Tick positions in order.
    pub fn tick_positions(&self) -> Vec<f64> {
        self.ticks.iter().map(|tick| tick.position).collect()
    }

    /// Tick label texts in order, parallel to [`Self::tick_positions`].
    pub fn tick_labels(&self) -> impl Iterator<Item = &Text> {
        self.ticks.iter().map(|tick| &tick.label)
    }

    /// Replaces all ticks; each is labelled with its formatted position.
    pub fn set_ticks(&mut self, positions: &[f64]) {
        let params = self.params;
        self.ticks = positions
            .iter()
            .map(|&position| Tick {
                position,
                label: Text::new(format_tick_label(position))
                    .with_size(params.label_size)
                    .with_color(params.label_color),
            })
            .collect();
        trace!(axis = %self.kind, count = self.ticks.len(), "ticks replaced");
    }

    /// Removes every tick and tick label.
    pub fn clear_ticks(&mut self) {
        self.ticks.clear();
    }

    /// Relabels the existing ticks in order.
    ///
    /// Ticks beyond the supplied labels get an empty label and surplus labels
    /// are ignored. With `font_size`, every label is resized as well.
    pub fn set_ticklabels<I, S>(&mut self, labels: I, font_size: Option<f64>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels = labels.into_iter();
        for tick in &mut self.ticks {
            tick.label.text = labels.next().map(Into::into).unwrap_or_default();
            if let Some(size) = font_size {
                tick.label.font_size = size;
            }
        }
    }

    /// Tick appearance.
    pub const fn params(&self) -> &TickParams {
        &self.params
    }

    /// Sets the direction of the tick marks.
    pub fn set_tick_direction(&mut self, direction: TickDirection) {
        self.params.direction = direction;
    }

    /// Sets the mark colour and the label colour, existing labels included.
    pub fn set_tick_colors(&mut self, color: Color) {
        self.params.color = color;
        self.params.label_color = color;
        for tick in &mut self.ticks {
            tick.label.color = color;
        }
    }

    /// Sets the font size given to labels created from now on.
    pub fn set_label_size(&mut self, size: f64) {
        self.params.label_size = size;
    }

    /// The side ticks are drawn on; `None` keeps the default placement.
    pub const fn ticks_position(&self) -> Option<Side> {
        self.position
    }

    /// Puts the ticks on `side`, which must belong to this axis.
    pub fn set_ticks_position(&mut self, side: Side) -> Result<()> {
        let (low, high) = self.kind.sides();
        if side != low && side != high {
            return Err(JetpackError::validation_field(
                format!("{} axis cannot put ticks on the {side} side", self.kind),
                "side",
            ));
        }
        self.position = Some(side);
        Ok(())
    }

    /// The axis label.
    pub const fn label(&self) -> &Text {
        &self.label
    }

    /// Sets the axis label text, and its colour when given.
    pub fn set_label(&mut self, text: impl Into<String>, color: Option<Color>) {
        self.label.text = text.into();
        if let Some(color) = color {
            self.label.color = color;
        }
    }
}
