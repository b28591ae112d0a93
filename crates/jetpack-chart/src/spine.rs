//! The four edge lines of an axes.

use crate::interval::Interval;
use jetpack_common::{Color, JetpackError};
use std::fmt;
use std::str::FromStr;

/// One edge of an axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left edge, carries the y axis by default.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge, carries the x axis by default.
    Bottom,
}

impl Side {
    /// All four sides.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for Side {
    type Err = JetpackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|side| side.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| JetpackError::validation_field(format!("unknown spine {s:?}"), "side"))
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge line of an axes.
///
/// A spine with no colour is not drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Spine {
    side: Side,
    color: Option<Color>,
    bounds: Option<Interval>,
}

impl Spine {
    /// A visible black spine spanning the whole axis.
    pub const fn new(side: Side) -> Self {
        Self {
            side,
            color: Some(Color::BLACK),
            bounds: None,
        }
    }

    /// Which edge this spine sits on.
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The drawing colour, `None` when hidden.
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    /// Sets the colour; `None` hides the spine.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Whether the spine is drawn.
    pub const fn is_visible(&self) -> bool {
        self.color.is_some()
    }

    /// Explicit drawn extent, if one was set.
    pub const fn bounds(&self) -> Option<Interval> {
        self.bounds
    }

    /// Restricts the drawn line to `[lower, upper]`.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) {
        self.bounds = Some(Interval::new(lower, upper));
    }

    /// Draws the spine across the full axis again.
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }
}

/// The four spines of an axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Spines {
    /// Left spine.
    pub left: Spine,
    /// Right spine.
    pub right: Spine,
    /// Top spine.
    pub top: Spine,
    /// Bottom spine.
    pub bottom: Spine,
}

impl Spines {
    /// The spine on `side`.
    pub const fn get(&self, side: Side) -> &Spine {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    /// Mutable access to the spine on `side`.
    pub fn get_mut(&mut self, side: Side) -> &mut Spine {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
        }
    }

    /// Iterates left, right, top, bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Spine> {
        [&self.left, &self.right, &self.top, &self.bottom].into_iter()
    }
}

impl Default for Spines {
    fn default() -> Self {
        Self {
            left: Spine::new(Side::Left),
            right: Spine::new(Side::Right),
            top: Spine::new(Side::Top),
            bottom: Spine::new(Side::Bottom),
        }
    }
}
