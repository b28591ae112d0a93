//! Styled text used for tick labels and axis labels.

use jetpack_common::Color;

/// Font size given to text that has not been sized explicitly.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// A piece of text with its font size and colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The text content; may be empty.
    pub text: String,
    /// Font size in points.
    pub font_size: f64,
    /// Text colour.
    pub color: Color,
}

impl Text {
    /// Creates text with the default size and colour.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::BLACK,
        }
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the colour.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Whether there is no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new(String::new())
    }
}
