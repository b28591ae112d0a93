//! Closed numeric ranges used for limits and spine bounds.

use std::fmt;

/// A `[lower, upper]` pair.
///
/// No ordering is enforced: inverted axes keep `lower > upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// First end of the range.
    pub lower: f64,
    /// Second end of the range.
    pub upper: f64,
}

impl Interval {
    /// Creates an interval.
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// `upper - lower`; negative for inverted ranges.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Extends both ends by `factor * span`.
    #[must_use]
    pub fn padded(&self, factor: f64) -> Self {
        let pad = factor * self.span();
        Self::new(self.lower - pad, self.upper + pad)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        (interval.lower, interval.upper)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded() {
        let padded = Interval::new(0.0, 10.0).padded(0.1);
        assert_eq!(<(f64, f64)>::from(padded), (-1.0, 11.0));
    }

    #[test]
    fn test_padded_inverted_range_stays_inverted() {
        let padded = Interval::new(10.0, 0.0).padded(0.1);
        assert_eq!(padded, Interval::new(11.0, -1.0));
    }

    #[test]
    fn test_zero_factor_is_identity() {
        let interval = Interval::new(-3.5, 2.0);
        assert_eq!(interval.padded(0.0), interval);
    }
}
