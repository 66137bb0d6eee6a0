//! Intervals on a single axis.

use serde::{Deserialize, Serialize};

/// A range of integer coordinates along one axis.
///
/// The lower endpoint never exceeds the upper one.
#[derive(
    Debug, Default, Copy, Clone, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Span {
    start: i64,
    stop: i64,
}

impl Span {
    /// Creates a span between two endpoints, given in either order.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Span::new(510, 230), Span::new(230, 510));
    /// assert_eq!(Span::new(230, 510).start(), 230);
    /// ```
    pub fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { start: a, stop: b }
        } else {
            Self { start: b, stop: a }
        }
    }

    /// Creates a span of the given length beginning at `start`.
    pub const fn with_start_and_length(start: i64, length: i64) -> Self {
        Self {
            start,
            stop: start + length,
        }
    }

    /// Creates a span of length `span` centered at `center`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let track = Span::from_center_span(170, 140);
    /// assert_eq!(track.start(), 100);
    /// assert_eq!(track.stop(), 240);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `span` is negative or odd, since an odd length has no
    /// integer center.
    ///
    /// ```should_panic
    /// # use geometry::prelude::*;
    /// Span::from_center_span(170, 141);
    /// ```
    pub fn from_center_span(center: i64, span: i64) -> Self {
        assert!(span >= 0, "span length must be non-negative");
        assert_eq!(span % 2, 0, "span length must be even");
        Self::with_start_and_length(center - span / 2, span)
    }

    /// The lower endpoint.
    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// The upper endpoint.
    #[inline]
    pub const fn stop(&self) -> i64 {
        self.stop
    }

    /// The distance between the endpoints.
    #[inline]
    pub const fn length(&self) -> i64 {
        self.stop - self.start
    }

    /// Extends the span by `amount` at both ends.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let wire = Span::new(690, 1610).expand_all(70);
    /// assert_eq!(wire, Span::new(620, 1680));
    /// ```
    pub const fn expand_all(&self, amount: i64) -> Self {
        Self {
            start: self.start - amount,
            stop: self.stop + amount,
        }
    }

    /// Contracts the span by `amount` at both ends.
    ///
    /// # Panics
    ///
    /// Panics if the span is shorter than `2 * amount`.
    pub const fn shrink_all(&self, amount: i64) -> Self {
        assert!(
            self.length() >= 2 * amount,
            "span is too short to shrink by the given amount"
        );
        Self {
            start: self.start + amount,
            stop: self.stop - amount,
        }
    }
}
