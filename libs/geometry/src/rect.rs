//! Axis-aligned rectangular regions.

use serde::{Deserialize, Serialize};

use crate::dir::Dir;
use crate::point::Point;
use crate::span::Span;

/// An axis-aligned rectangle.
#[derive(
    Debug, Default, Copy, Clone, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Rect {
    /// Lower-left corner.
    p0: Point,
    /// Upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a rectangle from its four sides.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(145, 1050, 315, 1330);
    /// assert_eq!(rect.left(), 145);
    /// assert_eq!(rect.bot(), 1050);
    /// assert_eq!(rect.right(), 315);
    /// assert_eq!(rect.top(), 1330);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics unless `left <= right` and `bot <= top`.
    pub fn from_sides(left: i64, bot: i64, right: i64, top: i64) -> Self {
        assert!(
            left <= right,
            "malformed rectangle: left ({}) exceeds right ({})",
            left,
            right
        );
        assert!(
            bot <= top,
            "malformed rectangle: bot ({}) exceeds top ({})",
            bot,
            top
        );
        Self {
            p0: Point::new(left, bot),
            p1: Point::new(right, top),
        }
    }

    /// Creates a rectangle spanning `h` horizontally and `v` vertically.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_spans(Span::new(145, 315), Span::new(1050, 1330));
    /// assert_eq!(rect, Rect::from_sides(145, 1050, 315, 1330));
    /// ```
    pub const fn from_spans(h: Span, v: Span) -> Self {
        Self {
            p0: Point::new(h.start(), v.start()),
            p1: Point::new(h.stop(), v.stop()),
        }
    }

    /// Creates a rectangle from a span parallel to `dir` and a span
    /// perpendicular to it.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let along = Span::new(620, 1680);
    /// let across = Span::new(1120, 1260);
    /// let rect = Rect::from_dir_spans(Dir::Horiz, along, across);
    /// assert_eq!(rect, Rect::from_sides(620, 1120, 1680, 1260));
    /// let rect = Rect::from_dir_spans(Dir::Vert, along, across);
    /// assert_eq!(rect, Rect::from_sides(1120, 620, 1260, 1680));
    /// ```
    pub fn from_dir_spans(dir: Dir, parallel_span: Span, perp_span: Span) -> Self {
        match dir {
            Dir::Horiz => Self::from_spans(parallel_span, perp_span),
            Dir::Vert => Self::from_spans(perp_span, parallel_span),
        }
    }

    /// The left x-coordinate.
    #[inline]
    pub const fn left(&self) -> i64 {
        self.p0.x
    }

    /// The bottom y-coordinate.
    #[inline]
    pub const fn bot(&self) -> i64 {
        self.p0.y
    }

    /// The right x-coordinate.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.p1.x
    }

    /// The top y-coordinate.
    #[inline]
    pub const fn top(&self) -> i64 {
        self.p1.y
    }

    /// Moves the rectangle by the given displacement.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(-160, -130, 160, 130);
    /// let shifted = rect.translate(Point::new(1610, 1190));
    /// assert_eq!(shifted, Rect::from_sides(1450, 1060, 1770, 1320));
    /// ```
    pub fn translate(self, p: Point) -> Self {
        Self {
            p0: self.p0 + p,
            p1: self.p1 + p,
        }
    }
}
