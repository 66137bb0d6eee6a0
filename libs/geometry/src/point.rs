//! Integer points on the layout plane.

use serde::{Deserialize, Serialize};

use crate::dir::Dir;

/// An `(x, y)` coordinate pair.
#[derive(
    Debug, Copy, Clone, Default, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Point {
    /// The x-coordinate.
    pub x: i64,
    /// The y-coordinate.
    pub y: i64,
}

impl Point {
    /// Creates the point `(x, y)`.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The coordinate along `dir`: `x` for [`Dir::Horiz`], `y` for
    /// [`Dir::Vert`].
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let p = Point::new(230, 510);
    /// assert_eq!(p.coord(Dir::Horiz), 230);
    /// assert_eq!(p.coord(Dir::Vert), 510);
    /// ```
    pub const fn coord(&self, dir: Dir) -> i64 {
        match dir {
            Dir::Horiz => self.x,
            Dir::Vert => self.y,
        }
    }
}

impl std::ops::Add<Point> for Point {
    type Output = Self;
    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}
