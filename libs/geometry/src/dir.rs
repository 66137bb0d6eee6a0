//! Horizontal/vertical directions.

use serde::{Deserialize, Serialize};

/// One of the two axis-aligned directions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// The x-aligned direction.
    Horiz,
    /// The y-aligned direction.
    Vert,
}

impl Dir {
    /// Returns the perpendicular direction.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Dir::Horiz.other(), Dir::Vert);
    /// assert_eq!(Dir::Vert.other(), Dir::Horiz);
    /// ```
    pub const fn other(&self) -> Self {
        match *self {
            Self::Horiz => Self::Vert,
            Self::Vert => Self::Horiz,
        }
    }

    /// A one-letter name for the direction: `h` or `v`.
    pub const fn short_name(&self) -> &'static str {
        match *self {
            Self::Horiz => "h",
            Self::Vert => "v",
        }
    }
}

impl std::ops::Not for Dir {
    type Output = Self;
    /// Equivalent to [`Dir::other`].
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(!Dir::Horiz, Dir::Vert);
    /// ```
    fn not(self) -> Self::Output {
        self.other()
    }
}
