//! Width/height pairs.

use serde::{Deserialize, Serialize};

/// The extent of a rectangular region in each axis.
#[derive(
    Debug, Default, Copy, Clone, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Dims {
    /// The extent along the x-axis.
    w: i64,
    /// The extent along the y-axis.
    h: i64,
}

impl Dims {
    /// Creates dimensions from a width and a height.
    pub const fn new(w: i64, h: i64) -> Self {
        Self { w, h }
    }

    /// The width.
    #[inline]
    pub const fn w(&self) -> i64 {
        self.w
    }

    /// The height.
    #[inline]
    pub const fn h(&self) -> i64 {
        self.h
    }
}
