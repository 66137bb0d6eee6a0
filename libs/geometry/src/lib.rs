//! 2-D integer geometry for integrated circuit layout.
//!
//! All coordinates are `i64` values, typically interpreted as nanometers.
//!
//! # Examples
//!
//! Create a [rectangle](crate::rect::Rect):
//!
//! ```
//! # use geometry::prelude::*;
//! let rect = Rect::from_sides(10, 20, 30, 40);
//! ```
#![warn(missing_docs)]

pub mod dims;
pub mod dir;
pub mod point;
pub mod prelude;
pub mod rect;
pub mod span;
