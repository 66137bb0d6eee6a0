//! A prelude containing commonly used items.

pub use crate::dims::Dims;
pub use crate::dir::Dir;
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::span::Span;
