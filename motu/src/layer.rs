//! The process layer abstraction.

use std::fmt::Debug;
use std::hash::Hash;

use geometry::dir::Dir;

/// A process layer usable by the routing and rail generators.
///
/// Implemented by PDK crates on their layer enums. Only the properties
/// the generators consult are exposed here; everything else about a
/// layer stays in the PDK.
pub trait MotuLayer: Copy + Eq + Hash + Debug {
    /// The layer name understood by the layout editor's `paint` command.
    fn magic_name(&self) -> &'static str;

    /// The preferred routing direction.
    ///
    /// Returns [`None`] for layers without one, such as local
    /// interconnect and cut layers.
    fn routing_dir(&self) -> Option<Dir>;

    /// The drawn width of wires routed on this layer.
    ///
    /// Must be even so that wires stay centered on integer track
    /// coordinates.
    fn line(&self) -> i64;
}
