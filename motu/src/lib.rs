//! Deterministic layout script generation for IC macros.
//!
//! This crate builds layout-editor command streams for macros assembled
//! from standard cells: placements on a site grid, net routes on
//! uniform track grids, and full-height supply rails. Output is a pure
//! function of the input, so regenerated scripts diff cleanly against
//! checked-in ones.
//!
//! # Grid structure
//!
//! Placement happens on single-site slots one standard-cell pitch wide
//! and one row tall ([`place::PlacementGrid`]). Routing positions are
//! track-indexed [`tracks::TrackPoint`]s rather than raw coordinates;
//! [`tracks::TrackGrid`] maps them to physical points, mirroring the
//! in-row track order on odd rows to follow the alternating row
//! orientation.
//!
//! # Deferred vias
//!
//! A layer switch ([`route::RouteCursor::via_to`]) paints nothing by
//! itself. The transition geometry depends on the orientation the
//! route takes on the new layer, so the cursor holds the switch
//! pending and resolves it against the [`via::ViaCatalog`] at the next
//! move, branch pop, or net end.
//!
//! # Output
//!
//! Everything lands in an append-only [`script::MagicScript`], rendered
//! as editor commands at the end of a run. Placement grids additionally
//! emit a netlist instantiation stream for their decap cells.
//!
//! Process-specific data (layers, track dimensions, via rules, cell
//! catalogs) comes from a pdk crate implementing [`MotuLayer`] and
//! supplying a [`plan::Tech`] bundle.
#![warn(missing_docs)]

pub mod error;
pub mod layer;
pub mod place;
pub mod plan;
pub mod route;
pub mod script;
pub mod straps;
pub mod tracks;
pub mod via;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
pub use layer::MotuLayer;
