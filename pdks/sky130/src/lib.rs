//! The SKY130 process development kit for macro layout generation.
//!
//! Supplies the layer stack, routing track dimensions, via rules, rail
//! geometry, and HD standard-cell catalogs consumed by the `motu`
//! engine.
#![warn(missing_docs)]

use geometry::dims::Dims;
use geometry::dir::Dir;
use geometry::rect::Rect;
use lazy_static::lazy_static;
use motu::plan::Tech;
use motu::straps::{RailBox, RailProfile};
use motu::tracks::{TrackGrid, UniformTracks};
use motu::via::{ViaCatalog, ViaEndpoint, ViaRule};

pub mod layers;
pub mod stdcells;

pub use layers::Sky130Layer;

lazy_static! {
    static ref VIAS: ViaCatalog<Sky130Layer> = ViaCatalog::new(vec![
        ViaRule::new(
            ViaEndpoint::new(Sky130Layer::Li1, None),
            ViaEndpoint::new(Sky130Layer::Met1, Some(Dir::Horiz)),
            vec![
                (Sky130Layer::Mcon, Rect::from_sides(-85, -85, 85, 85)),
                (Sky130Layer::Met1, Rect::from_sides(-145, -115, 145, 115)),
            ],
        ),
        ViaRule::new(
            ViaEndpoint::new(Sky130Layer::Li1, None),
            ViaEndpoint::new(Sky130Layer::Met1, Some(Dir::Vert)),
            vec![
                (Sky130Layer::Mcon, Rect::from_sides(-85, -85, 85, 85)),
                (Sky130Layer::Met1, Rect::from_sides(-115, -145, 115, 145)),
            ],
        ),
        ViaRule::new(
            ViaEndpoint::new(Sky130Layer::Met1, Some(Dir::Horiz)),
            ViaEndpoint::new(Sky130Layer::Met2, Some(Dir::Vert)),
            vec![
                (Sky130Layer::Met1, Rect::from_sides(-160, -130, 160, 130)),
                (Sky130Layer::Via, Rect::from_sides(-130, -130, 130, 130)),
                (Sky130Layer::Met2, Rect::from_sides(-130, -160, 130, 160)),
            ],
        ),
        ViaRule::new(
            ViaEndpoint::new(Sky130Layer::Met1, Some(Dir::Vert)),
            ViaEndpoint::new(Sky130Layer::Met2, Some(Dir::Horiz)),
            vec![
                (Sky130Layer::Met1, Rect::from_sides(-130, -160, 130, 160)),
                (Sky130Layer::Via, Rect::from_sides(-130, -130, 130, 130)),
                (Sky130Layer::Met2, Rect::from_sides(-160, -130, 160, 130)),
            ],
        ),
        ViaRule::new(
            ViaEndpoint::new(Sky130Layer::Met1, Some(Dir::Horiz)),
            ViaEndpoint::new(Sky130Layer::Met2, Some(Dir::Horiz)),
            vec![
                (Sky130Layer::Met1, Rect::from_sides(-160, -130, 160, 130)),
                (Sky130Layer::Via, Rect::from_sides(-130, -130, 130, 130)),
                (Sky130Layer::Met2, Rect::from_sides(-160, -130, 160, 130)),
            ],
        ),
        ViaRule::new(
            ViaEndpoint::new(Sky130Layer::Met1, Some(Dir::Vert)),
            ViaEndpoint::new(Sky130Layer::Met2, Some(Dir::Vert)),
            vec![
                (Sky130Layer::Met1, Rect::from_sides(-130, -160, 130, 160)),
                (Sky130Layer::Via, Rect::from_sides(-130, -130, 130, 130)),
                (Sky130Layer::Met2, Rect::from_sides(-130, -160, 130, 160)),
            ],
        ),
    ]);
}

/// The via rules between local interconnect and met2.
pub fn vias() -> ViaCatalog<Sky130Layer> {
    VIAS.clone()
}

/// The macro routing grid.
///
/// Horizontal tracks on a 340 nm pitch, eight per 2720 nm row;
/// vertical tracks on the 460 nm site pitch.
pub fn track_grid() -> TrackGrid {
    TrackGrid::new(
        UniformTracks::with_offset(140, 200, 170),
        UniformTracks::with_offset(140, 320, 230),
        2720,
    )
}

/// The HD standard-cell site.
pub fn site() -> Dims {
    Dims::new(460, 2720)
}

/// Rail geometry: met4 straps tapping the row rails through the full
/// stack at alternate row boundaries.
pub fn rail_profile() -> RailProfile<Sky130Layer> {
    RailProfile {
        layer: Sky130Layer::Met4,
        half_width: 240,
        label_size: 100,
        stack: vec![
            RailBox {
                layer: Sky130Layer::Met2,
                x_inset: 0,
                y_inset: 0,
            },
            RailBox {
                layer: Sky130Layer::Met3,
                x_inset: 0,
                y_inset: 0,
            },
            RailBox {
                layer: Sky130Layer::Via,
                x_inset: 0,
                y_inset: 30,
            },
            RailBox {
                layer: Sky130Layer::Via2,
                x_inset: 25,
                y_inset: 45,
            },
            RailBox {
                layer: Sky130Layer::Via3,
                x_inset: 5,
                y_inset: 30,
            },
        ],
    }
}

/// The complete SKY130 bundle for plan execution.
pub fn tech() -> Tech<Sky130Layer> {
    Tech {
        tracks: track_grid(),
        site: site(),
        vias: vias(),
        fill_cells: stdcells::fill_cells(),
        tap_cell: stdcells::tap_cell(),
        rail: rail_profile(),
    }
}
