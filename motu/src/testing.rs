//! Shared fixtures for unit tests.
//!
//! The test stack uses round numbers: 200 nm track pitches with 100 nm
//! offsets and lines, and rows of eight horizontal tracks.

use geometry::dims::Dims;
use geometry::dir::Dir;
use geometry::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::layer::MotuLayer;
use crate::place::{Cell, CellKind};
use crate::plan::Tech;
use crate::straps::{RailBox, RailProfile};
use crate::tracks::{TrackGrid, UniformTracks};
use crate::via::{ViaCatalog, ViaEndpoint, ViaRule};

/// A minimal three-metal layer stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TestLayer {
    Base,
    C1,
    M1,
    C2,
    M2,
}

impl MotuLayer for TestLayer {
    fn magic_name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::C1 => "c1",
            Self::M1 => "m1",
            Self::C2 => "c2",
            Self::M2 => "m2",
        }
    }

    fn routing_dir(&self) -> Option<Dir> {
        match self {
            Self::M1 => Some(Dir::Horiz),
            Self::M2 => Some(Dir::Vert),
            _ => None,
        }
    }

    fn line(&self) -> i64 {
        100
    }
}

pub(crate) fn grid() -> TrackGrid {
    TrackGrid::new(
        UniformTracks::with_offset(100, 100, 100),
        UniformTracks::with_offset(100, 100, 100),
        1600,
    )
}

pub(crate) fn catalog() -> ViaCatalog<TestLayer> {
    use TestLayer::*;
    ViaCatalog::new(vec![
        ViaRule::new(
            ViaEndpoint::new(Base, None),
            ViaEndpoint::new(M1, Some(Dir::Horiz)),
            vec![
                (C1, Rect::from_sides(-40, -40, 40, 40)),
                (M1, Rect::from_sides(-70, -50, 70, 50)),
            ],
        ),
        ViaRule::new(
            ViaEndpoint::new(Base, None),
            ViaEndpoint::new(M1, Some(Dir::Vert)),
            vec![
                (C1, Rect::from_sides(-40, -40, 40, 40)),
                (M1, Rect::from_sides(-50, -70, 50, 70)),
            ],
        ),
        ViaRule::new(
            ViaEndpoint::new(M1, Some(Dir::Horiz)),
            ViaEndpoint::new(M2, Some(Dir::Vert)),
            vec![
                (M1, Rect::from_sides(-80, -60, 80, 60)),
                (C2, Rect::from_sides(-60, -60, 60, 60)),
                (M2, Rect::from_sides(-60, -80, 60, 80)),
            ],
        ),
        ViaRule::new(
            ViaEndpoint::new(M1, Some(Dir::Vert)),
            ViaEndpoint::new(M2, Some(Dir::Horiz)),
            vec![
                (M1, Rect::from_sides(-60, -80, 60, 80)),
                (C2, Rect::from_sides(-60, -60, 60, 60)),
                (M2, Rect::from_sides(-80, -60, 80, 60)),
            ],
        ),
        ViaRule::new(
            ViaEndpoint::new(M1, Some(Dir::Horiz)),
            ViaEndpoint::new(M2, Some(Dir::Horiz)),
            vec![
                (M1, Rect::from_sides(-80, -60, 80, 60)),
                (C2, Rect::from_sides(-60, -60, 60, 60)),
                (M2, Rect::from_sides(-80, -60, 80, 60)),
            ],
        ),
        ViaRule::new(
            ViaEndpoint::new(M1, Some(Dir::Vert)),
            ViaEndpoint::new(M2, Some(Dir::Vert)),
            vec![
                (M1, Rect::from_sides(-60, -80, 60, 80)),
                (C2, Rect::from_sides(-60, -60, 60, 60)),
                (M2, Rect::from_sides(-60, -80, 60, 80)),
            ],
        ),
    ])
}

pub(crate) fn tech() -> Tech<TestLayer> {
    Tech {
        tracks: grid(),
        site: Dims::new(200, 1600),
        vias: catalog(),
        fill_cells: vec![
            Cell::new("fill_x1", 1, CellKind::Fill),
            Cell::new("fill_x2", 2, CellKind::Fill),
            Cell::new("cap_x4", 4, CellKind::Decap),
        ],
        tap_cell: Cell::new("tap_x1", 1, CellKind::Tap),
        rail: RailProfile {
            layer: TestLayer::M2,
            half_width: 100,
            label_size: 50,
            stack: vec![
                RailBox {
                    layer: TestLayer::M1,
                    x_inset: 0,
                    y_inset: 0,
                },
                RailBox {
                    layer: TestLayer::C2,
                    x_inset: 10,
                    y_inset: 20,
                },
            ],
        },
    }
}
