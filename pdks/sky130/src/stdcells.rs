//! HD standard-cell family members used during macro generation.

use arcstr::literal;
use motu::place::{Cell, CellKind};

/// The spacer and decap cells available for gap filling.
pub fn fill_cells() -> Vec<Cell> {
    vec![
        Cell::new(literal!("sky130_fd_sc_hd__fill_1"), 1, CellKind::Fill),
        Cell::new(literal!("sky130_fd_sc_hd__fill_2"), 2, CellKind::Fill),
        Cell::new(literal!("sky130_fd_sc_hd__decap_3"), 3, CellKind::Decap),
        Cell::new(literal!("sky130_fd_sc_hd__decap_4"), 4, CellKind::Decap),
        Cell::new(literal!("sky130_fd_sc_hd__decap_6"), 6, CellKind::Decap),
        Cell::new(literal!("sky130_fd_sc_hd__decap_8"), 8, CellKind::Decap),
        Cell::new(literal!("sky130_fd_sc_hd__decap_12"), 12, CellKind::Decap),
    ]
}

/// The well tap placed in tap columns.
pub fn tap_cell() -> Cell {
    Cell::new(literal!("sky130_fd_sc_hd__tapvpwrvgnd_1"), 1, CellKind::Tap)
}
