//! Site-based cell placement.
//!
//! Cells occupy an integer number of sites in a row/column grid. Rows
//! alternate orientation so that supply rails shared between adjacent
//! rows line up; see [`Orientation::from_row_reflect`].

use std::cmp::Reverse;
use std::io;

use arcstr::ArcStr;
use geometry::dims::Dims;
use geometry::point::Point;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::script::MagicScript;

/// The role of a cell in a layout.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// An ordinary logic cell.
    #[default]
    Logic,
    /// A spacer with no devices.
    Fill,
    /// A decoupling capacitor.
    Decap,
    /// A well tap.
    Tap,
}

/// A cell prototype.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    /// The library name of the cell.
    pub name: ArcStr,
    /// The width of the cell in sites.
    pub width: i64,
    /// The role of the cell.
    pub kind: CellKind,
}

impl Cell {
    /// Creates a new cell prototype.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not positive.
    pub fn new(name: impl Into<ArcStr>, width: i64, kind: CellKind) -> Self {
        assert!(width > 0, "cell width must be positive");
        Self {
            name: name.into(),
            width,
            kind,
        }
    }
}

/// A named instance of a cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CellInstance {
    /// The instance name.
    pub name: ArcStr,
    /// The instantiated cell.
    pub cell: Cell,
    /// Whether the instance is mirrored within its row.
    pub reflect: bool,
}

/// The orientation of a placed instance.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Unrotated.
    #[default]
    R0,
    /// Mirrored across a horizontal axis.
    ReflectVert,
    /// Mirrored across a vertical axis.
    ReflectHoriz,
    /// Rotated 180 degrees.
    R180,
}

impl Orientation {
    /// The orientation of an instance placed in the given row.
    ///
    /// Odd rows flip upside down so their supply rails coincide with
    /// the rails of even neighbors; `reflect` additionally mirrors the
    /// instance left-to-right.
    pub const fn from_row_reflect(row: i64, reflect: bool) -> Self {
        match (row & 1 != 0, reflect) {
            (false, false) => Self::R0,
            (false, true) => Self::ReflectHoriz,
            (true, false) => Self::ReflectVert,
            (true, true) => Self::R180,
        }
    }

    /// The orientation token used by `getcell`, empty for [`R0`](Self::R0).
    pub const fn magic_token(&self) -> &'static str {
        match self {
            Self::R0 => "",
            Self::ReflectVert => "v",
            Self::ReflectHoriz => "180v",
            Self::R180 => "180",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Slot {
    inst: usize,
    offset: i64,
}

/// An instance anchored in the grid.
#[derive(Debug, Copy, Clone)]
pub struct Placement<'a> {
    /// The placed instance.
    pub instance: &'a CellInstance,
    /// The column of the instance's leftmost site.
    pub col: i64,
    /// The row containing the instance.
    pub row: i64,
}

impl Placement<'_> {
    /// The orientation of this instance.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_row_reflect(self.row, self.instance.reflect)
    }
}

/// A row/column grid of placement sites.
///
/// Every mutation either applies fully or leaves the grid unchanged.
#[derive(Debug, Clone)]
pub struct PlacementGrid {
    columns: i64,
    rows: i64,
    slots: Vec<Option<Slot>>,
    instances: Vec<CellInstance>,
}

impl PlacementGrid {
    /// Creates an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn new(columns: i64, rows: i64) -> Self {
        assert!(columns > 0, "grid must have at least one column");
        assert!(rows > 0, "grid must have at least one row");
        Self {
            columns,
            rows,
            slots: vec![None; (columns * rows) as usize],
            instances: Vec::new(),
        }
    }

    /// The number of columns in the grid.
    pub fn columns(&self) -> i64 {
        self.columns
    }

    /// The number of rows in the grid.
    pub fn rows(&self) -> i64 {
        self.rows
    }

    fn index(&self, col: i64, row: i64) -> usize {
        (row * self.columns + col) as usize
    }

    /// Checks whether `width` sites starting at `(col, row)` lie inside
    /// the grid and are unoccupied.
    pub fn span_is_free(&self, col: i64, row: i64, width: i64) -> bool {
        if row < 0 || row >= self.rows || col < 0 || col + width > self.columns {
            return false;
        }
        (col..col + width).all(|c| self.slots[self.index(c, row)].is_none())
    }

    fn claim(&mut self, instance: CellInstance, col: i64, row: i64) {
        let width = instance.cell.width;
        let inst = self.instances.len();
        self.instances.push(instance);
        for offset in 0..width {
            let idx = self.index(col + offset, row);
            self.slots[idx] = Some(Slot { inst, offset });
        }
    }

    /// Places a cell with its leftmost site at `(col, row)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlacementConflict`] if any claimed site is
    /// occupied or outside the grid; the grid is left unchanged.
    pub fn add_cell(
        &mut self,
        name: impl Into<ArcStr>,
        cell: Cell,
        col: i64,
        row: i64,
        reflect: bool,
    ) -> Result<()> {
        let name = name.into();
        if !self.span_is_free(col, row, cell.width) {
            return Err(Error::PlacementConflict {
                cell: name,
                col,
                row,
            });
        }
        self.claim(CellInstance { name, cell, reflect }, col, row);
        Ok(())
    }

    /// Places one tap cell in every row of column `col`.
    ///
    /// Instances are named `tap_{col}_{row}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlacementConflict`] for the first occupied row;
    /// no taps are placed in that case.
    pub fn add_tap_column(&mut self, cell: Cell, col: i64) -> Result<()> {
        for row in 0..self.rows {
            if !self.span_is_free(col, row, cell.width) {
                return Err(Error::PlacementConflict {
                    cell: arcstr::format!("tap_{}_{}", col, row),
                    col,
                    row,
                });
            }
        }
        for row in 0..self.rows {
            self.claim(
                CellInstance {
                    name: arcstr::format!("tap_{}_{}", col, row),
                    cell: cell.clone(),
                    reflect: false,
                },
                col,
                row,
            );
        }
        Ok(())
    }

    /// Fills every remaining gap with the widest catalog cell that fits.
    ///
    /// Scans row-major, preferring wider cells. Instances are named
    /// `fill_{col}_{row}`. Calling this twice is a no-op the second
    /// time. Gaps narrower than the narrowest catalog cell are left
    /// open.
    pub fn fill(&mut self, catalog: &[Cell]) {
        let by_width: Vec<Cell> = catalog
            .iter()
            .cloned()
            .sorted_by_key(|cell| Reverse(cell.width))
            .collect();
        let mut placed = 0usize;
        for row in 0..self.rows {
            let mut col = 0;
            while col < self.columns {
                let fit = by_width
                    .iter()
                    .find(|cell| self.span_is_free(col, row, cell.width))
                    .cloned();
                match fit {
                    Some(cell) => {
                        let width = cell.width;
                        self.claim(
                            CellInstance {
                                name: arcstr::format!("fill_{}_{}", col, row),
                                cell,
                                reflect: false,
                            },
                            col,
                            row,
                        );
                        placed += 1;
                        col += width;
                    }
                    None => col += 1,
                }
            }
        }
        debug!(placed, "placed fill cells");
    }

    /// Iterates over placed instances in scan order.
    ///
    /// Scan order is row-major from row 0, left to right within a row;
    /// each instance appears once, at its leftmost site.
    pub fn instances(&self) -> impl Iterator<Item = Placement<'_>> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).filter_map(move |col| {
                let slot = self.slots[self.index(col, row)]?;
                (slot.offset == 0).then(|| Placement {
                    instance: &self.instances[slot.inst],
                    col,
                    row,
                })
            })
        })
    }

    /// Appends a placement instruction for every instance, in scan
    /// order. `site` is the width and height of one placement site.
    pub fn emit_placements(&self, script: &mut MagicScript, site: Dims) {
        for placement in self.instances() {
            script.place(
                placement.instance.cell.name.clone(),
                Point::new(placement.col * site.w(), placement.row * site.h()),
                placement.orientation(),
            );
        }
    }

    /// Writes a netlist instantiation for every decap instance, in scan
    /// order, tying its supply pins to the named nets.
    pub fn write_decaps<W: io::Write>(
        &self,
        w: &mut W,
        power: &str,
        ground: &str,
    ) -> io::Result<()> {
        for placement in self.instances() {
            if placement.instance.cell.kind != CellKind::Decap {
                continue;
            }
            writeln!(
                w,
                "\t{} decap_{}_{}_I (",
                placement.instance.cell.name, placement.col, placement.row
            )?;
            writeln!(w, "\t\t.VPWR ({power}),")?;
            writeln!(w, "\t\t.VGND ({ground}),")?;
            writeln!(w, "\t\t.VPB  ({power}),")?;
            writeln!(w, "\t\t.VNB  ({ground})")?;
            writeln!(w, "\t);")?;
        }
        Ok(())
    }
}
