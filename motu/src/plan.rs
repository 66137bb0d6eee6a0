//! Declarative macro plans.
//!
//! A [`MacroPlan`] captures everything that varies between macros:
//! grid dimensions, cell placements, rail positions, and net routes.
//! Executing a plan against a process-supplied [`Tech`] bundle yields
//! the output streams. Plans deserialize from TOML, so a macro can be
//! described entirely in data.

use std::io;

use arcstr::ArcStr;
use geometry::dims::Dims;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::layer::MotuLayer;
use crate::place::{Cell, CellKind, PlacementGrid};
use crate::route::RouteCursor;
use crate::script::{MagicScript, PortClass, PortUse};
use crate::straps::{draw_rail, Polarity, RailProfile, RailSpec};
use crate::tracks::{TrackGrid, TrackPoint};
use crate::via::ViaCatalog;

/// The dimensions of the placement grid, in sites.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    /// The number of site columns.
    pub columns: i64,
    /// The number of site rows.
    pub rows: i64,
}

/// The names of the supply nets.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PowerNets {
    /// The power net name.
    #[serde(default = "default_power_net")]
    pub power: ArcStr,
    /// The ground net name.
    #[serde(default = "default_ground_net")]
    pub ground: ArcStr,
}

fn default_power_net() -> ArcStr {
    arcstr::literal!("VDPWR")
}

fn default_ground_net() -> ArcStr {
    arcstr::literal!("VGND")
}

impl Default for PowerNets {
    fn default() -> Self {
        Self {
            power: default_power_net(),
            ground: default_ground_net(),
        }
    }
}

/// A logic cell prototype available to placements.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellDecl {
    /// The library cell name.
    pub name: ArcStr,
    /// The cell width in sites.
    pub width: i64,
}

/// One placed logic instance.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlacementDecl {
    /// The instance name.
    pub name: ArcStr,
    /// The name of a declared cell.
    pub cell: ArcStr,
    /// The column of the instance's leftmost site.
    pub col: i64,
    /// The row containing the instance.
    pub row: i64,
    /// Whether to mirror the instance within its row.
    #[serde(default)]
    pub reflect: bool,
}

/// A routed net.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NetDecl<L> {
    /// The net name.
    pub name: ArcStr,
    /// Cursor operations, applied in order.
    pub route: Vec<RouteOp<L>>,
}

/// One routing cursor operation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RouteOp<L> {
    /// Begin the net on `layer` at `at`.
    Start {
        /// The starting layer.
        layer: L,
        /// The starting track point.
        at: TrackPoint,
    },
    /// Move to an absolute track point.
    Move {
        /// The target track point.
        to: TrackPoint,
    },
    /// Move by track deltas `(dx, drow, dy)`.
    MoveRel {
        /// The per-axis deltas.
        by: (i64, i64, i64),
    },
    /// Switch layers with a deferred transition.
    Via {
        /// The new layer.
        layer: L,
    },
    /// Save the cursor state.
    Push,
    /// Return to the last saved state.
    Pop,
    /// End the net.
    End,
    /// Declare a port at the final point.
    Port {
        /// The port name.
        name: ArcStr,
        /// The 1-based port index.
        index: u32,
        /// The connection class.
        #[serde(default)]
        class: PortClass,
        /// The electrical use.
        #[serde(default)]
        usage: PortUse,
    },
}

/// A complete, declarative description of one macro.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MacroPlan<L> {
    /// The placement grid dimensions.
    pub grid: GridSize,
    /// Supply net names.
    #[serde(default)]
    pub power: PowerNets,
    /// Logic cell prototypes.
    #[serde(default)]
    pub cells: Vec<CellDecl>,
    /// Columns receiving a full-height tap column.
    #[serde(default)]
    pub tap_columns: Vec<i64>,
    /// Placed logic instances.
    #[serde(default)]
    pub placements: Vec<PlacementDecl>,
    /// Vertical supply rails.
    #[serde(default)]
    pub rails: Vec<RailSpec>,
    /// Routed nets.
    ///
    /// The default is spelled out so serde does not infer an
    /// `L: Default` bound for the derived `Deserialize` impl.
    #[serde(default = "Vec::new")]
    pub nets: Vec<NetDecl<L>>,
    /// Whether to fill leftover sites after placement.
    #[serde(default = "default_fill")]
    pub fill: bool,
}

fn default_fill() -> bool {
    true
}

/// The process-supplied data a plan executes against.
#[derive(Debug, Clone)]
pub struct Tech<L> {
    /// The routing track grid.
    pub tracks: TrackGrid,
    /// The width and height of one placement site.
    pub site: Dims,
    /// Via transition rules.
    pub vias: ViaCatalog<L>,
    /// Filler and decap cells for gap filling.
    pub fill_cells: Vec<Cell>,
    /// The well tap cell.
    pub tap_cell: Cell,
    /// Rail drawing profile.
    pub rail: RailProfile<L>,
}

/// The artifacts produced by executing a plan.
#[derive(Debug)]
pub struct MacroOutput {
    /// The geometry script.
    pub script: MagicScript,
    /// The final placement grid, fill included.
    pub grid: PlacementGrid,
    /// The supply net names in effect.
    pub power: PowerNets,
}

impl MacroOutput {
    /// Writes the rendered geometry script.
    pub fn write_geometry<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        self.script.write(w)
    }

    /// Writes the decap instantiation stream.
    pub fn write_instances<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        self.grid
            .write_decaps(w, &self.power.power, &self.power.ground)
    }
}

impl<L: MotuLayer> MacroPlan<L> {
    /// Executes the plan against a process description.
    ///
    /// The geometry stream orders placements first, then rails, then
    /// nets in plan order, so identical plans render identical output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridSize`] if the grid dimensions are
    /// not positive, otherwise the first placement or routing error
    /// encountered; any partially built output is discarded.
    pub fn execute(&self, tech: &Tech<L>) -> Result<MacroOutput> {
        if self.grid.columns <= 0 || self.grid.rows <= 0 {
            return Err(Error::InvalidGridSize {
                columns: self.grid.columns,
                rows: self.grid.rows,
            });
        }
        let mut grid = PlacementGrid::new(self.grid.columns, self.grid.rows);

        let cells: IndexMap<ArcStr, Cell> = self
            .cells
            .iter()
            .map(|decl| {
                (
                    decl.name.clone(),
                    Cell::new(decl.name.clone(), decl.width, CellKind::Logic),
                )
            })
            .collect();

        for &col in &self.tap_columns {
            grid.add_tap_column(tech.tap_cell.clone(), col)?;
        }
        for decl in &self.placements {
            let cell = cells
                .get(&decl.cell)
                .ok_or_else(|| Error::UnknownCell(decl.cell.clone()))?;
            grid.add_cell(
                decl.name.clone(),
                cell.clone(),
                decl.col,
                decl.row,
                decl.reflect,
            )?;
        }
        if self.fill {
            grid.fill(&tech.fill_cells);
        }
        debug!(placements = grid.instances().count(), "built placement grid");

        let mut script = MagicScript::new();
        grid.emit_placements(&mut script, tech.site);

        for rail in &self.rails {
            let (name, index) = match rail.polarity {
                Polarity::Power => (self.power.power.clone(), 1),
                Polarity::Ground => (self.power.ground.clone(), 0),
            };
            draw_rail(
                &mut script,
                &tech.rail,
                *rail,
                self.grid.rows,
                tech.tracks.row_pitch(),
                name,
                index,
            );
        }

        let mut cursor = RouteCursor::new(&tech.tracks, &tech.vias);
        for net in &self.nets {
            debug!(net = %net.name, ops = net.route.len(), "routing net");
            for op in &net.route {
                match op {
                    RouteOp::Start { layer, at } => cursor.start(*layer, *at),
                    RouteOp::Move { to } => cursor.move_to(*to)?,
                    RouteOp::MoveRel { by } => cursor.move_rel(by.0, by.1, by.2)?,
                    RouteOp::Via { layer } => cursor.via_to(*layer)?,
                    RouteOp::Push => cursor.push(),
                    RouteOp::Pop => cursor.pop()?,
                    RouteOp::End => cursor.end()?,
                    RouteOp::Port {
                        name,
                        index,
                        class,
                        usage,
                    } => cursor.port(name.clone(), *index, *class, *usage),
                }
            }
        }
        script.append(cursor.finish());

        Ok(MacroOutput {
            script,
            grid,
            power: self.power.clone(),
        })
    }
}
