//! Geometry script construction and rendering.
//!
//! A [`MagicScript`] is an append-only list of instructions that is
//! rendered to a layout editor command stream at the end of a run.
//! Keeping instructions symbolic until then lets callers merge streams
//! from several generators before writing anything out.

use std::fmt;
use std::io;

use arcstr::ArcStr;
use geometry::point::Point;
use geometry::rect::Rect;
use serde::{Deserialize, Serialize};

use crate::place::Orientation;

/// The font used for all port labels.
pub const LABEL_FONT: &str = "FreeSans";

/// The connection class of a port.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortClass {
    /// An input port.
    #[default]
    Input,
    /// An output port.
    Output,
}

impl PortClass {
    /// The name of this class in the output stream.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for PortClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The electrical use of a port.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortUse {
    /// An ordinary signal port.
    #[default]
    Digital,
    /// A power supply port.
    Power,
    /// A ground port.
    Ground,
}

impl PortUse {
    /// The name of this use in the output stream.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Power => "power",
            Self::Ground => "ground",
        }
    }
}

impl fmt::Display for PortUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A labeled port attached to a painted region.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PortDecl {
    /// The port name.
    pub name: ArcStr,
    /// The 1-based port index.
    pub index: u32,
    /// The connection class.
    pub class: PortClass,
    /// The electrical use.
    pub usage: PortUse,
    /// The layer the label attaches to.
    pub layer: &'static str,
    /// The labeled region.
    pub rect: Rect,
    /// Label text size, in database units.
    pub text_size: i64,
}

/// A single geometry script instruction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Instruction {
    /// Paint a rectangle on a layer.
    Paint {
        /// The layer to paint.
        layer: &'static str,
        /// The painted region.
        rect: Rect,
    },
    /// Declare a labeled port.
    Port(PortDecl),
    /// Place a cell instance.
    Place {
        /// The cell name.
        cell: ArcStr,
        /// The origin of the placed instance.
        origin: Point,
        /// The instance orientation.
        orient: Orientation,
    },
}

/// An append-only geometry script.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MagicScript {
    instructions: Vec<Instruction>,
}

impl MagicScript {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a paint instruction.
    pub fn paint(&mut self, layer: &'static str, rect: Rect) {
        self.instructions.push(Instruction::Paint { layer, rect });
    }

    /// Appends a port declaration.
    pub fn port(&mut self, port: PortDecl) {
        self.instructions.push(Instruction::Port(port));
    }

    /// Appends a cell placement.
    pub fn place(&mut self, cell: ArcStr, origin: Point, orient: Orientation) {
        self.instructions.push(Instruction::Place {
            cell,
            origin,
            orient,
        });
    }

    /// Appends all instructions from another script.
    pub fn append(&mut self, other: MagicScript) {
        self.instructions.extend(other.instructions);
    }

    /// The instructions recorded so far.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The number of recorded instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if no instructions have been recorded.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Renders the script as editor commands.
    pub fn write<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        for inst in &self.instructions {
            match inst {
                Instruction::Paint { layer, rect } => {
                    write_box(w, *rect)?;
                    writeln!(w, "paint {layer}")?;
                }
                Instruction::Port(port) => {
                    write_box(w, port.rect)?;
                    writeln!(
                        w,
                        "label {{{}}} {} {} 0 0 0 n {}",
                        port.name,
                        LABEL_FONT,
                        Microns(port.text_size),
                        port.layer
                    )?;
                    writeln!(w, "port make {}", port.index)?;
                    writeln!(w, "port {{{}}} use {}", port.name, port.usage)?;
                    writeln!(w, "port {{{}}} class {}", port.name, port.class)?;
                }
                Instruction::Place {
                    cell,
                    origin,
                    orient,
                } => {
                    writeln!(
                        w,
                        "box position {} {}",
                        Microns(origin.x),
                        Microns(origin.y)
                    )?;
                    let token = orient.magic_token();
                    if token.is_empty() {
                        writeln!(w, "getcell {cell}")?;
                    } else {
                        writeln!(w, "getcell {cell} {token}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn write_box<W: io::Write>(w: &mut W, rect: Rect) -> io::Result<()> {
    writeln!(
        w,
        "box values {} {} {} {}",
        Microns(rect.left()),
        Microns(rect.bot()),
        Microns(rect.right()),
        Microns(rect.top())
    )
}

/// A database-unit coordinate displayed in microns.
///
/// Database units are nanometers; values render with a fixed three
/// decimal places and a trailing `u`.
///
/// # Example
///
/// ```
/// use motu::script::Microns;
///
/// assert_eq!(Microns(2530).to_string(), "2.530u");
/// assert_eq!(Microns(-240).to_string(), "-0.240u");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Microns(pub i64);

impl fmt::Display for Microns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:03}u", sign, abs / 1000, abs % 1000)
    }
}
