//! Supply rail generation.
//!
//! Rails run the full height of the placement area on a thick upper
//! metal and drop via stacks onto the row rails below. Power and
//! ground rails tap alternate row boundaries, so a pair of them covers
//! every boundary without shorting.

use arcstr::ArcStr;
use geometry::rect::Rect;
use geometry::span::Span;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layer::MotuLayer;
use crate::script::{MagicScript, PortClass, PortDecl, PortUse};

/// The polarity of a supply rail.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// A power rail.
    Power,
    /// A ground rail.
    Ground,
}

impl Polarity {
    /// The port use matching this polarity.
    pub const fn port_use(&self) -> PortUse {
        match self {
            Self::Power => PortUse::Power,
            Self::Ground => PortUse::Ground,
        }
    }
}

/// The position and polarity of one vertical supply rail.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RailSpec {
    /// The left edge of the rail.
    pub x: i64,
    /// The rail width.
    pub width: i64,
    /// The rail polarity.
    pub polarity: Polarity,
}

/// One box of a row-boundary via stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RailBox<L> {
    /// The layer to paint.
    pub layer: L,
    /// Inset from the rail's left and right edges.
    pub x_inset: i64,
    /// Inset from the stack's vertical extent on each side.
    pub y_inset: i64,
}

/// Process geometry for drawing rails.
#[derive(Debug, Clone)]
pub struct RailProfile<L> {
    /// The layer carrying the rail itself.
    pub layer: L,
    /// Vertical overhang past the outermost row boundaries, and the
    /// half-height of an un-inset boundary stack.
    pub half_width: i64,
    /// Label text size for the rail port, in database units.
    pub label_size: i64,
    /// Boxes painted at each tapped row boundary.
    pub stack: Vec<RailBox<L>>,
}

/// Draws one rail with via stacks at alternate row boundaries.
///
/// Power rails tap odd boundaries and ground rails even ones, through
/// boundary `rows` inclusive.
///
/// # Panics
///
/// Panics if `rows` is negative or `spec.width` is not positive.
pub fn draw_rail<L: MotuLayer>(
    script: &mut MagicScript,
    profile: &RailProfile<L>,
    spec: RailSpec,
    rows: i64,
    row_pitch: i64,
    name: ArcStr,
    index: u32,
) {
    assert!(rows >= 0, "rail row count must be non-negative");
    assert!(spec.width > 0, "rail width must be positive");

    let hspan = Span::with_start_and_length(spec.x, spec.width);
    let rail = Rect::from_spans(
        hspan,
        Span::new(-profile.half_width, rows * row_pitch + profile.half_width),
    );
    script.paint(profile.layer.magic_name(), rail);
    script.port(PortDecl {
        name: name.clone(),
        index,
        class: PortClass::Input,
        usage: spec.polarity.port_use(),
        layer: profile.layer.magic_name(),
        rect: rail,
        text_size: profile.label_size,
    });

    let mut boundary = match spec.polarity {
        Polarity::Power => 1,
        Polarity::Ground => 0,
    };
    let mut stacks = 0usize;
    while boundary <= rows {
        for tap in &profile.stack {
            script.paint(
                tap.layer.magic_name(),
                Rect::from_spans(
                    hspan.shrink_all(tap.x_inset),
                    Span::from_center_span(
                        boundary * row_pitch,
                        2 * (profile.half_width - tap.y_inset),
                    ),
                ),
            );
        }
        stacks += 1;
        boundary += 2;
    }
    debug!(net = %name, stacks, "drew rail");
}
