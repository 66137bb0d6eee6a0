//! Track-based route drawing.
//!
//! A [`RouteCursor`] walks net geometry one Manhattan segment at a
//! time, painting wires as it moves. Layer transitions are deferred:
//! [`via_to`](RouteCursor::via_to) only records where the route left
//! the old layer, and the transition geometry is painted by the next
//! operation that fixes the route's orientation on the new layer.

use arcstr::ArcStr;
use geometry::dir::Dir;
use geometry::rect::Rect;
use geometry::span::Span;
use tracing::debug;

use crate::error::{Error, Result};
use crate::layer::MotuLayer;
use crate::script::{MagicScript, PortClass, PortDecl, PortUse};
use crate::tracks::{TrackGrid, TrackPoint};
use crate::via::{ViaCatalog, ViaEndpoint};

/// The maximum number of unresolved branches a cursor can hold.
pub const MAX_BRANCH_DEPTH: usize = 8;

const PORT_TEXT_SIZE: i64 = 25;

#[derive(Debug, Copy, Clone)]
struct Frame<L> {
    layer: L,
    pos: TrackPoint,
    travel: Option<Dir>,
}

/// A cursor for drawing net geometry on a track grid.
///
/// The cursor owns its instruction log; nets drawn one after another
/// with repeated [`start`](Self::start) calls accumulate into the same
/// log, retrieved with [`finish`](Self::finish).
#[derive(Debug)]
pub struct RouteCursor<'a, L> {
    grid: &'a TrackGrid,
    vias: &'a ViaCatalog<L>,
    script: MagicScript,
    layer: Option<L>,
    pos: TrackPoint,
    travel: Option<Dir>,
    pending: Option<ViaEndpoint<L>>,
    active: bool,
    stack: [Option<Frame<L>>; MAX_BRANCH_DEPTH],
    depth: usize,
}

impl<'a, L: MotuLayer> RouteCursor<'a, L> {
    /// Creates a cursor with an empty instruction log.
    pub fn new(grid: &'a TrackGrid, vias: &'a ViaCatalog<L>) -> Self {
        Self {
            grid,
            vias,
            script: MagicScript::new(),
            layer: None,
            pos: TrackPoint::default(),
            travel: None,
            pending: None,
            active: false,
            stack: [None; MAX_BRANCH_DEPTH],
            depth: 0,
        }
    }

    /// Begins a new net on `layer` at `at`.
    ///
    /// Travel orientation, pending transition, and the branch stack are
    /// reset; the instruction log is kept.
    pub fn start(&mut self, layer: L, at: TrackPoint) {
        self.layer = Some(layer);
        self.pos = at;
        self.travel = None;
        self.pending = None;
        self.active = true;
        self.depth = 0;
    }

    /// The current track position.
    pub fn pos(&self) -> TrackPoint {
        self.pos
    }

    /// The instructions recorded so far.
    pub fn script(&self) -> &MagicScript {
        &self.script
    }

    /// Consumes the cursor, returning its instruction log.
    pub fn finish(self) -> MagicScript {
        self.script
    }

    fn current_layer(&self) -> L {
        self.layer.expect("no active net: call start() first")
    }

    fn effective_dir(&self) -> Option<Dir> {
        self.travel.or_else(|| self.current_layer().routing_dir())
    }

    fn resolve_pending(&mut self) -> Result<()> {
        let Some(from) = self.pending.take() else {
            return Ok(());
        };
        let to = ViaEndpoint::new(self.current_layer(), self.effective_dir());
        let rule = self.vias.resolve(from, to)?;
        let at = self.grid.point(self.pos);
        for (layer, rect) in &rule.stack {
            self.script.paint(layer.magic_name(), rect.translate(at));
        }
        debug!(
            from = from.layer.magic_name(),
            to = to.layer.magic_name(),
            at = %self.pos,
            "resolved via"
        );
        Ok(())
    }

    /// Moves to `to`, painting a wire segment on the current layer.
    ///
    /// Any pending transition resolves first, anchored at the pre-move
    /// point and oriented by this move. Moving to the current position
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonManhattan`] if `to` differs from the current
    /// position in both x and row/y; the cursor is left unchanged.
    /// Returns [`Error::NoViaRule`] if the pending transition has no
    /// matching rule.
    ///
    /// # Panics
    ///
    /// Panics if no net is active.
    pub fn move_to(&mut self, to: TrackPoint) -> Result<()> {
        assert!(self.active, "no active net: call start() first");
        let move_h = self.pos.x != to.x;
        let move_v = self.pos.row != to.row || self.pos.y != to.y;
        if move_h && move_v {
            return Err(Error::NonManhattan { from: self.pos, to });
        }
        if !move_h && !move_v {
            return Ok(());
        }
        let dir = if move_h { Dir::Horiz } else { Dir::Vert };
        self.travel = Some(dir);
        self.resolve_pending()?;

        let layer = self.current_layer();
        let cur = self.grid.point(self.pos);
        let nxt = self.grid.point(to);
        let half = layer.line() / 2;
        let along = Span::new(cur.coord(dir), nxt.coord(dir)).expand_all(half);
        let across = Span::from_center_span(cur.coord(!dir), layer.line());
        self.script
            .paint(layer.magic_name(), Rect::from_dir_spans(dir, along, across));
        self.pos = to;
        Ok(())
    }

    /// Moves by track deltas relative to the current position.
    ///
    /// See [`move_to`](Self::move_to).
    pub fn move_rel(&mut self, dx: i64, drow: i64, dy: i64) -> Result<()> {
        self.move_to(TrackPoint {
            x: self.pos.x + dx,
            row: self.pos.row + drow,
            y: self.pos.y + dy,
        })
    }

    /// Switches the route to `layer`, deferring the transition geometry.
    ///
    /// The transition anchors wherever the cursor sits when it
    /// resolves, and its rule lookup uses the orientation the route
    /// takes on the new layer. An unresolved transition from an earlier
    /// `via_to` flushes first, with the old layer's orientation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoViaRule`] if flushing fails.
    ///
    /// # Panics
    ///
    /// Panics if no net is active.
    pub fn via_to(&mut self, layer: L) -> Result<()> {
        assert!(self.active, "no active net: call start() first");
        self.resolve_pending()?;
        self.pending = Some(ViaEndpoint::new(self.current_layer(), self.effective_dir()));
        self.layer = Some(layer);
        self.travel = None;
        Ok(())
    }

    /// Saves the current layer, position, and travel orientation.
    ///
    /// A pending transition is not resolved; it stays attached to the
    /// branch point.
    ///
    /// # Panics
    ///
    /// Panics if no net is active or the branch stack is full.
    pub fn push(&mut self) {
        assert!(self.active, "no active net: call start() first");
        assert!(
            self.depth < MAX_BRANCH_DEPTH,
            "routing branch stack overflow"
        );
        self.stack[self.depth] = Some(Frame {
            layer: self.current_layer(),
            pos: self.pos,
            travel: self.travel,
        });
        self.depth += 1;
    }

    /// Resolves any pending transition at the branch tip, then returns
    /// to the most recently pushed frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StackUnderflow`] if nothing was pushed, or
    /// [`Error::NoViaRule`] if the pending transition has no matching
    /// rule.
    ///
    /// # Panics
    ///
    /// Panics if no net is active.
    pub fn pop(&mut self) -> Result<()> {
        assert!(self.active, "no active net: call start() first");
        self.resolve_pending()?;
        if self.depth == 0 {
            return Err(Error::StackUnderflow);
        }
        self.depth -= 1;
        let frame = self.stack[self.depth]
            .take()
            .expect("frame below stack depth");
        self.layer = Some(frame.layer);
        self.pos = frame.pos;
        self.travel = frame.travel;
        Ok(())
    }

    /// Ends the net, resolving any pending transition at the final
    /// point.
    ///
    /// The layer and position persist so a port can still be declared;
    /// movement requires a new [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoViaRule`] if the pending transition has no
    /// matching rule.
    ///
    /// # Panics
    ///
    /// Panics if no net is active.
    pub fn end(&mut self) -> Result<()> {
        assert!(self.active, "no active net: call start() first");
        self.resolve_pending()?;
        self.active = false;
        Ok(())
    }

    /// Declares a labeled port at the current point on the current
    /// layer.
    ///
    /// The label anchors to the wire cross-section square at the
    /// current point. Remains valid after [`end`](Self::end).
    ///
    /// # Panics
    ///
    /// Panics if the cursor was never started.
    pub fn port(&mut self, name: impl Into<ArcStr>, index: u32, class: PortClass, usage: PortUse) {
        let layer = self.current_layer();
        let at = self.grid.point(self.pos);
        self.script.port(PortDecl {
            name: name.into(),
            index,
            class,
            usage,
            layer: layer.magic_name(),
            rect: Rect::from_spans(
                Span::from_center_span(at.x, layer.line()),
                Span::from_center_span(at.y, layer.line()),
            ),
            text_size: PORT_TEXT_SIZE,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Instruction;
    use crate::testing::{catalog, grid, TestLayer};

    fn paints(script: &MagicScript) -> Vec<(&'static str, Rect)> {
        script
            .instructions()
            .iter()
            .map(|inst| match inst {
                Instruction::Paint { layer, rect } => (*layer, *rect),
                other => panic!("expected paint, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn wire_segments_follow_track_centers() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::M1, TrackPoint::from((2, 0, 1)));
        cursor.move_rel(2, 0, 0).unwrap();
        cursor.end().unwrap();
        assert_eq!(
            paints(cursor.script()),
            [("m1", Rect::from_sides(450, 450, 950, 550))]
        );
    }

    #[test]
    fn deferred_via_uses_post_switch_travel() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::M1, TrackPoint::from((2, 0, 1)));
        cursor.move_rel(2, 0, 0).unwrap();
        cursor.via_to(TestLayer::M2).unwrap();
        // The vertical move selects the horiz->vert rule, anchored at
        // the pre-move point.
        cursor.move_rel(0, 0, 2).unwrap();
        cursor.end().unwrap();
        assert_eq!(
            paints(cursor.script()),
            [
                ("m1", Rect::from_sides(450, 450, 950, 550)),
                ("m1", Rect::from_sides(820, 440, 980, 560)),
                ("c2", Rect::from_sides(840, 440, 960, 560)),
                ("m2", Rect::from_sides(840, 420, 960, 580)),
                ("m2", Rect::from_sides(850, 450, 950, 950)),
            ]
        );
    }

    #[test]
    fn consecutive_transitions_flush_in_order() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::Base, TrackPoint::from((0, 0, 0)));
        cursor.via_to(TestLayer::M1).unwrap();
        cursor.via_to(TestLayer::M2).unwrap();
        cursor.end().unwrap();
        let layers: Vec<_> = paints(cursor.script())
            .into_iter()
            .map(|(layer, _)| layer)
            .collect();
        assert_eq!(layers, ["c1", "m1", "m1", "c2", "m2"]);
    }

    #[test]
    fn end_resolves_with_layer_default_orientation() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::Base, TrackPoint::from((0, 0, 0)));
        cursor.via_to(TestLayer::M1).unwrap();
        cursor.end().unwrap();
        // No move ever happened, so the m1 side falls back to its
        // preferred horizontal orientation.
        assert_eq!(
            paints(cursor.script()),
            [
                ("c1", Rect::from_sides(60, 260, 140, 340)),
                ("m1", Rect::from_sides(30, 250, 170, 350)),
            ]
        );
    }

    #[test]
    fn diagonal_move_is_rejected_without_side_effects() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::M1, TrackPoint::from((0, 0, 0)));
        let err = cursor.move_rel(1, 0, 1).unwrap_err();
        assert_eq!(
            err,
            Error::NonManhattan {
                from: TrackPoint::from((0, 0, 0)),
                to: TrackPoint::from((1, 0, 1)),
            }
        );
        assert!(cursor.script().is_empty());
        assert_eq!(cursor.pos(), TrackPoint::from((0, 0, 0)));
    }

    #[test]
    fn moving_in_place_paints_nothing() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::M1, TrackPoint::from((3, 1, 2)));
        cursor.move_to(TrackPoint::from((3, 1, 2))).unwrap();
        assert!(cursor.script().is_empty());
    }

    #[test]
    fn pop_returns_to_branch_point() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::M1, TrackPoint::from((0, 0, 0)));
        cursor.move_rel(2, 0, 0).unwrap();
        cursor.push();
        cursor.via_to(TestLayer::M2).unwrap();
        cursor.move_rel(0, 0, 2).unwrap();
        cursor.pop().unwrap();
        assert_eq!(cursor.pos(), TrackPoint::from((2, 0, 0)));
        // Back on m1: the next horizontal segment paints there.
        cursor.move_rel(2, 0, 0).unwrap();
        cursor.end().unwrap();
        let last = paints(cursor.script()).last().copied().unwrap();
        assert_eq!(last, ("m1", Rect::from_sides(450, 250, 950, 350)));
    }

    #[test]
    fn pop_resolves_pending_at_branch_tip() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::M1, TrackPoint::from((2, 0, 0)));
        cursor.move_rel(2, 0, 0).unwrap();
        cursor.push();
        cursor.via_to(TestLayer::M2).unwrap();
        cursor.pop().unwrap();
        cursor.end().unwrap();
        // The transition anchored at the tip (no move in between), with
        // the m2 side in its preferred vertical orientation.
        assert_eq!(
            paints(cursor.script()),
            [
                ("m1", Rect::from_sides(450, 250, 950, 350)),
                ("m1", Rect::from_sides(820, 240, 980, 360)),
                ("c2", Rect::from_sides(840, 240, 960, 360)),
                ("m2", Rect::from_sides(840, 220, 960, 380)),
            ]
        );
    }

    #[test]
    fn pop_without_push_underflows() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::M1, TrackPoint::from((0, 0, 0)));
        assert_eq!(cursor.pop().unwrap_err(), Error::StackUnderflow);
    }

    #[test]
    fn start_clears_the_branch_stack() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::M1, TrackPoint::from((0, 0, 0)));
        cursor.push();
        cursor.push();
        cursor.start(TestLayer::M1, TrackPoint::from((1, 0, 0)));
        assert_eq!(cursor.pop().unwrap_err(), Error::StackUnderflow);
    }

    #[test]
    fn port_after_end_uses_final_point() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::M1, TrackPoint::from((1, 0, 1)));
        cursor.move_rel(2, 0, 0).unwrap();
        cursor.end().unwrap();
        cursor.port("clk", 2, PortClass::Input, PortUse::Digital);
        let inst = cursor.script().instructions().last().unwrap().clone();
        match inst {
            Instruction::Port(port) => {
                assert_eq!(port.name, "clk");
                assert_eq!(port.index, 2);
                assert_eq!(port.layer, "m1");
                assert_eq!(port.rect, Rect::from_sides(650, 450, 750, 550));
            }
            other => panic!("expected port, got {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "no active net")]
    fn movement_requires_start() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        let _ = cursor.move_rel(1, 0, 0);
    }

    #[test]
    #[should_panic(expected = "no active net")]
    fn movement_after_end_is_rejected() {
        let grid = grid();
        let vias = catalog();
        let mut cursor = RouteCursor::new(&grid, &vias);
        cursor.start(TestLayer::M1, TrackPoint::from((0, 0, 0)));
        cursor.end().unwrap();
        let _ = cursor.move_rel(1, 0, 0);
    }
}
