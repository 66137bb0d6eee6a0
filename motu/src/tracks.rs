//! Routing track management.

use std::fmt;

use serde::{Deserialize, Serialize};

use geometry::point::Point;
use geometry::span::Span;

/// A uniform set of tracks.
///
/// The track line and space must be even.
///
/// Track 0 is centered at `offset`.
/// Track 1 is centered at `offset + line + space`.
/// Track -1 is centered at `offset - (line + space)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UniformTracks {
    /// The width of each track.
    line: i64,
    /// Spacing between adjacent track edges.
    space: i64,
    /// An offset that translates all tracks.
    offset: i64,
}

impl UniformTracks {
    /// Creates a uniform track set with the given line and space.
    pub fn new(line: i64, space: i64) -> Self {
        Self::with_offset(line, space, 0)
    }

    /// Creates a uniform track set with the given line, space, and offset.
    ///
    /// # Panics
    ///
    /// Panics if the line or space is odd or non-positive.
    pub fn with_offset(line: i64, space: i64, offset: i64) -> Self {
        assert_eq!(line & 1, 0, "track width must be even");
        assert_eq!(space & 1, 0, "track spacing must be even");
        assert!(line > 0);
        assert!(space > 0);
        Self {
            line,
            space,
            offset,
        }
    }

    /// Gets the span of the `i`-th track.
    pub fn track(&self, idx: i64) -> Span {
        Span::from_center_span(self.center(idx), self.line)
    }

    /// Gets the center coordinate of the `i`-th track.
    #[inline]
    pub fn center(&self, idx: i64) -> i64 {
        self.offset + idx * self.pitch()
    }

    /// The pitch (line + space) of the tracks.
    #[inline]
    pub fn pitch(&self) -> i64 {
        self.line + self.space
    }

    /// The width of each track.
    #[inline]
    pub fn line(&self) -> i64 {
        self.line
    }
}

/// A logical routing-grid coordinate.
///
/// `x` indexes the vertical tracks, which span the whole macro.
/// `row` selects a placement row, and `y` indexes the horizontal tracks
/// within that row. `x` and `row` may be negative: routes are allowed to
/// leave the placed area.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64, i64)", into = "(i64, i64, i64)")]
pub struct TrackPoint {
    /// The vertical track index.
    pub x: i64,
    /// The placement row index.
    pub row: i64,
    /// The horizontal track index within the row.
    pub y: i64,
}

impl TrackPoint {
    /// Creates a new track point.
    pub const fn new(x: i64, row: i64, y: i64) -> Self {
        Self { x, row, y }
    }
}

impl From<(i64, i64, i64)> for TrackPoint {
    fn from(value: (i64, i64, i64)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<TrackPoint> for (i64, i64, i64) {
    fn from(value: TrackPoint) -> Self {
        (value.x, value.row, value.y)
    }
}

impl fmt::Display for TrackPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.row, self.y)
    }
}

/// The macro routing grid.
///
/// Vertical tracks run the full height of the macro. Horizontal tracks
/// repeat with each placement row; since cells on odd rows are placed
/// upside down, the horizontal track order is mirrored there, so a route
/// entering at the same in-row index always hits the same spot on the
/// cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TrackGrid {
    horiz: UniformTracks,
    vert: UniformTracks,
    row_pitch: i64,
}

impl TrackGrid {
    /// Creates a new track grid.
    ///
    /// # Panics
    ///
    /// Panics if `row_pitch` is not a positive multiple of the
    /// horizontal track pitch.
    pub fn new(horiz: UniformTracks, vert: UniformTracks, row_pitch: i64) -> Self {
        assert!(row_pitch > 0);
        assert_eq!(
            row_pitch % horiz.pitch(),
            0,
            "row pitch must be a multiple of the horizontal track pitch"
        );
        Self {
            horiz,
            vert,
            row_pitch,
        }
    }

    /// The horizontal tracks (y-coordinates within a row).
    #[inline]
    pub fn horiz(&self) -> &UniformTracks {
        &self.horiz
    }

    /// The vertical tracks (x-coordinates).
    #[inline]
    pub fn vert(&self) -> &UniformTracks {
        &self.vert
    }

    /// The height of one placement row.
    #[inline]
    pub fn row_pitch(&self) -> i64 {
        self.row_pitch
    }

    /// The number of horizontal tracks in one placement row.
    #[inline]
    pub fn tracks_per_row(&self) -> i64 {
        self.row_pitch / self.horiz.pitch()
    }

    /// Maps a logical track point to its physical center.
    ///
    /// In-row indices are biased by one track, so `y = 0` lands one
    /// pitch above the row edge. On odd rows the index is mirrored to
    /// follow the flipped cell.
    pub fn point(&self, tp: TrackPoint) -> Point {
        let x = self.vert.center(tp.x);

        let mut ty = tp.y + 1;
        // Bit test rather than `%` so negative rows mirror too.
        if tp.row & 1 != 0 {
            ty = self.tracks_per_row() - ty - 1;
        }
        let y = tp.row * self.row_pitch + self.horiz.center(ty);

        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TrackGrid {
        TrackGrid::new(
            UniformTracks::with_offset(140, 200, 170),
            UniformTracks::with_offset(140, 320, 230),
            2720,
        )
    }

    #[test]
    fn uniform_track_centers() {
        let tracks = UniformTracks::with_offset(140, 320, 230);
        assert_eq!(tracks.pitch(), 460);
        assert_eq!(tracks.center(0), 230);
        assert_eq!(tracks.center(3), 1610);
        assert_eq!(tracks.center(-1), -230);
        assert_eq!(tracks.track(0), Span::new(160, 300));
    }

    #[test]
    #[should_panic(expected = "track width must be even")]
    fn odd_line_panics() {
        UniformTracks::new(141, 200);
    }

    #[test]
    fn even_row_mapping() {
        let grid = grid();
        assert_eq!(grid.tracks_per_row(), 8);
        assert_eq!(grid.point(TrackPoint::new(0, 0, 0)), Point::new(230, 510));
        assert_eq!(grid.point(TrackPoint::new(5, 0, 2)), Point::new(2530, 1190));
        assert_eq!(grid.point(TrackPoint::new(0, 2, 0)), Point::new(230, 5950));
    }

    #[test]
    fn odd_row_mapping_is_mirrored() {
        let grid = grid();
        assert_eq!(grid.point(TrackPoint::new(0, 1, 0)), Point::new(230, 4930));
        assert_eq!(grid.point(TrackPoint::new(0, 1, 2)), Point::new(230, 4250));

        // In-row offsets of even/odd images reflect about the shared
        // row boundary.
        for y in 0..7 {
            let even = grid.point(TrackPoint::new(0, 0, y)).y;
            let odd = grid.point(TrackPoint::new(0, 1, y)).y - grid.row_pitch();
            assert_eq!(even + odd, grid.row_pitch());
        }
    }

    #[test]
    fn negative_rows_mirror_like_odd_rows() {
        let grid = grid();
        assert_eq!(grid.point(TrackPoint::new(0, -1, 0)), Point::new(230, -510));
        assert_eq!(grid.point(TrackPoint::new(-2, -2, 0)), Point::new(-690, -4930));
    }
}
