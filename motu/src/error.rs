//! Error types and error handling utilities.

use arcstr::ArcStr;
use geometry::dir::Dir;

use crate::tracks::TrackPoint;

/// A result type returning macro generation errors.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type for macro generation.
///
/// All of these are fatal: generation stops at the first error and no
/// partial output should be used.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No via rule matches the requested layer transition.
    #[error(
        "no via rule matching {from} ({}) -> {to} ({})",
        dir_label(.from_dir),
        dir_label(.to_dir)
    )]
    NoViaRule {
        /// The layer being left.
        from: &'static str,
        /// The wire orientation on the departing layer, if any.
        from_dir: Option<Dir>,
        /// The layer being entered.
        to: &'static str,
        /// The travel orientation on the new layer, if any.
        to_dir: Option<Dir>,
    },
    /// A route segment changes more than one track axis at a time.
    #[error("non-manhattan move from {from} to {to}")]
    NonManhattan {
        /// The position before the move.
        from: TrackPoint,
        /// The requested target position.
        to: TrackPoint,
    },
    /// A placement overlaps an existing instance or lies outside the grid.
    #[error("cannot place {cell} at column {col}, row {row}")]
    PlacementConflict {
        /// The cell that could not be placed.
        cell: ArcStr,
        /// The anchor column of the attempted placement.
        col: i64,
        /// The row of the attempted placement.
        row: i64,
    },
    /// A route tried to return to a branch point with none saved.
    #[error("routing stack underflow")]
    StackUnderflow,
    /// A placement references a cell prototype that was never declared.
    #[error("unknown cell: {0}")]
    UnknownCell(ArcStr),
    /// A plan's placement grid dimensions are not positive.
    #[error("invalid placement grid: {columns} columns x {rows} rows")]
    InvalidGridSize {
        /// The requested number of columns.
        columns: i64,
        /// The requested number of rows.
        rows: i64,
    },
}

fn dir_label(dir: &Option<Dir>) -> &'static str {
    match dir {
        Some(d) => d.short_name(),
        None => "any",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::NoViaRule {
            from: "li",
            from_dir: None,
            to: "met1",
            to_dir: Some(Dir::Vert),
        };
        assert_eq!(err.to_string(), "no via rule matching li (any) -> met1 (v)");

        let err = Error::NonManhattan {
            from: TrackPoint::new(0, 0, 0),
            to: TrackPoint::new(1, 0, 1),
        };
        assert_eq!(
            err.to_string(),
            "non-manhattan move from (0, 0, 0) to (1, 0, 1)"
        );

        let err = Error::PlacementConflict {
            cell: arcstr::literal!("buf_1"),
            col: 12,
            row: 3,
        };
        assert_eq!(err.to_string(), "cannot place buf_1 at column 12, row 3");
    }
}
