//! Domain errors for the geometry engine.
//!
//! Degenerate geometry (collinear triples, duplicate points) is not an
//! error; it is handled by the deterministic policies documented on the
//! search operations. Errors here are caller contract violations, detected
//! before any partial computation.

use crate::geom::MAX_COORD;

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Caller contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A coordinate exceeds the bound required for overflow-free exact
    /// arithmetic in the current precision mode.
    #[error("coordinate {value} exceeds the bound {max} required by the current precision mode")]
    CoordinateOutOfRange {
        /// The offending coordinate value.
        value: i64,
        /// The active bound (`MAX_COORD`).
        max: i64,
    },

    /// A hole needs at least 3 vertices.
    #[error("a convex hole needs at least 3 vertices, got r = {r}")]
    InvalidHoleSize {
        /// The requested vertex count.
        r: usize,
    },

    /// The query point of a point-relative search coincides with a set
    /// point.
    #[error("query point ({x}, {y}) must not coincide with a point of the set")]
    QueryPointInSet {
        /// Query point x coordinate.
        x: i64,
        /// Query point y coordinate.
        y: i64,
    },
}

impl Error {
    pub(crate) fn coordinate(value: i64) -> Self {
        Error::CoordinateOutOfRange {
            value,
            max: MAX_COORD,
        }
    }
}
