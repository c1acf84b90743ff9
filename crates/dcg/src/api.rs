//! Curated re-export surface.
//!
//! Prefer these re-exports for clarity and consistency across callers; the
//! module layout behind them may change.

// Exact primitives and angular orders
pub use crate::geom::{
    general_position, sort_around_point, turn, CyclicOrder, Point, RadialPartition, Turn,
    MAX_COORD,
};
// Hole search
pub use crate::search::{
    count_convex_rholes, count_convex_rholes_p, count_empty_triangles, count_empty_triangles_p,
    report_convex_rholes, Polygon,
};
// Point-set generators
pub use crate::gen::{convex_position_set, horton_set, random_point_set, GridCfg, ReplayToken};
// Errors
pub use crate::error::{Error, Result};
