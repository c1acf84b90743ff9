//! Discrete and combinatorial geometry for planar integer point sets.
//!
//! The crate answers exact orientation queries (`turn`), orders point sets
//! angularly around a pivot (`sort_around_point`), validates general
//! position, and, as its main task, counts or enumerates empty convex
//! r-gons ("r-holes") in a point set, following the search strategy of
//! "Searching for Empty Convex Polygons" (Dobkin, Edelsbrunner, Overmars).
//!
//! All geometric decisions go through the exact integer predicate in
//! [`geom::turn`]; there is no floating point anywhere in the core
//! (the `gen` samplers use `f64` only to propose candidates, which are then
//! validated exactly).
//!
//! API Policy
//! - The public surface is the operation list re-exported from [`api`] and
//!   [`prelude`]; everything else is an implementation detail.

pub mod api;
pub mod error;
pub mod gen;
pub mod geom;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::gen::{convex_position_set, horton_set, random_point_set, GridCfg, ReplayToken};
    pub use crate::geom::{
        general_position, sort_around_point, turn, CyclicOrder, Point, RadialPartition, Turn,
        MAX_COORD,
    };
    pub use crate::search::{
        count_convex_rholes, count_convex_rholes_p, count_empty_triangles,
        count_empty_triangles_p, report_convex_rholes, Polygon,
    };
}
