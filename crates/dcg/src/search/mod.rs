//! Search engine for empty convex r-gons ("r-holes").
//!
//! Purpose
//! - Count, report, or query empty convex polygons with a fixed vertex
//!   count drawn from a planar point set, optionally monochromatic under a
//!   2-coloring, following the strategy of "Searching for Empty Convex
//!   Polygons" (Dobkin, Edelsbrunner, Overmars).
//!
//! Counted-once conventions
//! - Global variants represent each hole by its lexicographically smallest
//!   vertex; candidate vertices are exactly that pivot's `right` chain.
//! - The vertex-incident query count roots every chain at the query point
//!   and anchors each hole at the angularly first remaining vertex.
//! - The enclosing query count anchors each r-gon at its least-index vertex
//!   in the fixed cyclic order around the query point.
//!
//! Degenerate inputs are never errors: collinear candidates fail the strict
//! `Left` tests and are dropped as non-convex; duplicate locations are
//! collapsed to their lexicographically least representative before the
//! pivot loop.
//!
//! Code cross-refs: `walk::grow_chains` (the shared chain walk),
//! `global::{count_convex_rholes, report_convex_rholes}`,
//! `query::count_convex_rholes_p`, `triangles::*`.

mod global;
mod query;
mod triangles;
mod walk;

pub use global::{count_convex_rholes, report_convex_rholes};
pub use query::count_convex_rholes_p;
pub use triangles::{count_empty_triangles, count_empty_triangles_p};

use crate::geom::Point;

/// A hole witness: at least three vertices, convex, counterclockwise.
/// Pure output value; the engine retains nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

/// Canonical working copy of an input set: lexicographically sorted,
/// duplicate locations collapsed to their least representative.
pub(crate) fn canonical(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort();
    pts.dedup_by(|a, b| a.same_location(b));
    pts
}
