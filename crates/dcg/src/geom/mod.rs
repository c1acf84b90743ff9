//! Exact planar primitives (points, orientation, angular order).
//!
//! Purpose
//! - Provide the single source of geometric truth: the three-valued exact
//!   orientation predicate [`turn`], plus the angular orderings built on it.
//! - Keep everything integer-exact; higher layers never see an angle or a
//!   distance, only `Turn` values and ordered sequences.
//!
//! Code cross-refs: `point::{Point, Turn}`, `radial::{RadialPartition,
//! CyclicOrder}`, `position::general_position`.

mod point;
mod position;
mod radial;

pub use point::{turn, Point, Turn, MAX_COORD};
pub use position::general_position;
pub use radial::{sort_around_point, CyclicOrder, RadialPartition};

#[cfg(test)]
mod tests;
