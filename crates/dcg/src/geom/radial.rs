//! Angular order around a pivot (radial partition and cyclic views).
//!
//! Purpose
//! - Order a point set counterclockwise around a pivot using only the exact
//!   [`turn`] predicate, split into two half-turn chains so that the
//!   comparator is total within each chain.
//! - Provide cheap re-anchoring (`shift`) and orientation flips
//!   (`reverse_in_place`) on the concatenated cyclic order, so a search can
//!   reuse one sort across many sweep directions.
//!
//! Conventions
//! - The `right` chain holds the points lexicographically greater than the
//!   pivot (equivalently the open right half plane plus the upward ray),
//!   swept counterclockwise from the downward reference direction.
//! - The `left` chain holds the lexicographically smaller points and
//!   continues the same sweep through the left half plane.
//! - Equal-angle ties (points on one ray from the pivot) order nearer
//!   first, so radial sweeps visit same-direction points outward-in.

use std::cmp::Ordering;

use super::point::{ray_dist, turn, Point, Turn};

/// Counterclockwise comparator around `pivot`, valid for two points within
/// one half-turn of each other (both chains of a partition qualify).
/// Collinear pairs on one ray order nearer-first.
#[inline]
pub(crate) fn ccw_cmp(pivot: Point, a: Point, b: Point) -> Ordering {
    match turn(pivot, a, b) {
        Turn::Left => Ordering::Less,
        Turn::Right => Ordering::Greater,
        Turn::Collinear => ray_dist(pivot, a).cmp(&ray_dist(pivot, b)),
    }
}

/// Location-only lexicographic comparison (color ignored).
#[inline]
fn loc_cmp(a: Point, b: Point) -> Ordering {
    (a.x(), a.y()).cmp(&(b.x(), b.y()))
}

/// Angularly sorted decomposition of a point set around a pivot.
///
/// Both chains are counterclockwise; concatenated they cover one full turn
/// starting just past the downward direction. Points coinciding with the
/// pivot's location are excluded.
#[derive(Clone, Debug)]
pub struct RadialPartition {
    pivot: Point,
    right: Vec<Point>,
    left: Vec<Point>,
}

impl RadialPartition {
    #[inline]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Points lexicographically greater than the pivot, counterclockwise.
    #[inline]
    pub fn right(&self) -> &[Point] {
        &self.right
    }

    /// Points lexicographically smaller than the pivot, counterclockwise.
    #[inline]
    pub fn left(&self) -> &[Point] {
        &self.left
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.right.len() + self.left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right.is_empty() && self.left.is_empty()
    }

    /// Concatenate the chains into one full-turn cyclic order.
    pub fn into_cyclic(self) -> CyclicOrder {
        let RadialPartition {
            pivot,
            mut right,
            left,
        } = self;
        right.extend(left);
        CyclicOrder {
            pivot,
            points: right,
        }
    }
}

/// Partition `points` into the two angularly sorted chains around `pivot`.
pub fn sort_around_point(pivot: Point, points: &[Point]) -> RadialPartition {
    let mut right = Vec::with_capacity(points.len());
    let mut left = Vec::new();
    for &q in points {
        match loc_cmp(q, pivot) {
            Ordering::Greater => right.push(q),
            Ordering::Less => left.push(q),
            Ordering::Equal => {}
        }
    }
    right.sort_by(|&a, &b| ccw_cmp(pivot, a, b));
    left.sort_by(|&a, &b| ccw_cmp(pivot, a, b));
    RadialPartition { pivot, right, left }
}

/// A full-turn angular order around a pivot, supporting in-place
/// re-anchoring and orientation flips.
#[derive(Clone, Debug)]
pub struct CyclicOrder {
    pivot: Point,
    points: Vec<Point>,
}

impl CyclicOrder {
    #[inline]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Re-anchor the sweep: rotate the order so the current element `k`
    /// becomes the first. O(n), no angular recomputation.
    pub fn shift(&mut self, k: usize) {
        if !self.points.is_empty() {
            let k = k % self.points.len();
            self.points.rotate_left(k);
        }
    }

    /// Flip to the clockwise sweep (and back). The first element stays the
    /// anchor of the new orientation's tail.
    pub fn reverse_in_place(&mut self) {
        self.points.reverse();
    }
}
