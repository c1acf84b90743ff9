//! Global counting and reporting of r-holes.
//!
//! One pass over the canonical set: each point acts once as the pivot and
//! representative lexicographically-smallest vertex, and the chain walk
//! runs over its `right` chain (exactly the lexicographically greater
//! points, angularly sorted). Emptiness scans stay within that chain: a fan
//! triangle rooted at the pivot lies in the closed wedge strictly above the
//! downward reference ray, which no lexicographically smaller point can
//! enter.

use crate::error::{Error, Result};
use crate::geom::{sort_around_point, Point};

use super::walk::{grow_chains, Closure};
use super::{canonical, Polygon};

/// Count the empty convex `r`-gons in `points`; with `mono`, only those
/// whose vertices all share one color value.
pub fn count_convex_rholes(points: &[Point], r: usize, mono: bool) -> Result<u64> {
    let mut count = 0u64;
    enumerate_rholes(points, r, mono, &mut |_| count += 1)?;
    Ok(count)
}

/// Report every empty convex `r`-gon in `points` as a counterclockwise
/// vertex sequence. Same enumeration as [`count_convex_rholes`], in
/// deterministic order (pivots lexicographically, chains in walk order).
pub fn report_convex_rholes(points: &[Point], r: usize, mono: bool) -> Result<Vec<Polygon>> {
    let mut holes = Vec::new();
    enumerate_rholes(points, r, mono, &mut |boundary| {
        holes.push(Polygon {
            vertices: boundary.to_vec(),
        })
    })?;
    Ok(holes)
}

fn enumerate_rholes(
    points: &[Point],
    r: usize,
    mono: bool,
    emit: &mut dyn FnMut(&[Point]),
) -> Result<()> {
    if r < 3 {
        return Err(Error::InvalidHoleSize { r });
    }
    let pts = canonical(points);
    if pts.len() < r {
        return Ok(());
    }
    for (i, &pivot) in pts.iter().enumerate() {
        let tail = &pts[i + 1..];
        if tail.len() + 1 < r {
            break;
        }
        let part = sort_around_point(pivot, tail);
        let ring = part.right();
        debug_assert_eq!(ring.len(), tail.len());
        if mono {
            let arc: Vec<Point> = ring
                .iter()
                .copied()
                .filter(|q| q.color() == pivot.color())
                .collect();
            grow_chains(pivot, &arc, ring, r - 1, false, Closure::AtPivot, emit);
        } else {
            grow_chains(pivot, ring, ring, r - 1, false, Closure::AtPivot, emit);
        }
    }
    Ok(())
}
