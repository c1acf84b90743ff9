//! Point-relative hole counts.
//!
//! For a query point `p` outside the set, counts (A) the r-holes of
//! `points ∪ {p}` that use `p` as a vertex and (B) the empty convex r-gons
//! of `points` that strictly enclose `p` and nothing else.
//!
//! Both counts walk the same full-turn cyclic order around `p`. The A count
//! re-anchors that order with `shift`, one rotation per candidate cone
//! start, so each hole through `p` is generated exactly once from the
//! angularly first of its other vertices. The B count keeps the order fixed
//! and anchors each enclosing polygon at its least-index vertex.

use crate::error::{Error, Result};
use crate::geom::{sort_around_point, turn, Point, Turn};

use super::walk::{grow_chains, Closure};
use super::canonical;

/// Count `(A, B)` for query point `p` against `points`:
/// A = r-holes with `p` as a vertex, B = empty convex r-gons enclosing only
/// `p`. With `mono`, a hole's vertices must share one color value (`p`
/// included for A; B looks only at set vertices).
///
/// `p` must not coincide with any set point.
pub fn count_convex_rholes_p(
    p: Point,
    points: &[Point],
    r: usize,
    mono: bool,
) -> Result<(u64, u64)> {
    if r < 3 {
        return Err(Error::InvalidHoleSize { r });
    }
    if points.iter().any(|q| q.same_location(&p)) {
        return Err(Error::QueryPointInSet { x: p.x(), y: p.y() });
    }
    let pts = canonical(points);
    let mut cyc = sort_around_point(p, &pts).into_cyclic();
    let m = cyc.len();

    let mut vertex_holes = 0u64;
    if m + 1 >= r {
        for _ in 0..m {
            let order = cyc.as_slice();
            let anchor = order[0];
            if !mono || anchor.color() == p.color() {
                // The cone of a hole through `p` starts at `anchor` and
                // spans less than half a turn: collect the strictly
                // counterclockwise arc, skipping anchor-ray points first so
                // a farther tie does not cut the arc short.
                let mut arc = Vec::with_capacity(m);
                arc.push(anchor);
                for &z in order[1..]
                    .iter()
                    .skip_while(|&&z| turn(p, anchor, z) == Turn::Collinear)
                {
                    if turn(p, anchor, z) != Turn::Left {
                        break;
                    }
                    if !mono || z.color() == p.color() {
                        arc.push(z);
                    }
                }
                grow_chains(p, &arc, order, r - 1, true, Closure::AtPivot, &mut |_| {
                    vertex_holes += 1
                });
            }
            cyc.shift(1);
        }
    }

    // After m unit shifts the order is back in its original anchoring.
    let mut enclosing = 0u64;
    if m >= r {
        let order = cyc.as_slice();
        for s in 0..=(m - r) {
            let first = order[s];
            let mut arc = Vec::with_capacity(m - s);
            arc.push(first);
            arc.extend(
                order[s + 1..]
                    .iter()
                    .copied()
                    .filter(|z| !mono || z.color() == first.color()),
            );
            grow_chains(p, &arc, order, r, true, Closure::AtFirst, &mut |_| {
                enclosing += 1
            });
        }
    }

    Ok((vertex_holes, enclosing))
}
