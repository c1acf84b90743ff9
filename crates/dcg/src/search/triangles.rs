//! Empty-triangle specializations (r = 3).
//!
//! For triangles the chain bookkeeping of the general walk collapses: a
//! counterclockwise pair on a pivot's chain plus one emptiness scan decides
//! a hole, so these run as plain pair loops over the angular orders.

use crate::error::{Error, Result};
use crate::geom::{sort_around_point, turn, Point, Turn};

use super::walk::fan_triangle_empty;
use super::canonical;

/// Count the empty triangles in `points`. Equals
/// `count_convex_rholes(points, 3, false)` by the shared conventions.
pub fn count_empty_triangles(points: &[Point]) -> u64 {
    let pts = canonical(points);
    let mut count = 0u64;
    for (i, &pivot) in pts.iter().enumerate() {
        let part = sort_around_point(pivot, &pts[i + 1..]);
        let ring = part.right();
        for j in 0..ring.len() {
            for k in (j + 1)..ring.len() {
                if turn(pivot, ring[j], ring[k]) == Turn::Left
                    && fan_triangle_empty(pivot, ring[j], ring[k], ring)
                {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Count `(A, B)` for a query point: A = empty triangles of
/// `points ∪ {p}` with `p` as a vertex, B = empty triangles of `points`
/// strictly enclosing `p` and nothing else. `p` must not coincide with any
/// set point.
pub fn count_empty_triangles_p(p: Point, points: &[Point]) -> Result<(u64, u64)> {
    if points.iter().any(|q| q.same_location(&p)) {
        return Err(Error::QueryPointInSet { x: p.x(), y: p.y() });
    }
    let pts = canonical(points);
    let mut cyc = sort_around_point(p, &pts).into_cyclic();
    let m = cyc.len();

    // A: rotate the cyclic order so every point anchors once; its partners
    // are the strictly counterclockwise arc within half a turn.
    let mut vertex_triangles = 0u64;
    for _ in 0..m {
        let order = cyc.as_slice();
        let anchor = order[0];
        for &z in order[1..]
            .iter()
            .skip_while(|&&z| turn(p, anchor, z) == Turn::Collinear)
        {
            if turn(p, anchor, z) != Turn::Left {
                break;
            }
            if fan_triangle_empty(p, anchor, z, order) {
                vertex_triangles += 1;
            }
        }
        cyc.shift(1);
    }

    // B: triangles whose three fan triangles at `p` are counterclockwise
    // and empty; anchored at the least-index vertex of the fixed order.
    let mut enclosing = 0u64;
    let order = cyc.as_slice();
    for i in 0..m {
        for j in (i + 1)..m {
            if turn(p, order[i], order[j]) != Turn::Left
                || !fan_triangle_empty(p, order[i], order[j], order)
            {
                continue;
            }
            for k in (j + 1)..m {
                if turn(p, order[j], order[k]) == Turn::Left
                    && turn(p, order[k], order[i]) == Turn::Left
                    && fan_triangle_empty(p, order[j], order[k], order)
                    && fan_triangle_empty(p, order[k], order[i], order)
                {
                    enclosing += 1;
                }
            }
        }
    }

    Ok((vertex_triangles, enclosing))
}
