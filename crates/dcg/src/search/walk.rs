//! The shared convex-chain walk.
//!
//! Grows strictly convex chains over an angularly ordered arc around a
//! pivot. Every extension must advance strictly in angle, keep the chain
//! strictly convex, and keep the pivot fan triangle of the new edge empty;
//! a chain that reaches the requested length and passes the closure checks
//! is emitted as one polygon. Both counting and reporting run this walk, so
//! their agreement is structural rather than tested-for.

use crate::geom::{turn, Point, Turn};

/// How a completed chain closes into a polygon.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Closure {
    /// The pivot is a vertex: the polygon is the pivot followed by the
    /// chain, and the last chain vertex closes back to the pivot.
    AtPivot,
    /// The pivot is enclosed: the polygon is the chain alone, wrapping
    /// around the pivot and closing back to its first vertex.
    AtFirst,
}

/// True iff the closed triangle `(pivot, u, w)` contains no blocker other
/// than points coinciding with its vertices. Requires `turn(pivot, u, w) ==
/// Left`; boundary contact counts as blocking (the hole region is closed).
pub(crate) fn fan_triangle_empty(pivot: Point, u: Point, w: Point, blockers: &[Point]) -> bool {
    debug_assert_eq!(turn(pivot, u, w), Turn::Left);
    for &z in blockers {
        if z.same_location(&pivot) || z.same_location(&u) || z.same_location(&w) {
            continue;
        }
        if turn(pivot, u, z) != Turn::Right
            && turn(u, w, z) != Turn::Right
            && turn(w, pivot, z) != Turn::Right
        {
            return false;
        }
    }
    true
}

/// Enumerate convex empty chains of exactly `chain_len` vertices drawn from
/// `arc` (in arc order), rooted at `pivot`.
///
/// - `arc`: angularly sorted candidates; chains are strictly increasing
///   subsequences of it. With `anchored`, every chain starts at `arc[0]`.
/// - `blockers`: the points tested against fan-triangle emptiness (the full
///   working set; `arc` may be a color-filtered subset of it).
/// - `emit` receives the completed polygon boundary in counterclockwise
///   order: pivot first for [`Closure::AtPivot`], chain-only for
///   [`Closure::AtFirst`].
pub(crate) fn grow_chains(
    pivot: Point,
    arc: &[Point],
    blockers: &[Point],
    chain_len: usize,
    anchored: bool,
    closure: Closure,
    emit: &mut dyn FnMut(&[Point]),
) {
    debug_assert!(chain_len >= 2);
    if arc.len() < chain_len {
        return;
    }
    let mut walk = Walk {
        pivot,
        arc,
        blockers,
        chain_len,
        closure,
        emit,
        poly: Vec::with_capacity(chain_len + 1),
    };
    if matches!(walk.closure, Closure::AtPivot) {
        walk.poly.push(pivot);
    }
    if anchored {
        walk.poly.push(arc[0]);
        walk.extend(0, 1);
        return;
    }
    for s in 0..=(arc.len() - chain_len) {
        walk.poly.push(arc[s]);
        walk.extend(s, 1);
        walk.poly.pop();
    }
}

struct Walk<'a> {
    pivot: Point,
    arc: &'a [Point],
    blockers: &'a [Point],
    chain_len: usize,
    closure: Closure,
    emit: &'a mut dyn FnMut(&[Point]),
    /// Current polygon boundary under construction (see `grow_chains`).
    poly: Vec<Point>,
}

impl Walk<'_> {
    fn extend(&mut self, last: usize, picked: usize) {
        if picked == self.chain_len {
            self.close();
            return;
        }
        let need = self.chain_len - picked;
        let last_pt = self.arc[last];
        for next in (last + 1)..=(self.arc.len() - need) {
            let cand = self.arc[next];
            // Strict angular advance around the pivot; collinear candidates
            // (same ray, or the antipodal direction) are non-convex here.
            if turn(self.pivot, last_pt, cand) != Turn::Left {
                continue;
            }
            // Strict convexity at the chain tip. For a chain of one vertex
            // rooted at the pivot this repeats the angular test; once the
            // chain has two vertices the predecessor takes over.
            if self.poly.len() >= 2 {
                let prev = self.poly[self.poly.len() - 2];
                if turn(prev, last_pt, cand) != Turn::Left {
                    continue;
                }
            }
            if !fan_triangle_empty(self.pivot, last_pt, cand, self.blockers) {
                continue;
            }
            self.poly.push(cand);
            self.extend(next, picked + 1);
            self.poly.pop();
        }
    }

    fn close(&mut self) {
        let n = self.poly.len();
        match self.closure {
            Closure::AtPivot => {
                // Convexity at the final chain vertex; the turn at the pivot
                // itself is implied because the whole chain spans less than
                // half a turn.
                if turn(self.poly[n - 2], self.poly[n - 1], self.pivot) == Turn::Left {
                    (self.emit)(&self.poly);
                }
            }
            Closure::AtFirst => {
                let (w1, w2) = (self.poly[0], self.poly[1]);
                let (wr_prev, wr) = (self.poly[n - 2], self.poly[n - 1]);
                if turn(self.pivot, wr, w1) == Turn::Left
                    && turn(wr_prev, wr, w1) == Turn::Left
                    && turn(wr, w1, w2) == Turn::Left
                    && fan_triangle_empty(self.pivot, wr, w1, self.blockers)
                {
                    (self.emit)(&self.poly);
                }
            }
        }
    }
}
