//! General-position check (no three collinear points).
//!
//! For every pivot, a collinear triple through it shows up in the radial
//! partition either as an equal-angle adjacency within one chain or as an
//! antipodal coincidence between the two chains; the latter is found by
//! merging the chains against each other, comparing each left-chain point
//! with the antipode of a right-chain point via a single `turn` call.
//! O(n^2 log n) overall, dominated by the per-pivot sorts.

use super::point::{turn, Point, Turn};
use super::radial::sort_around_point;

/// True iff no two points coincide and no three distinct points are
/// collinear. Advisory: the hole search does not require it and applies its
/// documented degenerate-input policy instead.
pub fn general_position(points: &[Point]) -> bool {
    let mut by_loc: Vec<Point> = points.to_vec();
    by_loc.sort();
    if by_loc.windows(2).any(|w| w[0].same_location(&w[1])) {
        return false;
    }

    for &p in points {
        let part = sort_around_point(p, points);
        for chain in [part.right(), part.left()] {
            if chain
                .windows(2)
                .any(|w| turn(p, w[0], w[1]) == Turn::Collinear)
            {
                return false;
            }
        }
        // Antipodal coincidences: walk both chains once. `Left` means the
        // left-chain point still precedes the antipode of the right-chain
        // point, `Right` means the antipode has been passed.
        let (r, l) = (part.right(), part.left());
        let (mut i, mut j) = (0, 0);
        while i < r.len() && j < l.len() {
            match turn(p, r[i], l[j]) {
                Turn::Collinear => return false,
                Turn::Left => j += 1,
                Turn::Right => i += 1,
            }
        }
    }
    true
}
