//! Point-set generators (deterministic via replay tokens).
//!
//! Purpose
//! - Provide reproducible integer point sets for experiments and tests:
//!   uniform grid samples (optionally rejection-filtered to general
//!   position), sets in convex position from a radial sampler, and the
//!   Horton set construction.
//!
//! Model
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG, so draw `i` of a seeded family is addressable without replaying
//!   the family.
//! - The radial sampler proposes candidates in `f64` and snaps them to the
//!   grid; acceptance is decided exactly with `turn`, never by the floats.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::geom::{turn, Point, Turn, MAX_COORD};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform grid sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    /// Coordinates are drawn from `[-side, side]`; clamped to `MAX_COORD`.
    pub side: i64,
    /// Reject candidates collinear with an existing pair, so the returned
    /// set is in general position.
    pub general_position: bool,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            side: 1 << 20,
            general_position: true,
        }
    }
}

/// Draw `n` distinct grid points uniformly from `[-side, side]^2`.
///
/// Returns `None` when the attempt budget runs out, which in practice means
/// the grid is too small for the request (e.g. a tiny `side` with
/// `general_position` on).
pub fn random_point_set(n: usize, cfg: GridCfg, tok: ReplayToken) -> Option<Vec<Point>> {
    let mut rng = tok.to_std_rng();
    let side = cfg.side.saturating_abs().clamp(1, MAX_COORD);
    let mut pts: Vec<Point> = Vec::with_capacity(n);
    let mut attempts = 200usize.saturating_mul(n).saturating_add(200);
    while pts.len() < n {
        if attempts == 0 {
            return None;
        }
        attempts -= 1;
        let x = rng.gen_range(-side..=side);
        let y = rng.gen_range(-side..=side);
        let cand = Point::new(x, y).ok()?;
        if pts.iter().any(|q| q.same_location(&cand)) {
            continue;
        }
        if cfg.general_position && violates_general_position(&pts, cand) {
            continue;
        }
        pts.push(cand);
    }
    Some(pts)
}

fn violates_general_position(pts: &[Point], cand: Point) -> bool {
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            if turn(pts[i], pts[j], cand) == Turn::Collinear {
                return true;
            }
        }
    }
    false
}

/// Draw `n ≥ 3` grid points in strictly convex position: equally spaced
/// directions with bounded angular jitter, radius `radius`, snapped to the
/// grid and validated exactly. Returns the set in counterclockwise order,
/// or `None` if no attempt survives snapping (radius too small for `n`).
pub fn convex_position_set(n: usize, radius: i64, tok: ReplayToken) -> Option<Vec<Point>> {
    if n < 3 {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let r = radius.saturating_abs().clamp(1, MAX_COORD - 1) as f64;
    let delta = std::f64::consts::TAU / n as f64;
    for _ in 0..64 {
        let phase = rng.gen::<f64>() * std::f64::consts::TAU;
        let mut pts = Vec::with_capacity(n);
        for k in 0..n {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * 0.3 * delta;
            let theta = phase + k as f64 * delta + jitter;
            let v = Vector2::new(theta.cos(), theta.sin()) * r;
            let p = Point::new(v.x.round() as i64, v.y.round() as i64).ok()?;
            pts.push(p);
        }
        if strictly_convex_ccw(&pts) {
            return Some(pts);
        }
    }
    None
}

/// Exact acceptance test for the radial sampler: consecutive triples all
/// turn left, and the sweep stays monotone around the center, which pins
/// the winding to one.
fn strictly_convex_ccw(pts: &[Point]) -> bool {
    let n = pts.len();
    let center = match Point::new(0, 0) {
        Ok(c) => c,
        Err(_) => return false,
    };
    for i in 0..n {
        let (a, b, c) = (pts[i], pts[(i + 1) % n], pts[(i + 2) % n]);
        if turn(a, b, c) != Turn::Left {
            return false;
        }
        if turn(center, a, b) != Turn::Left {
            return false;
        }
    }
    true
}

/// The Horton set on `n` points: interleave a doubled copy of the
/// half-size set with a displaced doubled copy, displacement
/// `g_k = f_k - f_(k-1)` with `f_k = 2^(k(k-1)/2 - 1)`.
/// Sizes whose grid would leave the exact-arithmetic coordinate bound are
/// rejected with [`Error::CoordinateOutOfRange`].
pub fn horton_set(n: usize) -> Result<Vec<Point>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let k = n.next_power_of_two().trailing_zeros();
    // Largest coordinate in the full set is f_k; check it fits before
    // building anything.
    let exp = if k < 2 {
        0
    } else {
        u64::from(k) * u64::from(k - 1) / 2 - 1
    };
    if exp >= 63 || (1i64 << exp) > MAX_COORD {
        return Err(Error::coordinate(i64::MAX));
    }
    let mut set = horton_exp(k)?;
    set.truncate(n);
    Ok(set)
}

fn horton_exp(k: u32) -> Result<Vec<Point>> {
    if k == 0 {
        return Ok(vec![Point::new(0, 0)?]);
    }
    let g = displacement(k);
    let half = horton_exp(k - 1)?;
    let mut out = Vec::with_capacity(half.len() * 2);
    for p in &half {
        out.push(Point::new(2 * p.x(), p.y())?);
        out.push(Point::new(2 * p.x() + 1, p.y() + g)?);
    }
    Ok(out)
}

fn displacement(k: u32) -> i64 {
    if k <= 1 {
        return 0;
    }
    let f = 1i64 << (u64::from(k) * u64::from(k - 1) / 2 - 1);
    let f_prev = if k <= 2 {
        0
    } else {
        1i64 << (u64::from(k - 1) * u64::from(k - 2) / 2 - 1)
    };
    f - f_prev
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::general_position;

    const TOK: ReplayToken = ReplayToken { seed: 7, index: 0 };

    #[test]
    fn grid_sampler_is_deterministic_and_bounded() {
        let cfg = GridCfg {
            side: 500,
            general_position: true,
        };
        let a = random_point_set(12, cfg, TOK).unwrap();
        let b = random_point_set(12, cfg, TOK).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert!(a.iter().all(|p| p.x().abs() <= 500 && p.y().abs() <= 500));
        assert!(general_position(&a));
        let other = random_point_set(12, cfg, ReplayToken { seed: 7, index: 1 }).unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn grid_sampler_gives_up_on_impossible_requests() {
        let cfg = GridCfg {
            side: 1,
            general_position: false,
        };
        // A 3x3 grid cannot hold 10 distinct points.
        assert!(random_point_set(10, cfg, TOK).is_none());
    }

    #[test]
    fn convex_position_sampler_is_strictly_convex() {
        let pts = convex_position_set(12, 1 << 20, TOK).unwrap();
        assert_eq!(pts.len(), 12);
        for i in 0..pts.len() {
            let (a, b, c) = (
                pts[i],
                pts[(i + 1) % pts.len()],
                pts[(i + 2) % pts.len()],
            );
            assert_eq!(turn(a, b, c), Turn::Left);
        }
        // Strictly convex position implies general position.
        assert!(general_position(&pts));
    }

    #[test]
    fn horton_sets_match_the_construction() {
        assert!(horton_set(0).unwrap().is_empty());
        assert_eq!(horton_set(1).unwrap(), vec![Point::new(0, 0).unwrap()]);
        let h4 = horton_set(4).unwrap();
        let expect: Vec<Point> = [(0, 0), (1, 1), (2, 0), (3, 1)]
            .iter()
            .map(|&(x, y)| Point::new(x, y).unwrap())
            .collect();
        assert_eq!(h4, expect);
        // x coordinates of a full set form 0..2^k.
        let h16 = horton_set(16).unwrap();
        let mut xs: Vec<i64> = h16.iter().map(|p| p.x()).collect();
        xs.sort_unstable();
        assert_eq!(xs, (0..16).collect::<Vec<i64>>());
        assert!(general_position(&h16));
        // Truncation keeps the leading points.
        assert_eq!(&horton_set(3).unwrap()[..], &horton_set(4).unwrap()[..3]);
    }

    #[test]
    fn horton_sets_respect_the_coordinate_bound() {
        assert!(matches!(
            horton_set(1 << 13),
            Err(Error::CoordinateOutOfRange { .. })
        ));
    }
}
