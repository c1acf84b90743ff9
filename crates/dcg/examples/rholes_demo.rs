//! Small demonstration: hole statistics for a random set and a Horton set.
//!
//! Purpose
//! - Show the intended call sequence (generate, validate, count, report)
//!   and give a quick feel for how hole counts behave on structured versus
//!   random sets of the same size.

use std::time::Instant;

use dcg::api::{
    count_convex_rholes, general_position, horton_set, random_point_set, report_convex_rholes,
    GridCfg, ReplayToken,
};

fn main() -> dcg::Result<()> {
    let n = 32;
    let random = random_point_set(
        n,
        GridCfg::default(),
        ReplayToken { seed: 2015, index: 0 },
    )
    .expect("default grid is large enough for 32 points");
    let horton = horton_set(n)?;

    for (name, set) in [("random", &random), ("horton", &horton)] {
        assert!(general_position(set));
        print!("{name:>7} (n = {})", set.len());
        let start = Instant::now();
        for r in 3..=7 {
            print!("  {r}-holes: {}", count_convex_rholes(set, r, false)?);
        }
        println!("  [{:.1} ms]", start.elapsed().as_secs_f64() * 1e3);
    }

    // Reported holes come back as counterclockwise vertex lists.
    let quads = report_convex_rholes(&horton, 4, false)?;
    if let Some(first) = quads.first() {
        println!("first horton 4-hole: {:?}", first.vertices);
    }
    Ok(())
}
