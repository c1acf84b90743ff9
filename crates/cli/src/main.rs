use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use dcg::api::{
    convex_position_set, count_convex_rholes, count_convex_rholes_p, count_empty_triangles,
    general_position, horton_set, random_point_set, report_convex_rholes, GridCfg, Point,
    ReplayToken,
};

mod points_io;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Hole statistics and point-set utilities")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Count the empty convex r-gons in a point file
    Count {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        r: usize,
        #[arg(long)]
        mono: bool,
        /// Optional query point "x,y": report (vertex, enclosing) counts
        /// relative to it instead of the global count
        #[arg(long)]
        at: Option<String>,
    },
    /// Report every empty convex r-gon as JSON (stdout or --out)
    Report {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        r: usize,
        #[arg(long)]
        mono: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Count the empty triangles in a point file
    Triangles {
        #[arg(long)]
        input: PathBuf,
    },
    /// Check whether a point file is in general position
    Check {
        #[arg(long)]
        input: PathBuf,
    },
    /// Generate a point file (kinds: horton, grid, convex)
    Gen {
        #[arg(long)]
        kind: String,
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Count { input, r, mono, at } => count(input, r, mono, at),
        Action::Report { input, r, mono, out } => report(input, r, mono, out),
        Action::Triangles { input } => triangles(input),
        Action::Check { input } => check(input),
        Action::Gen { kind, n, seed, out } => gen(kind, n, seed, out),
    }
}

fn count(input: PathBuf, r: usize, mono: bool, at: Option<String>) -> Result<()> {
    let pts = points_io::read_points(&input)?;
    match at {
        None => {
            let holes = count_convex_rholes(&pts, r, mono)?;
            tracing::info!(n = pts.len(), r, mono, holes, "count");
            println!("{holes}");
        }
        Some(raw) => {
            let p = parse_query_point(&raw)?;
            let (vertex, enclosing) = count_convex_rholes_p(p, &pts, r, mono)?;
            tracing::info!(n = pts.len(), r, mono, vertex, enclosing, "count_at");
            println!("{vertex} {enclosing}");
        }
    }
    Ok(())
}

fn report(input: PathBuf, r: usize, mono: bool, out: Option<PathBuf>) -> Result<()> {
    let pts = points_io::read_points(&input)?;
    let holes = report_convex_rholes(&pts, r, mono)?;
    tracing::info!(n = pts.len(), r, mono, holes = holes.len(), "report");
    let json = serde_json::to_string(&points_io::encode_report(pts.len(), r, mono, &holes))?;
    match out {
        Some(path) => std::fs::write(&path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn triangles(input: PathBuf) -> Result<()> {
    let pts = points_io::read_points(&input)?;
    let count = count_empty_triangles(&pts);
    tracing::info!(n = pts.len(), count, "triangles");
    println!("{count}");
    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    let pts = points_io::read_points(&input)?;
    let ok = general_position(&pts);
    tracing::info!(n = pts.len(), general_position = ok, "check");
    println!("{ok}");
    Ok(())
}

fn gen(kind: String, n: usize, seed: u64, out: PathBuf) -> Result<()> {
    let tok = ReplayToken { seed, index: 0 };
    let pts = match kind.as_str() {
        "horton" => horton_set(n)?,
        "grid" => match random_point_set(n, GridCfg::default(), tok) {
            Some(pts) => pts,
            None => bail!("grid sampler gave up; try a larger grid or smaller n"),
        },
        "convex" => match convex_position_set(n, 1 << 20, tok) {
            Some(pts) => pts,
            None => bail!("convex sampler gave up; try a larger radius or smaller n"),
        },
        other => bail!("unknown kind {other:?}; expected horton, grid or convex"),
    };
    tracing::info!(kind, n = pts.len(), seed, out = %out.display(), "gen");
    points_io::write_points(&out, &pts)?;
    Ok(())
}

fn parse_query_point(raw: &str) -> Result<Point> {
    let parts: Vec<&str> = raw.split(',').collect();
    let &[x, y] = parts.as_slice() else {
        bail!("query point must be \"x,y\", got {raw:?}");
    };
    Ok(Point::new(x.trim().parse()?, y.trim().parse()?)?)
}
