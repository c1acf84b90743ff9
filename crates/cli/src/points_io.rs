//! JSON codec for point files.
//!
//! The interchange representation is a list of rows, each `[x, y]` or
//! `[x, y, color]`. This module is the decode/encode adapter pair around
//! the core: the core never sees raw rows, callers never see `Point`
//! internals.

use std::path::Path;

use anyhow::{bail, Context, Result};
use dcg::api::{Point, Polygon};

/// Decode raw rows into validated points.
pub fn decode_points(rows: &[Vec<i64>]) -> Result<Vec<Point>> {
    let mut pts = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let p = match row[..] {
            [x, y] => Point::new(x, y),
            [x, y, color] => {
                let color = i32::try_from(color)
                    .with_context(|| format!("row {i}: color {color} does not fit i32"))?;
                Point::colored(x, y, color)
            }
            _ => bail!(
                "row {i}: a point needs 2 or 3 values, got {}",
                row.len()
            ),
        };
        pts.push(p.with_context(|| format!("row {i}"))?);
    }
    Ok(pts)
}

/// Encode a point back into its row representation.
pub fn encode_point(p: &Point) -> Vec<i64> {
    match p.color() {
        Some(c) => vec![p.x(), p.y(), i64::from(c)],
        None => vec![p.x(), p.y()],
    }
}

/// Read and decode a JSON point file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let rows: Vec<Vec<i64>> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    decode_points(&rows)
}

/// Encode and write a point set as a JSON point file.
pub fn write_points(path: &Path, pts: &[Point]) -> Result<()> {
    let rows: Vec<Vec<i64>> = pts.iter().map(encode_point).collect();
    let raw = serde_json::to_string(&rows)?;
    std::fs::write(path, raw).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Serialized result of a report run.
#[derive(Debug, serde::Serialize)]
pub struct HoleReport {
    pub n: usize,
    pub r: usize,
    pub mono: bool,
    /// Each hole as its counterclockwise vertex rows.
    pub holes: Vec<Vec<Vec<i64>>>,
}

/// Encode reported holes, with the run parameters, for JSON output.
pub fn encode_report(n: usize, r: usize, mono: bool, holes: &[Polygon]) -> HoleReport {
    HoleReport {
        n,
        r,
        mono,
        holes: holes
            .iter()
            .map(|h| h.vertices.iter().map(encode_point).collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pts.json");
        std::fs::write(&path, "[[0,2],[1,0,1],[2,4,0]]").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0].color(), None);
        assert_eq!(pts[1].color(), Some(1));

        let back = dir.path().join("back.json");
        write_points(&back, &pts).unwrap();
        assert_eq!(read_points(&back).unwrap(), pts);
    }

    #[test]
    fn bad_rows_are_rejected() {
        assert!(decode_points(&[vec![1]]).is_err());
        assert!(decode_points(&[vec![1, 2, 3, 4]]).is_err());
        assert!(decode_points(&[vec![i64::MAX, 0]]).is_err());
    }

    #[test]
    fn report_encoding_keeps_vertex_rows() {
        let pts = decode_points(&[vec![0, 0], vec![3, 0, 2], vec![0, 3]]).unwrap();
        let hole = Polygon {
            vertices: pts.clone(),
        };
        let report = encode_report(3, 3, false, &[hole]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"holes\":[[[0,0],[3,0,2],[0,3]]]"));
    }
}
