//! PyO3 bindings for the hole-search operations.
//!
//! Notes
//! - Keep bindings thin and predictable: points cross the boundary as lists
//!   of `[x, y]` / `[x, y, color]` rows, holes come back the same way.
//! - All algorithmic content lives in the `dcg` crate; this module only
//!   decodes, dispatches, and maps errors (out-of-range coordinates to
//!   `OverflowError`, the remaining domain errors to `ValueError`).

use pyo3::exceptions::{PyOverflowError, PyValueError};
use pyo3::prelude::*;

use dcg::api::{Error, Point, Polygon};

fn decode_point(row: &[i64]) -> PyResult<Point> {
    let p = match *row {
        [x, y] => Point::new(x, y),
        [x, y, color] => {
            let color = i32::try_from(color)
                .map_err(|_| PyValueError::new_err(format!("color {color} does not fit i32")))?;
            Point::colored(x, y, color)
        }
        _ => {
            return Err(PyValueError::new_err(
                "wrong number of values representing a point, must be 2 or 3",
            ))
        }
    };
    p.map_err(to_py_err)
}

fn decode_points(rows: Vec<Vec<i64>>) -> PyResult<Vec<Point>> {
    rows.iter().map(|row| decode_point(row)).collect()
}

fn encode_point(p: &Point) -> Vec<i64> {
    match p.color() {
        Some(c) => vec![p.x(), p.y(), i64::from(c)],
        None => vec![p.x(), p.y()],
    }
}

fn encode_polygon(hole: &Polygon) -> Vec<Vec<i64>> {
    hole.vertices.iter().map(encode_point).collect()
}

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::CoordinateOutOfRange { .. } => PyOverflowError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Count the empty convex r-gons in a point set.
#[pyfunction]
#[pyo3(signature = (points, r, mono = false))]
fn count_convex_rholes(points: Vec<Vec<i64>>, r: usize, mono: bool) -> PyResult<u64> {
    let pts = decode_points(points)?;
    dcg::api::count_convex_rholes(&pts, r, mono).map_err(to_py_err)
}

/// Count the r-holes with `p` as a vertex and the empty convex r-gons with
/// only `p` inside; `p` must not belong to `points`.
#[pyfunction]
#[pyo3(signature = (p, points, r, mono = false))]
fn count_convex_rholes_p(
    p: Vec<i64>,
    points: Vec<Vec<i64>>,
    r: usize,
    mono: bool,
) -> PyResult<(u64, u64)> {
    let query = decode_point(&p)?;
    let pts = decode_points(points)?;
    dcg::api::count_convex_rholes_p(query, &pts, r, mono).map_err(to_py_err)
}

/// Report the r-holes of a point set as counterclockwise vertex lists.
#[pyfunction]
#[pyo3(signature = (points, r, mono = false))]
fn report_convex_rholes(
    points: Vec<Vec<i64>>,
    r: usize,
    mono: bool,
) -> PyResult<Vec<Vec<Vec<i64>>>> {
    let pts = decode_points(points)?;
    let holes = dcg::api::report_convex_rholes(&pts, r, mono).map_err(to_py_err)?;
    Ok(holes.iter().map(encode_polygon).collect())
}

/// Count the empty triangles in a point set.
#[pyfunction]
fn count_empty_triangles(points: Vec<Vec<i64>>) -> PyResult<u64> {
    let pts = decode_points(points)?;
    Ok(dcg::api::count_empty_triangles(&pts))
}

/// Count the empty triangles with `p` as a vertex and the triangles with
/// only `p` inside; `p` must not belong to `points`.
#[pyfunction]
fn count_empty_triangles_p(p: Vec<i64>, points: Vec<Vec<i64>>) -> PyResult<(u64, u64)> {
    let query = decode_point(&p)?;
    let pts = decode_points(points)?;
    dcg::api::count_empty_triangles_p(query, &pts).map_err(to_py_err)
}

/// Check whether a point set is in general position.
#[pyfunction]
fn general_position(points: Vec<Vec<i64>>) -> PyResult<bool> {
    let pts = decode_points(points)?;
    Ok(dcg::api::general_position(&pts))
}

#[pymodule]
fn dcg_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(count_convex_rholes, m)?)?;
    m.add_function(wrap_pyfunction!(count_convex_rholes_p, m)?)?;
    m.add_function(wrap_pyfunction!(report_convex_rholes, m)?)?;
    m.add_function(wrap_pyfunction!(count_empty_triangles, m)?)?;
    m.add_function(wrap_pyfunction!(count_empty_triangles_p, m)?)?;
    m.add_function(wrap_pyfunction!(general_position, m)?)?;
    m.add("VERSION", dcg::VERSION)?;
    Ok(())
}
