//! Meandering-triangles contour extraction.
//!
//! Every grid cell splits along a fixed diagonal into two triangles (see
//! [`cell`]); each triangle is classified against one or two thresholds and
//! per-case interpolation turns the classification into [`Segment`]s or
//! color-graded [`ColoredTriangle`]s. Primitives are emitted in row-major
//! cell order, upper triangle before lower, and that order is part of the
//! contract: callers layering several extraction calls at different
//! thresholds rely on within-call order being stable.
pub mod band;
pub mod cell;
pub mod line;
pub mod primitives;

use tracing::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::grid::{ScalarGrid, WarpGrids};
use cell::CellTriangle;
use primitives::{ColoredTriangle, Segment};

/// Extracts the isoline at `iso_value` as segments in index space, all
/// carrying `color`.
pub fn compute_contour_lines(grid: &ScalarGrid, iso_value: f64, color: Color) -> Vec<Segment> {
    let mut segments = Vec::new();
    for_each_triangle(grid, |tri| {
        if let Some(segment) = line::segment_for_triangle(&tri, iso_value, color) {
            segments.push(segment);
        }
    });
    debug!(
        width = grid.width(),
        height = grid.height(),
        segments = segments.len(),
        "extracted contour lines"
    );
    segments
}

/// Extracts the isoline at `iso_value` and remaps every vertex into physical
/// space through `warp`.
pub fn compute_contour_lines_warped(
    warp: &WarpGrids,
    grid: &ScalarGrid,
    iso_value: f64,
    color: Color,
) -> Result<Vec<Segment>> {
    check_warp(warp, grid)?;
    let mut segments = compute_contour_lines(grid, iso_value, color);
    for segment in &mut segments {
        segment.p0 = warp.map_point(segment.p0);
        segment.p1 = warp.map_point(segment.p1);
    }
    Ok(segments)
}

/// Extracts the isoband between `iso_value1` and `iso_value2` as gradient
/// triangles in index space.
///
/// The thresholds need not be ordered; each travels with its color when the
/// pair is swapped into place. Equal thresholds are not an error and produce
/// an empty or degenerate result.
pub fn compute_contour_bands(
    grid: &ScalarGrid,
    iso_value1: f64,
    iso_value2: f64,
    color1: Color,
    color2: Color,
) -> Vec<ColoredTriangle> {
    let (iso1, iso2, c1, c2) = if iso_value1 > iso_value2 {
        (iso_value2, iso_value1, color2, color1)
    } else {
        (iso_value1, iso_value2, color1, color2)
    };
    let mut triangles = Vec::new();
    for_each_triangle(grid, |tri| {
        band::triangles_for_triangle(&tri, iso1, iso2, c1, c2, &mut triangles);
    });
    debug!(
        width = grid.width(),
        height = grid.height(),
        triangles = triangles.len(),
        "extracted contour bands"
    );
    triangles
}

/// Extracts the isoband and remaps every vertex into physical space through
/// `warp`.
pub fn compute_contour_bands_warped(
    warp: &WarpGrids,
    grid: &ScalarGrid,
    iso_value1: f64,
    iso_value2: f64,
    color1: Color,
    color2: Color,
) -> Result<Vec<ColoredTriangle>> {
    check_warp(warp, grid)?;
    let mut triangles = compute_contour_bands(grid, iso_value1, iso_value2, color1, color2);
    for triangle in &mut triangles {
        for position in &mut triangle.positions {
            *position = warp.map_point(*position);
        }
    }
    Ok(triangles)
}

/// Visits both triangles of every cell in row-major order, upper before
/// lower. The emission order of all extraction output follows from this.
fn for_each_triangle(grid: &ScalarGrid, mut visit: impl FnMut(CellTriangle)) {
    for j in 0..grid.height() - 1 {
        for i in 0..grid.width() - 1 {
            visit(CellTriangle::upper(grid, i, j));
            visit(CellTriangle::lower(grid, i, j));
        }
    }
}

fn check_warp(warp: &WarpGrids, grid: &ScalarGrid) -> Result<()> {
    if warp.width() != grid.width() || warp.height() != grid.height() {
        return Err(Error::DimensionMismatch {
            expected: (grid.width(), grid.height()),
            found: (warp.width(), warp.height()),
        });
    }
    Ok(())
}
