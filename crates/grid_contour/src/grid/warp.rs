//! Curvilinear warp grids mapping grid indices to physical coordinates.
use glam::DVec2;

use crate::error::{Error, Result};
use crate::grid::ScalarGrid;

/// Fractional index parts at or below this are treated as lying on the node
/// itself, which also keeps the neighbor lookup in bounds on the last
/// column/row.
const FRACTION_EPS: f64 = 1e-6;

/// Physical node coordinates for a scalar grid, one coordinate grid per axis.
///
/// Each axis is remapped independently using only the neighbor along that
/// axis, not a four-corner bilinear blend. This is exact for axis-aligned
/// (possibly non-uniform) warps; strongly skewed or rotated warps pick up a
/// small geometric error.
#[derive(Clone, Debug)]
pub struct WarpGrids {
    x: ScalarGrid,
    y: ScalarGrid,
}

impl WarpGrids {
    /// Pairs the per-axis coordinate grids, which must have equal dimensions.
    pub fn new(x: ScalarGrid, y: ScalarGrid) -> Result<Self> {
        if x.width() != y.width() || x.height() != y.height() {
            return Err(Error::DimensionMismatch {
                expected: (x.width(), x.height()),
                found: (y.width(), y.height()),
            });
        }
        Ok(Self { x, y })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.x.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.x.height()
    }

    /// Remaps a fractional index-space position into physical space.
    ///
    /// `p` must lie within `[0, width-1] x [0, height-1]`; extraction output
    /// always does.
    pub fn map_point(&self, p: DVec2) -> DVec2 {
        let i = p.x as usize;
        let j = p.y as usize;
        let mi = p.x - i as f64;
        let mj = p.y - j as f64;
        let mut x = self.x.value(i, j);
        if mi > FRACTION_EPS {
            x += mi * (self.x.value(i + 1, j) - x);
        }
        let mut y = self.y.value(i, j);
        if mj > FRACTION_EPS {
            y += mj * (self.y.value(i, j + 1) - y);
        }
        DVec2::new(x, y)
    }
}
