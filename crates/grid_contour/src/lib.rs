#![forbid(unsafe_code)]
//! grid_contour: isoline and isoband extraction from gridded 2D scalar fields.
//!
//! Modules:
//! - grid: scalar sample grids and optional curvilinear warp grids
//! - contour: meandering-triangles extraction of line segments and color-graded bands
//! - color: packed ARGB colors and channel-wise blending
//!
//! Extraction is a pure function of (grid, warp grids, thresholds, colors) and
//! returns freshly allocated primitive lists the caller hands to a renderer.
//! For examples and docs, see README and docs.rs.
pub mod color;
pub mod contour;
pub mod error;
pub mod grid;

/// Convenient re-exports for common types. Import with `use grid_contour::prelude::*;`.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::contour::cell::{BandCase, BandSide, CellTriangle, Corner, LineCase};
    pub use crate::contour::primitives::{ColoredTriangle, Segment};
    pub use crate::contour::{
        compute_contour_bands, compute_contour_bands_warped, compute_contour_lines,
        compute_contour_lines_warped,
    };
    pub use crate::error::{Error, Result};
    pub use crate::grid::{ScalarGrid, WarpGrids};
}
