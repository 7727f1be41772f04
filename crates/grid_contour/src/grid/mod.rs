//! Sample grids consumed by contour extraction.
//!
//! This module defines [`ScalarGrid`] for the sampled field itself and
//! [`WarpGrids`] for the optional curvilinear coordinate remap applied to
//! extraction output.
pub mod scalar;
pub mod warp;

pub use scalar::ScalarGrid;
pub use warp::WarpGrids;
