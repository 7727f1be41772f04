use glam::DVec2;
use grid_contour::prelude::*;
use grid_contour_examples::{init_tracing, render_contours_to_png, RenderConfig};

/// Iso levels and palette for the demo field, darkest at the lowest level.
const ISO_VALUES: [f64; 7] = [-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0];
const ISO_COLORS: [u32; 7] = [
    0xff000000, 0xff330000, 0xff660000, 0xff993322, 0xffcc6644, 0xffff9966, 0xffffcc88,
];

fn main() -> anyhow::Result<()> {
    init_tracing();
    let resolution = 200;
    let (grid, warp) = sample_demo_field(resolution)?;

    // Sweep from the highest level down so lower levels draw on top.
    let mut lines = Vec::new();
    for k in (0..ISO_VALUES.len()).rev() {
        let segments =
            compute_contour_lines_warped(&warp, &grid, ISO_VALUES[k], Color(ISO_COLORS[k]))?;
        lines.extend(segments);
    }

    let config = RenderConfig::new(
        (1000, 1000),
        DVec2::new(-4.0, -4.0),
        DVec2::new(4.0, 4.0),
    );
    let out = "lines-multi-level.png";
    render_contours_to_png(&[], &lines, &config, out)?;
    println!("wrote {out}");
    Ok(())
}

/// Samples `exp(-(x^2+y^2)) - (x*y - (y+1)*y)` over [-4, 4] x [-4, 4],
/// returning the field plus warp grids carrying the world coordinates.
fn sample_demo_field(resolution: usize) -> anyhow::Result<(ScalarGrid, WarpGrids)> {
    let mut xs = Vec::with_capacity(resolution * resolution);
    let mut ys = Vec::with_capacity(resolution * resolution);
    let mut zs = Vec::with_capacity(resolution * resolution);
    for j in 0..resolution {
        for i in 0..resolution {
            let x = i as f64 * 8.0 / (resolution - 1) as f64 - 4.0;
            let y = j as f64 * 8.0 / (resolution - 1) as f64 - 4.0;
            let z = (-(x * x + y * y)).exp() - (x * y - (y + 1.0) * y);
            xs.push(x);
            ys.push(y);
            zs.push(z);
        }
    }
    let grid = ScalarGrid::from_raw(resolution, resolution, zs)?;
    let warp = WarpGrids::new(
        ScalarGrid::from_raw(resolution, resolution, xs)?,
        ScalarGrid::from_raw(resolution, resolution, ys)?,
    )?;
    Ok((grid, warp))
}
