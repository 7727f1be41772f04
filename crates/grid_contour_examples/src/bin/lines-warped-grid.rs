use glam::DVec2;
use grid_contour::prelude::*;
use grid_contour_examples::{init_tracing, render_contours_to_png, RenderConfig};

/// Contours of a field sampled on a non-uniform grid: quadratic node
/// spacing along x, square-root spacing along y. The same index-space
/// extraction lands at different physical positions through the warp.
fn main() -> anyhow::Result<()> {
    init_tracing();
    let resolution = 120;

    let mut xs = Vec::with_capacity(resolution * resolution);
    let mut ys = Vec::with_capacity(resolution * resolution);
    let mut zs = Vec::with_capacity(resolution * resolution);
    for j in 0..resolution {
        for i in 0..resolution {
            let u = i as f64 / (resolution - 1) as f64;
            let v = j as f64 / (resolution - 1) as f64;
            let x = u * u * 10.0;
            let y = v.sqrt() * 10.0;
            xs.push(x);
            ys.push(y);
            zs.push((x * 0.8).sin() * (y * 0.6).cos());
        }
    }
    let grid = ScalarGrid::from_raw(resolution, resolution, zs)?;
    let warp = WarpGrids::new(
        ScalarGrid::from_raw(resolution, resolution, xs)?,
        ScalarGrid::from_raw(resolution, resolution, ys)?,
    )?;

    let levels = [-0.6, -0.2, 0.2, 0.6];
    let colors = [0xff1b2a49, 0xff3e6990, 0xffaabd8c, 0xffe9b872];
    let mut lines = Vec::new();
    for k in (0..levels.len()).rev() {
        lines.extend(compute_contour_lines_warped(
            &warp,
            &grid,
            levels[k],
            Color(colors[k]),
        )?);
    }

    let config = RenderConfig::new(
        (1000, 1000),
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 10.0),
    )
    .with_background([250, 248, 243]);
    let out = "lines-warped-grid.png";
    render_contours_to_png(&[], &lines, &config, out)?;
    println!("wrote {out}");
    Ok(())
}
