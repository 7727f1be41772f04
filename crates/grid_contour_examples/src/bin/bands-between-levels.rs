use glam::DVec2;
use grid_contour::prelude::*;
use grid_contour_examples::{init_tracing, render_contours_to_png, RenderConfig};

const ISO_VALUES: [f64; 7] = [-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0];
const ISO_COLORS: [u32; 7] = [
    0xff000000, 0xff330000, 0xff660000, 0xff993322, 0xffcc6644, 0xffff9966, 0xffffcc88,
];

fn main() -> anyhow::Result<()> {
    init_tracing();
    let resolution = 200;
    let (grid, warp) = sample_demo_field(resolution)?;

    // Bands between consecutive levels, then the level lines on top.
    let mut bands = Vec::new();
    for k in 0..ISO_VALUES.len() - 1 {
        let triangles = compute_contour_bands_warped(
            &warp,
            &grid,
            ISO_VALUES[k],
            ISO_VALUES[k + 1],
            Color(ISO_COLORS[k]),
            Color(ISO_COLORS[k + 1]),
        )?;
        bands.extend(triangles);
    }
    let mut lines = Vec::new();
    for k in (0..ISO_VALUES.len()).rev() {
        lines.extend(compute_contour_lines_warped(
            &warp,
            &grid,
            ISO_VALUES[k],
            Color(ISO_COLORS[k]),
        )?);
    }

    let config = RenderConfig::new(
        (1000, 1000),
        DVec2::new(-4.0, -4.0),
        DVec2::new(4.0, 4.0),
    )
    .with_band_alpha(0.3);
    let out = "bands-between-levels.png";
    render_contours_to_png(&bands, &lines, &config, out)?;
    println!("wrote {out}");
    Ok(())
}

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
