use std::error::Error;
use std::f64::consts::PI;
use std::path::Path;

use nalgebra::DVector;
use plotters::prelude::*;

/// A named curve and the color it is drawn with.
pub type Series<'a> = (&'a str, &'a DVector<f64>, RGBColor);

/// Spacing between the radial grid rings on the polar plane.
const RING_STEP: f64 = 0.5;

/// Pixel width of the data area in series charts.
const SERIES_PLOT_WIDTH: u32 = 720;

/// Converts a polar sample to Cartesian coordinates.
///
/// Negative radii reflect through the origin, matching the usual polar
/// plotting convention.
pub fn polar_to_cartesian(theta: f64, radius: f64) -> (f64, f64) {
    (radius * theta.cos(), radius * theta.sin())
}

/// Draws one or more labeled curves over a shared x domain.
pub fn plot_series(
    out_path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    xs: &DVector<f64>,
    series: &[Series],
) -> Result<(), Box<dyn Error>> {
    let x_min = xs[0];
    let x_max = xs[xs.len() - 1];

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, ys, _) in series {
        for &y in ys.iter() {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() || (y_max - y_min).abs() < 1e-12 {
        y_min = -1.0;
        y_max = 1.0;
    }
    let pad = 0.05 * (y_max - y_min);

    // Equal axis scales: one data unit covers the same pixel count on both
    // axes, as close as the label areas allow.
    let x_span = x_max - x_min;
    let y_span = (y_max - y_min) + 2.0 * pad;
    let plot_height = (SERIES_PLOT_WIDTH as f64 * y_span / x_span)
        .round()
        .clamp(200.0, 2000.0) as u32;

    let root = BitMapBackend::new(out_path, (SERIES_PLOT_WIDTH + 80, plot_height + 90))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))?;

    chart.configure_mesh().x_desc(x_desc).y_desc(y_desc).draw()?;

    for (label, ys, color) in series {
        let color = *color;
        chart
            .draw_series(LineSeries::new(
                xs.iter().zip(ys.iter()).map(|(&x, &y)| (x, y)),
                &color,
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draws radius curves on the polar plane over a radial grid.
///
/// Every series shares the angle sequence `thetas`. The canvas is square and
/// both axis ranges are symmetric, so the grid rings render as circles.
pub fn plot_polar_shape(
    out_path: &Path,
    caption: &str,
    thetas: &DVector<f64>,
    series: &[Series],
) -> Result<(), Box<dyn Error>> {
    let mut r_max: f64 = 0.0;
    for (_, rs, _) in series {
        for &r in rs.iter() {
            r_max = r_max.max(r.abs());
        }
    }
    let rings = ((r_max / RING_STEP).ceil() as usize).max(1);
    let outer = rings as f64 * RING_STEP;
    let lim = outer * 1.1;

    let root = BitMapBackend::new(out_path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(-lim..lim, -lim..lim)?;

    chart.configure_mesh().disable_mesh().draw()?;

    // Radial grid: concentric rings plus a spoke every 45 degrees.
    for k in 1..=rings {
        chart.draw_series(std::iter::once(PathElement::new(
            ring_points(k as f64 * RING_STEP),
            BLACK.mix(0.15),
        )))?;
    }
    for k in 0..8 {
        let angle = k as f64 * PI / 4.0;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), polar_to_cartesian(angle, outer)],
            BLACK.mix(0.15),
        )))?;
    }

    for (label, rs, color) in series {
        let color = *color;
        chart
            .draw_series(LineSeries::new(
                thetas
                    .iter()
                    .zip(rs.iter())
                    .map(|(&theta, &r)| polar_to_cartesian(theta, r)),
                &color,
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draws a single time-domain curve with a grid.
///
/// The x range is widened to `[-period / 2, 2 * period]` around the sampled
/// window so the wave sits inside visible margins.
pub fn plot_waveform(
    out_path: &Path,
    caption: &str,
    times: &DVector<f64>,
    samples: &DVector<f64>,
    period: f64,
) -> Result<(), Box<dyn Error>> {
    let mut y_max: f64 = 0.0;
    for &y in samples.iter() {
        y_max = y_max.max(y.abs());
    }
    if y_max < 1e-12 {
        y_max = 1.0;
    }
    let pad = 0.1 * y_max;

    let root = BitMapBackend::new(out_path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (-period / 2.0)..(2.0 * period),
            (-y_max - pad)..(y_max + pad),
        )?;

    chart
        .configure_mesh()
        .x_desc("time (s)")
        .y_desc("amplitude")
        .draw()?;

    chart.draw_series(LineSeries::new(
        times.iter().zip(samples.iter()).map(|(&t, &y)| (t, y)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

fn ring_points(radius: f64) -> Vec<(f64, f64)> {
    let n = 128;
    (0..=n)
        .map(|i| polar_to_cartesian(2.0 * PI * (i as f64) / (n as f64), radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn polar_conversion_puts_zero_angle_on_the_x_axis() {
        let (x, y) = polar_to_cartesian(0.0, 1.5);
        assert_abs_diff_eq!(x, 1.5);
        assert_abs_diff_eq!(y, 0.0);
    }

    #[test]
    fn negative_radius_reflects_through_the_origin() {
        let (x, y) = polar_to_cartesian(PI / 2.0, -1.0);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn ring_outline_is_closed() {
        let points = ring_points(1.0);
        let first = points.first().copied().unwrap();
        let last = points.last().copied().unwrap();
        assert_abs_diff_eq!(first.0, last.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.1, last.1, epsilon = 1e-9);
    }
}
