use smith_geometry::prelude::*;

/// Prints each circle as the `(left, top, width, height)` rectangle an
/// ellipse-drawing call expects.
struct EllipsePrinter;

impl ChartRenderer for EllipsePrinter {
    fn draw_circle(&mut self, family: CircleFamily, value: Scalar, circle_px: &Circle) {
        let (x, y, w, h) = circle_px.bounding_box();
        println!("{family:?}, {value:.4}, {x:.2}, {y:.2}, {w:.2}, {h:.2}");
    }

    fn draw_real_axis(&mut self, half_width_px: Scalar) {
        println!("axis, 0, {:.2}, 0, {:.2}, 0", -half_width_px, 2.0 * half_width_px);
    }
}

fn main() -> Result<(), ChartError> {
    env_logger::init();

    let config = ChartConfig::new(SweepSpec::default(), LARGE_PIXEL_SCALE)?;
    println!("family, value, left(px), top(px), width(px), height(px)");
    let drawn = render_chart(&config, &mut EllipsePrinter)?;
    eprintln!("{drawn} circles");

    // Place a measured 25 - j40 ohm load on the same chart.
    let z = CScalar::new(25.0, -40.0);
    if let Some(gamma) = normalize_impedance(z, DEFAULT_REFERENCE_IMPEDANCE)
        .and_then(reflection_coefficient)
    {
        let px = gamma * config.pixel_scale();
        println!("point, {z}, {:.2}, {:.2}, 0, 0", px.re, px.im);
    }
    Ok(())
}
