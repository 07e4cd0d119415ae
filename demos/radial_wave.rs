//! Circular wave on a radial map
//!
//! Writes `radial_wave.png` (2D wave) and `radial_wave_profile.png` (radial
//! profile) in the current directory.
//!
//! ```shell
//! RUST_LOG=info cargo run --example radial_wave
//! ```

use lattice_waves::{
    display_2d, make_rectangular_lattice, rmap, to_1d, ColorbarOptions, Colormap, Display2d,
};
use plotters::prelude::*;
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let n = 256;
    let boxlength = 20f64;
    let radius = rmap(n, (n as f64 / 2., n as f64 / 2.), boxlength)?;
    let wave = radius.map(|r| (2. * PI * r).cos() / r);

    let image = display_2d(
        &wave,
        &Display2d::new()
            .title("cos(2πr)/r")
            .xlabel("x [pixel]")
            .ylabel("y [pixel]")
            .cmap(Colormap::RedBlue)
            .clim(-1., 1.)
            .cb_kws(ColorbarOptions {
                label: Some("amplitude".into()),
                ..Default::default()
            })
            .filename("radial_wave.png")
            .size(768, 640),
    )?;
    println!("Image: {:?} pixels, color limits: {:?}", image.shape, image.clim);

    let profile = to_1d(&radius, &wave)?;
    let r_max = profile.radius.max();
    let (a_min, a_max) = (profile.amplitude.min(), profile.amplitude.max());

    let plot = BitMapBackend::new("radial_wave_profile.png", (768, 512)).into_drawing_area();
    plot.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&plot)
        .set_label_area_size(LabelAreaPosition::Left, 40)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .margin(10)
        .build_cartesian_2d(0f64..r_max, a_min..a_max)?;
    chart
        .configure_mesh()
        .x_desc("Radius [wavelength]")
        .y_desc("Amplitude")
        .draw()?;
    let color = colorous::TABLEAU10[0];
    chart.draw_series(LineSeries::new(
        profile.iter(),
        &RGBColor(color.r, color.g, color.b),
    ))?;
    plot.present()?;

    let rn = make_rectangular_lattice([2, 2, 2], [1., 1., 1.])?;
    println!("Rectangular lattice (2,2,2):{}", rn);

    Ok(())
}
