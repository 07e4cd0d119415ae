//! 2D data display
//!
//! Renders a 2D field as a color-mapped image with [plotters], either into a
//! new bitmap file ([display_2d]) or on a drawing area provided by the caller
//! ([display_2d_on]).
//! Row 0 of the data is at the top of the image unless [Origin::Lower] is
//! selected.
//!
//! ```no_run
//! use lattice_waves::{display_2d, rmap, Colormap, Display2d};
//!
//! let r = rmap(64, (32., 32.), 8.).unwrap();
//! let image = display_2d(
//!     &r,
//!     &Display2d::new()
//!         .title("radius")
//!         .cmap(Colormap::Magma)
//!         .filename("radius.png"),
//! )
//! .unwrap();
//! assert!(image.colorbar.is_some());
//! ```

use std::path::{Path, PathBuf};

use itertools::iproduct;
use nalgebra::DMatrix;
use plotters::{coord::Shift, prelude::*};
use serde::{Deserialize, Serialize};

mod colormap;
pub use colormap::Colormap;

#[derive(thiserror::Error, Debug)]
pub enum DisplayError {
    #[error("Cannot display an empty {0}x{1} array")]
    EmptyData(usize, usize),
    #[error("Color limits ({0}, {1}) must be finite")]
    NonFiniteLimits(f64, f64),
    #[error("Failed to draw the image: {0}")]
    Drawing(String),
}
type Result<T> = std::result::Result<T, DisplayError>;

fn drawing(e: impl std::fmt::Display) -> DisplayError {
    DisplayError::Drawing(e.to_string())
}

/// Default colorbar shrink factor
pub const SHRINK: f64 = 0.8;
const COLORBAR_WIDTH: u32 = 100;
const COLORBAR_STEPS: usize = 256;
const MINOR_TICKS: usize = 4;

/// Vertical position of the first data row
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    #[default]
    Upper,
    Lower,
}

/// Colorbar options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorbarOptions {
    /// fraction of the image height spanned by the colorbar
    pub shrink: f64,
    pub label: Option<String>,
}
impl Default for ColorbarOptions {
    fn default() -> Self {
        Self {
            shrink: SHRINK,
            label: None,
        }
    }
}

/// Display options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Display2d {
    title: String,
    xlabel: Option<String>,
    ylabel: Option<String>,
    colorbar: bool,
    cb_kws: Option<ColorbarOptions>,
    cmap: Colormap,
    vmin: Option<f64>,
    vmax: Option<f64>,
    origin: Origin,
    filename: PathBuf,
    size: (u32, u32),
}
impl Default for Display2d {
    fn default() -> Self {
        Self {
            title: String::new(),
            xlabel: None,
            ylabel: None,
            colorbar: true,
            cb_kws: None,
            cmap: Colormap::default(),
            vmin: None,
            vmax: None,
            origin: Origin::default(),
            filename: PathBuf::from("display_2d.png"),
            size: (640, 480),
        }
    }
}
impl Display2d {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn title(self, title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            ..self
        }
    }
    pub fn xlabel(self, xlabel: impl ToString) -> Self {
        Self {
            xlabel: Some(xlabel.to_string()),
            ..self
        }
    }
    pub fn ylabel(self, ylabel: impl ToString) -> Self {
        Self {
            ylabel: Some(ylabel.to_string()),
            ..self
        }
    }
    /// Shows (default) or hides the colorbar
    pub fn colorbar(self, colorbar: bool) -> Self {
        Self { colorbar, ..self }
    }
    pub fn cb_kws(self, cb_kws: ColorbarOptions) -> Self {
        Self {
            cb_kws: Some(cb_kws),
            ..self
        }
    }
    pub fn cmap(self, cmap: Colormap) -> Self {
        Self { cmap, ..self }
    }
    /// Sets the color limits, the data range is used otherwise
    pub fn clim(self, vmin: f64, vmax: f64) -> Self {
        Self {
            vmin: Some(vmin),
            vmax: Some(vmax),
            ..self
        }
    }
    pub fn vmin(self, vmin: f64) -> Self {
        Self {
            vmin: Some(vmin),
            ..self
        }
    }
    pub fn vmax(self, vmax: f64) -> Self {
        Self {
            vmax: Some(vmax),
            ..self
        }
    }
    pub fn origin(self, origin: Origin) -> Self {
        Self { origin, ..self }
    }
    /// Image file created by [display_2d]
    pub fn filename<P: AsRef<Path>>(self, filename: P) -> Self {
        Self {
            filename: filename.as_ref().to_path_buf(),
            ..self
        }
    }
    /// Image size in pixels for [display_2d]
    pub fn size(self, width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..self
        }
    }
    /// Resolves the options against the data without drawing anything
    pub fn image(&self, data: &DMatrix<f64>) -> Result<Image> {
        let (nrows, ncols) = data.shape();
        if nrows == 0 || ncols == 0 {
            return Err(DisplayError::EmptyData(nrows, ncols));
        }
        let finite = || data.iter().cloned().filter(|x| x.is_finite());
        let clim = match (
            self.vmin.or_else(|| finite().reduce(f64::min)),
            self.vmax.or_else(|| finite().reduce(f64::max)),
        ) {
            (Some(vmin), Some(vmax)) => (vmin, vmax),
            (vmin, vmax) => (vmin.unwrap_or(0f64), vmax.unwrap_or(1f64)),
        };
        if !(clim.0.is_finite() && clim.1.is_finite()) {
            return Err(DisplayError::NonFiniteLimits(clim.0, clim.1));
        }
        if clim.0 >= clim.1 {
            log::warn!("degenerate color limits: {clim:?}");
        }
        let (bottom, top) = match self.origin {
            Origin::Upper => (nrows as f64 - 0.5, -0.5),
            Origin::Lower => (-0.5, nrows as f64 - 0.5),
        };
        Ok(Image {
            shape: (nrows, ncols),
            clim,
            cmap: self.cmap,
            origin: self.origin,
            extent: [-0.5, ncols as f64 - 0.5, bottom, top],
            title: self.title.clone(),
            xlabel: self.xlabel.clone().unwrap_or_else(|| "x".into()),
            ylabel: self.ylabel.clone().unwrap_or_else(|| "y".into()),
            ticks: Ticks::default(),
            colorbar: self.colorbar.then(|| {
                let ColorbarOptions { shrink, label } = self.cb_kws.clone().unwrap_or_default();
                Colorbar {
                    shrink,
                    label,
                    clim,
                }
            }),
        })
    }
}

/// Tick marks configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticks {
    /// minor subdivisions, drawn as light grid lines between the labelled ticks
    pub minor: bool,
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}
impl Default for Ticks {
    fn default() -> Self {
        Self {
            minor: true,
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

/// Image colorbar
#[derive(Debug, Clone, PartialEq)]
pub struct Colorbar {
    pub shrink: f64,
    pub label: Option<String>,
    pub clim: (f64, f64),
}

/// Displayed image
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// data (rows,columns)
    pub shape: (usize, usize),
    /// values mapped to both ends of the color map
    pub clim: (f64, f64),
    pub cmap: Colormap,
    pub origin: Origin,
    /// image [left, right, bottom, top] in pixel coordinates
    pub extent: [f64; 4],
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub ticks: Ticks,
    pub colorbar: Option<Colorbar>,
}
impl Image {
    /// Normalized value in the color limits
    pub fn normalize(&self, value: f64) -> f64 {
        let (vmin, vmax) = self.clim;
        if vmax > vmin {
            ((value - vmin) / (vmax - vmin)).clamp(0f64, 1f64)
        } else {
            0f64
        }
    }
    /// Color of a pixel with the given value, `None` for NaN
    pub fn rgb(&self, value: f64) -> Option<RGBColor> {
        (!value.is_nan()).then(|| self.cmap.rgb(self.normalize(value)))
    }
    fn draw<DB: DrawingBackend>(
        &self,
        data: &DMatrix<f64>,
        area: &DrawingArea<DB, Shift>,
    ) -> Result<()> {
        let (width, _) = area.dim_in_pixel();
        let split = if self.colorbar.is_some() {
            width.saturating_sub(COLORBAR_WIDTH)
        } else {
            width
        };
        let (image_area, colorbar_area) = area.split_horizontally(split);

        let [left, right, bottom, top] = self.extent;
        // ticks on all four sides
        let mut builder = ChartBuilder::on(&image_area);
        builder
            .margin(10)
            .set_label_area_size(LabelAreaPosition::Left, 50)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .set_label_area_size(LabelAreaPosition::Top, 30)
            .set_label_area_size(LabelAreaPosition::Right, 40);
        if !self.title.is_empty() {
            builder.caption(&self.title, ("sans-serif", 20));
        }
        let mut chart = builder
            .build_cartesian_2d(left..right, bottom..top)
            .map_err(drawing)?;

        let (nrows, ncols) = self.shape;
        chart
            .draw_series(iproduct!(0..nrows, 0..ncols).filter_map(|(i, j)| {
                self.rgb(data[(i, j)]).map(|color| {
                    let (x, y) = (j as f64, i as f64);
                    Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], color.filled())
                })
            }))
            .map_err(drawing)?;
        chart
            .configure_mesh()
            .x_desc(self.xlabel.as_str())
            .y_desc(self.ylabel.as_str())
            .bold_line_style(&TRANSPARENT)
            .light_line_style(&BLACK.mix(0.1))
            .max_light_lines(MINOR_TICKS)
            .draw()
            .map_err(drawing)?;

        if let Some(colorbar) = &self.colorbar {
            colorbar.draw(self.cmap, &colorbar_area)?;
        }
        Ok(())
    }
}
impl Colorbar {
    fn draw<DB: DrawingBackend>(&self, cmap: Colormap, area: &DrawingArea<DB, Shift>) -> Result<()> {
        let (_, height) = area.dim_in_pixel();
        let pad = ((1f64 - self.shrink.clamp(0f64, 1f64)) * height as f64 * 0.5) as i32;
        let bar_area = area.margin(pad, pad, 0, 0);

        let (vmin, vmax) = self.clim;
        let span = if vmax > vmin { vmax - vmin } else { 1f64 };
        let mut chart = ChartBuilder::on(&bar_area)
            .margin(10)
            .set_label_area_size(LabelAreaPosition::Right, 60)
            .build_cartesian_2d(0f64..1f64, vmin..vmin + span)
            .map_err(drawing)?;
        {
            let mut mesh = chart.configure_mesh();
            mesh.disable_x_mesh().disable_y_mesh().disable_x_axis();
            if let Some(label) = &self.label {
                mesh.y_desc(label.as_str());
            }
            mesh.draw().map_err(drawing)?;
        }
        let step = span / COLORBAR_STEPS as f64;
        chart
            .draw_series((0..COLORBAR_STEPS).map(|k| {
                let v = vmin + k as f64 * step;
                let color = cmap.rgb(k as f64 / (COLORBAR_STEPS - 1) as f64);
                Rectangle::new([(0f64, v), (1f64, v + step)], color.filled())
            }))
            .map_err(drawing)?;
        Ok(())
    }
}

/// Displays 2D data in a new image file
///
/// The image is written to the [Display2d] filename, a white `size` pixels
/// bitmap.
pub fn display_2d(data: &DMatrix<f64>, options: &Display2d) -> Result<Image> {
    let root = BitMapBackend::new(&options.filename, options.size).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;
    let image = display_2d_on(data, options, &root)?;
    root.present().map_err(drawing)?;
    log::info!("figure written to {:?}", options.filename);
    Ok(image)
}

/// Displays 2D data on the given drawing area
///
/// The area is neither cleared nor presented.
pub fn display_2d_on<DB: DrawingBackend>(
    data: &DMatrix<f64>,
    options: &Display2d,
    area: &DrawingArea<DB, Shift>,
) -> Result<Image> {
    let image = options.image(data)?;
    log::debug!(
        "displaying {:?} image with color limits {:?}",
        image.shape,
        image.clim
    );
    image.draw(data, area)?;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rmap;

    #[test]
    fn defaults() {
        let data = rmap(4, (1., 1.), 4.).unwrap();
        let image = Display2d::new().image(&data).unwrap();
        assert_eq!(image.xlabel, "x");
        assert_eq!(image.ylabel, "y");
        assert_eq!(image.title, "");
        assert_eq!(image.cmap, Colormap::Viridis);
        assert_eq!(image.ticks, Ticks::default());
        assert!(image.ticks.minor && image.ticks.top && image.ticks.right);
        let colorbar = image.colorbar.unwrap();
        assert_eq!(colorbar.shrink, SHRINK);
        assert_eq!(colorbar.clim, image.clim);
    }

    #[test]
    fn labels() {
        let data = DMatrix::<f64>::zeros(2, 2);
        let image = Display2d::new()
            .title("wave")
            .xlabel("x [λ]")
            .ylabel("y [λ]")
            .image(&data)
            .unwrap();
        assert_eq!(image.title, "wave");
        assert_eq!(image.xlabel, "x [λ]");
        assert_eq!(image.ylabel, "y [λ]");
    }

    #[test]
    fn no_colorbar() {
        let data = DMatrix::<f64>::new_random(3, 5);
        let image = Display2d::new()
            .colorbar(false)
            .cb_kws(ColorbarOptions {
                shrink: 0.5,
                label: None,
            })
            .image(&data)
            .unwrap();
        assert!(image.colorbar.is_none());
    }

    #[test]
    fn colorbar_options() {
        let data = DMatrix::<f64>::new_random(3, 5);
        let image = Display2d::new()
            .cb_kws(ColorbarOptions {
                shrink: 0.5,
                label: Some("amplitude".into()),
            })
            .image(&data)
            .unwrap();
        let colorbar = image.colorbar.unwrap();
        assert_eq!(colorbar.shrink, 0.5);
        assert_eq!(colorbar.label.as_deref(), Some("amplitude"));
    }

    #[test]
    fn data_color_limits() {
        let data = DMatrix::from_row_slice(2, 3, &[1., f64::NAN, -2., 4., f64::INFINITY, 0.]);
        let image = Display2d::new().image(&data).unwrap();
        assert_eq!(image.clim, (-2., 4.));
        assert!(image.rgb(f64::NAN).is_none());
        assert_eq!(image.rgb(-2.), Some(Colormap::Viridis.rgb(0.)));
        assert_eq!(image.rgb(100.), Some(Colormap::Viridis.rgb(1.)));
        assert_eq!(image.normalize(1.), 0.5);
    }

    #[test]
    fn forced_color_limits() {
        let data = DMatrix::from_row_slice(1, 3, &[1., 2., 3.]);
        let image = Display2d::new().vmin(0.).image(&data).unwrap();
        assert_eq!(image.clim, (0., 3.));
        let image = Display2d::new().clim(-1., 1.).image(&data).unwrap();
        assert_eq!(image.clim, (-1., 1.));
        assert_eq!(image.normalize(0.), 0.5);
    }

    #[test]
    fn constant_data() {
        let data = DMatrix::from_element(2, 2, 3.);
        let image = Display2d::new().image(&data).unwrap();
        assert_eq!(image.clim, (3., 3.));
        assert_eq!(image.normalize(3.), 0.);
    }

    #[test]
    fn all_nan_data() {
        let data = DMatrix::from_element(2, 2, f64::NAN);
        let image = Display2d::new().image(&data).unwrap();
        assert_eq!(image.clim, (0., 1.));
    }

    #[test]
    fn extent() {
        let data = DMatrix::<f64>::zeros(2, 3);
        let image = Display2d::new().image(&data).unwrap();
        assert_eq!(image.extent, [-0.5, 2.5, 1.5, -0.5]);
        let image = Display2d::new().origin(Origin::Lower).image(&data).unwrap();
        assert_eq!(image.extent, [-0.5, 2.5, -0.5, 1.5]);
    }

    #[test]
    fn empty_data() {
        let data = DMatrix::<f64>::zeros(0, 3);
        assert!(matches!(
            Display2d::new().image(&data),
            Err(DisplayError::EmptyData(0, 3))
        ));
        let mut svg = String::new();
        let root = SVGBackend::with_string(&mut svg, (100, 100)).into_drawing_area();
        assert!(display_2d_on(&data, &Display2d::new(), &root).is_err());
    }

    #[test]
    fn preset() {
        let options: Display2d =
            serde_json::from_str(r#"{"title": "wave", "colorbar": false, "cmap": "magma"}"#)
                .unwrap();
        assert_eq!(
            options,
            Display2d::new()
                .title("wave")
                .colorbar(false)
                .cmap(Colormap::Magma)
        );
    }

    fn render(options: &Display2d) -> (Image, String) {
        let data = rmap(8, (4., 4.), 2.).unwrap().map(|r| (r * 6.).cos());
        let mut svg = String::new();
        let image = {
            let root = SVGBackend::with_string(&mut svg, (400, 300)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let image = display_2d_on(&data, options, &root).unwrap();
            root.present().unwrap();
            image
        };
        (image, svg)
    }

    #[test]
    fn render_svg() {
        let (image, svg) = render(&Display2d::new().title("wave"));
        assert!(image.colorbar.is_some());
        assert!(svg.contains("wave"));
        let (image, no_cb_svg) = render(&Display2d::new().colorbar(false));
        assert!(image.colorbar.is_none());
        assert!(no_cb_svg.matches("<rect").count() < svg.matches("<rect").count());
    }

    #[test]
    fn non_finite_color_limits() {
        let data = DMatrix::from_row_slice(1, 2, &[1., 2.]);
        assert!(matches!(
            Display2d::new().vmin(f64::NEG_INFINITY).image(&data),
            Err(DisplayError::NonFiniteLimits(..))
        ));
        assert!(matches!(
            Display2d::new().vmax(f64::NAN).image(&data),
            Err(DisplayError::NonFiniteLimits(..))
        ));
        let mut svg = String::new();
        let root = SVGBackend::with_string(&mut svg, (200, 100)).into_drawing_area();
        assert!(matches!(
            display_2d_on(&data, &Display2d::new().clim(0., f64::INFINITY), &root),
            Err(DisplayError::NonFiniteLimits(..))
        ));
    }

    fn vertical_gray_levels(origin: Origin) -> (u8, u8) {
        let (width, height) = (400u32, 400u32);
        let data = DMatrix::from_row_slice(2, 1, &[0., 1.]);
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            display_2d_on(
                &data,
                &Display2d::new()
                    .cmap(Colormap::Greys)
                    .colorbar(false)
                    .origin(origin),
                &root,
            )
            .unwrap();
            root.present().unwrap();
        }
        let red = |x: u32, y: u32| buffer[((y * width + x) * 3) as usize];
        (red(width / 2, 120), red(width / 2, 320))
    }

    #[test]
    fn first_row_orientation() {
        let (top, bottom) = vertical_gray_levels(Origin::Upper);
        assert!(top > 200 && bottom < 55, "top: {top}, bottom: {bottom}");
        let (top, bottom) = vertical_gray_levels(Origin::Lower);
        assert!(top < 55 && bottom > 200, "top: {top}, bottom: {bottom}");
    }

    #[test]
    fn display_to_file() {
        let path = std::env::temp_dir().join(format!("lattice_waves_{}.png", std::process::id()));
        let data = rmap(16, (8., 8.), 4.).unwrap();
        let image = display_2d(&data, &Display2d::new().filename(&path).size(320, 240)).unwrap();
        assert!(image.colorbar.is_some());
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
