//! Radial distance maps
//!
//! A radial map samples the distance to a reference point over a square grid,
//! converted from pixels to wavelength units by the ratio of the box length to
//! the grid size.

use nalgebra::DMatrix;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RadialError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
type Result<T> = std::result::Result<T, RadialError>;

/// Value substituted for the distance at the exact center of the map
pub const ZERO_RADIUS: f64 = 1e-2;

/// Computes the radial distance from the origin
///
/// Returns a `n`x`n` map of the distance from `center`, in units of
/// `boxlength / n`.
/// The first component of `center` offsets the columns and the second one
/// offsets the rows, so cell `(i, j)` holds
/// `boxlength / n * sqrt((j - center.0)^2 + (i - center.1)^2)`.
/// The center does not have to lie inside the grid.
///
/// Cells exactly at the center are set to [ZERO_RADIUS] so the map can be
/// safely inverted.
pub fn rmap(n: usize, center: (f64, f64), boxlength: f64) -> Result<DMatrix<f64>> {
    if n == 0 {
        return Err(RadialError::InvalidArgument(
            "the radial map size must be strictly positive".into(),
        ));
    }
    let (cy, cx) = center;
    let norm = boxlength / n as f64;
    log::debug!("radial map: {n}x{n}, center: ({cy},{cx}), pixel scale: {norm}");
    Ok(DMatrix::from_fn(n, n, |i, j| {
        let x = j as f64 - cy;
        let y = i as f64 - cx;
        match norm * x.hypot(y) {
            r if r == 0f64 => ZERO_RADIUS,
            r => r,
        }
    }))
}
