//! Rectangular lattices
//!
//! Lattice site coordinates are returned as the columns of a `3xN` matrix,
//! centered on the origin.

use itertools::iproduct;
use nalgebra::Matrix3xX;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LatticeError {
    #[error("Lattice with {0:?} sites overflows")]
    TooManySites([usize; 3]),
}
type Result<T> = std::result::Result<T, LatticeError>;

fn axis(n: usize, spacing: f64) -> Vec<f64> {
    (0..n).map(|k| k as f64 * spacing).collect()
}

/// Creates the matrix of lattice vectors
///
/// `dimensions` is the number of lattice sites along (x,y,z) and `spacing` the
/// lattice spacing along (x,y,z).
/// The lattice is centered such as the mean of each coordinate is zero.
///
/// Sites are ordered with the y index varying the slowest, then x, then z.
///
/// ```
/// let rn = lattice_waves::make_rectangular_lattice([2, 2, 2], [1., 1., 1.]).unwrap();
/// assert_eq!(rn.shape(), (3, 8));
/// ```
pub fn make_rectangular_lattice(
    dimensions: [usize; 3],
    spacing: [f64; 3],
) -> Result<Matrix3xX<f64>> {
    let [nx, ny, nz] = dimensions;
    let n_site = nx
        .checked_mul(ny)
        .and_then(|n| n.checked_mul(nz))
        .ok_or(LatticeError::TooManySites(dimensions))?;
    log::debug!("rectangular lattice: {dimensions:?} sites, {spacing:?} spacing");
    if n_site == 0 {
        log::warn!("empty lattice: {dimensions:?}");
        return Ok(Matrix3xX::zeros(0));
    }
    if spacing.iter().any(|&s| s <= 0f64) {
        log::warn!("degenerate lattice spacing: {spacing:?}");
    }

    let [x, y, z] = [
        axis(nx, spacing[0]),
        axis(ny, spacing[1]),
        axis(nz, spacing[2]),
    ];
    let mut rn = Matrix3xX::from_iterator(
        n_site,
        iproduct!(y.iter(), x.iter(), z.iter()).flat_map(|(&y, &x, &z)| [x, y, z]),
    );
    for mut row in rn.row_iter_mut() {
        let mean = row.mean();
        row.add_scalar_mut(-mean);
    }
    Ok(rn)
}
