//! Radial profiles
//!
//! Flattens a 2D field sampled on a radial map into a 1D profile sorted by
//! increasing radius.

use nalgebra::{DMatrix, DVector};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProfileError {
    #[error("Radius {radius:?} and amplitude {amplitude:?} shapes do not match")]
    ShapeMismatch {
        radius: (usize, usize),
        amplitude: (usize, usize),
    },
}
type Result<T> = std::result::Result<T, ProfileError>;

/// 1D radial profile
///
/// The radius is non-decreasing and the amplitude is ordered alike.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialProfile {
    pub radius: DVector<f64>,
    pub amplitude: DVector<f64>,
}
impl RadialProfile {
    pub fn len(&self) -> usize {
        self.radius.len()
    }
    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }
    /// Iterator over the (radius,amplitude) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.radius
            .iter()
            .cloned()
            .zip(self.amplitude.iter().cloned())
    }
    /// Returns the radius and the amplitude vectors
    pub fn into_parts(self) -> (DVector<f64>, DVector<f64>) {
        (self.radius, self.amplitude)
    }
}

// nalgebra storage is column-major
fn flatten(data: &DMatrix<f64>) -> Vec<f64> {
    data.transpose().iter().cloned().collect()
}

/// Sorts a 2D field by radius
///
/// Both maps are flattened row by row and the amplitude is reordered with the
/// permutation that sorts the radius.
/// Equal radii keep their row-major order.
pub fn to_1d(radius: &DMatrix<f64>, amplitude: &DMatrix<f64>) -> Result<RadialProfile> {
    if radius.shape() != amplitude.shape() {
        return Err(ProfileError::ShapeMismatch {
            radius: radius.shape(),
            amplitude: amplitude.shape(),
        });
    }
    let radius = flatten(radius);
    let amplitude = flatten(amplitude);
    log::debug!("sorting {} samples by radius", radius.len());

    let mut index: Vec<usize> = (0..radius.len()).collect();
    index.sort_by(|&a, &b| radius[a].total_cmp(&radius[b]));

    Ok(RadialProfile {
        radius: DVector::from_iterator(index.len(), index.iter().map(|&k| radius[k])),
        amplitude: DVector::from_iterator(index.len(), index.iter().map(|&k| amplitude[k])),
    })
}
