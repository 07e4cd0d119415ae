use crate::{lattice::LatticeError, profile::ProfileError, radial::RadialError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `radial` module")]
    Radial(#[from] RadialError),
    #[error("Error in the `profile` module")]
    Profile(#[from] ProfileError),
    #[error("Error in the `lattice` module")]
    Lattice(#[from] LatticeError),
    #[cfg(feature = "plot")]
    #[error("Error in the `display` module")]
    Display(#[from] crate::display::DisplayError),
}
