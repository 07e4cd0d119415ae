//! Wave pattern analysis utilities
//!
//! * [rmap]: radial distance from a center over a square grid
//! * [to_1d]: 2D field sorted by radius into a 1D profile
//! * [make_rectangular_lattice]: centered rectangular lattice vectors
//! * [display_2d]: color-mapped image of a 2D field (`plot` feature)
//!
//! 2D fields are [nalgebra::DMatrix] indexed by (row, column).
//!
//! ```
//! use lattice_waves::{rmap, to_1d};
//!
//! let r = rmap(32, (16., 16.), 4.).unwrap();
//! let wave = r.map(|r| (2. * std::f64::consts::PI * r).cos() / r);
//! let profile = to_1d(&r, &wave).unwrap();
//! assert_eq!(profile.len(), 32 * 32);
//! ```

#[cfg(feature = "plot")]
pub mod display;
pub mod error;
pub mod lattice;
pub mod profile;
pub mod radial;

#[cfg(feature = "plot")]
pub use display::{
    display_2d, display_2d_on, Colorbar, ColorbarOptions, Colormap, Display2d, DisplayError,
    Image, Origin,
};
pub use error::Error;
pub use lattice::{make_rectangular_lattice, LatticeError};
pub use profile::{to_1d, ProfileError, RadialProfile};
pub use radial::{rmap, RadialError};
