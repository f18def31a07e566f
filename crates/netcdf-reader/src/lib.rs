//! Read access to WRF-Hydro domain files in NetCDF format.
//!
//! Wraps the `netcdf` crate with the small surface the viewer needs:
//! opening a file with friendly errors, listing variables in
//! declaration order, whole-array reads converted to `f32`/`i32`, and
//! string attribute lookup for units and descriptions. Domain files
//! are modest in size, so arrays are always read fully into memory.

pub mod dataset;
pub mod error;

pub use dataset::{silence_hdf5_errors, Dataset, Variable};
pub use error::{ReadError, ReadResult};
