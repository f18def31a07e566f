//! High-level viewing operations over a WRF-Hydro model domain.
//!
//! Ties the reader and renderer crates together into the operations a
//! teaching session uses: list the plottable variables of a domain
//! file, render a gridded variable as a raster figure, render a
//! routing-table variable as a lon/lat scatter, and reconstruct and
//! render the spatial weight grid for one basin. Figures go to a
//! pluggable [`sink::RenderSink`].

pub mod error;
pub mod raster;
pub mod scatter;
pub mod select;
pub mod sink;
pub mod weights;

pub use error::{ViewerError, ViewerResult};
pub use raster::{render_grid, render_grid_from_paths};
pub use scatter::{render_routelink, render_routelink_from_paths};
pub use select::{default_dropdown, list_spatial_variables, populate_dropdown, Dropdown};
pub use sink::{MemorySink, PngDirSink, RenderSink};
pub use weights::{reconstruct_basin_grid, render_basin_weights, WeightKind};
