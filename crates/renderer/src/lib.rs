//! Figure rendering for WRF-Hydro domain data.
//!
//! Turns dense grids and routing-table point sets into complete figures:
//! - Colormap sampling (continuous ramps and discrete boundary classes)
//! - Variable-name to style resolution
//! - Raster, colorbar, title, and scatter composition onto an RGBA canvas
//! - PNG encoding of the finished canvas

pub mod colormap;
pub mod figure;
pub mod png;
pub mod style;
pub mod text;

pub use colormap::{Color, ColorRamp};
pub use figure::{Figure, RasterParams, RenderError, ScatterParams};
pub use style::{resolve_style, Classified, StylePolicy};
