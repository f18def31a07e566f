//! Common types shared across the hydro domain viewer crates.

pub mod config;
pub mod grid;
pub mod kind;

pub use config::{ConfigError, DomainPaths};
pub use grid::Grid2D;
pub use kind::DatasetKind;
