//! Spatial-variable listing and dropdown population.

use hydro_common::{DatasetKind, DomainPaths};
use netcdf_reader::Dataset;
use tracing::info;

use crate::error::ViewerResult;

/// List the variables of the dataset bound to `kind` whose dimensions
/// pass the kind's predicate, in declaration order.
///
/// Coordinate variables (named after one of their own dimensions) are
/// bookkeeping, not plottable fields, and are skipped.
pub fn list_spatial_variables(
    paths: &DomainPaths,
    kind: DatasetKind,
) -> ViewerResult<Vec<String>> {
    let ds = Dataset::open(paths.path_for(kind))?;
    let names: Vec<String> = ds
        .variables()
        .filter(|v| {
            let dims = v.dim_names();
            kind.matches_dims(&dims) && !dims.iter().any(|d| *d == v.name())
        })
        .map(|v| v.name())
        .collect();
    info!(kind = %kind, count = names.len(), "Listed spatial variables");
    Ok(names)
}

/// A presentation-only dropdown description for the hosting environment.
#[derive(Debug, Clone)]
pub struct Dropdown {
    pub label: String,
    /// `(label, value)` pairs in display order.
    pub options: Vec<(String, String)>,
    pub default: String,
}

/// Build the variable-selection dropdown for one dataset kind.
pub fn populate_dropdown(
    paths: &DomainPaths,
    kind: DatasetKind,
    default: &str,
) -> ViewerResult<Dropdown> {
    let options = list_spatial_variables(paths, kind)?
        .into_iter()
        .map(|name| (name.clone(), name))
        .collect();
    Ok(Dropdown {
        label: "Variable:".to_string(),
        options,
        default: default.to_string(),
    })
}

/// The conventional starting dropdown: geogrid topography.
pub fn default_dropdown(paths: &DomainPaths) -> ViewerResult<Dropdown> {
    populate_dropdown(paths, DatasetKind::Geogrid, "HGT_M")
}
