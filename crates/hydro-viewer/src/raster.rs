//! Gridded-variable rendering.
//!
//! The pipeline for one variable: extract the array, reduce it to a
//! single 2-D plane, flip it to display orientation for the kinds that
//! store rows south to north, resolve the style policy, and compose
//! the figure with colorbar and title.

use hydro_common::{DatasetKind, DomainPaths, Grid2D};
use netcdf_reader::Dataset;
use renderer::figure::{self, Figure, RasterParams};
use renderer::resolve_style;
use tracing::info;

use crate::error::{ViewerError, ViewerResult};

/// Render one gridded variable from an open dataset as a figure.
pub fn render_grid(ds: &Dataset, variable_name: &str, kind: DatasetKind) -> ViewerResult<Figure> {
    let var = ds.variable(variable_name)?;
    let dims = var.dim_names();
    let shape = var.shape();
    let data = var.read_f32()?;

    let (grid, note) = if kind.reads_raw() {
        // Routing grids and the hydro 2-D table are stored plain 2-D
        (raw_plane(variable_name, &shape, data)?, None)
    } else {
        reduce_to_plane(variable_name, &dims, &shape, data)?
    };

    let grid = if kind.flips_rows() {
        grid.flip_rows()
    } else {
        grid
    };

    let policy = resolve_style(variable_name);

    // Topography gets an explicit stretch over its own range; everything
    // else uses the policy's default scaling
    let (vmin, vmax) = if is_topography(variable_name) {
        match grid.finite_min_max() {
            Some((lo, hi)) => (Some(lo), Some(hi)),
            None => (None, None),
        }
    } else {
        (None, None)
    };

    let units = var.units().unwrap_or_else(|| "?".to_string());
    let label = format!("{} ({})", variable_name, units);
    let title = var.description().unwrap_or_default();

    let image = figure::compose_raster(&RasterParams {
        grid: &grid,
        policy: &policy,
        vmin,
        vmax,
        bad_color: None,
        colorbar_label: &label,
        title: &title,
        size: figure::doubled_default_size(),
    })?;

    info!(
        variable = variable_name,
        kind = %kind,
        rows = grid.rows(),
        cols = grid.cols(),
        "Rendered grid figure"
    );
    Ok(Figure::with_note(image, note))
}

/// Open the dataset bound to `kind` and render one of its variables.
pub fn render_grid_from_paths(
    paths: &DomainPaths,
    kind: DatasetKind,
    variable_name: &str,
) -> ViewerResult<Figure> {
    let ds = Dataset::open(paths.path_for(kind))?;
    render_grid(&ds, variable_name, kind)
}

fn is_topography(name: &str) -> bool {
    matches!(name.to_lowercase().as_str(), "hgt_m" | "hgt" | "topography")
}

/// Wrap an already-2-D array without any reduction.
fn raw_plane(name: &str, shape: &[usize], data: Vec<f32>) -> ViewerResult<Grid2D> {
    if shape.len() != 2 {
        return Err(ViewerError::Shape(format!(
            "variable {} has {} dimensions, expected a plain 2-D grid",
            name,
            shape.len()
        )));
    }
    Grid2D::from_data(shape[0], shape[1], data).ok_or_else(|| {
        ViewerError::Shape(format!("variable {} data does not match its shape", name))
    })
}

/// Reduce an N-D array to one 2-D plane.
///
/// Size-1 dimensions are squeezed away. A variable declaring more than
/// three dimensions additionally selects index 0 along its leading
/// post-squeeze axis and surfaces a note naming the second declared
/// dimension (the level axis in these files). Anything that is not 2-D
/// after that is a shape error.
fn reduce_to_plane(
    name: &str,
    dims: &[String],
    shape: &[usize],
    data: Vec<f32>,
) -> ViewerResult<(Grid2D, Option<String>)> {
    let effective: Vec<usize> = shape.iter().copied().filter(|&s| s != 1).collect();

    let (plane_shape, data, note) = if dims.len() > 3 {
        let note = format!(
            "Found more than 2 dimensions. Selecting first level from dimension {}",
            dims[1]
        );
        info!(variable = name, note = %note, "Reducing variable for display");
        if effective.len() != 3 {
            return Err(ViewerError::Shape(format!(
                "variable {} still has {} effective dimensions after level selection",
                name,
                effective.len().saturating_sub(1)
            )));
        }
        let plane_len = effective[1] * effective[2];
        let mut data = data;
        data.truncate(plane_len);
        (vec![effective[1], effective[2]], data, Some(note))
    } else {
        (effective, data, None)
    };

    if plane_shape.len() != 2 {
        return Err(ViewerError::Shape(format!(
            "variable {} has {} effective dimensions, expected 2",
            name,
            plane_shape.len()
        )));
    }

    let grid = Grid2D::from_data(plane_shape[0], plane_shape[1], data).ok_or_else(|| {
        ViewerError::Shape(format!("variable {} data does not match its shape", name))
    })?;
    Ok((grid, note))
}
