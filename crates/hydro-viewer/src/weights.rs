//! Spatial weight grid reconstruction and rendering.
//!
//! A weight file maps basins to source-grid cells through parallel
//! arrays: `IDmask` (basin id per record), `i_index`/`j_index` (1-based
//! cell indices), and a weight per record. Reconstruction scatters one
//! basin's records into a dense grid, reorients it to display
//! convention, optionally crops to the basin's bounding box, and
//! rendering shows nonzero weights in Reds over light-grey no-data.

use std::path::Path;

use hydro_common::Grid2D;
use netcdf_reader::Dataset;
use renderer::colormap::{self, Color};
use renderer::figure::{self, Figure, RasterParams};
use renderer::StylePolicy;
use tracing::{info, warn};

use crate::error::{ViewerError, ViewerResult};

/// Which weight array of the file to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKind {
    /// Fraction of the basin covered by the cell (`weight`).
    Spatial,
    /// Fraction of the cell covered by the basin (`regridweight`).
    Regrid,
}

impl WeightKind {
    fn variable(self) -> &'static str {
        match self {
            WeightKind::Spatial => "weight",
            WeightKind::Regrid => "regridweight",
        }
    }
}

/// Reconstruct one basin's dense weight grid in display orientation.
///
/// `n_rows` and `n_cols` are the dimensions of the routing grid the
/// file indices refer to. The returned grid is `n_rows` x `n_cols`
/// (or the basin's bounding box when `trim` is set) with NaN in every
/// cell the basin does not touch. Zero weights also become NaN; they
/// are indistinguishable from untouched cells in the output.
pub fn reconstruct_basin_grid(
    path: impl AsRef<Path>,
    basin_id: i32,
    n_rows: usize,
    n_cols: usize,
    weight_kind: WeightKind,
    trim: bool,
) -> ViewerResult<Grid2D> {
    let ds = Dataset::open(path)?;
    let id_mask = ds.variable("IDmask")?.read_i32()?;
    let i_index = ds.variable("i_index")?.read_i32()?;
    let j_index = ds.variable("j_index")?.read_i32()?;
    let weights = ds.variable(weight_kind.variable())?.read_f32()?;

    if i_index.len() != id_mask.len()
        || j_index.len() != id_mask.len()
        || weights.len() != id_mask.len()
    {
        return Err(ViewerError::Shape(format!(
            "weight file arrays disagree in length: IDmask={}, i_index={}, j_index={}, {}={}",
            id_mask.len(),
            i_index.len(),
            j_index.len(),
            weight_kind.variable(),
            weights.len()
        )));
    }

    // Filter to this basin and convert the 1-based file indices
    let mut records: Vec<(f32, usize, usize)> = Vec::new();
    for idx in 0..id_mask.len() {
        if id_mask[idx] != basin_id {
            continue;
        }
        let i = i_index[idx] - 1;
        let j = j_index[idx] - 1;
        if i < 0 || j < 0 || i as usize >= n_cols || j as usize >= n_rows {
            return Err(ViewerError::Shape(format!(
                "weight record i={} j={} is outside the grid ({} cols, {} rows)",
                i_index[idx], j_index[idx], n_cols, n_rows
            )));
        }
        records.push((weights[idx], i as usize, j as usize));
    }
    if records.is_empty() {
        warn!(basin_id, "No weight records for basin");
    }

    // The grid is allocated (n_cols, n_rows) but scattered positionally
    // as [i][j]; the flip and transpose below straighten it out, and the
    // trim arithmetic depends on this orientation.
    let mut grid = Grid2D::zeros(n_cols, n_rows);
    for &(w, i, j) in &records {
        grid.set(i, j, w);
    }
    let mut grid = grid.flip_cols().transpose();

    if trim {
        if records.is_empty() {
            return Err(ViewerError::Shape(format!(
                "cannot trim: no weight records for basin {}",
                basin_id
            )));
        }
        let i_min = records.iter().map(|r| r.1).min().unwrap();
        let i_max = records.iter().map(|r| r.1).max().unwrap();
        let j_min = records.iter().map(|r| r.2).min().unwrap();
        let j_max = records.iter().map(|r| r.2).max().unwrap();
        // In flipped-and-transposed coordinates the y bounds come from
        // the mirrored j range, the x bounds from the i range directly
        let row_min = (n_rows - 1) - j_max;
        let row_max = (n_rows - 1) - j_min;
        grid = grid.crop(row_min, row_max, i_min, i_max).ok_or_else(|| {
            ViewerError::Shape(format!(
                "trim box ({}..={}, {}..={}) is outside the reconstructed grid",
                row_min, row_max, i_min, i_max
            ))
        })?;
    }

    info!(
        basin_id,
        records = records.len(),
        rows = grid.rows(),
        cols = grid.cols(),
        trim,
        "Reconstructed basin weight grid"
    );
    Ok(grid.zeros_to_nan())
}

/// Reconstruct and render the weight grid for one basin.
pub fn render_basin_weights(
    path: impl AsRef<Path>,
    basin_id: i32,
    n_rows: usize,
    n_cols: usize,
    weight_kind: WeightKind,
    trim: bool,
) -> ViewerResult<Figure> {
    let grid = reconstruct_basin_grid(path, basin_id, n_rows, n_cols, weight_kind, trim)?;

    let policy = StylePolicy::Gradient(&colormap::REDS);
    let title = format!("Gridded Spatial Weights for basin {}", basin_id);
    let image = figure::compose_raster(&RasterParams {
        grid: &grid,
        policy: &policy,
        // Floor just above zero so the faintest weights stay visible
        vmin: Some(1e-8),
        vmax: None,
        bad_color: Some(Color::named("lightgrey")),
        colorbar_label: "",
        title: &title,
        size: figure::doubled_default_size(),
    })?;

    Ok(Figure::new(image))
}
