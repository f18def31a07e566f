//! Routing-table scatter rendering.
//!
//! Routing-table variables are 1-D over `feature_id` and render as a
//! lon/lat scatter colored by the variable's values. Channel elevation
//! uses a terrain ramp floored at sea level; everything else uses
//! viridis. The channel-width variables scale their markers from
//! `TopWdth` so wide reaches read as wide points.

use hydro_common::{DatasetKind, DomainPaths};
use netcdf_reader::Dataset;
use renderer::colormap;
use renderer::figure::{self, Figure, ScatterParams};
use tracing::info;

use crate::error::{ViewerError, ViewerResult};

/// Figure size for routing-table scatters (not the doubled default).
const SCATTER_SIZE: (u32, u32) = (1500, 1200);

/// Render one routing-table variable as a lon/lat scatter figure.
pub fn render_routelink(ds: &Dataset, variable_name: &str) -> ViewerResult<Figure> {
    let lon = ds.variable("lon")?.read_f32()?;
    let lat = ds.variable("lat")?.read_f32()?;
    let var = ds.variable(variable_name)?;
    let values = var.read_f32()?;

    if lat.len() != lon.len() || values.len() != lon.len() {
        return Err(ViewerError::Shape(format!(
            "routing-table arrays disagree in length: lon={}, lat={}, {}={}",
            lon.len(),
            lat.len(),
            variable_name,
            values.len()
        )));
    }

    let lower = variable_name.to_lowercase();
    let (ramp, vmin) = if lower == "alt" {
        (&colormap::TERRAIN, Some(0.0))
    } else {
        (&colormap::VIRIDIS, None)
    };

    let radii: Vec<i32> = if matches!(lower.as_str(), "btmwdth" | "topwdth" | "topwdthcc") {
        let widths = ds.variable("TopWdth")?.read_f32()?;
        if widths.len() != lon.len() {
            return Err(ViewerError::Shape(format!(
                "TopWdth length {} does not match lon length {}",
                widths.len(),
                lon.len()
            )));
        }
        widths.iter().map(|w| marker_radius(*w)).collect()
    } else {
        vec![2; lon.len()]
    };

    let units = var.units().unwrap_or_else(|| "?".to_string());
    let label = format!("{} ({})", variable_name, units);

    let image = figure::compose_scatter(&ScatterParams {
        x: &lon,
        y: &lat,
        values: &values,
        radii: &radii,
        ramp,
        vmin,
        vmax: None,
        colorbar_label: &label,
        title: "",
        size: SCATTER_SIZE,
    })?;

    info!(
        variable = variable_name,
        points = lon.len(),
        "Rendered routing-table scatter"
    );
    Ok(Figure::new(image))
}

/// Open the routing-table file and render one of its variables.
pub fn render_routelink_from_paths(
    paths: &DomainPaths,
    variable_name: &str,
) -> ViewerResult<Figure> {
    let ds = Dataset::open(paths.path_for(DatasetKind::Routelink))?;
    render_routelink(&ds, variable_name)
}

/// Marker radius for a channel width, following the plotting convention
/// that marker size is an area: radius grows with the square root.
fn marker_radius(width: f32) -> i32 {
    if !width.is_finite() || width <= 0.0 {
        return 1;
    }
    (width.sqrt() / 2.0).round().max(1.0) as i32
}
