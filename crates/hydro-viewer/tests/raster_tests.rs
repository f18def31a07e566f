//! Tests for gridded-variable rendering.
//!
//! Writes small domain files, renders variables, and asserts on figure
//! size, diagnostic notes, and plot pixels. The pixel checks use a
//! binary-shaded variable with distinct north and south rows so the
//! display orientation of each dataset kind is observable.

mod common;

use hydro_common::{DatasetKind, DomainPaths};
use hydro_viewer::{render_grid_from_paths, ViewerError};
use netcdf_reader::ReadError;
use tempfile::TempDir;

// Plot-box probe points for the doubled 1280x960 canvas: one pixel in
// the top grid row, one in the bottom grid row.
const TOP_PROBE: (u32, u32) = (600, 100);
const BOTTOM_PROBE: (u32, u32) = (600, 880);

// ============================================================================
// Figure shape tests
// ============================================================================

#[test]
fn test_grid_figure_uses_doubled_default_size() {
    common::init_tracing();
    let dir = TempDir::new().unwrap();
    let paths = DomainPaths::for_root(dir.path());
    common::write_geogrid(&paths.geogrid);

    let figure = render_grid_from_paths(&paths, DatasetKind::Geogrid, "HGT_M").unwrap();
    assert_eq!((figure.width(), figure.height()), (1280, 960));
    assert!(figure.note.is_none());
}

// ============================================================================
// Orientation tests
// ============================================================================

#[test]
fn test_geogrid_flips_rows_for_display() {
    let dir = TempDir::new().unwrap();
    let paths = DomainPaths::for_root(dir.path());
    common::write_geogrid(&paths.geogrid);

    // LANDMASK stores its zero row first (south); after the flip the
    // northern ones-row renders at the top of the plot in black
    let figure = render_grid_from_paths(&paths, DatasetKind::Geogrid, "LANDMASK").unwrap();
    let top = figure.image.get_pixel(TOP_PROBE.0, TOP_PROBE.1);
    let bottom = figure.image.get_pixel(BOTTOM_PROBE.0, BOTTOM_PROBE.1);
    assert!(top.0[0] < 30, "north row should render dark, got {:?}", top);
    assert!(
        bottom.0[0] > 225,
        "south row should render light, got {:?}",
        bottom
    );
}

#[test]
fn test_fulldom_renders_rows_as_stored() {
    let dir = TempDir::new().unwrap();
    let paths = DomainPaths::for_root(dir.path());
    common::write_fulldom(&paths.fulldom);

    // Same zeros-then-ones layout, but routing grids are not flipped
    let figure = render_grid_from_paths(&paths, DatasetKind::Fulldom, "CHANNELGRID").unwrap();
    let top = figure.image.get_pixel(TOP_PROBE.0, TOP_PROBE.1);
    let bottom = figure.image.get_pixel(BOTTOM_PROBE.0, BOTTOM_PROBE.1);
    assert!(top.0[0] > 225, "stored first row should stay on top, got {:?}", top);
    assert!(bottom.0[0] < 30, "got {:?}", bottom);
}

// ============================================================================
// Dimension reduction tests
// ============================================================================

#[test]
fn test_four_dimensional_variable_selects_first_level_with_note() {
    let dir = TempDir::new().unwrap();
    let paths = DomainPaths::for_root(dir.path());
    common::write_wrfinput(&paths.wrfinput);

    let figure = render_grid_from_paths(&paths, DatasetKind::Wrfinput, "SMOIS").unwrap();
    assert_eq!(
        figure.note.as_deref(),
        Some("Found more than 2 dimensions. Selecting first level from dimension soil_layers_stag")
    );
}

#[test]
fn test_three_dimensional_variable_squeezes_silently() {
    let dir = TempDir::new().unwrap();
    let paths = DomainPaths::for_root(dir.path());
    common::write_wrfinput(&paths.wrfinput);

    let figure = render_grid_from_paths(&paths, DatasetKind::Wrfinput, "HGT").unwrap();
    assert!(figure.note.is_none());
}

#[test]
fn test_raw_kind_rejects_variable_with_extra_axis() {
    let dir = TempDir::new().unwrap();
    let paths = DomainPaths::for_root(dir.path());
    common::write_hydro2d(&paths.hydro2d);

    assert!(render_grid_from_paths(&paths, DatasetKind::Hydro2d, "SMCMAX1").is_ok());
    let result = render_grid_from_paths(&paths, DatasetKind::Hydro2d, "OV_ROUGH2D");
    assert!(matches!(result, Err(ViewerError::Shape(_))));
}

// ============================================================================
// Error and fallback tests
// ============================================================================

#[test]
fn test_missing_variable_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let paths = DomainPaths::for_root(dir.path());
    common::write_geogrid(&paths.geogrid);

    let result = render_grid_from_paths(&paths, DatasetKind::Geogrid, "NO_SUCH_VAR");
    match result {
        Err(ViewerError::Read(ReadError::VariableNotFound(name))) => {
            assert_eq!(name, "NO_SUCH_VAR");
        }
        other => panic!("Expected VariableNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_variable_without_units_still_renders() {
    let dir = TempDir::new().unwrap();
    let paths = DomainPaths::for_root(dir.path());
    common::write_geogrid(&paths.geogrid);

    // LANDMASK carries no units attribute; the label falls back to "?"
    assert!(render_grid_from_paths(&paths, DatasetKind::Geogrid, "LANDMASK").is_ok());
}
