//! Shared fixtures: small synthetic domain files written with the
//! netcdf create API into a per-test temporary directory.

#![allow(dead_code)]

use std::path::Path;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Geographic grid file: a 2x2 mass grid with a Time axis.
///
/// `LANDMASK` holds zeros in its southern row and ones in its northern
/// row so row-flip behavior shows up in rendered pixels.
pub fn write_geogrid(path: &Path) {
    let mut file = netcdf::create(path).unwrap();
    file.add_dimension("Time", 1).unwrap();
    file.add_dimension("south_north", 2).unwrap();
    file.add_dimension("west_east", 2).unwrap();

    let mut hgt = file
        .add_variable::<f32>("HGT_M", &["Time", "south_north", "west_east"])
        .unwrap();
    hgt.put_attribute("units", "meters MSL").unwrap();
    hgt.put_attribute("description", "Topography height").unwrap();
    hgt.put_values(&[500.0f32, 600.0, 700.0, 800.0], ..).unwrap();

    let mut landmask = file
        .add_variable::<f32>("LANDMASK", &["Time", "south_north", "west_east"])
        .unwrap();
    landmask.put_values(&[0.0f32, 0.0, 1.0, 1.0], ..).unwrap();

    // Time-only bookkeeping, must never list as plottable
    let mut times = file.add_variable::<i32>("Times", &["Time"]).unwrap();
    times.put_values(&[0i32], ..).unwrap();
}

/// Routing grid file: plain 2-D variables over `y`/`x`, no Time axis.
pub fn write_fulldom(path: &Path) {
    let mut file = netcdf::create(path).unwrap();
    file.add_dimension("y", 2).unwrap();
    file.add_dimension("x", 2).unwrap();

    let mut channel = file.add_variable::<f32>("CHANNELGRID", &["y", "x"]).unwrap();
    channel.put_values(&[0.0f32, 0.0, 1.0, 1.0], ..).unwrap();

    let mut order = file.add_variable::<i32>("STREAMORDER", &["y", "x"]).unwrap();
    order.put_values(&[1i32, 2, 3, 4], ..).unwrap();

    // Coordinate variables, named after their own dimension
    let mut xs = file.add_variable::<f64>("x", &["x"]).unwrap();
    xs.put_values(&[0.0f64, 1000.0], ..).unwrap();
    let mut ys = file.add_variable::<f64>("y", &["y"]).unwrap();
    ys.put_values(&[0.0f64, 1000.0], ..).unwrap();
}

/// Initial-conditions file with a four-dimensional soil variable.
pub fn write_wrfinput(path: &Path) {
    let mut file = netcdf::create(path).unwrap();
    file.add_dimension("Time", 1).unwrap();
    file.add_dimension("soil_layers_stag", 2).unwrap();
    file.add_dimension("south_north", 2).unwrap();
    file.add_dimension("west_east", 2).unwrap();

    let mut smois = file
        .add_variable::<f32>(
            "SMOIS",
            &["Time", "soil_layers_stag", "south_north", "west_east"],
        )
        .unwrap();
    let data: Vec<f32> = (0..8).map(|i| i as f32 / 10.0).collect();
    smois.put_values(&data, ..).unwrap();

    let mut hgt = file
        .add_variable::<f32>("HGT", &["Time", "south_north", "west_east"])
        .unwrap();
    hgt.put_attribute("units", "m").unwrap();
    hgt.put_values(&[500.0f32, 600.0, 700.0, 800.0], ..).unwrap();
}

/// Soil parameter file mixing fully spatial, partially spatial, and
/// non-spatial variables, plus a coordinate variable.
pub fn write_soil_properties(path: &Path) {
    let mut file = netcdf::create(path).unwrap();
    file.add_dimension("Time", 1).unwrap();
    file.add_dimension("south_north", 2).unwrap();
    file.add_dimension("west_east", 2).unwrap();

    let mut bexp = file
        .add_variable::<f32>("bexp", &["south_north", "west_east"])
        .unwrap();
    bexp.put_values(&[4.0f32, 4.5, 5.0, 5.5], ..).unwrap();

    let mut times = file.add_variable::<i32>("Times", &["Time"]).unwrap();
    times.put_values(&[0i32], ..).unwrap();

    let mut refdk = file.add_variable::<f32>("refdk", &["west_east"]).unwrap();
    refdk.put_values(&[1.0f32, 2.0], ..).unwrap();

    let mut coord = file.add_variable::<f32>("west_east", &["west_east"]).unwrap();
    coord.put_values(&[0.0f32, 1.0], ..).unwrap();
}

/// Distributed hydro parameter table: plain 2-D plus one variable that
/// wrongly carries a Time axis.
pub fn write_hydro2d(path: &Path) {
    let mut file = netcdf::create(path).unwrap();
    file.add_dimension("Time", 1).unwrap();
    file.add_dimension("south_north", 2).unwrap();
    file.add_dimension("west_east", 2).unwrap();

    let mut smcmax = file
        .add_variable::<f32>("SMCMAX1", &["south_north", "west_east"])
        .unwrap();
    smcmax.put_values(&[0.1f32, 0.2, 0.3, 0.4], ..).unwrap();

    let mut rough = file
        .add_variable::<f32>("OV_ROUGH2D", &["Time", "south_north", "west_east"])
        .unwrap();
    rough.put_values(&[0.05f32; 4], ..).unwrap();
}

/// Spatial weight file: three records, two basins, over a 2x2 grid.
pub fn write_weight_file(path: &Path) {
    let mut file = netcdf::create(path).unwrap();
    file.add_dimension("polyid", 3).unwrap();

    let mut idmask = file.add_variable::<i32>("IDmask", &["polyid"]).unwrap();
    idmask.put_values(&[1i32, 1, 2], ..).unwrap();
    let mut i_index = file.add_variable::<i32>("i_index", &["polyid"]).unwrap();
    i_index.put_values(&[1i32, 2, 1], ..).unwrap();
    let mut j_index = file.add_variable::<i32>("j_index", &["polyid"]).unwrap();
    j_index.put_values(&[1i32, 1, 2], ..).unwrap();
    let mut weight = file.add_variable::<f32>("weight", &["polyid"]).unwrap();
    weight.put_values(&[0.5f32, 0.3, 0.9], ..).unwrap();
    let mut regrid = file.add_variable::<f32>("regridweight", &["polyid"]).unwrap();
    regrid.put_values(&[1.0f32, 0.6, 1.0], ..).unwrap();
}

/// Routing link table: four reaches with coordinates, order, elevation,
/// and channel widths.
pub fn write_routelink(path: &Path) {
    let mut file = netcdf::create(path).unwrap();
    file.add_dimension("feature_id", 4).unwrap();

    let mut lon = file.add_variable::<f32>("lon", &["feature_id"]).unwrap();
    lon.put_attribute("units", "degrees_east").unwrap();
    lon.put_values(&[-100.0f32, -99.5, -99.0, -98.5], ..).unwrap();

    let mut lat = file.add_variable::<f32>("lat", &["feature_id"]).unwrap();
    lat.put_attribute("units", "degrees_north").unwrap();
    lat.put_values(&[40.0f32, 40.5, 41.0, 41.5], ..).unwrap();

    let mut order = file.add_variable::<i32>("order", &["feature_id"]).unwrap();
    order.put_values(&[1i32, 2, 2, 3], ..).unwrap();

    let mut alt = file.add_variable::<f32>("alt", &["feature_id"]).unwrap();
    alt.put_attribute("units", "m").unwrap();
    alt.put_values(&[100.0f32, 200.0, 300.0, 400.0], ..).unwrap();

    let mut top = file.add_variable::<f32>("TopWdth", &["feature_id"]).unwrap();
    top.put_attribute("units", "m").unwrap();
    top.put_values(&[4.0f32, 16.0, 36.0, 64.0], ..).unwrap();

    let mut btm = file.add_variable::<f32>("BtmWdth", &["feature_id"]).unwrap();
    btm.put_attribute("units", "m").unwrap();
    btm.put_values(&[2.0f32, 8.0, 18.0, 32.0], ..).unwrap();
}
