//! Logical dataset kinds for a WRF-Hydro domain directory.
//!
//! A model domain is described by six NetCDF files. Each kind carries its
//! conventional file name, the dimension predicate used to decide which of
//! its variables are plottable, and the display-orientation quirks of its
//! grid storage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six domain input files, as a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Geographic grid definition (`geo_em.d0x.nc`).
    Geogrid,
    /// High-resolution channel routing grid (`Fulldom_hires.nc`).
    Fulldom,
    /// Model initial conditions (`wrfinput_d0x.nc`).
    Wrfinput,
    /// Soil parameter grid (`soil_properties.nc`).
    SoilProperties,
    /// Spatially distributed hydro parameter table (`hydro2dtbl.nc`).
    Hydro2d,
    /// Channel routing link table (`Route_Link.nc`).
    Routelink,
}

impl DatasetKind {
    /// All kinds, in the conventional listing order.
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Geogrid,
        DatasetKind::Fulldom,
        DatasetKind::Wrfinput,
        DatasetKind::SoilProperties,
        DatasetKind::Hydro2d,
        DatasetKind::Routelink,
    ];

    /// Conventional file name within a domain directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::Geogrid => "geo_em.d0x.nc",
            DatasetKind::Fulldom => "Fulldom_hires.nc",
            DatasetKind::Wrfinput => "wrfinput_d0x.nc",
            DatasetKind::SoilProperties => "soil_properties.nc",
            DatasetKind::Hydro2d => "hydro2dtbl.nc",
            DatasetKind::Routelink => "Route_Link.nc",
        }
    }

    /// Short name used in config files and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Geogrid => "geogrid",
            DatasetKind::Fulldom => "fulldom",
            DatasetKind::Wrfinput => "wrfinput",
            DatasetKind::SoilProperties => "soil_properties",
            DatasetKind::Hydro2d => "hydro2d",
            DatasetKind::Routelink => "routelink",
        }
    }

    /// Whether a variable with these dimension names belongs in the
    /// selection list for this kind.
    ///
    /// Geogrid and wrfinput variables must span the full 2-D mass grid.
    /// The parameter tables accept either spatial dimension so 1-D rows of
    /// the distributed tables still list. Fulldom grids use `x`/`y` names,
    /// and the routing table is indexed by `feature_id`.
    pub fn matches_dims(&self, dims: &[String]) -> bool {
        let has = |name: &str| dims.iter().any(|d| d == name);
        match self {
            DatasetKind::Geogrid | DatasetKind::Wrfinput => {
                has("south_north") && has("west_east")
            }
            DatasetKind::SoilProperties | DatasetKind::Hydro2d => {
                has("south_north") || has("west_east")
            }
            DatasetKind::Fulldom => has("x") || has("y"),
            DatasetKind::Routelink => has("feature_id"),
        }
    }

    /// True for kinds whose grids are stored south-to-north and must be
    /// flipped to display north at the top.
    pub fn flips_rows(&self) -> bool {
        matches!(
            self,
            DatasetKind::Geogrid
                | DatasetKind::Hydro2d
                | DatasetKind::SoilProperties
                | DatasetKind::Wrfinput
        )
    }

    /// True for kinds whose variables are read as-is, with no size-1
    /// squeeze or level selection (already plain 2-D files).
    pub fn reads_raw(&self) -> bool {
        matches!(self, DatasetKind::Fulldom | DatasetKind::Hydro2d)
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_geogrid_requires_both_spatial_dims() {
        let kind = DatasetKind::Geogrid;
        assert!(kind.matches_dims(&dims(&["Time", "south_north", "west_east"])));
        assert!(!kind.matches_dims(&dims(&["Time", "south_north"])));
        assert!(!kind.matches_dims(&dims(&["west_east"])));
        assert!(!kind.matches_dims(&dims(&["Time"])));
    }

    #[test]
    fn test_parameter_tables_accept_either_dim() {
        for kind in [DatasetKind::SoilProperties, DatasetKind::Hydro2d] {
            assert!(kind.matches_dims(&dims(&["south_north", "west_east"])));
            assert!(kind.matches_dims(&dims(&["south_north"])));
            assert!(kind.matches_dims(&dims(&["west_east"])));
            assert!(!kind.matches_dims(&dims(&["Time"])), "kind {}", kind);
        }
    }

    #[test]
    fn test_fulldom_uses_xy_names() {
        let kind = DatasetKind::Fulldom;
        assert!(kind.matches_dims(&dims(&["y", "x"])));
        assert!(kind.matches_dims(&dims(&["x"])));
        assert!(kind.matches_dims(&dims(&["y"])));
        assert!(!kind.matches_dims(&dims(&["south_north", "west_east"])));
    }

    #[test]
    fn test_routelink_uses_feature_id() {
        let kind = DatasetKind::Routelink;
        assert!(kind.matches_dims(&dims(&["feature_id"])));
        assert!(!kind.matches_dims(&dims(&["y", "x"])));
    }

    #[test]
    fn test_flip_set_excludes_fulldom_and_routelink() {
        assert!(DatasetKind::Geogrid.flips_rows());
        assert!(DatasetKind::Wrfinput.flips_rows());
        assert!(DatasetKind::SoilProperties.flips_rows());
        assert!(DatasetKind::Hydro2d.flips_rows());
        assert!(!DatasetKind::Fulldom.flips_rows());
        assert!(!DatasetKind::Routelink.flips_rows());
    }

    #[test]
    fn test_raw_read_set() {
        assert!(DatasetKind::Fulldom.reads_raw());
        assert!(DatasetKind::Hydro2d.reads_raw());
        assert!(!DatasetKind::Geogrid.reads_raw());
        assert!(!DatasetKind::Wrfinput.reads_raw());
    }

    #[test]
    fn test_serde_names_are_snake_case() {
        let json = serde_json::to_string(&DatasetKind::SoilProperties).unwrap();
        assert_eq!(json, "\"soil_properties\"");
        let back: DatasetKind = serde_json::from_str("\"geogrid\"").unwrap();
        assert_eq!(back, DatasetKind::Geogrid);
    }
}
