//! Domain file path configuration.
//!
//! An explicit object holding the six input file paths, passed into the
//! selection and rendering entry points instead of module-level path
//! constants. Loadable from JSON for use in scripted sessions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::kind::DatasetKind;

/// Paths to the six domain input files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainPaths {
    pub geogrid: PathBuf,
    pub fulldom: PathBuf,
    pub wrfinput: PathBuf,
    pub soil_properties: PathBuf,
    pub hydro2d: PathBuf,
    pub routelink: PathBuf,
}

impl DomainPaths {
    /// Point every kind at its conventional file name under `dir`.
    pub fn for_root(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            geogrid: dir.join(DatasetKind::Geogrid.file_name()),
            fulldom: dir.join(DatasetKind::Fulldom.file_name()),
            wrfinput: dir.join(DatasetKind::Wrfinput.file_name()),
            soil_properties: dir.join(DatasetKind::SoilProperties.file_name()),
            hydro2d: dir.join(DatasetKind::Hydro2d.file_name()),
            routelink: dir.join(DatasetKind::Routelink.file_name()),
        }
    }

    /// Load path configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse path configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// The configured path for one dataset kind.
    pub fn path_for(&self, kind: DatasetKind) -> &Path {
        match kind {
            DatasetKind::Geogrid => &self.geogrid,
            DatasetKind::Fulldom => &self.fulldom,
            DatasetKind::Wrfinput => &self.wrfinput,
            DatasetKind::SoilProperties => &self.soil_properties,
            DatasetKind::Hydro2d => &self.hydro2d,
            DatasetKind::Routelink => &self.routelink,
        }
    }

    /// Replace the path for one kind, for domains with non-standard names.
    pub fn with_path(mut self, kind: DatasetKind, path: impl Into<PathBuf>) -> Self {
        let slot = match kind {
            DatasetKind::Geogrid => &mut self.geogrid,
            DatasetKind::Fulldom => &mut self.fulldom,
            DatasetKind::Wrfinput => &mut self.wrfinput,
            DatasetKind::SoilProperties => &mut self.soil_properties,
            DatasetKind::Hydro2d => &mut self.hydro2d,
            DatasetKind::Routelink => &mut self.routelink,
        };
        *slot = path.into();
        self
    }
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
