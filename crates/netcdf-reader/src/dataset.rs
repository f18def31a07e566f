use std::path::{Path, PathBuf};
use std::sync::Once;

use netcdf::types::{FloatType, IntType, NcVariableType};
use tracing::{debug, info};

use crate::error::{ReadError, ReadResult};

static INIT: Once = Once::new();

/// Disable HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints diagnostics for conditions we handle
/// gracefully (probing whether a file is NetCDF-4, missing variables).
/// Called automatically on the first [`Dataset::open`]; safe to call
/// again from application startup.
pub fn silence_hdf5_errors() {
    INIT.call_once(|| unsafe {
        hdf5_metno_sys::h5e::H5Eset_auto2(
            hdf5_metno_sys::h5e::H5E_DEFAULT,
            None,
            std::ptr::null_mut(),
        );
    });
}

/// An open WRF-Hydro domain file.
///
/// Thin wrapper over [`netcdf::File`] that keeps the source path for
/// error messages and exposes only the read operations the viewer
/// needs: variable listing in declaration order, whole-array reads,
/// and string attribute lookup.
pub struct Dataset {
    file: netcdf::File,
    path: PathBuf,
}

impl Dataset {
    /// Open a NetCDF file for reading.
    ///
    /// A missing path is reported as [`ReadError::FileNotFound`] before
    /// the NetCDF library is invoked, so the message names the path the
    /// caller asked for rather than an HDF5 internal.
    pub fn open(path: impl AsRef<Path>) -> ReadResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ReadError::FileNotFound(path.to_path_buf()));
        }

        silence_hdf5_errors();

        let file = netcdf::open(path).map_err(|e| ReadError::InvalidFormat {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

        info!(path = %path.display(), "Opened NetCDF dataset");

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Variables in declaration order.
    pub fn variables<'f>(&'f self) -> impl Iterator<Item = Variable<'f>> + 'f {
        self.file.variables().map(|inner| Variable { inner })
    }

    /// Variable names in declaration order.
    pub fn variable_names(&self) -> Vec<String> {
        self.file.variables().map(|v| v.name()).collect()
    }

    /// Look up a variable by name.
    pub fn variable<'f>(&'f self, name: &str) -> ReadResult<Variable<'f>> {
        let inner = self
            .file
            .variable(name)
            .ok_or_else(|| ReadError::VariableNotFound(name.to_string()))?;
        debug!(variable = name, "Found variable");
        Ok(Variable { inner })
    }
}

/// A variable within an open [`Dataset`].
pub struct Variable<'f> {
    inner: netcdf::Variable<'f>,
}

impl Variable<'_> {
    pub fn name(&self) -> String {
        self.inner.name()
    }

    /// Dimension names in declaration order.
    pub fn dim_names(&self) -> Vec<String> {
        self.inner
            .dimensions()
            .iter()
            .map(|d| d.name().to_string())
            .collect()
    }

    /// Dimension lengths in declaration order.
    pub fn shape(&self) -> Vec<usize> {
        self.inner.dimensions().iter().map(|d| d.len()).collect()
    }

    pub fn ndims(&self) -> usize {
        self.inner.dimensions().len()
    }

    /// Read the whole array as `f32`, converting from the stored
    /// numeric type. Row-major, matching the declared dimension order.
    pub fn read_f32(&self) -> ReadResult<Vec<f32>> {
        match self.inner.vartype() {
            NcVariableType::Float(FloatType::F32) => self
                .inner
                .get_values(..)
                .map_err(|e| self.data_read_err(e)),
            NcVariableType::Float(FloatType::F64) => {
                let values: Vec<f64> = self
                    .inner
                    .get_values(..)
                    .map_err(|e| self.data_read_err(e))?;
                Ok(values.into_iter().map(|v| v as f32).collect())
            }
            NcVariableType::Int(IntType::I32) => {
                let values: Vec<i32> = self
                    .inner
                    .get_values(..)
                    .map_err(|e| self.data_read_err(e))?;
                Ok(values.into_iter().map(|v| v as f32).collect())
            }
            NcVariableType::Int(IntType::I64) => {
                let values: Vec<i64> = self
                    .inner
                    .get_values(..)
                    .map_err(|e| self.data_read_err(e))?;
                Ok(values.into_iter().map(|v| v as f32).collect())
            }
            NcVariableType::Int(IntType::I16) => {
                let values: Vec<i16> = self
                    .inner
                    .get_values(..)
                    .map_err(|e| self.data_read_err(e))?;
                Ok(values.into_iter().map(|v| f32::from(v)).collect())
            }
            NcVariableType::Int(IntType::U8) => {
                let values: Vec<u8> = self
                    .inner
                    .get_values(..)
                    .map_err(|e| self.data_read_err(e))?;
                Ok(values.into_iter().map(|v| f32::from(v)).collect())
            }
            other => Err(ReadError::UnsupportedType {
                name: self.name(),
                dtype: format!("{other:?}"),
            }),
        }
    }

    /// Read the whole array as `i32`. Index and mask variables only;
    /// floating-point storage is rejected rather than truncated.
    pub fn read_i32(&self) -> ReadResult<Vec<i32>> {
        match self.inner.vartype() {
            NcVariableType::Int(IntType::I32) => self
                .inner
                .get_values(..)
                .map_err(|e| self.data_read_err(e)),
            NcVariableType::Int(IntType::I64) => {
                let values: Vec<i64> = self
                    .inner
                    .get_values(..)
                    .map_err(|e| self.data_read_err(e))?;
                Ok(values.into_iter().map(|v| v as i32).collect())
            }
            NcVariableType::Int(IntType::I16) => {
                let values: Vec<i16> = self
                    .inner
                    .get_values(..)
                    .map_err(|e| self.data_read_err(e))?;
                Ok(values.into_iter().map(i32::from).collect())
            }
            other => Err(ReadError::UnsupportedType {
                name: self.name(),
                dtype: format!("{other:?}"),
            }),
        }
    }

    /// String attribute value, `None` when absent or non-string.
    pub fn string_attr(&self, name: &str) -> Option<String> {
        let value = self.inner.attribute_value(name)?.ok()?;
        match value {
            netcdf::AttributeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn units(&self) -> Option<String> {
        self.string_attr("units")
    }

    pub fn description(&self) -> Option<String> {
        self.string_attr("description")
    }

    fn data_read_err(&self, e: netcdf::Error) -> ReadError {
        ReadError::DataRead {
            name: self.name(),
            detail: e.to_string(),
        }
    }
}
