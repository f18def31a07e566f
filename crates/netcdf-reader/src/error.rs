use std::path::PathBuf;
use thiserror::Error;

pub type ReadResult<T> = Result<T, ReadError>;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Cannot open {path} as NetCDF: {detail}")]
    InvalidFormat { path: PathBuf, detail: String },

    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    #[error("Failed to read variable {name}: {detail}")]
    DataRead { name: String, detail: String },

    #[error("Unsupported data type for variable {name}: {dtype}")]
    UnsupportedType { name: String, dtype: String },
}
