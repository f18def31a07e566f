use thiserror::Error;

use netcdf_reader::ReadError;
use renderer::RenderError;

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Shape mismatch: {0}")]
    Shape(String),

    #[error("Failed to write figure: {0}")]
    Io(#[from] std::io::Error),
}
