//! Render sinks: the hosting environment's side of "show the figure".

use std::path::{Path, PathBuf};

use renderer::figure::Figure;
use renderer::{png, RenderError};
use tracing::info;

use crate::error::ViewerResult;

/// Where composed figures are delivered for display.
pub trait RenderSink {
    fn display(&mut self, figure: &Figure) -> ViewerResult<()>;
}

/// Encodes each figure as PNG and writes it into a directory with a
/// running sequence number. This is the display surface, not a data
/// product; nothing reads the files back.
pub struct PngDirSink {
    dir: PathBuf,
    count: usize,
}

impl PngDirSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            count: 0,
        }
    }
}

impl RenderSink for PngDirSink {
    fn display(&mut self, figure: &Figure) -> ViewerResult<()> {
        let bytes = png::encode_figure(&figure.image).map_err(RenderError::Encode)?;
        self.count += 1;
        let path = self.dir.join(format!("figure_{:04}.png", self.count));
        std::fs::write(&path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "Displayed figure");
        Ok(())
    }
}

/// Retains every displayed figure in memory. Test double.
#[derive(Default)]
pub struct MemorySink {
    figures: Vec<Figure>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }
}

impl RenderSink for MemorySink {
    fn display(&mut self, figure: &Figure) -> ViewerResult<()> {
        self.figures.push(figure.clone());
        Ok(())
    }
}
