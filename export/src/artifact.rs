use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::ExportError;

/// Default directory the generated headers land in.
pub const HEADER_ROOT: &str = "headers";

/// Owns the fixed destination paths of the generated headers.
///
/// Each artifact is staged fully in memory and flushed in one step: the
/// contents go to a temp file in the same directory which is then renamed
/// over the destination. A failed run never leaves a partial artifact, and
/// a repeated run replaces the previous one wholesale.
pub struct HeaderStore {
    root: PathBuf,
}

impl HeaderStore {
    pub fn new() -> Result<Self, ExportError> {
        Self::at(HEADER_ROOT)
    }

    pub fn at(root: impl Into<PathBuf>) -> Result<Self, ExportError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| ExportError::DestinationUnwritable {
            path: root.clone(),
            source: e,
        })?;
        Ok(Self { root })
    }

    /// Weight header of one network, e.g. `headers/mnist_fc.h`.
    pub fn network_header(&self, network: &str) -> PathBuf {
        self.root.join(format!("{}.h", network))
    }

    /// The calibration dataset header.
    pub fn calibration_header(&self) -> PathBuf {
        self.root.join("calibration_data.h")
    }

    /// Sample header for one label, e.g. `headers/data_7.h`.
    pub fn sample_header(&self, label: u8) -> PathBuf {
        self.root.join(format!("data_{}.h", label))
    }

    /// Writes a fully staged artifact, replacing any previous content.
    pub fn write(&self, path: &Path, contents: &str) -> Result<(), ExportError> {
        let unwritable = |e: std::io::Error| ExportError::DestinationUnwritable {
            path: path.to_path_buf(),
            source: e,
        };

        let mut staged = NamedTempFile::new_in(&self.root).map_err(unwritable)?;
        staged.write_all(contents.as_bytes()).map_err(unwritable)?;
        staged
            .persist(path)
            .map_err(|e| ExportError::DestinationUnwritable {
                path: path.to_path_buf(),
                source: e.error,
            })?;

        Ok(())
    }
}
