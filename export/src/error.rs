use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure categories of an export run.
///
/// Every variant is fatal: a run either writes its artifact in full or
/// aborts without leaving one behind. Nothing here is retried.
#[derive(Debug)]
pub enum ExportError {
    /// A checkpoint, dataset file, or requested sample could not be loaded.
    MissingSource { path: PathBuf, reason: String },

    /// A parameter's declared shape disagrees with its flattened length.
    ShapeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A NaN or infinite scalar reached the formatting stage.
    NonFinite { name: String, index: usize },

    /// Two distinct parameter names collapse to the same identifier.
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    /// The destination artifact could not be created or replaced.
    DestinationUnwritable { path: PathBuf, source: io::Error },

    /// A tensor operation failed in the backend.
    Tensor(candle_core::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::MissingSource { path, reason } => {
                write!(f, "cannot load source {:?}: {}", path, reason)
            }
            ExportError::ShapeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "parameter {} flattened to {} elements, shape declares {}",
                name, actual, expected
            ),
            ExportError::NonFinite { name, index } => {
                write!(f, "parameter {} has a non-finite value at index {}", name, index)
            }
            ExportError::IdentifierCollision {
                identifier,
                first,
                second,
            } => write!(
                f,
                "parameters {} and {} both map to identifier {}",
                first, second, identifier
            ),
            ExportError::DestinationUnwritable { path, source } => {
                write!(f, "cannot write artifact {:?}: {}", path, source)
            }
            ExportError::Tensor(e) => write!(f, "tensor operation failed: {}", e),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExportError::DestinationUnwritable { source, .. } => Some(source),
            ExportError::Tensor(e) => Some(e),
            _ => None,
        }
    }
}

impl From<candle_core::Error> for ExportError {
    fn from(e: candle_core::Error) -> Self {
        ExportError::Tensor(e)
    }
}
