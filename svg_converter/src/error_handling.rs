// error_handling.rs - Error types for reading drawings and writing parsed mazes

use std::path::PathBuf;

use maze_core::MazeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("SVG document is not well-formed: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("No child elements found with tag name \"g\"")]
    MissingGroup,

    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Line {line}: {reason}")]
    Decode { line: usize, reason: String },

    #[error("Source directory {} does not exist", .path.display())]
    SourceDirMissing { path: PathBuf },

    #[error("Worker pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ConvertError {
    pub(crate) fn decode(line: usize, reason: impl Into<String>) -> Self {
        ConvertError::Decode {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
