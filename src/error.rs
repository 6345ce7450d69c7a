use std::io;
use std::path::PathBuf;

/// Everything that aborts a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write shim output: {0}")]
    Write(#[from] io::Error),

    #[error("section marker {marker:?} not found in input")]
    MissingMarker { marker: String },

    #[error("line continuation after `{pending}` but input ended")]
    UnexpectedEof { pending: String },

    #[error("invalid built-in tables: {0}")]
    Tables(String),
}

impl GenError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
