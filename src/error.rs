// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MixError {
    #[error("ingredient '{0}' is not in the graph")]
    InvalidStart(String),

    #[error("missing required columns in input file: {}", .0.join(", "))]
    MissingColumn(Vec<String>),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, MixError>;

// Allow `?` on std::io::Error by converting to MixError::Io with unknown path.
impl From<std::io::Error> for MixError {
    fn from(source: std::io::Error) -> Self {
        MixError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
