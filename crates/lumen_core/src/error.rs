//! Errors produced while reading scene and camera files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while parsing a scene or camera record.
///
/// Loaders report these per line and keep going; a single bad record never
/// aborts a load.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown object type: {0}")]
    UnknownRecord(String),

    #[error("Unknown material type: {0}")]
    UnknownMaterial(String),

    #[error("Unknown camera setting: {0}")]
    UnknownKey(String),

    #[error("Missing value for {0}")]
    MissingField(&'static str),

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Failed to load mesh {path}: {source}")]
    Mesh {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
