// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Why a document could not be read as markup.
#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("document is not well-formed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("document is not well-formed: {0}")]
    Structure(String),

    #[error("DOCTYPE declarations are not allowed")]
    DoctypeDisabled,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed report {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: MarkupError,
    },
}

impl ReportError {
    /// True for markup failures, which the dispatcher may recover from.
    pub fn is_format(&self) -> bool {
        matches!(self, ReportError::Format { .. })
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
