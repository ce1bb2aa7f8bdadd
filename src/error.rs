//! Unified error types for the mastering-order library.
//!
//! Validation and archive failures carry their own structured error types
//! (`ValidationError`, `ArchiveError`); this module wraps them together with
//! the I/O, XML and ZIP failure modes of the export pipeline so callers can
//! work against a single error surface.
use thiserror::Error;

pub use crate::archive::ArchiveError;
pub use crate::validate::ValidationError;

/// Main error type for mastering-order operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Order data failed a validation rule
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Archive construction rejected or failed
    #[error("{0}")]
    Archive(#[from] ArchiveError),

    /// XML writing error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// Code table could not be loaded or parsed
    #[error("code table error: {0}")]
    CodeTable(String),
}

/// Result type for mastering-order operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::CodeTable(err.to_string())
    }
}
