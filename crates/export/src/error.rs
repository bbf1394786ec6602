//! Result and Error types for the export module

/// Type alias for `Result<T, export::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `groupy-export`
///
/// Missing reaction types are never an error, only failures writing the
/// output are.
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure writing a CSV record
    #[error("failed to write CSV table")]
    Csv(#[from] csv::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure reading the GENDF tape being exported
    #[error(transparent)]
    Gendf(#[from] groupy_gendf::Error),
}
