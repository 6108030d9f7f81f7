//! Error types for the ambient plumbing: config file, logging, assets.
//!
//! The timer itself never fails; bad input is normalized instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode or decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logger was already installed
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// Embedded asset missing from the binary
    #[error("missing embedded asset: {0}")]
    MissingAsset(String),
}

pub type Result<T> = std::result::Result<T, Error>;
