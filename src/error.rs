//! Error types for figbridge
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for figbridge operations
pub type FigbridgeResult<T> = Result<T, FigbridgeError>;

/// Main error type for figbridge operations
#[derive(Error, Debug)]
pub enum FigbridgeError {
    /// Asset source file does not exist; raised before any copy is attempted
    #[error("asset source not found at '{path}'")]
    SourceMissing { path: PathBuf },

    /// Default asset locations could not be resolved
    #[error("no bundled asset directory: {reason}")]
    BundledAssetsUnavailable { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
