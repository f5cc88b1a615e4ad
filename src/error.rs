//! Error types for Otto
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`
//! at the command layer. Note that token resolution contributes no
//! variants here: it is total over its input domain.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Otto operations
pub type OttoResult<T> = Result<T, OttoError>;

/// Main error type for Otto operations
#[derive(Error, Debug)]
pub enum OttoError {
    /// Config file exists but could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timestamp input matched no supported form
    #[error("unrecognized moment '{input}' - expected epoch seconds/millis, RFC 3339, 'YYYY-MM-DD HH:MM:SS', or 'YYYY-MM-DD'")]
    UnrecognizedMoment { input: String },

    /// No vault name available from flags or config
    #[error("no vault name - pass --vault or set [vault] name in otto.toml")]
    NoVault,

    /// A write mode was requested without text to write
    #[error("write mode '{mode}' requires text to write")]
    EmptyPayload { mode: String },
}
