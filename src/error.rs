//! Error types for the Oracle dialect helpers.

use thiserror::Error;

/// Result type alias for dialect helper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for dialect helper operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Oracle database error.
    #[error("ORA-{code:05}: {message}")]
    Oracle { code: u32, message: String },

    /// Error raised by the client driver itself (DPI-xxxx, NJS-xxx).
    #[error("{message}")]
    Driver { message: String },

    /// Version string that is not of the form `major.minor[...]`.
    #[error("Invalid Oracle version: {version:?}")]
    InvalidVersion { version: String },
}

impl Error {
    /// Create an Oracle database error.
    pub fn oracle(code: u32, message: impl Into<String>) -> Self {
        Self::Oracle {
            code,
            message: message.into(),
        }
    }

    /// Create a driver error from its full message text.
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Check whether this error means the connection is gone and should be
    /// discarded by the pool.
    pub fn is_connection_error(&self) -> bool {
        crate::connection_errors::is_connection_error(self)
    }
}
