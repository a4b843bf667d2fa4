//! Oracle dialect helpers for a SQL query builder.
//!
//! Small, pure utilities the Oracle dialect needs around the driver:
//!
//! - [`NameHelper`] builds sequence, trigger and constraint names that fit the
//!   server's identifier limit (30 characters before 12.2, 128 after).
//! - [`is_connection_error`] tells whether a driver error means the
//!   connection is gone.
//! - [`wrap_sql_with_catch`] wraps DDL so one expected error is ignored.
//! - [`ReturningHelper`] marks OUT binds for `RETURNING ... INTO`.
//!
//! # Example
//!
//! ```
//! use oracle_dialect_utils::{is_connection_error, NameHelper, TracingLogger};
//!
//! let names = NameHelper::new("19.3.0.0.0");
//! assert_eq!(names.limit(), 128);
//! assert_eq!(
//!     names.generate_combined_name(&TracingLogger, "seq", "users", ()),
//!     "users_seq"
//! );
//!
//! assert!(is_connection_error("ORA-03113: end-of-file on communication channel"));
//! ```

pub mod config;
pub mod connection_errors;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod logger;
pub mod naming;
pub mod returning;
pub mod statement;
pub mod version;

// Re-export main types
pub use config::NameConfig;
pub use connection_errors::{is_connection_error, matching_prefix, ErrorMessage};
pub use crypto::DigestPadding;
pub use error::{Error, Result};
pub use logger::{Logger, TracingLogger};
pub use naming::{NameHelper, SubNames};
pub use returning::ReturningHelper;
pub use statement::wrap_sql_with_catch;
pub use version::OracleVersion;
