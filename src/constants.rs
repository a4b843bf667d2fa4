//! Oracle dialect constants.
//!
//! Identifier limits, the connection-error prefix catalog and SQLCODE values
//! used when building DDL.

// Identifier length limits
pub const ORA_IDENTIFIER_MAX_LEN_LEGACY: usize = 30;
pub const ORA_IDENTIFIER_MAX_LEN_12_2: usize = 128;

// First release with long identifiers
pub const ORA_LONG_IDENTIFIER_MAJOR: i64 = 12;
pub const ORA_LONG_IDENTIFIER_MINOR: i64 = 2;

/// Error message prefixes that mean the session or connection is no longer
/// usable.
pub static CONNECTION_ERROR_PREFIXES: &[&str] = &[
    "DPI-1010",  // not connected
    "DPI-1080",  // connection was closed by ORA-%d
    "ORA-03114", // not connected to ORACLE
    "ORA-03113", // end-of-file on communication channel
    "ORA-03135", // connection lost contact
    "ORA-12514", // listener does not currently know of service requested
    "ORA-00022", // invalid session ID; access denied
    "ORA-00028", // your session has been killed
    "ORA-00031", // your session has been marked for kill
    "ORA-00045", // your session has been terminated with no replay
    "ORA-00378", // buffer pools cannot be created as specified
    "ORA-00602", // internal programming exception
    "ORA-00603", // ORACLE server session terminated by fatal error
    "ORA-00609", // could not attach to incoming connection
    "ORA-01012", // not logged on
    "ORA-01041", // hostdef extension doesn't exist
    "ORA-01043", // user side memory corruption
    "ORA-01089", // immediate shutdown or close in progress
    "ORA-01092", // ORACLE instance terminated
    "ORA-02396", // exceeded maximum idle time
    "ORA-03122", // attempt to close ORACLE-side window on user side
    "ORA-12153", // TNS:not connected
    "ORA-12537", // TNS:connection closed
    "ORA-12547", // TNS:lost contact
    "ORA-12570", // TNS:packet reader failure
    "ORA-12583", // TNS:no reader
    "ORA-27146", // post/wait initialization failed
    "ORA-28511", // lost RPC connection
    "ORA-56600", // an illegal OCI function call was issued
    "NJS-024",
    "NJS-003",
    "NJS-500",
    "NJS-501",
    "NJS-521",
];

// SQLCODE values (negated ORA- numbers) absorbed by conditional DDL
pub const SQLCODE_TABLE_OR_VIEW_DOES_NOT_EXIST: i32 = -942;
pub const SQLCODE_INDEX_DOES_NOT_EXIST: i32 = -1418;
pub const SQLCODE_SEQUENCE_DOES_NOT_EXIST: i32 = -2289;
pub const SQLCODE_TRIGGER_DOES_NOT_EXIST: i32 = -4080;

// Postfix tags for generated object names
pub const NAME_POSTFIX_SEQUENCE: &str = "seq";
pub const NAME_POSTFIX_AUTOINC_TRIGGER: &str = "autoinc_trg";
pub const NAME_POSTFIX_PRIMARY_KEY: &str = "pkey";
pub const NAME_POSTFIX_FOREIGN_KEY: &str = "foreign";
pub const NAME_POSTFIX_UNIQUE: &str = "unique";
pub const NAME_POSTFIX_INDEX: &str = "index";
