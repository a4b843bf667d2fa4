//! Detection of errors that leave a connection unusable.
//!
//! A pool uses this to decide whether to discard a connection instead of
//! returning it. Matching is on the start of the message only, since the
//! driver and server codes always lead the message text.

use crate::constants::CONNECTION_ERROR_PREFIXES;
use crate::error::Error;
use std::borrow::Cow;

/// Error-like values that carry a message.
pub trait ErrorMessage {
    /// The message text, if any.
    fn message(&self) -> Option<Cow<'_, str>>;
}

impl ErrorMessage for str {
    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl ErrorMessage for String {
    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: ErrorMessage> ErrorMessage for Option<T> {
    fn message(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(ErrorMessage::message)
    }
}

impl<T: ErrorMessage + ?Sized> ErrorMessage for &T {
    fn message(&self) -> Option<Cow<'_, str>> {
        (**self).message()
    }
}

impl ErrorMessage for Error {
    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }
}

impl ErrorMessage for dyn std::error::Error + '_ {
    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }
}

impl ErrorMessage for dyn std::error::Error + Send + Sync + '_ {
    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }
}

/// Catalog entry the message starts with, if any.
pub fn matching_prefix(message: &str) -> Option<&'static str> {
    CONNECTION_ERROR_PREFIXES
        .iter()
        .copied()
        .find(|prefix| message.starts_with(prefix))
}

/// Whether `err` means the connection is dead and should be marked failed.
///
/// Missing or empty messages never match.
pub fn is_connection_error<E: ErrorMessage + ?Sized>(err: &E) -> bool {
    err.message()
        .is_some_and(|message| matching_prefix(&message).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match() {
        assert!(is_connection_error("ORA-03113: end-of-file on communication channel"));
        assert!(is_connection_error("ORA-03113"));
        assert!(is_connection_error("DPI-1080: connection was closed by ORA-3113"));
        assert!(is_connection_error("NJS-500: connection to the Oracle Database was broken"));
    }

    #[test]
    fn test_every_catalog_entry_matches() {
        for prefix in CONNECTION_ERROR_PREFIXES {
            assert!(is_connection_error(*prefix), "{} should match", prefix);
            assert_eq!(matching_prefix(&format!("{}: x", prefix)), Some(*prefix));
        }
    }

    #[test]
    fn test_substring_is_not_enough() {
        assert!(!is_connection_error("see ORA-03113"));
        assert!(!is_connection_error(" ORA-03113: leading space"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_connection_error("ora-03113: end-of-file on communication channel"));
    }

    #[test]
    fn test_unrelated_and_empty() {
        assert!(!is_connection_error("ORA-00942: table or view does not exist"));
        assert!(!is_connection_error(""));
        assert!(!is_connection_error(&None::<String>));
        assert!(is_connection_error(&Some("ORA-01012: not logged on".to_string())));
    }

    #[test]
    fn test_crate_error() {
        assert!(is_connection_error(&Error::oracle(3135, "connection lost contact")));
        assert!(!is_connection_error(&Error::oracle(1, "unique constraint violated")));
    }

    #[test]
    fn test_boxed_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> =
            "ORA-02396: exceeded maximum idle time, please connect again".into();
        assert!(is_connection_error(&*err));

        let io = std::io::Error::new(std::io::ErrorKind::Other, "broken pipe");
        assert!(!is_connection_error(&io as &dyn std::error::Error));
    }
}
