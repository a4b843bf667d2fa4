//! Warning sink used by the name generator.

/// Anything that can accept a warning message.
pub trait Logger {
    fn warn(&self, message: &str);

    /// A generated name did not fit and was replaced by its digest.
    fn warn_name_too_long(&self, name: &str, limit: usize, version: &str) {
        self.warn(&name_too_long_message(name, limit, version));
    }
}

/// Text of the warning sent when a generated name is over the limit.
pub fn name_too_long_message(name: &str, limit: usize, version: &str) -> String {
    format!(
        "Automatically generated name \"{}\" exceeds {} character limit for Oracle Database {}. \
         Using base64 encoded sha1 of that name instead.",
        name, limit, version
    )
}

/// Logger that forwards warnings to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "oracle_dialect_utils", "{}", message);
    }

    fn warn_name_too_long(&self, name: &str, limit: usize, version: &str) {
        tracing::warn!(
            target: "oracle_dialect_utils",
            generated_name = name,
            limit,
            version,
            "Generated name exceeds identifier limit, using base64 encoded sha1 instead"
        );
    }
}

impl<F> Logger for F
where
    F: Fn(&str),
{
    fn warn(&self, message: &str) {
        self(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_logger() {
        let seen = RefCell::new(Vec::new());
        let logger = |msg: &str| seen.borrow_mut().push(msg.to_string());
        logger.warn("first");
        Logger::warn(&logger, "second");
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_tracing_logger_without_subscriber() {
        // No subscriber installed; must not panic.
        TracingLogger.warn("dropped");
        TracingLogger.warn_name_too_long("a_very_long_name_seq", 30, "11.2");
    }

    #[test]
    fn test_name_too_long_default_goes_through_warn() {
        let seen = RefCell::new(Vec::new());
        let logger = |msg: &str| seen.borrow_mut().push(msg.to_string());
        logger.warn_name_too_long("a_very_long_name_seq", 30, "11.2");
        assert_eq!(
            *seen.borrow(),
            vec![
                "Automatically generated name \"a_very_long_name_seq\" exceeds 30 character limit \
                 for Oracle Database 11.2. Using base64 encoded sha1 of that name instead."
            ]
        );
    }
}
