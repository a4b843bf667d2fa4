//! Name generation settings.

use crate::crypto::DigestPadding;

/// Settings for a [`NameHelper`](crate::NameHelper).
#[derive(Debug, Clone)]
pub struct NameConfig {
    /// Server version string, e.g. `"19.3.0.0.0"`.
    pub oracle_version: String,
    /// Padding policy for digest fallback names.
    pub digest_padding: DigestPadding,
}

impl NameConfig {
    /// Create settings for the given server version.
    pub fn new(oracle_version: impl Into<String>) -> Self {
        Self {
            oracle_version: oracle_version.into(),
            digest_padding: DigestPadding::default(),
        }
    }

    /// Set the digest padding policy.
    ///
    /// # Example
    ///
    /// ```
    /// use oracle_dialect_utils::{DigestPadding, NameConfig};
    ///
    /// let config = NameConfig::new("19.3").with_digest_padding(DigestPadding::StripAll);
    /// assert_eq!(config.digest_padding, DigestPadding::StripAll);
    /// ```
    pub fn with_digest_padding(mut self, padding: DigestPadding) -> Self {
        self.digest_padding = padding;
        self
    }
}
