//! Generated object names (sequences, triggers, constraints, indexes).
//!
//! Oracle before 12.2 caps identifiers at 30 characters; 12.2 and later allow
//! 128. Names that do not fit are replaced by a digest of the full name so the
//! same inputs always map to the same object.

use crate::config::NameConfig;
use crate::crypto::{digest_name, DigestPadding};
use crate::logger::{Logger, TracingLogger};
use crate::version::OracleVersion;

/// Qualifier fragments placed between the base name and the postfix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubNames(Vec<String>);

impl SubNames {
    /// No qualifiers.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn joined(&self) -> String {
        self.0.join("_")
    }
}

impl From<()> for SubNames {
    fn from(_: ()) -> Self {
        Self::none()
    }
}

impl From<&str> for SubNames {
    fn from(name: &str) -> Self {
        if name.is_empty() {
            Self::none()
        } else {
            Self(vec![name.to_string()])
        }
    }
}

impl From<String> for SubNames {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl<T: Into<SubNames>> From<Option<T>> for SubNames {
    fn from(names: Option<T>) -> Self {
        names.map(Into::into).unwrap_or_default()
    }
}

impl<S: AsRef<str>> From<Vec<S>> for SubNames {
    fn from(names: Vec<S>) -> Self {
        Self::from(names.as_slice())
    }
}

impl<S: AsRef<str>> From<&[S]> for SubNames {
    fn from(names: &[S]) -> Self {
        Self(names.iter().map(|n| n.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for SubNames {
    fn from(names: [S; N]) -> Self {
        Self::from(&names[..])
    }
}

/// Builds identifier names that respect the server's length limit.
#[derive(Debug, Clone)]
pub struct NameHelper {
    version: OracleVersion,
    limit: usize,
    digest_padding: DigestPadding,
}

impl NameHelper {
    /// Create a helper for the given server version string.
    pub fn new(oracle_version: impl Into<String>) -> Self {
        Self::from_config(NameConfig::new(oracle_version))
    }

    /// Create a helper from explicit settings.
    pub fn from_config(config: NameConfig) -> Self {
        let version = OracleVersion::parse(config.oracle_version);
        let limit = version.identifier_limit();
        Self {
            version,
            limit,
            digest_padding: config.digest_padding,
        }
    }

    /// Maximum identifier length in characters.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn version(&self) -> &OracleVersion {
        &self.version
    }

    /// Build `{name}_{sub_names...}_{postfix}` in lower case.
    ///
    /// `.` and `-` in `name` become `_`. If the result is longer than
    /// [`limit`](Self::limit), a warning goes to `logger` and the base64 SHA-1
    /// of the over-long name is returned instead.
    ///
    /// # Example
    ///
    /// ```
    /// use oracle_dialect_utils::{NameHelper, TracingLogger};
    ///
    /// let helper = NameHelper::new("11.2.0.4");
    /// let name = helper.generate_combined_name(&TracingLogger, "unique", "users", "email");
    /// assert_eq!(name, "users_email_unique");
    /// ```
    pub fn generate_combined_name<L, S>(
        &self,
        logger: &L,
        postfix: &str,
        name: &str,
        sub_names: S,
    ) -> String
    where
        L: Logger + ?Sized,
        S: Into<SubNames>,
    {
        let table = name.replace(['.', '-'], "_");
        let sub_names = sub_names.into().joined();

        let mut result = String::with_capacity(table.len() + sub_names.len() + postfix.len() + 2);
        result.push_str(&table);
        result.push('_');
        if !sub_names.is_empty() {
            result.push_str(&sub_names);
            result.push('_');
        }
        result.push_str(postfix);
        let result = result.to_lowercase();

        if identifier_len(&result) > self.limit {
            logger.warn_name_too_long(&result, self.limit, self.version.as_str());
            return digest_name(&result, self.digest_padding);
        }
        result
    }

    /// [`generate_combined_name`](Self::generate_combined_name) with warnings
    /// sent to `tracing`.
    pub fn generate_combined_name_default<S>(&self, postfix: &str, name: &str, sub_names: S) -> String
    where
        S: Into<SubNames>,
    {
        self.generate_combined_name(&TracingLogger, postfix, name, sub_names)
    }
}

/// Identifier length as the server counts it for BMP text: UTF-16 code units.
fn identifier_len(name: &str) -> usize {
    name.encode_utf16().count()
}
