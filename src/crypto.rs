//! Digest helpers for generated identifier names.

use base64::Engine;
use sha1::Sha1;

/// How the trailing `=` padding of a digest name is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestPadding {
    /// Remove only the first `=` in the encoded digest.
    ///
    /// This is what previously generated schemas were created with, so it
    /// is the default.
    #[default]
    StripFirst,
    /// Remove every trailing `=`.
    StripAll,
}

/// Compute SHA-1 hash.
pub fn sha1_hash(data: &[u8]) -> [u8; 20] {
    use sha1::Digest;
    let mut hasher = Sha1::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Base64 (standard alphabet) of the SHA-1 of `name`, with padding removed
/// according to `padding`.
pub fn digest_name(name: &str, padding: DigestPadding) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(sha1_hash(name.as_bytes()));
    match padding {
        DigestPadding::StripFirst => encoded.replacen('=', "", 1),
        DigestPadding::StripAll => encoded.trim_end_matches('=').to_string(),
    }
}
