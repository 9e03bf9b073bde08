//! Pattern normalization keys.
//!
//! Quick-win patterns vary in casing, quoting, placeholder names, and
//! whitespace across documents. The normalization key canonicalizes all
//! four so that `"Export results as {FORMAT}"` and
//! `"export RESULTS AS {TYPE}"` group together. A SHA-256 prefix of the key
//! doubles as a stable pattern id.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

/// Matches a curly-braced placeholder token like `{FORMAT}` or `{crm_name}`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").unwrap_or_else(|_| unreachable!()));

/// Matches any run of whitespace.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap_or_else(|_| unreachable!()));

/// Canonical marker substituted for every placeholder token.
const PLACEHOLDER_MARKER: &str = "{var}";

/// Length of the hex id prefix.
const HASH_PREFIX_LEN: usize = 16;

/// Builds normalization keys and stable ids for pattern texts.
pub struct PatternKey;

impl PatternKey {
    /// Computes the normalization key for a pattern text.
    ///
    /// Lowercases, strips surrounding quote characters, collapses every
    /// placeholder token to one canonical marker, and collapses whitespace
    /// runs to single spaces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promptmine::dedup::PatternKey;
    ///
    /// assert_eq!(
    ///     PatternKey::normalize("Export results as {FORMAT}"),
    ///     PatternKey::normalize("export  RESULTS AS {TYPE}"),
    /// );
    /// ```
    #[must_use]
    pub fn normalize(pattern: &str) -> String {
        let lowered = pattern.to_lowercase();
        let unquoted = lowered.trim_matches(['"', '\'']);
        let collapsed = PLACEHOLDER.replace_all(unquoted, PLACEHOLDER_MARKER);
        WHITESPACE
            .replace_all(&collapsed, " ")
            .trim()
            .to_string()
    }

    /// Computes the 16-char hex SHA-256 prefix of a normalization key.
    #[must_use]
    pub fn hash(key: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        let digest = hex::encode(hasher.finalize());
        digest[..HASH_PREFIX_LEN].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_placeholder_collapse() {
        let a = PatternKey::normalize("Export results as {FORMAT}");
        let b = PatternKey::normalize("export RESULTS AS {TYPE}");
        assert_eq!(a, b);
        assert_eq!(a, "export results as {var}");
    }

    #[test]
    fn test_quote_stripping() {
        assert_eq!(
            PatternKey::normalize("\"ask scope first\""),
            PatternKey::normalize("ask scope first")
        );
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(
            PatternKey::normalize("ask   scope\tfirst"),
            "ask scope first"
        );
    }

    #[test]
    fn test_distinct_patterns_stay_distinct() {
        assert_ne!(
            PatternKey::normalize("ask scope first"),
            PatternKey::normalize("confirm the deadline")
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = PatternKey::normalize("Export {X} as  {Y}");
        assert_eq!(PatternKey::normalize(&once), once);
    }

    #[test]
    fn test_hash_is_stable_prefix() {
        let hash = PatternKey::hash("export results as {var}");
        assert_eq!(hash.len(), 16);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, PatternKey::hash("export results as {var}"));
    }
}
