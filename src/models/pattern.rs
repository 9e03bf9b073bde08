//! Cross-document deduplicated pattern type.

use serde::{Deserialize, Serialize};

/// One row per normalized pattern key across the whole corpus.
///
/// Built once after all records exist; read-only afterward. The sum of
/// `occurrence_count` over all rows equals the total number of quick-win
/// instances across all successful records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeduplicatedPattern {
    /// Canonical pattern text, chosen from the group (prefers an instance
    /// that carried a category).
    pub pattern: String,
    /// Category of the canonical instance, possibly still absent.
    pub category: Option<String>,
    /// Original untouched line of the canonical instance.
    pub original: String,
    /// Stable id: 16-char SHA-256 prefix of the normalization key.
    pub key_hash: String,
    /// Number of quick-win instances that collapsed into this row (>= 1).
    pub occurrence_count: usize,
    /// Contributing document identities, in encounter order. Duplicates are
    /// allowed when one document repeats a pattern.
    pub source_files: Vec<String>,
}

impl DeduplicatedPattern {
    /// Number of distinct contributing documents.
    #[must_use]
    pub fn distinct_sources(&self) -> usize {
        let mut seen: Vec<&str> = Vec::with_capacity(self.source_files.len());
        for source in &self.source_files {
            if !seen.contains(&source.as_str()) {
                seen.push(source);
            }
        }
        seen.len()
    }
}
