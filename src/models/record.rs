//! Per-document extraction results.

use serde::{Deserialize, Serialize};

use super::{Domain, QualityTier};

/// The canonical reusable instruction structure recovered from a document's
/// super-prompt section.
///
/// Every field other than `full_text` is independently optional: the
/// structure extractor is best-effort and the absence of one labeled field
/// never invalidates the others. Presence and emptiness are kept distinct
/// (`None` vs `Some("")` never occurs; empty captures are dropped).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredPrompt {
    /// The complete prompt text. When the section contains a fenced code
    /// block this is the block's inner text; otherwise the whole section.
    pub full_text: String,
    /// The ROLE field, if labeled.
    pub role: Option<String>,
    /// The TASK/Objective field, if labeled.
    pub task: Option<String>,
    /// Input list lines, leading markers retained.
    pub inputs: Vec<String>,
    /// Process/checklist step lines, leading markers retained.
    pub process: Vec<String>,
    /// The OUTPUT spec field, if labeled.
    pub output: Option<String>,
    /// Quality-check list lines, leading markers retained.
    pub quality_checks: Vec<String>,
}

impl StructuredPrompt {
    /// Returns true if both a role and a task were recovered.
    #[must_use]
    pub const fn has_role_and_task(&self) -> bool {
        self.role.is_some() && self.task.is_some()
    }

    /// Whitespace-delimited word count of the full prompt text.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.full_text.split_whitespace().count()
    }
}

/// One short reusable pattern line from a document's quick-wins section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickWin {
    /// The pattern text, non-empty after bullet stripping.
    pub pattern: String,
    /// Category label, when the line carried one.
    pub category: Option<String>,
    /// The original untouched line, kept for provenance.
    pub original: String,
}

impl QuickWin {
    /// Creates a quick win without a category.
    #[must_use]
    pub fn new(pattern: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            category: None,
            original: original.into(),
        }
    }

    /// Creates a quick win with a category.
    #[must_use]
    pub fn categorized(
        category: impl Into<String>,
        pattern: impl Into<String>,
        original: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            category: Some(category.into()),
            original: original.into(),
        }
    }
}

/// A successfully extracted per-document record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRecord {
    /// Stable record identity: the frontmatter thread fingerprint when
    /// present, otherwise the file stem.
    pub file_id: String,
    /// Source file name.
    pub filename: String,
    /// Frontmatter title, if declared.
    pub title: Option<String>,
    /// Frontmatter date, if declared.
    pub date: Option<String>,
    /// Raw frontmatter tags value, if declared.
    pub tags: Option<String>,
    /// Frontmatter thread fingerprint, if declared.
    pub thread_id: Option<String>,
    /// Classified domain label.
    pub domain: Domain,
    /// Heuristic quality tier.
    pub quality: QualityTier,
    /// Recovered super-prompt structure, absent when no section matched.
    pub super_prompt: Option<StructuredPrompt>,
    /// Extracted quick-win patterns, in document order.
    pub quick_wins: Vec<QuickWin>,
    /// Extracted lesson strings, in document order.
    pub lessons: Vec<String>,
    /// Whitespace-delimited word count of the raw document.
    pub word_count: usize,
    /// Always true for this variant.
    pub success: bool,
}

/// A per-document failure: identity and error description only.
///
/// Produced when extraction errors inside the assembler chain; the failure
/// is isolated to the document and never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Stable record identity (file stem).
    pub file_id: String,
    /// Source file name.
    pub filename: String,
    /// Always false for this variant.
    pub success: bool,
    /// Description of what went wrong.
    pub error: String,
}

/// The tagged outcome of processing one document.
///
/// The batch collects both variants uniformly; only `Success` records flow
/// into the deduplicator. Serialized untagged so the report's `files` list
/// stays a flat array of objects distinguished by their `success` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordEntry {
    /// Extraction succeeded.
    Success(InsightRecord),
    /// Extraction failed; identity and error only.
    Failure(FailureRecord),
}

impl RecordEntry {
    /// Builds a failure entry for a document.
    #[must_use]
    pub fn failure(
        file_id: impl Into<String>,
        filename: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self::Failure(FailureRecord {
            file_id: file_id.into(),
            filename: filename.into(),
            success: false,
            error: error.into(),
        })
    }

    /// Returns true for the success variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The record identity, for either variant.
    #[must_use]
    pub fn file_id(&self) -> &str {
        match self {
            Self::Success(r) => &r.file_id,
            Self::Failure(f) => &f.file_id,
        }
    }

    /// The source file name, for either variant.
    #[must_use]
    pub fn filename(&self) -> &str {
        match self {
            Self::Success(r) => &r.filename,
            Self::Failure(f) => &f.filename,
        }
    }

    /// Returns the success record, if this entry is one.
    #[must_use]
    pub const fn as_success(&self) -> Option<&InsightRecord> {
        match self {
            Self::Success(r) => Some(r),
            Self::Failure(_) => None,
        }
    }
}
