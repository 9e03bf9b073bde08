//! # Promptmine
//!
//! Mines a corpus of semi-structured Markdown "insight" documents into a
//! normalized knowledge base.
//!
//! Each document flows through a best-effort extraction pipeline that
//! recovers frontmatter metadata, a canonical super-prompt structure, a list
//! of short reusable "quick win" patterns, and lessons learned, then assigns
//! a domain label and a quality tier. The corpus of extracted records is
//! deduplicated into a cross-document pattern library, and the highest
//! quality records can be materialized as new standalone prompt documents.
//!
//! ## Pipeline
//!
//! ```text
//! frontmatter -> sections -> {structure, quick wins, lessons}
//!             -> classifier -> quality -> record
//! records     -> deduplicator -> pattern library
//! ```
//!
//! ## Example
//!
//! ```rust
//! use promptmine::extract::ExtractionPipeline;
//! use promptmine::models::SourceDocument;
//!
//! let pipeline = ExtractionPipeline::new();
//! let doc = SourceDocument::new(
//!     "zapier-thread",
//!     "---\ntitle: Zapier Automation\n---\n## Section 9: Quick Wins\n- confirm scope first\n",
//! );
//! let entry = pipeline.process(&doc);
//! assert!(entry.is_success());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod dedup;
pub mod extract;
pub mod io;
pub mod models;
pub mod rendering;

// Re-exports for convenience
pub use config::MinerConfig;
pub use dedup::Deduplicator;
pub use extract::ExtractionPipeline;
pub use io::{CorpusSource, DirectorySource, JsonReportSink, ReportSink};
pub use models::{
    DeduplicatedPattern, Domain, ExtractionReport, ExtractionSummary, InsightRecord, QualityTier,
    QuickWin, RecordEntry, SourceDocument, StructuredPrompt,
};

/// Error type for promptmine operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Empty documents, records missing a super-prompt at render time |
/// | `OperationFailed` | Corpus directory unreadable, report read/write fails, config file malformed |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A document's text is empty or whitespace-only
    /// - A record without a structured prompt is passed to the prompt renderer
    /// - A record's title produces an empty filename slug
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The insights directory cannot be listed or a file cannot be read
    /// - The JSON report cannot be serialized or written
    /// - The configuration file cannot be parsed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for promptmine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "invalid input: test error");

        let err = Error::OperationFailed {
            operation: "read_corpus".to_string(),
            cause: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "operation 'read_corpus' failed: permission denied"
        );
    }
}
