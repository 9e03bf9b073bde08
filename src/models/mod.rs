//! Data models for promptmine.
//!
//! This module contains all the core data structures used throughout the
//! extraction and deduplication pipeline.

mod document;
mod domain;
mod pattern;
mod record;
mod report;

pub use document::{Frontmatter, SourceDocument};
pub use domain::{Domain, QualityTier};
pub use pattern::DeduplicatedPattern;
pub use record::{FailureRecord, InsightRecord, QuickWin, RecordEntry, StructuredPrompt};
pub use report::{ExtractionReport, ExtractionSummary, HighValueCandidate, QualityTiers};
