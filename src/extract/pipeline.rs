//! Per-document extraction pipeline (the record assembler).
//!
//! Orchestrates frontmatter parsing, section location, structure recovery,
//! quick-win and lesson extraction, domain classification, and quality
//! scoring for one document. Failures are per-document: any error inside
//! the chain becomes a failure record and never aborts the batch.

use tracing::{debug, instrument, warn};

use crate::models::{InsightRecord, RecordEntry, SourceDocument};
use crate::{Error, Result};

use super::classifier::DomainClassifier;
use super::frontmatter::FrontmatterParser;
use super::lessons::LessonExtractor;
use super::quality::QualityScorer;
use super::quick_wins::QuickWinExtractor;
use super::sections::{SectionLocator, SectionRole};
use super::structure::StructureExtractor;

/// The per-document extraction pipeline.
///
/// Stateless and synchronous; documents flow through one at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractionPipeline;

impl ExtractionPipeline {
    /// Creates a pipeline.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Processes one document into a record entry.
    ///
    /// Errors inside the extraction chain are converted into a failure
    /// entry carrying the error description; they are reported as data, not
    /// propagated.
    #[instrument(skip(self, doc), fields(identity = %doc.identity))]
    #[must_use]
    pub fn process(&self, doc: &SourceDocument) -> RecordEntry {
        match self.extract(doc) {
            Ok(record) => RecordEntry::Success(record),
            Err(e) => {
                warn!(identity = %doc.identity, error = %e, "extraction failed");
                RecordEntry::failure(&doc.identity, &doc.filename, e.to_string())
            }
        }
    }

    /// Processes a whole corpus, one document at a time.
    ///
    /// Per-document failures are isolated; the returned batch always has
    /// one entry per input document.
    #[must_use]
    pub fn run(&self, docs: &[SourceDocument]) -> Vec<RecordEntry> {
        docs.iter().map(|doc| self.process(doc)).collect()
    }

    fn extract(&self, doc: &SourceDocument) -> Result<InsightRecord> {
        if doc.text.trim().is_empty() {
            return Err(Error::InvalidInput(
                "document is empty or whitespace-only".to_string(),
            ));
        }

        let frontmatter = FrontmatterParser::parse(&doc.text);

        let super_prompt = SectionLocator::locate(&doc.text, SectionRole::SuperPrompt)
            .map(|section| StructureExtractor::extract(&section));
        let quick_wins = SectionLocator::locate(&doc.text, SectionRole::QuickWins)
            .map(|section| QuickWinExtractor::extract(&section))
            .unwrap_or_default();
        let lessons = SectionLocator::locate(&doc.text, SectionRole::Lessons)
            .map(|section| LessonExtractor::extract(&section))
            .unwrap_or_default();

        let domain = DomainClassifier::classify(&frontmatter);
        let quality = QualityScorer::score(super_prompt.as_ref(), &quick_wins, &lessons);

        let file_id = frontmatter
            .thread_fingerprint()
            .unwrap_or(&doc.identity)
            .to_string();

        debug!(
            identity = %doc.identity,
            domain = %domain,
            quality = %quality,
            quick_wins = quick_wins.len(),
            lessons = lessons.len(),
            has_super_prompt = super_prompt.is_some(),
            "document extracted"
        );

        Ok(InsightRecord {
            file_id,
            filename: doc.filename.clone(),
            title: frontmatter.title().map(str::to_string),
            date: frontmatter.date().map(str::to_string),
            tags: frontmatter.tags().map(str::to_string),
            thread_id: frontmatter.thread_fingerprint().map(str::to_string),
            domain,
            quality,
            super_prompt,
            quick_wins,
            lessons,
            word_count: doc.word_count(),
            success: true,
        })
    }
}
