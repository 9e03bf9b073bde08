//! Aggregate run report for the JSON sink.
//!
//! The schema is stable across runs so downstream tooling can diff reports.
//! All counters are derived once here; the reporting layer never re-scans
//! records to compute them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{InsightRecord, QualityTier, RecordEntry};

/// Summary counters for one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    /// Total documents processed, failures included.
    pub total_files: usize,
    /// Documents that produced a success record.
    pub successful: usize,
    /// Success records carrying a structured prompt.
    pub with_super_prompts: usize,
    /// Success records carrying at least one quick win.
    pub with_quick_wins: usize,
    /// Total quick-win instances across all success records.
    pub total_quick_wins: usize,
    /// Total lessons across all success records.
    pub total_lessons: usize,
    /// Records scored HIGH.
    pub high_quality_count: usize,
    /// Records scored MEDIUM.
    pub medium_quality_count: usize,
    /// Records scored LOW.
    pub low_quality_count: usize,
}

/// Filenames grouped by quality tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityTiers {
    /// HIGH-tier filenames: candidates for standalone prompt documents.
    pub high: Vec<String>,
    /// MEDIUM-tier filenames: pattern-library contributors.
    pub medium: Vec<String>,
    /// LOW-tier filenames: reference only.
    pub low: Vec<String>,
}

/// A document worth prioritizing for prompt generation.
///
/// Criteria: has a structured prompt, at least five quick wins, and a prompt
/// body longer than one hundred words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighValueCandidate {
    /// Source file name.
    pub filename: String,
    /// Frontmatter title, if declared.
    pub title: Option<String>,
    /// Quick-win count (sort key, descending).
    pub quick_wins_count: usize,
    /// Word count of the extracted prompt text.
    pub super_prompt_words: usize,
}

/// The aggregate object handed to the output collaborator, one per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// When the run completed.
    pub extraction_date: DateTime<Utc>,
    /// Summary counters.
    pub summary: ExtractionSummary,
    /// Filenames by quality tier.
    pub quality_tiers: QualityTiers,
    /// Domain label to document count. `BTreeMap` keeps output order
    /// deterministic across runs.
    pub domains: BTreeMap<String, usize>,
    /// Priority candidates for generation, best first.
    pub high_value_files: Vec<HighValueCandidate>,
    /// Every record produced by the run, failures included.
    pub files: Vec<RecordEntry>,
}

impl ExtractionReport {
    /// Minimum quick wins for the high-value candidate list.
    const HIGH_VALUE_MIN_QUICK_WINS: usize = 5;
    /// Minimum super-prompt word count for the high-value candidate list.
    const HIGH_VALUE_MIN_PROMPT_WORDS: usize = 100;

    /// Builds the report from a batch of record entries.
    #[must_use]
    pub fn from_entries(entries: Vec<RecordEntry>) -> Self {
        let mut summary = ExtractionSummary {
            total_files: entries.len(),
            ..ExtractionSummary::default()
        };
        let mut tiers = QualityTiers::default();
        let mut domains: BTreeMap<String, usize> = BTreeMap::new();
        let mut candidates: Vec<HighValueCandidate> = Vec::new();

        for record in entries.iter().filter_map(RecordEntry::as_success) {
            summary.successful += 1;
            summary.total_quick_wins += record.quick_wins.len();
            summary.total_lessons += record.lessons.len();
            if record.super_prompt.is_some() {
                summary.with_super_prompts += 1;
            }
            if !record.quick_wins.is_empty() {
                summary.with_quick_wins += 1;
            }

            match record.quality {
                QualityTier::High => {
                    summary.high_quality_count += 1;
                    tiers.high.push(record.filename.clone());
                }
                QualityTier::Medium => {
                    summary.medium_quality_count += 1;
                    tiers.medium.push(record.filename.clone());
                }
                QualityTier::Low => {
                    summary.low_quality_count += 1;
                    tiers.low.push(record.filename.clone());
                }
            }

            *domains.entry(record.domain.as_str().to_string()).or_insert(0) += 1;

            if let Some(candidate) = Self::high_value_candidate(record) {
                candidates.push(candidate);
            }
        }

        candidates.sort_by(|a, b| b.quick_wins_count.cmp(&a.quick_wins_count));

        Self {
            extraction_date: Utc::now(),
            summary,
            quality_tiers: tiers,
            domains,
            high_value_files: candidates,
            files: entries,
        }
    }

    fn high_value_candidate(record: &InsightRecord) -> Option<HighValueCandidate> {
        let prompt = record.super_prompt.as_ref()?;
        let words = prompt.word_count();
        if record.quick_wins.len() >= Self::HIGH_VALUE_MIN_QUICK_WINS
            && words > Self::HIGH_VALUE_MIN_PROMPT_WORDS
        {
            Some(HighValueCandidate {
                filename: record.filename.clone(),
                title: record.title.clone(),
                quick_wins_count: record.quick_wins.len(),
                super_prompt_words: words,
            })
        } else {
            None
        }
    }

    /// Iterates over the success records in the report.
    pub fn successful_records(&self) -> impl Iterator<Item = &InsightRecord> {
        self.files.iter().filter_map(RecordEntry::as_success)
    }

    /// Iterates over the HIGH-tier success records.
    pub fn high_quality_records(&self) -> impl Iterator<Item = &InsightRecord> {
        self.successful_records()
            .filter(|r| r.quality == QualityTier::High)
    }
}
