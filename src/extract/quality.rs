//! Quality scoring.
//!
//! A pure function from extracted content to a three-tier label. Scoring is
//! additive: structure presence and completeness, quick-win volume, and
//! lesson volume each contribute points.

use crate::models::{QualityTier, QuickWin, StructuredPrompt};

/// Points for having a structured prompt at all.
const PROMPT_PRESENT: u32 = 3;
/// Points for a prompt with both role and task.
const ROLE_AND_TASK: u32 = 2;
/// Threshold for input/process/lesson list bonuses.
const LIST_THRESHOLD: usize = 3;
/// Quick-win count for the larger bonus.
const QUICK_WINS_STRONG: usize = 5;

/// Score at or above which a record is HIGH.
const HIGH_CUTOFF: u32 = 8;
/// Score at or above which a record is MEDIUM.
const MEDIUM_CUTOFF: u32 = 4;

/// Scores a record's extracted content into a [`QualityTier`].
pub struct QualityScorer;

impl QualityScorer {
    /// Computes the tier. Same inputs always produce the same label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promptmine::extract::QualityScorer;
    /// use promptmine::models::QualityTier;
    ///
    /// assert_eq!(QualityScorer::score(None, &[], &[]), QualityTier::Low);
    /// ```
    #[must_use]
    pub fn score(
        super_prompt: Option<&StructuredPrompt>,
        quick_wins: &[QuickWin],
        lessons: &[String],
    ) -> QualityTier {
        let mut score = 0u32;

        if let Some(prompt) = super_prompt {
            score += PROMPT_PRESENT;
            if prompt.has_role_and_task() {
                score += ROLE_AND_TASK;
            }
            if prompt.inputs.len() >= LIST_THRESHOLD {
                score += 1;
            }
            if prompt.process.len() >= LIST_THRESHOLD {
                score += 1;
            }
            if !prompt.quality_checks.is_empty() {
                score += 1;
            }
        }

        if quick_wins.len() >= QUICK_WINS_STRONG {
            score += 2;
        } else if quick_wins.len() >= LIST_THRESHOLD {
            score += 1;
        }

        if lessons.len() >= LIST_THRESHOLD {
            score += 1;
        }

        if score >= HIGH_CUTOFF {
            QualityTier::High
        } else if score >= MEDIUM_CUTOFF {
            QualityTier::Medium
        } else {
            QualityTier::Low
        }
    }
}
