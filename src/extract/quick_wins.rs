//! Quick-win pattern extraction.
//!
//! The quick-wins section is a list of short reusable instruction
//! fragments, one per line, optionally tagged with a category:
//! ```text
//! Clarify → ask scope before estimating
//! Constrain: output as a Markdown table
//! - always confirm deadline
//! ```
//! Category detection is a heuristic, not a classifier: an arrow separator
//! always splits, a colon splits only when the left side looks like a label
//! (at most three words, uppercase first letter).

use crate::models::QuickWin;

use super::fenced_block;

/// Directional arrow separating a category from its pattern.
const ARROW: char = '\u{2192}';
/// Leading list markers stripped from patterns and categories.
const BULLETS: [char; 2] = ['-', '\u{2022}'];
/// Maximum words for a colon-delimited left side to count as a category.
const MAX_CATEGORY_WORDS: usize = 3;

/// Extracts [`QuickWin`] lists from quick-wins section text.
pub struct QuickWinExtractor;

impl QuickWinExtractor {
    /// Extracts quick wins from a located quick-wins section.
    ///
    /// When the section contains a fenced code block, the block's content is
    /// the candidate text; otherwise the section itself. Blank lines and
    /// `#` comment lines are skipped. Each surviving line yields one quick
    /// win with the original line retained for provenance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promptmine::extract::QuickWinExtractor;
    ///
    /// let wins = QuickWinExtractor::extract("Clarify \u{2192} ask scope before estimating");
    /// assert_eq!(wins[0].category.as_deref(), Some("Clarify"));
    /// assert_eq!(wins[0].pattern, "ask scope before estimating");
    /// ```
    #[must_use]
    pub fn extract(section: &str) -> Vec<QuickWin> {
        let candidate = fenced_block(section).unwrap_or(section);

        let mut wins = Vec::new();
        for raw_line in candidate.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (category, pattern_text) = Self::split_category(line);
            let pattern = pattern_text.trim_start_matches(BULLETS).trim();
            if pattern.is_empty() {
                continue;
            }

            wins.push(QuickWin {
                pattern: pattern.to_string(),
                category,
                original: line.to_string(),
            });
        }
        wins
    }

    /// Splits an optional category label off the front of a line.
    fn split_category(line: &str) -> (Option<String>, &str) {
        if let Some((left, right)) = line.split_once(ARROW) {
            let category = left.trim().trim_matches(BULLETS).trim();
            let category = (!category.is_empty()).then(|| category.to_string());
            return (category, right.trim());
        }

        if !line.starts_with('"') {
            if let Some((left, right)) = line.split_once(':') {
                let candidate = left.trim().trim_matches(BULLETS).trim();
                if Self::looks_like_category(candidate) {
                    return (Some(candidate.to_string()), right.trim());
                }
            }
        }

        (None, line)
    }

    /// At most three words, first character uppercase.
    fn looks_like_category(candidate: &str) -> bool {
        candidate.split_whitespace().count() <= MAX_CATEGORY_WORDS
            && candidate.chars().next().is_some_and(char::is_uppercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_split() {
        let wins = QuickWinExtractor::extract("Clarify \u{2192} ask scope before estimating");
        assert_eq!(wins.len(), 1);
        assert_eq!(wins[0].category.as_deref(), Some("Clarify"));
        assert_eq!(wins[0].pattern, "ask scope before estimating");
    }

    #[test]
    fn test_bullet_line_without_category() {
        let wins = QuickWinExtractor::extract("- always confirm deadline");
        assert_eq!(wins.len(), 1);
        assert_eq!(wins[0].category, None);
        assert_eq!(wins[0].pattern, "always confirm deadline");
        assert_eq!(wins[0].original, "- always confirm deadline");
    }

    #[test]
    fn test_colon_category_heuristic() {
        let wins = QuickWinExtractor::extract("Constrain: output as a Markdown table");
        assert_eq!(wins[0].category.as_deref(), Some("Constrain"));
        assert_eq!(wins[0].pattern, "output as a Markdown table");
    }

    #[test]
    fn test_colon_left_side_too_long_is_not_a_category() {
        let line = "when you are unsure about scope: ask first";
        let wins = QuickWinExtractor::extract(line);
        assert_eq!(wins[0].category, None);
        assert_eq!(wins[0].pattern, line);
    }

    #[test]
    fn test_colon_lowercase_left_side_is_not_a_category() {
        let wins = QuickWinExtractor::extract("note: remember the edge cases");
        assert_eq!(wins[0].category, None);
    }

    #[test]
    fn test_quoted_line_never_splits_on_colon() {
        let wins = QuickWinExtractor::extract("\"Format: respond in JSON only\"");
        assert_eq!(wins[0].category, None);
        assert_eq!(wins[0].pattern, "\"Format: respond in JSON only\"");
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        let section = "# patterns\n\n- keep diffs small\n";
        let wins = QuickWinExtractor::extract(section);
        assert_eq!(wins.len(), 1);
        assert_eq!(wins[0].pattern, "keep diffs small");
    }

    #[test]
    fn test_fenced_block_preferred() {
        let section = "Intro prose that is not a pattern.\n```\n- from the block\n```\n";
        let wins = QuickWinExtractor::extract(section);
        assert_eq!(wins.len(), 1);
        assert_eq!(wins[0].pattern, "from the block");
    }

    #[test]
    fn test_bulleted_category_before_arrow() {
        let wins = QuickWinExtractor::extract("- Evaluate \u{2192} score the draft 1-10");
        assert_eq!(wins[0].category.as_deref(), Some("Evaluate"));
        assert_eq!(wins[0].pattern, "score the draft 1-10");
    }

    #[test]
    fn test_empty_left_of_colon_yields_no_category() {
        let wins = QuickWinExtractor::extract(": dangling separator");
        assert_eq!(wins.len(), 1);
        assert_eq!(wins[0].category, None);
        assert_eq!(wins[0].pattern, ": dangling separator");
    }

    #[test]
    fn test_spec_example_pair() {
        let section = "Clarify \u{2192} ask scope before estimating\n- always confirm deadline\n";
        let wins = QuickWinExtractor::extract(section);
        assert_eq!(wins.len(), 2);
        assert_eq!(wins[0].category.as_deref(), Some("Clarify"));
        assert_eq!(wins[0].pattern, "ask scope before estimating");
        assert_eq!(wins[1].category, None);
        assert_eq!(wins[1].pattern, "always confirm deadline");
    }
}
