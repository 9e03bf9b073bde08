//! Lessons-learned extraction.

use regex::Regex;
use std::sync::LazyLock;

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").unwrap_or_else(|_| unreachable!()));

/// Extracts plain lesson strings from the lessons section.
pub struct LessonExtractor;

impl LessonExtractor {
    /// Extracts one lesson per list line.
    ///
    /// A line qualifies when it starts with a hyphen, a bullet, or a
    /// numeral-plus-dot prefix; the prefix is stripped and the trimmed
    /// remainder kept. Lines that strip to nothing are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promptmine::extract::LessonExtractor;
    ///
    /// let lessons = LessonExtractor::extract("- scope creep kills estimates\n1. ship early\n");
    /// assert_eq!(lessons, vec!["scope creep kills estimates", "ship early"]);
    /// ```
    #[must_use]
    pub fn extract(section: &str) -> Vec<String> {
        section
            .lines()
            .map(str::trim)
            .filter(|line| {
                line.starts_with('-') || line.starts_with('\u{2022}') || NUMBERED.is_match(line)
            })
            .filter_map(|line| {
                let lesson = line
                    .trim_start_matches(|c: char| {
                        matches!(c, '-' | '\u{2022}' | '.') || c.is_ascii_digit()
                    })
                    .trim();
                (!lesson.is_empty()).then(|| lesson.to_string())
            })
            .collect()
    }
}
