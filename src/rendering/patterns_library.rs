//! Pattern-library section rendering.

use chrono::Utc;
use std::fmt::Write;

use crate::dedup::PatternCategorizer;
use crate::models::DeduplicatedPattern;

/// Heading that marks where new pattern sections are inserted.
const INSERTION_MARKER: &str = "## Contributing New Patterns";

/// Characters of pattern text shown in a section heading.
const HEADING_PREVIEW_CHARS: usize = 60;

/// Renders the top deduplicated patterns as a Markdown section and splices
/// it into an existing library document.
///
/// Patterns without an extracted category get one from the fallback
/// [`PatternCategorizer`] at render time only; the dedup output itself is
/// left untouched.
#[derive(Debug, Clone, Copy)]
pub struct PatternsLibraryRenderer {
    top: usize,
}

impl PatternsLibraryRenderer {
    /// Creates a renderer emitting at most `top` patterns.
    #[must_use]
    pub const fn new(top: usize) -> Self {
        Self { top }
    }

    /// Renders the section for the given patterns.
    ///
    /// `source_threads` is the number of documents the patterns were mined
    /// from, shown in the section preamble. Input order is kept; callers
    /// pass the deduplicator's descending-occurrence output.
    #[must_use]
    pub fn render_section(
        &self,
        patterns: &[DeduplicatedPattern],
        source_threads: usize,
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "## Patterns from Bulk Extraction ({})",
            Utc::now().format("%Y-%m-%d")
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "**Source:** {source_threads} analyzed conversation threads");
        let _ = writeln!(
            out,
            "**Extracted:** {} unique patterns after deduplication",
            patterns.len()
        );
        let _ = writeln!(out);

        for (i, pattern) in patterns.iter().take(self.top).enumerate() {
            let category =
                PatternCategorizer::categorize(&pattern.pattern, pattern.category.as_deref());
            let _ = writeln!(
                out,
                "### Pattern {}: {}",
                i + 1,
                heading_preview(&pattern.pattern)
            );
            let _ = writeln!(out, "```");
            let _ = writeln!(out, "{}", pattern.pattern);
            let _ = writeln!(out, "```");
            let _ = writeln!(out, "- **Category:** {category}");
            let _ = writeln!(out, "- **Occurrences:** {} threads", pattern.occurrence_count);
            let _ = writeln!(out, "- **Source threads:** {}", pattern.distinct_sources());
            let _ = writeln!(out);
        }
        out
    }

    /// Splices a rendered section into an existing library document, before
    /// the contributing-patterns marker when present, appended otherwise.
    #[must_use]
    pub fn insert_into(existing: &str, section: &str) -> String {
        if let Some(pos) = existing.find(INSERTION_MARKER) {
            let mut updated = String::with_capacity(existing.len() + section.len() + 2);
            updated.push_str(&existing[..pos]);
            updated.push_str(section);
            updated.push('\n');
            updated.push_str(&existing[pos..]);
            updated
        } else {
            let mut updated = existing.to_string();
            if !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push('\n');
            updated.push_str(section);
            updated
        }
    }
}

fn heading_preview(pattern: &str) -> String {
    if pattern.chars().count() <= HEADING_PREVIEW_CHARS {
        return pattern.to_string();
    }
    let head: String = pattern.chars().take(HEADING_PREVIEW_CHARS).collect();
    format!("{head}...")
}
