//! The extraction pipeline: free-text Markdown in, structured records out.
//!
//! Leaves first: [`FrontmatterParser`] and [`SectionLocator`] carve a
//! document into metadata and logical sections; [`StructureExtractor`],
//! [`QuickWinExtractor`], and [`LessonExtractor`] mine the located
//! sections; [`DomainClassifier`] and [`QualityScorer`] label the result;
//! [`ExtractionPipeline`] assembles one record per document with
//! per-document failure isolation.

mod classifier;
mod frontmatter;
mod lessons;
mod pipeline;
mod quality;
mod quick_wins;
mod sections;
mod structure;

pub use classifier::DomainClassifier;
pub use frontmatter::FrontmatterParser;
pub use lessons::LessonExtractor;
pub use pipeline::ExtractionPipeline;
pub use quality::QualityScorer;
pub use quick_wins::QuickWinExtractor;
pub use sections::{SectionLocator, SectionRole};
pub use structure::StructureExtractor;

use regex::Regex;
use std::sync::LazyLock;

/// Matches a fenced code block; group 1 is the inner text.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[^\n]*\n(.*?)```").unwrap_or_else(|_| unreachable!())
});

/// Returns the inner text of the first fenced code block, if any.
///
/// Sections often carry their payload (the prompt itself, or the pattern
/// list) inside a fence; when present, the fence content is canonical.
pub(crate) fn fenced_block(text: &str) -> Option<&str> {
    FENCED_BLOCK
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_with_language_tag() {
        let text = "before\n```markdown\ninner line\n```\nafter";
        assert_eq!(fenced_block(text), Some("inner line\n"));
    }

    #[test]
    fn test_no_fence() {
        assert_eq!(fenced_block("plain text"), None);
    }

    #[test]
    fn test_first_fence_wins() {
        let text = "```\none\n```\n```\ntwo\n```";
        assert_eq!(fenced_block(text), Some("one\n"));
    }
}
