//! Section location.
//!
//! Documents in the corpus use loosely consistent headings: the same logical
//! section may appear as `## Section 4: Super-Prompt`, `## 4) Super-Prompt`,
//! `## 4. Super-Prompt`, or an alternate title, sometimes with a typographic
//! hyphen. Each logical section therefore carries an ordered chain of
//! heading spellings, tried in order; the first spelling found anywhere in
//! the document wins and later duplicate headings are ignored.
//!
//! A located section's content runs from the heading line to the next
//! level-1/level-2 heading, a `---` horizontal rule line, or end of input,
//! whichever comes first, and is returned trimmed. A heading whose content
//! trims to nothing counts as absent.

use regex::Regex;
use std::sync::LazyLock;

/// Logical sections the locator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionRole {
    /// The canonical reusable prompt section.
    SuperPrompt,
    /// The quick-wins pattern list section.
    QuickWins,
    /// The lessons-learned section.
    Lessons,
}

/// Hyphen variants seen in the corpus: ASCII, non-breaking, en dash.
const HYPHENS: &str = "[-\u{2011}\u{2013}]";

/// Heading spelling chain for the super-prompt section, highest priority
/// first.
const SUPER_PROMPT_HEADINGS: &[&str] = &[
    r"Section 4:\s*Super{h}Prompt",
    r"4\)\s*Super{h}Prompt",
    r"4\.\s*Super{h}Prompt",
    r"Super{h}Prompt\s*\(Reusable\)",
    r"Super{h}Prompt",
];

/// Heading spelling chain for the quick-wins section.
const QUICK_WINS_HEADINGS: &[&str] = &[
    r"Section 9:\s*Quick Wins",
    r"9\)\s*Quick Wins",
    r"9\.\s*Quick Wins",
    r"Quick Wins Library",
];

/// Heading spelling chain for the lessons section.
const LESSONS_HEADINGS: &[&str] = &[
    r"Section 8:\s*Lessons",
    r"8\)\s*Lessons",
    r"8\.\s*Lessons",
];

/// Terminates a section: the next `#`/`##` heading line or a `---` rule.
static TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:##?\s|---[ \t]*\r?$)").unwrap_or_else(|_| unreachable!())
});

static SUPER_PROMPT_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_chain(SUPER_PROMPT_HEADINGS));
static QUICK_WINS_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_chain(QUICK_WINS_HEADINGS));
static LESSONS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_chain(LESSONS_HEADINGS));

/// Compiles one spelling chain into case-insensitive heading-line matchers.
fn compile_chain(headings: &[&str]) -> Vec<Regex> {
    headings
        .iter()
        .map(|fragment| {
            let fragment = fragment.replace("{h}", HYPHENS);
            Regex::new(&format!(r"(?mi)^##\s*{fragment}[^\n]*"))
                .unwrap_or_else(|_| unreachable!())
        })
        .collect()
}

/// Locates logical sections in a document body.
pub struct SectionLocator;

impl SectionLocator {
    /// Returns the trimmed text of a logical section, or `None` if no
    /// accepted heading spelling matched (or the section is empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promptmine::extract::{SectionLocator, SectionRole};
    ///
    /// let body = "## Section 9: Quick Wins\n- confirm scope\n\n## Next\n";
    /// let section = SectionLocator::locate(body, SectionRole::QuickWins);
    /// assert_eq!(section.as_deref(), Some("- confirm scope"));
    /// ```
    #[must_use]
    pub fn locate(body: &str, role: SectionRole) -> Option<String> {
        let patterns: &[Regex] = match role {
            SectionRole::SuperPrompt => &SUPER_PROMPT_PATTERNS,
            SectionRole::QuickWins => &QUICK_WINS_PATTERNS,
            SectionRole::Lessons => &LESSONS_PATTERNS,
        };

        for pattern in patterns {
            let Some(heading) = pattern.find(body) else {
                continue;
            };
            // Content starts after the heading line; only the first match of
            // the first successful spelling is considered.
            let tail = &body[heading.end()..];
            let tail = tail.strip_prefix('\r').unwrap_or(tail);
            let tail = tail.strip_prefix('\n').unwrap_or(tail);
            let end = TERMINATOR.find(tail).map_or(tail.len(), |t| t.start());
            let text = tail[..end].trim();
            return (!text.is_empty()).then(|| text.to_string());
        }

        None
    }
}
