//! Fallback pattern categorization.
//!
//! Many deduplicated patterns never carried an inline category. For
//! rendering the pattern library, an ordered keyword table assigns one;
//! like the domain table, the order is part of the contract. This is a
//! display-time fallback only: the dedup output keeps `category` honest
//! (absent stays absent).

/// Ordered `(category, keyword set)` table, highest priority first.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Clarify", &["clarify", "confirm", "what", "which", "scope"]),
    (
        "Constrain",
        &["format", "output", "structure", "markdown", "table"],
    ),
    (
        "Evaluate",
        &["score", "check", "verify", "validate", "review"],
    ),
    ("Refine", &["refactor", "improve", "enhance", "upgrade"]),
    ("Verify", &["citation", "source", "reference", "evidence"]),
    (
        "Compare",
        &["compare", "contrast", "difference", "alternative"],
    ),
    ("Export", &["export", "save", "generate file"]),
    ("Prioritize", &["prioritize", "order", "rank", "sort"]),
    ("Safety", &["safety", "warn", "flag", "caution"]),
];

/// Catch-all category.
const FALLBACK: &str = "Other";

/// Assigns a display category to patterns without one.
pub struct PatternCategorizer;

impl PatternCategorizer {
    /// Returns the extracted category when present, otherwise the first
    /// table entry with a keyword substring match, otherwise `Other`.
    #[must_use]
    pub fn categorize<'a>(pattern: &str, existing: Option<&'a str>) -> &'a str {
        if let Some(category) = existing {
            return category;
        }
        let lowered = pattern.to_lowercase();
        for (category, keywords) in CATEGORY_KEYWORDS {
            if keywords.iter().any(|kw| lowered.contains(kw)) {
                return category;
            }
        }
        FALLBACK
    }
}
