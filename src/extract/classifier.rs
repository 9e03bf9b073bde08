//! Domain classification.
//!
//! Priority-ordered keyword matching over a document's title and tags. The
//! table order is load-bearing: keyword sets overlap (a "workflow api"
//! title is automation, not API development), so entries are evaluated
//! top-to-bottom and must not be reordered. Classification always yields
//! exactly one label; `General` is the catch-all.

use crate::models::{Domain, Frontmatter};

/// Ordered `(label, keyword set)` dispatch table, highest priority first.
const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Automation,
        &["zapier", "automation", "workflow", "process"],
    ),
    (
        Domain::ApiDevelopment,
        &["api", "rest", "fastapi", "endpoint", "backend"],
    ),
    (
        Domain::WebDevelopment,
        &["nextjs", "next.js", "react", "frontend", "ui", "web"],
    ),
    (
        Domain::Database,
        &["database", "chroma", "sql", "postgres", "persistence"],
    ),
    (
        Domain::Documentation,
        &["documentation", "docs", "readme", "agents.md"],
    ),
    (
        Domain::BusinessProcess,
        &["business", "consulting", "interview", "process-automation"],
    ),
    (
        Domain::DataAnalysis,
        &["data", "analysis", "viz", "chart", "visualization"],
    ),
    (
        Domain::Devops,
        &["docker", "deployment", "devops", "ci/cd", "infrastructure"],
    ),
    (
        Domain::AiMl,
        &["ai", "ml", "llm", "model", "prompt", "meta-prompting"],
    ),
    (Domain::Testing, &["test", "tdd", "testing", "quality"]),
];

/// Maps a document's title/tags text to exactly one [`Domain`].
pub struct DomainClassifier;

impl DomainClassifier {
    /// Classifies from parsed frontmatter (title and tags, concatenated and
    /// lowercased).
    #[must_use]
    pub fn classify(frontmatter: &Frontmatter) -> Domain {
        let combined = format!(
            "{} {}",
            frontmatter.title().unwrap_or_default(),
            frontmatter.tags().unwrap_or_default()
        );
        Self::classify_text(&combined)
    }

    /// Classifies free text: first table entry with any keyword appearing
    /// as a substring wins.
    #[must_use]
    pub fn classify_text(text: &str) -> Domain {
        let haystack = text.to_lowercase();
        for (domain, keywords) in DOMAIN_KEYWORDS {
            if keywords.iter().any(|kw| haystack.contains(kw)) {
                return *domain;
            }
        }
        Domain::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("N8N Workflow Automation Guide", Domain::Automation; "automation beats web")]
    #[test_case("FastAPI endpoint design", Domain::ApiDevelopment; "api")]
    #[test_case("NextJS frontend patterns", Domain::WebDevelopment; "web")]
    #[test_case("Postgres persistence layer", Domain::Database; "database")]
    #[test_case("Writing a README that lands", Domain::Documentation; "docs")]
    #[test_case("Consulting interview notes", Domain::BusinessProcess; "business")]
    #[test_case("Chart visualization tricks", Domain::DataAnalysis; "data")]
    #[test_case("Docker deployment checklist", Domain::Devops; "devops")]
    #[test_case("Meta-prompting with an LLM", Domain::AiMl; "ai ml")]
    #[test_case("TDD habits", Domain::Testing; "testing")]
    #[test_case("Gardening thread", Domain::General; "catch all")]
    fn test_priority_table(title: &str, expected: Domain) {
        assert_eq!(DomainClassifier::classify_text(title), expected);
    }

    #[test]
    fn test_never_absent() {
        assert_eq!(DomainClassifier::classify_text(""), Domain::General);
    }

    #[test]
    fn test_classify_uses_title_and_tags() {
        let mut fm = Frontmatter::new();
        fm.insert("title", "Session notes");
        fm.insert("tags", "zapier, crm");
        assert_eq!(DomainClassifier::classify(&fm), Domain::Automation);
    }

    #[test]
    fn test_overlapping_keywords_resolve_by_order() {
        // "workflow" (automation) and "api" both appear; automation is
        // higher priority.
        assert_eq!(
            DomainClassifier::classify_text("workflow api integration"),
            Domain::Automation
        );
    }
}
