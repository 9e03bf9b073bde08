//! Property-based tests for the dedup and classification invariants.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Pattern-key normalization is idempotent and case-insensitive
//! - Key hashes are deterministic fixed-width hex
//! - Deduplication conserves the total quick-win count
//! - Classification always yields exactly one label

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;

use promptmine::dedup::{Deduplicator, PatternKey};
use promptmine::extract::DomainClassifier;
use promptmine::models::{Domain, InsightRecord, QualityTier, QuickWin};

fn record_with_patterns(filename: &str, patterns: &[String]) -> InsightRecord {
    InsightRecord {
        file_id: filename.trim_end_matches(".md").to_string(),
        filename: filename.to_string(),
        title: None,
        date: None,
        tags: None,
        thread_id: None,
        domain: Domain::General,
        quality: QualityTier::Low,
        super_prompt: None,
        quick_wins: patterns
            .iter()
            .map(|p| QuickWin::new(p.clone(), format!("- {p}")))
            .collect(),
        lessons: vec![],
        word_count: 0,
        success: true,
    }
}

proptest! {
    /// Property: normalization is idempotent on quote-free input (quote
    /// stripping only applies to the raw pattern ends).
    #[test]
    fn prop_normalize_idempotent(s in "[a-zA-Z0-9 {}_.-]{0,80}") {
        let once = PatternKey::normalize(&s);
        let twice = PatternKey::normalize(&once);
        prop_assert_eq!(once, twice);
    }

    /// Property: normalization is case-insensitive for ASCII input.
    #[test]
    fn prop_normalize_case_insensitive(s in "[ -~]{0,80}") {
        prop_assert_eq!(
            PatternKey::normalize(&s),
            PatternKey::normalize(&s.to_uppercase())
        );
    }

    /// Property: placeholder spans never survive normalization.
    #[test]
    fn prop_placeholders_canonicalized(inner in "[A-Z_]{1,12}", prefix in "[a-z ]{0,20}") {
        let text = format!("{prefix} {{{inner}}} tail");
        let normalized = PatternKey::normalize(&text);
        prop_assert!(
            normalized.contains("{var}"),
            "normalized output should contain the canonical placeholder, got: {}",
            normalized
        );
        prop_assert!(
            !normalized.contains(&format!("{{{}}}", inner.to_lowercase())) || inner.to_lowercase() == "var",
            "original placeholder survived normalization: {}",
            normalized
        );
    }

    /// Property: key hashes are 16 lowercase hex chars and deterministic.
    #[test]
    fn prop_hash_shape(s in "[ -~]{0,80}") {
        let hash = PatternKey::hash(&s);
        prop_assert_eq!(hash.len(), 16);
        prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        prop_assert_eq!(hash, PatternKey::hash(&s));
    }

    /// Property: occurrence counts conserve the total quick-win count.
    #[test]
    fn prop_dedup_conserves_total(
        first in prop::collection::vec("[a-zA-Z {}\"]{1,30}", 0..12),
        second in prop::collection::vec("[a-zA-Z {}\"]{1,30}", 0..12),
    ) {
        let a = record_with_patterns("a.md", &first);
        let b = record_with_patterns("b.md", &second);
        let total = first.len() + second.len();

        let patterns = Deduplicator::new().deduplicate(&[&a, &b]);
        let sum: usize = patterns.iter().map(|p| p.occurrence_count).sum();
        prop_assert_eq!(sum, total);

        let sources: usize = patterns.iter().map(|p| p.source_files.len()).sum();
        prop_assert_eq!(sources, total);
    }

    /// Property: dedup output is sorted by descending occurrence count.
    #[test]
    fn prop_dedup_sorted_descending(
        patterns in prop::collection::vec("[a-z ]{1,20}", 0..20),
    ) {
        let record = record_with_patterns("a.md", &patterns);
        let deduped = Deduplicator::new().deduplicate(&[&record]);
        prop_assert!(
            deduped.windows(2).all(|w| w[0].occurrence_count >= w[1].occurrence_count)
        );
    }

    /// Property: classification is total and case-insensitive.
    #[test]
    fn prop_classifier_total_and_case_insensitive(s in "[ -~]{0,60}") {
        let lower = DomainClassifier::classify_text(&s.to_lowercase());
        let upper = DomainClassifier::classify_text(&s.to_uppercase());
        prop_assert_eq!(lower, upper);
        prop_assert!(Domain::all().contains(&lower));
    }
}
