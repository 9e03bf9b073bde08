//! Cross-document pattern deduplication.
//!
//! After every record exists, all quick-win patterns are normalized into
//! comparison keys, grouped, and collapsed to one canonical row per key
//! with occurrence counts and source provenance. Grouping is first-seen
//! ordered so the tie-break never depends on hash-map iteration order.

mod categorizer;
mod key;

pub use categorizer::PatternCategorizer;
pub use key::PatternKey;

use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::models::{DeduplicatedPattern, InsightRecord};

/// One pattern instance awaiting canonical selection.
struct PatternInstance {
    pattern: String,
    category: Option<String>,
    original: String,
    source_file: String,
}

/// Collapses quick-win patterns across a corpus of records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deduplicator;

impl Deduplicator {
    /// Creates a deduplicator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Deduplicates every quick win across the given success records.
    ///
    /// Within a group the canonical instance is the first member carrying a
    /// category, falling back to the first member in encounter order. Rows
    /// are returned in descending occurrence order; ties keep
    /// first-seen-group order (stable sort).
    ///
    /// The conservation law holds: the sum of `occurrence_count` over the
    /// output equals the total quick-win count across the input records.
    #[instrument(skip_all, fields(records = records.len()))]
    #[must_use]
    pub fn deduplicate(&self, records: &[&InsightRecord]) -> Vec<DeduplicatedPattern> {
        // First-seen-ordered grouping: keys index into `groups`.
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<PatternInstance>)> = Vec::new();

        for record in records {
            for win in &record.quick_wins {
                let normalized = PatternKey::normalize(&win.pattern);
                let slot = *index.entry(normalized.clone()).or_insert_with(|| {
                    groups.push((normalized, Vec::new()));
                    groups.len() - 1
                });
                groups[slot].1.push(PatternInstance {
                    pattern: win.pattern.clone(),
                    category: win.category.clone(),
                    original: win.original.clone(),
                    source_file: record.filename.clone(),
                });
            }
        }

        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        debug!(unique = groups.len(), total, "patterns grouped");

        let mut patterns: Vec<DeduplicatedPattern> = groups
            .into_iter()
            .map(|(normalized, instances)| Self::collapse(&normalized, instances))
            .collect();

        // Stable sort: ties keep first-seen-group order.
        patterns.sort_by(|a, b| b.occurrence_count.cmp(&a.occurrence_count));
        patterns
    }

    fn collapse(normalized: &str, instances: Vec<PatternInstance>) -> DeduplicatedPattern {
        let canonical = instances
            .iter()
            .position(|i| i.category.is_some())
            .unwrap_or(0);
        let source_files = instances.iter().map(|i| i.source_file.clone()).collect();
        let occurrence_count = instances.len();
        let chosen = &instances[canonical];

        DeduplicatedPattern {
            pattern: chosen.pattern.clone(),
            category: chosen.category.clone(),
            original: chosen.original.clone(),
            key_hash: PatternKey::hash(normalized),
            occurrence_count,
            source_files,
        }
    }
}
