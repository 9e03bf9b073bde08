//! Frontmatter parsing.
//!
//! Extracts the flat key/value header block from the top of a document:
//! ```text
//! ---
//! title: Zapier MCP Tools Thread
//! date: '2025-10-12'
//! tags: zapier, automation
//! ---
//! The document body here.
//! ```
//!
//! A document without a header block, or with an unclosed one, yields an
//! empty mapping. Malformed frontmatter is never an error.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::Frontmatter;

/// Matches a delimited header block anchored at the very start of the
/// document: opening `---` line, block content, closing `---`.
static BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---").unwrap_or_else(|_| unreachable!())
});

/// Parser for the key/value header block at the start of a document.
pub struct FrontmatterParser;

impl FrontmatterParser {
    /// Parses the header block from raw document text.
    ///
    /// Each `key: value` line inside the block becomes one entry; the value
    /// is trimmed and stripped of surrounding single/double quotes. Lines
    /// without a `:` separator are ignored. The last occurrence of a
    /// duplicate key wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promptmine::extract::FrontmatterParser;
    ///
    /// let text = "---\ntitle: 'My Thread'\n---\nBody";
    /// let fm = FrontmatterParser::parse(text);
    /// assert_eq!(fm.title(), Some("My Thread"));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Frontmatter {
        let mut frontmatter = Frontmatter::new();

        let Some(captures) = BLOCK_PATTERN.captures(text) else {
            return frontmatter;
        };
        let Some(block) = captures.get(1) else {
            return frontmatter;
        };

        for line in block.as_str().lines() {
            if let Some((key, value)) = line.split_once(':') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                let value = value.trim().trim_matches(['\'', '"']);
                frontmatter.insert(key, value);
            }
        }

        frontmatter
    }
}
