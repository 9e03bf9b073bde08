//! Source document and frontmatter types.

use std::collections::HashMap;

/// One raw document supplied by the input collaborator.
///
/// A document has a stable identity (typically the file stem) and its raw
/// text. It is read once and never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Stable identity for the document (file stem or external id).
    pub identity: String,
    /// File name the document was loaded from, when known.
    pub filename: String,
    /// The raw document text.
    pub text: String,
}

impl SourceDocument {
    /// Creates a document from an identity and raw text.
    ///
    /// The filename defaults to `<identity>.md`.
    #[must_use]
    pub fn new(identity: impl Into<String>, text: impl Into<String>) -> Self {
        let identity = identity.into();
        let filename = format!("{identity}.md");
        Self {
            identity,
            filename,
            text: text.into(),
        }
    }

    /// Creates a document with an explicit filename.
    #[must_use]
    pub fn with_filename(
        identity: impl Into<String>,
        filename: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            filename: filename.into(),
            text: text.into(),
        }
    }

    /// Returns the whitespace-delimited word count of the raw text.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Flat key/value metadata parsed from a document's header block.
///
/// Keys are unique (last occurrence wins); a document without a header block
/// yields an empty mapping, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: HashMap<String, String>,
}

impl Frontmatter {
    /// Creates an empty frontmatter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, overwriting any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if no entries were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The document title, if declared.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    /// The document date, if declared.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    /// The raw tags value, if declared.
    #[must_use]
    pub fn tags(&self) -> Option<&str> {
        self.get("tags")
    }

    /// The thread fingerprint, if declared.
    ///
    /// When present this becomes the record identity in preference to the
    /// file stem.
    #[must_use]
    pub fn thread_fingerprint(&self) -> Option<&str> {
        self.get("thread_fingerprint")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        let doc = SourceDocument::new("a", "one two  three\nfour");
        assert_eq!(doc.word_count(), 4);
    }

    #[test]
    fn test_default_filename() {
        let doc = SourceDocument::new("zapier-thread", "text");
        assert_eq!(doc.filename, "zapier-thread.md");
    }

    #[test]
    fn test_frontmatter_overwrite() {
        let mut fm = Frontmatter::new();
        fm.insert("title", "First");
        fm.insert("title", "Second");
        assert_eq!(fm.title(), Some("Second"));
        assert_eq!(fm.len(), 1);
    }
}
