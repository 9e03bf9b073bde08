//! Corpus input collaborator.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::SourceDocument;
use crate::{Error, Result};

/// Supplies `(identity, raw text)` pairs, one per document.
///
/// The pipeline assumes nothing about ordering beyond "each document shows
/// up once"; a source that cannot be read at all is a corpus-level failure
/// and aborts the run before any extraction starts.
pub trait CorpusSource {
    /// Loads every document in the corpus.
    ///
    /// # Errors
    ///
    /// Returns an error when the corpus cannot be acquired (unreadable
    /// directory or file). Acquisition failures are fatal by design; no
    /// partial run is attempted.
    fn load(&self) -> Result<Vec<SourceDocument>>;
}

/// Reads a directory of `.md` files, sorted by file name.
///
/// The file stem is the document identity. File content is decoded with
/// lossy UTF-8 so encoding problems degrade a document instead of aborting
/// the run.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Creates a source over a directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory being read.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_document(path: &Path) -> Result<SourceDocument> {
        let bytes = fs::read(path).map_err(|e| Error::OperationFailed {
            operation: "read_document".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        let identity = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(SourceDocument::with_filename(identity, filename, text))
    }
}

impl CorpusSource for DirectorySource {
    fn load(&self) -> Result<Vec<SourceDocument>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| Error::OperationFailed {
            operation: "read_corpus".to_string(),
            cause: format!("{}: {e}", self.dir.display()),
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == "md")
            })
            .collect();
        paths.sort();

        debug!(dir = %self.dir.display(), count = paths.len(), "corpus listed");

        paths.iter().map(|path| Self::read_document(path)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_loads_sorted_markdown_files() {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in [("b.md", "second"), ("a.md", "first"), ("notes.txt", "skip")] {
            let mut f = File::create(dir.path().join(name)).unwrap();
            f.write_all(body.as_bytes()).unwrap();
        }

        let docs = DirectorySource::new(dir.path()).load().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].identity, "a");
        assert_eq!(docs[0].text, "first");
        assert_eq!(docs[1].filename, "b.md");
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let source = DirectorySource::new("/nonexistent/promptmine-corpus");
        let err = source.load().unwrap_err();
        assert!(err.to_string().contains("read_corpus"));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = File::create(dir.path().join("bad.md")).unwrap();
        f.write_all(&[0x23, 0x20, 0xff, 0xfe, 0x0a]).unwrap();

        let docs = DirectorySource::new(dir.path()).load().unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs[0].text.starts_with("# "));
    }
}
