//! External collaborators: corpus input and report output.
//!
//! The pipeline itself never touches the filesystem; these adapters supply
//! `(identity, raw text)` pairs and persist the aggregate report. Both sit
//! behind traits so tests and alternative frontends can substitute their
//! own.

mod sink;
mod source;

pub use sink::{JsonReportSink, ReportSink};
pub use source::{CorpusSource, DirectorySource};
