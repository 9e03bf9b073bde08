//! Markdown output rendering.
//!
//! Two renderers turn pipeline output back into Markdown: one builds a
//! standalone prompt document per high-quality record, the other builds a
//! top-patterns section for an existing pattern-library document. Both
//! produce strings; writing them anywhere is the caller's job.

mod patterns_library;
mod prompt_doc;

pub use patterns_library::PatternsLibraryRenderer;
pub use prompt_doc::{PromptDoc, PromptDocRenderer};
