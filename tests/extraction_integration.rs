//! End-to-end extraction tests.
//!
//! Runs the full pipeline over a temporary corpus directory and verifies:
//! - report counters and tier/domain grouping
//! - per-document failure isolation
//! - rendered prompt documents survive re-extraction unchanged

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;
use tempfile::TempDir;

use promptmine::rendering::PromptDocRenderer;
use promptmine::{
    CorpusSource, DirectorySource, Domain, ExtractionPipeline, ExtractionReport, JsonReportSink,
    QualityTier, ReportSink, SourceDocument,
};

const RICH_DOC: &str = r#"---
title: Zapier Lead Intake Automation
date: 2025-10-18
tags: [zapier, automation, crm]
thread_fingerprint: a1b2c3d4e5f6
---

# Conversation Analysis

## Section 4: Super-Prompt

```markdown
ROLE: Senior automation consultant
TASK: Design a Zapier workflow for lead intake

INPUTS:
- {CRM_NAME} target system
- {LEAD_SOURCE} form or webhook
- volume estimate

PROCESS:
1. Map the trigger event
2. Normalize field names
3. Add an error notification path

OUTPUT FORMAT:
A numbered implementation plan in Markdown.

QUALITY CHECKS:
- every step names its Zap action
- includes a failure path
```

## Section 9: Quick Wins Library

- Clarify → Ask which CRM before mapping fields
- Constrain → Respond as a markdown table
- "Score the draft 1-10 before sending"
- Export: Save the mapping as CSV
- Verify each webhook with a test payload

## Section 8: Lessons Learned

- Start from the trigger event
- Name every Zap step
- Test with a real payload early
"#;

const SPARSE_DOC: &str = "---\ntitle: Quick Notes on SQL Joins\n---\n\nJust prose, no sections.\n";

/// Writes a corpus into a fresh temp directory.
fn write_corpus(docs: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, body) in docs {
        fs::write(dir.path().join(name), body).expect("Failed to write corpus file");
    }
    dir
}

#[test]
fn test_end_to_end_extraction_and_report() {
    let corpus = write_corpus(&[("zapier-thread.md", RICH_DOC), ("sql-notes.md", SPARSE_DOC)]);
    let documents = DirectorySource::new(corpus.path()).load().unwrap();
    assert_eq!(documents.len(), 2);

    let entries = ExtractionPipeline::new().run(&documents);
    let report = ExtractionReport::from_entries(entries);

    assert_eq!(report.summary.total_files, 2);
    assert_eq!(report.summary.successful, 2);
    assert_eq!(report.summary.with_super_prompts, 1);
    assert_eq!(report.summary.with_quick_wins, 1);
    assert_eq!(report.summary.total_quick_wins, 5);
    assert_eq!(report.summary.total_lessons, 3);
    assert_eq!(report.summary.high_quality_count, 1);
    assert_eq!(report.summary.low_quality_count, 1);

    let rich = report
        .successful_records()
        .find(|r| r.filename == "zapier-thread.md")
        .unwrap();
    assert_eq!(rich.file_id, "a1b2c3d4e5f6");
    assert_eq!(rich.title.as_deref(), Some("Zapier Lead Intake Automation"));
    assert_eq!(rich.domain, Domain::Automation);
    assert_eq!(rich.quality, QualityTier::High);

    let prompt = rich.super_prompt.as_ref().unwrap();
    assert_eq!(prompt.role.as_deref(), Some("Senior automation consultant"));
    assert_eq!(prompt.inputs.len(), 3);
    assert_eq!(prompt.process.len(), 3);

    // Quick wins keep their categories and document order.
    assert_eq!(rich.quick_wins[0].category.as_deref(), Some("Clarify"));
    assert_eq!(
        rich.quick_wins[0].pattern,
        "Ask which CRM before mapping fields"
    );
    assert_eq!(rich.quick_wins[3].category.as_deref(), Some("Export"));
    assert_eq!(rich.quick_wins[4].category, None);

    assert_eq!(report.quality_tiers.high, vec!["zapier-thread.md"]);
    assert_eq!(report.domains.get("automation"), Some(&1));
    assert_eq!(report.domains.get("database"), Some(&1));
}

#[test]
fn test_failure_is_isolated_to_its_document() {
    let corpus = write_corpus(&[
        ("a-good.md", RICH_DOC),
        ("b-empty.md", "   \n\n  "),
        ("c-good.md", SPARSE_DOC),
    ]);
    let documents = DirectorySource::new(corpus.path()).load().unwrap();
    let entries = ExtractionPipeline::new().run(&documents);
    let report = ExtractionReport::from_entries(entries);

    assert_eq!(report.summary.total_files, 3);
    assert_eq!(report.summary.successful, 2);

    let failure = report
        .files
        .iter()
        .find(|e| !e.is_success())
        .expect("expected one failure entry");
    assert_eq!(failure.filename(), "b-empty.md");

    // The failure does not affect neighbors processed after it.
    assert!(
        report
            .successful_records()
            .any(|r| r.filename == "c-good.md")
    );
}

#[test]
fn test_report_survives_sink_roundtrip() {
    let corpus = write_corpus(&[("zapier-thread.md", RICH_DOC)]);
    let documents = DirectorySource::new(corpus.path()).load().unwrap();
    let report = ExtractionReport::from_entries(ExtractionPipeline::new().run(&documents));

    let out = TempDir::new().unwrap();
    let path = out.path().join("report.json");
    JsonReportSink::new(&path).write(&report).unwrap();
    let loaded = JsonReportSink::load(&path).unwrap();

    assert_eq!(loaded.summary, report.summary);
    assert_eq!(loaded.files, report.files);
    assert_eq!(loaded.domains, report.domains);
}

#[test]
fn test_rendered_prompt_doc_survives_reextraction() {
    let pipeline = ExtractionPipeline::new();
    let entry = pipeline.process(&SourceDocument::new("zapier-thread", RICH_DOC));
    let record = entry.as_success().expect("extraction should succeed");
    let original = record.super_prompt.clone().unwrap();

    let doc = PromptDocRenderer::new().render(record).unwrap();

    let reentry = pipeline.process(&SourceDocument::new("rendered", &doc.content));
    let rerecord = reentry.as_success().expect("re-extraction should succeed");
    let recovered = rerecord.super_prompt.clone().expect("prompt should survive");

    assert_eq!(recovered, original);
    assert_eq!(
        rerecord.title.as_deref(),
        Some("Zapier Lead Intake Automation")
    );
}
