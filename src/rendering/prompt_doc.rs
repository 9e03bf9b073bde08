//! Standalone prompt-document rendering.
//!
//! Each HIGH-quality record that carries a structured prompt becomes one
//! Markdown document: generated frontmatter (id, tags, variables mined from
//! the input lines), the full prompt in a fenced block under a heading the
//! section locator recognizes, a lesson preview, the recovered structure,
//! and a source footer. Re-running extraction over a rendered document
//! reproduces the structured prompt.

use regex::Regex;
use std::fmt::Write;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::models::InsightRecord;
use crate::{Error, Result};

/// Maximum variables declared in generated frontmatter.
const MAX_VARIABLES: usize = 5;

/// Maximum input/process lines re-emitted in the structure section.
const MAX_STRUCTURE_LINES: usize = 7;

/// Maximum lessons in the "When to Use" preview.
const MAX_LESSON_PREVIEW: usize = 5;

/// Maximum slug length in characters.
const MAX_SLUG_CHARS: usize = 50;

/// Matches `{VAR}` placeholders in input lines.
static VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Z_]+)\}").unwrap_or_else(|_| unreachable!()));

/// Characters removed from titles before slugging.
static SLUG_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap_or_else(|_| unreachable!()));

static SLUG_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap_or_else(|_| unreachable!()));

static SLUG_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").unwrap_or_else(|_| unreachable!()));

/// A rendered prompt document: where it belongs and what it says.
///
/// `relative_path` is relative to the prompt-collection root; the domain
/// picks the subdirectory and the title picks the file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDoc {
    /// Path under the collection root, `<domain subdir>/<slug>.md`.
    pub relative_path: PathBuf,
    /// Complete document text.
    pub content: String,
}

/// A frontmatter variable mined from an input line.
struct PromptVariable {
    name: String,
    required: bool,
    description: String,
}

/// Renders [`InsightRecord`]s into standalone prompt documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptDocRenderer;

impl PromptDocRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders one record into a prompt document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the record has no structured
    /// prompt; there is nothing to render without one.
    pub fn render(&self, record: &InsightRecord) -> Result<PromptDoc> {
        let prompt = record.super_prompt.as_ref().ok_or_else(|| {
            Error::InvalidInput(format!("record '{}' has no super-prompt", record.filename))
        })?;

        let short_id: String = record.file_id.chars().take(8).collect();
        let title = record.title.as_deref().unwrap_or(&record.file_id);
        let date = record.date.as_deref().unwrap_or("unknown");
        let variables = mine_variables(&prompt.inputs);

        let mut slug = slugify(title);
        if slug.is_empty() {
            slug = short_id.clone();
        }
        let relative_path =
            PathBuf::from(record.domain.prompt_subdir()).join(format!("{slug}.md"));

        let mut out = String::new();
        let _ = writeln!(out, "---");
        let _ = writeln!(out, "id: prm.{short_id}");
        let _ = writeln!(out, "type: prompt");
        let _ = writeln!(out, "title: {title}");
        let _ = writeln!(out, "tags: [{}]", tag_list(record.tags.as_deref()).join(", "));
        let _ = writeln!(out, "role: user");
        let _ = writeln!(
            out,
            "summary: Extracted from conversation analysis - {title}"
        );
        if variables.is_empty() {
            let _ = writeln!(out, "vars: []");
        } else {
            let _ = writeln!(out, "vars:");
            for var in &variables {
                let _ = writeln!(
                    out,
                    "  - {{ name: {}, required: {}, description: \"{}\" }}",
                    var.name, var.required, var.description
                );
            }
        }
        let _ = writeln!(out, "version: 1");
        let _ = writeln!(out, "source_insights: {}", record.filename);
        let _ = writeln!(out, "---");
        let _ = writeln!(out);
        let _ = writeln!(out, "# {title}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Extracted from conversation analysis on {date}.");
        let _ = writeln!(out);

        // This heading spelling is one the section locator matches, so a
        // rendered document survives re-extraction with the same prompt.
        let _ = writeln!(out, "## Super-Prompt (Reusable)");
        let _ = writeln!(out);
        let _ = writeln!(out, "```markdown");
        let _ = writeln!(out, "{}", prompt.full_text);
        let _ = writeln!(out, "```");
        let _ = writeln!(out);

        if !record.lessons.is_empty() {
            let _ = writeln!(out, "## When to Use");
            let _ = writeln!(out);
            for lesson in record.lessons.iter().take(MAX_LESSON_PREVIEW) {
                let _ = writeln!(out, "- {lesson}");
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "## Prompt Structure");
        let _ = writeln!(out);
        if let Some(role) = &prompt.role {
            let _ = writeln!(out, "**Role:** {role}");
            let _ = writeln!(out);
        }
        if let Some(task) = &prompt.task {
            let _ = writeln!(out, "**Task:** {task}");
            let _ = writeln!(out);
        }
        write_line_block(&mut out, "Inputs", &prompt.inputs, MAX_STRUCTURE_LINES);
        write_line_block(&mut out, "Process", &prompt.process, MAX_STRUCTURE_LINES);
        write_line_block(
            &mut out,
            "Quality Checks",
            &prompt.quality_checks,
            usize::MAX,
        );

        let _ = writeln!(out, "## Source");
        let _ = writeln!(out);
        let _ = writeln!(out, "- File: {}", record.filename);
        let _ = writeln!(out, "- Date: {date}");
        let _ = writeln!(out, "- Domain: {}", record.domain.as_str());
        let _ = writeln!(out, "- Quality: {}", record.quality.as_str());

        Ok(PromptDoc {
            relative_path,
            content: out,
        })
    }
}

fn write_line_block(out: &mut String, label: &str, lines: &[String], limit: usize) {
    if lines.is_empty() {
        return;
    }
    let _ = writeln!(out, "**{label}:**");
    for line in lines.iter().take(limit) {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out);
}

/// Mines `{VAR}` placeholders out of input lines, first occurrence per name.
fn mine_variables(inputs: &[String]) -> Vec<PromptVariable> {
    let mut variables: Vec<PromptVariable> = Vec::new();
    for input in inputs {
        for caps in VAR_PATTERN.captures_iter(input) {
            let name = caps[1].to_lowercase();
            if variables.iter().any(|v| v.name == name) {
                continue;
            }
            variables.push(PromptVariable {
                name,
                required: !input.to_lowercase().contains("optional"),
                description: format!(
                    "Extracted from: {}",
                    input.chars().take(50).collect::<String>()
                ),
            });
        }
    }
    variables.truncate(MAX_VARIABLES);
    variables
}

/// Splits a raw frontmatter tags value into at most five tag strings.
fn tag_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .take(5)
        .map(str::to_string)
        .collect()
}

/// Builds a file-name slug from a title: lowercased, punctuation stripped,
/// whitespace hyphenated, capped at a hyphen boundary.
fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = SLUG_STRIP.replace_all(&lowered, "");
    let hyphenated = SLUG_WHITESPACE.replace_all(stripped.trim(), "-");
    let collapsed = SLUG_DASHES.replace_all(&hyphenated, "-");
    let slug = collapsed.trim_matches('-');

    if slug.chars().count() <= MAX_SLUG_CHARS {
        return slug.to_string();
    }
    let head: String = slug.chars().take(MAX_SLUG_CHARS).collect();
    match head.rfind('-') {
        Some(cut) => head[..cut].to_string(),
        None => head,
    }
}
