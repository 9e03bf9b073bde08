//! Super-prompt structure recovery.
//!
//! Given the located super-prompt section, recovers an internal schema from
//! unstructured text: role, task, input list, process steps, output spec,
//! and quality checks. Each field is found by a labeled-field matcher and is
//! independently optional; best-effort partial recovery is the whole point.
//!
//! When the section carries a fenced code block, the block's inner text is
//! the canonical prompt; otherwise the whole section text is used.

use regex::Regex;
use std::sync::LazyLock;

use super::fenced_block;
use crate::models::StructuredPrompt;

/// One labeled-field matcher: where the value starts and where it stops.
///
/// Kept as a declarative pair so the fallback label chains stay auditable.
struct FieldSpec {
    /// Matches the field label (alternation of accepted spellings), up to
    /// and including the colon (and trailing newline for block fields).
    label: &'static str,
    /// Matches the first position after the value: the next recognized
    /// all-caps label or a blank-line boundary.
    boundary: &'static str,
}

const ROLE: FieldSpec = FieldSpec {
    label: r"(?:ROLE|Role):",
    boundary: r"\n\n|\n[A-Z]+:",
};

const TASK: FieldSpec = FieldSpec {
    label: r"(?:TASK|Task|Objective|OBJECTIVE):",
    boundary: r"\n\n|\n[A-Z]+:",
};

const INPUTS: FieldSpec = FieldSpec {
    label: r"(?:INPUTS|Inputs|INPUT):[ \t]*\r?\n",
    boundary: r"\n\n[A-Z]+:|\n[A-Z]+ [A-Z]+:",
};

const PROCESS: FieldSpec = FieldSpec {
    label: r"(?:PROCESS|Process|CHECKLIST|Checklist)[^\n]*?:[ \t]*\r?\n",
    boundary: r"\n\n[A-Z]+:|\n[A-Z]+ [A-Z]+:",
};

const OUTPUT: FieldSpec = FieldSpec {
    label: r"(?:OUTPUT|Output)[^\n]*?:[ \t]*\r?\n",
    boundary: r"\n\n[A-Z]+:|\n[A-Z]+ [A-Z]+:",
};

const QUALITY: FieldSpec = FieldSpec {
    label: r"(?:QUALITY|Quality)[^\n]*?:[ \t]*\r?\n",
    boundary: r"\n\n",
};

struct CompiledField {
    label: Regex,
    boundary: Regex,
}

impl CompiledField {
    fn compile(spec: &FieldSpec) -> Self {
        Self {
            label: Regex::new(spec.label).unwrap_or_else(|_| unreachable!()),
            boundary: Regex::new(spec.boundary).unwrap_or_else(|_| unreachable!()),
        }
    }

    /// Captures the trimmed field value, or `None` when the label is absent
    /// or the value is empty. Only the first label occurrence is used.
    fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let label = self.label.find(text)?;
        let tail = &text[label.end()..];
        let end = self.boundary.find(tail).map_or(tail.len(), |b| b.start());
        let value = tail[..end].trim();
        (!value.is_empty()).then_some(value)
    }
}

static ROLE_FIELD: LazyLock<CompiledField> = LazyLock::new(|| CompiledField::compile(&ROLE));
static TASK_FIELD: LazyLock<CompiledField> = LazyLock::new(|| CompiledField::compile(&TASK));
static INPUTS_FIELD: LazyLock<CompiledField> = LazyLock::new(|| CompiledField::compile(&INPUTS));
static PROCESS_FIELD: LazyLock<CompiledField> = LazyLock::new(|| CompiledField::compile(&PROCESS));
static OUTPUT_FIELD: LazyLock<CompiledField> = LazyLock::new(|| CompiledField::compile(&OUTPUT));
static QUALITY_FIELD: LazyLock<CompiledField> = LazyLock::new(|| CompiledField::compile(&QUALITY));

static NUMBERED_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").unwrap_or_else(|_| unreachable!()));
static NUMBERED_DOT_OR_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]").unwrap_or_else(|_| unreachable!()));

/// Recovers [`StructuredPrompt`] schemas from super-prompt section text.
pub struct StructureExtractor;

impl StructureExtractor {
    /// Extracts the structured prompt from a located super-prompt section.
    ///
    /// `full_text` is always populated; the five labeled fields are each
    /// independently optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promptmine::extract::StructureExtractor;
    ///
    /// let section = "ROLE: Senior analyst\n\nTASK: Audit the workflow\n";
    /// let prompt = StructureExtractor::extract(section);
    /// assert_eq!(prompt.role.as_deref(), Some("Senior analyst"));
    /// assert_eq!(prompt.task.as_deref(), Some("Audit the workflow"));
    /// ```
    #[must_use]
    pub fn extract(section: &str) -> StructuredPrompt {
        let prompt_text = fenced_block(section).unwrap_or(section).trim();

        StructuredPrompt {
            full_text: prompt_text.to_string(),
            role: ROLE_FIELD.capture(prompt_text).map(str::to_string),
            task: TASK_FIELD.capture(prompt_text).map(str::to_string),
            inputs: Self::list_lines(INPUTS_FIELD.capture(prompt_text), &NUMBERED_DOT),
            process: Self::list_lines(PROCESS_FIELD.capture(prompt_text), &NUMBERED_DOT_OR_PAREN),
            output: OUTPUT_FIELD.capture(prompt_text).map(str::to_string),
            quality_checks: Self::bullet_lines(QUALITY_FIELD.capture(prompt_text)),
        }
    }

    /// Splits a captured block into list lines recognized by a hyphen,
    /// bullet, or numeral prefix. The leading marker is retained.
    fn list_lines(block: Option<&str>, numbered: &Regex) -> Vec<String> {
        let Some(block) = block else {
            return Vec::new();
        };
        block
            .lines()
            .map(str::trim)
            .filter(|line| {
                line.starts_with('-') || line.starts_with('\u{2022}') || numbered.is_match(line)
            })
            .map(str::to_string)
            .collect()
    }

    /// Like [`Self::list_lines`] but without the numeral-prefix form.
    fn bullet_lines(block: Option<&str>) -> Vec<String> {
        let Some(block) = block else {
            return Vec::new();
        };
        block
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with('-') || line.starts_with('\u{2022}'))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_SECTION: &str = "\
Some preamble explaining the prompt.

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
3) Add error notification path

OUTPUT FORMAT:
A numbered implementation plan in Markdown.

QUALITY CHECKS:
- every step names its Zap action
- includes a failure path
```
";

    #[test]
    fn test_fenced_block_is_canonical_text() {
        let prompt = StructureExtractor::extract(FULL_SECTION);
        assert!(prompt.full_text.starts_with("ROLE: Senior automation"));
        assert!(prompt.full_text.ends_with("includes a failure path"));
        assert!(!prompt.full_text.contains("preamble"));
    }

    #[test]
    fn test_all_fields_recovered() {
        let prompt = StructureExtractor::extract(FULL_SECTION);
        assert_eq!(prompt.role.as_deref(), Some("Senior automation consultant"));
        assert_eq!(
            prompt.task.as_deref(),
            Some("Design a Zapier workflow for lead intake")
        );
        assert_eq!(prompt.inputs.len(), 3);
        assert_eq!(prompt.inputs[0], "- {CRM_NAME} target system");
        assert_eq!(prompt.process.len(), 3);
        assert_eq!(prompt.process[2], "3) Add error notification path");
        assert_eq!(
            prompt.output.as_deref(),
            Some("A numbered implementation plan in Markdown.")
        );
        assert_eq!(prompt.quality_checks.len(), 2);
    }

    #[test]
    fn test_without_code_block_uses_section_text() {
        let section = "ROLE: Reviewer\n\nTASK: Check the docs\n";
        let prompt = StructureExtractor::extract(section);
        assert_eq!(prompt.full_text, section.trim());
        assert_eq!(prompt.role.as_deref(), Some("Reviewer"));
    }

    #[test]
    fn test_fields_are_independent() {
        let section = "TASK: Only a task here\n";
        let prompt = StructureExtractor::extract(section);
        assert_eq!(prompt.role, None);
        assert_eq!(prompt.task.as_deref(), Some("Only a task here"));
        assert!(prompt.inputs.is_empty());
        assert!(prompt.process.is_empty());
        assert_eq!(prompt.output, None);
        assert!(prompt.quality_checks.is_empty());
    }

    #[test]
    fn test_objective_label_accepted_for_task() {
        let prompt = StructureExtractor::extract("Objective: Ship the feature\n");
        assert_eq!(prompt.task.as_deref(), Some("Ship the feature"));
    }

    #[test]
    fn test_checklist_label_accepted_for_process() {
        let section = "CHECKLIST:\n- step one\n- step two\n";
        let prompt = StructureExtractor::extract(section);
        assert_eq!(prompt.process, vec!["- step one", "- step two"]);
    }

    #[test]
    fn test_role_stops_at_next_label() {
        let section = "ROLE: Analyst\nTASK: Review\n";
        let prompt = StructureExtractor::extract(section);
        assert_eq!(prompt.role.as_deref(), Some("Analyst"));
        assert_eq!(prompt.task.as_deref(), Some("Review"));
    }

    #[test]
    fn test_non_list_lines_in_block_dropped() {
        let section = "INPUTS:\nfree text explanation\n- actual input\n";
        let prompt = StructureExtractor::extract(section);
        assert_eq!(prompt.inputs, vec!["- actual input"]);
    }

    #[test]
    fn test_empty_section_yields_bare_prompt() {
        let prompt = StructureExtractor::extract("Just prose, no labels.");
        assert_eq!(prompt.full_text, "Just prose, no labels.");
        assert!(!prompt.has_role_and_task());
    }
}
