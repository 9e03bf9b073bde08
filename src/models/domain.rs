//! Domain and quality tier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain label assigned to a document by the classifier.
///
/// Classification is priority-ordered keyword matching over the document's
/// title and tags; `General` is the catch-all when nothing matches. The
/// priority order lives in the classifier table, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    /// Workflow and process automation (Zapier, n8n, ...).
    Automation,
    /// API and backend development.
    ApiDevelopment,
    /// Frontend and web development.
    WebDevelopment,
    /// Databases and persistence.
    Database,
    /// Documentation and READMEs.
    Documentation,
    /// Business processes and consulting.
    BusinessProcess,
    /// Data analysis and visualization.
    DataAnalysis,
    /// Deployment, infrastructure, CI/CD.
    Devops,
    /// AI, ML, and prompt engineering.
    AiMl,
    /// Testing and quality assurance.
    Testing,
    /// Catch-all for everything else.
    #[default]
    General,
}

impl Domain {
    /// Returns all domain variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Automation,
            Self::ApiDevelopment,
            Self::WebDevelopment,
            Self::Database,
            Self::Documentation,
            Self::BusinessProcess,
            Self::DataAnalysis,
            Self::Devops,
            Self::AiMl,
            Self::Testing,
            Self::General,
        ]
    }

    /// Returns the domain as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Automation => "automation",
            Self::ApiDevelopment => "api-development",
            Self::WebDevelopment => "web-development",
            Self::Database => "database",
            Self::Documentation => "documentation",
            Self::BusinessProcess => "business-process",
            Self::DataAnalysis => "data-analysis",
            Self::Devops => "devops",
            Self::AiMl => "ai-ml",
            Self::Testing => "testing",
            Self::General => "general",
        }
    }

    /// Returns the output subdirectory for generated prompt documents.
    #[must_use]
    pub const fn prompt_subdir(&self) -> &'static str {
        match self {
            Self::Automation => "automation/workflow",
            Self::ApiDevelopment => "development/api",
            Self::WebDevelopment => "development/web",
            Self::Database => "development/database",
            Self::Documentation => "development/documentation",
            Self::BusinessProcess => "business/process-automation",
            Self::DataAnalysis => "development/data",
            Self::Devops => "development/devops",
            Self::AiMl => "ai-prompting/analysis",
            Self::Testing => "development/testing",
            Self::General => "meta-prompting",
        }
    }

    /// Parses a domain from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "automation" => Some(Self::Automation),
            "api-development" => Some(Self::ApiDevelopment),
            "web-development" => Some(Self::WebDevelopment),
            "database" => Some(Self::Database),
            "documentation" => Some(Self::Documentation),
            "business-process" => Some(Self::BusinessProcess),
            "data-analysis" => Some(Self::DataAnalysis),
            "devops" => Some(Self::Devops),
            "ai-ml" => Some(Self::AiMl),
            "testing" => Some(Self::Testing),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Heuristic completeness tier for a document's extracted content.
///
/// A pure function of the extracted record: same inputs, same tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityTier {
    /// Score >= 8: complete enough to materialize a standalone prompt.
    High,
    /// Score >= 4: contributes patterns to the library.
    Medium,
    /// Everything else: reference only.
    #[default]
    Low,
}

impl QualityTier {
    /// Returns the tier as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
