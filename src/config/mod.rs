//! Configuration management.

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration for promptmine.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    /// Directory holding the insight documents to mine.
    pub insights_dir: PathBuf,
    /// Path of the JSON extraction report.
    pub report_file: PathBuf,
    /// Root directory for generated prompt documents.
    pub arsenal_dir: PathBuf,
    /// Patterns-library document updated during generation.
    pub patterns_file: PathBuf,
    /// How many deduplicated patterns the library section shows.
    pub top_patterns: usize,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// `[paths]` table.
    pub paths: Option<ConfigFilePaths>,
    /// Top-pattern limit.
    pub top_patterns: Option<usize>,
}

/// Paths section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFilePaths {
    /// Insights directory.
    pub insights_dir: Option<String>,
    /// Report file.
    pub report_file: Option<String>,
    /// Arsenal output directory.
    pub arsenal_dir: Option<String>,
    /// Patterns library file.
    pub patterns_file: Option<String>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            insights_dir: PathBuf::from("insights"),
            report_file: PathBuf::from("all-extracted-data.json"),
            arsenal_dir: PathBuf::from("prompt-arsenal"),
            patterns_file: PathBuf::from("prompt-patterns-library.md"),
            top_patterns: 20,
        }
    }
}

impl MinerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &std::path::Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: e.to_string(),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following in order:
    /// 1. `PROMPTMINE_CONFIG` environment variable
    /// 2. Platform-specific config dir (`~/.config/promptmine/` on Linux)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        if let Ok(path) = std::env::var("PROMPTMINE_CONFIG") {
            if let Ok(config) = Self::load_from_file(std::path::Path::new(&path)) {
                return config;
            }
        }

        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let platform_config = base_dirs.config_dir().join("promptmine").join("config.toml");
        if platform_config.exists() {
            if let Ok(config) = Self::load_from_file(&platform_config) {
                return config;
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `MinerConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(paths) = file.paths {
            if let Some(dir) = paths.insights_dir {
                config.insights_dir = PathBuf::from(dir);
            }
            if let Some(path) = paths.report_file {
                config.report_file = PathBuf::from(path);
            }
            if let Some(dir) = paths.arsenal_dir {
                config.arsenal_dir = PathBuf::from(dir);
            }
            if let Some(path) = paths.patterns_file {
                config.patterns_file = PathBuf::from(path);
            }
        }
        if let Some(top) = file.top_patterns {
            config.top_patterns = top;
        }

        config
    }

    /// Sets the insights directory.
    #[must_use]
    pub fn with_insights_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.insights_dir = path.into();
        self
    }

    /// Sets the report file path.
    #[must_use]
    pub fn with_report_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_file = path.into();
        self
    }
}
