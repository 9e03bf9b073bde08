//! Binary entry point for promptmine.
//!
//! This binary provides the CLI interface for the insight mining pipeline.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow unnecessary_wraps for consistent command function signatures
#![allow(clippy::unnecessary_wraps)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use promptmine::config::MinerConfig;
use promptmine::rendering::{PatternsLibraryRenderer, PromptDocRenderer};
use promptmine::{
    CorpusSource, Deduplicator, DirectorySource, ExtractionPipeline, ExtractionReport,
    JsonReportSink, ReportSink,
};

/// Promptmine - mines Markdown insight documents into a prompt knowledge base.
#[derive(Parser)]
#[command(name = "promptmine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "PROMPTMINE_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Extract insights from a directory of Markdown documents.
    Extract {
        /// Directory of insight documents (overrides config).
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Path of the JSON report to write (overrides config).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate prompt documents and the patterns-library section from a report.
    Generate {
        /// Extraction report to read (overrides config).
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Root directory for generated prompt documents (overrides config).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Patterns-library document to update (overrides config).
        #[arg(short, long)]
        patterns: Option<PathBuf>,

        /// How many top patterns the library section shows (overrides config).
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    init_tracing(cli.verbose);

    let result = run_command(cli, config);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: MinerConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Extract { dir, output } => cmd_extract(&config, dir, output),

        Commands::Generate {
            report,
            output,
            patterns,
            top,
        } => cmd_generate(&config, report, output, patterns, top),

        Commands::Completions { shell } => cmd_completions(shell),
    }
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> Result<MinerConfig, Box<dyn std::error::Error>> {
    // If a path is provided, load from that file
    if let Some(config_path) = path {
        return MinerConfig::load_from_file(Path::new(config_path))
            .map_err(std::convert::Into::into);
    }

    // Otherwise, load from the environment override or default location
    Ok(MinerConfig::load_default())
}

/// Initializes tracing with an env-filter; `--verbose` lowers the default
/// level to debug.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Extract command.
fn cmd_extract(
    config: &MinerConfig,
    dir: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let insights_dir = dir.unwrap_or_else(|| config.insights_dir.clone());
    let report_file = output.unwrap_or_else(|| config.report_file.clone());

    println!("EXTRACTION PIPELINE");
    println!("{}", "=".repeat(70));
    println!("Directory: {}", insights_dir.display());
    println!();

    let documents = DirectorySource::new(&insights_dir).load()?;
    println!("Found {} files to process", documents.len());
    println!();

    let entries = ExtractionPipeline::new().run(&documents);
    let report = ExtractionReport::from_entries(entries);
    JsonReportSink::new(&report_file).write(&report)?;

    print_extraction_summary(&report);
    println!("Report saved to: {}", report_file.display());

    Ok(())
}

/// Prints the run summary to the console.
fn print_extraction_summary(report: &ExtractionReport) {
    let summary = &report.summary;

    println!("EXTRACTION RESULTS");
    println!("{}", "=".repeat(70));
    println!(
        "Successfully processed:    {}/{}",
        summary.successful, summary.total_files
    );
    println!("With super-prompts:        {} files", summary.with_super_prompts);
    println!("With quick wins:           {} files", summary.with_quick_wins);
    println!();
    println!("Total quick-win patterns:  {}", summary.total_quick_wins);
    println!("Total lessons:             {}", summary.total_lessons);
    println!();

    println!("QUALITY DISTRIBUTION");
    println!("{}", "=".repeat(70));
    println!(
        "HIGH   (8+ points):   {:2} files  <- create standalone prompts",
        summary.high_quality_count
    );
    println!(
        "MEDIUM (4-7 points):  {:2} files  <- add to patterns library",
        summary.medium_quality_count
    );
    println!(
        "LOW    (0-3 points):  {:2} files  <- reference only",
        summary.low_quality_count
    );
    println!();

    println!("DOMAIN BREAKDOWN");
    println!("{}", "=".repeat(70));
    let mut domains: Vec<(&String, &usize)> = report.domains.iter().collect();
    domains.sort_by(|a, b| b.1.cmp(a.1));
    for (domain, count) in domains {
        println!("{domain:20} {count:3} files");
    }
    println!();

    if !report.high_value_files.is_empty() {
        println!(
            "High-value candidates:     {} files",
            report.high_value_files.len()
        );
        println!();
    }
}

/// Generate command.
fn cmd_generate(
    config: &MinerConfig,
    report: Option<PathBuf>,
    output: Option<PathBuf>,
    patterns: Option<PathBuf>,
    top: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report_file = report.unwrap_or_else(|| config.report_file.clone());
    let arsenal_dir = output.unwrap_or_else(|| config.arsenal_dir.clone());
    let patterns_file = patterns.unwrap_or_else(|| config.patterns_file.clone());
    let top_patterns = top.unwrap_or(config.top_patterns);

    println!("GENERATION PIPELINE");
    println!("{}", "=".repeat(70));
    println!();

    let report = JsonReportSink::load(&report_file)?;
    println!("{} files loaded", report.summary.total_files);
    println!(
        "{} HIGH-quality files to process",
        report.summary.high_quality_count
    );
    println!();

    // Deduplicate quick wins across all success records
    let records: Vec<_> = report.successful_records().collect();
    let unique_patterns = Deduplicator::new().deduplicate(&records);
    println!(
        "{} unique patterns from {} total quick wins",
        unique_patterns.len(),
        report.summary.total_quick_wins
    );
    println!();

    // Render one prompt document per HIGH record with a structured prompt
    let renderer = PromptDocRenderer::new();
    let mut created = 0_usize;
    for record in report.high_quality_records() {
        if record.super_prompt.is_none() {
            println!("Skipping {} - no super-prompt", record.filename);
            continue;
        }
        let doc = renderer.render(record)?;
        let path = arsenal_dir.join(&doc.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &doc.content)?;
        println!("Created: {}", doc.relative_path.display());
        created += 1;
    }
    println!();

    // Splice the top patterns into the library document
    let existing = if patterns_file.exists() {
        fs::read_to_string(&patterns_file)?
    } else {
        String::new()
    };
    let section = PatternsLibraryRenderer::new(top_patterns)
        .render_section(&unique_patterns, report.summary.total_files);
    fs::write(
        &patterns_file,
        PatternsLibraryRenderer::insert_into(&existing, &section),
    )?;

    println!("GENERATION SUMMARY");
    println!("{}", "=".repeat(70));
    println!("Prompt files created:     {created}");
    println!("Unique patterns found:    {}", unique_patterns.len());
    println!("Patterns library updated: {}", patterns_file.display());

    Ok(())
}

/// Completions command.
fn cmd_completions(shell: Shell) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "promptmine", &mut std::io::stdout());
    Ok(())
}
