use anyhow::Result;
use clap::Parser;
use colored::*;
use scss_lint_rs::analyzer::Linter;
use scss_lint_rs::config::{LintConfig, DEFAULT_EXTENSION};
use scss_lint_rs::report::{LintReport, Summary};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the stylesheet tree to lint.
    /// Roles are derived from paths relative to this directory,
    /// e.g. `component/button.scss` or `config.scss`.
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Extension of stylesheet files.
    /// Only files with this extension are discovered; a leading dot is ignored.
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Output raw JSON.
    /// The report and its summary are printed as one JSON object on stdout,
    /// which is useful for CI pipelines and editor integrations.
    #[arg(long)]
    json: bool,

    /// Log discovery and skipped files to stderr.
    /// `RUST_LOG` takes precedence when it is set.
    #[arg(short, long)]
    verbose: bool,
}

/// Shape of the `--json` output: the report fields plus derived counts.
#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a LintReport,
    summary: Summary,
}

/// Installs the stderr logger so stdout stays reserved for the report.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a human-readable report: one block per file with violations,
/// then skipped files, then a one-line summary.
fn print_report(report: &LintReport) {
    for (path, violations) in &report.files {
        println!("\n{}", path.bold().underline());

        // Right-align line numbers to the widest one in this file.
        let width = violations
            .iter()
            .map(|v| v.line.to_string().len())
            .max()
            .unwrap_or(1);
        for v in violations {
            println!(
                "  {:>width$}  {}",
                v.line.to_string().dimmed(),
                v.message.red(),
                width = width
            );
        }
    }

    if !report.skipped.is_empty() {
        println!("\n{}", "Skipped".yellow().bold());
        for s in &report.skipped {
            println!("  {} ({})", s.path.yellow(), s.reason);
        }
    }

    let summary = report.summary();
    let line = format!(
        "{} error(s) in {} file(s) (linted {} of {} discovered)",
        summary.errors, summary.files_with_errors, summary.linted, summary.discovered
    );
    if report.is_clean() {
        println!("\n{}", line.green());
    } else {
        println!("\n{}", line.red().bold());
    }
}

fn main() -> Result<()> {
    // Parse command line arguments using the Cli struct definition.
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Build the run configuration and lint the tree.
    // A missing root or an unreadable directory is fatal and propagates with `?`.
    let config = LintConfig::new(&cli.path).with_extension(&cli.extension);
    let report = Linter::new(config).run()?;

    // Render either JSON for tools or colored text for people.
    if cli.json {
        let output = JsonOutput {
            report: &report,
            summary: report.summary(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&report);
    }

    // Any violation or skipped file fails the run.
    if !report.is_clean() {
        process::exit(1);
    }
    Ok(())
}
