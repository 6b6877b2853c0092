use crate::config::LintConfig;
use crate::error::{EngineError, LoadError};
use crate::lines;
use crate::report::{LintReport, Violation};
use crate::role::FileRole;
use crate::rules;
use crate::source::{FileSource, FsSource, SourceFile};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// The main linter.
/// Holds the configuration for a run; it carries no state between runs.
pub struct Linter {
    pub config: LintConfig,
}

impl Linter {
    /// Creates a new `Linter` for the given configuration.
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// Lints the directory tree named by the configuration.
    ///
    /// Fails before any linting if the root is unusable, or if discovery
    /// cannot read part of the tree.
    pub fn run(&self) -> Result<LintReport, EngineError> {
        self.config.validate()?;
        let source = FsSource::new(&self.config);
        self.run_with(&source)
    }

    /// Lints every file provided by `source`.
    ///
    /// This method:
    /// 1. Enumerates candidate files (already sorted).
    /// 2. Classifies each path; files without a role are left out.
    /// 3. Loads and lints files in parallel using `rayon`.
    /// 4. Folds per-file outcomes into the report in discovery order.
    pub fn run_with<S: FileSource>(&self, source: &S) -> Result<LintReport, EngineError> {
        // Discovery is all-or-nothing: a walk error aborts the run here.
        let paths = source.enumerate()?;
        info!(root = %self.config.root.display(), files = paths.len(), "discovered stylesheets");

        // Classify each path. Files without a role are counted as discovered
        // but never loaded.
        let extension = self.config.extension.as_str();
        let targets: Vec<(String, FileRole)> = paths
            .iter()
            .filter_map(|path| match FileRole::classify(path, extension) {
                Some(role) => Some((path.clone(), role)),
                None => {
                    debug!(path = %path, "no role, skipping");
                    None
                }
            })
            .collect();

        // Each file is linted in isolation; collect() preserves input order.
        let outcomes: Vec<(String, Result<Vec<Violation>, LoadError>)> = targets
            .par_iter()
            .map(|(path, role)| {
                let outcome = source.load(path).map(|content| {
                    let file = SourceFile::new(path, *role, content, extension);
                    lint_file(&file)
                });
                (path.clone(), outcome)
            })
            .collect();

        // Fold outcomes into the report. Load failures become skipped entries
        // instead of stopping the run.
        let mut report = LintReport::new(paths.len());
        for (path, outcome) in outcomes {
            match outcome {
                Ok(violations) => report.record(&path, violations),
                Err(err) => {
                    warn!(error = %err, "skipping file");
                    report.skip(&path, err.source.to_string());
                }
            }
        }

        info!(
            linted = report.linted,
            skipped = report.skipped.len(),
            errors = report.error_count(),
            "lint finished"
        );
        Ok(report)
    }
}

/// Lints a single classified file, returning violations in line order.
pub fn lint_file(file: &SourceFile) -> Vec<Violation> {
    lint_source(&file.content, file.role, &file.base_name)
}

/// Lints raw source text for a role, checking namespaces against `base_name`.
///
/// Each line gets at most one violation: its kind selects a single rule
/// from the table, and lines with no kind are never checked.
pub fn lint_source(content: &str, role: FileRole, base_name: &str) -> Vec<Violation> {
    lines::scan(content)
        .iter()
        .filter_map(|line| {
            rules::check_line(line, role, base_name).map(|message| Violation {
                line: line.number,
                message: message.to_string(),
            })
        })
        .collect()
}
