use serde::Serialize;
use std::collections::BTreeMap;

/// A naming or placement violation on a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 1-indexed line number.
    pub line: usize,
    /// Human-readable description of the rule that failed.
    pub message: String,
}

/// A discovered file that could not be linted because it failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path relative to the scan root.
    pub path: String,
    /// Why the file was skipped.
    pub reason: String,
}

/// Aggregated outcome of a lint run.
///
/// Files without violations are absent from `files`. Keys are relative paths,
/// so iteration follows the sorted discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    /// Violations per file, in line order.
    pub files: BTreeMap<String, Vec<Violation>>,
    /// Files that were discovered and classified but could not be read.
    pub skipped: Vec<SkippedFile>,
    /// Number of files found under the scan root.
    pub discovered: usize,
    /// Number of files that had a role and were actually linted.
    pub linted: usize,
}

/// Summary counts derived from a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Files found under the scan root with the recognized extension.
    pub discovered: usize,
    /// Files that had a role and loaded successfully.
    pub linted: usize,
    /// Files with a role that could not be loaded.
    pub skipped: usize,
    pub files_with_errors: usize,
    /// Total violations across all files.
    pub errors: usize,
}

impl LintReport {
    /// Creates an empty report for `discovered` files.
    pub fn new(discovered: usize) -> Self {
        Self {
            discovered,
            ..Self::default()
        }
    }

    /// Records the result of linting one file.
    pub fn record(&mut self, path: &str, violations: Vec<Violation>) {
        self.linted += 1;
        if !violations.is_empty() {
            self.files.insert(path.to_string(), violations);
        }
    }

    /// Records a file that could not be loaded.
    pub fn skip(&mut self, path: &str, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            path: path.to_string(),
            reason: reason.into(),
        });
    }

    /// Total number of violations across all files.
    pub fn error_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Number of files with at least one violation.
    pub fn files_with_errors(&self) -> usize {
        self.files.len()
    }

    /// Violations recorded for `path`, empty when the file is clean.
    pub fn errors_for(&self, path: &str) -> &[Violation] {
        self.files.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when nothing was flagged and nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.files.is_empty() && self.skipped.is_empty()
    }

    /// Derives the counts printed at the end of a run.
    pub fn summary(&self) -> Summary {
        Summary {
            discovered: self.discovered,
            linted: self.linted,
            skipped: self.skipped.len(),
            files_with_errors: self.files_with_errors(),
            errors: self.error_count(),
        }
    }
}
