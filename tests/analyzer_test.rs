use scss_lint_rs::analyzer::Linter;
use scss_lint_rs::config::LintConfig;
use scss_lint_rs::error::{EngineError, LoadError};
use scss_lint_rs::source::FileSource;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_tree(root: &Path) {
    write(root, "config.scss", "// colors\n$colorRed: #ff0000;\n");
    write(root, "layout.scss", "// -- grid --\n$badName: 1px;\n");
    write(
        root,
        "module/_pageheader.scss",
        "// -- page header --\n.pageheader-navigationitem { }\n.othername { }\n",
    );
    write(
        root,
        "component/navigationarea.scss",
        "%cNavigationArea { }\n%cNavigationArea_makeItPop { }\n%cnavigationarea_MakeItPop { }\n",
    );
    write(root, "style.scss", "@import 'config';\n");
    write(root, "library/helpers.scss", ".anything { }\n");
    write(root, "notes.md", "# not a stylesheet\n");
}

#[test]
fn test_lint_tree() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    let report = Linter::new(LintConfig::new(dir.path())).run().unwrap();

    // helpers.scss is discovered but has no role; notes.md is never discovered.
    assert_eq!(report.discovered, 6);
    assert_eq!(report.linted, 5);
    assert!(report.skipped.is_empty());

    let flagged: Vec<&String> = report.files.keys().collect();
    assert_eq!(
        flagged,
        vec![
            "component/navigationarea.scss",
            "layout.scss",
            "module/_pageheader.scss",
        ]
    );

    let layout = report.errors_for("layout.scss");
    assert_eq!(layout.len(), 1);
    assert_eq!(layout[0].line, 2);
    assert_eq!(layout[0].message, "invalid variable name");

    let module = report.errors_for("module/_pageheader.scss");
    assert_eq!(module.len(), 1);
    assert_eq!(module[0].line, 3);
    assert_eq!(module[0].message, "invalid class selector name");

    let component = report.errors_for("component/navigationarea.scss");
    assert_eq!(component.len(), 1);
    assert_eq!(component[0].line, 3);

    assert!(report.errors_for("config.scss").is_empty());
    assert_eq!(report.error_count(), 3);
    assert!(!report.is_clean());
}

#[test]
fn test_runs_are_identical() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());
    let linter = Linter::new(LintConfig::new(dir.path()));

    let first = linter.run().unwrap();
    let second = linter.run().unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_missing_root_is_configuration_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let result = Linter::new(LintConfig::new(&missing)).run();
    assert!(matches!(result, Err(EngineError::Configuration { .. })));
}

#[test]
fn test_file_as_root_is_configuration_error() {
    let dir = tempdir().unwrap();
    write(dir.path(), "style.scss", "");

    let result = Linter::new(LintConfig::new(dir.path().join("style.scss"))).run();
    assert!(matches!(result, Err(EngineError::Configuration { .. })));
}

#[test]
fn test_empty_directory() {
    let dir = tempdir().unwrap();
    let report = Linter::new(LintConfig::new(dir.path())).run().unwrap();

    assert_eq!(report.discovered, 0);
    assert_eq!(report.linted, 0);
    assert!(report.is_clean());
}

#[test]
fn test_hidden_directories_are_not_walked() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".cache/module/stale.scss", ".whatever { }\n");
    write(dir.path(), "module/fresh.scss", ".fresh { }\n");

    let report = Linter::new(LintConfig::new(dir.path())).run().unwrap();

    assert_eq!(report.discovered, 1);
    assert!(report.is_clean());
}

#[test]
fn test_crlf_files_report_same_lines() {
    let dir = tempdir().unwrap();
    write(dir.path(), "layout.scss", "// -- grid --\r\n\r\n$badName: 1px;\r\n");

    let report = Linter::new(LintConfig::new(dir.path())).run().unwrap();

    assert_eq!(report.errors_for("layout.scss")[0].line, 3);
}

/// In-memory source where listed-but-absent files fail to load.
struct MemorySource {
    files: BTreeMap<String, Option<String>>,
}

impl FileSource for MemorySource {
    fn enumerate(&self) -> Result<Vec<String>, EngineError> {
        Ok(self.files.keys().cloned().collect())
    }

    fn load(&self, relative_path: &str) -> Result<String, LoadError> {
        match self.files.get(relative_path) {
            Some(Some(content)) => Ok(content.clone()),
            _ => Err(LoadError {
                path: relative_path.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "file vanished"),
            }),
        }
    }
}

#[test]
fn test_unreadable_file_is_skipped() {
    let mut files = BTreeMap::new();
    files.insert("layout.scss".to_string(), Some("$badName: 1px;\n".to_string()));
    files.insert("module/gone.scss".to_string(), None);
    files.insert("style.scss".to_string(), Some("$x: 1;\n".to_string()));
    let source = MemorySource { files };

    let report = Linter::new(LintConfig::new("unused"))
        .run_with(&source)
        .unwrap();

    assert_eq!(report.discovered, 3);
    assert_eq!(report.linted, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].path, "module/gone.scss");
    assert_eq!(report.skipped[0].reason, "file vanished");

    assert_eq!(report.errors_for("layout.scss")[0].message, "invalid variable name");
    assert_eq!(report.errors_for("style.scss")[0].message, "define in Config instead");
    assert_eq!(report.summary().errors, 2);
}

#[cfg(unix)]
#[test]
fn test_symlinked_stylesheet_is_linted() {
    let dir = tempdir().unwrap();
    let shared = tempdir().unwrap();
    write(shared.path(), "grid.scss", "$badName: 1px;\n");
    std::os::unix::fs::symlink(shared.path().join("grid.scss"), dir.path().join("layout.scss"))
        .unwrap();

    let report = Linter::new(LintConfig::new(dir.path())).run().unwrap();

    assert_eq!(report.discovered, 1);
    assert_eq!(report.linted, 1);
    assert_eq!(report.errors_for("layout.scss")[0].message, "invalid variable name");
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_aborts_discovery() {
    let dir = tempdir().unwrap();
    write(dir.path(), "config.scss", "$colorRed: #ff0000;\n");
    std::os::unix::fs::symlink(dir.path().join("missing.scss"), dir.path().join("layout.scss"))
        .unwrap();

    let result = Linter::new(LintConfig::new(dir.path())).run();

    assert!(matches!(result, Err(EngineError::Discovery(_))));
}

#[test]
fn test_dot_prefixed_file_is_discovered() {
    let dir = tempdir().unwrap();
    write(dir.path(), "module/.pageheader.scss", ".othername { }\n");

    let report = Linter::new(LintConfig::new(dir.path())).run().unwrap();

    assert_eq!(report.discovered, 1);
    assert_eq!(report.linted, 1);
    let errors = report.errors_for("module/.pageheader.scss");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "invalid class selector name");
}

#[test]
fn test_non_utf8_file_is_still_linted() {
    let dir = tempdir().unwrap();
    // Latin-1 encoded "café" in a comment.
    fs::write(dir.path().join("layout.scss"), b"// caf\xe9 colours\n$badName: 1px;\n").unwrap();

    let report = Linter::new(LintConfig::new(dir.path())).run().unwrap();

    assert!(report.skipped.is_empty());
    assert_eq!(report.linted, 1);
    let errors = report.errors_for("layout.scss");
    // The comment is malformed too; the variable on line 2 must still be seen.
    assert!(errors
        .iter()
        .any(|v| v.line == 2 && v.message == "invalid variable name"));
}

/// Source whose directory walk fails.
struct BrokenTree;

impl FileSource for BrokenTree {
    fn enumerate(&self) -> Result<Vec<String>, EngineError> {
        let err = walkdir::WalkDir::new("/definitely/not/a/real/scss/root")
            .into_iter()
            .find_map(Result::err)
            .expect("walking a missing root yields an error");
        Err(EngineError::Discovery(err))
    }

    fn load(&self, relative_path: &str) -> Result<String, LoadError> {
        panic!("load called for {} after failed discovery", relative_path);
    }
}

#[test]
fn test_discovery_failure_produces_no_report() {
    let result = Linter::new(LintConfig::new("unused")).run_with(&BrokenTree);
    assert!(matches!(result, Err(EngineError::Discovery(_))));
}
