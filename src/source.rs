use crate::config::LintConfig;
use crate::error::{EngineError, LoadError};
use crate::role::{base_name, FileRole};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Where stylesheet files come from.
///
/// `enumerate` lists every candidate file relative to the root, sorted.
/// `load` reads a single file; failing it only skips that file.
pub trait FileSource: Sync {
    fn enumerate(&self) -> Result<Vec<String>, EngineError>;

    fn load(&self, relative_path: &str) -> Result<String, LoadError>;
}

/// Reads stylesheets from a directory tree on disk.
pub struct FsSource {
    root: PathBuf,
    extension: String,
}

impl FsSource {
    /// Creates a source rooted at the configured scan root.
    pub fn new(config: &LintConfig) -> Self {
        Self {
            root: config.root.clone(),
            extension: config.extension.clone(),
        }
    }
}

/// Hidden directories (tool caches, VCS metadata) are not descended into.
/// Dot-prefixed files are still stylesheets and stay in the walk.
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with('.'))
}

/// Renders a path relative to `root` with `/` separators on every platform.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    Some(parts.join("/"))
}

impl FileSource for FsSource {
    fn enumerate(&self) -> Result<Vec<String>, EngineError> {
        let mut files = Vec::new();

        // Walk the whole tree before sorting.
        // Symlinks are followed so a linked stylesheet is listed like any other file.
        // An entry that cannot be read or resolved (unreadable directory,
        // dangling link, link loop) aborts discovery with a `Discovery` error.
        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_hidden_dir(e))
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            // Keep only files with the configured extension.
            let matches_ext = entry
                .path()
                .extension()
                .map_or(false, |ext| ext == self.extension.as_str());
            if !matches_ext {
                continue;
            }
            if let Some(path) = relative_path(&self.root, entry.path()) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Reads a file from disk.
    ///
    /// Only I/O failures are errors. Bytes that are not valid UTF-8 (a Latin-1
    /// accent in a comment, say) are replaced rather than rejecting the file,
    /// since every check works line by line on ASCII tokens.
    fn load(&self, relative_path: &str) -> Result<String, LoadError> {
        let bytes = fs::read(self.root.join(relative_path)).map_err(|source| LoadError {
            path: relative_path.to_string(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// A classified stylesheet ready to be linted.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to the scan root.
    pub path: String,
    /// Namespace declarations in this file must carry.
    pub base_name: String,
    pub role: FileRole,
    pub content: String,
}

impl SourceFile {
    /// Wraps loaded content, deriving the base name once for every namespace check.
    pub fn new(path: &str, role: FileRole, content: String, extension: &str) -> Self {
        Self {
            path: path.to_string(),
            base_name: base_name(path, extension),
            role,
            content,
        }
    }
}
