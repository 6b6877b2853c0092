use crate::error::EngineError;
use std::path::{Path, PathBuf};

/// Extension of the stylesheet files the linter understands.
pub const DEFAULT_EXTENSION: &str = "scss";

/// Settings for a single lint run.
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Directory the scan starts from.
    pub root: PathBuf,
    /// Extension (without the dot) of files to discover.
    pub extension: String,
}

impl LintConfig {
    /// Creates a configuration rooted at `root` using the default extension.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Overrides the recognized extension. A leading dot is ignored.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Checks that the scan root exists and is a directory.
    pub fn validate(&self) -> Result<(), EngineError> {
        check_root(&self.root)
    }
}

fn check_root(root: &Path) -> Result<(), EngineError> {
    if !root.exists() {
        return Err(EngineError::Configuration {
            root: root.to_path_buf(),
            message: "scan root does not exist".to_string(),
        });
    }
    if !root.is_dir() {
        return Err(EngineError::Configuration {
            root: root.to_path_buf(),
            message: "scan root is not a directory".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_strips_dot() {
        let config = LintConfig::new("styles").with_extension(".sass");
        assert_eq!(config.extension, "sass");
    }

    #[test]
    fn test_missing_root_is_rejected() {
        let config = LintConfig::new("/definitely/not/a/real/scss/root");
        assert!(matches!(
            config.validate(),
            Err(EngineError::Configuration { .. })
        ));
    }
}
