use serde::Serialize;
use std::fmt;

/// Structural role of a stylesheet file.
///
/// The role decides which declarations a file may contain and which naming
/// pattern each declaration must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Component,
    Config,
    Layout,
    Mixin,
    Module,
    Style,
}

impl FileRole {
    /// Classifies a path relative to the scan root.
    ///
    /// Directory prefixes win over the single-file roles. Returns `None` for
    /// files that follow no known convention; those are left unlinted.
    pub fn classify(relative_path: &str, extension: &str) -> Option<Self> {
        if relative_path.starts_with("component/") {
            return Some(Self::Component);
        }
        if relative_path.starts_with("module/") {
            return Some(Self::Module);
        }

        let (stem, ext) = relative_path.rsplit_once('.')?;
        if ext != extension {
            return None;
        }
        match stem {
            "config" => Some(Self::Config),
            "layout" => Some(Self::Layout),
            "mixin" => Some(Self::Mixin),
            "style" => Some(Self::Style),
            _ => None,
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Component => "component",
            Self::Config => "config",
            Self::Layout => "layout",
            Self::Mixin => "mixin",
            Self::Module => "module",
            Self::Style => "style",
        };
        f.write_str(name)
    }
}

/// Derives the namespace a file's declarations must carry.
///
/// Takes the file name, drops the extension and any leading underscores
/// (partials), and lowercases the rest: `module/_PageHeader.scss` becomes
/// `pageheader`.
pub fn base_name(relative_path: &str, extension: &str) -> String {
    let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
    let suffix = format!(".{}", extension);
    let stem = file_name.strip_suffix(&suffix).unwrap_or(file_name);
    stem.trim_start_matches('_').to_lowercase()
}
