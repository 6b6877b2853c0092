use crate::utils::split_lines;
use regex::Regex;

lazy_static::lazy_static! {
    // Comment and class-selector tests run on the right-trimmed line and
    // tolerate indentation themselves.
    static ref COMMENT_RE: Regex = Regex::new(r"^\s*//").unwrap();
    static ref TODO_RE: Regex = Regex::new(r"^\s*//\s+TODO:").unwrap();
    static ref CLASS_RE: Regex = Regex::new(r"^\s*\.").unwrap();

    // The remaining tests run on the fully trimmed line.
    static ref VARIABLE_RE: Regex = Regex::new(r"^\$\S+:").unwrap();
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"^%").unwrap();
    static ref FUNCTION_RE: Regex = Regex::new(r"^@function ").unwrap();
    static ref MIXIN_RE: Regex = Regex::new(r"^@mixin ").unwrap();
}

/// What a line declares, decided by its leading token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `// ...`
    Comment,
    /// `// TODO: ...`, exempt from comment formatting.
    TodoComment,
    /// `$name: value;`
    Variable,
    /// `%name { ... }`
    Placeholder,
    /// `@function name(...)`
    Function,
    /// `@mixin name(...)`
    Mixin,
    /// `.name { ... }`
    ClassSelector,
}

/// One physical line of a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord<'a> {
    /// 1-indexed line number.
    pub number: usize,
    /// Line with whitespace trimmed on both ends.
    pub text: &'a str,
    /// Line with only trailing whitespace trimmed; indentation is kept.
    pub raw: &'a str,
    /// Category, or `None` when the line declares nothing we check.
    pub kind: Option<LineKind>,
}

impl<'a> LineRecord<'a> {
    /// Builds a record for a single line.
    pub fn new(number: usize, line: &'a str) -> Self {
        let raw = line.trim_end();
        let text = raw.trim_start();
        Self {
            number,
            text,
            raw,
            kind: categorize(text, raw),
        }
    }
}

/// Determines the category of a line.
///
/// The leading tokens are disjoint, so at most one category applies.
pub fn categorize(text: &str, raw: &str) -> Option<LineKind> {
    if COMMENT_RE.is_match(raw) {
        if TODO_RE.is_match(raw) {
            return Some(LineKind::TodoComment);
        }
        return Some(LineKind::Comment);
    }
    if VARIABLE_RE.is_match(text) {
        return Some(LineKind::Variable);
    }
    if PLACEHOLDER_RE.is_match(text) {
        return Some(LineKind::Placeholder);
    }
    if FUNCTION_RE.is_match(text) {
        return Some(LineKind::Function);
    }
    if MIXIN_RE.is_match(text) {
        return Some(LineKind::Mixin);
    }
    if CLASS_RE.is_match(raw) {
        return Some(LineKind::ClassSelector);
    }
    None
}

/// Splits a source file into line records in scan order.
pub fn scan(source: &str) -> Vec<LineRecord<'_>> {
    split_lines(source)
        .map(|(number, line)| LineRecord::new(number, line))
        .collect()
}
