//! Naming validators for each declaration kind.
//!
//! Every validator receives the line and the file's namespace (its base name)
//! and answers whether the declaration is well-formed. Shape checks are
//! case-sensitive; namespace comparisons are not.

use crate::lines::LineRecord;
use regex::Regex;

/// Characters that may end a placeholder name.
const PLACEHOLDER_TERMINATORS: &[char] = &['{', ',', ':', '.', ' '];

/// Characters that may follow the namespace in a class name.
const CLASS_TERMINATORS: &[char] = &['{', ',', ':', '.', '-', ' '];

lazy_static::lazy_static! {
    static ref COMMENT_SHAPE: Regex = Regex::new(r"^\s*// -- \S(?:.*\S)? --$").unwrap();

    static ref CONFIG_VARIABLE: Regex = Regex::new(r"^\$[a-z][a-zA-Z0-9_]+:").unwrap();
    static ref LAYOUT_VARIABLE: Regex = Regex::new(r"^\$l[A-Z][a-zA-Z0-9]+:").unwrap();
    static ref NAMESPACED_VARIABLE: Regex =
        Regex::new(r"^\$[cm]([A-Z][a-zA-Z]+)_[a-z][a-zA-Z0-9]+:").unwrap();

    static ref LAYOUT_PLACEHOLDER: Regex =
        Regex::new(r"^%l[A-Z][a-zA-Z0-9]+[{,:. ]").unwrap();
    static ref NAMESPACED_PLACEHOLDER: Regex =
        Regex::new(r"^%[cm]([A-Z][a-zA-Z]+)_[a-z][a-zA-Z0-9]+[{,:. ]").unwrap();

    // Name of a function or mixin: everything up to the first `(` or space.
    static ref DECLARED_NAME: Regex = Regex::new(r"^@(?:function|mixin) ([^(\s]+)").unwrap();
    static ref LAYOUT_IDENTIFIER: Regex = Regex::new(r"^l[A-Z][a-zA-Z0-9]+$").unwrap();
    static ref NAMESPACED_IDENTIFIER: Regex =
        Regex::new(r"^[cm]([A-Z][a-zA-Z]+)_[a-z][a-zA-Z0-9]+$").unwrap();

    static ref CLASS_NAME: Regex =
        Regex::new(r"^\s*\.[a-z0-9][a-z0-9-]*[a-z0-9][{,:. ]").unwrap();
}

/// Strips `namespace` from the front of `subject`, ignoring case.
fn strip_namespace<'a>(subject: &'a str, namespace: &str) -> Option<&'a str> {
    let head = subject.get(..namespace.len())?;
    if head.to_lowercase() == namespace {
        subject.get(namespace.len()..)
    } else {
        None
    }
}

fn starts_with_any(subject: &str, terminators: &[char]) -> bool {
    subject
        .chars()
        .next()
        .map_or(false, |c| terminators.contains(&c))
}

fn in_namespace(captured: &str, namespace: &str) -> bool {
    captured.to_lowercase() == namespace
}

/// Checks `sigil` + `letter` at the start of `text`, e.g. `$c` or `%m`.
fn has_role_prefix(text: &str, sigil: char, letter: char) -> bool {
    let mut chars = text.chars();
    chars.next() == Some(sigil) && chars.next() == Some(letter)
}

// --- comments ---

/// Section comments must read `// -- text --`, with no padding inside the dashes.
pub fn comment(line: &LineRecord<'_>, _namespace: &str) -> bool {
    COMMENT_SHAPE.is_match(line.raw)
}

// --- variables ---

/// Config variables are plain camelCase (`$colorRed`) and carry no namespace.
pub fn config_variable(line: &LineRecord<'_>, _namespace: &str) -> bool {
    CONFIG_VARIABLE.is_match(line.text)
}

/// Layout variables are `$l` plus a capitalized word (`$lGutter`).
pub fn layout_variable(line: &LineRecord<'_>, _namespace: &str) -> bool {
    LAYOUT_VARIABLE.is_match(line.text)
}

/// Component variables are `$c<Namespace>_<name>`, e.g. `$cButton_height` in `button.scss`.
pub fn component_variable(line: &LineRecord<'_>, namespace: &str) -> bool {
    namespaced_variable(line.text, namespace, 'c')
}

/// Module variables are `$m<Namespace>_<name>`.
pub fn module_variable(line: &LineRecord<'_>, namespace: &str) -> bool {
    namespaced_variable(line.text, namespace, 'm')
}

fn namespaced_variable(text: &str, namespace: &str, letter: char) -> bool {
    // The shape regex accepts either role letter; pin it to this file's role.
    if !has_role_prefix(text, '$', letter) {
        return false;
    }
    NAMESPACED_VARIABLE
        .captures(text)
        .map_or(false, |caps| in_namespace(&caps[1], namespace))
}

// --- placeholders ---

/// Layout placeholders are `%l` plus a capitalized word, ended by a terminator.
pub fn layout_placeholder(line: &LineRecord<'_>, _namespace: &str) -> bool {
    LAYOUT_PLACEHOLDER.is_match(line.text)
}

/// Component placeholders may also be the bare namespace: `%cNavigationArea`
/// in `navigationarea.scss` needs no sub-name.
pub fn component_placeholder(line: &LineRecord<'_>, namespace: &str) -> bool {
    let text = line.text;
    if !has_role_prefix(text, '%', 'c') {
        return false;
    }

    let name = &text[2..];
    if let Some(rest) = strip_namespace(name, namespace) {
        if starts_with_any(rest, PLACEHOLDER_TERMINATORS) {
            return name.chars().next().map_or(false, |c| c.is_ascii_uppercase());
        }
    }

    namespaced_placeholder(text, namespace)
}

/// Module placeholders always need a sub-name: `%m<Namespace>_<name>`.
pub fn module_placeholder(line: &LineRecord<'_>, namespace: &str) -> bool {
    has_role_prefix(line.text, '%', 'm') && namespaced_placeholder(line.text, namespace)
}

fn namespaced_placeholder(text: &str, namespace: &str) -> bool {
    NAMESPACED_PLACEHOLDER
        .captures(text)
        .map_or(false, |caps| in_namespace(&caps[1], namespace))
}

// --- functions and mixins ---

/// Extracts the declared name from an `@function` or `@mixin` line.
pub fn declared_name(text: &str) -> Option<&str> {
    DECLARED_NAME
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Mixin files only need a name that can be read.
pub fn any_declaration(line: &LineRecord<'_>, _namespace: &str) -> bool {
    declared_name(line.text).is_some()
}

/// Layout functions and mixins are `l` plus a capitalized word (`lSpacing`).
pub fn layout_declaration(line: &LineRecord<'_>, _namespace: &str) -> bool {
    declared_name(line.text).map_or(false, |name| LAYOUT_IDENTIFIER.is_match(name))
}

/// Component functions and mixins are `c<Namespace>_<name>`.
pub fn component_declaration(line: &LineRecord<'_>, namespace: &str) -> bool {
    namespaced_declaration(line.text, namespace, 'c')
}

/// Module functions and mixins are `m<Namespace>_<name>`.
pub fn module_declaration(line: &LineRecord<'_>, namespace: &str) -> bool {
    namespaced_declaration(line.text, namespace, 'm')
}

fn namespaced_declaration(text: &str, namespace: &str, letter: char) -> bool {
    let Some(name) = declared_name(text) else {
        return false;
    };
    if !name.starts_with(letter) {
        return false;
    }
    NAMESPACED_IDENTIFIER
        .captures(name)
        .map_or(false, |caps| in_namespace(&caps[1], namespace))
}

// --- class selectors ---

/// Module classes are the base class (`.pageheader`) or a dash-joined
/// sub-class (`.pageheader-title`).
pub fn module_class(line: &LineRecord<'_>, namespace: &str) -> bool {
    if !CLASS_NAME.is_match(line.raw) {
        return false;
    }
    line.text
        .strip_prefix('.')
        .and_then(|name| strip_namespace(name, namespace))
        .map_or(false, |rest| starts_with_any(rest, CLASS_TERMINATORS))
}
