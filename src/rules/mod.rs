// Rules module
// Maps every (line kind, file role) pair to the rule that governs it.

/// Naming validators used by the rule table.
pub mod naming;

use crate::lines::{LineKind, LineRecord};
use crate::role::FileRole;
use std::collections::HashMap;

/// Validates a line against the file's namespace. `true` means well-formed.
pub type Validator = fn(&LineRecord<'_>, &str) -> bool;

/// What happens to a line of a given kind in a given role.
#[derive(Clone, Copy)]
pub enum Rule {
    /// The declaration is not allowed in this role at all.
    Forbidden(&'static str),
    /// The declaration is allowed but its name must pass `check`.
    Pattern {
        check: Validator,
        message: &'static str,
    },
}

pub const DEFINE_IN_CONFIG: &str = "define in Config instead";
pub const PLACEHOLDER_FORBIDDEN: &str = "placeholder selectors not permitted here";
pub const FUNCTION_FORBIDDEN: &str = "functions not permitted here";
pub const MIXIN_FORBIDDEN: &str = "mixins not permitted here";
pub const CLASS_FORBIDDEN: &str = "class selectors not permitted here";

pub const INVALID_COMMENT: &str = "invalid comment format, expected // -- comment --";
pub const INVALID_VARIABLE: &str = "invalid variable name";
pub const INVALID_PLACEHOLDER: &str = "invalid placeholder selector name";
pub const INVALID_FUNCTION: &str = "invalid function name";
pub const INVALID_MIXIN: &str = "invalid mixin name";
pub const INVALID_CLASS: &str = "invalid class selector name";

lazy_static::lazy_static! {
    /// Pairs missing from the table are unchecked.
    static ref RULES: HashMap<(LineKind, FileRole), Rule> = {
        use FileRole as R;
        use LineKind as K;

        let pattern = |check: Validator, message: &'static str| Rule::Pattern { check, message };
        let mut table = HashMap::new();

        for role in [R::Component, R::Layout, R::Mixin, R::Module] {
            table.insert((K::Comment, role), pattern(naming::comment, INVALID_COMMENT));
        }

        // Mixin files: variable names are not constrained.
        table.insert((K::Variable, R::Style), Rule::Forbidden(DEFINE_IN_CONFIG));
        table.insert((K::Variable, R::Config), pattern(naming::config_variable, INVALID_VARIABLE));
        table.insert((K::Variable, R::Layout), pattern(naming::layout_variable, INVALID_VARIABLE));
        table.insert((K::Variable, R::Component), pattern(naming::component_variable, INVALID_VARIABLE));
        table.insert((K::Variable, R::Module), pattern(naming::module_variable, INVALID_VARIABLE));

        for role in [R::Config, R::Mixin, R::Style] {
            table.insert((K::Placeholder, role), Rule::Forbidden(PLACEHOLDER_FORBIDDEN));
        }
        table.insert((K::Placeholder, R::Layout), pattern(naming::layout_placeholder, INVALID_PLACEHOLDER));
        table.insert((K::Placeholder, R::Component), pattern(naming::component_placeholder, INVALID_PLACEHOLDER));
        table.insert((K::Placeholder, R::Module), pattern(naming::module_placeholder, INVALID_PLACEHOLDER));

        for (kind, forbidden, invalid) in [
            (K::Function, FUNCTION_FORBIDDEN, INVALID_FUNCTION),
            (K::Mixin, MIXIN_FORBIDDEN, INVALID_MIXIN),
        ] {
            table.insert((kind, R::Config), Rule::Forbidden(forbidden));
            table.insert((kind, R::Style), Rule::Forbidden(forbidden));
            table.insert((kind, R::Mixin), pattern(naming::any_declaration, invalid));
            table.insert((kind, R::Layout), pattern(naming::layout_declaration, invalid));
            table.insert((kind, R::Component), pattern(naming::component_declaration, invalid));
            table.insert((kind, R::Module), pattern(naming::module_declaration, invalid));
        }

        for role in [R::Component, R::Config, R::Layout, R::Mixin, R::Style] {
            table.insert((K::ClassSelector, role), Rule::Forbidden(CLASS_FORBIDDEN));
        }
        table.insert((K::ClassSelector, R::Module), pattern(naming::module_class, INVALID_CLASS));

        table
    };
}

/// Looks up the rule for a line kind in a role.
pub fn rule_for(kind: LineKind, role: FileRole) -> Option<Rule> {
    RULES.get(&(kind, role)).copied()
}

/// Checks a single line, returning the violation message if it fails.
pub fn check_line(line: &LineRecord<'_>, role: FileRole, namespace: &str) -> Option<&'static str> {
    let rule = rule_for(line.kind?, role)?;
    match rule {
        Rule::Forbidden(message) => Some(message),
        Rule::Pattern { check, message } => (!check(line, namespace)).then_some(message),
    }
}
