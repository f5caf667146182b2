//! Whole-token variable substitution.
//!
//! Substitution runs after builtin dispatch and before execution, so
//! variable expansion never affects builtin recognition.

use crate::session::VarTable;

/// Exact, whole-token equality test.
///
/// A token only names a variable when it matches the name in full; prefix
/// or embedded matches do not count.
pub fn is_variable(token: &str, name: &str) -> bool {
    token == name
}

/// Replaces every token that exactly equals a registered variable name
/// with an owned copy of that variable's value.
///
/// The first matching variable in insertion order wins. Tokens matching no
/// name are left untouched, so the pass is idempotent on them.
pub fn substitute_vars(argv: &mut [String], vars: &VarTable) {
    for token in argv.iter_mut() {
        if let Some(value) = vars.get(token) {
            *token = value.to_string();
        }
    }
}

/// Replaces every token exactly equal to `$$` with the decimal form of the
/// current process id.
pub fn substitute_pid(argv: &mut [String]) {
    for token in argv.iter_mut() {
        if is_variable(token, "$$") {
            *token = std::process::id().to_string();
        }
    }
}
