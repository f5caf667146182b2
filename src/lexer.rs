//! Splitting a command segment into argument tokens.

use thiserror::Error;

/// Maximum number of argument tokens a single command may carry.
pub const MAX_ARGS: usize = 50;

/// Delimiters used when tokenizing command segments.
pub const DELIMITERS: &str = " \t\n";

/// Errors produced while tokenizing a command segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// The segment carried more tokens than [`MAX_ARGS`] allows.
    #[error("Too many arguments. Maximum allowed: {MAX_ARGS}")]
    TooManyArgs,
}

/// Splits `input` into owned, non-empty tokens using `delimiters`.
///
/// Leading and trailing delimiter runs are skipped, and consecutive
/// delimiters never produce empty tokens. An empty or all-delimiter input
/// yields an empty vector. Producing more than [`MAX_ARGS`] tokens aborts
/// tokenization and discards any partially accumulated output.
pub fn tokenize(input: &str, delimiters: &str) -> Result<Vec<String>, LexError> {
    let mut tokens = Vec::new();
    for token in input.split(|c| delimiters.contains(c)) {
        if token.is_empty() {
            continue;
        }
        if tokens.len() == MAX_ARGS {
            return Err(LexError::TooManyArgs);
        }
        tokens.push(token.to_string());
    }
    Ok(tokens)
}
