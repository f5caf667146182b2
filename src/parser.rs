//! Parsing a raw input line into a structured chain of command segments.
//!
//! One line is split into `;`-separated statements, and each statement
//! into segments linked by `&&`/`||`. The whole line is parsed up front
//! into [`Chain`] values; evaluation happens in the interpreter.

/// Statements of this length or more are silently skipped.
pub const MAX_SEGMENT_LEN: usize = 1024;

/// Operator linking two segments inside one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOp {
    /// `&&`: run the next segment only if the previous one succeeded.
    And,
    /// `||`: run the next segment only if the previous one failed.
    Or,
}

/// One `;`-separated statement: a head segment plus operator-linked rest.
#[derive(Debug, PartialEq, Eq)]
pub struct Chain {
    pub first: String,
    pub rest: Vec<(ChainOp, String)>,
}

/// Truncates `line` at the first literal `#`.
///
/// The search is a plain character scan; there is no quoting to honor.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Parses one comment-stripped line into its statements.
///
/// Literally empty statements (as in `a ;; b`) and statements at or over
/// [`MAX_SEGMENT_LEN`] are skipped. Whitespace-only statements are kept:
/// they tokenize to zero tokens and the interpreter reports them.
pub fn parse_line(line: &str) -> Vec<Chain> {
    line.split(';')
        .filter(|stmt| !stmt.is_empty() && stmt.len() < MAX_SEGMENT_LEN)
        .map(split_chain)
        .collect()
}

/// Splits one statement on `&&`/`||` occurrences, left to right.
///
/// An empty segment after an operator truncates the chain there: a missing
/// command after `&&`/`||` is not an error.
fn split_chain(statement: &str) -> Chain {
    let (first, mut remaining) = take_segment(statement);
    let mut rest = Vec::new();

    while let Some((op, tail)) = remaining {
        let (segment, next) = take_segment(tail);
        if segment.is_empty() {
            break;
        }
        rest.push((op, segment));
        remaining = next;
    }

    Chain { first, rest }
}

/// Splits off the trimmed text before the next operator, if any.
fn take_segment(text: &str) -> (String, Option<(ChainOp, &str)>) {
    match find_operator(text) {
        Some((idx, op)) => (text[..idx].trim().to_string(), Some((op, &text[idx + 2..]))),
        None => (text.trim().to_string(), None),
    }
}

/// Finds the earliest `&&` or `||` in `text`.
fn find_operator(text: &str) -> Option<(usize, ChainOp)> {
    match (text.find("&&"), text.find("||")) {
        (Some(a), Some(o)) if a < o => Some((a, ChainOp::And)),
        (_, Some(o)) => Some((o, ChainOp::Or)),
        (Some(a), None) => Some((a, ChainOp::And)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(first: &str, rest: &[(ChainOp, &str)]) -> Chain {
        Chain {
            first: first.to_string(),
            rest: rest.iter().map(|(op, s)| (*op, s.to_string())).collect(),
        }
    }

    #[test]
    fn strips_comment_at_first_hash() {
        assert_eq!(strip_comment("true # comment"), "true ");
        assert_eq!(strip_comment("# whole line"), "");
        assert_eq!(strip_comment("no comment"), "no comment");
    }

    #[test]
    fn splits_statements_on_semicolons() {
        let chains = parse_line("echo a ; echo b");
        assert_eq!(chains, vec![chain("echo a", &[]), chain("echo b", &[])]);
    }

    #[test]
    fn skips_literally_empty_statements() {
        let chains = parse_line("echo a ;; echo b");
        assert_eq!(chains.len(), 2);
    }

    #[test]
    fn whitespace_only_statement_reaches_the_tokenizer() {
        // The blank middle statement is kept; it tokenizes to zero tokens
        // and the interpreter reports it as invalid input.
        let chains = parse_line("echo a ;   ; echo b");
        assert_eq!(chains.len(), 3);
        assert_eq!(chains[1].first, "");

        let chains = parse_line("   ");
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].first, "");
    }

    #[test]
    fn splits_chain_on_operators() {
        let chains = parse_line("a && b || c");
        assert_eq!(
            chains,
            vec![chain(
                "a",
                &[(ChainOp::And, "b"), (ChainOp::Or, "c")]
            )]
        );
    }

    #[test]
    fn operators_and_semicolons_combine() {
        let chains = parse_line("a && b ; c");
        assert_eq!(
            chains,
            vec![chain("a", &[(ChainOp::And, "b")]), chain("c", &[])]
        );
    }

    #[test]
    fn missing_command_after_operator_ends_chain_silently() {
        let chains = parse_line("a &&");
        assert_eq!(chains, vec![chain("a", &[])]);

        let chains = parse_line("a && || b");
        assert_eq!(chains, vec![chain("a", &[])]);
    }

    #[test]
    fn empty_head_segment_is_preserved_for_diagnosis() {
        // "&& b" has no command before the operator; the interpreter
        // reports the zero-token head and skips the statement.
        let chains = parse_line("&& b");
        assert_eq!(chains[0].first, "");
    }

    #[test]
    fn overlong_statement_is_silently_skipped() {
        let long = "x".repeat(MAX_SEGMENT_LEN);
        let line = format!("{long} ; echo ok");
        let chains = parse_line(&line);
        assert_eq!(chains, vec![chain("echo ok", &[])]);
    }
}
