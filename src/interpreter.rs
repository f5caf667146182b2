//! The shell loop and the per-line short-circuit state machine.

use crate::input::LineSource;
use crate::parser::{self, ChainOp};
use crate::session::{ExitCode, Session};
use crate::{builtin, expand, external, lexer};
use std::io::Write;

/// A minimal shell interpreter.
///
/// The interpreter owns the [`Session`] (alias and variable tables, last
/// exit status) for the lifetime of the loop. Each input line is parsed up
/// front into `;`-separated chains and evaluated left to right; builtins
/// run in-process, everything else is handed to the external executor.
///
/// Example
/// ```
/// use minish::Interpreter;
/// let mut sh = Interpreter::new();
/// sh.eval_line("true");
/// ```
pub struct Interpreter {
    session: Session,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Create an interpreter with a fresh, empty session.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// The shell session, for embedders and tests.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Reads and evaluates lines from `source` until the `exit` builtin
    /// runs or the source is exhausted.
    ///
    /// Returns the exit status of the last executed external command, which
    /// becomes the shell's own exit status.
    pub fn run(&mut self, source: &mut LineSource) -> ExitCode {
        let stdout = std::io::stdout();
        while !self.session.should_exit {
            let Some(line) = source.next_line() else {
                break;
            };
            self.eval_line_to(&line, &mut stdout.lock());
        }
        self.session.last_status
    }

    /// Evaluates one input line, sending builtin output to stdout.
    pub fn eval_line(&mut self, line: &str) {
        self.eval_line_to(line, &mut std::io::stdout());
    }

    /// Evaluates one input line, sending builtin output to `out`.
    ///
    /// Per `;`-statement: tokenize the head segment, dispatch builtins,
    /// otherwise substitute variables and `$$` and execute, then walk the
    /// `&&`/`||` rest of the chain with short-circuiting. No error here
    /// ever terminates the loop; diagnostics go to stderr and evaluation
    /// moves on.
    pub fn eval_line_to(&mut self, line: &str, out: &mut dyn Write) {
        // Comment stripping owns `#` handling; a line reduced to nothing
        // is skipped silently, but whitespace-only statements fall through
        // to the zero-token diagnostic below.
        let line = parser::strip_comment(line);
        if line.is_empty() {
            return;
        }

        for chain in parser::parse_line(line) {
            let mut argv = match lexer::tokenize(&chain.first, lexer::DELIMITERS) {
                Ok(argv) => argv,
                Err(err) => {
                    eprintln!("{err}");
                    continue;
                }
            };
            if argv.is_empty() {
                eprintln!("Invalid input length.");
                continue;
            }

            let args: Vec<&str> = argv.iter().skip(1).map(String::as_str).collect();
            if builtin::dispatch(&argv[0], &args, out, &mut self.session).is_some() {
                if self.session.should_exit {
                    break;
                }
                // Builtins do not chain; the rest of this statement is
                // abandoned.
                continue;
            }

            expand::substitute_vars(&mut argv, &self.session.vars);
            expand::substitute_pid(&mut argv);
            let mut status = self.execute(&argv);

            for (op, segment) in &chain.rest {
                match op {
                    ChainOp::And if status != 0 => break,
                    ChainOp::Or if status == 0 => break,
                    _ => {}
                }

                let mut next = match lexer::tokenize(segment, lexer::DELIMITERS) {
                    Ok(argv) => argv,
                    Err(err) => {
                        eprintln!("{err}");
                        break;
                    }
                };
                if next.is_empty() {
                    break;
                }
                expand::substitute_vars(&mut next, &self.session.vars);
                expand::substitute_pid(&mut next);
                status = self.execute(&next);
            }
        }
    }

    /// Runs one external command and records its status in the session.
    fn execute(&mut self, argv: &[String]) -> ExitCode {
        let status = match external::run(argv) {
            Ok(code) => code,
            Err(err) => {
                eprintln!("minish: {err:#}");
                1
            }
        };
        self.session.last_status = status;
        status
    }
}
