//! Built-in commands known to the shell at compile time.
//!
//! Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed
//! directly in-process without spawning a child. They are recognized only
//! at the head of a `;`-statement and never participate in `&&`/`||`
//! chaining.

use crate::session::{ExitCode, Session};
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;

/// Interface implemented by every builtin.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "alias".
    fn name() -> &'static str;

    /// Executes the command against the session.
    ///
    /// Return value follows shell conventions: 0 for success, non-zero for
    /// error.
    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode>;
}

/// Dispatches `name` to a builtin, if one matches.
///
/// Returns `None` when `name` is not a builtin, leaving the command to the
/// external executor.
pub(crate) fn dispatch(
    name: &str,
    args: &[&str],
    stdout: &mut dyn Write,
    session: &mut Session,
) -> Option<ExitCode> {
    if let Some(code) = run_builtin::<Exit>(name, args, stdout, session) {
        return Some(code);
    }
    run_builtin::<Alias>(name, args, stdout, session)
}

fn run_builtin<T: BuiltinCommand>(
    name: &str,
    args: &[&str],
    stdout: &mut dyn Write,
    session: &mut Session,
) -> Option<ExitCode> {
    if name != T::name() {
        return None;
    }
    Some(match T::from_args(&[name], args) {
        Ok(cmd) => match cmd.execute(stdout, session) {
            Ok(code) => code,
            Err(err) => {
                let _ = writeln!(stdout, "{err:#}");
                1
            }
        },
        Err(EarlyExit { output, status }) => {
            let _ = writeln!(stdout, "{}", output.trim_end());
            if status.is_err() { 1 } else { 0 }
        }
    })
}

#[derive(FromArgs)]
/// Terminate the shell.
pub struct Exit {
    #[argh(positional, greedy)]
    /// accepted and ignored; exit honors no arguments
    pub _args: Vec<String>,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session.should_exit = true;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Define or list command aliases.
pub struct Alias {
    #[argh(positional, greedy)]
    /// alias name and optional replacement text; extras are ignored
    pub words: Vec<String>,
}

impl BuiltinCommand for Alias {
    fn name() -> &'static str {
        "alias"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let mut words = self.words.into_iter();
        let name = words.next();
        let value = words.next();
        // Anything past the value is accepted and ignored.
        match (name, value) {
            (None, _) => {
                for entry in session.aliases.iter() {
                    writeln!(stdout, "alias {}='{}'", entry.name, entry.expansion)?;
                }
            }
            (Some(name), None) => match session.aliases.get(&name) {
                Some(expansion) => writeln!(stdout, "alias {name}='{expansion}'")?,
                None => writeln!(stdout, "Alias '{name}' not found.")?,
            },
            (Some(name), Some(value)) => session.aliases.define(name, value),
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line_args: &[&str], session: &mut Session) -> (ExitCode, String) {
        let mut out = Vec::new();
        let code = dispatch(line_args[0], &line_args[1..], &mut out, session)
            .expect("expected a builtin");
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn unknown_names_are_not_builtins() {
        let mut session = Session::new();
        let mut out = Vec::new();
        assert!(dispatch("ls", &[], &mut out, &mut session).is_none());
    }

    #[test]
    fn exit_sets_the_session_flag() {
        let mut session = Session::new();
        let (code, _) = run(&["exit"], &mut session);
        assert_eq!(code, 0);
        assert!(session.should_exit);
    }

    #[test]
    fn exit_ignores_arguments() {
        let mut session = Session::new();
        let (code, _) = run(&["exit", "now", "please"], &mut session);
        assert_eq!(code, 0);
        assert!(session.should_exit);
    }

    #[test]
    fn alias_defines_then_prints_one() {
        let mut session = Session::new();
        let (code, out) = run(&["alias", "foo", "echo hi"], &mut session);
        assert_eq!(code, 0);
        assert!(out.is_empty());

        let (code, out) = run(&["alias", "foo"], &mut session);
        assert_eq!(code, 0);
        assert_eq!(out, "alias foo='echo hi'\n");
    }

    #[test]
    fn alias_ignores_arguments_past_the_value() {
        let mut session = Session::new();
        let (code, out) = run(&["alias", "foo", "echo", "hi"], &mut session);
        assert_eq!(code, 0);
        assert!(out.is_empty());
        assert_eq!(session.aliases.get("foo"), Some("echo"));
    }

    #[test]
    fn alias_lookup_of_undefined_name_reports_not_found() {
        let mut session = Session::new();
        let (_, out) = run(&["alias", "bar"], &mut session);
        assert_eq!(out, "Alias 'bar' not found.\n");
    }

    #[test]
    fn alias_without_arguments_lists_every_entry() {
        let mut session = Session::new();
        run(&["alias", "ll", "ls -l"], &mut session);
        run(&["alias", "gs", "git status"], &mut session);
        run(&["alias", "ll", "ls -la"], &mut session);

        let (_, out) = run(&["alias"], &mut session);
        assert_eq!(
            out,
            "alias ll='ls -l'\nalias gs='git status'\nalias ll='ls -la'\n"
        );
    }

    #[test]
    fn alias_lookup_prefers_the_earliest_definition() {
        let mut session = Session::new();
        run(&["alias", "g", "git"], &mut session);
        run(&["alias", "g", "grep"], &mut session);
        let (_, out) = run(&["alias", "g"], &mut session);
        assert_eq!(out, "alias g='git'\n");
    }
}
