//! A tiny command-line interpreter.
//!
//! This crate implements a minimal shell: it reads lines interactively or
//! from a script/pipe, splits them into `;`-separated statements, chains
//! statements with short-circuiting `&&`/`||`, expands whole-token shell
//! variables and the `$$` pseudo-variable, and runs everything that is not
//! a builtin as an external process. It is intentionally small and easy to
//! read, suitable for experiments with process management and argument
//! parsing.
//!
//! The main entry point is [`Interpreter`], which owns the shell
//! [`Session`] (alias and variable tables) and evaluates lines obtained
//! from a [`LineSource`].

mod builtin;
mod expand;
mod external;
mod input;
mod interpreter;
mod lexer;
mod parser;
pub mod session;

pub use input::LineSource;
pub use interpreter::Interpreter;
pub use session::{ExitCode, Session};
