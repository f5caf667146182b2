//! Spawning external commands and mapping their termination to a status.

use crate::session::ExitCode;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// Conventional status for a command name that cannot be resolved.
pub const NOT_FOUND: ExitCode = 127;

/// Sentinel status for a child that terminated abnormally (signal death).
const SIGNALED: ExitCode = -1;

/// Executes `argv` as an external command and blocks until it terminates.
///
/// The child inherits the shell's environment and file descriptors. An
/// empty `argv` or an unresolvable command name yields `Ok(127)` without
/// spawning anything; spawn or wait failures propagate as errors for the
/// caller to report. At most one child is ever outstanding.
pub fn run(argv: &[String]) -> Result<ExitCode> {
    let Some(name) = argv.first() else {
        return Ok(NOT_FOUND);
    };
    let search_paths = std::env::var_os("PATH").unwrap_or_default();

    let Some(program) = find_command_path(&search_paths, Path::new(name)) else {
        eprintln!("{name}: command not found");
        return Ok(NOT_FOUND);
    };

    let mut child = Command::new(program.as_ref())
        .args(&argv[1..])
        .spawn()
        .with_context(|| format!("failed to start {name}"))?;
    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {name}"))?;

    Ok(status.code().unwrap_or(SIGNALED))
}

/// Resolve a command path the way a typical shell would.
///
/// Absolute paths and paths with more than one component (including
/// `./foo`) resolve to themselves when they exist. A bare name is searched
/// through each directory of `search_paths` in order, first hit wins. An
/// empty path never resolves.
pub fn find_command_path<'a>(search_paths: &OsStr, path: &'a Path) -> Option<Cow<'a, Path>> {
    if path.as_os_str().is_empty() {
        return None;
    }

    if path.is_absolute() || path.components().count() > 1 {
        return path.exists().then_some(Cow::Borrowed(path));
    }

    std::env::split_paths(search_paths)
        .map(|dir| dir.join(path))
        .find(|candidate| candidate.exists())
        .map(Cow::Owned)
}
