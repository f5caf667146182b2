//! Shell-session state: alias and variable tables, last exit status.

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success. `127` is reserved for command-not-found
/// and `-1` marks a child that died to a signal.
pub type ExitCode = i32;

/// One `alias NAME VALUE` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub name: String,
    pub expansion: String,
}

/// Insertion-ordered table of alias definitions.
///
/// Redefining a name appends a new entry rather than overwriting in place;
/// lookups return the earliest match, so the original definition keeps
/// winning while the full redefinition history stays visible in listings.
/// Aliases are advisory: the interpreter never consults this table when
/// resolving a command name.
#[derive(Debug, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Appends a definition. Duplicate names are allowed.
    pub fn define(&mut self, name: impl Into<String>, expansion: impl Into<String>) {
        self.entries.push(AliasEntry {
            name: name.into(),
            expansion: expansion.into(),
        });
    }

    /// Returns the expansion of the earliest entry named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.expansion.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A shell variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub value: String,
}

/// Insertion-ordered table of shell variables.
///
/// No builtin populates this table; it exists for embedders and tests. The
/// `$$` pseudo-variable is computed on demand and never stored here.
#[derive(Debug, Default)]
pub struct VarTable {
    entries: Vec<Variable>,
}

impl VarTable {
    /// Appends a variable definition.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Variable {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Returns the value of the earliest variable named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|var| var.name == name)
            .map(|var| var.value.as_str())
    }

    /// Variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.entries.iter()
    }
}

/// Mutable state owned by the shell loop for its whole lifetime.
///
/// Tables start empty and are dropped with the session; a child process
/// never sees them beyond inherited file descriptors and environment.
#[derive(Debug, Default)]
pub struct Session {
    /// Alias definitions managed by the `alias` builtin.
    pub aliases: AliasTable,
    /// Shell variables consulted during whole-token substitution.
    pub vars: VarTable,
    /// Exit status of the most recently executed external command.
    pub last_status: ExitCode,
    /// When set, the shell loop terminates after the current statement.
    pub should_exit: bool,
}

impl Session {
    /// A fresh session with empty tables.
    pub fn new() -> Self {
        Self::default()
    }
}
