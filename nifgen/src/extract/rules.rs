//! Built-in marker rules.

use regex::Regex;

use super::MarkerRule;
use crate::declaration::Declaration;
use crate::error::{NifgenError, Result};

const TABLE_ROW_PATTERN: &str = r#"^\{"(.*)",\s*(\d+),"#;

fn compile(token: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| NifgenError::InvalidMarker {
        token: token.to_owned(),
        source,
    })
}

fn call_pattern(token: &str) -> Result<Regex> {
    compile(token, &format!(r"\b{}\s*\((.*)\)", regex::escape(token)))
}

fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Single-line rule: `CIMG_CMD(name)` anywhere on a line yields `name`.
#[derive(Debug, Clone)]
pub struct CommandMarker {
    pattern: Regex,
}

impl CommandMarker {
    /// Builds the rule for the given call-like marker token.
    ///
    /// # Errors
    ///
    /// Returns [`NifgenError::InvalidMarker`] if the token cannot be compiled.
    pub fn new(token: &str) -> Result<Self> {
        Ok(Self {
            pattern: call_pattern(token)?,
        })
    }
}

impl MarkerRule for CommandMarker {
    type State = ();

    fn scan(&self, line: &str, state: ()) -> (Option<Declaration>, ()) {
        (capture(&self.pattern, line).map(Declaration::named), state)
    }
}

/// Progress of the two-line NIF rule within one stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingNif {
    /// No declaration marker is waiting for its arity.
    #[default]
    Idle,
    /// A declaration marker was seen; the arity line has not arrived yet.
    Pending(String),
}

/// Two-line rule: `DECL_NIF(name)` opens a declaration and a later
/// `ality != N` line closes it with arity `N`.
///
/// A second marker before the arity line replaces the pending name.
#[derive(Debug, Clone)]
pub struct NifMarker {
    declaration: Regex,
    arity: Regex,
}

impl NifMarker {
    /// Builds the rule from the declaration token and the arity variable name.
    ///
    /// # Errors
    ///
    /// Returns [`NifgenError::InvalidMarker`] if either token cannot be compiled.
    pub fn new(token: &str, arity_var: &str) -> Result<Self> {
        Ok(Self {
            declaration: call_pattern(token)?,
            arity: compile(
                arity_var,
                &format!(r"{}\s*!=\s*(\d+)", regex::escape(arity_var)),
            )?,
        })
    }

    fn arity_of(&self, line: &str) -> Option<u32> {
        capture(&self.arity, line).and_then(|digits| digits.parse().ok())
    }
}

impl MarkerRule for NifMarker {
    type State = PendingNif;

    fn scan(&self, line: &str, state: PendingNif) -> (Option<Declaration>, PendingNif) {
        if let Some(name) = capture(&self.declaration, line) {
            if let PendingNif::Pending(dropped) = state {
                tracing::debug!(dropped = %dropped, replacement = %name, "pending NIF replaced before its arity line");
            }
            return (None, PendingNif::Pending(name.to_owned()));
        }

        match state {
            PendingNif::Pending(name) => match self.arity_of(line) {
                Some(arity) => (
                    Some(Declaration::with_arity(name, arity)),
                    PendingNif::Idle,
                ),
                None => (None, PendingNif::Pending(name)),
            },
            PendingNif::Idle => (None, PendingNif::Idle),
        }
    }

    fn finish(&self, state: PendingNif) {
        if let PendingNif::Pending(name) = state {
            tracing::debug!(name = %name, "NIF marker without arity line dropped");
        }
    }
}

/// Single-line rule over a generated NIF table: `{"name", N, ...` at the
/// start of a line yields `name` with arity `N`.
#[derive(Debug, Clone)]
pub struct TableRowMarker {
    pattern: Regex,
}

impl TableRowMarker {
    /// Builds the table-row rule.
    ///
    /// # Errors
    ///
    /// Returns [`NifgenError::InvalidMarker`] if the built-in pattern fails
    /// to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile("{\"name\", arity,", TABLE_ROW_PATTERN)?,
        })
    }
}

impl MarkerRule for TableRowMarker {
    type State = ();

    fn scan(&self, line: &str, state: ()) -> (Option<Declaration>, ()) {
        let found = self.pattern.captures(line).and_then(|caps| {
            let name = caps.get(1)?.as_str();
            let arity = caps.get(2)?.as_str().parse().ok()?;
            Some(Declaration::with_arity(name, arity))
        });
        (found, state)
    }
}
