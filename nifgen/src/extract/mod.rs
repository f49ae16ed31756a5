//! Line-oriented declaration extraction.
//!
//! A [`MarkerRule`] inspects one line at a time together with a small piece
//! of per-stream state and reports at most one completed [`Declaration`].
//! [`extract`] threads an explicit [`Declarations`] accumulator through a
//! single stream, so scanning several files is a fold over their texts.

mod rules;

pub use rules::{CommandMarker, NifMarker, PendingNif, TableRowMarker};

use crate::declaration::{Declaration, Declarations};

/// A pluggable strategy for recognising declaration markers.
pub trait MarkerRule {
    /// Per-stream state, reset to its default at the start of every stream.
    type State: Default;

    /// Scans one line, returning any completed declaration and the next state.
    ///
    /// Lines that match nothing return `(None, state)` unchanged.
    fn scan(&self, line: &str, state: Self::State) -> (Option<Declaration>, Self::State);

    /// Called with the final state once a stream is exhausted.
    fn finish(&self, _state: Self::State) {}
}

/// Scans `text` with `rule`, appending every declaration to `declarations`.
///
/// Extraction never fails: lines that do not match are skipped.
#[must_use]
pub fn extract<R: MarkerRule>(rule: &R, declarations: Declarations, text: &str) -> Declarations {
    let (collected, state) = text.lines().fold(
        (declarations, R::State::default()),
        |(acc, state), line| {
            let (found, next) = rule.scan(line, state);
            let grown = match found {
                Some(declaration) => acc.push(declaration),
                None => acc,
            };
            (grown, next)
        },
    );
    rule.finish(state);
    collected
}

#[cfg(test)]
mod tests;
