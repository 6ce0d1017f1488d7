//! Tab completion over command names.
//!
//! Matching is a case-sensitive prefix test against the lower-case registry
//! names, so `SU` completes to nothing.

use crate::commands::definitions::command_names;

/// Header rendered above a candidate listing.
pub const CANDIDATES_HEADER: &str = "possible commands:";

/// Outcome of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing to do.
    Unchanged,
    /// Exactly one match: replace the input with it.
    Replace(&'static str),
    /// Several matches, in registry order.
    Candidates(Vec<&'static str>),
}

/// Completes `partial` against the command registry.
pub fn complete(partial: &str) -> Completion {
    let prefix = partial.trim();
    if prefix.is_empty() {
        return Completion::Unchanged;
    }

    let matches: Vec<_> = command_names()
        .filter(|name| name.starts_with(prefix))
        .collect();

    match matches.as_slice() {
        [] => Completion::Unchanged,
        [only] => Completion::Replace(*only),
        _ => Completion::Candidates(matches),
    }
}

/// Renders a candidate listing: header, then one indented line per name.
pub fn candidate_lines(candidates: &[&str]) -> Vec<String> {
    std::iter::once(CANDIDATES_HEADER.to_string())
        .chain(candidates.iter().map(|name| format!("  {name}")))
        .collect()
}
