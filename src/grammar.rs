//! Grammar expansion for L-System rewriting.
//!
//! The engine is a plain ordered string-substitution system: an axiom is
//! rewritten pass by pass, each pass applying every [`Rule`] in declaration
//! order as a literal (non-regex) global replace. This is deliberately not a
//! parallel derivation — within one pass, each rule sees the output of the
//! rules before it.

use serde::{Deserialize, Serialize};

/// Recorded expansion steps are truncated to this many characters.
///
/// Only the *recorded* history is bounded; the untruncated string always
/// carries forward into the next pass, so truncation never changes the
/// final expansion.
pub const STEP_RECORD_LIMIT: usize = 512;

/// A single rewrite rule: every occurrence of `from` becomes `to`.
///
/// Rules with an empty `from` are skipped during expansion, so a
/// half-authored rule never stalls an interactive editing session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Literal pattern to search for (case-sensitive).
    pub from: String,

    /// Replacement text. May be empty (erasure rule).
    pub to: String,
}

impl Rule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The result of expanding an axiom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    /// The final, untruncated symbol string after all passes.
    pub symbols: String,

    /// One entry per pass, each truncated to [`STEP_RECORD_LIMIT`] characters.
    pub steps: Vec<String>,
}

/// Expands `axiom` through `rules` for `iterations` passes.
///
/// Each pass applies every rule in order as a literal global replace
/// (left-to-right, non-overlapping). Zero iterations returns the axiom
/// unchanged with an empty step history. There is no cycle detection;
/// the iteration count is the only bound on growth.
pub fn expand(axiom: &str, rules: &[Rule], iterations: u32) -> Expansion {
    let mut symbols = axiom.to_owned();
    let mut steps = Vec::with_capacity(iterations as usize);

    for _ in 0..iterations {
        for rule in rules {
            if rule.from.is_empty() {
                continue;
            }
            symbols = symbols.replace(&rule.from, &rule.to);
        }
        steps.push(truncate_step(&symbols));
    }

    Expansion { symbols, steps }
}

/// Clips a step to its first [`STEP_RECORD_LIMIT`] characters (not bytes,
/// so multi-byte symbols stay intact).
fn truncate_step(symbols: &str) -> String {
    match symbols.char_indices().nth(STEP_RECORD_LIMIT) {
        Some((cutoff, _)) => symbols[..cutoff].to_owned(),
        None => symbols.to_owned(),
    }
}
