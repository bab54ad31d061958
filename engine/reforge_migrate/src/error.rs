//! Apply-phase errors.
//!
//! Nothing here ever surfaces to the author of the sources: a failing unit
//! is returned unmodified and the rest of the run proceeds.

use thiserror::Error;

/// Failure while rewriting one source unit.
///
/// Aborts that unit only — no partial mutation is published and the shared
/// accumulator is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// An occurrence classified and resolved during apply has no matching
    /// accumulator entry. The store and the tree are out of step, so the
    /// unit cannot be rewritten consistently.
    #[error("no accumulator entry for {key} in `{file}`")]
    MissingEntry { file: String, key: String },
}
