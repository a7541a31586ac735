//! Errors raised by the deterministic automaton layer.

use thiserror::Error;

/// Errors that can occur when inspecting an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// The alphabet is universal and its letters cannot be enumerated.
    #[error("Alphabet is unbounded and cannot be enumerated")]
    UnboundedAlphabet,
}
