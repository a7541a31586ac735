//! Errors for probabilistic automata.

use crate::core::AutomatonError;
use crate::dist::SampleError;
use thiserror::Error;

/// Errors that can occur when constructing or simulating a PDFA.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PdfaError {
    /// The wrapped automaton's alphabet cannot be split into system and
    /// environment coordinates.
    #[error("Malformed product alphabet: {reason}")]
    MalformedAlphabet { reason: String },

    /// The environment distribution for a step could not be sampled.
    #[error("Environment sampling failed: {0}")]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
