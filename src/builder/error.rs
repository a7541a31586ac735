//! Build errors for automaton builders.

use thiserror::Error;

/// Errors that can occur when building automata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStart,

    #[error("Labeling function not specified. Call .label(f)")]
    MissingLabel,

    #[error("Transition function not specified. Call .transition(f)")]
    MissingTransition,

    #[error("Environment distribution not specified. Call .env_dist(env)")]
    MissingEnvDist,

    #[error("Environment alphabet not specified. Call .env_inputs(alphabet)")]
    MissingEnvInputs,

    #[error("Output alphabet not specified. Call .outputs(alphabet)")]
    MissingOutputs,
}
