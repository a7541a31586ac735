//! Builder for constructing probabilistic automata.

use crate::builder::error::BuildError;
use crate::core::{Alphabet, Dfa, LabelFn, Letter, State, TransitionFn};
use crate::dist::EnvDist;
use crate::pdfa::Pdfa;
use std::sync::Arc;

/// Builder for constructing a [`Pdfa`] from primitive functions.
///
/// The underlying automaton reads `(action, env_action)` pairs over the
/// product of the system and environment alphabets. The system alphabet
/// defaults to [`Alphabet::Universal`]; everything else is required. Use
/// [`pdfa`](crate::builder::pdfa()) for a builder pre-filled with boolean
/// outputs and a degenerate environment.
pub struct PdfaBuilder<S: State, A: Letter, E: Letter, O: Letter> {
    start: Option<S>,
    label: Option<LabelFn<S, O>>,
    transition: Option<TransitionFn<S, (A, E)>>,
    env_dist: Option<EnvDist<S, A, E>>,
    inputs: Alphabet<A>,
    env_inputs: Option<Alphabet<E>>,
    outputs: Option<Alphabet<O>>,
}

impl<S: State, A: Letter, E: Letter, O: Letter> PdfaBuilder<S, A, E, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            start: None,
            label: None,
            transition: None,
            env_dist: None,
            inputs: Alphabet::Universal,
            env_inputs: None,
            outputs: None,
        }
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Set the labeling function (required).
    pub fn label<F>(mut self, label: F) -> Self
    where
        F: Fn(&S) -> O + Send + Sync + 'static,
    {
        self.label = Some(Arc::new(label));
        self
    }

    /// Set the transition function over `(action, env_action)` pairs
    /// (required).
    pub fn transition<F>(mut self, transition: F) -> Self
    where
        F: Fn(&S, &(A, E)) -> S + Send + Sync + 'static,
    {
        self.transition = Some(Arc::new(transition));
        self
    }

    /// Set the environment distribution (required).
    pub fn env_dist(mut self, env_dist: EnvDist<S, A, E>) -> Self {
        self.env_dist = Some(env_dist);
        self
    }

    /// Set the system alphabet.
    pub fn inputs(mut self, inputs: Alphabet<A>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Set the environment alphabet (required).
    pub fn env_inputs(mut self, env_inputs: Alphabet<E>) -> Self {
        self.env_inputs = Some(env_inputs);
        self
    }

    /// Set the output alphabet (required).
    pub fn outputs(mut self, outputs: Alphabet<O>) -> Self {
        self.outputs = Some(outputs);
        self
    }

    /// Build the automaton.
    /// Returns an error if required parts are missing.
    pub fn build(self) -> Result<Pdfa<S, A, E, O>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStart)?;
        let label = self.label.ok_or(BuildError::MissingLabel)?;
        let transition = self.transition.ok_or(BuildError::MissingTransition)?;
        let env_dist = self.env_dist.ok_or(BuildError::MissingEnvDist)?;
        let env_inputs = self.env_inputs.ok_or(BuildError::MissingEnvInputs)?;
        let outputs = self.outputs.ok_or(BuildError::MissingOutputs)?;

        let dfa = Dfa {
            start,
            label,
            transition,
            inputs: Alphabet::product(&self.inputs, &env_inputs),
            outputs,
        };

        Ok(Pdfa::from_factors(dfa, self.inputs, env_inputs, env_dist))
    }
}

impl<S: State, A: Letter, E: Letter, O: Letter> Default for PdfaBuilder<S, A, E, O> {
    fn default() -> Self {
        Self::new()
    }
}
