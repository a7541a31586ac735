//! Builder for constructing deterministic automata.

use crate::builder::error::BuildError;
use crate::core::{Alphabet, Dfa, LabelFn, Letter, State, TransitionFn};
use std::sync::Arc;

/// Builder for constructing deterministic automata with a fluent API.
///
/// Start state, labeling function and transition function are required.
/// Input and output alphabets default to [`Alphabet::Universal`].
pub struct DfaBuilder<S: State, L: Letter, O: Letter> {
    start: Option<S>,
    label: Option<LabelFn<S, O>>,
    transition: Option<TransitionFn<S, L>>,
    inputs: Alphabet<L>,
    outputs: Alphabet<O>,
}

impl<S: State, L: Letter, O: Letter> DfaBuilder<S, L, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            start: None,
            label: None,
            transition: None,
            inputs: Alphabet::Universal,
            outputs: Alphabet::Universal,
        }
    }

    /// Builder holding every part of an existing automaton.
    pub(crate) fn from_parts(
        start: S,
        label: LabelFn<S, O>,
        transition: TransitionFn<S, L>,
        inputs: Alphabet<L>,
        outputs: Alphabet<O>,
    ) -> Self {
        Self {
            start: Some(start),
            label: Some(label),
            transition: Some(transition),
            inputs,
            outputs,
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

    /// Set the transition function (required).
    pub fn transition<F>(mut self, transition: F) -> Self
    where
        F: Fn(&S, &L) -> S + Send + Sync + 'static,
    {
        self.transition = Some(Arc::new(transition));
        self
    }

    /// Set the input alphabet.
    pub fn inputs(mut self, inputs: Alphabet<L>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Set the output alphabet.
    pub fn outputs(mut self, outputs: Alphabet<O>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Build the automaton.
    /// Returns an error if required parts are missing.
    pub fn build(self) -> Result<Dfa<S, L, O>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStart)?;
        let label = self.label.ok_or(BuildError::MissingLabel)?;
        let transition = self.transition.ok_or(BuildError::MissingTransition)?;

        Ok(Dfa {
            start,
            label,
            transition,
            inputs: self.inputs,
            outputs: self.outputs,
        })
    }
}

impl<S: State, L: Letter, O: Letter> Default for DfaBuilder<S, L, O> {
    fn default() -> Self {
        Self::new()
    }
}
