//! The probabilistic automaton and its transition algebra.

use super::error::PdfaError;
use super::simulation::Simulation;
use crate::core::{Alphabet, AutomatonError, Dfa, Letter, Memo, State};
use crate::dist::{Distribution, EnvDist};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::sync::Arc;

/// A deterministic automaton over a product alphabet whose second coordinate
/// is chosen by a state-indexed stationary distribution.
///
/// Each letter of the wrapped [`Dfa`] is a pair `(action, env_action)`. The
/// caller picks the action; the environment letter is drawn from
/// `env_dist(state, action)`. This turns the deterministic transition
/// function into a stochastic transition relation between states.
///
/// A `Pdfa` is an immutable value. Cloning it is cheap and shares the
/// wrapped functions and caches.
///
/// # Example
///
/// ```rust
/// use probabilistic_automata::builder::PdfaBuilder;
/// use probabilistic_automata::core::Alphabet;
/// use probabilistic_automata::dist::EnvDist;
///
/// // A walker on {0, 1, 2} that tries to move right but slips half the time.
/// let walker = PdfaBuilder::new()
///     .start(0u8)
///     .inputs(Alphabet::singleton("step"))
///     .env_inputs(["ok", "slip"].into_iter().collect())
///     .outputs(Alphabet::boolean())
///     .label(|s: &u8| *s == 2)
///     .transition(|s: &u8, (_, e): &(&'static str, &'static str)| {
///         if *e == "ok" { (s + 1).min(2) } else { *s }
///     })
///     .env_dist(EnvDist::new(|_: &u8, _: &&str| vec![("ok", 0.5), ("slip", 0.5)]))
///     .build()
///     .unwrap();
///
/// let probs = walker.transition_probs(&0, &"step");
/// assert_eq!(probs[&1], 0.5);
/// assert_eq!(walker.prob(&0, &0, &"step"), 0.5);
/// assert_eq!(walker.states().unwrap().len(), 3);
/// ```
pub struct Pdfa<S: State, A: Letter, E: Letter, O: Letter> {
    dfa: Dfa<S, (A, E), O>,
    inputs: Alphabet<A>,
    env_inputs: Alphabet<E>,
    env_dist: EnvDist<S, A, E>,
    support: Memo<(S, A), IndexSet<S>>,
}

impl<S: State, A: Letter, E: Letter, O: Letter> Pdfa<S, A, E, O> {
    /// Wrap an automaton whose letters are `(action, env_action)` pairs.
    ///
    /// The system and environment alphabets are the coordinate projections
    /// of the automaton's alphabet. Fails with
    /// [`PdfaError::MalformedAlphabet`] when the alphabet is universal and
    /// therefore cannot be split into coordinates.
    pub fn new(dfa: Dfa<S, (A, E), O>, env_dist: EnvDist<S, A, E>) -> Result<Self, PdfaError> {
        let (inputs, env_inputs) =
            dfa.inputs()
                .project()
                .map_err(|err| PdfaError::MalformedAlphabet {
                    reason: format!("cannot split alphabet into (action, env_action): {err}"),
                })?;
        Ok(Self::from_factors(dfa, inputs, env_inputs, env_dist))
    }

    /// Assemble a PDFA whose alphabet factors are already known.
    pub(crate) fn from_factors(
        dfa: Dfa<S, (A, E), O>,
        inputs: Alphabet<A>,
        env_inputs: Alphabet<E>,
        env_dist: EnvDist<S, A, E>,
    ) -> Self {
        Self {
            dfa,
            inputs,
            env_inputs,
            env_dist,
            support: Memo::new(),
        }
    }

    /// The wrapped deterministic automaton.
    pub fn dfa(&self) -> &Dfa<S, (A, E), O> {
        &self.dfa
    }

    /// System actions (first coordinate of the alphabet).
    pub fn inputs(&self) -> &Alphabet<A> {
        &self.inputs
    }

    /// Environment actions (second coordinate of the alphabet).
    pub fn env_inputs(&self) -> &Alphabet<E> {
        &self.env_inputs
    }

    /// Output alphabet.
    pub fn outputs(&self) -> &Alphabet<O> {
        self.dfa.outputs()
    }

    /// Start state.
    pub fn start(&self) -> &S {
        self.dfa.start()
    }

    /// Output of a state.
    pub fn label(&self, state: &S) -> O {
        self.dfa.label(state)
    }

    /// The environment policy choosing the second coordinate.
    pub fn env_dist(&self) -> &EnvDist<S, A, E> {
        &self.env_dist
    }

    /// Environment response to `action` in `state`.
    pub fn env_response(&self, state: &S, action: &A) -> Arc<Distribution<E>> {
        self.env_dist.query(state, action)
    }

    /// Deterministic successor for a fixed environment letter.
    pub fn transition(&self, state: &S, action: &A, env_action: &E) -> S {
        self.dfa.transition(state, &(action.clone(), env_action.clone()))
    }

    /// States reachable from the start state.
    pub fn states(&self) -> Result<IndexSet<S>, AutomatonError> {
        self.dfa.states()
    }

    /// Destination and weight for every environment letter in
    /// `env_dist(state, action)`, in distribution order.
    fn successors(&self, state: &S, action: &A) -> Vec<(S, f64)> {
        self.env_response(state, action)
            .items()
            .map(|(env_action, weight)| (self.transition(state, action, env_action), weight))
            .collect()
    }

    /// Distribution over successor states for `action` taken in `state`.
    ///
    /// Weights of environment letters that lead to the same state are
    /// summed. The total mass equals the total weight of the environment
    /// distribution, so the result is normalized only if that is.
    pub fn transition_probs(&self, state: &S, action: &A) -> IndexMap<S, f64> {
        let mut probs = IndexMap::new();
        for (end, weight) in self.successors(state, action) {
            *probs.entry(end).or_insert(0.0) += weight;
        }
        probs
    }

    /// States reachable in one step from `state` under `action`.
    ///
    /// Includes destinations reached only through zero-weight environment
    /// letters. Memoized per `(state, action)`.
    pub fn support(&self, state: &S, action: &A) -> Arc<IndexSet<S>> {
        self.support
            .get_or_insert_with((state.clone(), action.clone()), |(state, action)| {
                self.transition_probs(state, action).into_keys().collect()
            })
    }

    /// Probability of moving from `start` to `end` under `action`.
    pub fn prob(&self, start: &S, end: &S, action: &A) -> f64 {
        self.successors(start, action)
            .into_iter()
            .filter(|(s, _)| s == end)
            .map(|(_, weight)| weight)
            .sum()
    }

    /// Start an interactive simulation.
    ///
    /// The simulation begins at `start` (or the automaton's start state) and
    /// owns a private generator seeded with `seed`, or from OS entropy when
    /// no seed is given.
    pub fn run(&self, start: Option<S>, seed: Option<u64>) -> Simulation<S, A, E, O> {
        let start = start.unwrap_or_else(|| self.start().clone());
        Simulation::new(self.clone(), start, seed)
    }
}

impl<S: State, A: Letter, E: Letter, O: Letter> Clone for Pdfa<S, A, E, O> {
    fn clone(&self) -> Self {
        Self {
            dfa: self.dfa.clone(),
            inputs: self.inputs.clone(),
            env_inputs: self.env_inputs.clone(),
            env_dist: self.env_dist.clone(),
            support: self.support.clone(),
        }
    }
}

impl<S: State, A: Letter, E: Letter, O: Letter> fmt::Debug for Pdfa<S, A, E, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pdfa")
            .field("start", self.start())
            .field("inputs", &self.inputs)
            .field("env_inputs", &self.env_inputs)
            .field("outputs", self.outputs())
            .finish_non_exhaustive()
    }
}
