//! Deterministic automata with a labeling function.

use super::alphabet::Alphabet;
use super::error::AutomatonError;
use super::state::{Letter, State};
use crate::builder::DfaBuilder;
use indexmap::IndexSet;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Shared labeling function `State -> Output`.
pub type LabelFn<S, O> = Arc<dyn Fn(&S) -> O + Send + Sync>;

/// Shared transition function `State x Letter -> State`.
pub type TransitionFn<S, L> = Arc<dyn Fn(&S, &L) -> S + Send + Sync>;

/// A deterministic automaton.
///
/// The automaton is an immutable value: a start state, a labeling function,
/// a total transition function and the input and output alphabets. Derived
/// automata are produced with [`evolve`](Self::evolve), which never touches
/// the original.
///
/// # Example
///
/// ```rust
/// use probabilistic_automata::builder::DfaBuilder;
/// use probabilistic_automata::core::Alphabet;
///
/// // Counts 'a' modulo 3, accepting when the count is 0.
/// let counter = DfaBuilder::new()
///     .start(0u8)
///     .inputs("ab".chars().collect())
///     .outputs(Alphabet::boolean())
///     .label(|s: &u8| *s == 0)
///     .transition(|s: &u8, c: &char| if *c == 'a' { (s + 1) % 3 } else { *s })
///     .build()
///     .unwrap();
///
/// assert_eq!(counter.walk(&counter.start().clone(), "aab".chars()), 2);
/// assert_eq!(counter.states().unwrap().len(), 3);
/// ```
pub struct Dfa<S: State, L: Letter, O: Letter> {
    pub(crate) start: S,
    pub(crate) label: LabelFn<S, O>,
    pub(crate) transition: TransitionFn<S, L>,
    pub(crate) inputs: Alphabet<L>,
    pub(crate) outputs: Alphabet<O>,
}

impl<S: State, L: Letter, O: Letter> Dfa<S, L, O> {
    /// Start state.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Input alphabet.
    pub fn inputs(&self) -> &Alphabet<L> {
        &self.inputs
    }

    /// Output alphabet.
    pub fn outputs(&self) -> &Alphabet<O> {
        &self.outputs
    }

    /// Label (output) of a state.
    pub fn label(&self, state: &S) -> O {
        (self.label)(state)
    }

    /// Apply one letter.
    pub fn transition(&self, state: &S, letter: &L) -> S {
        (self.transition)(state, letter)
    }

    /// Apply a word letter by letter, returning the final state.
    pub fn walk<I>(&self, start: &S, word: I) -> S
    where
        I: IntoIterator<Item = L>,
    {
        word.into_iter()
            .fold(start.clone(), |state, letter| self.transition(&state, &letter))
    }

    /// Sequence of labels observed while reading `word` from the start
    /// state, including the label of the start state itself.
    pub fn transduce<I>(&self, word: I) -> Vec<O>
    where
        I: IntoIterator<Item = L>,
    {
        let mut state = self.start.clone();
        let mut labels = vec![self.label(&state)];
        for letter in word {
            state = self.transition(&state, &letter);
            labels.push(self.label(&state));
        }
        labels
    }

    /// States reachable from the start state by any word.
    ///
    /// Breadth-first search in alphabet order, so the result is ordered by
    /// discovery. Fails if the input alphabet is universal.
    pub fn states(&self) -> Result<IndexSet<S>, AutomatonError> {
        let letters = self.inputs.enumerate()?;

        let mut reached = IndexSet::from([self.start.clone()]);
        let mut frontier = VecDeque::from([self.start.clone()]);
        while let Some(state) = frontier.pop_front() {
            for letter in letters {
                let next = self.transition(&state, letter);
                if reached.insert(next.clone()) {
                    frontier.push_back(next);
                }
            }
        }
        Ok(reached)
    }

    /// New automaton with the same start state, labels and outputs, but over
    /// a different input alphabet and transition function.
    ///
    /// This is how automata over one alphabet are re-expressed over another
    /// (for example over a product alphabet); `self` is left untouched.
    pub fn with_inputs<M, F>(&self, inputs: Alphabet<M>, transition: F) -> Dfa<S, M, O>
    where
        M: Letter,
        F: Fn(&S, &M) -> S + Send + Sync + 'static,
    {
        Dfa {
            start: self.start.clone(),
            label: Arc::clone(&self.label),
            transition: Arc::new(transition),
            inputs,
            outputs: self.outputs.clone(),
        }
    }

    /// Builder pre-populated with this automaton's parts.
    ///
    /// Replacing any part on the builder and calling `build` yields a new
    /// automaton; `self` is left untouched. Functions are shared, not copied.
    pub fn evolve(&self) -> DfaBuilder<S, L, O> {
        DfaBuilder::from_parts(
            self.start.clone(),
            Arc::clone(&self.label),
            Arc::clone(&self.transition),
            self.inputs.clone(),
            self.outputs.clone(),
        )
    }
}

impl<S: State, L: Letter, O: Letter> Clone for Dfa<S, L, O> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            label: Arc::clone(&self.label),
            transition: Arc::clone(&self.transition),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
        }
    }
}

impl<S: State, L: Letter, O: Letter> fmt::Debug for Dfa<S, L, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfa")
            .field("start", &self.start)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .finish_non_exhaustive()
    }
}
