//! Record of the steps taken by a simulation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One step of a simulation.
///
/// The caller supplied `action`, the environment answered with
/// `env_action`, and the automaton moved from `from` to `to`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step<S, A, E> {
    pub from: S,
    pub action: A,
    pub env_action: E,
    pub to: S,
    /// When the step was taken
    pub timestamp: DateTime<Utc>,
}

/// Ordered record of simulation steps.
///
/// `record` consumes the trace and returns it with the step appended, so a
/// trace is only ever extended, never edited.
///
/// # Example
///
/// ```rust
/// use probabilistic_automata::pdfa::{Step, Trace};
/// use chrono::Utc;
///
/// let trace = Trace::new()
///     .record(Step { from: 0, action: 'a', env_action: "L", to: 1, timestamp: Utc::now() })
///     .record(Step { from: 1, action: 'a', env_action: "R", to: 1, timestamp: Utc::now() });
///
/// assert_eq!(trace.path(), vec![&0, &1, &1]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace<S, A, E> {
    steps: Vec<Step<S, A, E>>,
}

impl<S, A, E> Default for Trace<S, A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A, E> Trace<S, A, E> {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn record(mut self, step: Step<S, A, E>) -> Self {
        self.steps.push(step);
        self
    }

    /// States visited: the first step's source, then every destination.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        path.extend(self.steps.iter().map(|step| &step.to));
        path
    }

    /// Environment letters drawn, in order.
    pub fn env_actions(&self) -> Vec<&E> {
        self.steps.iter().map(|step| &step.env_action).collect()
    }

    /// Wall-clock time between the first and last step.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.steps.first()?, self.steps.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Recorded steps, oldest first.
    pub fn steps(&self) -> &[Step<S, A, E>] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no step has been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
