//! Interactive, step-at-a-time simulation of a PDFA.

use super::error::PdfaError;
use super::machine::Pdfa;
use super::trace::{Step, Trace};
use crate::core::{Letter, State};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A running simulation.
///
/// The caller drives the simulation one system action at a time with
/// [`advance`](Self::advance). Each call samples an environment letter from
/// the automaton's environment distribution for the current state, applies
/// the transition, and returns the new current state. The simulation never
/// stops on its own.
///
/// Each simulation owns its random generator, so simulations seeded with
/// the same value and fed the same actions visit the same states,
/// regardless of what other simulations do in between.
///
/// Only the current state is kept by default. Call
/// [`with_trace`](Self::with_trace) to record every step in a [`Trace`];
/// [`take_trace`](Self::take_trace) hands the recorded steps back and starts
/// a fresh trace.
///
/// # Example
///
/// ```rust
/// use probabilistic_automata::builder::{lift, DfaBuilder};
/// use probabilistic_automata::core::Alphabet;
///
/// let toggle = DfaBuilder::new()
///     .start(false)
///     .inputs(Alphabet::singleton('t'))
///     .outputs(Alphabet::boolean())
///     .label(|s: &bool| *s)
///     .transition(|s: &bool, _: &char| !*s)
///     .build()
///     .unwrap();
///
/// let mut sim = lift(&toggle).run(None, Some(0)).with_trace();
/// assert_eq!(sim.advance('t').unwrap(), true);
/// assert_eq!(sim.advance('t').unwrap(), false);
/// assert_eq!(sim.trace().len(), 2);
/// ```
pub struct Simulation<S: State, A: Letter, E: Letter, O: Letter> {
    machine: Pdfa<S, A, E, O>,
    current: S,
    rng: StdRng,
    recording: bool,
    trace: Trace<S, A, E>,
}

impl<S: State, A: Letter, E: Letter, O: Letter> Simulation<S, A, E, O> {
    /// Start a simulation of `machine` at `start`.
    pub(crate) fn new(machine: Pdfa<S, A, E, O>, start: S, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        log::debug!("starting simulation at {start:?} (seed: {seed:?})");
        Self {
            machine,
            current: start,
            rng,
            recording: false,
            trace: Trace::new(),
        }
    }

    /// Record every subsequent step in the trace.
    pub fn with_trace(mut self) -> Self {
        self.recording = true;
        self
    }

    /// Turn step recording on or off. Steps already recorded are kept.
    pub fn record_trace(&mut self, on: bool) {
        self.recording = on;
    }

    /// Whether steps are currently being recorded.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Current state.
    pub fn current(&self) -> &S {
        &self.current
    }

    /// The automaton being simulated.
    pub fn pdfa(&self) -> &Pdfa<S, A, E, O> {
        &self.machine
    }

    /// Steps recorded so far. Empty unless recording is enabled.
    pub fn trace(&self) -> &Trace<S, A, E> {
        &self.trace
    }

    /// Take the recorded steps, leaving an empty trace behind.
    pub fn take_trace(&mut self) -> Trace<S, A, E> {
        std::mem::take(&mut self.trace)
    }

    /// Apply one system action and return the resulting state.
    ///
    /// If the environment distribution for `(current, action)` cannot be
    /// sampled, the error is returned and the current state is unchanged.
    pub fn advance(&mut self, action: A) -> Result<S, PdfaError> {
        let env_action = self
            .machine
            .env_response(&self.current, &action)
            .sample(&mut self.rng)?;
        let next = self.machine.transition(&self.current, &action, &env_action);

        log::trace!(
            "{:?} --({:?}, {:?})--> {:?}",
            self.current,
            action,
            env_action,
            next
        );

        let from = std::mem::replace(&mut self.current, next.clone());
        if self.recording {
            let step = Step {
                from,
                action,
                env_action,
                to: next.clone(),
                timestamp: Utc::now(),
            };
            self.trace = std::mem::take(&mut self.trace).record(step);
        }
        Ok(next)
    }

    /// Apply a sequence of actions, returning every state reached.
    ///
    /// Stops at the first failure; states reached before it remain current
    /// (and recorded, when recording is on).
    pub fn advance_all<I>(&mut self, actions: I) -> Result<Vec<S>, PdfaError>
    where
        I: IntoIterator<Item = A>,
    {
        actions
            .into_iter()
            .map(|action| self.advance(action))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PdfaBuilder;
    use crate::core::Alphabet;
    use crate::dist::{EnvDist, SampleError};

    /// Integer walk on 0..=9: `+1` or `-1` chosen by the environment with
    /// bias depending on the action.
    fn walk() -> Pdfa<i32, char, i32, bool> {
        PdfaBuilder::new()
            .start(5)
            .inputs("ud".chars().collect())
            .env_inputs([1, -1].into_iter().collect())
            .outputs(Alphabet::boolean())
            .label(|s: &i32| *s == 9)
            .transition(|s: &i32, (_, e): &(char, i32)| (s + e).clamp(0, 9))
            .env_dist(EnvDist::new(|_: &i32, a: &char| match a {
                'u' => vec![(1, 0.7), (-1, 0.3)],
                _ => vec![(1, 0.3), (-1, 0.7)],
            }))
            .build()
            .unwrap()
    }

    #[test]
    fn starts_at_start_state() {
        let machine = walk();
        let sim = machine.run(None, Some(1));
        assert_eq!(sim.current(), &5);
        assert!(sim.trace().is_empty());
    }

    #[test]
    fn explicit_start_overrides_default() {
        let machine = walk();
        let sim = machine.run(Some(0), None);
        assert_eq!(sim.current(), &0);
    }

    #[test]
    fn advance_moves_to_a_successor() {
        let machine = walk();
        let mut sim = machine.run(None, Some(3));

        let next = sim.advance('u').unwrap();

        assert!(next == 4 || next == 6);
        assert_eq!(sim.current(), &next);
        assert!(machine.support(&5, &'u').contains(&next));
    }

    #[test]
    fn same_seed_same_states() {
        let machine = walk();
        let actions: Vec<char> = "uuduudduuudddu".chars().collect();

        let mut first = machine.run(None, Some(2024));
        let mut second = machine.run(None, Some(2024));

        let states_first = first.advance_all(actions.clone()).unwrap();
        let states_second = second.advance_all(actions).unwrap();

        assert_eq!(states_first, states_second);
    }

    #[test]
    fn interleaved_simulations_do_not_interfere() {
        let machine = walk();
        let actions: Vec<char> = "uduuduudud".chars().collect();

        let mut solo = machine.run(None, Some(99));
        let expected = solo.advance_all(actions.clone()).unwrap();

        let mut a = machine.run(None, Some(99));
        let mut noise = machine.run(None, Some(7));
        let mut interleaved = Vec::new();
        for action in actions {
            noise.advance('u').unwrap();
            interleaved.push(a.advance(action).unwrap());
            noise.advance('d').unwrap();
        }

        assert_eq!(interleaved, expected);
    }

    #[test]
    fn trace_records_every_step() {
        let machine = walk();
        let mut sim = machine.run(None, Some(11)).with_trace();
        let states = sim.advance_all("uuu".chars()).unwrap();

        let trace = sim.trace();
        assert_eq!(trace.len(), 3);
        let path: Vec<i32> = trace.path().into_iter().copied().collect();
        assert_eq!(path[0], 5);
        assert_eq!(&path[1..], states.as_slice());
        for step in trace.steps() {
            assert_eq!(step.action, 'u');
            assert_eq!(step.to, (step.from + step.env_action).clamp(0, 9));
        }
    }

    #[test]
    fn sampling_failure_leaves_state_unchanged() {
        let machine = PdfaBuilder::new()
            .start(0u8)
            .inputs("ok".chars().collect())
            .env_inputs(Alphabet::singleton(()))
            .outputs(Alphabet::boolean())
            .label(|_: &u8| false)
            .transition(|s: &u8, _: &(char, ())| s + 1)
            .env_dist(EnvDist::new(|_: &u8, a: &char| {
                if *a == 'o' {
                    vec![((), 1.0)]
                } else {
                    Vec::new()
                }
            }))
            .build()
            .unwrap();

        let mut sim = machine.run(None, Some(0)).with_trace();
        assert_eq!(sim.advance('o').unwrap(), 1);

        let err = sim.advance('k').unwrap_err();
        assert_eq!(err, PdfaError::Sample(SampleError::EmptyDistribution));
        assert_eq!(sim.current(), &1);
        assert_eq!(sim.trace().len(), 1);
    }

    #[test]
    fn untraced_simulation_keeps_no_history() {
        let machine = walk();
        let mut sim = machine.run(None, Some(8));
        assert!(!sim.is_recording());

        for step in 0..10_000 {
            let action = if step % 3 == 0 { 'd' } else { 'u' };
            sim.advance(action).unwrap();
        }

        assert!(sim.trace().is_empty());
        assert!(sim.take_trace().is_empty());
    }

    #[test]
    fn recording_can_be_toggled() {
        let machine = walk();
        let mut sim = machine.run(None, Some(4));

        sim.advance('u').unwrap();
        sim.record_trace(true);
        sim.advance_all("ud".chars()).unwrap();
        sim.record_trace(false);
        sim.advance('u').unwrap();

        assert_eq!(sim.trace().len(), 2);
        assert_eq!(sim.trace().steps()[0].action, 'u');
        assert_eq!(sim.trace().steps()[1].action, 'd');
    }

    #[test]
    fn take_trace_releases_recorded_steps() {
        let machine = walk();
        let mut sim = machine.run(None, Some(6)).with_trace();
        let states = sim.advance_all("uuuu".chars()).unwrap();

        let taken = sim.take_trace();
        assert_eq!(taken.len(), 4);
        assert_eq!(taken.steps()[3].to, states[3]);
        assert!(sim.trace().is_empty());

        sim.advance('d').unwrap();
        assert_eq!(sim.trace().len(), 1);
        assert_eq!(sim.trace().steps()[0].from, states[3]);
    }

    #[test]
    fn tracing_does_not_change_sampled_states() {
        let machine = walk();
        let actions: Vec<char> = "uduudduuud".chars().collect();

        let mut plain = machine.run(None, Some(31));
        let mut traced = machine.run(None, Some(31)).with_trace();

        assert_eq!(
            plain.advance_all(actions.clone()).unwrap(),
            traced.advance_all(actions).unwrap()
        );
    }
}
