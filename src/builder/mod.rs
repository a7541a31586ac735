//! Builder API for constructing automata.
//!
//! This module provides fluent builders for deterministic and probabilistic
//! automata, the [`pdfa`] entry point with its defaults, and the [`lift`]
//! and [`randomize`] conversions from deterministic automata.

pub mod deterministic;
pub mod error;
pub mod macros;
pub mod probabilistic;

pub use deterministic::DfaBuilder;
pub use error::BuildError;
pub use probabilistic::PdfaBuilder;

use crate::core::{Alphabet, Dfa, Letter, State};
use crate::dist::{uniform, EnvDist};
use crate::pdfa::{Pdfa, PdfaError};

/// Main entry point for constructing a probabilistic automaton.
///
/// Returns a [`PdfaBuilder`] pre-filled with the defaults:
/// - outputs `{false, true}` (boolean acceptance)
/// - environment alphabet `{()}` (no real environment coordinate)
/// - system alphabet [`Alphabet::Universal`]
///
/// Override the system alphabet or outputs on the returned builder, then call
/// `build`. The environment and output letter types are part of the return
/// type, so their defaults fix them to `()` and `bool`; a different
/// environment alphabet would change the type of `transition` and `env_dist`
/// as well. For a real environment alphabet or other output types, use
/// [`PdfaBuilder::new`] directly.
///
/// # Example
///
/// ```
/// use probabilistic_automata::builder::pdfa;
/// use probabilistic_automata::dist::uniform;
///
/// let machine = pdfa(
///     0u8,
///     |s: &u8| *s >= 2,
///     |s: &u8, (a, _): &(u8, ())| s.saturating_add(*a),
///     uniform([()]),
/// )
/// .inputs([0, 1].into_iter().collect())
/// .build()
/// .unwrap();
///
/// assert_eq!(machine.prob(&0, &1, &1), 1.0);
/// assert!(machine.outputs().contains(&true));
/// ```
pub fn pdfa<S, A, F, T>(
    start: S,
    label: F,
    transition: T,
    env_dist: EnvDist<S, A, ()>,
) -> PdfaBuilder<S, A, (), bool>
where
    S: State,
    A: Letter,
    F: Fn(&S) -> bool + Send + Sync + 'static,
    T: Fn(&S, &(A, ())) -> S + Send + Sync + 'static,
{
    PdfaBuilder::new()
        .start(start)
        .label(label)
        .transition(transition)
        .env_dist(env_dist)
        .inputs(Alphabet::Universal)
        .env_inputs(Alphabet::singleton(()))
        .outputs(Alphabet::boolean())
}

/// Lift a deterministic automaton into a PDFA with no stochasticity.
///
/// The environment alphabet is `{()}` and always chosen with full weight;
/// the transition ignores the environment coordinate. For every state and
/// action, `transition_probs` is a point mass on the original successor.
///
/// # Example
///
/// ```
/// use probabilistic_automata::builder::{lift, DfaBuilder};
///
/// let counter = DfaBuilder::new()
///     .start(0u8)
///     .inputs("ab".chars().collect())
///     .label(|s: &u8| *s)
///     .transition(|s: &u8, c: &char| if *c == 'a' { (s + 1) % 4 } else { *s })
///     .build()
///     .unwrap();
///
/// let lifted = lift(&counter);
/// assert_eq!(lifted.prob(&3, &0, &'a'), 1.0);
/// assert_eq!(lifted.support(&1, &'b').len(), 1);
/// ```
pub fn lift<S, L, O>(dyn_: &Dfa<S, L, O>) -> Pdfa<S, L, (), O>
where
    S: State,
    L: Letter,
    O: Letter,
{
    let env_inputs = Alphabet::singleton(());
    let inner = dyn_.clone();
    let dfa = dyn_.with_inputs(
        Alphabet::product(dyn_.inputs(), &env_inputs),
        move |state: &S, (action, _): &(L, ())| inner.transition(state, action),
    );

    log::debug!("lifted deterministic automaton starting at {:?}", dyn_.start());
    Pdfa::from_factors(dfa, dyn_.inputs().clone(), env_inputs, uniform([()]))
}

/// Turn a deterministic automaton into a PDFA whose inputs are applied
/// uniformly at random.
///
/// The roles of the alphabets are swapped: the system alphabet becomes
/// `{()}` and the original input alphabet becomes the environment alphabet,
/// sampled uniformly on every step. Fails with
/// [`AutomatonError::UnboundedAlphabet`](crate::core::AutomatonError) when
/// the original alphabet is universal, since no uniform distribution over it
/// exists.
///
/// # Example
///
/// ```
/// use probabilistic_automata::builder::{randomize, DfaBuilder};
///
/// let coin = DfaBuilder::new()
///     .start('?')
///     .inputs("HT".chars().collect())
///     .label(|s: &char| *s == 'H')
///     .transition(|_: &char, c: &char| *c)
///     .build()
///     .unwrap();
///
/// let flipper = randomize(&coin).unwrap();
/// assert_eq!(flipper.prob(&'?', &'H', &()), 0.5);
/// assert_eq!(flipper.prob(&'?', &'T', &()), 0.5);
/// ```
pub fn randomize<S, L, O>(dyn_: &Dfa<S, L, O>) -> Result<Pdfa<S, (), L, O>, PdfaError>
where
    S: State,
    L: Letter,
    O: Letter,
{
    let letters = dyn_.inputs().enumerate()?;
    let env_dist = uniform(letters.iter().cloned());

    let inputs = Alphabet::singleton(());
    let inner = dyn_.clone();
    let dfa = dyn_.with_inputs(
        Alphabet::product(&inputs, dyn_.inputs()),
        move |state: &S, (_, env_action): &((), L)| inner.transition(state, env_action),
    );

    log::debug!(
        "randomized deterministic automaton over {} letters",
        letters.len()
    );
    Ok(Pdfa::from_factors(
        dfa,
        inputs,
        dyn_.inputs().clone(),
        env_dist,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AutomatonError;
    use indexmap::IndexMap;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Room {
        Hall,
        Kitchen,
        Garden,
    }

    fn house() -> Dfa<Room, char, bool> {
        DfaBuilder::new()
            .start(Room::Hall)
            .inputs("nsw".chars().collect())
            .outputs(Alphabet::boolean())
            .label(|r: &Room| matches!(r, Room::Garden))
            .transition(|r: &Room, c: &char| match (r, c) {
                (Room::Hall, 'n') => Room::Kitchen,
                (Room::Hall, 'w') => Room::Garden,
                (Room::Kitchen, 's') => Room::Hall,
                (Room::Garden, 's') => Room::Hall,
                (r, _) => r.clone(),
            })
            .build()
            .unwrap()
    }

    #[test]
    fn pdfa_fills_defaults() {
        let machine = pdfa(
            0u8,
            |s: &u8| *s == 0,
            |s: &u8, (a, _): &(bool, ())| if *a { 1 } else { *s },
            uniform([()]),
        )
        .build()
        .unwrap();

        assert_eq!(machine.outputs(), &Alphabet::boolean());
        assert_eq!(machine.env_inputs(), &Alphabet::singleton(()));
        assert!(machine.inputs().is_universal());
        assert_eq!(machine.prob(&0, &1, &true), 1.0);
    }

    #[test]
    fn pdfa_defaults_can_be_overridden() {
        let machine = pdfa(
            0u8,
            |_: &u8| true,
            |s: &u8, _: &(char, ())| *s,
            uniform([()]),
        )
        .inputs("ab".chars().collect())
        .outputs(Alphabet::singleton(true))
        .build()
        .unwrap();

        assert_eq!(machine.inputs().len(), Some(2));
        assert_eq!(machine.outputs().len(), Some(1));
        assert_eq!(machine.states().unwrap().len(), 1);
    }

    #[test]
    fn lift_mirrors_transitions() {
        let dyn_ = house();
        let lifted = lift(&dyn_);

        for state in dyn_.states().unwrap() {
            for action in "nsw".chars() {
                let expected: IndexMap<Room, f64> =
                    IndexMap::from([(dyn_.transition(&state, &action), 1.0)]);
                assert_eq!(lifted.transition_probs(&state, &action), expected);
            }
        }
    }

    #[test]
    fn lift_preserves_structure() {
        let dyn_ = house();
        let lifted = lift(&dyn_);

        assert_eq!(lifted.start(), dyn_.start());
        assert_eq!(lifted.inputs(), dyn_.inputs());
        assert_eq!(lifted.env_inputs(), &Alphabet::singleton(()));
        assert_eq!(lifted.outputs(), dyn_.outputs());
        assert_eq!(lifted.states().unwrap(), dyn_.states().unwrap());
        assert!(lifted.label(&Room::Garden));
    }

    #[test]
    fn lift_leaves_original_untouched() {
        let dyn_ = house();
        let _lifted = lift(&dyn_);

        assert_eq!(dyn_.inputs().len(), Some(3));
        assert_eq!(dyn_.transition(&Room::Hall, &'n'), Room::Kitchen);
    }

    #[test]
    fn randomize_spreads_mass_uniformly() {
        let dyn_ = house();
        let random = randomize(&dyn_).unwrap();

        // From the hall, 'n' and 'w' each lead somewhere new and 's' stays.
        let probs = random.transition_probs(&Room::Hall, &());
        let third = 1.0 / 3.0;
        assert!((probs[&Room::Kitchen] - third).abs() < 1e-12);
        assert!((probs[&Room::Garden] - third).abs() < 1e-12);
        assert!((probs[&Room::Hall] - third).abs() < 1e-12);

        // From the kitchen only 's' moves; 'n' and 'w' collapse onto staying.
        let probs = random.transition_probs(&Room::Kitchen, &());
        assert!((probs[&Room::Kitchen] - 2.0 * third).abs() < 1e-12);
        assert!((probs[&Room::Hall] - third).abs() < 1e-12);
    }

    #[test]
    fn randomize_swaps_alphabet_roles() {
        let dyn_ = house();
        let random = randomize(&dyn_).unwrap();

        assert_eq!(random.inputs(), &Alphabet::singleton(()));
        assert_eq!(random.env_inputs(), dyn_.inputs());
        assert_eq!(random.states().unwrap(), dyn_.states().unwrap());
    }

    #[test]
    fn randomize_rejects_universal_inputs() {
        let dyn_ = house().evolve().inputs(Alphabet::Universal).build().unwrap();
        let result = randomize(&dyn_);

        assert!(matches!(
            result,
            Err(PdfaError::Automaton(AutomatonError::UnboundedAlphabet))
        ));
    }

    #[test]
    fn randomized_simulation_only_visits_reachable_rooms() {
        let random = randomize(&house()).unwrap();
        let reachable = random.states().unwrap();

        let mut sim = random.run(None, Some(5));
        for _ in 0..50 {
            let room = sim.advance(()).unwrap();
            assert!(reachable.contains(&room));
        }
    }
}
