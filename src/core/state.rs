//! Marker traits for automaton states and alphabet letters.
//!
//! States and letters are opaque values. The automaton only needs to clone,
//! compare, and hash them, so both traits are blanket-implemented for every
//! type with those capabilities.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// A state identifies a configuration of the automaton. It must be hashable
/// so that transition probabilities can be accumulated per destination and
/// so that per-state caches can be keyed on it.
///
/// # Required Traits
///
/// - `Clone`: states are copied into traces and caches
/// - `Eq` + `Hash`: states key the accumulated transition mass
/// - `Debug`: states appear in log output
/// - `Send` + `Sync`: automata are shared across threads behind `Arc`
///
/// # Example
///
/// ```rust
/// use probabilistic_automata::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&Door::Open);
/// assert_state(&3u8);
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// Trait for alphabet letters: system actions, environment actions and
/// outputs.
///
/// The degenerate single-valued alphabet used when an automaton has no real
/// environment coordinate is the unit type `()`.
pub trait Letter: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Letter for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Light {
        Red,
        Green,
    }

    fn collect_states<S: State>(states: &[S]) -> HashSet<S> {
        states.iter().cloned().collect()
    }

    fn is_letter<L: Letter>(_: &L) -> bool {
        true
    }

    #[test]
    fn user_enums_are_states() {
        let states = collect_states(&[Light::Red, Light::Green, Light::Red]);
        assert_eq!(states.len(), 2);
    }

    #[test]
    fn unit_and_pairs_are_letters() {
        assert!(is_letter(&()));
        assert!(is_letter(&('a', ())));
        assert!(is_letter(&Some("L")));
    }
}
