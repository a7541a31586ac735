//! Deterministic automaton layer.
//!
//! This module contains the pieces the probabilistic layer is built on:
//! - Marker traits for states and letters
//! - Finite and universal alphabets with Cartesian products
//! - Immutable deterministic automata with reachable-state enumeration
//! - An explicit memoization cache
//!
//! Nothing here is stochastic; randomness enters in [`crate::dist`].

mod alphabet;
mod dfa;
mod error;
mod memo;
mod state;

pub use alphabet::Alphabet;
pub use dfa::{Dfa, LabelFn, TransitionFn};
pub use error::AutomatonError;
pub use memo::Memo;
pub use state::{Letter, State};
