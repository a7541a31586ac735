//! Probabilistic automata.
//!
//! A [`Pdfa`] wraps a deterministic automaton whose letters are
//! `(action, env_action)` pairs together with an [`EnvDist`](crate::dist::EnvDist)
//! that chooses the environment coordinate.
//!
//! # Key Concepts
//!
//! - **Transition algebra**: `transition_probs`, `support` and `prob` derive
//!   a stochastic transition relation from the deterministic one
//! - **Simulation**: [`Simulation`] drives the automaton one caller action
//!   at a time with a privately owned, seedable generator
//! - **Traces**: simulated steps can be recorded in a [`Trace`] on request

mod error;
mod machine;
mod simulation;
mod trace;

pub use error::PdfaError;
pub use machine::Pdfa;
pub use simulation::Simulation;
pub use trace::{Step, Trace};
