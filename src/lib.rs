//! Probabilistic Automata: deterministic automata driven by a stochastic environment
//!
//! A probabilistic DFA (PDFA) is a deterministic automaton whose input letters
//! are pairs `(action, env_action)`. The caller chooses the action; the
//! environment letter is drawn from a distribution that depends on the
//! current state and the chosen action. The deterministic transition function
//! therefore induces a stochastic transition relation between states.
//!
//! # Core Concepts
//!
//! - **Alphabets and DFAs**: immutable deterministic automata over finite or
//!   universal alphabets ([`core`])
//! - **Distributions**: weighted environment responses with seeded sampling
//!   ([`dist`])
//! - **Transition algebra**: successor distributions, supports and
//!   point probabilities ([`Pdfa`])
//! - **Simulation**: step-at-a-time interaction with a running automaton
//!   ([`Simulation`])
//! - **Constructors**: [`pdfa`], [`lift`] and [`randomize`]
//!
//! # Example
//!
//! ```rust
//! use probabilistic_automata::{randomize, DfaBuilder};
//!
//! // A counter modulo 3 that is bumped by a random amount each step.
//! let counter = DfaBuilder::new()
//!     .start(0u8)
//!     .inputs([1u8, 2].into_iter().collect())
//!     .label(|s: &u8| *s == 0)
//!     .transition(|s: &u8, bump: &u8| (s + bump) % 3)
//!     .build()
//!     .unwrap();
//!
//! let random = randomize(&counter).unwrap();
//! assert_eq!(random.prob(&0, &1, &()), 0.5);
//! assert_eq!(random.prob(&0, &2, &()), 0.5);
//! assert_eq!(random.prob(&0, &0, &()), 0.0);
//!
//! let mut sim = random.run(None, Some(42));
//! let state = sim.advance(()).unwrap();
//! assert!(state == 1 || state == 2);
//! ```

pub mod builder;
pub mod core;
pub mod dist;
pub mod pdfa;

// Re-export commonly used types
pub use builder::{lift, pdfa, randomize, BuildError, DfaBuilder, PdfaBuilder};
pub use self::core::{Alphabet, AutomatonError, Dfa, Letter, State};
pub use dist::{uniform, Distribution, EnvDist, SampleError};
pub use pdfa::{Pdfa, PdfaError, Simulation, Step, Trace};
