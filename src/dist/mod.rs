//! Stochastic environment responses.
//!
//! - [`Distribution`]: an immutable weighted assignment over environment
//!   letters, with seeded sampling
//! - [`EnvDist`]: a cached `(state, action) -> Distribution` policy
//! - [`uniform`]: the policy that answers every pair uniformly

mod distribution;
mod env;

pub use distribution::{Distribution, SampleError};
pub use env::{uniform, EnvDist};
