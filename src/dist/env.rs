//! Environment response policies: `(state, action) -> Distribution`.

use super::distribution::Distribution;
use crate::core::{Letter, Memo, State};
use std::fmt;
use std::sync::Arc;

type RawEnvFn<S, A, E> = Arc<dyn Fn(&S, &A) -> Distribution<E> + Send + Sync>;

/// A stationary, state-indexed environment policy.
///
/// `EnvDist` wraps a pure function from `(state, action)` to a
/// [`Distribution`] over environment letters. The function may return
/// anything convertible into a `Distribution` (a `Distribution` itself, an
/// `IndexMap`, a `HashMap`, or a `Vec` of pairs); the conversion runs once per
/// `(state, action)` pair and the result is cached.
///
/// Cached distributions are shared: repeated queries for the same pair
/// return the same `Arc`. The cache is unbounded and never evicts on its own;
/// call [`clear_cache`](Self::clear_cache) to release it. Clones of an
/// `EnvDist` share both the function and the cache.
///
/// The wrapped function must be stationary: for fixed inputs it must always
/// produce an equivalent distribution, otherwise the cache would freeze the
/// first answer.
///
/// # Example
///
/// ```rust
/// use probabilistic_automata::dist::EnvDist;
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// let env = EnvDist::new(|state: &u8, action: &char| {
///     if *action == 'a' && *state == 0 {
///         HashMap::from([("L", 0.5), ("R", 0.5)])
///     } else {
///         HashMap::from([("L", 1.0)])
///     }
/// });
///
/// let first = env.query(&0, &'a');
/// let again = env.query(&0, &'a');
/// assert_eq!(first.prob(&"R"), 0.5);
/// assert!(Arc::ptr_eq(&first, &again));
/// ```
pub struct EnvDist<S: State, A: Letter, E: Letter> {
    raw: RawEnvFn<S, A, E>,
    cache: Memo<(S, A), Distribution<E>>,
}

impl<S: State, A: Letter, E: Letter> EnvDist<S, A, E> {
    /// Wrap a distribution-supplying function.
    pub fn new<F, D>(f: F) -> Self
    where
        F: Fn(&S, &A) -> D + Send + Sync + 'static,
        D: Into<Distribution<E>>,
    {
        Self {
            raw: Arc::new(move |state: &S, action: &A| -> Distribution<E> {
                f(state, action).into()
            }),
            cache: Memo::new(),
        }
    }

    /// The same distribution for every `(state, action)` pair.
    pub fn constant(dist: Distribution<E>) -> Self {
        Self::new(move |_: &S, _: &A| dist.clone())
    }

    /// Distribution of environment letters for `action` taken in `state`.
    pub fn query(&self, state: &S, action: &A) -> Arc<Distribution<E>> {
        self.cache
            .get_or_insert_with((state.clone(), action.clone()), |(state, action)| {
                log::trace!("normalizing environment distribution for ({state:?}, {action:?})");
                (self.raw)(state, action)
            })
    }

    /// Number of `(state, action)` pairs currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached distribution.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl<S: State, A: Letter, E: Letter> Clone for EnvDist<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            raw: Arc::clone(&self.raw),
            cache: self.cache.clone(),
        }
    }
}

impl<S: State, A: Letter, E: Letter> fmt::Debug for EnvDist<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvDist")
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

/// Environment that answers every `(state, action)` pair with the uniform
/// distribution over `actions`.
///
/// Every letter gets weight `1/|actions|`; letters outside `actions` get
/// zero. An empty `actions` yields an empty distribution, which fails when
/// sampled.
///
/// # Example
///
/// ```rust
/// use probabilistic_automata::dist::uniform;
///
/// let env = uniform::<u8, (), _>(['L', 'R']);
/// let dist = env.query(&0, &());
/// assert_eq!(dist.prob(&'L'), 0.5);
/// assert_eq!(dist.prob(&'X'), 0.0);
/// ```
pub fn uniform<S, A, E>(actions: impl IntoIterator<Item = E>) -> EnvDist<S, A, E>
where
    S: State,
    A: Letter,
    E: Letter,
{
    EnvDist::constant(Distribution::uniform(actions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn uniform_assigns_equal_weight() {
        let env = uniform::<u8, char, _>(["x", "y", "z"]);
        for state in 0..3u8 {
            let dist = env.query(&state, &'a');
            for letter in ["x", "y", "z"] {
                assert!((dist.prob(&letter) - 1.0 / 3.0).abs() < 1e-12);
            }
            assert_eq!(dist.prob(&"w"), 0.0);
        }
    }

    #[test]
    fn raw_maps_are_converted_to_distributions() {
        let env = EnvDist::new(|s: &u8, _: &()| {
            let mut weights = IndexMap::new();
            weights.insert('L', f64::from(*s));
            weights.insert('R', 1.0);
            weights
        });

        let dist = env.query(&3, &());
        assert_eq!(dist.prob(&'L'), 3.0);
        assert_eq!(dist.total_weight(), 4.0);
    }

    #[test]
    fn canonical_distributions_pass_through() {
        let env = EnvDist::new(|_: &u8, a: &char| Distribution::point(*a));
        assert_eq!(env.query(&0, &'q').prob(&'q'), 1.0);
    }

    #[test]
    fn repeated_queries_return_same_object() {
        let env = EnvDist::new(|_: &u8, _: &char| HashMap::from([(true, 1.0)]));

        let first = env.query(&1, &'a');
        let second = env.query(&1, &'a');
        let other = env.query(&2, &'a');

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(env.cached_len(), 2);
    }

    #[test]
    fn supplier_runs_once_per_pair() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let env = EnvDist::new(move |_: &u8, _: &u8| {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![((), 1.0)]
        });

        for _ in 0..5 {
            env.query(&0, &0);
            env.query(&0, &1);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clones_share_cache() {
        let env = uniform::<u8, (), _>([0u8, 1]);
        let shared = env.clone();

        let first = env.query(&9, &());
        let second = shared.query(&9, &());

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn clear_cache_forces_recomputation() {
        let env = uniform::<u8, (), _>(['L']);
        let before = env.query(&0, &());
        env.clear_cache();
        assert_eq!(env.cached_len(), 0);

        let after = env.query(&0, &());
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
    }
}
