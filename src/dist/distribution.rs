//! Discrete weighted distributions over environment letters.

use crate::core::Letter;
use indexmap::{IndexMap, IndexSet};
use rand::distributions::{Distribution as _, WeightedError, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur when sampling a distribution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// No letter carries any entry.
    #[error("Cannot sample from an empty distribution")]
    EmptyDistribution,

    /// Every entry has zero weight.
    #[error("Cannot sample: all weights are zero")]
    ZeroWeights,

    /// A weight is negative or not finite.
    #[error("Invalid weight {weight} for letter {letter}")]
    InvalidWeight { letter: String, weight: f64 },
}

/// An immutable weighted assignment over environment letters.
///
/// Weights are non-negative and need not sum to one: sampling picks a letter
/// with probability proportional to its weight. Entries keep the order in
/// which they were supplied.
///
/// # Example
///
/// ```rust
/// use probabilistic_automata::dist::Distribution;
/// use rand::SeedableRng;
///
/// let coin: Distribution<&str> = [("heads", 0.5), ("tails", 0.5)].into_iter().collect();
/// assert_eq!(coin.prob(&"heads"), 0.5);
/// assert_eq!(coin.prob(&"edge"), 0.0);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let side = coin.sample(&mut rng).unwrap();
/// assert!(side == "heads" || side == "tails");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "E: Letter + Serialize",
        deserialize = "E: Letter + Deserialize<'de>"
    )
)]
pub struct Distribution<E: Letter> {
    weights: IndexMap<E, f64>,
}

impl<E: Letter> Distribution<E> {
    /// Wrap a weight map. Later duplicates of a letter replace earlier ones.
    pub fn new(weights: IndexMap<E, f64>) -> Self {
        Self { weights }
    }

    /// All mass on a single letter.
    pub fn point(letter: E) -> Self {
        Self::new(IndexMap::from([(letter, 1.0)]))
    }

    /// Equal weight `1/n` on each of `n` distinct letters.
    ///
    /// An empty input yields an empty distribution.
    pub fn uniform<I>(letters: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let letters: IndexSet<E> = letters.into_iter().collect();
        let share = 1.0 / letters.len() as f64;
        letters.into_iter().map(|e| (e, share)).collect()
    }

    /// Weight of `letter`, or zero if it carries no entry.
    pub fn prob(&self, letter: &E) -> f64 {
        self.weights.get(letter).copied().unwrap_or(0.0)
    }

    /// `(letter, weight)` pairs in construction order.
    pub fn items(&self) -> impl Iterator<Item = (&E, f64)> + '_ {
        self.weights.iter().map(|(e, w)| (e, *w))
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Number of letters with an entry.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when no letter carries an entry.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Draw one letter with probability proportional to its weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<E, SampleError> {
        if self.weights.is_empty() {
            return Err(SampleError::EmptyDistribution);
        }

        if let Some((letter, weight)) = self
            .weights
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(SampleError::InvalidWeight {
                letter: format!("{letter:?}"),
                weight: *weight,
            });
        }

        let index = WeightedIndex::<f64>::new(self.weights.values()).map_err(|err| match err {
            WeightedError::AllWeightsZero => SampleError::ZeroWeights,
            WeightedError::NoItem => SampleError::EmptyDistribution,
            _ => SampleError::InvalidWeight {
                letter: String::from("<unknown>"),
                weight: f64::NAN,
            },
        })?;

        let (letter, _) = self
            .weights
            .get_index(index.sample(rng))
            .ok_or(SampleError::EmptyDistribution)?;
        Ok(letter.clone())
    }
}

impl<E: Letter> From<IndexMap<E, f64>> for Distribution<E> {
    fn from(weights: IndexMap<E, f64>) -> Self {
        Self::new(weights)
    }
}

impl<E: Letter> From<HashMap<E, f64>> for Distribution<E> {
    fn from(weights: HashMap<E, f64>) -> Self {
        weights.into_iter().collect()
    }
}

impl<E: Letter> From<Vec<(E, f64)>> for Distribution<E> {
    fn from(weights: Vec<(E, f64)>) -> Self {
        weights.into_iter().collect()
    }
}

impl<E: Letter> FromIterator<(E, f64)> for Distribution<E> {
    fn from_iter<I: IntoIterator<Item = (E, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
