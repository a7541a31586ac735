//! Alphabets: the sets of letters an automaton may consume or emit.

use super::error::AutomatonError;
use super::state::Letter;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A set of letters.
///
/// Finite alphabets keep their letters in insertion order, which makes every
/// derived enumeration (reachable states, uniform distributions) iterate in a
/// stable order. `Universal` is the unbounded alphabet that matches any
/// letter but cannot be enumerated.
///
/// # Example
///
/// ```rust
/// use probabilistic_automata::core::Alphabet;
///
/// let actions: Alphabet<char> = ['a', 'b'].into_iter().collect();
/// assert!(actions.contains(&'a'));
/// assert!(!actions.contains(&'c'));
///
/// let anything: Alphabet<char> = Alphabet::Universal;
/// assert!(anything.contains(&'z'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "L: Letter + Serialize",
    deserialize = "L: Letter + Deserialize<'de>"
))]
pub enum Alphabet<L: Letter> {
    /// An enumerable set of letters.
    Finite(IndexSet<L>),
    /// Matches every letter.
    Universal,
}

impl<L: Letter> Alphabet<L> {
    /// Alphabet containing exactly one letter.
    pub fn singleton(letter: L) -> Self {
        Self::Finite(IndexSet::from([letter]))
    }

    /// Membership test. Always true for the universal alphabet.
    pub fn contains(&self, letter: &L) -> bool {
        match self {
            Self::Finite(letters) => letters.contains(letter),
            Self::Universal => true,
        }
    }

    /// The letters of a finite alphabet, or `None` when universal.
    pub fn letters(&self) -> Option<&IndexSet<L>> {
        match self {
            Self::Finite(letters) => Some(letters),
            Self::Universal => None,
        }
    }

    /// Like [`letters`](Self::letters), but failing for universal alphabets.
    pub fn enumerate(&self) -> Result<&IndexSet<L>, AutomatonError> {
        self.letters().ok_or(AutomatonError::UnboundedAlphabet)
    }

    /// Number of letters, or `None` when universal.
    pub fn len(&self) -> Option<usize> {
        self.letters().map(IndexSet::len)
    }

    /// True for a finite alphabet with no letters.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// True for the unbounded alphabet.
    pub fn is_universal(&self) -> bool {
        matches!(self, Self::Universal)
    }

    /// Cartesian product of two alphabets.
    ///
    /// The product of two finite alphabets enumerates pairs in row-major
    /// order. If either factor is universal the product is universal.
    pub fn product<R: Letter>(left: &Alphabet<L>, right: &Alphabet<R>) -> Alphabet<(L, R)> {
        match (left, right) {
            (Self::Finite(ls), Alphabet::Finite(rs)) => Alphabet::Finite(
                ls.iter()
                    .flat_map(|l| rs.iter().map(move |r| (l.clone(), r.clone())))
                    .collect(),
            ),
            _ => Alphabet::Universal,
        }
    }
}

impl<A: Letter, E: Letter> Alphabet<(A, E)> {
    /// Split an alphabet of pairs into its two coordinate projections.
    ///
    /// Fails for the universal alphabet, whose coordinates are unknown.
    pub fn project(&self) -> Result<(Alphabet<A>, Alphabet<E>), AutomatonError> {
        let pairs = self.enumerate()?;
        let first = pairs.iter().map(|(a, _)| a.clone()).collect();
        let second = pairs.iter().map(|(_, e)| e.clone()).collect();
        Ok((Alphabet::Finite(first), Alphabet::Finite(second)))
    }
}

impl<L: Letter> FromIterator<L> for Alphabet<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self::Finite(iter.into_iter().collect())
    }
}

impl<L: Letter> From<IndexSet<L>> for Alphabet<L> {
    fn from(letters: IndexSet<L>) -> Self {
        Self::Finite(letters)
    }
}

impl Alphabet<bool> {
    /// The boolean acceptance alphabet `{false, true}`.
    pub fn boolean() -> Self {
        Self::Finite(IndexSet::from([false, true]))
    }
}
