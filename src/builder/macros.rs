//! Macros for ergonomic alphabet and distribution construction.

/// Build a finite [`Alphabet`](crate::core::Alphabet) from a list of letters.
///
/// # Example
///
/// ```
/// use probabilistic_automata::alphabet;
/// use probabilistic_automata::core::Alphabet;
///
/// let actions: Alphabet<char> = alphabet!['a', 'b'];
/// assert_eq!(actions.len(), Some(2));
///
/// let nothing: Alphabet<u8> = alphabet![];
/// assert!(nothing.is_empty());
/// ```
#[macro_export]
macro_rules! alphabet {
    () => {
        $crate::core::Alphabet::Finite(::std::default::Default::default())
    };
    ($($letter:expr),+ $(,)?) => {
        <$crate::core::Alphabet<_> as ::std::iter::FromIterator<_>>::from_iter([$($letter),+])
    };
}

/// Build a [`Distribution`](crate::dist::Distribution) from
/// `letter => weight` pairs, keeping the written order.
///
/// # Example
///
/// ```
/// use probabilistic_automata::dist;
///
/// let coin = dist! { "L" => 0.5, "R" => 0.5 };
/// assert_eq!(coin.prob(&"L"), 0.5);
/// assert_eq!(coin.items().map(|(e, _)| *e).collect::<Vec<_>>(), vec!["L", "R"]);
/// ```
#[macro_export]
macro_rules! dist {
    () => {
        $crate::dist::Distribution::new(::std::default::Default::default())
    };
    ($($letter:expr => $weight:expr),+ $(,)?) => {
        $crate::dist::Distribution::new(
            ::std::iter::IntoIterator::into_iter([$(($letter, $weight as f64)),+]).collect()
        )
    };
}
