//! Fold engine for [`Sequence`].
//!
//! One pair of folds replaces every hand-written aggregation over a
//! sequence: a sum is `fold_right(0, |x, total| x + total)`, a product is
//! `fold_right(1, |x, total| x * total)`, and any other associative
//! aggregate is the same call with a different seed and combining
//! function.
//!
//! Both folds are loops. `fold_right` buffers references to the elements
//! and combines them back to front, so its stack depth is constant no
//! matter how long the sequence is.
//!
//! # Order
//!
//! With a combining function that is associative and commutative the two
//! folds agree. With one that is only associative (string concatenation,
//! for instance) `fold_left` nests to the left and `fold_right` to the
//! right, and the results differ:
//!
//! ```rust
//! use foldwise::sequence;
//!
//! let letters = sequence!["a", "b", "c"];
//! let left = letters.fold_left(String::from("_"), |text, letter| text + *letter);
//! let right = letters.fold_right(String::from("_"), |letter, text| text + *letter);
//! assert_eq!(left, "_abc");
//! assert_eq!(right, "_cba");
//! ```
//!
//! # Parallel folds
//!
//! When the combining function is associative, pure and free of shared
//! mutable state, a fold can be split into sub-ranges that are folded
//! independently and then combined, without changing its result. With the
//! `rayon` feature, [`Sequence::par_fold_map`] performs that tree-shaped
//! reduction over a [`Monoid`].

use super::Sequence;
use crate::optional::Optional;
#[cfg(feature = "rayon")]
use crate::typeclass::Monoid;

impl<T> Sequence<T> {
    /// Folds from left to right:
    /// `combine(...combine(combine(seed, e1), e2)..., en)`.
    ///
    /// Returns `seed` unchanged for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence;
    ///
    /// let sequence = sequence![1, 2, 3, 4];
    /// assert_eq!(sequence.fold_left(0, |total, x| total + x), 10);
    /// assert_eq!(sequence.fold_left(0, |total, x| total - x), -10);
    /// ```
    pub fn fold_left<A, F>(&self, seed: A, mut combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut accumulator = seed;
        let mut current = self;
        while let Self::Node(value, rest) = current {
            accumulator = combine(accumulator, value);
            current = rest.sequence();
        }
        accumulator
    }

    /// Folds from right to left:
    /// `combine(e1, combine(e2, ... combine(en, seed)))`.
    ///
    /// Returns `seed` unchanged for an empty sequence. The whole sequence is
    /// always consumed.
    ///
    /// # Complexity
    ///
    /// O(n) time, O(n) heap for the buffered element references, O(1) stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence;
    ///
    /// let sequence = sequence![1, 2, 3];
    /// assert_eq!(sequence.fold_right(0, |x, total| x + total), 6);
    /// assert_eq!(sequence.fold_right(1, |x, total| x * total), 6);
    /// // 1 - (2 - (3 - 0))
    /// assert_eq!(sequence.fold_right(0, |x, total| x - total), 2);
    /// ```
    pub fn fold_right<A, F>(&self, seed: A, mut combine: F) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        let pending: Vec<&T> = self.iter().collect();
        pending
            .into_iter()
            .rev()
            .fold(seed, |accumulator, value| combine(value, accumulator))
    }

    /// Folds left to right seeded with the first element.
    ///
    /// Returns `Absent` for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::optional::Optional;
    /// use foldwise::sequence;
    ///
    /// assert_eq!(sequence![3, 9, 4].reduce_left(|a, b| a.max(*b)), Optional::Present(9));
    /// ```
    pub fn reduce_left<F>(&self, combine: F) -> Optional<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        match self {
            Self::Node(first, rest) => {
                Optional::Present(rest.sequence().fold_left(first.clone(), combine))
            }
            Self::Empty => Optional::Absent,
        }
    }

    /// Folds right to left seeded with the last element.
    ///
    /// Returns `Absent` for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::optional::Optional;
    /// use foldwise::sequence;
    ///
    /// // 1 - (2 - (3 - 4))
    /// assert_eq!(sequence![1, 2, 3, 4].reduce_right(|x, total| x - total), Optional::Present(-2));
    /// ```
    pub fn reduce_right<F>(&self, mut combine: F) -> Optional<T>
    where
        T: Clone,
        F: FnMut(&T, T) -> T,
    {
        let mut pending: Vec<&T> = self.iter().collect();
        let Some(last) = pending.pop() else {
            return Optional::Absent;
        };
        Optional::Present(
            pending
                .into_iter()
                .rev()
                .fold(last.clone(), |accumulator, value| combine(value, accumulator)),
        )
    }

    /// Maps every element into a [`Monoid`] and reduces the results as a
    /// balanced tree on the rayon thread pool.
    ///
    /// Equal to [`Foldable::fold_map`](crate::typeclass::Foldable::fold_map)
    /// whenever `M` is a lawful monoid and `function` is pure. Non-associative
    /// combinations or side-effecting functions make the result depend on
    /// how the work was split.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence::Sequence;
    /// use foldwise::typeclass::Sum;
    ///
    /// let numbers: Sequence<u64> = (1..=1_000).collect();
    /// assert_eq!(numbers.par_fold_map(|x| Sum(*x)), Sum(500_500));
    /// ```
    #[cfg(feature = "rayon")]
    pub fn par_fold_map<M, F>(&self, function: F) -> M
    where
        T: Sync,
        M: Monoid + Send,
        F: Fn(&T) -> M + Sync + Send,
    {
        use rayon::prelude::*;

        let elements: Vec<&T> = self.iter().collect();
        elements
            .par_iter()
            .map(|value| function(*value))
            .reduce(M::empty, M::combine)
    }
}


#[cfg(all(test, feature = "rayon"))]
mod rayon_tests {
    use super::*;
    use crate::typeclass::{Foldable, Product, Sum};
    use rstest::rstest;

    #[rstest]
    fn test_par_fold_map_matches_sequential() {
        let numbers: Sequence<u64> = (1..=100_000).collect();
        assert_eq!(
            numbers.par_fold_map(|x| Sum(*x)),
            numbers.fold_map(|x| Sum(*x))
        );
    }

    #[rstest]
    fn test_par_fold_map_preserves_order_for_non_commutative_monoid() {
        let letters: Sequence<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();
        assert_eq!(
            letters.par_fold_map(|letter| letter.to_string()),
            "abcdefghijklmnopqrstuvwxyz"
        );
    }

    #[rstest]
    fn test_par_fold_map_on_empty_is_identity() {
        let empty: Sequence<u32> = Sequence::new();
        assert_eq!(empty.par_fold_map(|x| Product(*x)), Product(1));
    }
}
