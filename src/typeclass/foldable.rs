//! Foldable type class - folding over data structures.
//!
//! `Foldable` reduces every element of a structure to a single summary
//! value. Implementations here fold by reference, so a structure can be
//! folded any number of times without being consumed or cloned.
//!
//! # Consistency between `fold_left` and `fold_right`
//!
//! For an associative and commutative `f`:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))
//! ```
//!
//! For an `f` that is only associative the two folds visit elements in
//! opposite orders and may legitimately disagree.
//!
//! # Examples
//!
//! ```rust
//! use foldwise::optional::Optional;
//! use foldwise::sequence;
//! use foldwise::typeclass::{Foldable, Product, Sum};
//!
//! let numbers = sequence![1, 2, 3, 4];
//! assert_eq!(numbers.fold_map(|x| Sum(*x)), Sum(10));
//! assert_eq!(numbers.fold_map(|x| Product(*x)), Product(24));
//!
//! let absent: Optional<i32> = Optional::Absent;
//! assert_eq!(absent.fold_left(5, |accumulator, x| accumulator + x), 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for structures that can be reduced to a summary value.
///
/// # Required Methods
///
/// - `fold_left`
/// - `fold_right`
///
/// Everything else is derived from `fold_left`.
pub trait Foldable: TypeConstructor {
    /// Folds from left to right: `f(...f(f(init, e1), e2)..., en)`.
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &Self::Inner) -> B;

    /// Folds from right to left: `f(e1, f(e2, ...f(en, init)))`.
    fn fold_right<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(&Self::Inner, B) -> B;

    /// Maps each element into a [`Monoid`] and combines the results left to
    /// right, starting from `M::empty()`.
    fn fold_map<M, F>(&self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(&Self::Inner) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Number of elements.
    fn length(&self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(false, |found, element| found || predicate(element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(true, |holds, element| holds && predicate(element))
    }

    /// Collects the elements into a `Vec`, left to right.
    fn to_vec(&self) -> Vec<Self::Inner>
    where
        Self::Inner: Clone,
    {
        self.fold_left(Vec::new(), |mut elements, element| {
            elements.push(element.clone());
            elements
        })
    }
}
