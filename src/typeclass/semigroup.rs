//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Associativity is what allows a fold over a semigroup to be regrouped
//! into a tree and evaluated in parallel without changing its result.
//!
//! # Examples
//!
//! ```rust
//! use foldwise::sequence;
//! use foldwise::typeclass::{Product, Semigroup, Sum};
//!
//! assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
//! assert_eq!(Product(2).combine(Product(3)), Product(6));
//! assert_eq!(sequence![1, 2].combine(sequence![3]), sequence![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines two values. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values by cloning them.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
