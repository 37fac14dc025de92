//! Type classes for functional programming.
//!
//! - [`TypeConstructor`]: Higher-Kinded Type emulation via GATs
//! - [`Functor`]: mapping over a context
//! - [`Monad`]: chaining context-producing computations
//! - [`Foldable`]: reducing a structure to a summary value
//! - [`Semigroup`] / [`Monoid`]: associative combination with identity
//! - [`Sum`] / [`Product`]: numeric wrappers selecting an aggregation
//!
//! [`Optional`](crate::optional::Optional) implements `Functor`, `Monad` and
//! `Foldable`. [`Sequence`](crate::sequence::Sequence) implements `Functor`
//! and `Foldable`, and is a `Monoid` under concatenation.
//!
//! # Examples
//!
//! ```rust
//! use foldwise::sequence;
//! use foldwise::typeclass::{Foldable, Monoid, Semigroup, Sum};
//!
//! // One fold, many aggregations.
//! let numbers = sequence![1, 2, 3];
//! assert_eq!(numbers.fold_map(|x| Sum(*x)), Sum(6));
//!
//! let joined = sequence![1].combine(sequence![2]).combine(foldwise::sequence::Sequence::empty());
//! assert_eq!(joined, sequence![1, 2]);
//! ```

mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
