//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use foldwise::optional::Optional;
//! use foldwise::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Optional<i32> {
//!     Optional::from_nullable(text.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let result = Optional::Present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Optional::Present(n * 2));
//! assert_eq!(result, Optional::Present(84));
//! ```

use super::functor::Functor;

/// A type class for types that can chain context-producing computations.
pub trait Monad: Functor {
    /// Lifts a plain value into the context.
    fn pure(value: Self::Inner) -> Self;

    /// Binds every element to a new context and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, keeping the second result.
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
    {
        self.flat_map(move |_| next.clone())
    }
}
