//! Functor type class - mapping over values in a context.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use foldwise::optional::Optional;
//! use foldwise::sequence;
//! use foldwise::typeclass::Functor;
//!
//! assert_eq!(Optional::Present(2).fmap(|x| x * 10), Optional::Present(20));
//! assert_eq!(sequence![1, 2, 3].fmap(|x| x + 1), sequence![2, 3, 4]);
//! ```

use super::higher::TypeConstructor;

/// A type class for types whose elements can be transformed in place of
/// their context.
///
/// The mapping function is `FnMut` so that multi-element containers such as
/// [`Sequence`](crate::sequence::Sequence) can call it once per element.
/// Single-element containers call it at most once.
pub trait Functor: TypeConstructor {
    /// Applies `function` to every element, consuming `self`.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to every element by reference.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every element with a clone of `value`.
    fn replace<B: Clone>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the elements, keeping only the shape.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}
