//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Sequence<_>` or `Optional<_>` as bare type
//! constructors. [`TypeConstructor`] recovers that ability with a GAT, which
//! is what lets [`Functor`](super::Functor) and [`Monad`](super::Monad)
//! change the element type in their signatures.
//!
//! # Example
//!
//! ```rust
//! use foldwise::optional::Optional;
//! use foldwise::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let reset_value: Optional<String> = reset(Optional::Present(42));
//! assert!(reset_value.is_empty());
//! ```

/// A type constructor applied to some element type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The element type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
