//! # foldwise
//!
//! Immutable sequences, a stack-safe fold engine and null-free optional
//! values.
//!
//! ## Overview
//!
//! - **Sequence**: a persistent singly linked list whose tails are shared
//!   between versions, built with the [`sequence!`] macro
//! - **Fold Engine**: `fold_left` and `fold_right` on [`Sequence`], from
//!   which sums, products and other aggregates are derived, plus the
//!   bounded transform `map_while`
//! - **Optional**: [`Optional`] with `map`, `flat_map`, `filter`, lazy
//!   fallbacks and the [`bind!`] macro for sequential binding
//! - **Type Classes**: `Functor` and `Foldable` for both data types,
//!   `Monad` for `Optional`, and `Monoid` for sequence concatenation
//!
//! Every operation on a sequence runs in constant stack space, including
//! dropping one.
//!
//! ## Feature Flags
//!
//! - `arc`: share sequence nodes through `Arc` instead of `Rc`, making
//!   sequences `Send + Sync`
//! - `rayon`: parallel `par_fold_map` (implies `arc`)
//! - `serde`: `Serialize`/`Deserialize` for `Sequence` and `Optional`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use foldwise::prelude::*;
//! use foldwise::{bind, sequence};
//!
//! let prices = sequence![120, 80, 45];
//! let total = prices.fold_right(0, |price, subtotal| price + subtotal);
//! assert_eq!(total, 245);
//!
//! let affordable = prices.map_while(|price| price * 2, |doubled| *doubled < 250);
//! assert_eq!(affordable, sequence![240, 160, 90]);
//!
//! let cheapest = bind! {
//!     first <= prices.head_option().map(|price| *price);
//!     rest <= prices.tail().ok().map_or(Optional::Absent, |tail| tail.reduce_left(|a, b| a.min(*b)));
//!     yield first.min(rest)
//! };
//! assert_eq!(cheapest, Optional::Present(45));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use foldwise::prelude::*;
///
/// let numbers: Sequence<i32> = Sequence::new().cons(2).cons(1);
/// assert_eq!(numbers.fold_map(|x| Sum(*x)), Sum(3));
/// ```
pub mod prelude {
    pub use crate::error::{EmptyOptionalError, EmptySequenceError, Error};
    pub use crate::optional::Optional;
    pub use crate::sequence::Sequence;
    pub use crate::typeclass::*;
}

pub mod error;
pub mod optional;
pub mod sequence;
pub mod typeclass;

#[doc(inline)]
pub use optional::Optional;
#[doc(inline)]
pub use sequence::Sequence;
