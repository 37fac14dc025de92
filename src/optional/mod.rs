//! Optional values without null.
//!
//! [`Optional`] is either [`Optional::Absent`] or [`Optional::Present`]. Its
//! combinators express every branch of a partial computation without a
//! null check:
//!
//! - `map`, `flat_map`, `filter`, `flatten` transform and chain;
//! - `for_each` consumes for side effects;
//! - `get_or_else`, `or_else` supply lazy fallbacks;
//! - `or_null` and `get` hand the value back to code that cannot use the
//!   combinators.
//!
//! Chains short-circuit: once a step is `Absent`, no later closure runs.
//!
//! # Construction
//!
//! [`Optional::from_nullable`] normalizes a nullable input, so `None`
//! becomes `Absent`. [`Optional::wrap`] wraps whatever it is given, so an
//! `Optional<Option<U>>` built from `None` is `Present(None)`. Use `wrap`
//! only when the source can legitimately hold a null payload.
//!
//! Chains of dependent lookups read more naturally with the
//! [`bind!`](crate::bind) macro.
//!
//! # Examples
//!
//! ```rust
//! use foldwise::optional::Optional;
//!
//! struct Account {
//!     owner_id: u32,
//! }
//!
//! fn find_account(id: u32) -> Optional<Account> {
//!     if id == 7 { Optional::Present(Account { owner_id: 42 }) } else { Optional::Absent }
//! }
//!
//! fn find_owner_name(owner_id: u32) -> Optional<String> {
//!     if owner_id == 42 { Optional::Present("Ada".to_string()) } else { Optional::Absent }
//! }
//!
//! let name = find_account(7)
//!     .flat_map(|account| find_owner_name(account.owner_id))
//!     .map(|name| name.to_uppercase());
//! assert_eq!(name, Optional::Present("ADA".to_string()));
//!
//! let missing = find_account(8).flat_map(|account| find_owner_name(account.owner_id));
//! assert_eq!(missing.get_or_else(|| "unknown".to_string()), "unknown");
//! ```

mod bind_macro;

use std::fmt;

use crate::error::EmptyOptionalError;
use crate::sequence::Sequence;
use crate::typeclass::{Foldable, Functor, Monad, TypeConstructor};

/// A value that may be absent.
///
/// `Absent` orders before every `Present` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// A value.
    Present(T),
}

impl<T> Optional<T> {
    /// Normalizing constructor: `None` becomes `Absent`, `Some(v)` becomes
    /// `Present(v)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::optional::Optional;
    ///
    /// assert!(Optional::<i32>::from_nullable(None).is_empty());
    /// assert_eq!(Optional::from_nullable(Some(3)), Optional::Present(3));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }

    /// Non-normalizing constructor: always `Present(value)`, even when
    /// `value` is itself a null-like `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::optional::Optional;
    ///
    /// let wrapped: Optional<Option<i32>> = Optional::wrap(None);
    /// assert!(!wrapped.is_empty());
    /// assert_eq!(wrapped, Optional::Present(None));
    /// ```
    #[inline]
    pub const fn wrap(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns `Absent`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies `transform` to a held value. `transform` runs at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(2).map(|x| x + 1), Optional::Present(3));
    /// assert_eq!(Optional::<i32>::Absent.map(|x| x + 1), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(transform(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies an `Optional`-returning `transform` to a held value and
    /// flattens the result.
    ///
    /// On `Absent`, `transform` is never called, so a chain of `flat_map`
    /// calls stops running closures at the first absent step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::optional::Optional;
    ///
    /// fn half(value: i32) -> Optional<i32> {
    ///     if value % 2 == 0 { Optional::Present(value / 2) } else { Optional::Absent }
    /// }
    ///
    /// assert_eq!(Optional::Present(12).flat_map(half).flat_map(half), Optional::Present(3));
    /// assert_eq!(Optional::Present(6).flat_map(half).flat_map(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => transform(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Calls `action` with a held value; does nothing when absent.
    #[inline]
    pub fn for_each<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Self::Present(value) = self {
            action(value);
        }
    }

    /// Keeps a held value only if it satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Returns `true` if a value is held and satisfies `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    /// Returns `true` if a value equal to `candidate` is held.
    #[inline]
    pub fn contains(&self, candidate: &T) -> bool
    where
        T: PartialEq,
    {
        self.exists(|value| value == candidate)
    }

    /// Returns the held value, or the result of `default` when absent.
    ///
    /// `default` is evaluated only when the optional is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::optional::Optional;
    ///
    /// let value = Optional::Present(5).get_or_else(|| unreachable!());
    /// assert_eq!(value, 5);
    /// assert_eq!(Optional::Absent.get_or_else(|| 9), 9);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Returns the held value, or `default` when absent.
    ///
    /// `default` is already evaluated; prefer [`Optional::get_or_else`] for
    /// anything costly.
    #[inline]
    pub fn get_or_else_value(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    ///
    /// `alternative` is evaluated only when the optional is absent.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative(),
        }
    }

    /// Converts to a nullable `Option`, with `None` as the null marker.
    ///
    /// For handing values to code that expects a nullable result.
    #[inline]
    pub fn or_null(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Extracts the held value.
    ///
    /// Prefer the combinators; this exists for callers that need an explicit
    /// failure instead.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyOptionalError`] when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::error::EmptyOptionalError;
    /// use foldwise::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).get(), Ok(1));
    /// assert_eq!(Optional::<i32>::Absent.get(), Err(EmptyOptionalError));
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, EmptyOptionalError> {
        self.ok_or(EmptyOptionalError)
    }

    /// Converts to a `Result`, using `error` when absent.
    ///
    /// # Errors
    ///
    /// Returns `error` when absent.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error),
        }
    }

    /// Pairs two held values; absent if either is absent.
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Self::Present(left), Optional::Present(right)) => Optional::Present((left, right)),
            _ => Optional::Absent,
        }
    }

    /// Returns an iterator over the held value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().or_null().into_iter()
    }

    /// Returns a one-element sequence when present, an empty one otherwise.
    #[inline]
    pub fn to_sequence(self) -> Sequence<T> {
        match self {
            Self::Present(value) => Sequence::singleton(value),
            Self::Absent => Sequence::Empty,
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(Optional::Present(1)).flatten(), Optional::Present(1));
    /// assert_eq!(Optional::Present(Optional::<i32>::Absent).flatten(), Optional::Absent);
    /// assert_eq!(Optional::<Optional<i32>>::Absent.flatten(), Optional::Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.or_null()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.or_null().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

impl<T> Functor for Optional<T> {
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnMut(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Monad for Optional<T> {
    fn pure(value: T) -> Self {
        Self::Present(value)
    }

    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnMut(T) -> Optional<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<T> Foldable for Optional<T> {
    fn fold_left<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        match self {
            Self::Present(value) => function(init, value),
            Self::Absent => init,
        }
    }

    fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        match self {
            Self::Present(value) => function(value, init),
            Self::Absent => init,
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Serialized as an array of zero or one element: `Absent` is `[]` and
/// `Present(v)` is `[v]`, so `Present` of a null payload stays distinct
/// from `Absent`.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut sequence = serializer.serialize_seq(Some(usize::from(self.is_defined())))?;
        if let Self::Present(value) = self {
            sequence.serialize_element(value)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct OptionalVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for OptionalVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Optional<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of at most one element")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let Some(value) = access.next_element::<T>()? else {
            return Ok(Optional::Absent);
        };
        if access.next_element::<serde::de::IgnoredAny>()?.is_some() {
            return Err(serde::de::Error::invalid_length(2, &self));
        }
        Ok(Optional::Present(value))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OptionalVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_normalizing_and_wrapping_constructors() {
        assert!(Optional::<Option<i32>>::from_nullable(None).is_empty());
        assert!(!Optional::<Option<i32>>::wrap(None).is_empty());
        assert_eq!(
            Optional::wrap(None::<i32>),
            Optional::Present(None)
        );
    }

    #[rstest]
    #[case(Optional::Present(3), true)]
    #[case(Optional::Absent, false)]
    fn test_is_defined_complements_is_empty(#[case] value: Optional<i32>, #[case] defined: bool) {
        assert_eq!(value.is_defined(), defined);
        assert_eq!(value.is_empty(), !defined);
    }

    #[rstest]
    fn test_map_on_absent_does_not_call_transform() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::Absent.map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert_eq!(result, Optional::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_flat_map_short_circuits() {
        let second = Cell::new(0);
        let third = Cell::new(0);
        let result = Optional::Present(1)
            .flat_map(|_| Optional::<i32>::Absent)
            .flat_map(|x| {
                second.set(second.get() + 1);
                Optional::Present(x)
            })
            .flat_map(|x| {
                third.set(third.get() + 1);
                Optional::Present(x)
            });
        assert_eq!(result, Optional::Absent);
        assert_eq!(second.get(), 0);
        assert_eq!(third.get(), 0);
    }

    #[rstest]
    fn test_for_each_runs_once_when_present() {
        let calls = Cell::new(0);
        Optional::Present(5).for_each(|x| calls.set(calls.get() + x));
        Optional::<i32>::Absent.for_each(|_| calls.set(calls.get() + 100));
        assert_eq!(calls.get(), 5);
    }

    #[rstest]
    #[case(Optional::Present(4), Optional::Present(4))]
    #[case(Optional::Present(3), Optional::Absent)]
    #[case(Optional::Absent, Optional::Absent)]
    fn test_filter(#[case] value: Optional<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(value.filter(|x| x % 2 == 0), expected);
    }

    #[rstest]
    fn test_get_or_else_is_lazy() {
        let evaluated = Cell::new(false);
        let value = Optional::Present(1).get_or_else(|| {
            evaluated.set(true);
            0
        });
        assert_eq!(value, 1);
        assert!(!evaluated.get());
    }

    #[rstest]
    fn test_or_else_is_lazy_and_falls_back() {
        let evaluated = Cell::new(false);
        let kept = Optional::Present(1).or_else(|| {
            evaluated.set(true);
            Optional::Present(2)
        });
        assert_eq!(kept, Optional::Present(1));
        assert!(!evaluated.get());
        assert_eq!(Optional::Absent.or_else(|| Optional::Present(2)), Optional::Present(2));
    }

    #[rstest]
    fn test_or_null_and_get() {
        assert_eq!(Optional::Present('x').or_null(), Some('x'));
        assert_eq!(Optional::<char>::Absent.or_null(), None);
        assert_eq!(Optional::<char>::Absent.get(), Err(EmptyOptionalError));
    }

    #[rstest]
    fn test_zip_and_contains() {
        assert_eq!(
            Optional::Present(1).zip(Optional::Present("a")),
            Optional::Present((1, "a"))
        );
        assert_eq!(Optional::Present(1).zip(Optional::<&str>::Absent), Optional::Absent);
        assert!(Optional::Present(3).contains(&3));
        assert!(!Optional::Present(3).contains(&4));
    }

    #[rstest]
    fn test_to_sequence() {
        assert_eq!(Optional::Present(9).to_sequence(), Sequence::singleton(9));
        assert!(Optional::<i32>::Absent.to_sequence().is_empty());
    }

    #[rstest]
    fn test_iteration() {
        let collected: Vec<i32> = Optional::Present(2).into_iter().collect();
        assert_eq!(collected, vec![2]);
        assert_eq!(Optional::<i32>::Absent.iter().count(), 0);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", Optional::Present(3)), "Present(3)");
        assert_eq!(format!("{}", Optional::<i32>::Absent), "Absent");
    }
}
