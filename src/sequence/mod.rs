//! Persistent (immutable) singly-linked sequence.
//!
//! This module provides [`Sequence`], a cons-list with two variants:
//! [`Sequence::Empty`] and [`Sequence::Node`]. A node owns its value and a
//! [`Link`] to the rest of the sequence. Links are reference counted, so
//! several sequences may share one tail; nothing ever mutates a node after
//! it has been built.
//!
//! - O(1) `cons`, `head`, `tail`
//! - O(n) `length`, `get`, `append`, `reverse`
//! - stack-safe traversal, folding and dropping for any length
//!
//! # Examples
//!
//! ```rust
//! use foldwise::sequence;
//! use foldwise::sequence::Sequence;
//!
//! let numbers = sequence![1, 2, 3];
//! assert_eq!(numbers.head(), Ok(&1));
//! assert_eq!(numbers.tail(), Ok(&sequence![2, 3]));
//! assert_eq!(numbers.length(), 3);
//!
//! // Prepending shares the existing nodes.
//! let extended = numbers.clone().cons(0);
//! assert_eq!(extended, sequence![0, 1, 2, 3]);
//! assert_eq!(numbers.length(), 3);
//!
//! let empty: Sequence<i32> = Sequence::new();
//! assert!(empty.head().is_err());
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! first:  1 -> 2 -> 3 -> Empty
//! second = first.clone().cons(0): 0 -> [1 -> 2 -> 3 -> Empty]
//! ```
//!
//! Cloning a sequence clones its first value and bumps one reference count.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Deref;

use crate::error::EmptySequenceError;
use crate::optional::Optional;
use crate::typeclass::{Foldable, Functor, Monoid, Semigroup, TypeConstructor};

mod fold;
mod map_while;

pub use map_while::MapWhile;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted pointer behind every [`Link`].
///
/// `std::sync::Arc` with the `arc` feature, `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Sequence<i32>: Send, Sync);

// =============================================================================
// Sequence
// =============================================================================

/// A persistent (immutable) singly-linked sequence.
///
/// The first element supplied at construction is the outermost
/// [`Sequence::Node`]; the chain of links always ends in exactly one
/// [`Sequence::Empty`].
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `cons`     | O(1)       |
/// | `head`     | O(1)       |
/// | `tail`     | O(1)       |
/// | `length`   | O(n)       |
/// | `get`      | O(n)       |
/// | `append`   | O(n)       |
/// | `reverse`  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use foldwise::sequence::{Link, Sequence};
///
/// let built = Sequence::Node(1, Link::new(Sequence::Node(2, Link::new(Sequence::Empty))));
/// assert_eq!(built, Sequence::from(vec![1, 2]));
/// ```
#[derive(Clone)]
pub enum Sequence<T> {
    /// The empty sequence.
    Empty,
    /// A value followed by the rest of the sequence.
    Node(T, Link<T>),
}

/// Shared pointer from a [`Sequence::Node`] to the rest of its sequence.
///
/// Dereferences to the [`Sequence`] it points at.
pub struct Link<T>(ReferenceCounter<Sequence<T>>);

impl<T> Link<T> {
    /// Wraps `rest` so it can follow a node.
    #[inline]
    #[must_use]
    pub fn new(rest: Sequence<T>) -> Self {
        Self(ReferenceCounter::new(rest))
    }

    /// Returns the sequence this link points at.
    #[inline]
    #[must_use]
    pub fn sequence(&self) -> &Sequence<T> {
        &self.0
    }

    /// Returns `true` if both links point at the same allocation.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.0, &other.0)
    }

    /// Unwraps the pointed-at sequence, cloning only its first node when the
    /// allocation is shared with another sequence.
    fn into_sequence(mut self) -> Sequence<T>
    where
        T: Clone,
    {
        if let Some(unique) = ReferenceCounter::get_mut(&mut self.0) {
            return std::mem::take(unique);
        }
        (*self.0).clone()
    }
}

impl<T> Clone for Link<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(ReferenceCounter::clone(&self.0))
    }
}

impl<T> Deref for Link<T> {
    type Target = Sequence<T>;

    #[inline]
    fn deref(&self) -> &Sequence<T> {
        &self.0
    }
}

/// Unlinks uniquely owned nodes one at a time so that dropping a long
/// sequence never recurses through the chain.
impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let Some(unique) = ReferenceCounter::get_mut(&mut self.0) else {
            return;
        };
        let mut current = std::mem::take(unique);
        while let Sequence::Node(_, link) = &mut current {
            let Some(next) = ReferenceCounter::get_mut(&mut link.0) else {
                break;
            };
            current = std::mem::take(next);
        }
    }
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Creates a sequence containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self::Empty.cons(value)
    }

    /// Builds a sequence whose first element is `elements[0]`.
    fn from_vec(mut elements: Vec<T>) -> Self {
        let mut sequence = Self::Empty;
        while let Some(value) = elements.pop() {
            sequence = sequence.cons(value);
        }
        sequence
    }

    /// Prepends `value`, reusing `self` as the new tail.
    ///
    /// Call `clone()` first to keep the original as well; the two sequences
    /// then share every node of `self`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence::Sequence;
    ///
    /// let sequence = Sequence::new().cons(3).cons(2).cons(1);
    /// assert_eq!(sequence.head(), Ok(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(self, value: T) -> Self {
        Self::Node(value, Link::new(self))
    }

    /// Returns `true` if this is [`Sequence::Empty`].
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence;
    /// use foldwise::sequence::Sequence;
    ///
    /// assert_eq!(sequence![7, 8].head(), Ok(&7));
    /// assert!(Sequence::<i32>::new().head().is_err());
    /// ```
    #[inline]
    pub const fn head(&self) -> Result<&T, EmptySequenceError> {
        match self {
            Self::Node(value, _) => Ok(value),
            Self::Empty => Err(EmptySequenceError::new("head")),
        }
    }

    /// Returns everything after the first element, without copying it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence;
    ///
    /// let sequence = sequence![1, 2, 3];
    /// assert_eq!(sequence.tail(), Ok(&sequence![2, 3]));
    /// ```
    #[inline]
    pub fn tail(&self) -> Result<&Self, EmptySequenceError> {
        match self {
            Self::Node(_, rest) => Ok(rest.sequence()),
            Self::Empty => Err(EmptySequenceError::new("tail")),
        }
    }

    /// Returns the first element, or `Absent` for an empty sequence.
    #[inline]
    #[must_use]
    pub const fn head_option(&self) -> Optional<&T> {
        match self {
            Self::Node(value, _) => Optional::Present(value),
            Self::Empty => Optional::Absent,
        }
    }

    /// Splits off the first element and the rest in one step.
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Optional<(&T, &Self)> {
        match self {
            Self::Node(value, rest) => Optional::Present((value, rest.sequence())),
            Self::Empty => Optional::Absent,
        }
    }

    /// Counts the nodes of the sequence.
    ///
    /// # Complexity
    ///
    /// O(n); nothing is cached.
    #[must_use]
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Alias for [`Sequence::length`].
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.length()
    }

    /// Returns the element at `index`, or `Absent` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Optional<&T> {
        Optional::from_nullable(self.iter().nth(index))
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::optional::Optional;
    /// use foldwise::sequence;
    ///
    /// let sequence = sequence![1, 5, 10];
    /// assert_eq!(sequence.find(|x| *x > 3), Optional::Present(&5));
    /// assert_eq!(sequence.find(|x| *x > 30), Optional::Absent);
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Optional<&T>
    where
        P: FnMut(&T) -> bool,
    {
        Optional::from_nullable(self.iter().find(|value| predicate(*value)))
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter { current: self }
    }

    /// Applies `transform` to every element, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence;
    ///
    /// assert_eq!(sequence![1, 2, 3].map(|x| x * 2), sequence![2, 4, 6]);
    /// ```
    pub fn map<U, F>(&self, transform: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence::from_vec(self.iter().map(transform).collect())
    }
}

impl<T: Clone> Sequence<T> {
    /// Creates a sequence from a slice; `slice[0]` becomes the head.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        slice
            .iter()
            .rev()
            .fold(Self::Empty, |sequence, value| sequence.cons(value.clone()))
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold_left(Self::Empty, |reversed, value| reversed.cons(value.clone()))
    }

    /// Keeps the elements satisfying `predicate`, preserving order.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(self.iter().filter(|value| predicate(*value)).cloned().collect())
    }

    /// Keeps the longest prefix whose *source* elements satisfy `predicate`.
    ///
    /// Compare [`Sequence::map_while`], which tests the transformed value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence;
    ///
    /// assert_eq!(sequence![1, 2, 7, 3].take_while(|x| *x < 5), sequence![1, 2]);
    /// ```
    pub fn take_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.iter()
                .take_while(|value| predicate(*value))
                .cloned()
                .collect(),
        )
    }

    /// Returns `self` followed by `other`.
    ///
    /// The nodes of `other` are shared, not copied.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.length()`
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let prefix: Vec<&T> = self.iter().collect();
        prefix
            .into_iter()
            .rev()
            .fold(other.clone(), |sequence, value| sequence.cons(value.clone()))
    }
}

// =============================================================================
// Ordered-Literal Construction
// =============================================================================

/// Builds a [`Sequence`] from a list of elements; the first element becomes
/// the head.
///
/// # Examples
///
/// ```rust
/// use foldwise::sequence;
/// use foldwise::sequence::Sequence;
///
/// let numbers = sequence![1, 2, 3];
/// assert_eq!(numbers.head(), Ok(&1));
///
/// let empty: Sequence<i32> = sequence![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::sequence::Sequence::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::Sequence::from([$($element),+])
    };
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`Sequence`].
pub struct Iter<'a, T> {
    current: &'a Sequence<T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            Sequence::Node(value, rest) => {
                self.current = rest.sequence();
                Some(value)
            }
            Sequence::Empty => None,
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a [`Sequence`].
///
/// Uniquely owned nodes are moved out; nodes shared with another sequence
/// are cloned.
pub struct IntoIter<T> {
    remaining: Sequence<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::take(&mut self.remaining) {
            Sequence::Node(value, rest) => {
                self.remaining = rest.into_sequence();
                Some(value)
            }
            Sequence::Empty => None,
        }
    }
}

impl<T: Clone> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        elements
            .into_iter()
            .rev()
            .fold(Self::Empty, |sequence, value| sequence.cons(value))
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { remaining: self }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

/// Hashes every element in order, then the element count, in one pass.
impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0_usize;
        for value in self {
            value.hash(state);
            count += 1;
        }
        count.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Sequence<T> {
    type Inner = T;
    type WithType<B> = Sequence<B>;
}

impl<T: Clone> Functor for Sequence<T> {
    fn fmap<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> Foldable for Sequence<T> {
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        Self::fold_left(self, init, function)
    }

    fn fold_right<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        Self::fold_right(self, init, function)
    }

    fn length(&self) -> usize {
        Self::length(self)
    }
}

/// Moves the uniquely owned nodes of `self` into the result; only nodes
/// shared with another sequence are cloned. `other` is reused as the tail.
impl<T: Clone> Semigroup for Sequence<T> {
    fn combine(self, other: Self) -> Self {
        let prefix: Vec<T> = self.into_iter().collect();
        prefix
            .into_iter()
            .rev()
            .fold(other, |sequence, value| sequence.cons(value))
    }
}

impl<T: Clone> Monoid for Sequence<T> {
    fn empty() -> Self {
        Self::Empty
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(Sequence::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor {
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

    #[rstest]
    fn test_new_is_empty() {
        let sequence: Sequence<i32> = Sequence::new();
        assert!(sequence.is_empty());
        assert_eq!(sequence.length(), 0);
    }

    #[rstest]
    fn test_literal_order_puts_first_element_outermost() {
        let sequence = sequence![1, 2, 3];
        match &sequence {
            Sequence::Node(value, rest) => {
                assert_eq!(*value, 1);
                assert_eq!(rest.head(), Ok(&2));
            }
            Sequence::Empty => panic!("expected a node"),
        }
    }

    #[rstest]
    fn test_head_and_tail_on_empty_fail() {
        let sequence: Sequence<i32> = Sequence::new();
        assert_eq!(sequence.head(), Err(EmptySequenceError::new("head")));
        assert_eq!(sequence.tail(), Err(EmptySequenceError::new("tail")));
    }

    #[rstest]
    fn test_tail_returns_shared_rest() {
        let rest = Link::new(sequence![2, 3]);
        let sequence = Sequence::Node(1, rest.clone());
        let Sequence::Node(_, own_rest) = &sequence else {
            panic!("expected a node");
        };
        assert!(own_rest.ptr_eq(&rest));
        assert!(std::ptr::eq(sequence.tail().unwrap(), rest.sequence()));
    }

    #[rstest]
    fn test_cons_on_clone_keeps_original() {
        let original = sequence![1, 2];
        let extended = original.clone().cons(0);
        assert_eq!(original, sequence![1, 2]);
        assert_eq!(extended, sequence![0, 1, 2]);
    }

    #[rstest]
    #[case(0, Optional::Present(&10))]
    #[case(2, Optional::Present(&30))]
    #[case(3, Optional::Absent)]
    fn test_get(#[case] index: usize, #[case] expected: Optional<&i32>) {
        let sequence = sequence![10, 20, 30];
        assert_eq!(sequence.get(index), expected);
    }

    #[rstest]
    fn test_uncons() {
        let sequence = sequence![1, 2];
        assert_eq!(sequence.uncons(), Optional::Present((&1, &sequence![2])));
        assert_eq!(Sequence::<i32>::new().uncons(), Optional::Absent);
    }

    #[rstest]
    fn test_reverse_and_append() {
        let sequence = sequence![1, 2, 3];
        assert_eq!(sequence.reverse(), sequence![3, 2, 1]);
        assert_eq!(sequence.append(&sequence![4]), sequence![1, 2, 3, 4]);
        assert_eq!(Sequence::new().append(&sequence), sequence);
    }

    #[rstest]
    fn test_append_shares_suffix() {
        let suffix = sequence![3, 4];
        let combined = sequence![1, 2].append(&suffix);
        let shared = combined.tail().and_then(Sequence::tail).unwrap();
        match (shared, &suffix) {
            (Sequence::Node(_, left), Sequence::Node(_, right)) => assert!(left.ptr_eq(right)),
            _ => panic!("expected nodes"),
        }
    }

    #[rstest]
    fn test_filter_and_take_while() {
        let sequence = sequence![1, 2, 3, 4, 5];
        assert_eq!(sequence.filter(|x| x % 2 == 1), sequence![1, 3, 5]);
        assert_eq!(sequence.take_while(|x| *x < 3), sequence![1, 2]);
    }

    #[rstest]
    fn test_into_iter_moves_unique_and_clones_shared() {
        let shared = sequence![String::from("b"), String::from("c")];
        let sequence = shared.clone().cons(String::from("a"));
        let collected: Vec<String> = sequence.into_iter().collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
        assert_eq!(shared.length(), 2);
    }

    #[rstest]
    fn test_display_and_debug() {
        let sequence = sequence![1, 2, 3];
        assert_eq!(format!("{sequence}"), "[1, 2, 3]");
        assert_eq!(format!("{sequence:?}"), "[1, 2, 3]");
        assert_eq!(format!("{}", Sequence::<i32>::new()), "[]");
    }

    #[rstest]
    fn test_hash_respects_order() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(sequence: &Sequence<i32>) -> u64 {
            let mut hasher = DefaultHasher::new();
            sequence.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash_of(&sequence![1, 2]), hash_of(&sequence![1, 2]));
        assert_ne!(hash_of(&sequence![1, 2]), hash_of(&sequence![2, 1]));
    }

    #[rstest]
    fn test_drop_long_sequence() {
        let sequence: Sequence<u32> = (0..1_000_000).collect();
        assert_eq!(sequence.length(), 1_000_000);
        drop(sequence);
    }

    #[rstest]
    fn test_drop_long_sequence_with_shared_tail() {
        let tail: Sequence<u32> = (0..500_000).collect();
        let front = (0..500_000).fold(tail.clone(), |sequence, value| sequence.cons(value));
        drop(tail);
        assert_eq!(front.length(), 1_000_000);
        drop(front);
    }

    #[rstest]
    fn test_hash_covers_elements_then_count() {
        use std::collections::hash_map::DefaultHasher;

        let mut expected = DefaultHasher::new();
        1_i32.hash(&mut expected);
        2_i32.hash(&mut expected);
        2_usize.hash(&mut expected);

        let mut actual = DefaultHasher::new();
        sequence![1, 2].hash(&mut actual);
        assert_eq!(actual.finish(), expected.finish());
    }

    #[derive(Debug)]
    struct Tracked {
        id: u32,
        clones: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            self.clones.set(self.clones.get() + 1);
            Self {
                id: self.id,
                clones: std::rc::Rc::clone(&self.clones),
            }
        }
    }

    fn tracked(id: u32, clones: &std::rc::Rc<std::cell::Cell<usize>>) -> Tracked {
        Tracked {
            id,
            clones: std::rc::Rc::clone(clones),
        }
    }

    #[rstest]
    fn test_combine_moves_unshared_nodes() {
        let clones = std::rc::Rc::new(std::cell::Cell::new(0));
        let left = sequence![tracked(1, &clones), tracked(2, &clones)];
        let right = sequence![tracked(3, &clones)];

        let combined = left.combine(right);

        let ids: Vec<u32> = combined.iter().map(|value| value.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(clones.get(), 0);
    }

    #[rstest]
    fn test_combine_clones_only_shared_nodes() {
        let clones = std::rc::Rc::new(std::cell::Cell::new(0));
        let shared = sequence![tracked(2, &clones), tracked(3, &clones)];
        let left = shared.clone().cons(tracked(1, &clones));
        let before = clones.get();

        let combined = left.combine(Sequence::new());

        let ids: Vec<u32> = combined.iter().map(|value| value.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(clones.get() - before, 2);
        assert_eq!(shared.length(), 2);
    }

    #[rstest]
    fn test_monoid_combine() {
        let combined = sequence![1, 2].combine(Sequence::empty());
        assert_eq!(combined, sequence![1, 2]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_as_array() {
        let json = serde_json::to_string(&sequence![1, 2, 3]).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[rstest]
    fn test_deserialize_preserves_order() {
        let sequence: Sequence<i32> = serde_json::from_str("[3,1,2]").unwrap();
        assert_eq!(sequence, sequence![3, 1, 2]);
    }

    #[rstest]
    fn test_deserialize_empty() {
        let sequence: Sequence<String> = serde_json::from_str("[]").unwrap();
        assert!(sequence.is_empty());
    }
}
