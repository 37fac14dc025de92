//! Bounded conditional transform.
//!
//! [`Sequence::map_while`] fuses a transform with a predicate that is tested
//! against the *transformed* value. Traversal stops at the first value that
//! fails the predicate; that value is discarded and no later element is
//! transformed.
//!
//! This is not `take_while` followed by `map`: that pipeline tests the
//! predicate against the source element and, for every retained element,
//! would need the transform a second time to produce the output.
//!
//! ```rust
//! use foldwise::sequence;
//!
//! let squares = sequence![1, 2, 3, 4, 5].map_while(|x| x * x, |square| *square < 10);
//! assert_eq!(squares, sequence![1, 4, 9]);
//! ```

use std::iter::FusedIterator;

use super::Sequence;

impl<T> Sequence<T> {
    /// Transforms elements in order while the transformed value satisfies
    /// `predicate`, returning the accepted prefix.
    ///
    /// `transform` runs exactly once per visited element. When the predicate
    /// first fails on element k+1, the result holds the first k transformed
    /// values and `transform` has run k+1 times. On an empty sequence
    /// neither function is called.
    ///
    /// # Complexity
    ///
    /// O(n) time, O(1) stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence;
    /// use foldwise::sequence::Sequence;
    ///
    /// let lengths = sequence!["ab", "cde", "fghij", "k"].map_while(|word| word.len(), |length| *length <= 3);
    /// assert_eq!(lengths, sequence![2, 3]);
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert!(empty.map_while(|x| x + 1, |_| true).is_empty());
    /// ```
    pub fn map_while<U, F, P>(&self, mut transform: F, mut predicate: P) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
        P: FnMut(&U) -> bool,
    {
        let mut accepted = Vec::new();
        let mut current = self;
        while let Self::Node(value, rest) = current {
            let transformed = transform(value);
            if !predicate(&transformed) {
                break;
            }
            accepted.push(transformed);
            current = rest.sequence();
        }
        Sequence::from_vec(accepted)
    }

    /// Lazy form of [`Sequence::map_while`].
    ///
    /// Each call to `next` transforms at most one element. After the first
    /// rejected value the iterator is exhausted and never calls `transform`
    /// again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::sequence;
    ///
    /// let source = sequence![1, 2, 3, 4, 5];
    /// let mut squares = source.map_while_iter(|x| x * x, |square| *square < 10);
    /// assert_eq!(squares.next(), Some(1));
    /// assert_eq!(squares.collect::<Vec<_>>(), vec![4, 9]);
    /// ```
    pub fn map_while_iter<U, F, P>(&self, transform: F, predicate: P) -> MapWhile<'_, T, F, P>
    where
        F: FnMut(&T) -> U,
        P: FnMut(&U) -> bool,
    {
        MapWhile {
            remaining: self,
            transform,
            predicate,
            exhausted: false,
        }
    }
}

/// Iterator returned by [`Sequence::map_while_iter`].
pub struct MapWhile<'a, T, F, P> {
    remaining: &'a Sequence<T>,
    transform: F,
    predicate: P,
    exhausted: bool,
}

impl<T, U, F, P> Iterator for MapWhile<'_, T, F, P>
where
    F: FnMut(&T) -> U,
    P: FnMut(&U) -> bool,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        if self.exhausted {
            return None;
        }
        let Sequence::Node(value, rest) = self.remaining else {
            self.exhausted = true;
            return None;
        };
        let transformed = (self.transform)(value);
        if (self.predicate)(&transformed) {
            self.remaining = rest.sequence();
            Some(transformed)
        } else {
            self.exhausted = true;
            None
        }
    }
}

impl<T, U, F, P> FusedIterator for MapWhile<'_, T, F, P>
where
    F: FnMut(&T) -> U,
    P: FnMut(&U) -> bool,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_squares_below_ten() {
        let result = sequence![1, 2, 3, 4, 5].map_while(|x| x * x, |y| *y < 10);
        assert_eq!(result, sequence![1, 4, 9]);
    }

    #[rstest]
    #[case(vec![1, 2, 3, 10, 4], 3)]
    #[case(vec![10, 1, 2], 0)]
    #[case(vec![1, 2, 3], 3)]
    fn test_transform_runs_once_per_visited_element(
        #[case] source: Vec<i32>,
        #[case] accepted: usize,
    ) {
        let calls = Cell::new(0);
        let total = source.len();
        let sequence = Sequence::from(source);
        let result = sequence.map_while(
            |x| {
                calls.set(calls.get() + 1);
                x * 2
            },
            |doubled| *doubled < 20,
        );
        assert_eq!(result.length(), accepted);
        let expected_calls = if accepted == total { total } else { accepted + 1 };
        assert_eq!(calls.get(), expected_calls);
    }

    #[rstest]
    fn test_predicate_sees_transformed_value() {
        // Source values all pass `< 10`; the transformed ones do not.
        let result = sequence![3, 4, 5].map_while(|x| x * 3, |y| *y < 10);
        assert_eq!(result, sequence![9]);
    }

    #[rstest]
    fn test_empty_source_calls_nothing() {
        let empty: Sequence<i32> = Sequence::new();
        let result = empty.map_while(
            |_| -> i32 { panic!("transform called on empty sequence") },
            |_| panic!("predicate called on empty sequence"),
        );
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_map_while_is_stack_safe() {
        let numbers: Sequence<u64> = (0..1_000_000).collect();
        let result = numbers.map_while(|x| x + 1, |_| true);
        assert_eq!(result.length(), 1_000_000);
        assert_eq!(result.head(), Ok(&1));
    }

    #[rstest]
    fn test_iter_matches_eager_and_stops_transforming() {
        let calls = Cell::new(0);
        let source = sequence![1, 2, 3, 4, 5];
        let mut iterator = source.map_while_iter(
            |x| {
                calls.set(calls.get() + 1);
                x * x
            },
            |y| *y < 10,
        );
        let collected: Vec<i32> = iterator.by_ref().collect();
        assert_eq!(collected, vec![1, 4, 9]);
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
        assert_eq!(calls.get(), 4);
    }
}
