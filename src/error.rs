//! Error types for partial accessors.
//!
//! Only two operations in this crate can fail: reading the head or tail of
//! an empty [`Sequence`](crate::sequence::Sequence) and extracting the value
//! of an absent [`Optional`](crate::optional::Optional). Both failures are
//! returned as values; the combinators themselves never produce them.

/// Represents an attempt to read the head or tail of an empty sequence.
///
/// # Examples
///
/// ```rust
/// use foldwise::sequence::Sequence;
/// use foldwise::error::EmptySequenceError;
///
/// let empty: Sequence<i32> = Sequence::new();
/// assert_eq!(empty.head(), Err(EmptySequenceError { operation: "head" }));
/// assert_eq!(
///     format!("{}", EmptySequenceError { operation: "tail" }),
///     "Sequence::tail: called on an empty sequence"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptySequenceError {
    /// The name of the accessor that was called.
    pub operation: &'static str,
}

impl EmptySequenceError {
    pub(crate) const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Sequence::{}: called on an empty sequence",
            self.operation
        )
    }
}

impl std::error::Error for EmptySequenceError {}

/// Represents an attempt to extract the value of an absent optional.
///
/// Returned by [`Optional::get`](crate::optional::Optional::get).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyOptionalError;

impl std::fmt::Display for EmptyOptionalError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Optional::get: called on an absent value")
    }
}

impl std::error::Error for EmptyOptionalError {}

/// Unified error type for every failure this crate can report.
///
/// Lets callers mix sequence and optional accessors behind a single `?`.
///
/// # Examples
///
/// ```rust
/// use foldwise::error::Error;
/// use foldwise::optional::Optional;
/// use foldwise::sequence;
///
/// fn first_plus_lookup(lookup: Optional<i32>) -> Result<i32, Error> {
///     let numbers = sequence![10, 20];
///     Ok(numbers.head()? + lookup.get()?)
/// }
///
/// assert_eq!(first_plus_lookup(Optional::Present(5)), Ok(15));
/// assert!(first_plus_lookup(Optional::Absent).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// `head` or `tail` on an empty sequence.
    EmptySequence(EmptySequenceError),
    /// `get` on an absent optional.
    EmptyOptional(EmptyOptionalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySequence(error) => write!(formatter, "{error}"),
            Self::EmptyOptional(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptySequence(error) => Some(error),
            Self::EmptyOptional(error) => Some(error),
        }
    }
}

impl From<EmptySequenceError> for Error {
    fn from(error: EmptySequenceError) -> Self {
        Self::EmptySequence(error)
    }
}

impl From<EmptyOptionalError> for Error {
    fn from(error: EmptyOptionalError) -> Self {
        Self::EmptyOptional(error)
    }
}
