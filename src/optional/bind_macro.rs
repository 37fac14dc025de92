//! `bind!` macro for sequential binding over [`Optional`](super::Optional).
//!
//! Each `pattern <= expression;` step unwraps a present value and makes it
//! available to every later step. The first absent step ends the whole
//! block with `Absent`, and no expression after it is evaluated.
//!
//! # Syntax
//!
//! - `pattern <= expression;` binds the value held by an `Optional`
//! - `let pattern = expression;` is a plain binding
//! - `yield expression` ends the block and wraps its value as `Present`
//! - `expression` ends the block with an `Optional` computed directly
//!
//! Patterns may be identifiers, tuples or `_`.
//!
//! # Examples
//!
//! ```rust
//! use foldwise::bind;
//! use foldwise::optional::Optional;
//!
//! fn lookup_port(name: &str) -> Optional<u16> {
//!     match name {
//!         "http" => Optional::Present(80),
//!         "https" => Optional::Present(443),
//!         _ => Optional::Absent,
//!     }
//! }
//!
//! let span = bind! {
//!     low <= lookup_port("http");
//!     high <= lookup_port("https");
//!     let width = high - low;
//!     yield width
//! };
//! assert_eq!(span, Optional::Present(363));
//!
//! let missing = bind! {
//!     low <= lookup_port("http");
//!     high <= lookup_port("gopher");
//!     yield high - low
//! };
//! assert_eq!(missing, Optional::Absent);
//! ```
//!
//! # Expansion
//!
//! `pattern <= expression; rest` becomes
//!
//! ```rust,ignore
//! expression.flat_map(move |pattern| { /* rest */ })
//! ```

/// Sequential binding over [`Optional`](crate::optional::Optional) values.
///
/// See the [module documentation](crate::optional) for the full syntax.
///
/// # Examples
///
/// ```rust
/// use foldwise::bind;
/// use foldwise::optional::Optional;
///
/// let total = bind! {
///     (left, right) <= Optional::Present((2, 3));
///     _ <= Optional::Present(());
///     yield left * right
/// };
/// assert_eq!(total, Optional::Present(6));
/// ```
#[macro_export]
macro_rules! bind {
    // ==========================================================================
    // Terminal: yield
    // ==========================================================================

    (yield $value:expr) => {
        $crate::optional::Optional::wrap($value)
    };

    // ==========================================================================
    // Bind: pattern <= optional; rest
    // ==========================================================================

    ($pattern:ident <= $optional:expr ; $($rest:tt)+) => {
        $optional.flat_map(move |$pattern| {
            $crate::bind!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $optional:expr ; $($rest:tt)+) => {
        $optional.flat_map(move |($($pattern)*)| {
            $crate::bind!($($rest)+)
        })
    };

    (_ <= $optional:expr ; $($rest:tt)+) => {
        $optional.flat_map(move |_| {
            $crate::bind!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $value:expr ; $($rest:tt)+) => {
        {
            let $pattern = $value;
            $crate::bind!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $value:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $value;
            $crate::bind!($($rest)+)
        }
    };

    // ==========================================================================
    // Terminal: expression
    // ==========================================================================

    ($result:expr) => {
        $result
    };
}

#[cfg(test)]
mod tests {
    use crate::optional::Optional;
    use rstest::rstest;
    use std::cell::Cell;

    fn positive(value: i32) -> Optional<i32> {
        if value > 0 {
            Optional::Present(value)
        } else {
            Optional::Absent
        }
    }

    #[rstest]
    fn binds_in_order() {
        let result = bind! {
            x <= positive(5);
            y <= positive(10);
            yield x + y
        };
        assert_eq!(result, Optional::Present(15));
    }

    #[rstest]
    fn let_binding_between_steps() {
        let result = bind! {
            x <= positive(5);
            let doubled = x * 2;
            y <= positive(doubled);
            yield y + 1
        };
        assert_eq!(result, Optional::Present(11));
    }

    #[rstest]
    fn absent_step_skips_the_rest() {
        let counter = Cell::new(0);
        let later = &counter;
        let result: Optional<i32> = bind! {
            x <= positive(5);
            y <= positive(-1);
            z <= {
                later.set(later.get() + 1);
                positive(x + y)
            };
            yield {
                later.set(later.get() + 1);
                z
            }
        };
        assert_eq!(result, Optional::Absent);
        assert_eq!(counter.get(), 0);
    }

    #[rstest]
    fn terminal_expression_is_returned_as_is() {
        let result = bind! {
            x <= positive(3);
            positive(x - 3)
        };
        assert_eq!(result, Optional::Absent);
    }

    #[rstest]
    fn single_expression() {
        let result: Optional<i32> = bind! {
            Optional::Present(42)
        };
        assert_eq!(result, Optional::Present(42));
    }

    #[rstest]
    fn wildcard_and_tuple_patterns() {
        let result = bind! {
            _ <= positive(1);
            (a, b) <= Optional::Present((1, 2));
            let (c, d) = (3, 4);
            yield a + b + c + d
        };
        assert_eq!(result, Optional::Present(10));
    }

    #[rstest]
    fn yield_wraps_null_payload() {
        let result = bind! {
            _ <= positive(1);
            yield None::<i32>
        };
        assert_eq!(result, Optional::Present(None));
    }
}
