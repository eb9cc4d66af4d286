//! Either type - a value that is exactly one of two alternatives.
//!
//! This module provides the `Either<L, R>` type, which holds either a
//! `Left(L)` or a `Right(R)`. By convention `Right` is the success path:
//! [`Functor`], [`Monad`], [`Foldable`] and [`Zippable`] all act on the right
//! side and pass `Left` through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Either;
//! use funkit::typeclass::Monad;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").flat_map(|n| Either::Right(n * 2));
//! assert_eq!(doubled, Either::Right(42));
//!
//! let failed = parse("x").flat_map(|n| Either::Right(n * 2));
//! assert!(failed.is_left());
//!
//! let label = failed.fold(|error| format!("error: {error}"), |n| format!("value: {n}"));
//! assert!(label.starts_with("error"));
//! ```

use std::fmt;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::typeclass::{
    Foldable, Functor, Monad, MonadRec, Rebind, TypeConstructor, Unit, Unzippable, Zippable,
};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Either;
///
/// let value: Either<&str, i32> = Either::Right(1);
/// assert_eq!(value.right(), Some(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into the left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into the right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Lazy Fallbacks
    // =========================================================================

    /// Returns the left value, or the supplier's value for a `Right`.
    ///
    /// The supplier runs only when it is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("unused");
    /// assert_eq!(right.get_left_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn get_left_or_else<F>(self, supplier: F) -> L
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => supplier(),
        }
    }

    /// Returns the right value, or the supplier's value for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Either;
    ///
    /// let left: Either<&str, i32> = Either::Left("missing");
    /// assert_eq!(left.get_right_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_right_or_else<F>(self, supplier: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => supplier(),
            Self::Right(value) => value,
        }
    }

    /// Keeps a `Left`, otherwise replaces `self` with the supplier's `Either`.
    #[inline]
    pub fn left_or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Left(_) => self,
            Self::Right(_) => supplier(),
        }
    }

    /// Keeps a `Right`, otherwise replaces `self` with the supplier's `Either`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Either;
    ///
    /// let primary: Either<&str, i32> = Either::Left("offline");
    /// let recovered = primary.right_or_else(|| Either::Right(5));
    /// assert_eq!(recovered, Either::Right(5));
    /// ```
    #[inline]
    pub fn right_or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Left(_) => supplier(),
            Self::Right(_) => self,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Maps the left value, leaving a `Right` untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the right value, leaving a `Left` untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps whichever side is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Collapses both sides into a single value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
}

impl<L, R, B> Rebind<B> for Either<L, R> {
    type WithType = Either<L, B>;
}

impl<L, R, B> Functor<B> for Either<L, R> {
    #[inline]
    fn fmap<F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B + 'static,
    {
        self.map_right(function)
    }
}

impl<L, R> Unit for Either<L, R> {
    #[inline]
    fn unit(value: R) -> Self {
        Self::Right(value)
    }
}

impl<L, R, B> Monad<B> for Either<L, R> {
    #[inline]
    fn flat_map<F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + 'static,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}

impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(value, init),
        }
    }
}

/// Pairs two `Right`s. Otherwise the first `Left` encountered wins.
impl<L, A, B> Zippable<Either<L, B>> for Either<L, A> {
    type Zipped = Either<L, (A, B)>;

    fn zip(self, other: Either<L, B>) -> Either<L, (A, B)> {
        match (self, other) {
            (Self::Right(first), Either::Right(second)) => Either::Right((first, second)),
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
        }
    }
}

/// A `Left` is duplicated into both outputs.
impl<L: Clone, A, B> Unzippable for Either<L, (A, B)> {
    type First = Either<L, A>;
    type Second = Either<L, B>;

    fn unzip(self) -> (Either<L, A>, Either<L, B>) {
        match self {
            Self::Left(value) => (Either::Left(value.clone()), Either::Left(value)),
            Self::Right((first, second)) => (Either::Right(first), Either::Right(second)),
        }
    }
}

impl<L, A, B> MonadRec<A, B> for Either<L, ControlFlow<B, A>> {
    fn tail_rec_m<F>(initial: A, step: F) -> Either<L, B>
    where
        F: Fn(A) -> Self + 'static,
    {
        let mut seed = initial;
        loop {
            match step(seed) {
                Self::Left(value) => return Either::Left(value),
                Self::Right(ControlFlow::Continue(next)) => seed = next,
                Self::Right(ControlFlow::Break(done)) => return Either::Right(done),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction and Extraction
    // =========================================================================

    #[rstest]
    fn either_left_construction() {
        let value: Either<i32, String> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
        assert_eq!(value.left(), Some(42));
    }

    #[rstest]
    fn either_right_construction() {
        let value: Either<i32, String> = Either::Right("hello".to_string());
        assert!(value.is_right());
        assert_eq!(value.right_ref(), Some(&"hello".to_string()));
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }

    // =========================================================================
    // Lazy Fallbacks
    // =========================================================================

    #[rstest]
    fn get_left_or_else_does_not_call_supplier_for_left() {
        let value: Either<i32, ()> = Either::Left(1);
        let result = value.get_left_or_else(|| unreachable!("supplier must stay lazy"));
        assert_eq!(result, 1);
    }

    #[rstest]
    fn get_right_or_else_calls_supplier_for_left() {
        let value: Either<(), i32> = Either::Left(());
        assert_eq!(value.get_right_or_else(|| 9), 9);
    }

    #[rstest]
    #[case(Either::Left(1), Either::Left(1))]
    #[case(Either::Right('r'), Either::Left(0))]
    fn left_or_else_keeps_left(#[case] input: Either<i32, char>, #[case] expected: Either<i32, char>) {
        assert_eq!(input.left_or_else(|| Either::Left(0)), expected);
    }

    #[rstest]
    #[case(Either::Right('r'), Either::Right('r'))]
    #[case(Either::Left(1), Either::Right('z'))]
    fn right_or_else_keeps_right(#[case] input: Either<i32, char>, #[case] expected: Either<i32, char>) {
        assert_eq!(input.right_or_else(|| Either::Right('z')), expected);
    }

    // =========================================================================
    // Type Class Instances
    // =========================================================================

    #[rstest]
    fn fmap_maps_right_only() {
        let right: Either<&str, i32> = Either::Right(2);
        let left: Either<&str, i32> = Either::Left("no");
        assert_eq!(right.fmap(|n| n * 10), Either::Right(20));
        assert_eq!(left.fmap(|n| n * 10), Either::Left("no"));
    }

    #[rstest]
    fn flat_map_short_circuits_on_left() {
        let left: Either<&str, i32> = Either::Left("stop");
        let result = left.flat_map(|n| Either::Right(n + 1));
        assert_eq!(result, Either::Left("stop"));
    }

    #[rstest]
    fn flat_map_chains_rights() {
        let result = <Either<&str, i32>>::unit(1)
            .flat_map(|n| Either::Right(n + 1))
            .flat_map(|n| if n > 1 { Either::Left("too big") } else { Either::Right(n) });
        assert_eq!(result, Either::Left("too big"));
    }

    #[rstest]
    fn fold_over_zero_or_one_element() {
        let right: Either<&str, i32> = Either::Right(5);
        let left: Either<&str, i32> = Either::Left("none");
        assert_eq!(right.fold_left(1, |a, b| a + b), 6);
        assert_eq!(left.fold_right(1, |a, b| a + b), 1);
    }

    #[rstest]
    #[case(Either::Right(1), Either::Right('a'), Either::Right((1, 'a')))]
    #[case(Either::Left("first"), Either::Right('a'), Either::Left("first"))]
    #[case(Either::Right(1), Either::Left("second"), Either::Left("second"))]
    #[case(Either::Left("first"), Either::Left("second"), Either::Left("first"))]
    fn zip_pairs_rights_and_keeps_first_left(
        #[case] first: Either<&'static str, i32>,
        #[case] second: Either<&'static str, char>,
        #[case] expected: Either<&'static str, (i32, char)>,
    ) {
        assert_eq!(first.zip(second), expected);
    }

    #[rstest]
    fn unzip_left_duplicates_left() {
        let value: Either<&str, (i32, char)> = Either::Left("error");
        assert_eq!(value.unzip(), (Either::Left("error"), Either::Left("error")));
    }

    #[rstest]
    fn unzip_right_splits_pair() {
        let value: Either<&str, (i32, char)> = Either::Right((1, 'a'));
        assert_eq!(value.unzip(), (Either::Right(1), Either::Right('a')));
    }

    #[rstest]
    fn tail_rec_m_stops_on_left() {
        let result = <Either<u32, ControlFlow<u32, u32>>>::tail_rec_m(0, |n| {
            if n == 10 {
                Either::Left(n)
            } else {
                Either::Right(ControlFlow::Continue(n + 1))
            }
        });
        assert_eq!(result, Either::Left(10));
    }
}
