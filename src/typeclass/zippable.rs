//! Zippable and Unzippable type classes - pairing containers element-wise.
//!
//! [`Zippable`] combines two containers of the same kind into one container of
//! pairs; [`Unzippable`] is the inverse and splits a container of pairs into
//! two parallel containers.
//!
//! Sequences truncate to the shorter input. Single-value containers pair only
//! when both sides hold a value.
//!
//! # Laws
//!
//! For inputs of equal shape:
//!
//! ```text
//! fa.zip(fb).unzip() == (fa, fb)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::{Unzippable, Zippable};
//!
//! let zipped = Zippable::zip(vec![1, 2, 3], vec!['a', 'b']);
//! assert_eq!(zipped, vec![(1, 'a'), (2, 'b')]);
//!
//! let (numbers, letters) = Unzippable::unzip(zipped);
//! assert_eq!(numbers, vec![1, 2]);
//! assert_eq!(letters, vec!['a', 'b']);
//! ```

/// Combines `self` with `Other` element-wise.
pub trait Zippable<Other>: Sized {
    /// The container of pairs.
    type Zipped;

    /// Pairs up the elements of `self` and `other`.
    fn zip(self, other: Other) -> Self::Zipped;
}

/// Splits a container of pairs into two containers.
pub trait Unzippable: Sized {
    /// The container of first components.
    type First;
    /// The container of second components.
    type Second;

    /// Splits every pair, keeping positions aligned.
    fn unzip(self) -> (Self::First, Self::Second);
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A, B> Zippable<Option<B>> for Option<A> {
    type Zipped = Option<(A, B)>;

    #[inline]
    fn zip(self, other: Option<B>) -> Option<(A, B)> {
        match (self, other) {
            (Some(first), Some(second)) => Some((first, second)),
            _ => None,
        }
    }
}

impl<A, B> Unzippable for Option<(A, B)> {
    type First = Option<A>;
    type Second = Option<B>;

    #[inline]
    fn unzip(self) -> (Option<A>, Option<B>) {
        match self {
            Some((first, second)) => (Some(first), Some(second)),
            None => (None, None),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<A, B> Zippable<Vec<B>> for Vec<A> {
    type Zipped = Vec<(A, B)>;

    fn zip(self, other: Vec<B>) -> Vec<(A, B)> {
        if self.len() != other.len() {
            trace_fallback!(
                left = self.len(),
                right = other.len(),
                "zip truncated to the shorter sequence"
            );
        }
        self.into_iter().zip(other).collect()
    }
}

impl<A, B> Unzippable for Vec<(A, B)> {
    type First = Vec<A>;
    type Second = Vec<B>;

    fn unzip(self) -> (Vec<A>, Vec<B>) {
        self.into_iter().unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), Some('a'), Some((1, 'a')))]
    #[case(Some(1), None, None)]
    #[case(None, Some('a'), None)]
    #[case(None, None, None)]
    fn option_zip(
        #[case] first: Option<i32>,
        #[case] second: Option<char>,
        #[case] expected: Option<(i32, char)>,
    ) {
        assert_eq!(Zippable::zip(first, second), expected);
    }

    #[rstest]
    fn option_unzip_some() {
        assert_eq!(Unzippable::unzip(Some((1, "one"))), (Some(1), Some("one")));
    }

    #[rstest]
    fn option_unzip_none() {
        let value: Option<(i32, i32)> = None;
        assert_eq!(Unzippable::unzip(value), (None, None));
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![4, 5], vec![(1, 4), (2, 5)])]
    #[case(vec![1], vec![4, 5, 6], vec![(1, 4)])]
    #[case(vec![], vec![4, 5], vec![])]
    #[case(vec![1, 2], vec![3, 4], vec![(1, 3), (2, 4)])]
    fn vec_zip_truncates_to_shorter(
        #[case] first: Vec<i32>,
        #[case] second: Vec<i32>,
        #[case] expected: Vec<(i32, i32)>,
    ) {
        assert_eq!(first.zip(second), expected);
    }

    #[rstest]
    fn vec_unzip_round_trip() {
        let zipped = vec![1, 2].zip(vec![3, 4]);
        assert_eq!(zipped.unzip(), (vec![1, 2], vec![3, 4]));
    }
}
