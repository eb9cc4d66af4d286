//! Unit tests for Either<L, R> type.
//!
//! Either represents a value that can be one of two types:
//! - `Left(L)`: Contains a value of type L
//! - `Right(R)`: Contains a value of type R
//!
//! The type class instances are right-biased: `Left` passes through
//! `fmap`, `flat_map` and the folds untouched.

#![cfg(feature = "control")]

use funkit::control::Either;
use funkit::typeclass::{Foldable, Functor, Monad, Unit};
use rstest::rstest;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn either_right_is_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
#[case(Either::Left(42), Some(42), None)]
#[case(Either::Right('r'), None, Some('r'))]
fn either_extraction(
    #[case] value: Either<i32, char>,
    #[case] left: Option<i32>,
    #[case] right: Option<char>,
) {
    assert_eq!(value.left_ref().copied(), left);
    assert_eq!(value.right_ref().copied(), right);
    assert_eq!(value.left(), left);
    assert_eq!(value.right(), right);
}

// =============================================================================
// Lazy Fallbacks
// =============================================================================

#[rstest]
fn either_get_or_else_suppliers_are_lazy() {
    let left: Either<i32, i32> = Either::Left(1);
    assert_eq!(left.get_left_or_else(|| unreachable!()), 1);
    assert_eq!(left.get_right_or_else(|| 9), 9);
}

#[rstest]
fn either_container_fallbacks() {
    let left: Either<&str, i32> = Either::Left("down");
    let right: Either<&str, i32> = Either::Right(3);

    assert_eq!(left.right_or_else(|| Either::Right(0)), Either::Right(0));
    assert_eq!(right.right_or_else(|| unreachable!()), Either::Right(3));
    assert_eq!(left.left_or_else(|| unreachable!()), Either::Left("down"));
    assert_eq!(right.left_or_else(|| Either::Left("forced")), Either::Left("forced"));
}

// =============================================================================
// Mapping, Folding and Swapping
// =============================================================================

#[rstest]
fn either_map_left_and_map_right() {
    let left: Either<i32, i32> = Either::Left(2);
    assert_eq!(left.map_left(|n| n * 10), Either::Left(20));
    assert_eq!(left.map_right(|n| n * 10), Either::Left(2));
}

#[rstest]
fn either_bimap_and_fold() {
    let right: Either<String, i32> = Either::Right(4);
    assert_eq!(right.clone().bimap(|s| s.len(), |n| n + 1), Either::Right(5));
    assert_eq!(right.fold(|s| s.len(), |n| n as usize), 4);
}

#[rstest]
fn either_swap_exchanges_sides() {
    let value: Either<i32, char> = Either::Left(7);
    assert_eq!(value.swap(), Either::Right(7));
}

#[rstest]
fn either_result_conversions() {
    let from_ok = Either::from(Ok::<i32, String>(5));
    let from_err = Either::from(Err::<i32, String>("bad".to_string()));
    assert_eq!(from_ok, Either::Right(5));
    assert_eq!(from_err, Either::Left("bad".to_string()));

    let back: Result<i32, String> = from_ok.into();
    assert_eq!(back, Ok(5));
}

// =============================================================================
// Type Class Instances
// =============================================================================

#[rstest]
fn either_fmap_is_right_biased() {
    let left: Either<&str, i32> = Either::Left("kept");
    assert_eq!(left.fmap(|n| n + 1), Either::Left("kept"));
    assert_eq!(Either::<&str, i32>::Right(1).fmap(|n| n + 1), Either::Right(2));
}

#[rstest]
fn either_flat_map_short_circuits() {
    let parsed = |text: &'static str| -> Either<String, i32> {
        Either::from(text.parse::<i32>().map_err(|_| format!("not a number: {text}")))
    };
    let sum = <Either<String, i32>>::unit(1)
        .flat_map(move |a| parsed("2").fmap(move |b| a + b))
        .flat_map(move |total| parsed("x").fmap(move |c| total + c));
    assert_eq!(sum, Either::Left("not a number: x".to_string()));
}

#[rstest]
fn either_folds_over_right_only() {
    let right: Either<&str, i32> = Either::Right(5);
    let left: Either<&str, i32> = Either::Left("none");
    assert_eq!(right.fold_left(1, |acc, n| acc + n), 6);
    assert_eq!(left.fold_right(1, |n, acc| acc + n), 1);
}

// =============================================================================
// Debug and Hash
// =============================================================================

#[rstest]
fn either_debug_output() {
    let left: Either<i32, String> = Either::Left(1);
    let right: Either<i32, String> = Either::Right("x".to_string());
    assert_eq!(format!("{left:?}"), "Left(1)");
    assert_eq!(format!("{right:?}"), "Right(\"x\")");
}

#[rstest]
fn either_hash_consistency() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(Either::<i32, i32>::Left(1));
    set.insert(Either::<i32, i32>::Left(1));
    set.insert(Either::<i32, i32>::Right(1));
    assert_eq!(set.len(), 2);
}
