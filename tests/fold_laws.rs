//! Property-based tests for Foldable and the generic fold algorithms.

use funkit::fold::{all, any, element, filter, filter_slice, find, length, null, to_list, to_slice};
use funkit::persistent::List;
use funkit::typeclass::Foldable;
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..32)
}

fn is_even(n: &i32) -> bool {
    n % 2 == 0
}

proptest! {
    /// fold_left with append reproduces the order, fold_right reverses it
    #[test]
    fn prop_fold_directions(values in small_vec()) {
        let list = List::from(values.clone());
        let forward = list.clone().fold_left(Vec::new(), |mut acc, x| { acc.push(x); acc });
        let backward = list.fold_right(Vec::new(), |x, mut acc| { acc.push(x); acc });

        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(forward, values);
        prop_assert_eq!(backward, reversed);
    }

    /// Vec and List fold to the same sum
    #[test]
    fn prop_vec_and_list_agree(values in small_vec()) {
        let from_vec = values.clone().fold_left(0i64, |acc, x| acc + i64::from(x));
        let from_list = List::from(values).fold_left(0i64, |acc, x| acc + i64::from(x));
        prop_assert_eq!(from_vec, from_list);
    }

    /// filter never grows the structure
    #[test]
    fn prop_filter_length_bound(values in small_vec()) {
        let total = length(values.clone());
        let kept = length(filter(values, is_even));
        prop_assert!(kept <= total);
    }

    /// filter and filter_slice keep the same elements
    #[test]
    fn prop_filter_matches_filter_slice(values in small_vec()) {
        let as_list = filter(values.clone(), is_even);
        let as_vec = filter_slice(values, is_even);
        prop_assert_eq!(to_slice(as_list), as_vec);
    }

    /// all and any are dual through negation
    #[test]
    fn prop_all_any_duality(values in small_vec()) {
        prop_assert_eq!(all(values.clone(), is_even), !any(values, |n| !is_even(n)));
    }

    /// find agrees with the iterator search
    #[test]
    fn prop_find_matches_iterator(values in small_vec()) {
        let expected = values.iter().copied().find(is_even);
        prop_assert_eq!(find(values, is_even), expected);
    }

    /// element agrees with contains
    #[test]
    fn prop_element_matches_contains(values in small_vec(), needle in -50i32..50) {
        prop_assert_eq!(element(values.clone(), &needle), values.contains(&needle));
    }

    /// to_list and to_slice preserve order and length
    #[test]
    fn prop_conversions_round_trip(values in small_vec()) {
        let list = to_list(values.clone());
        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(null(list.clone()), values.is_empty());
        prop_assert_eq!(to_slice(list), values);
    }
}
