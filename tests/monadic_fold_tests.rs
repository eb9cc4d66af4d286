//! Scenario tests for the monadic fold algorithms.
//!
//! The monad is picked by what the predicate returns: `Option` for
//! validation, `Vec`/`List` for nondeterminism, `State` for counting visits.

use funkit::control::Either;
use funkit::effect::State;
use funkit::fold::{all_m, any_m, filter_m, filter_slice_m, find_m, fold_left_m, fold_right_m};
use funkit::persistent::List;
use rstest::rstest;

fn counting_even(n: &i32) -> State<usize, bool> {
    let n = *n;
    State::new(move |visited: usize| (visited + 1, n % 2 == 0))
}

// =============================================================================
// Effects reach every element
// =============================================================================

#[rstest]
fn find_m_visits_every_element_after_match() {
    let search = find_m(List::from(vec![1, 2, 3, 4, 5]), counting_even);
    assert_eq!(search.run(0), (5, Some(2)));
}

#[rstest]
fn any_m_does_not_short_circuit_on_true() {
    let search = any_m(vec![2, 1, 1], counting_even);
    assert_eq!(search.run(0), (3, true));
}

#[rstest]
fn all_m_does_not_short_circuit_on_false() {
    let search = all_m(vec![1, 2, 4, 6], counting_even);
    assert_eq!(search.run(10), (14, false));
}

#[rstest]
fn filter_slice_m_counts_and_keeps() {
    let kept = filter_slice_m(vec![1, 2, 3, 4], counting_even);
    assert_eq!(kept.run(0), (4, vec![2, 4]));
}

#[rstest]
fn fold_left_m_threads_state() {
    let running = fold_left_m(vec![1, 2, 3], 0, |total: i32, n: i32| {
        State::new(move |log: Vec<i32>| {
            let mut log = log;
            log.push(total + n);
            (log, total + n)
        })
    });
    assert_eq!(running.run(Vec::new()), (vec![1, 3, 6], 6));
}

#[rstest]
fn fold_right_m_threads_state_from_the_right() {
    let running = fold_right_m(vec!['a', 'b', 'c'], String::new(), |c: char, text: String| {
        State::new(move |order: Vec<char>| {
            let mut order = order;
            order.push(c);
            (order, format!("{text}{c}"))
        })
    });
    assert_eq!(running.run(Vec::new()), (vec!['c', 'b', 'a'], "cba".to_string()));
}

// =============================================================================
// Nondeterminism
// =============================================================================

#[rstest]
fn filter_m_list_monad_is_powerset() {
    let subsets: List<List<i32>> = filter_m(vec![1, 2, 3], |_| List::from(vec![true, false]));
    let expected: List<List<i32>> = List::from(vec![
        List::from(vec![1, 2, 3]),
        List::from(vec![1, 2]),
        List::from(vec![1, 3]),
        List::from(vec![1]),
        List::from(vec![2, 3]),
        List::from(vec![2]),
        List::from(vec![3]),
        List::nil(),
    ]);
    assert_eq!(subsets, expected);
}

#[rstest]
fn filter_m_vec_monad_on_empty_input() {
    let subsets: Vec<List<i32>> = filter_m(Vec::<i32>::new(), |_| vec![true, false]);
    assert_eq!(subsets, vec![List::nil()]);
}

#[rstest]
fn fold_left_m_list_monad_enumerates_paths() {
    let paths = fold_left_m(List::from(vec![1, 2]), 0, |total: i32, n: i32| {
        List::from(vec![total + n, total - n])
    });
    assert_eq!(paths, List::from(vec![3, -1, 1, -3]));
}

// =============================================================================
// Failure propagation
// =============================================================================

#[rstest]
fn fold_left_m_either_stops_at_first_left() {
    let result = fold_left_m(vec![4, 2, 0, 1], 100, |total: i32, n: i32| {
        if n == 0 {
            Either::Left(format!("division by zero after {total}"))
        } else {
            Either::Right(total / n)
        }
    });
    assert_eq!(result, Either::Left("division by zero after 12".to_string()));
}

#[rstest]
fn all_m_either_success() {
    let result: Either<String, bool> = all_m(vec![1, 2, 3], |n| Either::Right(*n > 0));
    assert_eq!(result, Either::Right(true));
}

#[rstest]
fn find_m_option_failure() {
    let result: Option<Option<i32>> = find_m(vec![1, -1, 2], |n| (*n >= 0).then_some(*n == 2));
    assert_eq!(result, None);
}

// =============================================================================
// Long inputs
// =============================================================================

#[rstest]
fn find_m_state_over_100_000_elements() {
    let numbers: Vec<u32> = (0..100_000).collect();
    let search = find_m(numbers, |n: &u32| {
        let n = *n;
        State::new(move |visited: usize| (visited + 1, n == 5))
    });
    assert_eq!(search.run(0), (100_000, Some(5)));
}

#[rstest]
fn fold_left_m_option_over_200_000_elements() {
    let numbers: Vec<u64> = (0..200_000).collect();
    let total = fold_left_m(numbers, 0, |total: u64, n: u64| Some(total + n));
    assert_eq!(total, Some(19_999_900_000));
}

#[rstest]
fn fold_right_m_either_over_100_000_elements() {
    let numbers: List<i64> = (0..100_000).collect();
    let total: Either<String, i64> =
        fold_right_m(numbers, 0, |n: i64, total: i64| Either::Right(total + n));
    assert_eq!(total, Either::Right(4_999_950_000));
}

#[rstest]
fn filter_m_state_over_100_000_elements() {
    let numbers: Vec<i32> = (0..100_000).collect();
    let kept = filter_m(numbers, counting_even);
    let (visited, evens) = kept.run(0);
    assert_eq!(visited, 100_000);
    assert_eq!(evens.len(), 50_000);
    assert_eq!(evens.head(), Some(&0));
}

#[rstest]
fn filter_slice_m_option_keeps_order() {
    let numbers: Vec<i32> = (1..=10).collect();
    let kept: Option<Vec<i32>> = filter_slice_m(numbers, |n| Some(n % 3 == 0));
    assert_eq!(kept, Some(vec![3, 6, 9]));
}
