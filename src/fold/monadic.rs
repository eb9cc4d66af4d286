//! Monadic folds: the algorithms of [`crate::fold`] with effectful steps.
//!
//! The predicate (or step function) returns a value in some monad `M`, and
//! the effects of every element are sequenced left to right. The monad is
//! chosen by the type the predicate returns, and so is the result type.
//!
//! None of these functions short-circuit on the pure answer. Once `any_m`
//! has seen `true` it still runs the predicate on the remaining elements, so
//! a counting [`State`](crate::effect::State) sees every element. A monad
//! that short-circuits by itself (a `None`, a `Left`) still stops there.
//!
//! Every fold copies the elements into a `Vec` and walks it with
//! [`MonadRec::tail_rec_m`], one step per element, so inputs of any length
//! run in constant stack space.
//!
//! # Examples
//!
//! ```rust
//! use funkit::fold::fold_left_m;
//!
//! let checked_sum = fold_left_m(vec![1_u8, 2, 3], 0_u8, |total, n| total.checked_add(n));
//! assert_eq!(checked_sum, Some(6));
//!
//! let overflow = fold_left_m(vec![200_u8, 100], 0_u8, |total, n| total.checked_add(n));
//! assert_eq!(overflow, None);
//! ```

use std::ops::ControlFlow;

use super::to_slice;
use crate::persistent::List;
use crate::typeclass::{Foldable, Functor, MonadRec, Rebind, Rebound, Unit};

/// One step of a traversal: the index of the next element with the new
/// accumulator, or the finished result.
type Cursor<Acc, R> = ControlFlow<R, (usize, Acc)>;

/// Walks `elements` in order. `step` receives the index of the following
/// element, the accumulator and the current element, and returns the
/// monadic next cursor. After the last element `finish` builds the result.
fn traverse<A, Acc, R, S, Finish, Step>(
    elements: Vec<A>,
    init: Acc,
    finish: Finish,
    step: Step,
) -> Rebound<S, R>
where
    A: Clone + 'static,
    Acc: 'static,
    S: MonadRec<(usize, Acc), R> + Unit,
    Finish: Fn(Acc) -> R + 'static,
    Step: Fn(usize, Acc, A) -> S + 'static,
{
    S::tail_rec_m((0, init), move |(index, accumulator)| match elements.get(index) {
        Some(element) => step(index + 1, accumulator, element.clone()),
        None => S::unit(ControlFlow::Break(finish(accumulator))),
    })
}

/// Left fold whose step function returns a monad.
///
/// Computes `f(init, x0) >>= |b| f(b, x1) >>= ... >>= unit`.
pub fn fold_left_m<T, A, B, N, S, F>(structure: T, init: B, function: F) -> Rebound<S, B>
where
    T: Foldable<Inner = A>,
    A: Clone + 'static,
    B: Clone + 'static,
    N: Functor<Cursor<B, B>, Inner = B> + Rebind<Cursor<B, B>, WithType = S>,
    S: MonadRec<(usize, B), B> + Unit,
    F: Fn(B, A) -> N + 'static,
{
    traverse(to_slice(structure), init, |folded| folded, move |next, accumulator, element| {
        function(accumulator, element).fmap(move |folded| ControlFlow::Continue((next, folded)))
    })
}

/// Right fold whose step function returns a monad.
///
/// The effects run from the last element to the first.
///
/// # Examples
///
/// ```rust
/// use funkit::fold::fold_right_m;
///
/// let digits = fold_right_m(vec![1, 2, 3], String::new(), |n, mut text| {
///     text.push_str(&n.to_string());
///     Some(text)
/// });
/// assert_eq!(digits, Some("321".to_string()));
/// ```
pub fn fold_right_m<T, A, B, N, S, F>(structure: T, init: B, function: F) -> Rebound<S, B>
where
    T: Foldable<Inner = A>,
    A: Clone + 'static,
    B: Clone + 'static,
    N: Functor<Cursor<B, B>, Inner = B> + Rebind<Cursor<B, B>, WithType = S>,
    S: MonadRec<(usize, B), B> + Unit,
    F: Fn(A, B) -> N + 'static,
{
    let mut elements = to_slice(structure);
    elements.reverse();
    traverse(elements, init, |folded| folded, move |next, accumulator, element| {
        function(element, accumulator).fmap(move |folded| ControlFlow::Continue((next, folded)))
    })
}

/// Monadic [`all`](crate::fold::all).
///
/// # Examples
///
/// ```rust
/// use funkit::fold::all_m;
///
/// let checked = all_m(vec![2, 4], |n| Some(n % 2 == 0));
/// assert_eq!(checked, Some(true));
/// ```
pub fn all_m<T, A, M, S, P>(structure: T, predicate: P) -> Rebound<S, bool>
where
    T: Foldable<Inner = A>,
    A: Clone + 'static,
    M: Functor<Cursor<bool, bool>, Inner = bool> + Rebind<Cursor<bool, bool>, WithType = S>,
    S: MonadRec<(usize, bool), bool> + Unit,
    P: Fn(&A) -> M + 'static,
{
    traverse(to_slice(structure), true, |holds| holds, move |next, accumulator, element| {
        predicate(&element).fmap(move |holds| ControlFlow::Continue((next, accumulator && holds)))
    })
}

/// Monadic [`any`](crate::fold::any).
pub fn any_m<T, A, M, S, P>(structure: T, predicate: P) -> Rebound<S, bool>
where
    T: Foldable<Inner = A>,
    A: Clone + 'static,
    M: Functor<Cursor<bool, bool>, Inner = bool> + Rebind<Cursor<bool, bool>, WithType = S>,
    S: MonadRec<(usize, bool), bool> + Unit,
    P: Fn(&A) -> M + 'static,
{
    traverse(to_slice(structure), false, |holds| holds, move |next, accumulator, element| {
        predicate(&element).fmap(move |holds| ControlFlow::Continue((next, accumulator || holds)))
    })
}

/// Monadic [`find`](crate::fold::find).
///
/// The predicate runs on every element, including those after the first
/// match.
pub fn find_m<T, A, M, S, P>(structure: T, predicate: P) -> Rebound<S, Option<A>>
where
    T: Foldable<Inner = A>,
    A: Clone + 'static,
    M: Functor<Cursor<Option<A>, Option<A>>, Inner = bool>
        + Rebind<Cursor<Option<A>, Option<A>>, WithType = S>,
    S: MonadRec<(usize, Option<A>), Option<A>> + Unit,
    P: Fn(&A) -> M + 'static,
{
    traverse(to_slice(structure), None, |found| found, move |next, found: Option<A>, element| {
        predicate(&element).fmap(move |matched| {
            let found = found.clone().or_else(|| matched.then(|| element.clone()));
            ControlFlow::Continue((next, found))
        })
    })
}

/// Keeps the elements whose predicate answers `true`, newest first.
///
/// Each kept element is prepended to a shared [`List`], so every step is
/// O(1) whatever the monad does with the accumulator.
fn select_m<A, M, S, R, Finish, P>(elements: Vec<A>, finish: Finish, predicate: P) -> Rebound<S, R>
where
    A: Clone + 'static,
    M: Functor<Cursor<List<A>, R>, Inner = bool> + Rebind<Cursor<List<A>, R>, WithType = S>,
    S: MonadRec<(usize, List<A>), R> + Unit,
    Finish: Fn(List<A>) -> R + 'static,
    P: Fn(&A) -> M + 'static,
{
    traverse(elements, List::nil(), finish, move |next, kept: List<A>, element| {
        predicate(&element).fmap(move |keep| {
            let kept = if keep { kept.prepend(element.clone()) } else { kept.clone() };
            ControlFlow::Continue((next, kept))
        })
    })
}

/// Monadic [`filter_slice`](crate::fold::filter_slice).
pub fn filter_slice_m<T, A, M, S, P>(structure: T, predicate: P) -> Rebound<S, Vec<A>>
where
    T: Foldable<Inner = A>,
    A: Clone + 'static,
    M: Functor<Cursor<List<A>, Vec<A>>, Inner = bool>
        + Rebind<Cursor<List<A>, Vec<A>>, WithType = S>,
    S: MonadRec<(usize, List<A>), Vec<A>> + Unit,
    P: Fn(&A) -> M + 'static,
{
    select_m(
        to_slice(structure),
        |kept: List<A>| {
            let mut kept = to_slice(kept);
            kept.reverse();
            kept
        },
        predicate,
    )
}

/// Monadic [`filter`](crate::fold::filter).
///
/// In the list monad a predicate answering both `true` and `false` yields
/// every subsequence.
///
/// # Examples
///
/// ```rust
/// use funkit::fold::filter_m;
/// use funkit::persistent::List;
///
/// let subsets: Vec<List<i32>> = filter_m(vec![1, 2], |_| vec![true, false]);
/// assert_eq!(
///     subsets,
///     vec![
///         List::from(vec![1, 2]),
///         List::from(vec![1]),
///         List::from(vec![2]),
///         List::nil(),
///     ]
/// );
/// ```
pub fn filter_m<T, A, M, S, P>(structure: T, predicate: P) -> Rebound<S, List<A>>
where
    T: Foldable<Inner = A>,
    A: Clone + 'static,
    M: Functor<Cursor<List<A>, List<A>>, Inner = bool>
        + Rebind<Cursor<List<A>, List<A>>, WithType = S>,
    S: MonadRec<(usize, List<A>), List<A>> + Unit,
    P: Fn(&A) -> M + 'static,
{
    select_m(to_slice(structure), |kept: List<A>| kept.reverse(), predicate)
}
