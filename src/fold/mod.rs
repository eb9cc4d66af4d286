//! Generic algorithms over any [`Foldable`].
//!
//! Every function takes the structure by value first and is written once in
//! terms of `fold_left`, so it works the same for `Option`, `Either`, `List`,
//! `Vec` and `HashMap`. The monadic counterparts live in [`monadic`].
//!
//! # Examples
//!
//! ```rust
//! use funkit::fold::{all, filter, find, length};
//! use funkit::persistent::List;
//!
//! let numbers = vec![1, 2, 3, 4];
//! assert!(!all(numbers.clone(), |n| n % 2 == 0));
//! assert_eq!(find(numbers.clone(), |n| n % 2 == 0), Some(2));
//! assert_eq!(filter(numbers.clone(), |n| n % 2 == 0), List::from(vec![2, 4]));
//! assert_eq!(length(numbers), 4);
//! ```

pub mod monadic;

use std::borrow::Borrow;

use crate::persistent::{List, ListBuilder};
use crate::typeclass::Foldable;

pub use monadic::{all_m, any_m, filter_m, filter_slice_m, find_m, fold_left_m, fold_right_m};

/// Returns `true` if every element satisfies `predicate`.
///
/// An empty structure yields `true`.
///
/// # Examples
///
/// ```rust
/// use funkit::fold::all;
///
/// assert!(all(vec![2, 4, 6], |n| n % 2 == 0));
/// assert!(all(None::<i32>, |_| false));
/// ```
pub fn all<T, A, P>(structure: T, mut predicate: P) -> bool
where
    T: Foldable<Inner = A>,
    P: FnMut(&A) -> bool,
{
    structure.fold_left(true, |accumulator, element| accumulator && predicate(&element))
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// An empty structure yields `false`.
pub fn any<T, A, P>(structure: T, mut predicate: P) -> bool
where
    T: Foldable<Inner = A>,
    P: FnMut(&A) -> bool,
{
    structure.fold_left(false, |accumulator, element| accumulator || predicate(&element))
}

/// Returns `true` if some element equals `value`.
///
/// # Examples
///
/// ```rust
/// use funkit::fold::element;
///
/// assert!(element(vec![1, 2, 3], &2));
/// assert!(!element(Some(1), &2));
/// ```
pub fn element<T, A>(structure: T, value: &A) -> bool
where
    T: Foldable<Inner = A>,
    A: PartialEq,
{
    any(structure, |candidate| candidate == value)
}

/// Returns `true` if no element equals `value`.
pub fn not_element<T, A>(structure: T, value: &A) -> bool
where
    T: Foldable<Inner = A>,
    A: PartialEq,
{
    !element(structure, value)
}

/// Membership compared through the element's borrowed form.
///
/// Lets an owned element be matched against a borrowed query, for example a
/// `String` against a `&str` or a `Vec<T>` against a slice.
///
/// # Examples
///
/// ```rust
/// use funkit::fold::deep_element;
///
/// let names = vec!["ada".to_string(), "grace".to_string()];
/// assert!(deep_element(names, "grace"));
///
/// let rows = vec![vec![1, 2], vec![3]];
/// assert!(deep_element(rows, &[3][..]));
/// ```
pub fn deep_element<T, A, Q>(structure: T, value: &Q) -> bool
where
    T: Foldable<Inner = A>,
    A: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    any(structure, |candidate| <A as Borrow<Q>>::borrow(candidate) == value)
}

/// Negation of [`deep_element`].
pub fn not_deep_element<T, A, Q>(structure: T, value: &Q) -> bool
where
    T: Foldable<Inner = A>,
    A: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    !deep_element(structure, value)
}

/// Keeps the elements satisfying `predicate`, in order, as a [`List`].
///
/// # Examples
///
/// ```rust
/// use funkit::fold::filter;
/// use funkit::persistent::List;
///
/// let evens = filter(vec![1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(evens, List::cons(2, List::cons(4, List::nil())));
/// ```
pub fn filter<T, A, P>(structure: T, mut predicate: P) -> List<A>
where
    T: Foldable<Inner = A>,
    P: FnMut(&A) -> bool,
{
    structure
        .fold_left(ListBuilder::new(), |mut builder, element| {
            if predicate(&element) {
                builder.push(element);
            }
            builder
        })
        .build()
}

/// Keeps the elements satisfying `predicate`, in order, as a `Vec`.
pub fn filter_slice<T, A, P>(structure: T, mut predicate: P) -> Vec<A>
where
    T: Foldable<Inner = A>,
    P: FnMut(&A) -> bool,
{
    structure.fold_left(Vec::new(), |mut kept, element| {
        if predicate(&element) {
            kept.push(element);
        }
        kept
    })
}

/// Returns the first element satisfying `predicate`.
///
/// The whole structure is visited; once an element matches, the predicate
/// is not consulted again.
///
/// # Examples
///
/// ```rust
/// use funkit::fold::find;
///
/// assert_eq!(find(vec![1, 2, 3], |n| n % 2 == 0), Some(2));
/// assert_eq!(find(vec![1, 3, 5], |n| n % 2 == 0), None);
/// ```
pub fn find<T, A, P>(structure: T, mut predicate: P) -> Option<A>
where
    T: Foldable<Inner = A>,
    P: FnMut(&A) -> bool,
{
    structure.fold_left(None, |found, element| match found {
        Some(_) => found,
        None => predicate(&element).then_some(element),
    })
}

/// Counts the elements.
pub fn length<T: Foldable>(structure: T) -> usize {
    structure.fold_left(0, |count, _| count + 1)
}

/// Returns `true` if the structure holds no elements.
pub fn null<T: Foldable>(structure: T) -> bool {
    length(structure) == 0
}

/// Collects the elements, in order, into a [`List`].
pub fn to_list<T, A>(structure: T) -> List<A>
where
    T: Foldable<Inner = A>,
{
    structure
        .fold_left(ListBuilder::new(), |mut builder, element| {
            builder.push(element);
            builder
        })
        .build()
}

/// Collects the elements, in order, into a `Vec`.
pub fn to_slice<T, A>(structure: T) -> Vec<A>
where
    T: Foldable<Inner = A>,
{
    structure.fold_left(Vec::new(), |mut elements, element| {
        elements.push(element);
        elements
    })
}
