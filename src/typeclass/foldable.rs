//! Foldable type class - folding over data structures.
//!
//! This module provides the `Foldable` trait, which represents types whose
//! elements can be reduced (folded) into a single value. The derived
//! operations (`all`, `find`, `filter`, `length`, ...) and their monadic
//! counterparts live in [`crate::fold`] and work for every `Foldable`.
//!
//! # Laws
//!
//! ```text
//! fa.fold_left(z, f)  == f(...f(f(z, x0), x1)..., xn)
//! fa.fold_right(z, f) == f(x0, f(x1, ... f(xn, z)...))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let none_value: Option<i32> = None;
//! let result = none_value.fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 5);
//! ```

use std::collections::HashMap;

use super::higher::TypeConstructor;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor + Sized {
    /// Folds the elements from left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3].fold_left(String::new(), |mut text, n| {
    ///     text.push_str(&n.to_string());
    ///     text
    /// });
    /// assert_eq!(digits, "123");
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the elements from right to left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3].fold_right(String::new(), |n, mut text| {
    ///     text.push_str(&n.to_string());
    ///     text
    /// });
    /// assert_eq!(digits, "321");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

// =============================================================================
// HashMap<K, V> Implementation
// =============================================================================

/// Folds over `(key, value)` entries in the map's iteration order.
///
/// That order is unspecified, so `fold_right` is the reverse of one
/// arbitrary order rather than a right fold over a meaningful sequence.
impl<K, V> Foldable for HashMap<K, V> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, (K, V)) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut((K, V), B) -> B,
    {
        let entries: Vec<(K, V)> = self.into_iter().collect();
        entries
            .into_iter()
            .rev()
            .fold(init, |accumulator, entry| function(entry, accumulator))
    }
}
