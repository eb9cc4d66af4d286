//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their element(s) while preserving the structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let doubled: Vec<i32> = vec![1, 2, 3].fmap(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::higher::{Rebind, Rebound};

/// A type class for types that can have a function mapped over their elements.
///
/// The target element type `B` is a trait parameter so that a container can
/// limit what it maps into. `HashMap<K, V>` implements `Functor<(L, W)>`
/// only: the mapping function must produce a new entry.
///
/// The function is `Fn + 'static` because multi-element containers call it
/// once per element, and deferred containers (`State`, `Function`) keep it
/// until they are run.
pub trait Functor<B>: Rebind<B> + Sized {
    /// Applies a function to every element, producing the same container
    /// shape over `B`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n + 1);
    /// assert_eq!(y, Some(6));
    /// ```
    fn fmap<F>(self, function: F) -> Rebound<Self, B>
    where
        F: Fn(Self::Inner) -> B + 'static;

    /// Replaces every element with a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Functor;
    ///
    /// assert_eq!(vec![1, 2, 3].replace("x"), vec!["x", "x", "x"]);
    /// ```
    #[inline]
    fn replace(self, value: B) -> Rebound<Self, B>
    where
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A, B> Functor<B> for Option<A> {
    #[inline]
    fn fmap<F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> B + 'static,
    {
        self.map(function)
    }
}

impl<T, B> Functor<B> for Vec<T> {
    #[inline]
    fn fmap<F>(self, function: F) -> Vec<B>
    where
        F: Fn(T) -> B + 'static,
    {
        self.into_iter().map(function).collect()
    }
}

/// Maps every entry to a new entry.
///
/// When two entries map to the same key, the one visited later wins. Since a
/// `HashMap` has no defined iteration order, which entry survives is unspecified.
impl<K, V, L, W> Functor<(L, W)> for HashMap<K, V>
where
    L: Eq + Hash,
{
    fn fmap<F>(self, function: F) -> HashMap<L, W>
    where
        F: Fn((K, V)) -> (L, W) + 'static,
    {
        let mut mapped = HashMap::with_capacity(self.len());
        for entry in self {
            let (key, value) = function(entry);
            if mapped.insert(key, value).is_some() {
                trace_fallback!("mapping entry overwritten by a later entry with the same key");
            }
        }
        mapped
    }
}
