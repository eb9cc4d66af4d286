//! Monad type class - sequencing computations within a context.
//!
//! This module provides [`Unit`], which lifts a plain value into a container,
//! and [`Monad`], which sequences computations where each step can depend on
//! the result of the previous one. It also provides the combinators [`join`]
//! and [`if_m`], built from nothing but `flat_map` and `unit`.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::unit(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//!
//! let pairs: Vec<(i32, char)> = vec![1, 2].flat_map(|n| vec![(n, 'a'), (n, 'b')]);
//! assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::functor::Functor;
use super::higher::{Rebind, Rebound, TypeConstructor};

/// Lifts a plain value into a container.
///
/// Generic algorithms resolve `unit` from the type of the monad they
/// produce, so the caller selects the monad by type.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Unit;
///
/// assert_eq!(<Option<i32>>::unit(1), Some(1));
/// assert_eq!(<Vec<i32>>::unit(1), vec![1]);
/// ```
pub trait Unit: TypeConstructor + Sized {
    /// Wraps `value` in the minimal context.
    fn unit(value: Self::Inner) -> Self;
}

/// A type class for sequential composition.
///
/// `Monad<B>` allows binding a computation that produces `Rebound<Self, B>`.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Monad;
///
/// let halved = Some(10).flat_map(|n| if n % 2 == 0 { Some(n / 2) } else { None });
/// assert_eq!(halved, Some(5));
/// ```
pub trait Monad<B>: Functor<B> + Unit {
    /// Applies a function that returns a container to every element and
    /// flattens the results.
    fn flat_map<F>(self, function: F) -> Rebound<Self, B>
    where
        F: Fn(Self::Inner) -> Rebound<Self, B> + 'static;

    /// Sequences `next` after `self`, discarding the result of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// ```
    #[inline]
    fn then(self, next: Rebound<Self, B>) -> Rebound<Self, B>
    where
        Rebound<Self, B>: Clone + 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Unit for Option<A> {
    #[inline]
    fn unit(value: A) -> Self {
        Some(value)
    }
}

impl<A, B> Monad<B> for Option<A> {
    #[inline]
    fn flat_map<F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> Option<B> + 'static,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Unit for Vec<A> {
    #[inline]
    fn unit(value: A) -> Self {
        vec![value]
    }
}

impl<A, B> Monad<B> for Vec<A> {
    fn flat_map<F>(self, function: F) -> Vec<B>
    where
        F: Fn(A) -> Vec<B> + 'static,
    {
        self.into_iter().flat_map(function).collect()
    }
}

// =============================================================================
// HashMap<K, V> Implementation
// =============================================================================

impl<K: Eq + Hash, V> Unit for HashMap<K, V> {
    #[inline]
    fn unit(value: (K, V)) -> Self {
        Self::from([value])
    }
}

/// Merges the mapping produced for every entry.
///
/// Later entries overwrite earlier ones on key collision.
impl<K, V, L, W> Monad<(L, W)> for HashMap<K, V>
where
    K: Eq + Hash,
    L: Eq + Hash,
{
    fn flat_map<F>(self, function: F) -> HashMap<L, W>
    where
        F: Fn((K, V)) -> HashMap<L, W> + 'static,
    {
        let mut merged = HashMap::with_capacity(self.len());
        for entry in self {
            for (key, value) in function(entry) {
                if merged.insert(key, value).is_some() {
                    trace_fallback!("mapping entry overwritten while merging flat_map results");
                }
            }
        }
        merged
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Removes one level of monadic nesting.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::join;
///
/// let flattened: Option<i32> = join(Some(Some(3)));
/// assert_eq!(flattened, Some(3));
///
/// let flattened: Vec<i32> = join(vec![vec![1, 2], vec![], vec![3]]);
/// assert_eq!(flattened, vec![1, 2, 3]);
/// ```
pub fn join<N, M>(nested: N) -> M
where
    M: TypeConstructor,
    N: Monad<M::Inner, Inner = M> + Rebind<M::Inner, WithType = M>,
{
    nested.flat_map(|inner| inner)
}

/// Chooses between two monadic computations based on a monadic condition.
///
/// Both branches are thunks, so only the selected one is built.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::if_m;
///
/// let chosen = if_m(Some(true), || Some("yes"), || Some("no"));
/// assert_eq!(chosen, Some("yes"));
///
/// let skipped = if_m(None, || Some("yes"), || Some("no"));
/// assert_eq!(skipped, None);
/// ```
pub fn if_m<M, B, T, E>(condition: M, if_true: T, if_false: E) -> Rebound<M, B>
where
    M: Monad<B, Inner = bool>,
    T: Fn() -> Rebound<M, B> + 'static,
    E: Fn() -> Rebound<M, B> + 'static,
{
    condition.flat_map(move |flag| if flag { if_true() } else { if_false() })
}
