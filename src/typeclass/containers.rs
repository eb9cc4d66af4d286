//! Names for the standard containers the type classes are implemented on.

use std::collections::HashMap;

/// An immutable pair of values, `(first, second)`.
pub type Pair<A, B> = (A, B);

/// A growable ordered sequence.
pub type Sequence<T> = Vec<T>;

/// An unordered mapping from unique keys to values.
///
/// Its element type for the type classes is the entry [`Pair`] `(K, V)`.
pub type Mapping<K, V> = HashMap<K, V>;

/// Builds a [`Pair`].
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::pair;
///
/// let (first, second) = pair(1, "one");
/// assert_eq!(first, 1);
/// assert_eq!(second, "one");
/// ```
#[inline]
pub const fn pair<A, B>(first: A, second: B) -> Pair<A, B> {
    (first, second)
}
