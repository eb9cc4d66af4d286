//! Higher-Kinded Type emulation through associated-type rebinding.
//!
//! Rust does not natively support Higher-Kinded Types, so a trait cannot
//! abstract over `Option<_>` and `Vec<_>` as type constructors directly. This
//! module splits the idea in two:
//!
//! - [`TypeConstructor`] names the element type a container currently holds.
//! - [`Rebind`] names the same container holding a different element type.
//!
//! Keeping the target type a trait parameter (rather than a generic
//! associated type) lets a container restrict which element types it can be
//! rebound to. A `HashMap<K, V>` holds `(K, V)` entries and can only be
//! rebound to another entry type `(L, W)`.
//!
//! # Example
//!
//! ```rust
//! use funkit::typeclass::{Rebind, Rebound, TypeConstructor};
//!
//! fn empty_like<T>(_value: T) -> Rebound<T, String>
//! where
//!     T: Rebind<String>,
//!     Rebound<T, String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = empty_like(some_int);
//! assert_eq!(none_string, None);
//! ```

use std::collections::HashMap;

/// A type constructor applied to its current element type.
///
/// # Associated Types
///
/// - `Inner`: The element type. For `Option<i32>` this is `i32`; for
///   `HashMap<K, V>` it is the entry pair `(K, V)`.
///
/// # Example
///
/// ```rust
/// use funkit::typeclass::TypeConstructor;
///
/// fn example<T: TypeConstructor<Inner = i32>>() {}
///
/// example::<Option<i32>>();
/// example::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The element type this type constructor is applied to.
    type Inner;
}

/// The same type constructor applied to a different element type `B`.
///
/// # Laws
///
/// For any `F: Rebind<F::Inner>`, `Rebound<F, F::Inner>` should be `F` itself.
pub trait Rebind<B>: TypeConstructor {
    /// The rebound container.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps chains of
    /// transformations well-typed.
    type WithType: TypeConstructor<Inner = B>;
}

/// Shorthand for `<F as Rebind<B>>::WithType`.
pub type Rebound<F, B> = <F as Rebind<B>>::WithType;

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
}

impl<A, B> Rebind<B> for Option<A> {
    type WithType = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
}

impl<T, B> Rebind<B> for Vec<T> {
    type WithType = Vec<B>;
}

impl<K, V> TypeConstructor for HashMap<K, V> {
    type Inner = (K, V);
}

impl<K, V, L, W> Rebind<(L, W)> for HashMap<K, V> {
    type WithType = HashMap<L, W>;
}
