//! # funkit
//!
//! Generic functional-programming building blocks for Rust: algebraic
//! containers, the type classes that describe them, and algorithms written
//! once against those type classes.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Monad (with `Unit`), Foldable, Zippable,
//!   Unzippable and the stack-safe `MonadRec`
//! - **Containers**: `Option`, `Vec` and `HashMap` from the standard library,
//!   plus [`Either`](control::Either), the persistent
//!   [`List`](persistent::List), [`State`](effect::State) and
//!   [`Function`](effect::Function)
//! - **Algorithms**: `all`, `any`, `filter`, `find`, `length`, ... and their
//!   monadic counterparts `all_m`, `filter_m`, `fold_left_m`, ...
//! - **Combinators**: `join`, `if_m`, `while_m`, `until_m`
//! - **Coercion**: reading typed values back out of `dyn Any`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and standard library instances
//! - `control`: `Either`
//! - `persistent`: `List` and `ListBuilder`
//! - `effect`: `State` and `Function`
//! - `fold`: Generic and monadic algorithms over `Foldable`
//! - `coerce`: Coercion helpers
//! - `tracing`: Trace events at graceful-degradation points
//! - `serde`: Serialization for `Either` and `List`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! let numbers: List<i32> = (1..=6).collect();
//! let evens = filter(numbers.clone(), |n| n % 2 == 0);
//! assert_eq!(evens, List::from(vec![2, 4, 6]));
//!
//! let counted = find_m(numbers, |n: &i32| {
//!     let n = *n;
//!     State::new(move |visited: usize| (visited + 1, n > 3))
//! });
//! assert_eq!(counted.run(0), (6, Some(4)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

#[cfg(feature = "tracing")]
macro_rules! trace_fallback {
    ($($argument:tt)+) => {
        ::tracing::trace!($($argument)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_fallback {
    ($($argument:tt)+) => {};
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "fold")]
    pub use crate::fold::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "fold")]
pub mod fold;

#[cfg(feature = "coerce")]
pub mod coerce;
