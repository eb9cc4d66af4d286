//! Control structures for functional programming.
//!
//! - [`Either`]: A value that is one of two alternatives, right-biased for
//!   `Functor`, `Monad`, `Foldable`, `Zippable` and `MonadRec`.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Either;
//! use funkit::typeclass::Functor;
//!
//! let value: Either<String, i32> = Either::Right(20);
//! assert_eq!(value.fmap(|n| n + 1), Either::Right(21));
//! ```

mod either;

pub use either::Either;
