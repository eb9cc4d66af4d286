//! Type class traits for functional programming abstractions.
//!
//! This module provides the capabilities every container in the crate shares:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Monad`] and [`Unit`]: Sequencing computations and lifting plain values
//! - [`MonadRec`]: Stack-safe monadic iteration
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Zippable`] and [`Unzippable`]: Pairing and splitting containers element-wise
//!
//! together with the combinators [`join`], [`if_m`], [`while_m`] and
//! [`until_m`], and the instances for `Option`, `Vec` ([`Sequence`]) and
//! `HashMap` ([`Mapping`]).
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] and [`Rebind`] emulate them: a container names its
//! element type and the container it becomes when that element type changes.
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::{Foldable, Functor, Monad, Zippable};
//!
//! let names: Vec<String> = vec![1, 2, 3].fmap(|n| format!("item-{n}"));
//! assert_eq!(names[0], "item-1");
//!
//! let total = Some(2).flat_map(|n| Some(n * 10)).fold_left(1, |a, b| a + b);
//! assert_eq!(total, 21);
//!
//! assert_eq!(Zippable::zip(Some(1), Some('x')), Some((1, 'x')));
//! ```

mod containers;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monad_rec;
mod zippable;

pub use containers::{Mapping, Pair, Sequence, pair};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::{Rebind, Rebound, TypeConstructor};
pub use monad::{Monad, Unit, if_m, join};
pub use monad_rec::{MonadRec, until_m, while_m};
pub use zippable::{Unzippable, Zippable};
