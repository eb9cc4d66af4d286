//! Persistent data structures.
//!
//! - [`List`]: An immutable singly-linked list with structural sharing
//! - [`ListBuilder`]: An owned buffer for building a `List` front to back
//!
//! # Examples
//!
//! ```rust
//! use funkit::persistent::List;
//! use funkit::typeclass::{Functor, Monad};
//!
//! let list: List<i32> = (1..=3).collect();
//! let doubled = list.clone().fmap(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6].into());
//!
//! let expanded = list.flat_map(|n| List::cons(n, List::singleton(-n)));
//! assert_eq!(expanded.len(), 6);
//! ```

mod builder;
mod list;

pub use builder::ListBuilder;
pub use list::{List, ListIntoIter, ListIter};
