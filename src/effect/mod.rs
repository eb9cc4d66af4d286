//! Deferred computations.
//!
//! - [`State`]: a computation threading a state value, `S -> (S, A)`
//! - [`Function`]: a computation reading a shared input, `E -> A`
//!
//! Both are built on `Rc<dyn Fn>` and can be cloned cheaply and run many
//! times. Neither is `Send` nor `Sync`.
//!
//! # Examples
//!
//! ```rust
//! use funkit::effect::State;
//! use funkit::typeclass::Monad;
//!
//! let label = State::gets(|count: &u32| format!("step {count}"));
//! let program = State::modify(|count: u32| count + 1).then(label);
//! assert_eq!(program.run(4), (5, "step 5".to_string()));
//! ```

mod function;
mod state;

pub use function::Function;
pub use state::State;
