//! State Monad - stateful computation.
//!
//! A `State<S, A>` encapsulates a function `S -> (S, A)`: given the current
//! state it produces the next state and a result. Nothing runs until
//! [`State::run`] is called with an initial state.
//!
//! State implements [`Functor`], [`Monad`], [`Zippable`] and [`MonadRec`], so
//! the generic algorithms in [`crate::fold`] and the loop combinators can
//! thread a state through a traversal (for example to count steps).
//!
//! # Laws
//!
//! Besides the Functor and Monad laws:
//!
//! - Get Put: `get().flat_map(put) == unit(())`
//! - Put Get: `put(s).then(get())` returns `s`
//! - Put Put: `put(s1).then(put(s2)) == put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use funkit::effect::State;
//! use funkit::typeclass::Monad;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! let (final_state, count) = computation.run(0);
//! assert_eq!(count, 3);
//! assert_eq!(final_state, 3);
//! ```

use std::ops::ControlFlow;
use std::rc::Rc;

use crate::typeclass::{Functor, Monad, MonadRec, Rebind, TypeConstructor, Unit, Zippable};

/// A deferred computation threading a state of type `S` and producing an `A`.
///
/// # Examples
///
/// ```rust
/// use funkit::effect::State;
///
/// let state: State<i32, i32> = State::new(|s: i32| (s + 1, s * 2));
/// let (final_state, result) = state.run(10);
/// assert_eq!(final_state, 11);
/// assert_eq!(result, 20);
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(S) -> (S, A)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a state transition `S -> (S, A)`.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (S, A) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation, returning `(final_state, result)`.
    pub fn run(&self, initial_state: S) -> (S, A) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(&self, initial_state: S) -> A {
        let (_, result) = self.run(initial_state);
        result
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        let (final_state, _) = self.run(initial_state);
        final_state
    }

    /// Projects a result out of the current state without changing it.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            (state, result)
        })
    }

    /// Runs `self`, then `other` on the resulting state, and combines the
    /// two results.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        State::new(move |state| {
            let (intermediate_state, result_a) = (self_function)(state);
            let (final_state, result_b) = (other_function)(intermediate_state);
            (final_state, function(result_a, result_b))
        })
    }
}

// =============================================================================
// State Access
// =============================================================================

impl<St> State<St, St>
where
    St: Clone + 'static,
{
    /// Returns the current state as the result.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: St| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| (new_state.clone(), ()))
    }

    /// Transforms the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| (modifier(state), ()))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> std::fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<S: 'static, A: 'static> TypeConstructor for State<S, A> {
    type Inner = A;
}

impl<S: 'static, A: 'static, B: 'static> Rebind<B> for State<S, A> {
    type WithType = State<S, B>;
}

impl<S: 'static, A: 'static, B: 'static> Functor<B> for State<S, A> {
    fn fmap<F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (new_state, result) = (original_function)(state);
            (new_state, function(result))
        })
    }
}

impl<S: 'static, A: Clone + 'static> Unit for State<S, A> {
    fn unit(value: A) -> Self {
        Self::new(move |state| (state, value.clone()))
    }
}

impl<S: 'static, A: Clone + 'static, B: 'static> Monad<B> for State<S, A> {
    fn flat_map<F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (intermediate_state, result) = (original_function)(state);
            function(result).run(intermediate_state)
        })
    }
}

/// Runs the left computation first, then the right one.
impl<S: 'static, A: 'static, B: 'static> Zippable<State<S, B>> for State<S, A> {
    type Zipped = State<S, (A, B)>;

    fn zip(self, other: State<S, B>) -> State<S, (A, B)> {
        self.map2(other, |first, second| (first, second))
    }
}

/// Re-runs the step against the evolving state inside one loop.
impl<S: 'static, A: Clone + 'static, B: 'static> MonadRec<A, B> for State<S, ControlFlow<B, A>> {
    fn tail_rec_m<F>(initial: A, step: F) -> State<S, B>
    where
        F: Fn(A) -> Self + 'static,
    {
        State::new(move |state| {
            let mut current = (state, initial.clone());
            loop {
                let (state, seed) = current;
                match step(seed).run(state) {
                    (state, ControlFlow::Continue(next)) => current = (state, next),
                    (state, ControlFlow::Break(done)) => return (state, done),
                }
            }
        })
    }
}

static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);
