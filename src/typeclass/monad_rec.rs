//! Stack-safe monadic loops.
//!
//! [`MonadRec`] runs a monadic step function repeatedly until it yields
//! [`ControlFlow::Break`], using an explicit loop over the monad's own
//! running primitive instead of nested `flat_map` calls. The loop combinators
//! [`while_m`] and [`until_m`] are built on it, so loops of any length run in
//! constant stack space.
//!
//! There is no step limit: a condition that never ends the loop runs forever.
//!
//! # Examples
//!
//! ```rust
//! use std::ops::ControlFlow;
//!
//! use funkit::typeclass::MonadRec;
//!
//! let sum = <Option<ControlFlow<u64, (u64, u64)>>>::tail_rec_m((0, 0), |(total, n)| {
//!     if n > 100_000 {
//!         Some(ControlFlow::Break(total))
//!     } else {
//!         Some(ControlFlow::Continue((total + n, n + 1)))
//!     }
//! });
//! assert_eq!(sum, Some(5_000_050_000));
//! ```

use std::ops::ControlFlow;
use std::rc::Rc;

use super::functor::Functor;
use super::higher::{Rebind, Rebound, TypeConstructor};
use super::monad::{Monad, Unit};

/// A monad that can iterate a step function without growing the stack.
///
/// `Self` is the monad of a single step, holding `ControlFlow<B, A>`:
/// `Continue(a)` runs the step again with seed `a`, `Break(b)` finishes with
/// `b`.
pub trait MonadRec<A, B>: TypeConstructor<Inner = ControlFlow<B, A>> + Rebind<B> + Sized {
    /// Iterates `step` from `initial` until it breaks.
    fn tail_rec_m<F>(initial: A, step: F) -> Rebound<Self, B>
    where
        F: Fn(A) -> Self + 'static;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A, B> MonadRec<A, B> for Option<ControlFlow<B, A>> {
    fn tail_rec_m<F>(initial: A, step: F) -> Option<B>
    where
        F: Fn(A) -> Self + 'static,
    {
        let mut seed = initial;
        loop {
            match step(seed)? {
                ControlFlow::Continue(next) => seed = next,
                ControlFlow::Break(done) => return Some(done),
            }
        }
    }
}

/// Explores branches depth-first, so results come out in the same order
/// nested `flat_map` calls would produce them.
impl<A, B> MonadRec<A, B> for Vec<ControlFlow<B, A>> {
    fn tail_rec_m<F>(initial: A, step: F) -> Vec<B>
    where
        F: Fn(A) -> Self + 'static,
    {
        let mut results = Vec::new();
        let mut pending = vec![step(initial).into_iter()];
        while let Some(branch) = pending.last_mut() {
            match branch.next() {
                Some(ControlFlow::Continue(next)) => pending.push(step(next).into_iter()),
                Some(ControlFlow::Break(done)) => results.push(done),
                None => {
                    pending.pop();
                }
            }
        }
        results
    }
}

// =============================================================================
// Loop Combinators
// =============================================================================

/// Repeats `body` while `condition` yields `true`.
///
/// `condition` is re-run before every iteration, so in a stateful monad it
/// observes the effects of the previous `body`.
///
/// # Examples
///
/// ```rust
/// use funkit::effect::State;
/// use funkit::typeclass::while_m;
///
/// let below_ten: State<i32, bool> = State::gets(|count: &i32| *count < 10);
/// let program = while_m(below_ten, || State::modify(|count: i32| count + 1));
/// assert_eq!(program.exec(0), 10);
/// ```
pub fn while_m<M, N, L, Body>(condition: M, body: Body) -> Rebound<L, ()>
where
    M: Monad<ControlFlow<(), ()>, Inner = bool>
        + Rebind<ControlFlow<(), ()>, WithType = L>
        + Clone
        + 'static,
    N: Functor<ControlFlow<(), ()>> + Rebind<ControlFlow<(), ()>, WithType = L>,
    L: MonadRec<(), ()> + Unit + 'static,
    Body: Fn() -> N + 'static,
{
    let body = Rc::new(body);
    L::tail_rec_m((), move |()| {
        let body = Rc::clone(&body);
        condition.clone().flat_map(move |flag| {
            if flag {
                body().fmap(|_| ControlFlow::Continue(()))
            } else {
                L::unit(ControlFlow::Break(()))
            }
        })
    })
}

/// Runs `body`, then repeats it until `condition` yields `true`.
///
/// `body` always runs at least once.
///
/// # Examples
///
/// ```rust
/// use funkit::effect::State;
/// use funkit::typeclass::until_m;
///
/// let step: State<i32, ()> = State::modify(|count: i32| count + 3);
/// let program = until_m(step, || State::gets(|count: &i32| *count >= 10));
/// assert_eq!(program.exec(0), 12);
/// ```
pub fn until_m<M, C, L, Condition>(body: M, condition: Condition) -> Rebound<L, ()>
where
    M: Monad<ControlFlow<(), ()>> + Rebind<ControlFlow<(), ()>, WithType = L> + Clone + 'static,
    C: Functor<ControlFlow<(), ()>, Inner = bool> + Rebind<ControlFlow<(), ()>, WithType = L>,
    L: MonadRec<(), ()> + 'static,
    Condition: Fn() -> C + 'static,
{
    let condition = Rc::new(condition);
    L::tail_rec_m((), move |()| {
        let condition = Rc::clone(&condition);
        body.clone().flat_map(move |_| {
            condition().fmap(|done| {
                if done {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
        })
    })
}
