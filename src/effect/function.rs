//! Pair functions - computations reading from a shared input.
//!
//! A `Function<E, A>` wraps `E -> A`. Mapping post-composes, binding feeds
//! the same input to both stages, and zipping runs two functions on one
//! input to produce a pair. This is the reader pattern without the
//! `ask`/`local` vocabulary.

use std::ops::ControlFlow;
use std::rc::Rc;

use crate::typeclass::{
    Functor, Monad, MonadRec, Rebind, TypeConstructor, Unit, Unzippable, Zippable,
};

/// A shareable function from an input `E` to a result `A`.
///
/// # Examples
///
/// ```rust
/// use funkit::effect::Function;
/// use funkit::typeclass::{Functor, Zippable};
///
/// let length = Function::new(|text: String| text.len());
/// let shout = Function::new(|text: String| text.to_uppercase());
///
/// let both = length.fmap(|n| n * 2).zip(shout);
/// assert_eq!(both.run("abc".to_string()), (6, "ABC".to_string()));
/// ```
pub struct Function<E, A>
where
    E: 'static,
    A: 'static,
{
    function: Rc<dyn Fn(E) -> A>,
}

impl<E, A> Function<E, A>
where
    E: 'static,
    A: 'static,
{
    /// Wraps a plain function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Applies the function to `input`.
    pub fn run(&self, input: E) -> A {
        (self.function)(input)
    }

    /// Adapts the input side by pre-composing `adapter`.
    pub fn contramap<D, F>(self, adapter: F) -> Function<D, A>
    where
        D: 'static,
        F: Fn(D) -> E + 'static,
    {
        let function = self.function;
        Function::new(move |input| function(adapter(input)))
    }
}

impl<E: 'static> Function<E, E> {
    /// The function returning its input unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|input| input)
    }
}

impl<E, A> Clone for Function<E, A>
where
    E: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<E, A> std::fmt::Display for Function<E, A>
where
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Function>")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E: 'static, A: 'static> TypeConstructor for Function<E, A> {
    type Inner = A;
}

impl<E: 'static, A: 'static, B: 'static> Rebind<B> for Function<E, A> {
    type WithType = Function<E, B>;
}

impl<E: 'static, A: 'static, B: 'static> Functor<B> for Function<E, A> {
    fn fmap<F>(self, function: F) -> Function<E, B>
    where
        F: Fn(A) -> B + 'static,
    {
        let original = self.function;
        Function::new(move |input| function(original(input)))
    }
}

impl<E: 'static, A: Clone + 'static> Unit for Function<E, A> {
    fn unit(value: A) -> Self {
        Self::new(move |_| value.clone())
    }
}

impl<E: Clone + 'static, A: Clone + 'static, B: 'static> Monad<B> for Function<E, A> {
    fn flat_map<F>(self, function: F) -> Function<E, B>
    where
        F: Fn(A) -> Function<E, B> + 'static,
    {
        let original = self.function;
        Function::new(move |input: E| function(original(input.clone())).run(input))
    }
}

impl<E: Clone + 'static, A: 'static, B: 'static> Zippable<Function<E, B>> for Function<E, A> {
    type Zipped = Function<E, (A, B)>;

    fn zip(self, other: Function<E, B>) -> Function<E, (A, B)> {
        let first = self.function;
        let second = other.function;
        Function::new(move |input: E| (first(input.clone()), second(input)))
    }
}

impl<E: 'static, A: 'static, B: 'static> Unzippable for Function<E, (A, B)> {
    type First = Function<E, A>;
    type Second = Function<E, B>;

    fn unzip(self) -> (Function<E, A>, Function<E, B>) {
        let left = Rc::clone(&self.function);
        let right = self.function;
        (
            Function::new(move |input| left(input).0),
            Function::new(move |input| right(input).1),
        )
    }
}

impl<E: Clone + 'static, A: Clone + 'static, B: 'static> MonadRec<A, B>
    for Function<E, ControlFlow<B, A>>
{
    fn tail_rec_m<F>(initial: A, step: F) -> Function<E, B>
    where
        F: Fn(A) -> Self + 'static,
    {
        Function::new(move |input: E| {
            let mut seed = initial.clone();
            loop {
                match step(seed).run(input.clone()) {
                    ControlFlow::Continue(next) => seed = next,
                    ControlFlow::Break(done) => return done,
                }
            }
        })
    }
}

static_assertions::assert_not_impl_any!(Function<i32, i32>: Send, Sync);
