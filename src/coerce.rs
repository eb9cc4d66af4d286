//! Recovering typed values from type-erased ones.
//!
//! Values that crossed a `dyn Any` boundary (a plugin registry, a
//! heterogeneous map) can be read back with a default: when the runtime type
//! matches, the value is returned, otherwise the default is, and a trace
//! event names the type that was expected.
//!
//! # Examples
//!
//! ```rust
//! use std::any::Any;
//!
//! use funkit::coerce::{i32_or_else, or_else, string_or_else};
//!
//! let erased: Vec<Box<dyn Any>> = vec![Box::new(7_i32), Box::new("seven".to_string())];
//!
//! assert_eq!(i32_or_else(erased[0].as_ref(), 0), 7);
//! assert_eq!(i32_or_else(erased[1].as_ref(), 0), 0);
//! assert_eq!(string_or_else(erased[1].as_ref(), String::new()), "seven");
//! assert_eq!(or_else(erased[0].as_ref(), 0.5_f64), 0.5);
//! ```

use std::any::Any;
use std::collections::HashMap;

use crate::control::Either;
use crate::effect::{Function, State};
use crate::persistent::List;

/// Returns a clone of the value behind `value` if it is a `T`, otherwise
/// `default`.
pub fn or_else<T: Any + Clone>(value: &dyn Any, default: T) -> T {
    if let Some(matched) = value.downcast_ref::<T>() {
        matched.clone()
    } else {
        trace_fallback!(expected = std::any::type_name::<T>(), "coercion fell back to default");
        default
    }
}

/// Moves the value out of `value` if it is a `T`, otherwise returns
/// `default`.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
///
/// use funkit::coerce::into_or_else;
///
/// let boxed: Box<dyn Any> = Box::new(vec![1, 2]);
/// assert_eq!(into_or_else(boxed, Vec::<i32>::new()), vec![1, 2]);
/// ```
pub fn into_or_else<T: Any>(value: Box<dyn Any>, default: T) -> T {
    match value.downcast::<T>() {
        Ok(matched) => *matched,
        Err(_) => {
            trace_fallback!(expected = std::any::type_name::<T>(), "coercion fell back to default");
            default
        }
    }
}

macro_rules! primitive_or_else {
    ($($ty:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Reads a `", stringify!($ty), "`, falling back to `default`.")]
                #[inline]
                pub fn [<$ty:snake _or_else>](value: &dyn Any, default: $ty) -> $ty {
                    or_else(value, default)
                }
            )*
        }
    };
}

primitive_or_else!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

// =============================================================================
// Containers
// =============================================================================

/// Reads an `Option<T>`, falling back to `default`.
pub fn option_or_else<T: Any + Clone>(value: &dyn Any, default: Option<T>) -> Option<T> {
    or_else(value, default)
}

/// Reads an `Either<L, R>`, falling back to `default`.
pub fn either_or_else<L, R>(value: &dyn Any, default: Either<L, R>) -> Either<L, R>
where
    L: Any + Clone,
    R: Any + Clone,
{
    or_else(value, default)
}

/// Reads a `List<T>`, falling back to `default`.
pub fn list_or_else<T: Any>(value: &dyn Any, default: List<T>) -> List<T> {
    or_else(value, default)
}

/// Reads a `Vec<T>`, falling back to `default`.
pub fn sequence_or_else<T: Any + Clone>(value: &dyn Any, default: Vec<T>) -> Vec<T> {
    or_else(value, default)
}

/// Reads a `HashMap<K, V>`, falling back to `default`.
pub fn mapping_or_else<K, V>(value: &dyn Any, default: HashMap<K, V>) -> HashMap<K, V>
where
    K: Any + Clone,
    V: Any + Clone,
{
    or_else(value, default)
}

/// Reads a `State<S, A>`, falling back to `default`.
///
/// The wrapped computation is shared, not copied.
pub fn state_or_else<S: 'static, A: 'static>(value: &dyn Any, default: State<S, A>) -> State<S, A> {
    or_else(value, default)
}

/// Reads a `Function<E, A>`, falling back to `default`.
pub fn function_or_else<E: 'static, A: 'static>(
    value: &dyn Any,
    default: Function<E, A>,
) -> Function<E, A> {
    or_else(value, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn or_else_matching_type() {
        let value: Box<dyn Any> = Box::new(42_u8);
        assert_eq!(or_else(value.as_ref(), 0_u8), 42);
    }

    #[rstest]
    fn or_else_mismatched_type() {
        let value: Box<dyn Any> = Box::new(42_u8);
        assert_eq!(or_else(value.as_ref(), 0_u16), 0);
    }

    #[rstest]
    fn into_or_else_moves_value() {
        let value: Box<dyn Any> = Box::new("owned".to_string());
        assert_eq!(into_or_else(value, String::new()), "owned");
    }

    #[rstest]
    fn into_or_else_mismatch() {
        let value: Box<dyn Any> = Box::new(1_i64);
        assert_eq!(into_or_else(value, 'x'), 'x');
    }

    #[rstest]
    #[case(Box::new(true), true)]
    #[case(Box::new(1_i32), false)]
    fn bool_or_else_cases(#[case] value: Box<dyn Any>, #[case] expected: bool) {
        assert_eq!(bool_or_else(value.as_ref(), false), expected);
    }

    #[rstest]
    fn numeric_helpers_are_exact_on_type() {
        let value: Box<dyn Any> = Box::new(3_usize);
        assert_eq!(usize_or_else(value.as_ref(), 0), 3);
        assert_eq!(u64_or_else(value.as_ref(), 0), 0);
        assert!(f32_or_else(value.as_ref(), 1.5).eq(&1.5));
    }

    #[rstest]
    fn list_helper_accepts_elements_without_clone() {
        struct Token(u8);

        let list: Box<dyn Any> = Box::new(List::singleton(Token(7)));
        let read = list_or_else::<Token>(list.as_ref(), List::nil());
        assert_eq!(read.head().map(|token| token.0), Some(7));

        let other: Box<dyn Any> = Box::new(0_u8);
        assert!(list_or_else::<Token>(other.as_ref(), List::nil()).is_nil());
    }

    #[rstest]
    fn container_helpers() {
        let list: Box<dyn Any> = Box::new(List::from(vec![1, 2]));
        assert_eq!(list_or_else(list.as_ref(), List::nil()), List::from(vec![1, 2]));
        assert_eq!(sequence_or_else(list.as_ref(), vec![0]), vec![0]);

        let option: Box<dyn Any> = Box::new(Some('z'));
        assert_eq!(option_or_else(option.as_ref(), None), Some('z'));

        let either: Box<dyn Any> = Box::new(Either::<String, i32>::Right(5));
        assert_eq!(
            either_or_else(either.as_ref(), Either::<String, i32>::Left(String::new())),
            Either::Right(5)
        );

        let map: Box<dyn Any> = Box::new(HashMap::from([(1, "one")]));
        assert_eq!(
            mapping_or_else(map.as_ref(), HashMap::new()),
            HashMap::from([(1, "one")])
        );
    }

    #[rstest]
    fn effect_helpers() {
        let state: Box<dyn Any> = Box::new(State::new(|s: i32| (s + 1, s)));
        let fallback = State::new(|s: i32| (s, -1));
        assert_eq!(state_or_else(state.as_ref(), fallback.clone()).run(1), (2, 1));

        let function: Box<dyn Any> = Box::new(Function::new(|n: i32| n * 3));
        assert_eq!(function_or_else(function.as_ref(), Function::identity()).run(2), 6);
        assert_eq!(state_or_else(function.as_ref(), fallback).run(1), (1, -1));
    }
}
