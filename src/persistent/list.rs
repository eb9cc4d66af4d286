//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`List`], a cons-list that is logically either `Nil`
//! or `Cons(head, tail)`. Nodes are reference-counted, so prepending shares
//! the whole tail with the original list:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = List::cons(0, list1.clone()): 0 -> [1 -> 2 -> 3 -> nil]
//! ```
//!
//! - O(1) `cons`, `head`, `tail`, `len`
//! - O(n) `get`, `concat`, `reverse`
//!
//! Lists are never patched in place. Building a list front-to-back goes through
//! [`ListBuilder`](super::ListBuilder), which owns its buffer until
//! `build()` links the nodes.
//!
//! # Examples
//!
//! ```rust
//! use funkit::persistent::List;
//!
//! let list = List::cons(1, List::cons(2, List::cons(3, List::nil())));
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! let collected: List<i32> = (1..=5).collect();
//! assert_eq!(collected.iter().sum::<i32>(), 15);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::ControlFlow;
use std::rc::Rc;

use super::builder::ListBuilder;
use crate::typeclass::{
    Foldable, Functor, Monad, MonadRec, Rebind, TypeConstructor, Unit, Unzippable, Zippable,
};

/// Internal node structure for the persistent list.
struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `nil`      | O(1)       |
/// | `cons`     | O(1)       |
/// | `head`     | O(1)       |
/// | `tail`     | O(1)       |
/// | `len`      | O(1)       |
/// | `get`      | O(n)       |
/// | `concat`   | O(n)       |
/// | `reverse`  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use funkit::persistent::List;
///
/// let list = List::singleton(42);
/// assert_eq!(list.head(), Some(&42));
/// assert!(list.tail().is_nil());
/// ```
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
    length: usize,
}

impl<T> List<T> {
    /// Creates the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let list: List<i32> = List::nil();
    /// assert!(list.is_nil());
    /// ```
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates the empty list. Same as [`List::nil`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::nil()
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::cons(element, Self::nil())
    }

    /// Creates a list with `head` in front of `tail`.
    ///
    /// The new list shares every node of `tail`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let tail = List::cons(2, List::nil());
    /// let list = List::cons(1, tail.clone());
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(tail.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(head: T, mut tail: Self) -> Self {
        Self {
            length: tail.length + 1,
            head: Some(Rc::new(Node {
                element: head,
                next: tail.head.take(),
            })),
        }
    }

    /// Prepends an element, leaving `self` untouched.
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self::cons(element, self.clone())
    }

    /// Builds a list from a Vec, consuming it from the back with `pop`.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Returns `true` for the empty list.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` for a non-empty list.
    #[inline]
    #[must_use]
    pub const fn is_cons(&self) -> bool {
        self.head.is_some()
    }

    /// Returns `true` for the empty list. Same as [`List::is_nil`].
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_nil()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns a reference to the first element, or `None` for `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let list: List<i32> = vec![1, 2].into();
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(List::<i32>::nil().head(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// The tail of `Nil` is `Nil`.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.tail_option().unwrap_or_default()
    }

    /// Returns the list without its first element, or `None` for `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let list: List<i32> = vec![1, 2].into();
    /// assert_eq!(list.tail_option(), Some(List::singleton(2)));
    /// assert_eq!(List::<i32>::nil().tail_option(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn tail_option(&self) -> Option<Self> {
        self.head.as_ref().map(|node| Self {
            head: node.next.clone(),
            length: self.length.saturating_sub(1),
        })
    }

    /// Decomposes the list into its head and tail.
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length.saturating_sub(1),
            };
            (&node.element, tail)
        })
    }

    /// Returns a reference to the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }
}

impl<T: Clone> List<T> {
    /// Returns a copy of the first element, or `None` for `Nil`.
    #[inline]
    #[must_use]
    pub fn head_option(&self) -> Option<T> {
        self.head().cloned()
    }

    /// Returns a new list with the same head and the given tail.
    ///
    /// Returns `None` when `self` is `Nil`, since there is no node to
    /// attach a tail to. Neither `self` nor `tail` is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let list: List<i32> = vec![1, 2, 3].into();
    /// let replaced = list.with_tail(List::singleton(9));
    /// assert_eq!(replaced, Some(vec![1, 9].into()));
    /// assert_eq!(list.len(), 3);
    ///
    /// assert_eq!(List::nil().with_tail(List::singleton(9)), None);
    /// ```
    #[must_use]
    pub fn with_tail(&self, tail: Self) -> Option<Self> {
        match self.head() {
            Some(head) => Some(Self::cons(head.clone(), tail)),
            None => {
                trace_fallback!("with_tail called on an empty list");
                None
            }
        }
    }

    /// Returns `self` followed by `other`.
    ///
    /// The result shares every node of `other`.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let front: List<i32> = vec![1, 2].into();
    /// let back: List<i32> = vec![3, 4].into();
    /// assert_eq!(front.concat(&back), vec![1, 2, 3, 4].into());
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        if self.is_nil() {
            return other.clone();
        }
        if other.is_nil() {
            return self.clone();
        }

        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = Self::cons(element, result);
        }
        result
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::nil(), |reversed, element| Self::cons(element.clone(), reversed))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`List`].
pub struct ListIter<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining = self.remaining.saturating_sub(1);
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ListIter<'_, T> {}

/// An owning iterator over elements of a [`List`].
///
/// Elements of nodes owned by this list alone are moved out. Nodes shared
/// with another list are left in place and their elements are cloned.
pub struct ListIntoIter<T> {
    list: List<T>,
}

impl<T: Clone> Iterator for ListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.head.take()?;
        self.list.length -= 1;
        match Rc::try_unwrap(node) {
            Ok(mut node) => {
                self.list.head = node.next.take();
                Some(node.element)
            }
            Err(shared) => {
                self.list.head.clone_from(&shared.next);
                Some(shared.element.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for ListIntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// Unlinks uniquely owned nodes one at a time so long lists do not recurse
/// on drop. Stops at the first node still shared with another list.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Shares every node: no element is cloned.
impl<T> Clone for List<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> From<Vec<T>> for List<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::build_from_vec(elements)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
}

impl<T, B> Rebind<B> for List<T> {
    type WithType = List<B>;
}

impl<T: Clone, B> Functor<B> for List<T> {
    fn fmap<F>(self, function: F) -> List<B>
    where
        F: Fn(T) -> B + 'static,
    {
        self.into_iter().map(function).collect()
    }
}

impl<T> Unit for List<T> {
    #[inline]
    fn unit(value: T) -> Self {
        Self::singleton(value)
    }
}

impl<T: Clone, B: Clone> Monad<B> for List<T> {
    fn flat_map<F>(self, function: F) -> List<B>
    where
        F: Fn(T) -> List<B> + 'static,
    {
        let mut builder = ListBuilder::new();
        for element in self {
            builder.extend(function(element));
        }
        builder.build()
    }
}

/// `fold_right` moves the elements into a `Vec` and walks it backwards.
impl<T: Clone> Foldable for List<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

/// Truncates to the shorter list.
impl<A: Clone, B: Clone> Zippable<List<B>> for List<A> {
    type Zipped = List<(A, B)>;

    fn zip(self, other: List<B>) -> List<(A, B)> {
        if self.len() != other.len() {
            trace_fallback!(
                left = self.len(),
                right = other.len(),
                "zip truncated to the shorter list"
            );
        }
        self.into_iter().zip(other).collect()
    }
}

impl<A: Clone, B: Clone> Unzippable for List<(A, B)> {
    type First = List<A>;
    type Second = List<B>;

    fn unzip(self) -> (List<A>, List<B>) {
        let (firsts, seconds): (Vec<A>, Vec<B>) = self.into_iter().unzip();
        (List::from(firsts), List::from(seconds))
    }
}

/// Shares the depth-first search of the `Vec` instance.
impl<A: Clone, B: Clone> MonadRec<A, B> for List<ControlFlow<B, A>> {
    fn tail_rec_m<F>(initial: A, step: F) -> List<B>
    where
        F: Fn(A) -> Self + 'static,
    {
        let results = <Vec<ControlFlow<B, A>>>::tail_rec_m(initial, move |seed| {
            step(seed).into_iter().collect()
        });
        List::from(results)
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for List<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

static_assertions::assert_impl_all!(List<i32>: Clone, Default, PartialEq, Eq, Hash, fmt::Debug);
static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);
