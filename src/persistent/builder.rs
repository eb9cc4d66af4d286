//! Front-to-back construction of a [`List`].

use smallvec::SmallVec;

use super::List;

/// Elements kept inline before the buffer spills to the heap.
const INLINE_CAPACITY: usize = 8;

/// An owned buffer that collects elements in order and links them into a
/// [`List`] in one pass.
///
/// Nothing is shared while the builder is alive, so no list is ever
/// observed half-built.
///
/// # Examples
///
/// ```rust
/// use funkit::persistent::{List, ListBuilder};
///
/// let mut builder = ListBuilder::new();
/// builder.push(1);
/// builder.push(2);
/// builder.extend([3, 4]);
/// let list: List<i32> = builder.build();
/// assert_eq!(list, vec![1, 2, 3, 4].into());
/// ```
pub struct ListBuilder<T> {
    elements: SmallVec<[T; INLINE_CAPACITY]>,
}

impl<T> ListBuilder<T> {
    /// Creates an empty builder.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// Creates an empty builder with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity),
        }
    }

    /// Appends an element at the back.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Returns the number of collected elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing has been pushed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Links the collected elements into a list, preserving push order.
    #[must_use]
    pub fn build(mut self) -> List<T> {
        let mut list = List::nil();
        while let Some(element) = self.elements.pop() {
            list = List::cons(element, list);
        }
        list
    }
}

impl<T> Default for ListBuilder<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for ListBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}
