//! Array-backed sequences
//!
//! Positional and cardinality queries are answered by indexing the
//! backing slice directly instead of walking a cursor.

use tracing::debug;

use crate::enumerable::Enumerable;
use crate::enumerator::Enumerator;

/// Storage behind an [`ArrayEnumerable`].
#[derive(Debug, Clone)]
enum Backing<'a, T> {
    /// Caller-owned slice; cannot be mutated while the sequence lives.
    Borrowed(&'a [T]),
    /// Result of `save`, `sort` or `from_vec`.
    Owned(Vec<T>),
}

/// Sequence over an in-memory ordered collection.
///
/// Elements are cloned out as the cursor advances. Wrap large items in
/// `Rc`/`Arc` to keep that cheap.
#[derive(Debug, Clone)]
pub struct ArrayEnumerable<'a, T> {
    items: Backing<'a, T>,
}

impl<'a, T> ArrayEnumerable<'a, T> {
    /// Sequence over a borrowed slice.
    pub fn from_slice(items: &'a [T]) -> Self {
        Self {
            items: Backing::Borrowed(items),
        }
    }

    /// Sequence owning `items`.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: Backing::Owned(items),
        }
    }

    /// Backing elements in order.
    pub fn as_slice(&self) -> &[T] {
        match &self.items {
            Backing::Borrowed(items) => *items,
            Backing::Owned(items) => items.as_slice(),
        }
    }

    /// Whether the sequence owns its elements.
    pub fn is_owned(&self) -> bool {
        matches!(self.items, Backing::Owned(_))
    }

    /// Take the elements out, copying only when they were borrowed.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        match self.items {
            Backing::Borrowed(items) => items.to_vec(),
            Backing::Owned(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for ArrayEnumerable<'_, T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<'a, T> From<&'a [T]> for ArrayEnumerable<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::from_slice(items)
    }
}

/// Cursor over a slice: an index compared against the length.
#[derive(Debug, Clone)]
pub struct ArrayEnumerator<'s, T> {
    items: &'s [T],
    index: usize,
}

impl<'s, T> ArrayEnumerator<'s, T> {
    /// Cursor positioned before the first element of `items`.
    pub fn new(items: &'s [T]) -> Self {
        Self { items, index: 0 }
    }
}

impl<T: Clone> Enumerator for ArrayEnumerator<'_, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.index < self.items.len()
    }

    fn next(&mut self) -> Option<T> {
        let value = self.items.get(self.index)?.clone();
        self.index += 1;
        Some(value)
    }
}

impl<'a, T: Clone> Enumerable for ArrayEnumerable<'a, T> {
    type Item = T;
    type Enumerator<'s> = ArrayEnumerator<'s, T> where Self: 's;

    fn enumerator(&self) -> Self::Enumerator<'_> {
        ArrayEnumerator::new(self.as_slice())
    }

    fn contains_value(&self, value: &T) -> bool
    where
        Self::Item: PartialEq,
    {
        self.as_slice().contains(value)
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn to_vec(&self) -> Vec<T> {
        let items = self.as_slice().to_vec();
        debug!(len = items.len(), "copied array sequence");
        items
    }

    fn first(&self) -> Option<T> {
        self.as_slice().first().cloned()
    }

    fn last(&self) -> Option<T> {
        self.as_slice().last().cloned()
    }

    fn nth(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_steps_through_slice() {
        let items = [10, 20];
        let mut cursor = ArrayEnumerator::new(&items);
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Some(10));
        assert_eq!(cursor.next(), Some(20));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_positional_overrides() {
        let seq = ArrayEnumerable::from_slice(&[4, 5, 6]);
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        assert_eq!(seq.first(), Some(4));
        assert_eq!(seq.last(), Some(6));
        assert_eq!(seq.nth(1), Some(5));
        assert_eq!(seq.nth(3), None);
        assert!(seq.contains_value(&6));
        assert!(!seq.contains_value(&7));
    }

    #[test]
    fn test_to_vec_is_a_fresh_copy() {
        let seq = ArrayEnumerable::from_vec(vec![1, 2, 3]);
        let mut copy = seq.to_vec();
        copy[0] = 99;
        copy.push(4);
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_into_vec_by_backing() {
        let borrowed_source = vec!['x', 'y'];
        let borrowed = ArrayEnumerable::from_slice(&borrowed_source);
        assert!(!borrowed.is_owned());
        assert_eq!(borrowed.into_vec(), borrowed_source);

        let owned: ArrayEnumerable<'_, char> = vec!['z'].into();
        assert!(owned.is_owned());
        assert_eq!(owned.into_vec(), vec!['z']);
    }
}
