//! Mapped sequences
//!
//! A transform never changes cardinality or position, so `len`,
//! `is_empty` and the positional lookups are delegated upstream and the
//! transform runs on the single element that comes back.

use std::fmt;

use crate::enumerable::Enumerable;
use crate::enumerator::Enumerator;

/// Sequence applying `mapper` to each upstream element as it is pulled.
#[derive(Clone)]
pub struct MapEnumerable<S, F> {
    source: S,
    mapper: F,
}

impl<S, F> MapEnumerable<S, F> {
    /// Compose `mapper` over `source`.
    pub fn new(source: S, mapper: F) -> Self {
        Self { source, mapper }
    }

    /// Upstream sequence.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: fmt::Debug, F> fmt::Debug for MapEnumerable<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapEnumerable")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Cursor applying a borrowed transform to an upstream cursor.
pub struct MapEnumerator<'s, E, F> {
    source: E,
    mapper: &'s F,
}

impl<'s, E, F> MapEnumerator<'s, E, F> {
    /// Wrap `source`, transforming each element with `mapper`.
    pub fn new(source: E, mapper: &'s F) -> Self {
        Self { source, mapper }
    }
}

impl<E: fmt::Debug, F> fmt::Debug for MapEnumerator<'_, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapEnumerator")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<E, F, U> Enumerator for MapEnumerator<'_, E, F>
where
    E: Enumerator,
    F: Fn(E::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.source.has_next()
    }

    fn next(&mut self) -> Option<U> {
        self.source.next().map(self.mapper)
    }
}

impl<S, F, U> Enumerable for MapEnumerable<S, F>
where
    S: Enumerable,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Enumerator<'s> = MapEnumerator<'s, S::Enumerator<'s>, F> where Self: 's;

    fn enumerator(&self) -> Self::Enumerator<'_> {
        MapEnumerator::new(self.source.enumerator(), &self.mapper)
    }

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    fn len(&self) -> usize {
        self.source.len()
    }

    fn first(&self) -> Option<U> {
        self.source.first().map(&self.mapper)
    }

    fn last(&self) -> Option<U> {
        self.source.last().map(&self.mapper)
    }

    fn nth(&self, index: usize) -> Option<U> {
        self.source.nth(index).map(&self.mapper)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::from_slice;

    #[test]
    fn test_nth_transforms_one_element() {
        let calls = Cell::new(0);
        let scaled = from_slice(&[1, 2, 3]).map(|v| {
            calls.set(calls.get() + 1);
            v * 10
        });
        assert_eq!(scaled.nth(1), Some(20));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_len_does_not_run_mapper() {
        let calls = Cell::new(0);
        let scaled = from_slice(&[1, 2, 3]).map(|v| {
            calls.set(calls.get() + 1);
            v + 1
        });
        assert_eq!(scaled.len(), 3);
        assert!(!scaled.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_first_and_last_on_empty_source() {
        let none: [u8; 0] = [];
        let mapped = from_slice(&none).map(|v| v as u32);
        assert_eq!(mapped.first(), None);
        assert_eq!(mapped.last(), None);
        assert!(mapped.is_empty());
    }

    #[test]
    fn test_mapping_changes_item_type() {
        let words = from_slice(&["a", "bb", "ccc"]).map(str::len);
        assert_eq!(words.to_vec(), vec![1, 2, 3]);
        assert_eq!(words.last(), Some(3));
    }

    #[test]
    fn test_source_is_the_untransformed_upstream() {
        let doubled = from_slice(&[1, 2, 3]).map(|v| v * 2);
        assert_eq!(doubled.source().as_slice(), &[1, 2, 3]);
        assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    }
}
