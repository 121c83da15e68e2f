//! Sequence algebra
//!
//! Every operation here is written against a single primitive,
//! [`Enumerable::enumerator`]: acquire a fresh cursor, traverse it.
//! Concrete variants override the positional and cardinality operations
//! when they can answer without a traversal.
//!
//! Terminal operations return `Option` where the original design returned
//! a null sentinel. `None` means "no such element"; a sequence whose items
//! are themselves optional reports a present-but-empty element as
//! `Some(None)`.

use std::cmp::Ordering;

use tracing::debug;

use crate::enumerator::Enumerator;
use crate::iter::Iter;
use crate::sort::stable_sort_by;
use crate::variants::{ArrayEnumerable, FindAllEnumerable, MapEnumerable};

/// A possibly-lazy ordered view that hands out independent cursors.
///
/// A sequence never holds traversal position: `enumerator` takes `&self`
/// and each call starts from the beginning.
pub trait Enumerable {
    /// Element type of the sequence.
    type Item;

    /// Cursor type produced by [`Enumerable::enumerator`].
    type Enumerator<'s>: Enumerator<Item = Self::Item>
    where
        Self: 's;

    /// Create a fresh cursor positioned before the first element.
    fn enumerator(&self) -> Self::Enumerator<'_>;

    /// Call `func` on every element, in cursor order.
    fn for_each<F>(&self, mut func: F)
    where
        F: FnMut(Self::Item),
    {
        let mut cursor = self.enumerator();
        while cursor.has_next() {
            let Some(value) = cursor.next() else { break };
            func(value);
        }
    }

    /// Position of the first element accepted by `finder`.
    fn index_of<P>(&self, mut finder: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut cursor = self.enumerator();
        let mut index = 0;
        while let Some(value) = cursor.next() {
            if finder(&value) {
                return Some(index);
            }
            index += 1;
        }
        None
    }

    /// First element accepted by `finder`.
    fn find<P>(&self, mut finder: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut cursor = self.enumerator();
        while let Some(value) = cursor.next() {
            if finder(&value) {
                return Some(value);
            }
        }
        None
    }

    /// Lazily keep only the elements accepted by `finder`.
    ///
    /// Nothing is evaluated until a cursor over the result is driven.
    /// Use `(&seq).find_all(..)` to keep `seq` usable afterwards.
    fn find_all<P>(self, finder: P) -> FindAllEnumerable<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        FindAllEnumerable::new(self, finder)
    }

    /// Lazily transform every element with `mapper`.
    fn map<U, F>(self, mapper: F) -> MapEnumerable<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        MapEnumerable::new(self, mapper)
    }

    /// Greatest element under `comparator`.
    ///
    /// The running best is replaced only when `comparator(best, candidate)`
    /// is `Less`, so among equal elements the earliest one wins.
    fn max<C>(&self, mut comparator: C) -> Option<Self::Item>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut cursor = self.enumerator();
        let mut best = cursor.next()?;
        while let Some(candidate) = cursor.next() {
            if comparator(&best, &candidate) == Ordering::Less {
                best = candidate;
            }
        }
        Some(best)
    }

    /// Least element under `comparator`, earliest wins on ties.
    fn min<C>(&self, mut comparator: C) -> Option<Self::Item>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.max(|a, b| comparator(a, b).reverse())
    }

    /// Whether any element is accepted by `finder`.
    fn contains<P>(&self, finder: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.index_of(finder).is_some()
    }

    /// Whether any element equals `value`.
    fn contains_value(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.contains(|candidate| candidate == value)
    }

    /// Whether every element passes `tester` (true for an empty sequence).
    fn all_pass<P>(&self, mut tester: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.contains(|value| !tester(value))
    }

    /// Whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        !self.enumerator().has_next()
    }

    /// Number of elements. O(n) unless a variant knows better.
    fn len(&self) -> usize {
        let mut cursor = self.enumerator();
        let mut count = 0;
        while cursor.next().is_some() {
            count += 1;
        }
        count
    }

    /// Materialize and stable-sort under `comparator`.
    ///
    /// Equal elements keep their relative order. A comparator that is not a
    /// total order produces some deterministic arrangement, never a panic.
    fn sort<'a, C>(&self, comparator: C) -> ArrayEnumerable<'a, Self::Item>
    where
        Self::Item: 'a,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let items = stable_sort_by(self.to_vec(), comparator);
        debug!(len = items.len(), "sorted sequence");
        ArrayEnumerable::from_vec(items)
    }

    /// Collect every element into a freshly allocated vector.
    fn to_vec(&self) -> Vec<Self::Item> {
        let mut result = Vec::new();
        self.for_each(|value| result.push(value));
        result
    }

    /// First element.
    fn first(&self) -> Option<Self::Item> {
        let mut cursor = self.enumerator();
        if cursor.has_next() {
            cursor.next()
        } else {
            None
        }
    }

    /// Last element.
    fn last(&self) -> Option<Self::Item> {
        let mut cursor = self.enumerator();
        let mut result = None;
        while let Some(value) = cursor.next() {
            result = Some(value);
        }
        result
    }

    /// Element at zero-based `index`.
    fn nth(&self, index: usize) -> Option<Self::Item> {
        let mut cursor = self.enumerator();
        let mut position = 0;
        while let Some(value) = cursor.next() {
            if position == index {
                return Some(value);
            }
            position += 1;
        }
        None
    }

    /// First element, or `default` when the sequence is empty.
    fn first_or_default(&self, default: Self::Item) -> Self::Item {
        self.first().unwrap_or(default)
    }

    /// Last element, or `default` when the sequence is empty.
    fn last_or_default(&self, default: Self::Item) -> Self::Item {
        self.last().unwrap_or(default)
    }

    /// Element at `index`, or `default` when out of range.
    fn nth_or_default(&self, index: usize, default: Self::Item) -> Self::Item {
        self.nth(index).unwrap_or(default)
    }

    /// Evaluate the sequence once and keep the result.
    ///
    /// The returned sequence owns its elements; consuming it again never
    /// re-runs upstream transforms or predicates.
    fn save<'a>(&self) -> ArrayEnumerable<'a, Self::Item>
    where
        Self::Item: 'a,
    {
        let items = self.to_vec();
        debug!(len = items.len(), "saved sequence");
        ArrayEnumerable::from_vec(items)
    }

    /// Standard iterator over a fresh cursor.
    fn iter(&self) -> Iter<Self::Enumerator<'_>> {
        Iter::new(self.enumerator())
    }
}

// Composing over `&seq` leaves `seq` usable; overrides are forwarded so a
// borrowed array still answers `len` without a traversal.
impl<'r, E: Enumerable + ?Sized> Enumerable for &'r E {
    type Item = E::Item;
    type Enumerator<'s> = E::Enumerator<'s> where Self: 's;

    fn enumerator(&self) -> Self::Enumerator<'_> {
        (**self).enumerator()
    }

    fn contains_value(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        (**self).contains_value(value)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn to_vec(&self) -> Vec<Self::Item> {
        (**self).to_vec()
    }

    fn first(&self) -> Option<Self::Item> {
        (**self).first()
    }

    fn last(&self) -> Option<Self::Item> {
        (**self).last()
    }

    fn nth(&self, index: usize) -> Option<Self::Item> {
        (**self).nth(index)
    }
}
