//! Bridge from cursors to `std::iter::Iterator`

use crate::enumerator::Enumerator;

/// Iterator driving a cursor through the `has_next`/`next` protocol.
///
/// Obtained from [`Enumerable::iter`](crate::Enumerable::iter).
#[derive(Debug, Clone)]
pub struct Iter<E> {
    cursor: E,
}

impl<E> Iter<E> {
    /// Wrap a cursor.
    pub fn new(cursor: E) -> Self {
        Self { cursor }
    }

    /// Recover the underlying cursor at its current position.
    pub fn into_inner(self) -> E {
        self.cursor
    }
}

impl<E: Enumerator> Iterator for Iter<E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.has_next() {
            self.cursor.next()
        } else {
            None
        }
    }
}
