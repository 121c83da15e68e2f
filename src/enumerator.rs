//! Pull cursor protocol
//!
//! Everything in this crate is built on two operations:
//! peek for more (`has_next`) and consume next (`next`).
//! A cursor is single-use; sequences hand out a fresh one per traversal.

/// Single-pass, stateful traversal over a sequence.
///
/// Contract:
/// - `has_next` may be called any number of times in a row without
///   advancing the cursor.
/// - `next` is meaningful only after `has_next` reported `true`. Called
///   otherwise it returns `None` rather than panicking.
pub trait Enumerator {
    /// Element type produced by this cursor.
    type Item;

    /// Whether a further element can be produced.
    ///
    /// Takes `&mut self` because some cursors (see
    /// [`FindAllEnumerator`](crate::variants::FindAllEnumerator)) must scan
    /// ahead and cache what they found.
    fn has_next(&mut self) -> bool;

    /// Consume the next element, or `None` once the cursor is exhausted.
    fn next(&mut self) -> Option<Self::Item>;
}

impl<E: Enumerator + ?Sized> Enumerator for &mut E {
    type Item = E::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<E: Enumerator + ?Sized> Enumerator for Box<E> {
    type Item = E::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}
