//! Filtered sequences
//!
//! Answering `has_next` for a filter means finding the next accepted
//! element without losing it. The cursor keeps a one-element lookahead:
//!
//! ```text
//!   Needed ──has_next/next: scan upstream──▶ Ready(found)
//!   Ready  ──has_next──▶ Ready           (pure read)
//!   Ready  ──next: hand out found──▶ Needed
//! ```
//!
//! Each upstream element reaches the predicate at most once, and repeated
//! `has_next` calls never skip or duplicate elements.

use std::fmt;

use tracing::trace;

use crate::enumerable::Enumerable;
use crate::enumerator::Enumerator;

/// Sequence keeping the upstream elements accepted by `finder`.
///
/// Filtering can change cardinality and positions arbitrarily, so every
/// algebra operation traverses.
#[derive(Clone)]
pub struct FindAllEnumerable<S, P> {
    source: S,
    finder: P,
}

impl<S, P> FindAllEnumerable<S, P> {
    /// Compose `finder` over `source`.
    pub fn new(source: S, finder: P) -> Self {
        Self { source, finder }
    }

    /// Upstream sequence.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: fmt::Debug, P> fmt::Debug for FindAllEnumerable<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindAllEnumerable")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Lookahead buffer of a [`FindAllEnumerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Lookahead<T> {
    /// Nothing buffered; the next query scans upstream.
    Needed,
    /// Scan done: `Some` holds the accepted element, `None` means upstream
    /// ran out first.
    Ready(Option<T>),
}

/// Cursor yielding the upstream elements accepted by a borrowed predicate.
pub struct FindAllEnumerator<'s, E: Enumerator, P> {
    source: E,
    finder: &'s P,
    lookahead: Lookahead<E::Item>,
}

impl<'s, E, P> FindAllEnumerator<'s, E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    /// Wrap `source`, keeping elements accepted by `finder`.
    pub fn new(source: E, finder: &'s P) -> Self {
        Self {
            source,
            finder,
            lookahead: Lookahead::Needed,
        }
    }

    /// Fill the lookahead buffer if it is empty.
    fn prepare(&mut self) {
        if let Lookahead::Ready(_) = self.lookahead {
            return;
        }

        let mut scanned = 0usize;
        let mut found = None;
        while self.source.has_next() {
            let Some(value) = self.source.next() else { break };
            scanned += 1;
            if (self.finder)(&value) {
                found = Some(value);
                break;
            }
        }
        trace!(scanned, found = found.is_some(), "find_all lookahead");
        self.lookahead = Lookahead::Ready(found);
    }
}

impl<E: Enumerator + fmt::Debug, P> fmt::Debug for FindAllEnumerator<'_, E, P>
where
    E::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindAllEnumerator")
            .field("source", &self.source)
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}

impl<E, P> Enumerator for FindAllEnumerator<'_, E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn has_next(&mut self) -> bool {
        self.prepare();
        matches!(self.lookahead, Lookahead::Ready(Some(_)))
    }

    fn next(&mut self) -> Option<E::Item> {
        self.prepare();
        match std::mem::replace(&mut self.lookahead, Lookahead::Needed) {
            Lookahead::Ready(found) => found,
            Lookahead::Needed => None,
        }
    }
}

impl<S, P> Enumerable for FindAllEnumerable<S, P>
where
    S: Enumerable,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Enumerator<'s> = FindAllEnumerator<'s, S::Enumerator<'s>, P> where Self: 's;

    fn enumerator(&self) -> Self::Enumerator<'_> {
        FindAllEnumerator::new(self.source.enumerator(), &self.finder)
    }
}
