//! # Lazy sequences over a two-method pull cursor
//!
//! This library implements a composable sequence algebra on top of a
//! single primitive: a cursor that can report whether more elements exist
//! and hand out the next one.
//!
//! ## Core Design
//!
//! 1. **Cursor protocol**: [`Enumerator`] with `has_next` / `next`
//! 2. **Sequence algebra**: [`Enumerable`] derives every operation from a
//!    fresh cursor per traversal
//! 3. **Variants**: array-backed, mapped and filtered sequences; the first
//!    two override positional queries to skip traversal
//! 4. **Lookahead filtering**: the filtered cursor buffers one element so
//!    `has_next` never consumes
//!
//! Transformations (`map`, `find_all`) are lazy; terminal operations
//! (`find`, `max`, `sort`, `to_vec`, ...) force exactly one traversal.
//!
//! ## Usage Example
//!
//! ```
//! use enumerable::{from_slice, Enumerable};
//!
//! let readings = [5, 3, 8, 1];
//! let seq = from_slice(&readings);
//! assert_eq!(seq.sort(|a, b| a.cmp(b)).to_vec(), vec![1, 3, 5, 8]);
//!
//! let big = (&seq).map(|v| v * 10).find_all(|v| *v > 20);
//! assert_eq!(big.to_vec(), vec![50, 30, 80]);
//! assert_eq!(big.first(), Some(50));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod enumerable; // Sequence algebra
pub mod enumerator; // Pull cursor protocol
pub mod iter; // std::iter bridge
pub mod pipeline; // Runtime-configured integer pipelines
pub mod sort; // Stable, panic-free sorting
pub mod variants; // Array-backed, mapped and filtered sequences

// Re-exports for convenience
pub use enumerable::Enumerable;
pub use enumerator::Enumerator;
pub use iter::Iter;
pub use pipeline::{Outcome, Pipeline, PipelineError, Stage, Terminal};
pub use variants::{
    ArrayEnumerable, ArrayEnumerator, FindAllEnumerable, FindAllEnumerator, MapEnumerable,
    MapEnumerator,
};

/// Wrap a borrowed slice as a sequence.
pub fn from_slice<T>(items: &[T]) -> ArrayEnumerable<'_, T> {
    ArrayEnumerable::from_slice(items)
}

/// Wrap an owned vector as a sequence.
pub fn from_vec<'a, T>(items: Vec<T>) -> ArrayEnumerable<'a, T> {
    ArrayEnumerable::from_vec(items)
}

/// Traits needed to call sequence operations.
pub mod prelude {
    pub use crate::enumerable::Enumerable;
    pub use crate::enumerator::Enumerator;
    pub use crate::{from_slice, from_vec};
}
