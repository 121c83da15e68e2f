//! Concrete sequence variants
//!
//! A closed set, one level deep:
//! - [`ArrayEnumerable`]: backed by a slice or an owned vector
//! - [`MapEnumerable`]: applies a transform as elements are pulled
//! - [`FindAllEnumerable`]: keeps elements accepted by a predicate
//!
//! Each variant pairs with its own cursor type.

mod array;
mod find_all;
mod map;

pub use array::{ArrayEnumerable, ArrayEnumerator};
pub use find_all::{FindAllEnumerable, FindAllEnumerator};
pub use map::{MapEnumerable, MapEnumerator};
