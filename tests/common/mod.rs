//! Shared helpers for integration tests

#![allow(dead_code)]

use std::cell::Cell;

/// Counts how many times a caller-supplied callback ran.
///
/// Sequences borrow their callbacks immutably, so the count lives in a
/// `Cell`.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// Record with a sort key and an identity, for stability and tie-break checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged {
    pub v: i32,
    pub id: &'static str,
}

pub fn tagged(v: i32, id: &'static str) -> Tagged {
    Tagged { v, id }
}
