//! Stable sorting under caller-supplied comparators
//!
//! `slice::sort_by` may panic when the comparator is not a total order.
//! Sequences promise an unspecified but deterministic order instead, so the
//! crate sorts with its own bottom-up merge sort over element positions.
//!
//! ## Invariants
//!
//! * Equal elements keep their input order (merge takes from the right run
//!   only on strict `Less`).
//! * Every input element appears exactly once in the output, whatever the
//!   comparator returns.

use std::cmp::Ordering;

/// Stable-sort `items` by `comparator`, returning the reordered vector.
///
/// Time O(n log n) comparator calls, O(n) extra positions.
pub fn stable_sort_by<T, C>(items: Vec<T>, mut comparator: C) -> Vec<T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    if n < 2 {
        return items;
    }

    let mut order: Vec<usize> = (0..n).collect();
    let mut scratch = vec![0; n];
    let mut width = 1;

    while width < n {
        for start in (0..n).step_by(2 * width) {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            merge_runs(
                &items,
                &order[start..mid],
                &order[mid..end],
                &mut scratch[start..end],
                &mut comparator,
            );
        }
        std::mem::swap(&mut order, &mut scratch);
        width *= 2;
    }

    permute(items, &order)
}

/// Merge two sorted runs of positions into `out`.
fn merge_runs<T, C>(
    items: &[T],
    left: &[usize],
    right: &[usize],
    out: &mut [usize],
    comparator: &mut C,
) where
    C: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_right = match (left.get(i), right.get(j)) {
            (Some(&l), Some(&r)) => comparator(&items[r], &items[l]) == Ordering::Less,
            (None, Some(_)) => true,
            _ => false,
        };
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

/// Move `items` into the arrangement described by `order`.
fn permute<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&position| slots[position].take())
        .collect()
}
