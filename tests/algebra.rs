//! Sequence algebra tests
//!
//! Terminal operations across the three variants, including the
//! traversal-avoiding overrides and the `Option` sentinel.

mod common;

use common::{tagged, CallCounter};
use enumerable::prelude::*;

#[test]
fn test_empty_sequence_has_no_values() {
    let empty: Vec<i32> = Vec::new();
    let seq = from_slice(&empty);

    assert_eq!(seq.first(), None);
    assert_eq!(seq.last(), None);
    assert_eq!(seq.max(|a, b| a.cmp(b)), None);
    assert_eq!(seq.min(|a, b| a.cmp(b)), None);
    assert_eq!(seq.nth(0), None);
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.index_of(|_| true), None);
    assert!(seq.to_vec().is_empty());
}

#[test]
fn test_sort_ascending() {
    let sorted = from_slice(&[5, 3, 8, 1]).sort(|a, b| a.cmp(b));
    assert_eq!(sorted.to_vec(), vec![1, 3, 5, 8]);
}

#[test]
fn test_sort_is_stable() {
    let items = [
        tagged(2, "a"),
        tagged(1, "b"),
        tagged(2, "c"),
        tagged(1, "d"),
    ];
    let ids: Vec<&str> = from_slice(&items)
        .sort(|a, b| a.v.cmp(&b.v))
        .map(|t| t.id)
        .to_vec();
    assert_eq!(ids, vec!["b", "d", "a", "c"]);
}

#[test]
fn test_sort_tolerates_malformed_comparator() {
    let items: Vec<i32> = (0..20).collect();
    let first = from_slice(&items).sort(|a, b| (a % 3).cmp(&(b % 5)).reverse());
    let second = from_slice(&items).sort(|a, b| (a % 3).cmp(&(b % 5)).reverse());

    assert_eq!(first.len(), items.len());
    assert_eq!(first.to_vec(), second.to_vec(), "ordering should be deterministic");
}

#[test]
fn test_max_ties_keep_first() {
    let items = [tagged(1, "a"), tagged(1, "b")];
    let best = from_slice(&items)
        .max(|a, b| a.v.cmp(&b.v))
        .expect("non-empty sequence has a max");
    assert_eq!(best.id, "a");
}

#[test]
fn test_min_is_reverse_of_max() {
    let seq = from_slice(&[4, -2, 9, -2, 0]);
    assert_eq!(seq.min(|a, b| a.cmp(b)), Some(-2));
    assert_eq!(seq.max(|a, b| a.cmp(b)), Some(9));
}

#[test]
fn test_search_operations() {
    let seq = from_slice(&[3, 6, 9, 12]);

    assert_eq!(seq.index_of(|v| *v > 5), Some(1));
    assert_eq!(seq.index_of(|v| *v > 50), None);
    assert_eq!(seq.find(|v| v % 4 == 0), Some(12));
    assert_eq!(seq.find(|v| *v < 0), None);
    assert!(seq.contains(|v| *v == 9));
    assert!(!seq.contains(|v| *v == 10));
    assert!(seq.all_pass(|v| v % 3 == 0));
    assert!(!seq.all_pass(|v| *v < 12));
}

#[test]
fn test_contains_value_through_every_variant() {
    let source = [1, 2, 3, 4];
    let array = from_slice(&source);
    let mapped = (&array).map(|v| v * 10);
    let filtered = (&array).find_all(|v| v % 2 == 0);

    assert!(array.contains_value(&3));
    assert!(mapped.contains_value(&30));
    assert!(!mapped.contains_value(&3));
    assert!(filtered.contains_value(&4));
    assert!(!filtered.contains_value(&3));
}

#[test]
fn test_for_each_visits_in_order() {
    let mut seen = Vec::new();
    from_slice(&["x", "y", "z"]).for_each(|s| seen.push(s));
    assert_eq!(seen, vec!["x", "y", "z"]);
}

#[test]
fn test_positional_operations_on_filtered_sequence() {
    let seq = from_slice(&[1, 2, 3, 4, 5, 6]).find_all(|v| v % 2 == 1);

    assert_eq!(seq.first(), Some(1));
    assert_eq!(seq.last(), Some(5));
    assert_eq!(seq.nth(1), Some(3));
    assert_eq!(seq.nth(3), None);
    assert_eq!(seq.len(), 3);
}

#[test]
fn test_or_default_family() {
    let seq = from_slice(&[7, 8]);
    assert_eq!(seq.first_or_default(0), 7);
    assert_eq!(seq.last_or_default(0), 8);
    assert_eq!(seq.nth_or_default(1, 0), 8);
    assert_eq!(seq.nth_or_default(2, 0), 0);

    let empty = from_vec(Vec::<i32>::new());
    assert_eq!(empty.first_or_default(-1), -1);
    assert_eq!(empty.last_or_default(-1), -1);
}

#[test]
fn test_absent_element_is_distinct_from_no_element() {
    // A present `None` element must not read as "no such element".
    let items = [Some(1), None, Some(3)];
    let seq = from_slice(&items);

    assert_eq!(seq.nth(1), Some(None));
    assert_eq!(seq.nth_or_default(1, Some(42)), None);
    assert_eq!(seq.nth(3), None);
    assert_eq!(seq.nth_or_default(3, Some(42)), Some(42));

    let trailing = [Some(1), None];
    assert_eq!(from_slice(&trailing).last(), Some(None));
    assert_eq!(from_slice(&trailing).last_or_default(Some(9)), None);

    let mapped = from_slice(&trailing).map(|v| v.map(|n| n + 1));
    assert_eq!(mapped.first(), Some(Some(2)));
    assert_eq!(mapped.last(), Some(None));
}

#[test]
fn test_mapped_nth_runs_mapper_once() {
    let counter = CallCounter::new();
    let seq = from_slice(&[1, 2, 3]).map(|v| {
        counter.hit();
        v * 10
    });

    assert_eq!(seq.nth(1), Some(20));
    assert_eq!(counter.calls(), 1);
}

#[test]
fn test_mapped_first_and_last_run_mapper_once_each() {
    let counter = CallCounter::new();
    let seq = from_slice(&[1, 2, 3]).map(|v| {
        counter.hit();
        v - 1
    });

    assert_eq!(seq.first(), Some(0));
    assert_eq!(seq.last(), Some(2));
    assert_eq!(counter.calls(), 2);
}

#[test]
fn test_save_freezes_upstream_work() {
    let counter = CallCounter::new();
    let lazy = from_slice(&[1, 2, 3]).map(|v| {
        counter.hit();
        v * 2
    });

    let saved = lazy.save();
    assert_eq!(saved.to_vec(), vec![2, 4, 6]);
    assert_eq!(saved.to_vec(), vec![2, 4, 6]);
    assert_eq!(counter.calls(), 3, "mapper should run once per element");
}

#[test]
fn test_lazy_chain_reruns_without_save() {
    let counter = CallCounter::new();
    let lazy = from_slice(&[1, 2, 3]).map(|v| {
        counter.hit();
        v * 2
    });

    let _ = lazy.to_vec();
    let _ = lazy.to_vec();
    assert_eq!(counter.calls(), 6);
}

#[test]
fn test_transformations_are_lazy() {
    let counter = CallCounter::new();
    let chain = from_slice(&[1, 2, 3, 4])
        .map(|v| {
            counter.hit();
            v + 1
        })
        .find_all(|v| v % 2 == 0);
    assert_eq!(counter.calls(), 0, "nothing runs before a terminal operation");

    assert_eq!(chain.first(), Some(2));
    assert_eq!(counter.calls(), 1, "first stops at the first match");
}

#[test]
fn test_to_vec_returns_fresh_vectors() {
    let seq = from_vec(vec![1, 2, 3]);
    let mut first = seq.to_vec();
    first.clear();
    assert_eq!(seq.to_vec(), vec![1, 2, 3]);
}

#[test]
#[should_panic(expected = "predicate rejected 3")]
fn test_predicate_panic_propagates() {
    let seq = from_slice(&[1, 2, 3, 4]).find_all(|v| {
        if *v == 3 {
            panic!("predicate rejected {v}");
        }
        true
    });
    let _ = seq.to_vec();
}

#[test]
#[should_panic(expected = "comparator refused")]
fn test_comparator_panic_propagates() {
    let _ = from_slice(&[2, 1]).sort(|_: &i32, _: &i32| -> std::cmp::Ordering {
        panic!("comparator refused")
    });
}

#[test]
#[should_panic(expected = "transform overflowed")]
fn test_transform_panic_propagates() {
    let seq = from_slice(&[1u8, 200]).map(|v| v.checked_mul(2).expect("transform overflowed"));
    let _ = seq.last();
}
