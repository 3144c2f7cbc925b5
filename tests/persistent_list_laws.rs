//! Property-based tests for PersistentList.
//!
//! These tests verify the structural laws of the list and of the
//! slicing, windowing and zipping operations built on it.

use proptest::prelude::*;
use traversa::persistent::PersistentList;
use traversa::typeclass::{Monoid, Semigroup, Sum};

// =============================================================================
// Strategy for generating PersistentList
// =============================================================================

/// Generates a `PersistentList<i32>` with up to `max_size` elements.
fn persistent_list_strategy(max_size: usize) -> impl Strategy<Value = PersistentList<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|vector| vector.into_iter().collect())
}

/// Generates a small `PersistentList<i32>` for faster tests.
fn small_list() -> impl Strategy<Value = PersistentList<i32>> {
    persistent_list_strategy(20)
}

fn non_empty_list() -> impl Strategy<Value = PersistentList<i32>> {
    small_list().prop_filter("non-empty", |list| !list.is_empty())
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_len_matches_iter_count(list in small_list()) {
        prop_assert_eq!(list.len(), list.iter().count());
    }

    #[test]
    fn prop_is_empty_matches_len_zero(list in small_list()) {
        prop_assert_eq!(list.is_empty(), list.len() == 0);
    }

    #[test]
    fn prop_prepend_puts_element_at_head(list in small_list(), element: i32) {
        let new_list = list.prepend(element);
        prop_assert_eq!(new_list.len(), list.len() + 1);
        prop_assert_eq!(new_list.head().ok(), Some(&element));
        prop_assert!(PersistentList::ptr_eq(&new_list.tail().unwrap(), &list));
    }

    #[test]
    fn prop_tail_decreases_len_by_one(list in non_empty_list()) {
        prop_assert_eq!(list.tail().unwrap().len(), list.len() - 1);
    }

    #[test]
    fn prop_of_preserves_order(vector in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = PersistentList::of(vector.clone());
        prop_assert_eq!(list.to_vec(), vector);
    }

    #[test]
    fn prop_reverse_is_involutive(list in small_list()) {
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    // =========================================================================
    // Slicing
    // =========================================================================

    #[test]
    fn prop_take_and_drop_partition_the_list(list in small_list(), count in 0usize..30) {
        prop_assert_eq!(list.take(count).len() + list.drop_first(count).len(), list.len());
        prop_assert_eq!(list.take(count).append(&list.drop_first(count)), list);
    }

    #[test]
    fn prop_take_right_and_drop_right_partition_the_list(list in small_list(), count in 0usize..30) {
        prop_assert_eq!(list.drop_right(count).append(&list.take_right(count)), list);
    }

    #[test]
    fn prop_span_matches_take_while_and_drop_while(list in small_list(), pivot: i32) {
        let (prefix, suffix) = list.span(|&n| n < pivot);
        prop_assert_eq!(&prefix, &list.take_while(|&n| n < pivot));
        prop_assert_eq!(&suffix, &list.drop_while(|&n| n < pivot));
        prop_assert_eq!(prefix.append(&suffix), list);
    }

    #[test]
    fn prop_filter_keeps_only_matching(list in small_list()) {
        let even = list.filter(|n| n % 2 == 0);
        prop_assert!(even.for_all(|n| n % 2 == 0));
        prop_assert_eq!(even.len() + list.filter(|n| n % 2 != 0).len(), list.len());
    }

    #[test]
    fn prop_distinct_has_no_duplicates(list in persistent_list_strategy(30).prop_map(|list| list.map(|n| n % 5))) {
        let distinct = list.distinct();
        prop_assert_eq!(distinct.len(), distinct.to_hash_set().len());
        prop_assert!(list.contains_all(&distinct));
        prop_assert!(distinct.contains_all(&list));
    }

    // =========================================================================
    // Windowing
    // =========================================================================

    #[test]
    fn prop_grouped_concatenates_back(list in small_list(), size in 1usize..8) {
        let groups = list.grouped(size).unwrap();
        prop_assert_eq!(groups.flatten().unwrap(), list.clone());
        prop_assert!(groups.init().map(|full| full.for_all(|group| group.len() == size)).unwrap_or(true));
    }

    #[test]
    fn prop_sliding_with_step_window_count(list in small_list(), size in 1usize..8, step in 1usize..8) {
        let windows = list.sliding_with_step(size, step).unwrap();
        prop_assert_eq!(windows.len(), list.len().div_ceil(step));
        prop_assert!(windows.for_all(|window| !window.is_empty() && window.len() <= size));
    }

    #[test]
    fn prop_sliding_full_window_count(list in small_list(), size in 1usize..8) {
        let windows = list.sliding(size).unwrap();
        let full = windows.filter(|window| window.len() == size);
        prop_assert_eq!(full.len(), (list.len() + 1).saturating_sub(size));
    }

    #[test]
    fn prop_sliding_windows_start_at_each_element(list in small_list(), size in 1usize..8) {
        let heads = list.sliding(size).unwrap().map(|window| *window.head().unwrap());
        prop_assert_eq!(heads, list);
    }

    // =========================================================================
    // Zipping
    // =========================================================================

    #[test]
    fn prop_zip_length_is_minimum(left in small_list(), right in small_list()) {
        prop_assert_eq!(left.zip(&right).len(), left.len().min(right.len()));
    }

    #[test]
    fn prop_zip_all_length_is_maximum(left in small_list(), right in small_list()) {
        prop_assert_eq!(left.zip_all(&right, 0, 0).len(), left.len().max(right.len()));
    }

    #[test]
    fn prop_unzip_inverts_zip(left in small_list(), right in small_list()) {
        let length = left.len().min(right.len());
        let (first, second) = left.zip(&right).unzip(|pair| *pair);
        prop_assert_eq!(first, left.take(length));
        prop_assert_eq!(second, right.take(length));
    }

    #[test]
    fn prop_zip_with_index_counts_from_zero(list in small_list()) {
        let indices = list.zip_with_index().map(|&(_, index)| index);
        prop_assert_eq!(indices.to_vec(), (0..list.len()).collect::<Vec<_>>());
    }

    // =========================================================================
    // Folding
    // =========================================================================

    #[test]
    fn prop_sum_wraps_like_the_element_type(list in small_list()) {
        let expected = list.iter().fold(0i32, |total, n| total.wrapping_add(*n));
        prop_assert_eq!(list.sum().unwrap_or(0), expected);
    }

    #[test]
    fn prop_fold_map_sum_matches_iterator_sum(list in small_list()) {
        let Sum(total) = list.fold_map(|&n| Sum(i64::from(n)));
        prop_assert_eq!(total, list.iter().map(|&n| i64::from(n)).sum::<i64>());
    }

    #[test]
    fn prop_fold_left_and_fold_right_agree_on_associative_operation(list in small_list()) {
        let left = list.fold_left(0i64, |total, &n| total + i64::from(n));
        let right = list.fold_right(0i64, |&n, total| i64::from(n) + total);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_reduce_matches_fold_on_non_empty(list in non_empty_list()) {
        let reduced = list.reduce(|a, b| a.wrapping_add(*b)).unwrap();
        let folded = list.tail().unwrap().fold(*list.head().unwrap(), |a, b| a.wrapping_add(*b));
        prop_assert_eq!(reduced, folded);
    }

    // =========================================================================
    // Monoid Laws
    // =========================================================================

    #[test]
    fn prop_combine_is_associative(a in small_list(), b in small_list(), c in small_list()) {
        prop_assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[test]
    fn prop_monoid_identity(list in small_list()) {
        let empty = <PersistentList<i32> as Monoid>::empty();
        prop_assert_eq!(empty.clone().combine(list.clone()), list.clone());
        prop_assert_eq!(list.clone().combine(empty), list);
    }
}
