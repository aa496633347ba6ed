//! Adaptive run sorting.
//!
//! A single linear pre-scan counts adjacent ascents and descents and picks
//! the cheapest correct strategy:
//!
//! | Input | Strategy |
//! |-------|----------|
//! | no descents | nothing to do |
//! | every adjacent pair strictly descending | reverse in place |
//! | ≤ 16 elements | insertion sort |
//! | descents ≤ 5% of the run | insertion sort |
//! | anything else | dual-pivot quicksort |

use super::dual_pivot::{dual_pivot_quicksort, insertion_sort};
use std::cmp::Ordering;

/// Runs of at most this many elements always use insertion sort.
pub const SMALL_RUN: usize = 16;

/// A run is nearly sorted when `descents * NEARLY_SORTED_DIVISOR <= len`.
pub const NEARLY_SORTED_DIVISOR: usize = 20;

/// Strategy chosen for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPath {
    /// Already in order.
    AlreadySorted,
    /// Strictly descending; reversed in place.
    Reversed,
    /// Short run; insertion sorted.
    Small,
    /// Few out-of-order neighbours; insertion sorted.
    NearlySorted,
    /// General case.
    DualPivot,
}

/// Pick the strategy for `v` without modifying it.
pub fn classify<T, F>(v: &[T], compare: &mut F) -> SortPath
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return SortPath::AlreadySorted;
    }

    let mut descents = 0usize;
    let mut strictly_descending = true;
    for pair in v.windows(2) {
        match compare(&pair[0], &pair[1]) {
            Ordering::Greater => descents += 1,
            _ => strictly_descending = false,
        }
    }

    if descents == 0 {
        SortPath::AlreadySorted
    } else if strictly_descending {
        SortPath::Reversed
    } else if len <= SMALL_RUN {
        SortPath::Small
    } else if descents * NEARLY_SORTED_DIVISOR <= len {
        SortPath::NearlySorted
    } else {
        SortPath::DualPivot
    }
}

/// Sort `v` in place, returning the strategy that was used.
pub fn sort_run<T, F>(v: &mut [T], compare: &mut F) -> SortPath
where
    F: FnMut(&T, &T) -> Ordering,
{
    let path = classify(v, compare);
    match path {
        SortPath::AlreadySorted => {}
        SortPath::Reversed => v.reverse(),
        SortPath::Small | SortPath::NearlySorted => insertion_sort(v, compare),
        SortPath::DualPivot => dual_pivot_quicksort(v, compare),
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(v: &[i32]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_already_sorted_is_untouched() {
        let mut v: Vec<i32> = (0..100).collect();
        assert_eq!(sort_run(&mut v, &mut i32::cmp), SortPath::AlreadySorted);
        assert!(sorted(&v));
    }

    #[test]
    fn test_reverse_sorted_is_reversed() {
        let mut v: Vec<i32> = (0..100).rev().collect();
        assert_eq!(sort_run(&mut v, &mut i32::cmp), SortPath::Reversed);
        assert_eq!(v, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_descending_with_ties_is_not_reversed() {
        // Reversing would be correct, but ties break strictness.
        let mut v = vec![5, 4, 4, 3, 2, 1];
        assert_eq!(sort_run(&mut v, &mut i32::cmp), SortPath::Small);
        assert_eq!(v, vec![1, 2, 3, 4, 4, 5]);
    }

    #[test]
    fn test_small_run() {
        let mut v = vec![3, 1, 2, 9, 0];
        assert_eq!(sort_run(&mut v, &mut i32::cmp), SortPath::Small);
        assert_eq!(v, vec![0, 1, 2, 3, 9]);
    }

    #[test]
    fn test_nearly_sorted() {
        let mut v: Vec<i32> = (0..200).collect();
        v.swap(10, 11);
        v.swap(150, 151);
        assert_eq!(classify(&v, &mut i32::cmp), SortPath::NearlySorted);
        assert_eq!(sort_run(&mut v, &mut i32::cmp), SortPath::NearlySorted);
        assert!(sorted(&v));
    }

    #[test]
    fn test_general_case_uses_dual_pivot() {
        let mut v: Vec<i32> = (0..200).map(|i| (i * 7919) % 211).collect();
        assert_eq!(sort_run(&mut v, &mut i32::cmp), SortPath::DualPivot);
        assert!(sorted(&v));
    }

    #[test]
    fn test_trivial_runs() {
        let mut empty: Vec<i32> = vec![];
        assert_eq!(sort_run(&mut empty, &mut i32::cmp), SortPath::AlreadySorted);
        let mut one = vec![1];
        assert_eq!(sort_run(&mut one, &mut i32::cmp), SortPath::AlreadySorted);
    }

    #[test]
    fn test_custom_comparator() {
        let mut v: Vec<i32> = (0..50).collect();
        let path = sort_run(&mut v, &mut |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(path, SortPath::Reversed);
        assert_eq!(v[0], 49);
    }
}
