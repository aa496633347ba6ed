//! Bottom-up merging of sorted runs.
//!
//! Stripe-local sorting leaves one sorted run per stripe. Merging adjacent
//! runs pairwise, level by level, yields the globally sorted sequence in
//! `O(n log k)` comparisons for `k` runs. Merging is stable: on ties the
//! element from the earlier run comes first.

use std::cmp::Ordering;

/// Merge two sorted runs into one.
pub fn merge_two<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }
    out
}

/// Merge any number of sorted runs into one sorted vector.
pub fn merge_runs<T, F>(runs: Vec<Vec<T>>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut level: Vec<Vec<T>> = runs.into_iter().filter(|r| !r.is_empty()).collect();
    if level.is_empty() {
        return Vec::new();
    }

    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len() / 2 + 1);
        let mut runs = level.into_iter();
        while let Some(left) = runs.next() {
            match runs.next() {
                Some(right) => next.push(merge_two(left, right, compare)),
                None => next.push(left),
            }
        }
        level = next;
    }

    level.pop().unwrap_or_default()
}
