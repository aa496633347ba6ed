//! Stripe-local sorting.
//!
//! - [`adaptive`]: pre-scan and strategy selection for one run
//! - [`dual_pivot`]: dual-pivot quicksort and insertion sort
//! - [`merge`]: bottom-up merge of sorted runs
//!
//! Stripes store `Option<T>` cells; [`slot_order`] lifts an element
//! comparator onto cells so the algorithms never need to unwrap. Occupied
//! cells order before empty ones.

pub mod adaptive;
pub mod dual_pivot;
pub mod merge;

pub use adaptive::{classify, sort_run, SortPath};
pub use merge::merge_runs;

use std::cmp::Ordering;

/// Compare two cells with an element comparator.
#[inline]
pub fn slot_order<T, F>(a: &Option<T>, b: &Option<T>, compare: &mut F) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_puts_empty_last() {
        let mut cells = vec![None, Some(3), Some(1), None, Some(2)];
        cells.sort_by(|a, b| slot_order(a, b, &mut i32::cmp));
        assert_eq!(cells, vec![Some(1), Some(2), Some(3), None, None]);
    }
}
