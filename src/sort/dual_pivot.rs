//! Dual-pivot quicksort with an insertion-sort cutoff.
//!
//! Three-way partition around pivots `p <= q` taken from the first and last
//! elements of the run:
//!
//! ```text
//! [ < p | p | p <= x <= q | q | > q ]
//! ```
//!
//! Recurses into the three regions; regions of fewer than
//! [`INSERTION_SORT_THRESHOLD`] elements are finished by insertion sort.
//! When `p == q` the middle region holds only elements equal to the pivots
//! and is not revisited.

use std::cmp::Ordering;

/// Runs shorter than this are insertion sorted.
pub const INSERTION_SORT_THRESHOLD: usize = 17;

/// Stable insertion sort.
pub fn insertion_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[j]) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sort `v` with dual-pivot quicksort.
pub fn dual_pivot_quicksort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < INSERTION_SORT_THRESHOLD {
        insertion_sort(v, compare);
        return;
    }

    let hi = len - 1;
    if compare(&v[0], &v[hi]) == Ordering::Greater {
        v.swap(0, hi);
    }

    // v[0] is p, v[hi] is q. Invariants while scanning:
    //   v[1..lt]      < p
    //   v[lt..i]      in [p, q]
    //   v[gt + 1..hi] > q
    let mut lt = 1;
    let mut gt = hi - 1;
    let mut i = 1;
    while i <= gt {
        if compare(&v[i], &v[0]) == Ordering::Less {
            v.swap(i, lt);
            lt += 1;
            i += 1;
        } else if compare(&v[i], &v[hi]) == Ordering::Greater {
            v.swap(i, gt);
            gt -= 1;
        } else {
            i += 1;
        }
    }

    let left = lt - 1;
    let right = gt + 1;
    v.swap(0, left);
    v.swap(hi, right);

    let pivots_equal = compare(&v[left], &v[right]) == Ordering::Equal;

    let (head, rest) = v.split_at_mut(left);
    dual_pivot_quicksort(head, compare);

    // rest[0] is p, rest[right - left] is q.
    let (middle, tail) = rest.split_at_mut(right - left);
    if !pivots_equal {
        dual_pivot_quicksort(&mut middle[1..], compare);
    }
    dual_pivot_quicksort(&mut tail[1..], compare);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted<T: Ord>(v: &[T]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_insertion_sort() {
        let mut v = vec![5, 2, 9, 1, 5, 6];
        insertion_sort(&mut v, &mut i32::cmp);
        assert_eq!(v, vec![1, 2, 5, 5, 6, 9]);
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        let mut v = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort(&mut v, &mut |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(v, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_dual_pivot_small_and_empty() {
        let mut empty: Vec<i32> = Vec::new();
        dual_pivot_quicksort(&mut empty, &mut i32::cmp);
        assert!(empty.is_empty());

        let mut one = vec![42];
        dual_pivot_quicksort(&mut one, &mut i32::cmp);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_dual_pivot_large_pseudo_random() {
        let mut state = 0x2545_f491_4f6c_dd1du64;
        let mut v: Vec<u64> = (0..5000)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                state % 1000
            })
            .collect();
        let mut expected = v.clone();
        expected.sort_unstable();

        dual_pivot_quicksort(&mut v, &mut u64::cmp);
        assert_eq!(v, expected);
    }

    #[test]
    fn test_dual_pivot_all_equal() {
        let mut v = vec![7u8; 300];
        dual_pivot_quicksort(&mut v, &mut u8::cmp);
        assert!(v.iter().all(|&x| x == 7));
    }

    #[test]
    fn test_dual_pivot_two_values() {
        let mut v: Vec<u8> = (0..400).map(|i| (i % 2) as u8).collect();
        dual_pivot_quicksort(&mut v, &mut u8::cmp);
        assert!(is_sorted(&v));
        assert_eq!(v.iter().filter(|&&x| x == 0).count(), 200);
    }

    #[test]
    fn test_dual_pivot_descending_comparator() {
        let mut v: Vec<i32> = (0..100).map(|i| (i * 37) % 101).collect();
        dual_pivot_quicksort(&mut v, &mut |a: &i32, b: &i32| b.cmp(a));
        assert!(v.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_dual_pivot_organ_pipe() {
        let mut v: Vec<i32> = (0..200).chain((0..200).rev()).collect();
        dual_pivot_quicksort(&mut v, &mut i32::cmp);
        assert!(is_sorted(&v));
        assert_eq!(v.len(), 400);
    }
}
