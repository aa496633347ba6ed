//! Model-based property tests against `Vec`

use proptest::prelude::*;
use stripelist::{Partition, StripedList};

#[derive(Debug, Clone)]
enum Op {
    Add(i16),
    Offer(i16),
    Insert(usize, i16),
    RemoveAt(usize),
    Set(usize, i16),
    RemoveValue(i16),
    Reverse,
    Sort,
    Flush,
    Shrink,
    Grow,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i16>().prop_map(Op::Add),
        2 => any::<i16>().prop_map(Op::Offer),
        3 => (any::<usize>(), any::<i16>()).prop_map(|(i, v)| Op::Insert(i, v)),
        3 => any::<usize>().prop_map(Op::RemoveAt),
        1 => (any::<usize>(), any::<i16>()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => (-4i16..4).prop_map(Op::RemoveValue),
        1 => Just(Op::Reverse),
        1 => Just(Op::Sort),
        1 => Just(Op::Flush),
        1 => Just(Op::Shrink),
        1 => Just(Op::Grow),
    ]
}

/// Apply `ops` to both, returning the model with buffered offers committed.
fn run(list: &StripedList<i16>, ops: &[Op]) -> Vec<i16> {
    let mut model: Vec<i16> = Vec::new();
    let mut staged: Vec<i16> = Vec::new();
    for op in ops {
        // Everything but `offer` runs against committed contents.
        if !matches!(op, Op::Offer(_)) {
            model.append(&mut staged);
            list.flush().unwrap();
        }
        match *op {
            Op::Add(v) => {
                list.add(v).unwrap();
                model.push(v);
            }
            Op::Offer(v) => {
                list.offer(v).unwrap();
                staged.push(v);
                // A full buffer commits its older items before staging.
                let committed = staged.len() - list.buffered_len();
                model.extend(staged.drain(..committed));
                assert_eq!(list.len(), model.len());
            }
            Op::Insert(i, v) => {
                let index = i % (model.len() + 1);
                list.insert(index, v).unwrap();
                model.insert(index, v);
            }
            Op::RemoveAt(i) => {
                if model.is_empty() {
                    assert!(list.remove_at(0).is_err());
                } else {
                    let index = i % model.len();
                    assert_eq!(list.remove_at(index).unwrap(), model.remove(index));
                }
            }
            Op::Set(i, v) => {
                if !model.is_empty() {
                    let index = i % model.len();
                    assert_eq!(list.set(index, v).unwrap(), model[index]);
                    model[index] = v;
                }
            }
            Op::RemoveValue(v) => {
                let expected = model.iter().position(|&x| x == v);
                assert_eq!(list.remove(&v), expected.is_some());
                if let Some(index) = expected {
                    model.remove(index);
                }
            }
            Op::Reverse => {
                list.reverse();
                model.reverse();
            }
            Op::Sort => {
                list.sort();
                model.sort();
            }
            Op::Flush => {}
            Op::Shrink => {
                list.shrink();
            }
            Op::Grow => {
                list.grow().unwrap();
            }
        }
    }
    model.append(&mut staged);
    model
}

proptest! {
    #[test]
    fn behaves_like_vec(partition in 1usize..9, ops in prop::collection::vec(op(), 0..120)) {
        let list = StripedList::with_partition(4, Partition::Custom(partition)).unwrap();
        let model = run(&list, &ops);

        prop_assert_eq!(list.to_vec(), model.clone());
        prop_assert_eq!(list.len(), model.len());
        prop_assert!(list.max_capacity() >= list.len());
        prop_assert_eq!(list.stripe_occupancy().iter().sum::<usize>(), list.len());
    }

    #[test]
    fn occupancy_is_a_full_prefix(partition in 1usize..9, len in 0usize..100) {
        let list = StripedList::with_partition(4, Partition::Custom(partition)).unwrap();
        for i in 0..len {
            list.add(i).unwrap();
        }
        let occupancy = list.stripe_occupancy();
        for (s, &n) in occupancy.iter().enumerate() {
            let expected = len.saturating_sub(s * partition).min(partition);
            prop_assert_eq!(n, expected, "stripe {}", s);
        }
    }

    #[test]
    fn sort_matches_std(items in prop::collection::vec(any::<i32>(), 0..600), partition in 1usize..64) {
        let list = StripedList::with_partition(16, Partition::Custom(partition)).unwrap();
        if !items.is_empty() {
            list.extend_from_slice(&items).unwrap();
        }
        list.sort();

        let mut expected = items;
        expected.sort();
        prop_assert_eq!(list.to_vec(), expected);
    }

    #[test]
    fn stripe_sort_orders_each_stripe(items in prop::collection::vec(any::<i32>(), 0..200), partition in 1usize..32) {
        let list = StripedList::with_partition(16, Partition::Custom(partition)).unwrap();
        if !items.is_empty() {
            list.extend_from_slice(&items).unwrap();
        }
        list.sort_stripes_by(|a, b| b.cmp(a));

        let sorted = list.to_vec();
        for (chunk, original) in sorted.chunks(partition).zip(items.chunks(partition)) {
            let mut expected = original.to_vec();
            expected.sort_by(|a, b| b.cmp(a));
            prop_assert_eq!(chunk, &expected[..]);
        }
    }

    #[test]
    fn round_trip(items in prop::collection::vec(any::<u8>(), 0..300)) {
        let list = StripedList::from_vec(items.clone());
        let rebuilt = StripedList::from_vec(list.to_vec());
        prop_assert_eq!(rebuilt.to_vec(), items);
    }

    #[test]
    fn range_extraction(items in prop::collection::vec(any::<u8>(), 0..100), a in 0usize..120, b in 0usize..120) {
        let list = StripedList::with_partition(8, Partition::Custom(3)).unwrap();
        if !items.is_empty() {
            list.extend_from_slice(&items).unwrap();
        }
        let (start, end) = (a.min(b), a.max(b));

        let result = list.to_vec_range(start, end);
        if end <= items.len() {
            prop_assert_eq!(result.unwrap(), items[start..end].to_vec());
        } else {
            prop_assert!(result.is_err());
        }
    }
}
