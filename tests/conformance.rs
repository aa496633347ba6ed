//! Iterator conformance suite
//!
//! Every iterator a list hands out must pass the same checks: yield the
//! committed elements in index order, agree on empty lists and on stripe
//! boundaries, and stay exhausted once exhausted.

use stripelist::{Partition, StripedList};

const PARTITION: usize = 4;

/// Lists covering the layouts that matter: empty, one partial stripe, one
/// exactly full stripe, several stripes with a partial tail, and contents
/// that arrived through the write buffer.
fn fixtures() -> Vec<(&'static str, StripedList<i32>)> {
    let make = |items: &[i32]| {
        let list = StripedList::with_partition(8, Partition::Custom(PARTITION)).unwrap();
        for &item in items {
            list.add(item).unwrap();
        }
        list
    };

    let buffered = make(&[1, 2]);
    for item in 3..=9 {
        buffered.offer(item).unwrap();
    }

    vec![
        ("empty", make(&[])),
        ("partial stripe", make(&[7, 8])),
        ("full stripe", make(&[1, 2, 3, 4])),
        ("many stripes", make(&(0..23).collect::<Vec<_>>())),
        ("buffered", buffered),
    ]
}

/// Drain one iterator protocol, returning what it yielded and asserting it
/// stays exhausted afterwards.
trait Protocol {
    const NAME: &'static str;
    fn drain(list: &StripedList<i32>) -> Vec<i32>;
}

struct Snapshot;

impl Protocol for Snapshot {
    const NAME: &'static str = "snapshot";

    fn drain(list: &StripedList<i32>) -> Vec<i32> {
        let mut iter = list.iter();
        let (lower, upper) = iter.size_hint();
        let items: Vec<i32> = iter.by_ref().collect();
        assert_eq!(lower, items.len());
        assert_eq!(upper, Some(items.len()));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        items
    }
}

struct Live;

impl Protocol for Live {
    const NAME: &'static str = "concurrent";

    fn drain(list: &StripedList<i32>) -> Vec<i32> {
        let mut iter = list.concurrent_iter();
        let mut items = Vec::new();
        while iter.has_next() {
            items.push(iter.try_next().unwrap().unwrap());
        }
        assert_eq!(iter.next_index(), items.len());
        assert_eq!(iter.try_next().unwrap(), None);
        assert_eq!(iter.next(), None);
        items
    }
}

fn check<P: Protocol>() {
    for (layout, list) in fixtures() {
        let expected = list.to_vec();
        assert_eq!(P::drain(&list), expected, "{} iterator on {layout}", P::NAME);
        assert_eq!(list.len(), expected.len(), "{} iterator on {layout}", P::NAME);
    }
}

#[test]
fn test_snapshot_iterator_conforms() {
    check::<Snapshot>();
}

#[test]
fn test_concurrent_iterator_conforms() {
    check::<Live>();
}

#[test]
fn test_both_protocols_agree() {
    for (layout, list) in fixtures() {
        assert_eq!(Snapshot::drain(&list), Live::drain(&list), "{layout}");
    }
}

#[test]
fn test_snapshot_runs_backwards() {
    for (layout, list) in fixtures() {
        let mut expected = list.to_vec();
        expected.reverse();
        assert_eq!(list.iter().rev().collect::<Vec<_>>(), expected, "{layout}");
    }
}

#[test]
fn test_concurrent_runs_backwards() {
    for (layout, list) in fixtures() {
        let mut iter = list.concurrent_iter();
        while iter.try_next().unwrap().is_some() {}

        let mut back = Vec::new();
        while let Some(item) = iter.try_previous().unwrap() {
            back.push(item);
        }
        back.reverse();
        assert_eq!(back, list.to_vec(), "{layout}");
        assert_eq!(iter.previous_index(), None);
    }
}

#[test]
fn test_for_loop_uses_snapshot() {
    let list = StripedList::from_vec(vec![1, 2, 3]);
    let mut total = 0;
    for item in &list {
        total += item;
        if item == 1 {
            list.add(100).unwrap();
        }
    }
    assert_eq!(total, 6);
    assert_eq!(list.len(), 4);
}
