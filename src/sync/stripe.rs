//! A single lock stripe: a bounded slot array behind its own reader/writer lock.
//!
//! # Memory Layout
//!
//! ```text
//! Stripe (aligned to 64 bytes)
//! ├─ lock: RwLock<StripeSlots<T>>
//! │   ├─ slots: Vec<Option<T>>   ← allocated cells, len <= partition
//! │   └─ active: usize           ← occupied prefix length
//! └─ (metrics counters)           ← with the `metrics` feature
//! ```
//!
//! Occupied cells always form a contiguous prefix `slots[..active]`; every
//! slot operation is bounds-checked against `active`, not the allocation.
//!
//! Each stripe is aligned to its own cache line so that threads hammering
//! neighbouring stripes do not invalidate each other's lock words.

use crate::sort::{self, SortPath};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::cmp::Ordering;

#[cfg(feature = "metrics")]
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Slot storage guarded by a stripe lock.
#[derive(Debug)]
pub(crate) struct StripeSlots<T> {
    slots: Vec<Option<T>>,
    active: usize,
}

impl<T> StripeSlots<T> {
    fn with_slots(count: usize) -> Self {
        let mut slots = Vec::with_capacity(count);
        slots.resize_with(count, || None);
        Self { slots, active: 0 }
    }

    /// Number of occupied cells.
    #[inline]
    pub(crate) fn active(&self) -> usize {
        self.active
    }

    /// Number of allocated cells.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn has_room(&self) -> bool {
        self.active < self.slots.len()
    }

    pub(crate) fn get(&self, offset: usize) -> Option<&T> {
        if offset < self.active {
            self.slots[offset].as_ref()
        } else {
            None
        }
    }

    /// Replace the element at `offset`, returning the old one.
    ///
    /// Hands `item` back when `offset` is past the occupied prefix.
    pub(crate) fn replace(&mut self, offset: usize, item: T) -> Result<T, T> {
        if offset >= self.active {
            return Err(item);
        }
        let cell = &mut self.slots[offset];
        match cell.take() {
            Some(old) => {
                *cell = Some(item);
                Ok(old)
            }
            None => Err(item),
        }
    }

    /// Append at the end of the occupied prefix. Hands `item` back when full.
    pub(crate) fn push(&mut self, item: T) -> Result<(), T> {
        if !self.has_room() {
            return Err(item);
        }
        self.slots[self.active] = Some(item);
        self.active += 1;
        Ok(())
    }

    /// Insert at `offset`, shifting `[offset, active)` right by one.
    pub(crate) fn insert(&mut self, offset: usize, item: T) -> Result<(), T> {
        if !self.has_room() || offset > self.active {
            return Err(item);
        }
        self.slots[offset..=self.active].rotate_right(1);
        self.slots[offset] = Some(item);
        self.active += 1;
        Ok(())
    }

    /// Remove at `offset`, shifting `(offset, active)` left by one.
    pub(crate) fn remove(&mut self, offset: usize) -> Option<T> {
        if offset >= self.active {
            return None;
        }
        let item = self.slots[offset].take();
        self.slots[offset..self.active].rotate_left(1);
        self.active -= 1;
        item
    }

    /// Move items into the free cells until the stripe is full or `items`
    /// runs dry. Returns the number stored.
    pub(crate) fn fill_from<I>(&mut self, items: &mut I) -> usize
    where
        I: Iterator<Item = T>,
    {
        let start = self.active;
        while self.active < self.slots.len() {
            match items.next() {
                Some(item) => {
                    self.slots[self.active] = Some(item);
                    self.active += 1;
                }
                None => break,
            }
        }
        self.active - start
    }

    /// Remove the last occupied element.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.active == 0 {
            return None;
        }
        self.active -= 1;
        self.slots[self.active].take()
    }

    /// Occupied prefix.
    #[inline]
    pub(crate) fn occupied(&self) -> &[Option<T>] {
        &self.slots[..self.active]
    }

    /// Occupied prefix, mutably. Cells must stay `Some`.
    #[inline]
    pub(crate) fn occupied_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots[..self.active]
    }

    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.occupied().iter().flatten()
    }

    /// Move every occupied element out, leaving the stripe empty.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        let active = std::mem::replace(&mut self.active, 0);
        self.slots[..active].iter_mut().filter_map(Option::take)
    }

    /// Empty every occupied cell.
    pub(crate) fn clear(&mut self) {
        for cell in &mut self.slots[..self.active] {
            *cell = None;
        }
        self.active = 0;
    }

    /// Pack occupied cells to the front and recount the prefix.
    ///
    /// Returns the number of occupied cells.
    pub(crate) fn compress(&mut self) -> usize {
        let mut write = 0;
        for read in 0..self.slots.len() {
            if self.slots[read].is_some() {
                self.slots.swap(write, read);
                write += 1;
            }
        }
        self.active = write;
        write
    }

    pub(crate) fn reverse(&mut self) {
        self.slots[..self.active].reverse();
    }

    /// Sort the occupied prefix with the adaptive stripe-local sort.
    pub(crate) fn sort_by<F>(&mut self, compare: &mut F) -> SortPath
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let active = self.active;
        sort::sort_run(&mut self.slots[..active], &mut |a: &Option<T>, b: &Option<T>| {
            sort::slot_order(a, b, &mut *compare)
        })
    }

    /// Allocate `additional` more cells.
    pub(crate) fn extend_slots(&mut self, additional: usize) {
        let len = self.slots.len() + additional;
        self.slots.resize_with(len, || None);
    }

    /// Release free cells down to `capacity` (never below `active`).
    ///
    /// Returns the number of cells released.
    pub(crate) fn truncate_slots(&mut self, capacity: usize) -> usize {
        let capacity = capacity.max(self.active);
        let released = self.slots.len().saturating_sub(capacity);
        self.slots.truncate(capacity);
        self.slots.shrink_to_fit();
        released
    }
}

impl<T: PartialEq> StripeSlots<T> {
    pub(crate) fn position(&self, item: &T) -> Option<usize> {
        self.iter().position(|x| x == item)
    }

    pub(crate) fn rposition(&self, item: &T) -> Option<usize> {
        self.occupied()
            .iter()
            .rposition(|cell| cell.as_ref() == Some(item))
    }
}

/// One lock stripe.
#[repr(align(64))]
pub(crate) struct Stripe<T> {
    lock: RwLock<StripeSlots<T>>,

    /// Total read lock acquisitions (requires `metrics` feature).
    #[cfg(feature = "metrics")]
    read_count: AtomicU64,

    /// Total write lock acquisitions (requires `metrics` feature).
    #[cfg(feature = "metrics")]
    write_count: AtomicU64,

    /// Nanoseconds spent waiting for this lock (requires `metrics` feature).
    #[cfg(feature = "metrics")]
    contention_ns: AtomicU64,
}

impl<T> Stripe<T> {
    /// Create a stripe with `slots` empty cells.
    pub(crate) fn new(slots: usize) -> Self {
        Self {
            lock: RwLock::new(StripeSlots::with_slots(slots)),
            #[cfg(feature = "metrics")]
            read_count: AtomicU64::new(0),
            #[cfg(feature = "metrics")]
            write_count: AtomicU64::new(0),
            #[cfg(feature = "metrics")]
            contention_ns: AtomicU64::new(0),
        }
    }

    /// Acquire the stripe's read lock.
    #[inline]
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StripeSlots<T>> {
        #[cfg(feature = "metrics")]
        {
            let start = std::time::Instant::now();
            let guard = self.lock.read();
            self.read_count.fetch_add(1, AtomicOrdering::Relaxed);
            self.contention_ns
                .fetch_add(start.elapsed().as_nanos() as u64, AtomicOrdering::Relaxed);
            guard
        }
        #[cfg(not(feature = "metrics"))]
        {
            self.lock.read()
        }
    }

    /// Acquire the stripe's write lock.
    #[inline]
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StripeSlots<T>> {
        #[cfg(feature = "metrics")]
        {
            let start = std::time::Instant::now();
            let guard = self.lock.write();
            self.write_count.fetch_add(1, AtomicOrdering::Relaxed);
            self.contention_ns
                .fetch_add(start.elapsed().as_nanos() as u64, AtomicOrdering::Relaxed);
            guard
        }
        #[cfg(not(feature = "metrics"))]
        {
            self.lock.write()
        }
    }

    /// Exclusive access without locking, for callers that own the layout.
    #[inline]
    pub(crate) fn get_mut(&mut self) -> &mut StripeSlots<T> {
        self.lock.get_mut()
    }

    /// Pack occupied cells to the front under the write lock.
    pub(crate) fn compress(&self) -> usize {
        self.write().compress()
    }

    #[cfg(feature = "metrics")]
    pub(crate) fn stats(&self, stripe_idx: usize) -> StripeStats {
        StripeStats {
            stripe_idx,
            read_ops: self.read_count.load(AtomicOrdering::Relaxed),
            write_ops: self.write_count.load(AtomicOrdering::Relaxed),
            contention_ns: self.contention_ns.load(AtomicOrdering::Relaxed),
        }
    }
}

/// Per-stripe lock statistics (requires `metrics` feature).
///
/// High contention on the tail stripes is expected under append-heavy load;
/// high contention in the middle points at insert/remove cascades.
#[cfg(feature = "metrics")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripeStats {
    /// Stripe index in chain order.
    pub stripe_idx: usize,
    /// Read lock acquisitions.
    pub read_ops: u64,
    /// Write lock acquisitions.
    pub write_ops: u64,
    /// Nanoseconds spent acquiring this stripe's lock.
    pub contention_ns: u64,
}
