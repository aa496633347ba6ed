//! Lock-striped segmented list.
//!
//! # Design
//!
//! Storage is split into stripes of at most `partition` slots, each behind its
//! own reader/writer lock. A global index maps to a stripe by division:
//!
//! ```text
//! stripe = index / partition
//! offset = index % partition
//! ```
//!
//! This holds because every stripe before the one holding the end of the
//! sequence is full. All structural operations preserve that layout: an
//! insertion in the middle donates the last element of each later stripe to
//! the head of its successor, and a removal pulls the head of each later
//! stripe back into its predecessor.
//!
//! ## Locking Protocol
//!
//! Three lock levels, always acquired in this order:
//!
//! 1. the write buffer mutex
//! 2. the layout lock (`RwLock<Vec<Stripe<T>>>`)
//! 3. stripe locks, in ascending stripe index
//!
//! | Operation | Layout | Stripes |
//! |-----------|--------|---------|
//! | `get()` | read | one, read |
//! | `set()` | read | one, write |
//! | `add()` | read | end stripe, write |
//! | `insert()` / `remove_at()` | read | owning..=end, write |
//! | `to_vec_range()` | read | covered range, read |
//! | `reverse()` / `sort()` / `clear()` | read | all, write |
//! | growth / shrink | write | none (exclusive via layout) |
//!
//! Every change to the element count holds the write lock of the *end
//! stripe*, `min(len / partition, stripes - 1)`. An operation reads the
//! length, locks the stripes it needs, then re-reads the length; if it moved,
//! the locks are dropped and the operation starts over. Once the length is
//! confirmed under the end stripe's lock, no other thread can change it.
//!
//! Growth and shrink are entered only after every stripe guard and the
//! shared layout guard have been released.
//!
//! ## Modification Count
//!
//! Incremented by every operation that moves or adds/removes elements:
//! `add`, `insert`, `remove*`, `clear`, `reverse`, `sort*`, `retain` and
//! bulk adds (including buffer flushes). Growth, shrink and `set` leave it
//! unchanged. [`ConcurrentIter`](crate::iter::ConcurrentIter) fences on it.
//!
//! # Examples
//!
//! ```
//! use stripelist::{Partition, StripedList};
//!
//! let list = StripedList::with_partition(16, Partition::Custom(4))?;
//! for i in 1..=6 {
//!     list.add(i)?;
//! }
//! list.insert(2, 99)?;
//! assert_eq!(list.to_vec(), vec![1, 2, 99, 3, 4, 5, 6]);
//! assert_eq!(list.stripe_occupancy()[..2], [4, 3]);
//! # Ok::<(), stripelist::StripeListError>(())
//! ```
//!
//! ## Concurrent Access
//!
//! ```
//! use stripelist::StripedList;
//! use std::sync::Arc;
//!
//! let list = Arc::new(StripedList::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let list = Arc::clone(&list);
//!         std::thread::spawn(move || {
//!             for i in 0..100 {
//!                 list.add(t * 100 + i).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(list.len(), 400);
//! ```

#![allow(clippy::module_name_repetitions)]

use crate::core::params::{self, ListConfig, Partition, DEFAULT_CAPACITY};
use crate::core::sequence::{Growable, SharedSequence, SortableSequence};
use crate::error::{Result, StripeListError};
use crate::iter::{ConcurrentIter, SnapshotIter};
use crate::sort::merge_runs;
use crate::sync::buffer::{BufferGuard, WriteBuffer};
use crate::sync::stripe::{Stripe, StripeSlots};
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::DerefMut;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering as AtomicOrdering};

#[cfg(feature = "metrics")]
use crate::sync::stripe::StripeStats;

/// Concurrent growable list with per-stripe locking.
///
/// All operations take `&self`; share the list across threads with `Arc`.
/// Elements are stored as given and cloned only when read out, so cheap
/// handles (`Arc<V>`, integers, small `Copy` values) are the intended
/// element types.
pub struct StripedList<T> {
    /// Stripes in chain order. Never empty.
    chain: RwLock<Vec<Stripe<T>>>,

    /// Maximum slots per stripe.
    partition: usize,

    /// Committed element count (excludes buffered appends).
    active_size: AtomicUsize,

    /// Total allocated slots across all stripes.
    max_capacity: AtomicUsize,

    /// Structural modification counter.
    mod_count: AtomicU64,

    /// Staged `offer`s.
    buffer: WriteBuffer<T>,

    config: ListConfig,
}

impl<T> StripedList<T> {
    /// Create an empty list with the default configuration.
    ///
    /// Capacity 16, partition [`Partition::Medium`].
    #[must_use]
    pub fn new() -> Self {
        Self::assemble(ListConfig::default(), Vec::new())
    }

    /// Create an empty list with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(ListConfig::with_capacity(capacity))
    }

    /// Create an empty list with an explicit partition size.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if `capacity` or the partition size is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use stripelist::{Partition, StripedList};
    ///
    /// let list = StripedList::<u32>::with_partition(4096, Partition::Small)?;
    /// assert_eq!(list.partition(), 512);
    /// assert_eq!(list.stripe_count(), 8);
    /// # Ok::<(), stripelist::StripeListError>(())
    /// ```
    pub fn with_partition(capacity: usize, partition: Partition) -> Result<Self> {
        Self::with_config(ListConfig {
            partition,
            ..ListConfig::with_capacity(capacity)
        })
    }

    /// Create an empty list from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if the configuration is inconsistent.
    pub fn with_config(config: ListConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, Vec::new()))
    }

    /// Create a list holding `items`, in order.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut config = ListConfig::with_capacity(items.len().max(DEFAULT_CAPACITY));
        config.min_capacity = DEFAULT_CAPACITY;
        Self::assemble(config, items)
    }

    /// Validated construction with seed contents.
    pub(crate) fn from_parts(config: ListConfig, items: Vec<T>) -> Result<Self> {
        config.validate()?;
        if items.len() > config.initial_capacity {
            return Err(StripeListError::capacity_exceeded(
                config.initial_capacity,
                items.len(),
            ));
        }
        Ok(Self::assemble(config, items))
    }

    /// Configuration that rebuilds this list at its current capacity.
    pub(crate) fn carried_config(&self, len: usize) -> ListConfig {
        let mut config = self.config;
        config.initial_capacity = self.max_capacity().max(len).max(1);
        config.min_capacity = config.min_capacity.min(config.initial_capacity);
        if let Some(limit) = config.capacity_limit {
            config.capacity_limit = Some(limit.max(config.initial_capacity));
        }
        config
    }

    /// Lay out stripes for the configured capacity and fill them in order.
    fn assemble(config: ListConfig, items: Vec<T>) -> Self {
        let partition = config.partition.size();
        let capacity = config.initial_capacity.max(items.len());
        let len = items.len();

        let mut chain: Vec<Stripe<T>> = params::stripe_layout(capacity, partition)
            .into_iter()
            .map(Stripe::new)
            .collect();
        let mut source = items.into_iter();
        for stripe in &mut chain {
            stripe.get_mut().fill_from(&mut source);
        }

        Self {
            chain: RwLock::new(chain),
            partition,
            active_size: AtomicUsize::new(len),
            max_capacity: AtomicUsize::new(capacity),
            mod_count: AtomicU64::new(0),
            buffer: WriteBuffer::new(partition),
            config,
        }
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Number of committed elements. Buffered `offer`s are not counted.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.active_size.load(AtomicOrdering::Acquire)
    }

    /// Whether the list holds no committed elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total allocated slots.
    #[inline]
    #[must_use]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity.load(AtomicOrdering::Acquire)
    }

    /// `len / max_capacity`.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        params::load_factor(self.len(), self.max_capacity())
    }

    /// Maximum elements per stripe.
    #[inline]
    #[must_use]
    pub fn partition(&self) -> usize {
        self.partition
    }

    /// Number of stripes in the chain.
    #[must_use]
    pub fn stripe_count(&self) -> usize {
        self.chain.read().len()
    }

    /// Occupied slot count of every stripe, in chain order.
    #[must_use]
    pub fn stripe_occupancy(&self) -> Vec<usize> {
        let chain = self.chain.read();
        let guards: Vec<_> = chain.iter().map(Stripe::read).collect();
        guards.iter().map(|g| g.active()).collect()
    }

    /// Current structural modification count.
    #[inline]
    #[must_use]
    pub fn modification_count(&self) -> u64 {
        self.mod_count.load(AtomicOrdering::Acquire)
    }

    /// Configuration the list was built with.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Number of staged, not yet committed, `offer`s.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Lock statistics for every stripe (requires `metrics` feature).
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn stripe_stats(&self) -> Vec<StripeStats> {
        self.chain
            .read()
            .iter()
            .enumerate()
            .map(|(idx, stripe)| stripe.stats(idx))
            .collect()
    }

    /// Indices of up to `top_n` stripes, most contended first (requires
    /// `metrics` feature).
    ///
    /// Under append-heavy load the tail stripes dominate.
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn most_contended_stripes(&self, top_n: usize) -> Vec<usize> {
        let mut stats = self.stripe_stats();
        stats.sort_by_key(|s| std::cmp::Reverse(s.contention_ns));
        stats
            .into_iter()
            .take(top_n)
            .map(|s| s.stripe_idx)
            .collect()
    }

    // ------------------------------------------------------------------
    // Single-element operations
    // ------------------------------------------------------------------

    /// Append `item` at the end.
    ///
    /// Any buffered `offer`s are committed first so that they keep their
    /// place ahead of `item`.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the list is full and the capacity limit
    /// forbids growth.
    pub fn add(&self, item: T) -> Result<()> {
        self.flush()?;
        self.append(item)?;
        self.maybe_grow();
        Ok(())
    }

    /// Insert `item` at `index`, shifting later elements right.
    ///
    /// When the owning stripe is full, every later stripe up to the end
    /// donates its last element to the head of its successor, tail first,
    /// while all of them are write-locked.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index > len()`, or `CapacityExceeded`
    /// if the list is full and cannot grow.
    pub fn insert(&self, index: usize, item: T) -> Result<()> {
        self.flush()?;
        let mut item = item;
        loop {
            {
                let chain = self.chain.read();
                let size = self.len();
                if index > size {
                    return Err(StripeListError::index_out_of_bounds(index, size));
                }
                if size < self.max_capacity() {
                    let first = index / self.partition;
                    let last = self.end_stripe(size, chain.len());
                    let mut guards: Vec<_> = chain[first..=last].iter().map(Stripe::write).collect();
                    if self.len() != size {
                        continue;
                    }
                    match cascade_insert(&mut guards, index - first * self.partition, item) {
                        Ok(()) => {
                            self.active_size.fetch_add(1, AtomicOrdering::AcqRel);
                            self.bump();
                            #[cfg(feature = "trace")]
                            tracing::trace!(index, stripes = guards.len(), "StripedList::insert");
                            break;
                        }
                        Err(rejected) => item = rejected,
                    }
                }
            }
            self.reserve_slots(1)?;
        }
        self.maybe_grow();
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len()`.
    pub fn remove_at(&self, index: usize) -> Result<T> {
        self.flush()?;
        let removed = loop {
            let chain = self.chain.read();
            let size = self.len();
            if index >= size {
                return Err(StripeListError::index_out_of_bounds(index, size));
            }
            let first = index / self.partition;
            let last = self.end_stripe(size, chain.len());
            let mut guards: Vec<_> = chain[first..=last].iter().map(Stripe::write).collect();
            if self.len() != size {
                continue;
            }
            let removed = cascade_remove(&mut guards, index - first * self.partition)
                .ok_or_else(|| StripeListError::index_out_of_bounds(index, size))?;
            self.active_size.fetch_sub(1, AtomicOrdering::AcqRel);
            self.bump();
            break removed;
        };
        self.maybe_shrink();
        Ok(removed)
    }

    /// Remove the first element equal to `item`. Returns whether one was
    /// found.
    pub fn remove(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.settle();
        loop {
            let chain = self.chain.read();
            let size = self.len();
            if size == 0 {
                return false;
            }
            let last = self.end_stripe(size, chain.len());
            let mut guards: Vec<_> = chain[..=last].iter().map(Stripe::write).collect();
            if self.len() != size {
                continue;
            }
            let found = guards
                .iter()
                .enumerate()
                .find_map(|(idx, g)| g.position(item).map(|offset| (idx, offset)));
            let Some((idx, offset)) = found else {
                return false;
            };
            if cascade_remove(&mut guards[idx..], offset).is_none() {
                return false;
            }
            self.active_size.fetch_sub(1, AtomicOrdering::AcqRel);
            self.bump();
            break;
        }
        self.maybe_shrink();
        true
    }

    /// Replace the element at `index`, returning the previous one.
    ///
    /// Does not change the modification count.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len()`.
    pub fn set(&self, index: usize, item: T) -> Result<T> {
        self.flush()?;
        let chain = self.chain.read();
        let size = self.len();
        if index >= size {
            return Err(StripeListError::index_out_of_bounds(index, size));
        }
        let stripe = chain
            .get(index / self.partition)
            .ok_or_else(|| StripeListError::index_out_of_bounds(index, size))?;
        let mut slots = stripe.write();
        slots
            .replace(index % self.partition, item)
            .map_err(|_| StripeListError::index_out_of_bounds(index, self.len()))
    }

    /// Element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.flush()?;
        let chain = self.chain.read();
        let size = self.len();
        if index >= size {
            return Err(StripeListError::index_out_of_bounds(index, size));
        }
        chain
            .get(index / self.partition)
            .and_then(|stripe| stripe.read().get(index % self.partition).cloned())
            .ok_or_else(|| StripeListError::index_out_of_bounds(index, self.len()))
    }

    /// First element, if any.
    #[must_use]
    pub fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.settle();
        let chain = self.chain.read();
        let value = chain.first()?.read().get(0).cloned();
        value
    }

    /// Last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.settle();
        let chain = self.chain.read();
        let guards: Vec<_> = chain.iter().map(Stripe::read).collect();
        guards.iter().rev().find_map(|g| g.iter().next_back().cloned())
    }

    /// Element at a stripe-relative position, for cursor-based traversal.
    pub(crate) fn peek(&self, stripe: usize, offset: usize) -> Option<T>
    where
        T: Clone,
    {
        let chain = self.chain.read();
        let value = chain.get(stripe)?.read().get(offset).cloned();
        value
    }

    // ------------------------------------------------------------------
    // Buffered appends
    // ------------------------------------------------------------------

    /// Stage `item` for a later bulk append.
    ///
    /// Staged items are invisible to `len()` until the buffer is flushed,
    /// which happens when it fills or when any operation needs a consistent
    /// view.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the buffer is full and flushing it
    /// failed; `item` is not staged in that case.
    pub fn offer(&self, item: T) -> Result<()> {
        let mut staged = self.buffer.lock();
        if staged.is_full() {
            self.flush_locked(&mut staged)?;
        }
        staged.stage(item);
        Ok(())
    }

    /// Commit every staged `offer`.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the capacity limit stops the flush.
    /// Items that could not be committed stay buffered.
    pub fn flush(&self) -> Result<()> {
        if !self.buffer.is_unflushed() {
            return Ok(());
        }
        let mut staged = self.buffer.lock();
        self.flush_locked(&mut staged)
    }

    fn flush_locked(&self, staged: &mut BufferGuard<'_, T>) -> Result<()> {
        let pending = staged.take();
        if pending.is_empty() {
            staged.mark_flushed();
            return Ok(());
        }

        #[cfg(feature = "trace")]
        let count = pending.len();

        let mut items = pending.into_iter();
        let result = self.append_bulk(&mut items);
        staged.restore(items.collect());
        staged.mark_flushed();

        #[cfg(feature = "trace")]
        tracing::debug!(count, ok = result.is_ok(), "StripedList::flush");

        result.map(|_| ())
    }

    /// Flush, keeping the buffer on failure. Only for operations with no
    /// error channel; fallible ones call `flush()?`.
    fn settle(&self) {
        if self.buffer.is_unflushed() {
            if let Err(_error) = self.flush() {
                #[cfg(feature = "trace")]
                tracing::debug!(error = %_error, "write buffer flush deferred");
            }
        }
    }

    // ------------------------------------------------------------------
    // Bulk operations
    // ------------------------------------------------------------------

    /// Append every element of `source`, in order.
    ///
    /// # Errors
    ///
    /// Returns `EmptySource` if `source` is empty, or `CapacityExceeded` if
    /// the batch can never fit under the capacity limit. Nothing is added in
    /// either case.
    pub fn add_all<S>(&self, source: &S) -> Result<usize>
    where
        S: SharedSequence<T> + ?Sized,
    {
        let items = source.to_vec();
        if items.is_empty() {
            return Err(StripeListError::empty_source("add_all"));
        }
        self.append_batch(items)
    }

    /// Append `source[start..end]`, in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` for a bad range, `EmptySource` if it is empty,
    /// or `CapacityExceeded` as for [`add_all`](Self::add_all).
    pub fn add_all_range<S>(&self, source: &S, start: usize, end: usize) -> Result<usize>
    where
        S: SharedSequence<T> + ?Sized,
    {
        let items = source.to_vec_range(start, end)?;
        if items.is_empty() {
            return Err(StripeListError::empty_source("add_all_range"));
        }
        self.append_batch(items)
    }

    /// Append clones of every element of `items`.
    ///
    /// # Errors
    ///
    /// Returns `EmptySource` if `items` is empty, or `CapacityExceeded` if
    /// the batch can never fit.
    pub fn extend_from_slice(&self, items: &[T]) -> Result<usize>
    where
        T: Clone,
    {
        if items.is_empty() {
            return Err(StripeListError::empty_source("extend_from_slice"));
        }
        self.append_batch(items.to_vec())
    }

    /// Append clones of `items[start..end]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` for a bad range and otherwise behaves like
    /// [`extend_from_slice`](Self::extend_from_slice).
    pub fn extend_from_slice_range(&self, items: &[T], start: usize, end: usize) -> Result<usize>
    where
        T: Clone,
    {
        StripeListError::check_range(start, end, items.len())?;
        if start == end {
            return Err(StripeListError::empty_source("extend_from_slice_range"));
        }
        self.append_batch(items[start..end].to_vec())
    }

    /// Append clones of a sparse slice in which every cell must be occupied.
    ///
    /// # Errors
    ///
    /// Returns `NullElement` with the position of the first `None` cell,
    /// before anything is added.
    ///
    /// # Examples
    ///
    /// ```
    /// use stripelist::{StripeListError, StripedList};
    ///
    /// let list = StripedList::new();
    /// let err = list.extend_from_slots(&[Some(1), None, Some(3)]).unwrap_err();
    /// assert_eq!(err, StripeListError::NullElement { position: 1 });
    /// assert!(list.is_empty());
    /// ```
    pub fn extend_from_slots(&self, cells: &[Option<T>]) -> Result<usize>
    where
        T: Clone,
    {
        if cells.is_empty() {
            return Err(StripeListError::empty_source("extend_from_slots"));
        }
        if let Some(position) = cells.iter().position(Option::is_none) {
            return Err(StripeListError::null_element(position));
        }
        self.append_batch(cells.iter().flatten().cloned().collect())
    }

    /// Validate and append a non-empty batch.
    fn append_batch(&self, items: Vec<T>) -> Result<usize> {
        self.flush()?;
        if let Some(limit) = self.config.capacity_limit {
            let attempted = self.len().saturating_add(items.len());
            if attempted > limit {
                return Err(StripeListError::capacity_exceeded(limit, attempted));
            }
        }
        let mut items = items.into_iter();
        self.append_bulk(&mut items)
    }

    /// Copy of every committed element, in order.
    ///
    /// Read locks on every stripe are held together, so the copy is a
    /// consistent cut.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.settle();
        let chain = self.chain.read();
        let guards: Vec<_> = chain.iter().map(Stripe::read).collect();
        let mut out = Vec::with_capacity(self.len());
        for g in &guards {
            out.extend(g.iter().cloned());
        }
        out
    }

    /// Copy of the elements in `[start, end)`.
    ///
    /// Only the stripes overlapping the range are read-locked, head to tail,
    /// and held until the copy completes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `start > end` or `end > len()`.
    pub fn to_vec_range(&self, start: usize, end: usize) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.flush()?;
        loop {
            let chain = self.chain.read();
            StripeListError::check_range(start, end, self.len())?;
            if start == end {
                return Ok(Vec::new());
            }

            let first = start / self.partition;
            let last = (end - 1) / self.partition;
            let Some(covered) = chain.get(first..=last) else {
                continue;
            };
            let guards: Vec<_> = covered.iter().map(Stripe::read).collect();
            let tail_needed = (end - 1) % self.partition + 1;
            if guards.last().map_or(true, |g| g.active() < tail_needed) {
                continue;
            }

            let mut out = Vec::with_capacity(end - start);
            for (k, g) in guards.iter().enumerate() {
                let base = (first + k) * self.partition;
                let lo = start.saturating_sub(base);
                let hi = (end - base).min(g.active());
                let cells = g.occupied().get(lo..hi).unwrap_or_default();
                out.extend(cells.iter().flatten().cloned());
            }
            return Ok(out);
        }
    }

    /// New list holding this list's elements followed by `other`'s.
    ///
    /// Both sides are extracted and the result is rebuilt with this list's
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `EmptySource` if `other` is empty, `IncompatibleSequence` if
    /// `other` reports a length that disagrees with what it yields, or
    /// `CapacityExceeded` if the union exceeds the capacity limit.
    pub fn merge<S>(&self, other: &S) -> Result<StripedList<T>>
    where
        T: Clone,
        S: SharedSequence<T> + ?Sized,
    {
        let theirs = extract_checked(other, "merge")?;
        let mut items = self.to_vec();
        items.extend(theirs);

        let mut config = self.config;
        config.initial_capacity = config.initial_capacity.max(items.len());
        if items.len() > config.limit() {
            return Err(StripeListError::capacity_exceeded(config.limit(), items.len()));
        }
        StripedList::from_parts(config, items)
    }

    /// Replace every element in `[start, end)` with `f(element)`, in index
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `start > end` or `end > len()`.
    pub fn replace_all<F>(&self, start: usize, end: usize, mut f: F) -> Result<()>
    where
        F: FnMut(&T) -> T,
    {
        self.flush()?;
        loop {
            let chain = self.chain.read();
            StripeListError::check_range(start, end, self.len())?;
            if start == end {
                return Ok(());
            }

            let first = start / self.partition;
            let last = (end - 1) / self.partition;
            let Some(covered) = chain.get(first..=last) else {
                continue;
            };
            let mut guards: Vec<_> = covered.iter().map(Stripe::write).collect();
            let tail_needed = (end - 1) % self.partition + 1;
            if guards.last().map_or(true, |g| g.active() < tail_needed) {
                continue;
            }

            for (k, g) in guards.iter_mut().enumerate() {
                let base = (first + k) * self.partition;
                let lo = start.saturating_sub(base);
                let hi = (end - base).min(g.active());
                let cells = g.occupied_mut().get_mut(lo..hi).unwrap_or_default();
                for cell in cells.iter_mut().flatten() {
                    let replacement = f(cell);
                    *cell = replacement;
                }
            }
            return Ok(());
        }
    }

    /// Remove the elements in `[start, end)`. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `start > end` or `end > len()`.
    pub fn remove_range(&self, start: usize, end: usize) -> Result<usize> {
        self.flush()?;
        let removed = self.rewrite(|items| {
            StripeListError::check_range(start, end, items.len())?;
            Ok(items.drain(start..end).count())
        })?;
        if removed > 0 {
            self.bump();
            self.maybe_shrink();
        }
        Ok(removed)
    }

    /// Keep only the elements for which `keep` returns `true`. Returns how
    /// many were removed.
    pub fn retain<F>(&self, keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.settle();
        let removed = self.rewrite(|items| {
            let before = items.len();
            items.retain(keep);
            before - items.len()
        });
        if removed > 0 {
            self.bump();
            self.maybe_shrink();
        }
        removed
    }

    // ------------------------------------------------------------------
    // Whole-list operations
    // ------------------------------------------------------------------

    /// Remove every element, including staged `offer`s.
    pub fn clear(&self) {
        {
            let mut staged = self.buffer.lock();
            staged.discard();

            let chain = self.chain.read();
            let mut guards: Vec<_> = chain.iter().map(Stripe::write).collect();
            for g in &mut guards {
                g.clear();
            }
            self.active_size.store(0, AtomicOrdering::Release);
            self.bump();
        }

        #[cfg(feature = "trace")]
        tracing::debug!("StripedList::clear");

        self.maybe_shrink();
    }

    /// Reverse the element order in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use stripelist::{Partition, StripedList};
    ///
    /// let list = StripedList::with_partition(8, Partition::Custom(4))?;
    /// list.extend_from_slice(&[1, 2, 3, 4, 5, 6])?;
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![6, 5, 4, 3, 2, 1]);
    /// # Ok::<(), stripelist::StripeListError>(())
    /// ```
    pub fn reverse(&self) {
        self.settle();
        let chain = self.chain.read();
        let mut guards: Vec<_> = chain.iter().map(Stripe::write).collect();
        let size = self.len();

        if size <= self.partition {
            if let Some(head) = guards.first_mut() {
                head.reverse();
            }
        } else {
            for i in 0..size / 2 {
                swap_cells(&mut guards, self.partition, i, size - 1 - i);
            }
        }
        self.bump();

        #[cfg(feature = "trace")]
        tracing::debug!(size, "StripedList::reverse");
    }

    /// Whether any element equals `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Index of the first element equal to `item`.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.settle();
        let chain = self.chain.read();
        let guards: Vec<_> = chain.iter().map(Stripe::read).collect();
        guards
            .iter()
            .enumerate()
            .find_map(|(idx, g)| g.position(item).map(|offset| idx * self.partition + offset))
    }

    /// Index of the last element equal to `item`.
    #[must_use]
    pub fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.settle();
        let chain = self.chain.read();
        let guards: Vec<_> = chain.iter().map(Stripe::read).collect();
        guards
            .iter()
            .enumerate()
            .rev()
            .find_map(|(idx, g)| g.rposition(item).map(|offset| idx * self.partition + offset))
    }

    /// Pack occupied cells to the front of every stripe.
    pub fn compress(&self) {
        self.settle();
        let chain = self.chain.read();
        let _packed: usize = chain.iter().map(Stripe::compress).sum();

        #[cfg(feature = "trace")]
        tracing::trace!(packed = _packed, "StripedList::compress");
    }

    /// Repack every element into the leading stripes.
    ///
    /// Restores the full-prefix layout after [`compress`](Self::compress)
    /// left gaps at stripe ends.
    pub fn defragment(&self) {
        self.settle();
        let _len = self.rewrite(|items| items.len());

        #[cfg(feature = "trace")]
        tracing::debug!(len = _len, "StripedList::defragment");
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// Sort the whole list in ascending order.
    pub fn sort(&self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sort the whole list with `compare`.
    ///
    /// Every stripe is sorted locally with the adaptive stripe sort, then
    /// the sorted stripe runs are merged bottom-up and written back. All
    /// stripe write locks are held throughout. The sort is not stable.
    pub fn sort_by<F>(&self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.settle();
        let chain = self.chain.read();
        let mut guards: Vec<_> = chain.iter().map(Stripe::write).collect();

        for g in &mut guards {
            g.sort_by(&mut compare);
        }
        let runs = guards.iter().filter(|g| g.active() > 0).count();
        if runs > 1 {
            let sorted: Vec<Vec<T>> = guards.iter_mut().map(|g| g.drain().collect()).collect();
            let mut merged = merge_runs(sorted, &mut compare).into_iter();
            for g in &mut guards {
                g.fill_from(&mut merged);
            }
        }
        self.bump();

        #[cfg(feature = "trace")]
        tracing::debug!(runs, "StripedList::sort_by");
    }

    /// Sort each stripe independently.
    ///
    /// Only stripe-local order changes; the list is globally sorted only when
    /// it fits in one stripe.
    pub fn sort_stripes_by<F>(&self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.settle();
        let chain = self.chain.read();
        let mut guards: Vec<_> = chain.iter().map(Stripe::write).collect();
        for g in &mut guards {
            let _path = g.sort_by(&mut compare);
            #[cfg(feature = "trace")]
            tracing::trace!(path = ?_path, "stripe sorted");
        }
        self.bump();
    }

    /// Sort each stripe independently on the rayon thread pool (requires
    /// `rayon` feature).
    #[cfg(feature = "rayon")]
    pub fn par_sort_stripes_by<F>(&self, compare: F)
    where
        T: Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        use rayon::prelude::*;

        self.settle();
        let chain = self.chain.read();
        let mut guards: Vec<_> = chain.iter().map(Stripe::write).collect();
        let mut stripes: Vec<&mut StripeSlots<T>> = guards.iter_mut().map(|g| &mut **g).collect();
        stripes.par_iter_mut().for_each(|slots| {
            slots.sort_by(&mut |a: &T, b: &T| compare(a, b));
        });
        self.bump();
    }

    // ------------------------------------------------------------------
    // Capacity
    // ------------------------------------------------------------------

    /// Apply one growth step. Returns the new capacity.
    ///
    /// At the capacity limit this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if staged `offer`s cannot be committed.
    pub fn grow(&self) -> Result<usize> {
        self.flush()?;
        Ok(self.grow_step())
    }

    /// Apply one shrink step. Returns the new capacity.
    ///
    /// Never goes below the live element count or the configured minimum.
    pub fn shrink(&self) -> usize {
        self.settle();
        self.shrink_step()
    }

    /// Release every free slot (keeping at least one). Returns the new
    /// capacity.
    pub fn trim_to_size(&self) -> usize {
        self.settle();
        let mut chain = self.chain.write();
        let target = self.len().max(1);
        self.shrink_chain(&mut chain, target)
    }

    /// Grow until at least `additional` more elements fit.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if that would pass the capacity limit.
    pub fn reserve(&self, additional: usize) -> Result<()> {
        self.flush()?;
        self.reserve_slots(additional)
    }

    // ------------------------------------------------------------------
    // Iteration
    // ------------------------------------------------------------------

    /// Snapshot iterator over a copy of the current contents.
    #[must_use]
    pub fn iter(&self) -> SnapshotIter<T>
    where
        T: Clone,
    {
        SnapshotIter::new(self.to_vec())
    }

    /// Live iterator that fails on concurrent structural modification.
    #[must_use]
    pub fn concurrent_iter(&self) -> ConcurrentIter<'_, T>
    where
        T: Clone,
    {
        self.settle();
        ConcurrentIter::new(self)
    }

    // ------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------

    /// Element-wise equality with any sequence.
    #[must_use]
    pub fn equals<S>(&self, other: &S) -> bool
    where
        T: Clone + PartialEq,
        S: SharedSequence<T> + ?Sized,
    {
        self.to_vec() == other.to_vec()
    }

    /// Element-wise equality of `[start, end)` in both sequences.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the range is invalid for either side.
    pub fn equals_range<S>(&self, other: &S, start: usize, end: usize) -> Result<bool>
    where
        T: Clone + PartialEq,
        S: SharedSequence<T> + ?Sized,
    {
        let mine = self.to_vec_range(start, end)?;
        let theirs = other.to_vec_range(start, end)?;
        Ok(mine == theirs)
    }

    /// Whether both sequences hold the same elements with the same
    /// multiplicities, in any order.
    #[must_use]
    pub fn equivalence<S>(&self, other: &S) -> bool
    where
        T: Clone + Eq + Hash,
        S: SharedSequence<T> + ?Sized,
    {
        let mine = self.to_vec();
        let theirs = other.to_vec();
        if mine.len() != theirs.len() {
            return false;
        }
        let mut counts: HashMap<&T, isize> = HashMap::with_capacity(mine.len());
        for item in &mine {
            *counts.entry(item).or_insert(0) += 1;
        }
        for item in &theirs {
            match counts.get_mut(item) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Stripe holding the end of a sequence of `size` elements.
    #[inline]
    fn end_stripe(&self, size: usize, stripes: usize) -> usize {
        (size / self.partition).min(stripes.saturating_sub(1))
    }

    #[inline]
    fn bump(&self) {
        self.mod_count.fetch_add(1, AtomicOrdering::AcqRel);
    }

    /// Append under the end stripe's lock, growing when it is full.
    fn append(&self, mut item: T) -> Result<()> {
        loop {
            {
                let chain = self.chain.read();
                let size = self.len();
                let mut tail = chain[self.end_stripe(size, chain.len())].write();
                if self.len() != size {
                    continue;
                }
                match tail.push(item) {
                    Ok(()) => {
                        self.active_size.fetch_add(1, AtomicOrdering::AcqRel);
                        self.bump();
                        return Ok(());
                    }
                    Err(rejected) => item = rejected,
                }
            }
            self.reserve_slots(1)?;
        }
    }

    /// Fill end stripes straight from `items`, growing for the remainder of
    /// the batch whenever they run out of room.
    ///
    /// On error, unconsumed items are left in `items`.
    fn append_bulk<I>(&self, items: &mut I) -> Result<usize>
    where
        I: ExactSizeIterator<Item = T>,
    {
        let mut added = 0;
        while items.len() > 0 {
            let stored = {
                let chain = self.chain.read();
                let size = self.len();
                let mut tail = chain[self.end_stripe(size, chain.len())].write();
                if self.len() != size {
                    continue;
                }
                let stored = tail.fill_from(&mut *items);
                if stored > 0 {
                    self.active_size.fetch_add(stored, AtomicOrdering::AcqRel);
                    self.bump();
                }
                stored
            };
            added += stored;
            if stored == 0 {
                self.reserve_slots(items.len())?;
            }
        }
        self.maybe_grow();
        Ok(added)
    }

    /// Make sure `needed` more elements fit, growing by whole growth steps.
    fn reserve_slots(&self, needed: usize) -> Result<()> {
        let mut chain = self.chain.write();
        let size = self.len();
        let capacity = self.max_capacity();
        let limit = self.config.limit();
        let required = size.saturating_add(needed);

        if required <= capacity {
            return Ok(());
        }
        if required > limit {
            return Err(StripeListError::capacity_exceeded(capacity, required));
        }

        let mut target = capacity;
        while target < required {
            target = params::grown_capacity(target, self.config.growth_factor, limit);
        }
        self.extend_chain(&mut chain, target);
        Ok(())
    }

    fn grow_step(&self) -> usize {
        let mut chain = self.chain.write();
        self.grow_locked(&mut chain)
    }

    fn grow_locked(&self, chain: &mut Vec<Stripe<T>>) -> usize {
        let capacity = self.max_capacity();
        let target = params::grown_capacity(capacity, self.config.growth_factor, self.config.limit());
        if target > capacity {
            self.extend_chain(chain, target);
        }
        self.max_capacity()
    }

    fn shrink_step(&self) -> usize {
        let mut chain = self.chain.write();
        self.shrink_locked(&mut chain)
    }

    fn shrink_locked(&self, chain: &mut Vec<Stripe<T>>) -> usize {
        let target = params::shrunk_capacity(
            self.max_capacity(),
            self.config.growth_factor,
            self.len(),
            self.config.min_capacity,
        );
        self.shrink_chain(chain, target)
    }

    fn over_high_water(&self) -> bool {
        self.load_factor() > self.config.high_water
    }

    fn under_low_water(&self) -> bool {
        self.load_factor() < self.config.low_water && self.max_capacity() > self.config.min_capacity
    }

    /// Grow one step if the load is still above the high-water mark once
    /// the layout lock is held. Racing appenders grow only once.
    fn maybe_grow(&self) {
        if self.over_high_water() {
            let mut chain = self.chain.write();
            if self.over_high_water() {
                self.grow_locked(&mut chain);
            }
        }
    }

    fn maybe_shrink(&self) {
        if self.under_low_water() {
            let mut chain = self.chain.write();
            if self.under_low_water() {
                self.shrink_locked(&mut chain);
            }
        }
    }

    /// Extend the tail stripe to the partition size, then append new
    /// stripes, until the chain holds `target` slots.
    fn extend_chain(&self, chain: &mut Vec<Stripe<T>>, target: usize) {
        let capacity = self.max_capacity();
        let tail_slots = chain.last_mut().map_or(self.partition, |s| s.get_mut().capacity());
        let plan = params::plan_growth(target - capacity, tail_slots, self.partition);

        if let Some(tail) = chain.last_mut() {
            tail.get_mut().extend_slots(plan.tail_extension);
        }
        chain.extend(plan.new_stripes.into_iter().map(Stripe::new));
        self.max_capacity.store(target, AtomicOrdering::Release);

        #[cfg(feature = "trace")]
        tracing::debug!(from = capacity, to = target, stripes = chain.len(), "StripedList::grow");
    }

    /// Drop empty tail stripes and truncate the tail until capacity reaches
    /// `target` or no free slot remains to release.
    fn shrink_chain(&self, chain: &mut Vec<Stripe<T>>, target: usize) -> usize {
        let before = self.max_capacity();
        let mut capacity = before;

        while capacity > target {
            let excess = capacity - target;
            let count = chain.len();
            let Some(tail) = chain.last_mut() else {
                break;
            };
            let slots = tail.get_mut();
            let allocated = slots.capacity();

            if slots.active() == 0 && count > 1 && allocated <= excess {
                chain.pop();
                capacity -= allocated;
                continue;
            }
            capacity -= slots.truncate_slots(allocated - excess.min(allocated));
            break;
        }
        self.max_capacity.store(capacity, AtomicOrdering::Release);

        #[cfg(feature = "trace")]
        if capacity != before {
            tracing::debug!(from = before, to = capacity, stripes = chain.len(), "StripedList::shrink");
        }

        capacity
    }

    /// Drain every element, let `edit` change the sequence without growing
    /// it, and refill the stripes from the head.
    fn rewrite<R, F>(&self, edit: F) -> R
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let chain = self.chain.read();
        let mut guards: Vec<_> = chain.iter().map(Stripe::write).collect();

        let mut items = Vec::with_capacity(self.len());
        for g in &mut guards {
            items.extend(g.drain());
        }
        let result = edit(&mut items);

        let len = items.len();
        let mut source = items.into_iter();
        for g in &mut guards {
            g.fill_from(&mut source);
        }
        self.active_size.store(len, AtomicOrdering::Release);
        result
    }
}

/// Insert into the first of `guards`, shifting one element across every
/// stripe boundary.
///
/// `guards` covers the owning stripe through the end stripe. Donation runs
/// tail to head so no element is overwritten. Hands `item` back if the end
/// stripe has no room, before anything moves.
fn cascade_insert<T, G>(guards: &mut [G], offset: usize, item: T) -> std::result::Result<(), T>
where
    G: DerefMut<Target = StripeSlots<T>>,
{
    if !guards.last().is_some_and(|tail| tail.has_room()) {
        return Err(item);
    }

    for g in (1..guards.len()).rev() {
        let (head, rest) = guards.split_at_mut(g);
        let donor = &mut head[g - 1];
        if let Some(moved) = donor.pop() {
            if let Err(moved) = rest[0].insert(0, moved) {
                let _ = donor.push(moved);
                return Err(item);
            }
        }
    }

    match guards.first_mut() {
        Some(owner) => owner.insert(offset, item),
        None => Err(item),
    }
}

/// Remove from the first of `guards`, pulling the head of each later stripe
/// back into its predecessor.
fn cascade_remove<T, G>(guards: &mut [G], offset: usize) -> Option<T>
where
    G: DerefMut<Target = StripeSlots<T>>,
{
    let removed = guards.first_mut()?.remove(offset)?;

    for g in 1..guards.len() {
        let (head, rest) = guards.split_at_mut(g);
        let Some(moved) = rest[0].remove(0) else {
            break;
        };
        if let Err(moved) = head[g - 1].push(moved) {
            let _ = rest[0].insert(0, moved);
            break;
        }
    }
    Some(removed)
}

/// Swap global positions `a < b` across locked stripes.
fn swap_cells<T, G>(guards: &mut [G], partition: usize, a: usize, b: usize)
where
    G: DerefMut<Target = StripeSlots<T>>,
{
    let (sa, oa) = (a / partition, a % partition);
    let (sb, ob) = (b / partition, b % partition);
    if sa == sb {
        guards[sa].occupied_mut().swap(oa, ob);
    } else {
        let (left, right) = guards.split_at_mut(sb);
        std::mem::swap(
            &mut left[sa].occupied_mut()[oa],
            &mut right[0].occupied_mut()[ob],
        );
    }
}

/// Extract a source sequence, checking it against its own reported length.
pub(crate) fn extract_checked<T, S>(source: &S, operation: &'static str) -> Result<Vec<T>>
where
    S: SharedSequence<T> + ?Sized,
{
    let items = source.to_vec();
    let expected = source.len();
    if items.len() != expected {
        return Err(StripeListError::incompatible_sequence(format!(
            "{operation}: source reports {expected} elements but yielded {}",
            items.len()
        )));
    }
    if items.is_empty() {
        return Err(StripeListError::empty_source(operation));
    }
    Ok(items)
}

impl<T> Default for StripedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for StripedList<T> {
    fn clone(&self) -> Self {
        let items = self.to_vec();
        let config = self.carried_config(items.len());
        Self::assemble(config, items)
    }
}

impl<T> fmt::Debug for StripedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripedList")
            .field("len", &self.len())
            .field("max_capacity", &self.max_capacity())
            .field("partition", &self.partition)
            .field("stripes", &self.stripe_count())
            .field("buffered", &self.buffered_len())
            .field("modification_count", &self.modification_count())
            .finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for StripedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.to_vec().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for StripedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T: Clone> IntoIterator for &'a StripedList<T> {
    type Item = T;
    type IntoIter = SnapshotIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> SharedSequence<T> for StripedList<T> {
    fn len(&self) -> usize {
        StripedList::len(self)
    }

    fn get(&self, index: usize) -> Result<T> {
        StripedList::get(self, index)
    }

    fn set(&self, index: usize, item: T) -> Result<T> {
        StripedList::set(self, index, item)
    }

    fn add(&self, item: T) -> Result<()> {
        StripedList::add(self, item)
    }

    fn insert(&self, index: usize, item: T) -> Result<()> {
        StripedList::insert(self, index, item)
    }

    fn remove_at(&self, index: usize) -> Result<T> {
        StripedList::remove_at(self, index)
    }

    fn clear(&self) {
        StripedList::clear(self);
    }

    fn to_vec_range(&self, start: usize, end: usize) -> Result<Vec<T>> {
        StripedList::to_vec_range(self, start, end)
    }

    fn to_vec(&self) -> Vec<T> {
        StripedList::to_vec(self)
    }

    fn add_all_items<I>(&self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Ok(0);
        }
        self.append_batch(items)
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        StripedList::index_of(self, item)
    }

    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        StripedList::last_index_of(self, item)
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        StripedList::contains(self, item)
    }

    fn first(&self) -> Option<T> {
        StripedList::first(self)
    }

    fn last(&self) -> Option<T> {
        StripedList::last(self)
    }
}

impl<T> Growable for StripedList<T> {
    fn active_size(&self) -> usize {
        self.len()
    }

    fn max_capacity(&self) -> usize {
        StripedList::max_capacity(self)
    }

    fn grow(&self) -> Result<usize> {
        StripedList::grow(self)
    }

    fn shrink(&self) -> usize {
        StripedList::shrink(self)
    }

    fn compress(&self) {
        StripedList::compress(self);
    }
}

impl<T> SortableSequence<T> for StripedList<T> {
    fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        StripedList::sort_by(self, compare);
    }

    fn sort_segments_by<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_stripes_by(compare);
    }
}
