//! Staging area for buffered appends.
//!
//! `offer` pushes into a small vector under a single mutex instead of taking
//! the tail stripe's write lock once per element. The buffer is drained into
//! the chain in one bulk pass when it fills or when any operation needs a
//! consistent view of the list.
//!
//! The `unflushed` flag lets readers skip the mutex entirely when nothing is
//! staged. It is only written while the mutex is held.

use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicBool, Ordering};

/// Buffered-but-uncommitted appends.
#[derive(Debug)]
pub(crate) struct WriteBuffer<T> {
    items: Mutex<Vec<T>>,
    capacity: usize,
    unflushed: AtomicBool,
}

impl<T> WriteBuffer<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
            unflushed: AtomicBool::new(false),
        }
    }

    /// Whether staged items may be waiting. Lock-free fast path.
    #[inline]
    pub(crate) fn is_unflushed(&self) -> bool {
        self.unflushed.load(Ordering::Acquire)
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of staged items.
    pub(crate) fn len(&self) -> usize {
        if self.is_unflushed() {
            self.items.lock().len()
        } else {
            0
        }
    }

    /// Lock the buffer for staging or draining.
    pub(crate) fn lock(&self) -> BufferGuard<'_, T> {
        BufferGuard {
            items: self.items.lock(),
            capacity: self.capacity,
            unflushed: &self.unflushed,
        }
    }
}

/// Exclusive access to the staged items.
pub(crate) struct BufferGuard<'a, T> {
    items: MutexGuard<'a, Vec<T>>,
    capacity: usize,
    unflushed: &'a AtomicBool,
}

impl<T> BufferGuard<'_, T> {
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Stage one item. The caller flushes first when the buffer is full.
    pub(crate) fn stage(&mut self, item: T) {
        if self.items.capacity() == 0 {
            self.items.reserve_exact(self.capacity);
        }
        self.items.push(item);
        self.unflushed.store(true, Ordering::Release);
    }

    /// Take every staged item, oldest first.
    pub(crate) fn take(&mut self) -> Vec<T> {
        std::mem::take(&mut *self.items)
    }

    /// Put back items a failed flush could not commit, ahead of anything
    /// staged since.
    pub(crate) fn restore(&mut self, mut pending: Vec<T>) {
        if pending.is_empty() {
            return;
        }
        pending.append(&mut self.items);
        *self.items = pending;
        self.unflushed.store(true, Ordering::Release);
    }

    /// Mark the buffer drained.
    pub(crate) fn mark_flushed(&mut self) {
        if self.items.is_empty() {
            self.unflushed.store(false, Ordering::Release);
        }
    }

    /// Drop every staged item.
    pub(crate) fn discard(&mut self) {
        self.items.clear();
        self.unflushed.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_and_take() {
        let buffer = WriteBuffer::new(3);
        assert!(!buffer.is_unflushed());

        {
            let mut guard = buffer.lock();
            guard.stage(1);
            guard.stage(2);
            assert!(!guard.is_full());
            guard.stage(3);
            assert!(guard.is_full());
        }
        assert!(buffer.is_unflushed());
        assert_eq!(buffer.len(), 3);

        let mut guard = buffer.lock();
        assert_eq!(guard.take(), vec![1, 2, 3]);
        guard.mark_flushed();
        drop(guard);
        assert!(!buffer.is_unflushed());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_restore_keeps_order() {
        let buffer = WriteBuffer::new(8);
        let mut guard = buffer.lock();
        guard.stage(1);
        guard.stage(2);
        let taken = guard.take();
        guard.stage(3);
        guard.restore(taken);
        guard.mark_flushed();
        assert_eq!(guard.take(), vec![1, 2, 3]);
        drop(guard);
        assert!(buffer.is_unflushed(), "restore keeps the flag raised");
    }

    #[test]
    fn test_discard() {
        let buffer = WriteBuffer::new(2);
        buffer.lock().stage("a");
        buffer.lock().discard();
        assert!(!buffer.is_unflushed());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        assert_eq!(WriteBuffer::<u8>::new(0).capacity(), 1);
    }
}
