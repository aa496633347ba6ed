//! Live iteration with modification-count fencing.
//!
//! A [`ConcurrentIter`] walks the list in place, one read lock at a time,
//! with a cursor of `(stripe, offset)`. It records the list's modification
//! count when created and re-checks it on every step. Any structural change
//! made by someone else (an add, insert, remove, sort, flush, ...) makes the
//! next step fail with `ConcurrentModification`, and the iterator stays
//! failed. Recreate it to start over.
//!
//! A `remove` through the iterator advances the recorded count by exactly
//! its own change. `set` is not structural and leaves it alone.

use crate::error::{Result, StripeListError};
use crate::sync::StripedList;

/// Bidirectional cursor over a live [`StripedList`].
///
/// # Examples
///
/// ```
/// use stripelist::{StripeListError, StripedList};
///
/// let list = StripedList::from_vec(vec![1, 2, 3, 4]);
/// let mut iter = list.concurrent_iter();
///
/// assert_eq!(iter.try_next()?, Some(1));
/// assert_eq!(iter.try_next()?, Some(2));
/// assert_eq!(iter.remove()?, 2);
/// assert_eq!(list.to_vec(), vec![1, 3, 4]);
///
/// list.add(5)?;
/// assert!(matches!(
///     iter.try_next(),
///     Err(StripeListError::ConcurrentModification { .. })
/// ));
/// # Ok::<(), StripeListError>(())
/// ```
pub struct ConcurrentIter<'a, T> {
    list: &'a StripedList<T>,
    partition: usize,
    stripe: usize,
    offset: usize,
    expected: u64,
    /// Global index of the element last yielded, for `remove`/`set`.
    last_returned: Option<usize>,
    failed: bool,
}

impl<'a, T: Clone> ConcurrentIter<'a, T> {
    pub(crate) fn new(list: &'a StripedList<T>) -> Self {
        Self {
            list,
            partition: list.partition(),
            stripe: 0,
            offset: 0,
            expected: list.modification_count(),
            last_returned: None,
            failed: false,
        }
    }

    /// Index of the element the next `try_next` would yield.
    #[inline]
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.stripe * self.partition + self.offset
    }

    /// Index of the element the next `try_previous` would yield, if any.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// Whether the iterator has observed a concurrent modification.
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Whether an element follows the cursor.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.failed && self.list.peek(self.stripe, self.offset).is_some()
    }

    /// Whether an element precedes the cursor.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        !self.failed && self.next_index() > 0
    }

    /// Advance and return the next element.
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentModification` if the list changed structurally
    /// since the iterator was created or last re-synchronized.
    pub fn try_next(&mut self) -> Result<Option<T>> {
        self.check()?;
        let Some(item) = self.list.peek(self.stripe, self.offset) else {
            return Ok(None);
        };
        self.last_returned = Some(self.next_index());
        self.offset += 1;
        if self.offset == self.partition {
            self.stripe += 1;
            self.offset = 0;
        }
        Ok(Some(item))
    }

    /// Step back and return the previous element.
    ///
    /// # Errors
    ///
    /// Returns `ConcurrentModification` as for [`try_next`](Self::try_next).
    pub fn try_previous(&mut self) -> Result<Option<T>> {
        self.check()?;
        let Some(index) = self.previous_index() else {
            return Ok(None);
        };
        let (stripe, offset) = (index / self.partition, index % self.partition);
        let Some(item) = self.list.peek(stripe, offset) else {
            return Ok(None);
        };
        self.stripe = stripe;
        self.offset = offset;
        self.last_returned = Some(index);
        Ok(Some(item))
    }

    /// Remove the element last yielded.
    ///
    /// # Errors
    ///
    /// Returns `NoCurrentElement` if nothing was yielded since the last
    /// `remove`, `ConcurrentModification` if the iterator is stale, or the
    /// list's own error.
    pub fn remove(&mut self) -> Result<T> {
        let index = self.last_returned.ok_or(StripeListError::NoCurrentElement)?;
        // Commit staged offers first so they count against the fence.
        self.list.flush()?;
        self.check()?;
        let removed = self.list.remove_at(index)?;
        self.last_returned = None;
        if index < self.next_index() {
            self.seek(self.next_index() - 1);
        }
        // Account for our own removal only.
        self.expected += 1;
        Ok(removed)
    }

    /// Replace the element last yielded, returning the old one.
    ///
    /// # Errors
    ///
    /// Same conditions as [`remove`](Self::remove).
    pub fn set(&mut self, item: T) -> Result<T> {
        let index = self.last_returned.ok_or(StripeListError::NoCurrentElement)?;
        self.list.flush()?;
        self.check()?;
        self.list.set(index, item)
    }

    fn check(&mut self) -> Result<()> {
        let actual = self.list.modification_count();
        if self.failed || actual != self.expected {
            self.failed = true;
            return Err(StripeListError::concurrent_modification(self.expected, actual));
        }
        Ok(())
    }

    fn seek(&mut self, index: usize) {
        self.stripe = index / self.partition;
        self.offset = index % self.partition;
    }
}

/// Yields `Ok` elements, then `Err` once if the list was modified, then
/// `None`.
impl<T: Clone> Iterator for ConcurrentIter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.try_next().transpose()
    }
}

impl<T> std::fmt::Debug for ConcurrentIter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcurrentIter")
            .field("stripe", &self.stripe)
            .field("offset", &self.offset)
            .field("expected", &self.expected)
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}
