//! Copy-on-create iteration.

use std::iter::FusedIterator;

/// Iterator over a copy of a list taken at creation time.
///
/// The copy is a consistent cut: every stripe was read-locked while it was
/// taken. Later mutation of the list is invisible here. Traverses in both
/// directions.
///
/// # Examples
///
/// ```
/// use stripelist::StripedList;
///
/// let list = StripedList::from_vec(vec![1, 2, 3]);
/// let mut iter = list.iter();
/// list.add(4)?;
///
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2]);
/// # Ok::<(), stripelist::StripeListError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotIter<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> SnapshotIter<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }

    /// Elements not yet yielded from either end.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T> Iterator for SnapshotIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> DoubleEndedIterator for SnapshotIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.items.next_back()
    }
}

impl<T> ExactSizeIterator for SnapshotIter<T> {}

impl<T> FusedIterator for SnapshotIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_directions() {
        let mut iter = SnapshotIter::new(vec![1, 2, 3, 4]);
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.as_slice(), &[2, 3]);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }
}
