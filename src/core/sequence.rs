//! Trait definitions for shared sequence containers.
//!
//! A container is described by three small traits instead of a class
//! hierarchy:
//!
//! - [`SharedSequence`]: indexable, bounds-checked access through `&self`,
//!   with default multi-element helpers built on the single-element
//!   primitives
//! - [`Growable`]: capacity bookkeeping and the grow/shrink/compress hooks
//! - [`SortableSequence`]: comparator-driven sorting
//!
//! All methods take `&self`; implementors provide interior mutability, so a
//! container can be shared through `Arc` without an outer `Mutex`.

use crate::core::params;
use crate::error::Result;
use std::cmp::Ordering;

/// Indexable sequence with interior mutability.
///
/// Implementors must provide the single-element primitives. The provided
/// multi-element helpers go through those primitives one element at a time;
/// implementors with a faster bulk path should override them.
pub trait SharedSequence<T> {
    /// Number of live elements.
    fn len(&self) -> usize;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index >= len()`.
    fn get(&self, index: usize) -> Result<T>;

    /// Replace the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index >= len()`.
    fn set(&self, index: usize, item: T) -> Result<T>;

    /// Append `item` at the end.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if the sequence cannot make room.
    fn add(&self, item: T) -> Result<()>;

    /// Insert `item` at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index > len()`, `CapacityExceeded` if full.
    fn insert(&self, index: usize, item: T) -> Result<()>;

    /// Remove and return the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index >= len()`.
    fn remove_at(&self, index: usize) -> Result<T>;

    /// Remove every element.
    fn clear(&self);

    /// Copy of the elements in `[start, end)`.
    ///
    /// # Errors
    ///
    /// `InvalidRange` if `start > end` or `end > len()`.
    fn to_vec_range(&self, start: usize, end: usize) -> Result<Vec<T>>;

    /// Copy of every element, in order.
    fn to_vec(&self) -> Vec<T> {
        (0..).map_while(|i| self.get(i).ok()).collect()
    }

    /// Append every item, returning how many were added.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first failing `add`.
    fn add_all_items<I>(&self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let mut added = 0;
        for item in items {
            self.add(item)?;
            added += 1;
        }
        Ok(added)
    }

    /// Index of the first element equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.to_vec().iter().position(|x| x == item)
    }

    /// Index of the last element equal to `item`.
    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.to_vec().iter().rposition(|x| x == item)
    }

    /// Whether any element equals `item`.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// First element, if any.
    fn first(&self) -> Option<T> {
        self.get(0).ok()
    }

    /// Last element, if any.
    fn last(&self) -> Option<T> {
        self.len().checked_sub(1).and_then(|i| self.get(i).ok())
    }
}

/// Capacity bookkeeping and structural hooks.
pub trait Growable {
    /// Number of live elements.
    fn active_size(&self) -> usize;

    /// Number of allocated slots.
    fn max_capacity(&self) -> usize;

    /// `active_size / max_capacity`.
    fn load_factor(&self) -> f64 {
        params::load_factor(self.active_size(), self.max_capacity())
    }

    /// Apply one growth step, returning the new capacity.
    ///
    /// # Errors
    ///
    /// Implementations report a capacity that can no longer grow as
    /// `CapacityExceeded` only when growth was required to make room.
    fn grow(&self) -> Result<usize>;

    /// Apply one shrink step, returning the new capacity.
    ///
    /// Never drops a live element.
    fn shrink(&self) -> usize;

    /// Pack occupied slots to the front of their segments.
    fn compress(&self);
}

/// Comparator-driven sorting.
pub trait SortableSequence<T> {
    /// Sort the whole sequence with `compare`.
    fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sort each storage segment independently.
    ///
    /// The result is only globally sorted when the sequence fits in one
    /// segment.
    fn sort_segments_by<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sort the whole sequence in ascending order.
    fn sort(&self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }
}
