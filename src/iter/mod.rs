//! Traversal of striped lists.
//!
//! Two protocols with different trade-offs:
//!
//! | Iterator | Sees later writes | Cost | Mutation |
//! |----------|-------------------|------|----------|
//! | [`SnapshotIter`] | never | one full copy up front | none |
//! | [`ConcurrentIter`] | fails on them | one read lock per step | `remove`, `set` |
//!
//! Both flush buffered `offer`s when created.

mod concurrent;
mod snapshot;

pub use concurrent::ConcurrentIter;
pub use snapshot::SnapshotIter;
