//! StripeList: a growable, randomly-accessible sequence with per-stripe
//! reader/writer locking.
//!
//! A [`StripedList`] stores its elements in a chain of fixed-size stripes,
//! each guarded by its own `RwLock`. Index `i` always lives in stripe
//! `i / partition` at offset `i % partition`, so random access is O(1) and
//! touches exactly one lock. Operations on different stripes run in
//! parallel; only growth and shrink take the whole chain exclusively.
//!
//! # Quick Start
//!
//! ```
//! use stripelist::StripedList;
//!
//! let list = StripedList::new();
//! list.add("hello")?;
//! list.add("world")?;
//! list.insert(1, "striped")?;
//!
//! assert_eq!(list.get(1)?, "striped");
//! assert_eq!(list.to_vec(), vec!["hello", "striped", "world"]);
//! # Ok::<(), stripelist::StripeListError>(())
//! ```
//!
//! # Sharing Across Threads
//!
//! Every method takes `&self`; wrap the list in an `Arc` and share it:
//!
//! ```
//! use stripelist::StripedList;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let list = Arc::new(StripedList::<u32>::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let list = Arc::clone(&list);
//!         thread::spawn(move || {
//!             for i in 0..250 {
//!                 list.add(t * 1000 + i).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//! assert_eq!(list.len(), 1000);
//! ```
//!
//! # Using Builders
//!
//! ```
//! use stripelist::{Partition, StripedList};
//!
//! let list = StripedList::builder()
//!     .initial_capacity(4_096)
//!     .partition(Partition::Small)
//!     .capacity_limit(65_536)
//!     .seed(vec![5, 3, 9, 1])
//!     .build()?;
//!
//! list.sort();
//! assert_eq!(list.to_vec(), vec![1, 3, 5, 9]);
//! # Ok::<(), stripelist::StripeListError>(())
//! ```
//!
//! # Buffered Appends
//!
//! [`StripedList::offer`] stages elements in a write buffer and commits them
//! a partition at a time. Staged elements are invisible to `len` and `get`
//! until flushed; whole-list operations (`to_vec`, iteration, sorting, bulk
//! adds) flush first.
//!
//! ```
//! use stripelist::StripedList;
//!
//! let list = StripedList::new();
//! for i in 0..10 {
//!     list.offer(i)?;
//! }
//! assert_eq!(list.len(), 0);
//! list.flush()?;
//! assert_eq!(list.len(), 10);
//! # Ok::<(), stripelist::StripeListError>(())
//! ```
//!
//! # Iteration
//!
//! | Method | Type | Behaviour under concurrent writes |
//! |--------|------|-----------------------------------|
//! | [`StripedList::iter`] | [`SnapshotIter`] | sees the list as of creation |
//! | [`StripedList::concurrent_iter`] | [`ConcurrentIter`] | fails with `ConcurrentModification` |
//!
//! # Features
//!
//! ## Core Features (always enabled)
//!
//! - Striped storage with golden-ratio growth and load-based shrink
//! - Write buffer, bulk operations, range queries
//! - Adaptive dual-pivot stripe sort with run merging
//!
//! ## Optional Features
//!
//! - `trace` (default): `tracing` events for grow, shrink, flush and sort
//! - `metrics`: per-stripe lock acquisition counters
//! - `serde`: `Serialize`/`Deserialize` for lists and configuration
//! - `rayon`: [`StripedList::par_sort_stripes_by`]
//!
//! # Unsafe Code Policy
//!
//! The crate contains no `unsafe` code.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::len_zero)]
#![allow(clippy::bool_assert_comparison)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/stripelist/0.1.0")]

/// Core traits and capacity planning
pub mod core;

/// Error types and result aliases
pub mod error;

/// Stripe-local sorting algorithms
pub mod sort;

/// The striped list and its stripes
pub mod sync;

/// Snapshot and live iterators
pub mod iter;

/// Type-safe builder
pub mod builder;

/// Serialization support (requires `serde` feature)
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde_support;

pub use error::{Result, StripeListError};

pub use core::params::{ListConfig, Partition};
pub use core::sequence::{Growable, SharedSequence, SortableSequence};

pub use builder::StripedListBuilder;
pub use iter::{ConcurrentIter, SnapshotIter};
pub use sync::StripedList;

#[cfg(feature = "metrics")]
pub use sync::StripeStats;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use stripelist::prelude::*;
///
/// let list: StripedList<u8> = StripedList::new();
/// Growable::grow(&list).unwrap();
/// assert!(list.max_capacity() > 16);
/// ```
pub mod prelude {
    pub use crate::builder::StripedListBuilder;
    pub use crate::core::params::{ListConfig, Partition};
    pub use crate::core::sequence::{Growable, SharedSequence, SortableSequence};
    pub use crate::error::{Result, StripeListError};
    pub use crate::iter::{ConcurrentIter, SnapshotIter};
    pub use crate::sync::StripedList;

    #[cfg(feature = "metrics")]
    pub use crate::sync::StripeStats;
}
