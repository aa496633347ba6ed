//! Core traits and capacity planning.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── sequence.rs  - SharedSequence, Growable, SortableSequence
//! ├── params.rs    - Partition presets, ListConfig, growth/shrink math
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Concurrency Architecture
//!
//! Every trait method takes `&self`. Containers synchronize internally, so
//! `Arc<StripedList<T>>` is shared across threads directly:
//!
//! ```
//! use stripelist::core::SharedSequence;
//! use stripelist::StripedList;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let list = Arc::new(StripedList::<u64>::new());
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let list = Arc::clone(&list);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             SharedSequence::add(&*list, t * 100 + i).unwrap();
//!         }
//!     })
//! }).collect();
//!
//! for h in handles { h.join().unwrap(); }
//! assert_eq!(list.len(), 400);
//! ```

pub mod params;
pub mod sequence;

pub use params::{ListConfig, Partition, GOLDEN_RATIO};
pub use sequence::{Growable, SharedSequence, SortableSequence};
