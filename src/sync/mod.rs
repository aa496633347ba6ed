//! Lock-striped storage.
//!
//! # Module Organization
//!
//! - [`StripedList`]: the list itself, a chain of stripes plus bookkeeping
//! - `stripe`: one fixed-capacity slot array behind its own `RwLock`
//! - `buffer`: the staging area behind [`StripedList::offer`]
//!
//! # Concurrency Model
//!
//! All list methods take `&self`. Element operations share the layout lock
//! and write-lock only the stripes they touch, so appends at the tail and
//! reads near the head proceed in parallel. Growth and shrink take the
//! layout lock exclusively and are rare by construction: capacity grows by
//! the golden ratio.
//!
//! | Pattern | Contention |
//! |---------|------------|
//! | many readers, any positions | none (shared locks) |
//! | appends from many threads | end stripe only |
//! | inserts near the head | owning..end stripes |
//! | `offer` from many threads | buffer mutex, one lock per partition of items |
//!
//! # Safety
//!
//! No `unsafe`. Every stripe is `#[repr(align(64))]` so neighbouring lock
//! words never share a cache line.

mod buffer;
mod stripe;
mod striped;

pub use striped::StripedList;

#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub use stripe::StripeStats;

pub(crate) use striped::extract_checked;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StripedList<u64>>();
        assert_send_sync::<StripedList<Arc<String>>>();
    }

    #[test]
    fn test_shared_through_arc() {
        let list = Arc::new(StripedList::new());
        let writer = {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for i in 0..1_000u32 {
                    list.offer(i).unwrap();
                }
                list.flush().unwrap();
            })
        };
        writer.join().unwrap();
        assert_eq!(list.len(), 1_000);
        assert_eq!(list.to_vec(), (0..1_000).collect::<Vec<_>>());
    }
}
