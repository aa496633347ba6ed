//! Builder pattern for striped list construction.
//!
//! # Design Philosophy
//!
//! ## Type-State Pattern
//!
//! The builder starts in the `Initial` state and only gains `build()` once
//! the initial capacity is known. Forgetting it is a compile error rather
//! than a silently defaulted list.
//!
//! ## Error Handling
//!
//! - **Compile-time errors**: missing initial capacity
//! - **Runtime errors**: out-of-range policy values, oversized or
//!   inconsistent seeds
//!
//! # Examples
//!
//! ```
//! use stripelist::builder::StripedListBuilder;
//! use stripelist::Partition;
//!
//! let list = StripedListBuilder::new()
//!     .initial_capacity(1_000)
//!     .partition(Partition::Small)
//!     .seed(vec!["a", "b"])
//!     .build()
//!     .unwrap();
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.stripe_count(), 2);
//! ```
//!
//! # Parameters
//!
//! | Parameter | Required | Default |
//! |-----------|----------|---------|
//! | `initial_capacity` | yes | |
//! | `partition` | no | `Partition::Medium` (1024) |
//! | `growth_factor` | no | golden ratio |
//! | `load_thresholds` | no | 0.25 / 0.75 |
//! | `capacity_limit` | no | unbounded |
//! | `min_capacity` | no | initial capacity |
//! | `seed` / `seed_from` | no | empty |

#![allow(clippy::module_name_repetitions)]

pub mod list;

pub use list::{Complete, Initial, StripedListBuilder};

/// Parameter validation helpers shared by builders.
mod validation {
    use crate::error::{Result, StripeListError};

    /// Validate that a seed fits in the initial allocation.
    #[inline]
    pub fn validate_seed(seed_len: usize, initial_capacity: usize) -> Result<()> {
        if seed_len > initial_capacity {
            return Err(StripeListError::capacity_exceeded(initial_capacity, seed_len));
        }
        Ok(())
    }

}

/// Convenient re-exports of all builders.
pub mod prelude {
    pub use super::StripedListBuilder;
}
