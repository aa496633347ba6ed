//! Builder for striped lists.
//!
//! # Type-State Pattern
//!
//! ```text
//! Initial → Complete → StripedList
//!     ↓          ↓
//!   .initial_capacity()  .build()
//! ```
//!
//! Every other parameter is optional and may be set in either state.
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use stripelist::builder::StripedListBuilder;
//!
//! let list = StripedListBuilder::<u64>::new()
//!     .initial_capacity(10_000)
//!     .build()?;
//! assert_eq!(list.max_capacity(), 10_000);
//! # Ok::<(), stripelist::StripeListError>(())
//! ```
//!
//! ## Full Configuration
//!
//! ```
//! use stripelist::builder::StripedListBuilder;
//! use stripelist::Partition;
//!
//! let list = StripedListBuilder::new()
//!     .partition(Partition::Custom(64))
//!     .initial_capacity(256)
//!     .growth_factor(2.0)
//!     .load_thresholds(0.2, 0.9)
//!     .capacity_limit(4_096)
//!     .min_capacity(64)
//!     .seed(vec![3, 1, 2])
//!     .build()?;
//! assert_eq!(list.to_vec(), vec![3, 1, 2]);
//! assert_eq!(list.stripe_count(), 4);
//! # Ok::<(), stripelist::StripeListError>(())
//! ```

use crate::core::params::{ListConfig, Partition, DEFAULT_HIGH_WATER, DEFAULT_LOW_WATER, GOLDEN_RATIO};
use crate::core::sequence::SharedSequence;
use crate::error::Result;
use crate::sync::{extract_checked, StripedList};
use std::marker::PhantomData;

/// Type-state marker: initial capacity not yet set.
pub struct Initial;

/// Type-state marker: all required parameters set.
pub struct Complete;

/// Builder for [`StripedList`] with type-state guarantees.
pub struct StripedListBuilder<T, State = Initial> {
    initial_capacity: usize,
    partition: Partition,
    growth_factor: f64,
    low_water: f64,
    high_water: f64,
    capacity_limit: Option<usize>,
    min_capacity: Option<usize>,
    seed: Option<Result<Vec<T>>>,
    _state: PhantomData<State>,
}

impl<T> StripedListBuilder<T, Initial> {
    /// Create a builder with default policy parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial_capacity: 0,
            partition: Partition::default(),
            growth_factor: GOLDEN_RATIO,
            low_water: DEFAULT_LOW_WATER,
            high_water: DEFAULT_HIGH_WATER,
            capacity_limit: None,
            min_capacity: None,
            seed: None,
            _state: PhantomData,
        }
    }

    /// Set the capacity allocated at construction.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Initial slot count (must be > 0 and at least the seed
    ///   length)
    #[must_use]
    pub fn initial_capacity(self, capacity: usize) -> StripedListBuilder<T, Complete> {
        StripedListBuilder {
            initial_capacity: capacity,
            partition: self.partition,
            growth_factor: self.growth_factor,
            low_water: self.low_water,
            high_water: self.high_water,
            capacity_limit: self.capacity_limit,
            min_capacity: self.min_capacity,
            seed: self.seed,
            _state: PhantomData,
        }
    }
}

impl<T, State> StripedListBuilder<T, State> {
    /// Set the stripe partition size. Default is [`Partition::Medium`].
    #[must_use]
    pub fn partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }

    /// Set the capacity multiplier applied on growth.
    ///
    /// # Arguments
    ///
    /// * `factor` - Growth factor (must be > 1.0 and <= 10.0). Default is the
    ///   golden ratio.
    #[must_use]
    pub fn growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Set the load factors that trigger shrink and growth.
    ///
    /// # Arguments
    ///
    /// * `low` - Shrink below this load (default 0.25)
    /// * `high` - Grow above this load (default 0.75)
    #[must_use]
    pub fn load_thresholds(mut self, low: f64, high: f64) -> Self {
        self.low_water = low;
        self.high_water = high;
        self
    }

    /// Cap the capacity. Appends past it fail with `CapacityExceeded`.
    #[must_use]
    pub fn capacity_limit(mut self, limit: usize) -> Self {
        self.capacity_limit = Some(limit);
        self
    }

    /// Set the capacity automatic shrinking never goes below. Defaults to the
    /// initial capacity.
    #[must_use]
    pub fn min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = Some(min_capacity);
        self
    }

    /// Start the list with `items`, in order.
    #[must_use]
    pub fn seed(mut self, items: Vec<T>) -> Self {
        self.seed = Some(Ok(items));
        self
    }

    /// Start the list with a copy of another sequence.
    ///
    /// Extraction problems (an empty source, or one whose reported length
    /// disagrees with what it yields) surface from `build`.
    #[must_use]
    pub fn seed_from<S>(mut self, source: &S) -> Self
    where
        S: SharedSequence<T> + ?Sized,
    {
        self.seed = Some(extract_checked(source, "seed_from"));
        self
    }
}

impl<T> StripedListBuilder<T, Complete> {
    /// Build the list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` for inconsistent parameters,
    /// `CapacityExceeded` if the seed is larger than the initial capacity,
    /// or the error recorded by [`seed_from`](Self::seed_from).
    pub fn build(self) -> Result<StripedList<T>> {
        let config = self.config();
        config.validate()?;

        let seed = self.seed.transpose()?.unwrap_or_default();
        super::validation::validate_seed(seed.len(), config.initial_capacity)?;

        let list = StripedList::from_parts(config, seed)?;

        #[cfg(feature = "trace")]
        tracing::debug!(
            capacity = list.max_capacity(),
            partition = list.partition(),
            len = list.len(),
            "StripedListBuilder::build"
        );

        Ok(list)
    }

    /// Configuration `build` would use.
    #[must_use]
    pub fn config(&self) -> ListConfig {
        ListConfig {
            partition: self.partition,
            initial_capacity: self.initial_capacity,
            growth_factor: self.growth_factor,
            high_water: self.high_water,
            low_water: self.low_water,
            capacity_limit: self.capacity_limit,
            min_capacity: self.min_capacity.unwrap_or(self.initial_capacity),
        }
    }
}

impl<T> Default for StripedListBuilder<T, Initial> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StripedList<T> {
    /// Start building a list.
    ///
    /// # Examples
    ///
    /// ```
    /// use stripelist::StripedList;
    ///
    /// let list = StripedList::<i32>::builder().initial_capacity(64).build()?;
    /// assert!(list.is_empty());
    /// # Ok::<(), stripelist::StripeListError>(())
    /// ```
    #[must_use]
    pub fn builder() -> StripedListBuilder<T, Initial> {
        StripedListBuilder::new()
    }
}
