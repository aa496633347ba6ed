//! Capacity planning for striped lists.
//!
//! All sizing decisions live here as pure functions so that growth and
//! shrink behaviour can be tested without building a list.
//!
//! # Growth Policy
//!
//! Given:
//! - `c`: current capacity (total allocated slots)
//! - `n`: number of live elements
//! - `φ`: growth factor (golden ratio by default)
//!
//! The list grows when `n / c > high_water` to
//! `max(⌊c × φ⌋, c + 1)` and shrinks when `n / c < low_water` to
//! `max(⌊c / φ⌋, n, min_capacity)`.
//!
//! The slots added by a growth step first extend the tail stripe up to the
//! partition size; the remainder spills into new stripes of at most
//! `partition` slots each.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{Result, StripeListError};

/// The golden ratio, default growth factor.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Default load factor above which the list grows.
pub const DEFAULT_HIGH_WATER: f64 = 0.75;

/// Default load factor below which the list shrinks.
pub const DEFAULT_LOW_WATER: f64 = 0.25;

/// Default initial capacity for [`StripedList::new`](crate::StripedList::new).
pub const DEFAULT_CAPACITY: usize = 16;

/// Upper bound on the growth factor.
pub const MAX_GROWTH_FACTOR: f64 = 10.0;

/// Maximum element count per stripe.
///
/// Larger partitions mean fewer locks and cheaper bulk copies; smaller ones
/// mean less contention and shorter cascades on middle insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Partition {
    /// 512 elements per stripe.
    Small,
    /// 1024 elements per stripe.
    #[default]
    Medium,
    /// 2048 elements per stripe.
    Large,
    /// Any positive element count per stripe.
    Custom(usize),
}

impl Partition {
    /// Element count per stripe.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Small => 512,
            Self::Medium => 1024,
            Self::Large => 2048,
            Self::Custom(n) => n,
        }
    }
}

/// Immutable configuration of a striped list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListConfig {
    /// Stripe partition size.
    pub partition: Partition,
    /// Capacity allocated at construction.
    pub initial_capacity: usize,
    /// Multiplier applied to capacity on growth.
    pub growth_factor: f64,
    /// Load factor above which the list grows.
    pub high_water: f64,
    /// Load factor below which the list shrinks.
    pub low_water: f64,
    /// Hard upper bound on capacity; `None` means unbounded.
    pub capacity_limit: Option<usize>,
    /// Capacity the shrink policy never goes below.
    pub min_capacity: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ListConfig {
    /// Default configuration with the given initial capacity.
    #[must_use]
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            partition: Partition::default(),
            initial_capacity,
            growth_factor: GOLDEN_RATIO,
            high_water: DEFAULT_HIGH_WATER,
            low_water: DEFAULT_LOW_WATER,
            capacity_limit: None,
            min_capacity: initial_capacity,
        }
    }

    /// Check every field for consistency.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` describing the first violated rule.
    pub fn validate(&self) -> Result<()> {
        if self.partition.size() == 0 {
            return Err(StripeListError::invalid_parameters("partition must be greater than 0"));
        }
        if self.initial_capacity == 0 {
            return Err(StripeListError::invalid_parameters(
                "initial capacity must be greater than 0",
            ));
        }
        if !(self.growth_factor > 1.0) {
            return Err(StripeListError::invalid_parameters(format!(
                "growth factor {} must be > 1.0",
                self.growth_factor
            )));
        }
        if self.growth_factor > MAX_GROWTH_FACTOR {
            return Err(StripeListError::invalid_parameters(format!(
                "growth factor {} exceeds reasonable limit ({})",
                self.growth_factor, MAX_GROWTH_FACTOR
            )));
        }
        if !(self.low_water >= 0.0 && self.low_water < self.high_water && self.high_water <= 1.0) {
            return Err(StripeListError::invalid_parameters(format!(
                "load thresholds must satisfy 0 <= low ({}) < high ({}) <= 1",
                self.low_water, self.high_water
            )));
        }
        if self.low_water * self.growth_factor >= self.high_water {
            return Err(StripeListError::invalid_parameters(format!(
                "low water {} times growth factor {} must stay below high water {}",
                self.low_water, self.growth_factor, self.high_water
            )));
        }
        if let Some(limit) = self.capacity_limit {
            if limit < self.initial_capacity {
                return Err(StripeListError::invalid_parameters(format!(
                    "capacity limit {} is below initial capacity {}",
                    limit, self.initial_capacity
                )));
            }
        }
        if self.min_capacity == 0 || self.min_capacity > self.initial_capacity {
            return Err(StripeListError::invalid_parameters(format!(
                "minimum capacity {} must be in [1, {}]",
                self.min_capacity, self.initial_capacity
            )));
        }
        Ok(())
    }

    /// Largest capacity the list may reach.
    #[inline]
    #[must_use]
    pub fn limit(&self) -> usize {
        self.capacity_limit.unwrap_or(usize::MAX)
    }
}

/// Ratio of live elements to allocated slots.
#[inline]
#[must_use]
pub fn load_factor(len: usize, capacity: usize) -> f64 {
    if capacity == 0 {
        return 1.0;
    }
    len as f64 / capacity as f64
}

/// Capacity after one growth step, clamped to `limit`.
///
/// Always makes progress (at least one slot) unless `capacity >= limit`.
#[must_use]
pub fn grown_capacity(capacity: usize, factor: f64, limit: usize) -> usize {
    let scaled = (capacity as f64 * factor).floor();
    let scaled = if scaled >= usize::MAX as f64 {
        usize::MAX
    } else {
        scaled as usize
    };
    scaled.max(capacity.saturating_add(1)).min(limit).max(capacity)
}

/// Capacity after one shrink step.
#[must_use]
pub fn shrunk_capacity(capacity: usize, factor: f64, len: usize, min_capacity: usize) -> usize {
    let scaled = (capacity as f64 / factor).floor() as usize;
    scaled.max(len).max(min_capacity).min(capacity)
}

/// Slot counts of the stripes covering `capacity` slots.
///
/// Every stripe but the last holds exactly `partition` slots; the result is
/// never empty.
#[must_use]
pub fn stripe_layout(capacity: usize, partition: usize) -> Vec<usize> {
    let mut layout = Vec::with_capacity(capacity / partition + 1);
    let mut remaining = capacity;
    while remaining > 0 {
        let take = remaining.min(partition);
        layout.push(take);
        remaining -= take;
    }
    if layout.is_empty() {
        layout.push(0);
    }
    layout
}

/// Placement of a capacity increase onto an existing chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthPlan {
    /// Slots added to the current tail stripe.
    pub tail_extension: usize,
    /// Slot counts of the stripes to append.
    pub new_stripes: Vec<usize>,
}

/// Split `delta` new slots between the tail stripe and new stripes.
#[must_use]
pub fn plan_growth(delta: usize, tail_slots: usize, partition: usize) -> GrowthPlan {
    let tail_extension = delta.min(partition.saturating_sub(tail_slots));
    let new_stripes = stripe_layout(delta - tail_extension, partition)
        .into_iter()
        .filter(|&slots| slots > 0)
        .collect();
    GrowthPlan {
        tail_extension,
        new_stripes,
    }
}
