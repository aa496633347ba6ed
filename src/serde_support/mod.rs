//! Serialization support for striped lists.
//!
//! Available with the `serde` feature:
//!
//! ```toml
//! [dependencies]
//! stripelist = { version = "0.1", features = ["serde"] }
//! ```
//!
//! # Format
//!
//! A list serializes as a struct with:
//! - format version (checked on load)
//! - the list configuration, with `initial_capacity` set to the capacity at
//!   the time of serialization
//! - the elements in index order
//!
//! The stripe layout is not stored. It is a pure function of capacity and
//! partition, so a deserialized list has the same stripe count and
//! occupancy as the original.
//!
//! Staged `offer`s are flushed before the elements are read.
//!
//! # Examples
//!
//! ```
//! use stripelist::{Partition, StripedList};
//!
//! let list = StripedList::with_partition(8, Partition::Custom(4))?;
//! list.extend_from_slice(&[1, 2, 3, 4, 5])?;
//!
//! let json = serde_json::to_string(&list).unwrap();
//! let restored: StripedList<i32> = serde_json::from_str(&json).unwrap();
//!
//! assert!(restored.equals(&list));
//! assert_eq!(restored.stripe_occupancy(), list.stripe_occupancy());
//! # Ok::<(), stripelist::StripeListError>(())
//! ```

use crate::core::params::ListConfig;
use crate::sync::StripedList;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialization format version.
///
/// Increment this when making breaking changes to the format.
pub const SERIALIZATION_VERSION: u16 = 1;

#[derive(Serialize)]
struct ListRef<'a, T> {
    version: u16,
    config: ListConfig,
    items: &'a [T],
}

#[derive(Deserialize)]
struct ListOwned<T> {
    version: u16,
    config: ListConfig,
    items: Vec<T>,
}

impl<T> Serialize for StripedList<T>
where
    T: Clone + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let items = self.to_vec();
        ListRef {
            version: SERIALIZATION_VERSION,
            config: self.carried_config(items.len()),
            items: &items,
        }
        .serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for StripedList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let data = ListOwned::<T>::deserialize(deserializer)?;

        if data.version != SERIALIZATION_VERSION {
            return Err(D::Error::custom(format!(
                "Unsupported serialization version: expected {}, got {}",
                SERIALIZATION_VERSION, data.version
            )));
        }

        StripedList::from_parts(data.config, data.items)
            .map_err(|e| D::Error::custom(format!("Failed to reconstruct list: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::Partition;

    #[test]
    fn test_json_roundtrip_keeps_layout() {
        let list = StripedList::with_partition(6, Partition::Custom(4)).unwrap();
        list.extend_from_slice(&[10, 20, 30, 40, 50]).unwrap();

        let json = serde_json::to_string(&list).unwrap();
        let restored: StripedList<i32> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.to_vec(), vec![10, 20, 30, 40, 50]);
        assert_eq!(restored.max_capacity(), list.max_capacity());
        assert_eq!(restored.stripe_count(), list.stripe_count());
        assert_eq!(restored.config().partition, Partition::Custom(4));
    }

    #[test]
    fn test_buffered_items_are_serialized() {
        let list = StripedList::new();
        list.offer("a".to_string()).unwrap();
        list.offer("b".to_string()).unwrap();

        let json = serde_json::to_string(&list).unwrap();
        let restored: StripedList<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let list: StripedList<u8> = StripedList::new();
        let json = serde_json::to_string(&list)
            .unwrap()
            .replacen("\"version\":1", "\"version\":99", 1);
        let result: std::result::Result<StripedList<u8>, _> = serde_json::from_str(&json);
        assert!(result.unwrap_err().to_string().contains("version"));
    }

    #[test]
    fn test_rejects_oversized_items() {
        let list = StripedList::with_capacity(2).unwrap();
        list.add(1u8).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        let json = json.replacen("[1]", "[1,2,3]", 1);
        let result: std::result::Result<StripedList<u8>, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
