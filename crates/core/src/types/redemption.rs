//! Redemption records and the persisted redemption state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::pass::PassId;

/// Marks when a pass was redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedemptionRecord {
    /// Milliseconds since the Unix epoch.
    pub date: i64,
}

impl RedemptionRecord {
    /// Create a record stamped at `date` milliseconds since the epoch.
    #[must_use]
    pub const fn new(date: i64) -> Self {
        Self { date }
    }

    /// The redemption time, or `None` if the stored value is out of range.
    #[must_use]
    pub fn redeemed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date)
    }
}

/// Which passes have been redeemed, keyed by pass ID.
///
/// Persisted as `{ "redeemed": { "<passId>": { "date": <ms> } } }`.
/// Entries that do not hold a valid record are skipped on load; the rest
/// are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RedemptionState {
    /// Redemption records; absent means available.
    #[serde(default, deserialize_with = "deserialize_records")]
    pub redeemed: BTreeMap<PassId, RedemptionRecord>,
}

fn deserialize_records<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<PassId, RedemptionRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<PassId, serde_json::Value>::deserialize(deserializer)?;
    let mut records = BTreeMap::new();
    for (id, value) in raw {
        match serde_json::from_value::<RedemptionRecord>(value) {
            Ok(record) => {
                records.insert(id, record);
            }
            Err(e) => {
                tracing::warn!(pass_id = %id, error = %e, "Ignoring malformed redemption record");
            }
        }
    }
    Ok(records)
}

impl RedemptionState {
    /// An empty state with every pass available.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The record for `id`, if it has been redeemed.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RedemptionRecord> {
        self.redeemed.get(id)
    }

    /// Whether a record exists for `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.redeemed.contains_key(id)
    }

    /// Number of redeemed passes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.redeemed.len()
    }

    /// Whether no pass has been redeemed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.redeemed.is_empty()
    }
}
