//! Pass identifiers and catalog entries.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a pass in the catalog (e.g. `food-treat`).
///
/// Serialized as a plain string so it can be used directly as a JSON object
/// key in the persisted redemption state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassId(String);

impl PassId {
    /// Create a new pass ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PassId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PassId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PassId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl core::borrow::Borrow<str> for PassId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A redeemable favor card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    /// Unique identifier within the catalog.
    pub id: PassId,
    /// Display name.
    pub title: String,
    /// Display text.
    pub description: String,
    /// Reference to a display asset. Opaque to the core.
    #[serde(default)]
    pub image: String,
}

impl Pass {
    /// Create a new pass.
    #[must_use]
    pub fn new(
        id: impl Into<PassId>,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}

/// Redemption status of a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PassStatus {
    /// No redemption record exists.
    #[default]
    Available,
    /// A redemption record exists.
    Redeemed,
}

impl fmt::Display for PassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Redeemed => write!(f, "Redeemed"),
        }
    }
}
