//! Errors returned to callers of the core operations.

use thiserror::Error;

/// Invalid input supplied to a controller operation.
///
/// Both variants are the invalid-argument condition: state is left unchanged
/// and nothing is persisted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PassError {
    /// `redeem` was called with an ID that is not in the catalog.
    #[error("unknown pass id: {0}")]
    UnknownPass(String),
    /// A flipbook link was empty or whitespace-only.
    #[error("flipbook link cannot be empty")]
    EmptyLink,
}

impl PassError {
    /// Whether this error was caused by invalid caller input.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::UnknownPass(_) | Self::EmptyLink)
    }
}

/// Errors that can occur when building a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog does not have exactly the expected number of passes.
    #[error("catalog must contain exactly {expected} passes (got {found})")]
    WrongSize {
        /// Required number of passes.
        expected: usize,
        /// Number of passes supplied.
        found: usize,
    },
    /// A pass has an empty ID.
    #[error("pass id cannot be empty")]
    EmptyId,
    /// Two passes share an ID.
    #[error("duplicate pass id: {0}")]
    DuplicateId(String),
    /// The catalog source is not valid JSON.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
