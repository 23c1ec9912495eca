//! Flipbook link type.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PassError;

/// A non-empty, trimmed URL pointing at an externally hosted flipbook.
///
/// No URL syntax is checked; any non-blank string is accepted.
///
/// ```
/// use birthday_pass_core::FlipbookLink;
///
/// let link = FlipbookLink::parse("  https://heyzine.com/flip-book/abc  ").unwrap();
/// assert_eq!(link.as_str(), "https://heyzine.com/flip-book/abc");
///
/// assert!(FlipbookLink::parse("").is_err());
/// assert!(FlipbookLink::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FlipbookLink(String);

impl FlipbookLink {
    /// Parse a link, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PassError::EmptyLink`] if nothing is left after trimming.
    pub fn parse(s: &str) -> Result<Self, PassError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PassError::EmptyLink);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the link as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlipbookLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FlipbookLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
