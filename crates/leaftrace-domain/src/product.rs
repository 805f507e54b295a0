//! Product identifier module

use serde::{Deserialize, Serialize};
use std::fmt;

/// The opaque identifier carried by a scanned product code.
///
/// A `ProductId` is whatever the scan intake normalized the raw code to.
/// It is never parsed for meaning; the only derivation made from it is the
/// displayed batch number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an already-normalized identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the displayed batch number: a fixed prefix plus the trailing
    /// eight characters of the identifier (the whole identifier when it is
    /// shorter than eight).
    ///
    /// # Examples
    ///
    /// ```
    /// use leaftrace_domain::ProductId;
    ///
    /// assert_eq!(ProductId::new("BT123456").batch_number(), "BATCH-BT123456");
    /// assert_eq!(ProductId::new("camerabatch789").batch_number(), "BATCH-batch789");
    /// ```
    pub fn batch_number(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let start = chars.len().saturating_sub(8);
        let suffix: String = chars[start..].iter().collect();
        format!("BATCH-{}", suffix)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
