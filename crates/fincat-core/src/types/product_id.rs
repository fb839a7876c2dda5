//! Product identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Minimum id length in characters.
pub const MIN_ID_LENGTH: usize = 3;
/// Maximum id length in characters.
pub const MAX_ID_LENGTH: usize = 10;

/// A validated product identifier.
///
/// Ids are user-chosen, 3 to 10 characters long, and immutable once a
/// product is created. Uniqueness is a catalog-level property checked
/// against the backend, not enforced here.
///
/// # Example
///
/// ```
/// use fincat_core::ProductId;
///
/// let id = ProductId::new("trj-crd").unwrap();
/// assert_eq!(id.as_str(), "trj-crd");
///
/// assert!(ProductId::new("ab").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product id from a string, validating its length.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not 3 to 10 characters long.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DomainError> {
        let s = s.as_ref();
        let length = s.chars().count();
        if length < MIN_ID_LENGTH || length > MAX_ID_LENGTH {
            return Err(DomainError::new(format!(
                "Invalid product id '{s}': must be between {MIN_ID_LENGTH} and {MAX_ID_LENGTH} characters."
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ProductId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ProductId::new(&s).map_err(serde::de::Error::custom)
    }
}
