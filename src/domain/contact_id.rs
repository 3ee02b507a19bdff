//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A type-safe wrapper for contact IDs.
///
/// IDs are assigned by the store when a contact is created and never
/// change afterwards. They travel through HTML forms as their hyphenated
/// string form and are parsed back at the boundary.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactId;
///
/// let id = ContactId::generate();
/// let parsed = ContactId::parse(&id.to_string()).unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Generate a fresh random ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the input is blank and
    /// `ValidationError::InvalidId` if it is not a UUID.
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| ValidationError::InvalidId(id.to_string()))
    }
}

impl FromStr for ContactId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
