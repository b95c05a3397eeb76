//! Domain types for section generation with strong typing.
//!
//! This module provides type-safe wrappers and domain primitives for the
//! generation subsystem. It follows the Newtype pattern to keep record
//! identifiers from mixing with other strings.

pub mod classifier;
pub mod sections;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a stored generation record.
///
/// Record ids are assigned by the persistence layer at insert time and are
/// opaque to callers; clients never supply one. The newtype provides full
/// trait coverage per C-COMMON-TRAITS and C-NEWTYPE.
///
/// # Examples
///
/// ```rust
/// use sitedraft::domain::RecordId;
///
/// let id = RecordId::new("3f8a2c");
/// assert_eq!(id.as_str(), "3f8a2c");
/// assert_eq!(id.to_string(), "3f8a2c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a `RecordId` from an existing identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mints a fresh random identifier (UUID v4, text form).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the underlying `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_conversions() {
        let id = RecordId::new("abc-123");
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(String::from(id.clone()), "abc-123");
        assert_eq!(RecordId::from("abc-123"), id);
    }

    #[test]
    fn record_id_equality() {
        let id1 = RecordId::new("a");
        let id2 = RecordId::new("a");
        let id3 = RecordId::new("b");
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn generated_ids_are_distinct() {
        let id1 = RecordId::generate();
        let id2 = RecordId::generate();
        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn record_id_serialization() {
        let id = RecordId::new("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");
        let deserialized: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }
}
