//! Typed identifier for restaurants, backed by a UUID.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a [`Restaurant`](crate::restaurant::Restaurant).
///
/// Serialized as the canonical hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(uuid::Uuid);

impl Default for RestaurantId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl RestaurantId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a client-supplied identifier, mapping format errors to a
    /// [`ValidationError::InvalidId`] so callers can reject it before
    /// touching storage.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when `value` is not a UUID.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        value
            .parse()
            .map_err(|_| ValidationError::InvalidId(value.to_string()))
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RestaurantId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        assert_ne!(RestaurantId::new(), RestaurantId::new());
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = RestaurantId::new();
        let parsed: RestaurantId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = RestaurantId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }

    #[test]
    fn should_reject_malformed_id_with_validation_error() {
        let result = RestaurantId::parse("64b7f0c2e4b0a1a2b3c4d5e6");
        assert_eq!(
            result,
            Err(ValidationError::InvalidId(
                "64b7f0c2e4b0a1a2b3c4d5e6".to_string()
            ))
        );
    }
}
