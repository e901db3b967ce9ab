//! Domain Layer - Core Entity Trait
//!
//! Every cached entity is keyed by an opaque, server-assigned identifier.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Core trait for all entities held in a local list
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + fmt::Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Opaque identifier assigned by the server.
///
/// Backends disagree on whether ids are numbers or strings, so both are
/// accepted on the wire and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => EntityId(s),
            Raw::Signed(n) => EntityId(n.to_string()),
            Raw::Unsigned(n) => EntityId(n.to_string()),
        })
    }
}

/// Declares a typed id wrapper so project and task ids can never be mixed up.
macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $crate::domain::EntityId);

        impl $name {
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self($crate::domain::EntityId::from(raw))
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self($crate::domain::EntityId::from(raw))
            }
        }
    };
}

pub(crate) use typed_id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let numeric: EntityId = serde_json::from_str("42").unwrap();
        let textual: EntityId = serde_json::from_str(r#""65a1f0c2""#).unwrap();

        assert_eq!(numeric.as_str(), "42");
        assert_eq!(textual.as_str(), "65a1f0c2");
    }

    #[test]
    fn test_id_rejects_other_shapes() {
        assert!(serde_json::from_str::<EntityId>("true").is_err());
        assert!(serde_json::from_str::<EntityId>("null").is_err());
    }
}
