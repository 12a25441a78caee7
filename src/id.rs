//! Identifiers for journal records

use std::fmt::{Display, Formatter};

use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A unique identifier for a journal record (event, message, memory, task, bucket-list item).
///
/// Identity is deliberately decoupled from creation time: new identifiers are random UUIDs.
/// Documents written by older versions of the product used millisecond timestamps as ids;
/// those deserialize as their decimal text form and stay stable from then on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemId {
    content: String,
}

impl ItemId {
    /// Generate a random ItemId.
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for ItemId {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}

/// Used to support serde. Accepts the integer ids found in legacy documents.
impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<ItemId, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = ItemId;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a string or an integer identifier")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<ItemId, E> {
                Ok(ItemId::from(v.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<ItemId, E> {
                Ok(ItemId::from(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<ItemId, E> {
                Ok(ItemId::from(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<ItemId, E> {
                Ok(ItemId::from(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
