//! Bucket-list items

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// One thing the couple wants to do together someday
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BucketItem {
    id: ItemId,
    item: String,
}

impl BucketItem {
    pub fn new(item: String) -> Self {
        Self {
            id: ItemId::random(),
            item,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn item(&self) -> &str {
        &self.item
    }
}
