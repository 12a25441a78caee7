//! Photo and text memories

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// A moment kept for later: a photo, a note, or both, plus free-form tags
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    id: ItemId,
    /// Photo payload, kept as the opaque data-URL text the UI recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    timestamp: DateTime<Utc>,
    tags: Vec<String>,
}

impl Memory {
    pub fn new(
        image: Option<String>,
        text: Option<String>,
        timestamp: DateTime<Utc>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: ItemId::random(),
            image,
            text,
            timestamp,
            tags,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Split a raw comma-separated tag line into clean tags, dropping empties ("a, b," gives ["a", "b"])
pub fn parse_tag_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
