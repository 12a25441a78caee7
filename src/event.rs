//! Calendar events

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::id::ItemId;

/// The colour category an event is filed under.
///
/// Documents may contain category strings this build does not know; those are treated as
/// the theme accent, both when loading and when importing calendars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Green,
    Red,
    Blue,
    Pink,
    Purple,
    Accent,
}

/// Used to support serde: unknown category strings are not an error, they are the accent
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Category, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Category::from(raw.as_str()))
    }
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Green => "green",
            Category::Red => "red",
            Category::Blue => "blue",
            Category::Pink => "pink",
            Category::Purple => "purple",
            Category::Accent => "accent",
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        match raw {
            "green" => Category::Green,
            "red" => Category::Red,
            "blue" => Category::Blue,
            "pink" => Category::Pink,
            "purple" => Category::Purple,
            _ => Category::Accent,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Accent
    }
}

/// A date-only calendar event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: ItemId,
    date: NaiveDate,
    category: Category,
    title: String,
}

impl Event {
    /// Create a brand new event. This picks a new (random) id.
    pub fn new(date: NaiveDate, category: Category, title: String) -> Self {
        Self {
            id: ItemId::random(),
            date,
            category,
            title,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
