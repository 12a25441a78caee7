//! The couple's profile

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Names, photos and the relationship start date.
///
/// Every field is optional in practice: a fresh document carries an empty profile, and the
/// UI overwrites the whole record when the profile form is submitted.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub my_name: String,
    pub partner_name: String,
    /// Photo payloads are kept as the opaque data-URL text the UI recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_photo: Option<String>,
    pub start_date: Option<NaiveDate>,
}

impl Profile {
    /// Whole days the couple has been together as of `today`, once a start date is set
    pub fn days_together(&self, today: NaiveDate) -> Option<i64> {
        self.start_date.map(|start| (today - start).num_days())
    }
}
