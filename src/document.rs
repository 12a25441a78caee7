//! The persisted document root

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::bucket::BucketItem;
use crate::event::Event;
use crate::memory::Memory;
use crate::message::Message;
use crate::migration;
use crate::profile::Profile;
use crate::task::Task;

/// Everything one local session stores: a single record holding every collection plus the
/// profile. There is exactly one in-memory copy, owned by the [`Store`](crate::Store), and
/// persistence always writes the whole document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Schema this document was written at; see [`migration`](crate::migration)
    pub(crate) schema_version: u32,
    pub(crate) events: Vec<Event>,
    pub(crate) messages: Vec<Message>,
    pub(crate) memories: Vec<Memory>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) bucket_list: Vec<BucketItem>,
    pub(crate) profile: Profile,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            schema_version: migration::SCHEMA_VERSION,
            events: Vec::new(),
            messages: Vec::new(),
            memories: Vec::new(),
            tasks: Vec::new(),
            bucket_list: Vec::new(),
            profile: Profile::default(),
        }
    }
}

impl Document {
    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn memories(&self) -> &[Memory] {
        &self.memories
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn bucket_list(&self) -> &[BucketItem] {
        &self.bucket_list
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The dashboard tallies: collection sizes, plus open tasks due within the next 24 hours
    /// (overdue included)
    pub fn dashboard_counts(&self, now: NaiveDateTime) -> DashboardCounts {
        let window = Duration::hours(24);
        DashboardCounts {
            events: self.events.len(),
            messages: self.messages.len(),
            memories: self.memories.len(),
            tasks: self.tasks.len(),
            reminders_due_soon: self
                .tasks
                .iter()
                .filter(|task| task.is_due_soon(now, window))
                .count(),
        }
    }
}

/// Tallies shown on the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardCounts {
    pub events: usize,
    pub messages: usize,
    pub memories: usize,
    pub tasks: usize,
    pub reminders_due_soon: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn dashboard_counts_tally_reminders() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        let mut doc = Document::default();
        doc.tasks.push(Task::new(
            String::from("due soon"),
            now.checked_add_signed(Duration::hours(2)),
        ));
        doc.tasks.push(Task::new(
            String::from("due next month"),
            now.checked_add_signed(Duration::days(30)),
        ));
        doc.tasks.push(Task::new(String::from("no due date"), None));

        let counts = doc.dashboard_counts(now);
        assert_eq!(counts.tasks, 3);
        assert_eq!(counts.reminders_due_soon, 1);
        assert_eq!(counts.events, 0);
    }
}
