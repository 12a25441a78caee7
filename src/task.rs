//! Shared to-do tasks

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// A task the couple plans to get done, with an optional due date
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: ItemId,
    title: String,
    #[serde(default, with = "due_format", skip_serializing_if = "Option::is_none")]
    due: Option<NaiveDateTime>,
    completed: bool,
}

impl Task {
    /// Create a brand new, uncompleted task. This picks a new (random) id.
    pub fn new(title: String, due: Option<NaiveDateTime>) -> Self {
        Self {
            id: ItemId::random(),
            title,
            due,
            completed: false,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn due(&self) -> Option<NaiveDateTime> {
        self.due
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Whether this task needs attention: not completed, and due within `window` of `now`.
    /// Overdue tasks count as due.
    pub fn is_due_soon(&self, now: NaiveDateTime, window: Duration) -> bool {
        if self.completed {
            return false;
        }
        match self.due {
            None => false,
            Some(due) => due - now <= window,
        }
    }
}

/// Due dates come from a `datetime-local` form control: minute precision, no timezone, and an
/// empty string when the field was left blank. Reads stay lenient about all the shapes older
/// documents contain; writes use minute precision.
mod due_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M";
    const READ_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

    pub fn serialize<S>(due: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match due {
            Some(due) => serializer.serialize_str(&due.format(WRITE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        let raw = match raw {
            None => return Ok(None),
            Some(raw) => raw,
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        for format in READ_FORMATS {
            if let Ok(due) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(Some(due));
            }
        }
        log::debug!("Ignoring an unparsable due date: {:?}", raw);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn due_dates_accept_both_input_precisions() {
        let task: Task =
            serde_json::from_str(r#"{"id":1,"title":"Plan date","due":"2024-03-05T18:30","completed":false}"#)
                .unwrap();
        assert_eq!(task.due(), Some(datetime(2024, 3, 5, 18, 30)));

        let task: Task =
            serde_json::from_str(r#"{"id":1,"title":"Plan date","due":"2024-03-05T18:30:00","completed":false}"#)
                .unwrap();
        assert_eq!(task.due(), Some(datetime(2024, 3, 5, 18, 30)));
    }

    #[test]
    fn blank_and_missing_due_dates_are_none() {
        let task: Task =
            serde_json::from_str(r#"{"id":1,"title":"Someday","due":"","completed":false}"#).unwrap();
        assert_eq!(task.due(), None);

        let task: Task =
            serde_json::from_str(r#"{"id":1,"title":"Someday","completed":false}"#).unwrap();
        assert_eq!(task.due(), None);

        let task: Task =
            serde_json::from_str(r#"{"id":1,"title":"Someday","due":null,"completed":false}"#).unwrap();
        assert_eq!(task.due(), None);
    }

    #[test]
    fn due_dates_write_minute_precision() {
        let task = Task::new(String::from("Plan date"), Some(datetime(2024, 3, 5, 18, 30)));
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"due\":\"2024-03-05T18:30\""), "got {}", json);
    }

    #[test]
    fn due_soon_includes_overdue_and_excludes_completed() {
        let now = datetime(2024, 3, 5, 12, 0);
        let window = Duration::hours(24);

        let due_tomorrow = Task::new(String::from("a"), Some(datetime(2024, 3, 6, 10, 0)));
        assert!(due_tomorrow.is_due_soon(now, window));

        let overdue = Task::new(String::from("b"), Some(datetime(2024, 3, 1, 10, 0)));
        assert!(overdue.is_due_soon(now, window));

        let far_out = Task::new(String::from("c"), Some(datetime(2024, 4, 1, 10, 0)));
        assert!(!far_out.is_due_soon(now, window));

        let mut done = Task::new(String::from("d"), Some(datetime(2024, 3, 6, 10, 0)));
        done.set_completed(true);
        assert!(!done.is_due_soon(now, window));

        let dateless = Task::new(String::from("e"), None);
        assert!(!dateless.is_due_soon(now, window));
    }
}
