//! Loading persisted documents, whichever version of the product wrote them
//!
//! Persisted documents carry a schema version. Loading reads the stored version, applies
//! every migration step the document has not seen yet, in order, and only then
//! deserializes. Documents from before versioning existed count as version 0 and get the
//! full pipeline. Each step is a small pure function over the raw JSON value, so the
//! backfill behaviour of any single product change stays testable on its own.
//!
//! Loading never fails: unreadable, unparsable or unrecognizable input falls back to the
//! default document, with a warning in the log.

use serde_json::map::Map;
use serde_json::{json, Value};

use crate::document::Document;

/// The schema version this build reads and writes
pub const SCHEMA_VERSION: u32 = 5;

struct Migration {
    /// Version a document is at once this step has run
    target: u32,
    apply: fn(&mut Map<String, Value>),
}

const MIGRATIONS: &[Migration] = &[
    Migration { target: 1, apply: ensure_base_shape },
    Migration { target: 2, apply: ensure_profile_start_date },
    Migration { target: 3, apply: ensure_message_pinned },
    Migration { target: 4, apply: ensure_memory_tags },
    Migration { target: 5, apply: ensure_bucket_list },
];

/// Turn a previously stored serialization (or the absence of one) into a document in
/// current shape. Backfills only ever add missing fields; existing data is neither dropped
/// nor reordered.
pub fn load(raw: Option<&str>) -> Document {
    let raw = match raw {
        None => return Document::default(),
        Some(raw) => raw,
    };

    let value: Value = match serde_json::from_str(raw) {
        Err(err) => {
            log::warn!("Unparsable stored document, starting from defaults: {}", err);
            return Document::default();
        }
        Ok(value) => value,
    };

    let mut root = match value {
        Value::Object(map) => map,
        _ => {
            log::warn!("Stored document is not a record, starting from defaults");
            return Document::default();
        }
    };

    let stored_version = root
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;

    for migration in MIGRATIONS {
        if migration.target > stored_version {
            (migration.apply)(&mut root);
        }
    }
    root.insert(String::from("schemaVersion"), json!(SCHEMA_VERSION));

    match serde_json::from_value(Value::Object(root)) {
        Ok(document) => document,
        Err(err) => {
            log::warn!(
                "Stored document does not match any shape this build knows, starting from defaults: {}",
                err
            );
            Document::default()
        }
    }
}

/// v1: every collection present as an array, the profile present as a record
fn ensure_base_shape(root: &mut Map<String, Value>) {
    for key in &["events", "messages", "memories", "tasks"] {
        if !root.get(*key).map_or(false, Value::is_array) {
            root.insert((*key).to_string(), json!([]));
        }
    }
    if !root.get("profile").map_or(false, Value::is_object) {
        root.insert(
            String::from("profile"),
            json!({
                "myName": "",
                "partnerName": "",
                "myPhoto": null,
                "partnerPhoto": null,
                "startDate": null,
            }),
        );
    }
}

/// v2: the profile gained a relationship start date
fn ensure_profile_start_date(root: &mut Map<String, Value>) {
    if let Some(Value::Object(profile)) = root.get_mut("profile") {
        profile
            .entry(String::from("startDate"))
            .or_insert(Value::Null);
    }
}

/// v3: messages gained a pinned flag
fn ensure_message_pinned(root: &mut Map<String, Value>) {
    if let Some(Value::Array(messages)) = root.get_mut("messages") {
        for message in messages {
            if let Value::Object(message) = message {
                message
                    .entry(String::from("pinned"))
                    .or_insert(Value::Bool(false));
            }
        }
    }
}

/// v4: memories gained tags
fn ensure_memory_tags(root: &mut Map<String, Value>) {
    if let Some(Value::Array(memories)) = root.get_mut("memories") {
        for memory in memories {
            if let Value::Object(memory) = memory {
                if !memory.get("tags").map_or(false, Value::is_array) {
                    memory.insert(String::from("tags"), json!([]));
                }
            }
        }
    }
}

/// v5: the bucket list arrived
fn ensure_bucket_list(root: &mut Map<String, Value>) {
    if !root.get("bucketList").map_or(false, Value::is_array) {
        root.insert(String::from("bucketList"), json!([]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, Event};
    use crate::memory::Memory;
    use crate::message::{Message, Sender};
    use crate::task::Task;
    use chrono::{NaiveDate, Utc};

    /// A document exactly as the product wrote it before schema versioning existed:
    /// numeric ids, no pinned flags, no tags, no bucket list, no start date.
    const LEGACY_DOCUMENT: &str = r#"{
        "events": [
            {"id": 1709647123456, "date": "2024-03-05", "category": "pink", "title": "Anniversary"}
        ],
        "messages": [
            {"id": 1709647123457, "sender": "sent", "timestamp": "2024-03-05T12:00:00.000Z", "text": "miss you", "status": "sent"},
            {"id": 1709647123458, "sender": "received", "timestamp": "2024-03-05T12:01:00.000Z", "text": "miss you too"}
        ],
        "memories": [
            {"id": 1709647123459, "image": null, "text": "first coffee", "timestamp": "2024-03-05T12:02:00.000Z"}
        ],
        "tasks": [
            {"id": 1709647123460, "title": "Plan date night", "due": "2024-03-08T18:30", "completed": false}
        ],
        "profile": {"myName": "Ana", "partnerName": "Ben", "myPhoto": null, "partnerPhoto": null}
    }"#;

    fn canonical_document() -> Document {
        let mut doc = Document::default();
        doc.events.push(Event::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            Category::Pink,
            String::from("Anniversary"),
        ));
        doc.messages.push(Message::new(
            Sender::Sent,
            Utc::now(),
            Some(String::from("hello")),
            None,
            None,
        ));
        doc.memories.push(Memory::new(
            None,
            Some(String::from("first coffee")),
            Utc::now(),
            vec![String::from("coffee")],
        ));
        doc.tasks.push(Task::new(String::from("Plan date night"), None));
        doc.profile.my_name = String::from("Ana");
        doc
    }

    #[test]
    fn current_documents_round_trip_unchanged() {
        let doc = canonical_document();
        let serialized = serde_json::to_string(&doc).unwrap();
        assert_eq!(load(Some(&serialized)), doc);
    }

    #[test]
    fn absent_storage_yields_defaults() {
        assert_eq!(load(None), Document::default());
    }

    #[test]
    fn corrupt_storage_yields_defaults() {
        assert_eq!(load(Some("{{{ not json")), Document::default());
        assert_eq!(load(Some("[1, 2, 3]")), Document::default());
        assert_eq!(load(Some("\"a string\"")), Document::default());
    }

    #[test]
    fn legacy_documents_are_backfilled_without_losing_data() {
        let doc = load(Some(LEGACY_DOCUMENT));
        assert_eq!(doc.schema_version(), SCHEMA_VERSION);

        // existing data untouched
        assert_eq!(doc.events().len(), 1);
        assert_eq!(doc.events()[0].title(), "Anniversary");
        assert_eq!(doc.events()[0].id().as_str(), "1709647123456");
        assert_eq!(doc.messages().len(), 2);
        assert_eq!(doc.messages()[0].text(), Some("miss you"));
        assert_eq!(doc.tasks()[0].title(), "Plan date night");
        assert_eq!(doc.profile().my_name, "Ana");

        // backfilled fields at their documented defaults
        assert_eq!(doc.messages()[0].is_pinned(), false);
        assert_eq!(doc.messages()[1].is_pinned(), false);
        assert_eq!(doc.memories()[0].tags(), &[] as &[String]);
        assert_eq!(doc.bucket_list().len(), 0);
        assert_eq!(doc.profile().start_date, None);
    }

    #[test]
    fn missing_profile_is_synthesized() {
        let doc = load(Some(r#"{"events": [], "messages": [], "memories": [], "tasks": []}"#));
        assert_eq!(doc.profile(), &crate::Profile::default());
        assert_eq!(doc.schema_version(), SCHEMA_VERSION);
    }

    #[test]
    fn empty_record_becomes_a_default_document() {
        assert_eq!(load(Some("{}")), Document::default());
    }
}
