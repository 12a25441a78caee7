//! A module to decode iCalendar imports
//!
//! Decoding is best-effort by design: whatever can be read becomes an event, and records
//! missing a date or a title are silently dropped rather than failing the whole import.

use chrono::NaiveDate;

use crate::event::{Category, Event};

/// Category applied to records that carry no `CATEGORIES` line
const FALLBACK_CATEGORY: Category = Category::Pink;

/// An event decoded from an iCalendar file, before it gets an identity of its own.
///
/// The store assigns a fresh id when the record is appended; ids found in the file are
/// never trusted.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportedEvent {
    pub date: NaiveDate,
    pub title: String,
    pub category: Category,
}

impl ImportedEvent {
    /// Turn the imported record into a full event with a freshly generated id
    pub fn into_event(self) -> Event {
        Event::new(self.date, self.category, self.title)
    }
}

#[derive(Default)]
struct PartialRecord {
    date: Option<NaiveDate>,
    title: Option<String>,
    category: Option<Category>,
}

/// Decode the `VEVENT` records of an iCalendar document, in file order.
///
/// The text is first tokenized into content lines (this handles `\n` as well as `\r\n`
/// endings, and RFC 5545 line folding); unparsable lines are skipped. Only lines between
/// `BEGIN:VEVENT` and `END:VEVENT` contribute to a record, and only three of them matter:
/// `DTSTART` (the value must be exactly eight digits forming a real `YYYYMMDD` date,
/// anything else leaves the date unset), `SUMMARY` and `CATEGORIES`. A record missing a
/// date or a non-blank title is dropped.
pub fn decode(content: &str) -> Vec<ImportedEvent> {
    let mut events = Vec::new();
    let mut current: Option<PartialRecord> = None;

    for token in ical::PropertyParser::from_reader(content.as_bytes()) {
        let property = match token {
            Ok(property) => property,
            Err(err) => {
                log::debug!("Skipping an unparsable content line: {}", err);
                continue;
            }
        };
        let value = property.value.as_deref().unwrap_or("");

        match property.name.as_str() {
            "BEGIN" if value == "VEVENT" => {
                current = Some(PartialRecord::default());
            }
            "END" if value == "VEVENT" => {
                if let Some(record) = current.take() {
                    match (record.date, record.title) {
                        (Some(date), Some(title)) => events.push(ImportedEvent {
                            date,
                            title,
                            category: record.category.unwrap_or(FALLBACK_CATEGORY),
                        }),
                        // Required fields missing: dropped on purpose
                        _ => log::debug!("Dropping an incomplete VEVENT record"),
                    }
                }
            }
            "DTSTART" => {
                if let Some(record) = current.as_mut() {
                    record.date = parse_basic_date(value);
                }
            }
            "SUMMARY" => {
                if let Some(record) = current.as_mut() {
                    record.title = non_blank(value);
                }
            }
            "CATEGORIES" => {
                if let Some(record) = current.as_mut() {
                    record.category = non_blank(value).map(|raw| Category::from(raw.as_str()));
                }
            }
            _ => {}
        }
    }

    events
}

/// `YYYYMMDD` and nothing else; datetime stamps or separated dates leave the date unset
fn parse_basic_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.len() != 8 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").ok()
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics::encode;

    const EXAMPLE_ICS: &str = "BEGIN:VCALENDAR\r\n\
        VERSION:2.0\r\n\
        PRODID:-//Some Other App//Export//EN\r\n\
        BEGIN:VEVENT\r\n\
        UID:42@elsewhere\r\n\
        DTSTAMP:20240301T120000Z\r\n\
        DTSTART;VALUE=DATE:20240305\r\n\
        SUMMARY:Anniversary\r\n\
        CATEGORIES:pink\r\n\
        END:VEVENT\r\n\
        BEGIN:VEVENT\r\n\
        DTSTART:20240401\r\n\
        SUMMARY:Picnic\r\n\
        END:VEVENT\r\n\
        END:VCALENDAR\r\n";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn decodes_events_in_file_order() {
        let events = decode(EXAMPLE_ICS);
        assert_eq!(
            events,
            vec![
                ImportedEvent {
                    date: date(2024, 3, 5),
                    title: String::from("Anniversary"),
                    category: Category::Pink,
                },
                ImportedEvent {
                    date: date(2024, 4, 1),
                    title: String::from("Picnic"),
                    // no CATEGORIES line: the fallback applies
                    category: Category::Pink,
                },
            ]
        );
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let original = vec![
            Event::new(date(2024, 3, 5), Category::Pink, String::from("Anniversary")),
            Event::new(date(2024, 12, 24), Category::Purple, String::from("Getaway")),
        ];
        let ical = encode(&original).unwrap();
        let decoded = decode(&ical);

        assert_eq!(decoded.len(), original.len());
        for (imported, event) in decoded.iter().zip(&original) {
            assert_eq!(imported.date, event.date());
            assert_eq!(imported.title, event.title());
            assert_eq!(imported.category, event.category());
        }
    }

    #[test]
    fn records_missing_required_fields_are_dropped() {
        let ics = "BEGIN:VCALENDAR\n\
            BEGIN:VEVENT\n\
            DTSTART:20240305\n\
            SUMMARY:Kept\n\
            END:VEVENT\n\
            BEGIN:VEVENT\n\
            DTSTART:20240306\n\
            END:VEVENT\n\
            BEGIN:VEVENT\n\
            SUMMARY:No date\n\
            END:VEVENT\n\
            END:VCALENDAR\n";
        let events = decode(ics);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Kept");
    }

    #[test]
    fn non_basic_dates_leave_the_record_incomplete() {
        let ics = "BEGIN:VEVENT\n\
            DTSTART:20240305T120000Z\n\
            SUMMARY:Has a datetime stamp\n\
            END:VEVENT\n\
            BEGIN:VEVENT\n\
            DTSTART:2024-03-05\n\
            SUMMARY:Has separators\n\
            END:VEVENT\n";
        assert!(decode(ics).is_empty());
    }

    #[test]
    fn impossible_dates_are_not_dates() {
        let ics = "BEGIN:VEVENT\nDTSTART:20241399\nSUMMARY:Nope\nEND:VEVENT\n";
        assert!(decode(ics).is_empty());
    }

    #[test]
    fn unknown_categories_import_as_accent() {
        let ics = "BEGIN:VEVENT\n\
            DTSTART:20240305\n\
            SUMMARY:Mystery\n\
            CATEGORIES:chartreuse\n\
            END:VEVENT\n";
        let events = decode(ics);
        assert_eq!(events[0].category, Category::Accent);
    }

    #[test]
    fn lines_outside_records_are_ignored() {
        let ics = "SUMMARY:Not in a record\n\
            DTSTART:20240305\n\
            BEGIN:VEVENT\n\
            DTSTART:20240305\n\
            SUMMARY:Real\n\
            END:VEVENT\n";
        let events = decode(ics);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Real");
    }

    #[test]
    fn empty_input_decodes_to_nothing() {
        assert!(decode("").is_empty());
    }
}
