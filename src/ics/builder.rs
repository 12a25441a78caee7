//! A module to build iCalendar exports

use std::error::Error;

use chrono::{DateTime, Utc};
use ics::components::Parameter;
use ics::properties::{Categories, DtStart, Summary};
use ics::ICalendar;

use crate::event::Event;
use crate::settings::UID_DOMAIN;

/// Encode events into an iCalendar document, one `VEVENT` per event in input order.
///
/// Whether an empty export makes sense is the caller's decision; see
/// [`Store::export_calendar`](crate::Store::export_calendar).
pub fn encode(events: &[Event]) -> Result<String, Box<dyn Error>> {
    let mut calendar = ICalendar::new("2.0", super::prod_id());
    let dtstamp = format_date_time(&Utc::now());

    for event in events {
        let uid = format!("{}@{}", event.id(), UID_DOMAIN);
        let mut vevent = ics::Event::new(uid, dtstamp.clone());

        // Events are date-only: DTSTART carries a VALUE=DATE parameter and no time part
        let mut dtstart = DtStart::new(event.date().format("%Y%m%d").to_string());
        dtstart.add(Parameter::new("VALUE", "DATE"));
        vevent.push(dtstart);

        vevent.push(Summary::new(event.title()));
        vevent.push(Categories::new(event.category().as_str()));
        calendar.add_event(vevent);
    }

    Ok(calendar.to_string())
}

fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}
