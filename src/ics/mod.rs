//! Calendar event interchange through the iCalendar text format
//!
//! Generation goes through the `ics` crate. Decoding is two separate passes: the `ical`
//! crate's property parser turns the text into typed content-line tokens, and the
//! assembly pass in [`parser`] builds event records out of them, so the handling of
//! malformed input is testable on its own.

mod builder;
pub use builder::encode;
mod parser;
pub use parser::{decode, ImportedEvent};

use crate::settings::{ORG_NAME, PRODUCT_NAME};

pub(crate) fn prod_id() -> String {
    format!("-//{}//{}//EN", ORG_NAME, PRODUCT_NAME)
}
