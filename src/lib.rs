//! This crate is the data core of LoveConnect, a local-first relationship journal.
//!
//! All journal data lives in a single persisted [`Document`] owned by the running session.
//! The [`store`] module loads it from a local folder (migrating documents written by older
//! versions of the product on the way in), hands out mutating operations, and persists it
//! back when the caller asks.
//!
//! Calendar events can be exchanged with other applications through the iCalendar text
//! format, in the [`ics`] module.
//!
//! The [`offline`] module keeps a versioned cache of the application's static assets so the
//! application still loads without a network, following the install/activate/fetch
//! lifecycle of the platform it runs on.

pub mod settings;

mod id;
pub use id::ItemId;
mod event;
pub use event::{Category, Event};
mod message;
pub use message::{DeliveryStatus, Message, Sender};
mod memory;
pub use memory::{parse_tag_line, Memory};
mod task;
pub use task::Task;
mod bucket;
pub use bucket::BucketItem;
mod profile;
pub use profile::Profile;
mod document;
pub use document::{DashboardCounts, Document};

pub mod migration;
pub mod store;
pub use store::Store;

pub mod calendar;
pub mod ics;
pub mod offline;
pub mod preferences;
