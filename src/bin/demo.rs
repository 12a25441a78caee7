use std::env;
use std::error::Error;

use chrono::{Duration, Local};

use loveconnect::offline::{HttpFetcher, OfflineCache};
use loveconnect::{Category, Sender, Store};

/// Walks through the public API on a scratch folder. Pass an origin URL as the first
/// argument to also install the offline asset cache from it.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let folder = env::temp_dir().join("loveconnect-demo");
    let mut store = Store::open(&folder);

    let now = Local::now().naive_local();
    let today = now.date();

    store.add_event(today, Category::Pink, "Movie night")?;
    let message = store.send_message(Sender::Sent, Some("Popcorn is on me"), None, None)?;
    store.set_message_pinned(&message, true)?;
    store.add_task("Pick a movie", Some(now + Duration::hours(3)))?;
    store.save()?;

    let counts = store.document().dashboard_counts(now);
    println!(
        "{} events, {} messages, {} tasks ({} due soon)",
        counts.events, counts.messages, counts.tasks, counts.reminders_due_soon
    );

    if let Some(calendar) = store.export_calendar()? {
        println!("--- calendar export ---\n{}", calendar);
    }

    if let Some(origin) = env::args().nth(1) {
        let cache = OfflineCache::new(&folder.join("caches"));
        let fetcher = HttpFetcher::new(origin.parse()?);
        cache.install(&fetcher).await?;
        cache.activate()?;
        println!("offline cache installed: {}", cache.is_installed());
    }

    Ok(())
}
