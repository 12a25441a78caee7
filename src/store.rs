//! A folder-backed store for the journal document and the UI preference keys
//!
//! The store owns the single in-memory copy of the [`Document`]. Mutating operations work
//! on that copy only; nothing is persisted until the caller invokes [`Store::save`], which
//! rewrites the whole serialization. Preference keys are independent of the document and
//! are written through their own setters, one key per file in the store folder.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, Utc};

use crate::bucket::BucketItem;
use crate::document::Document;
use crate::event::{Category, Event};
use crate::id::ItemId;
use crate::ics;
use crate::memory::Memory;
use crate::message::{DeliveryStatus, Message, Sender};
use crate::migration;
use crate::preferences::{Language, NotifyPermission, Theme};
use crate::profile::Profile;
use crate::settings;
use crate::task::Task;

/// The journal data of one local user, backed by a folder
pub struct Store {
    root: PathBuf,
    document: Document,
}

impl Store {
    /// Open the store rooted at `folder` and load the persisted document.
    ///
    /// A missing, unreadable or corrupt document is not an error: the store starts from
    /// the default document and the next save overwrites whatever was there.
    pub fn open(folder: &Path) -> Self {
        let raw = fs::read_to_string(folder.join(settings::DOCUMENT_FILE)).ok();
        let document = migration::load(raw.as_deref());
        Self {
            root: folder.to_path_buf(),
            document,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Persist the current document, overwriting the previous serialization.
    ///
    /// Mutating operations never save by themselves; the caller decides when to flush.
    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(&self.root)?;
        let file = fs::File::create(self.root.join(settings::DOCUMENT_FILE))?;
        serde_json::to_writer(file, &self.document)?;
        Ok(())
    }

    //
    // Events
    //

    /// Record a new calendar event. The title must not be blank.
    pub fn add_event(
        &mut self,
        date: NaiveDate,
        category: Category,
        title: &str,
    ) -> Result<ItemId, Box<dyn Error>> {
        let title = title.trim();
        if title.is_empty() {
            return Err("An event needs a title".into());
        }
        let event = Event::new(date, category, title.to_string());
        let id = event.id().clone();
        self.document.events.push(event);
        Ok(id)
    }

    pub fn delete_event(&mut self, id: &ItemId) {
        self.document.events.retain(|event| event.id() != id);
    }

    /// Events in display order: by date, insertion order within a day
    pub fn events_by_date(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.document.events.iter().collect();
        events.sort_by_key(|event| event.date());
        events
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.document
            .events
            .iter()
            .filter(|event| event.date() == date)
            .collect()
    }

    pub fn events_in_category(&self, category: Category) -> Vec<&Event> {
        self.document
            .events
            .iter()
            .filter(|event| event.category() == category)
            .collect()
    }

    /// Export every event as an iCalendar document.
    ///
    /// Returns `None` when there is nothing to export; an empty calendar is never produced.
    pub fn export_calendar(&self) -> Result<Option<String>, Box<dyn Error>> {
        if self.document.events.is_empty() {
            return Ok(None);
        }
        ics::encode(&self.document.events).map(Some)
    }

    /// Append the events found in an iCalendar document, each with a freshly generated id.
    /// Existing events are kept. Returns how many records were imported; records the
    /// decoder dropped are not counted.
    pub fn import_calendar(&mut self, content: &str) -> usize {
        let imported = ics::decode(content);
        let count = imported.len();
        for partial in imported {
            self.document.events.push(partial.into_event());
        }
        count
    }

    //
    // Messages
    //

    /// Record a chat message. At least one of text, image or audio is required.
    pub fn send_message(
        &mut self,
        sender: Sender,
        text: Option<&str>,
        image: Option<String>,
        audio: Option<String>,
    ) -> Result<ItemId, Box<dyn Error>> {
        let text = text
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(String::from);
        if text.is_none() && image.is_none() && audio.is_none() {
            return Err("A message needs a text, an image or an audio payload".into());
        }
        let message = Message::new(sender, Utc::now(), text, image, audio);
        let id = message.id().clone();
        self.document.messages.push(message);
        Ok(id)
    }

    pub fn set_message_pinned(
        &mut self,
        id: &ItemId,
        pinned: bool,
    ) -> Result<(), Box<dyn Error>> {
        match self
            .document
            .messages
            .iter_mut()
            .find(|message| message.id() == id)
        {
            None => Err("No message for this id".into()),
            Some(message) => {
                message.set_pinned(pinned);
                Ok(())
            }
        }
    }

    pub fn delete_message(&mut self, id: &ItemId) {
        self.document.messages.retain(|message| message.id() != id);
    }

    /// The partner acknowledged the conversation: flip the latest own message still marked
    /// `Sent` to `Read`.
    pub fn mark_latest_sent_read(&mut self) {
        for message in self.document.messages.iter_mut().rev() {
            if message.sender() == Sender::Sent && message.status() == Some(DeliveryStatus::Sent)
            {
                message.mark_read();
                break;
            }
        }
    }

    pub fn pinned_messages(&self) -> Vec<&Message> {
        self.document
            .messages
            .iter()
            .filter(|message| message.is_pinned())
            .collect()
    }

    //
    // Memories
    //

    /// Record a memory. Both payloads are optional; blank text counts as no text.
    pub fn add_memory(
        &mut self,
        image: Option<String>,
        text: Option<&str>,
        tags: Vec<String>,
    ) -> ItemId {
        let text = text
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(String::from);
        let memory = Memory::new(image, text, Utc::now(), tags);
        let id = memory.id().clone();
        self.document.memories.push(memory);
        id
    }

    pub fn delete_memory(&mut self, id: &ItemId) {
        self.document.memories.retain(|memory| memory.id() != id);
    }

    /// Memories newest first
    pub fn memories_recent_first(&self) -> Vec<&Memory> {
        let mut memories: Vec<&Memory> = self.document.memories.iter().collect();
        memories.sort_by(|a, b| b.timestamp().cmp(a.timestamp()));
        memories
    }

    //
    // Tasks
    //

    /// Record a new task. The title must not be blank.
    pub fn add_task(
        &mut self,
        title: &str,
        due: Option<NaiveDateTime>,
    ) -> Result<ItemId, Box<dyn Error>> {
        let title = title.trim();
        if title.is_empty() {
            return Err("A task needs a title".into());
        }
        let task = Task::new(title.to_string(), due);
        let id = task.id().clone();
        self.document.tasks.push(task);
        Ok(id)
    }

    pub fn set_task_completed(
        &mut self,
        id: &ItemId,
        completed: bool,
    ) -> Result<(), Box<dyn Error>> {
        match self.document.tasks.iter_mut().find(|task| task.id() == id) {
            None => Err("No task for this id".into()),
            Some(task) => {
                task.set_completed(completed);
                Ok(())
            }
        }
    }

    pub fn delete_task(&mut self, id: &ItemId) {
        self.document.tasks.retain(|task| task.id() != id);
    }

    /// Tasks in display order: open before completed, earliest due first within each group,
    /// dateless tasks leading
    pub fn tasks_for_display(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.document.tasks.iter().collect();
        tasks.sort_by_key(|task| (task.completed(), task.due()));
        tasks
    }

    //
    // Bucket list
    //

    /// Record a bucket-list item. The text must not be blank.
    pub fn add_bucket_item(&mut self, item: &str) -> Result<ItemId, Box<dyn Error>> {
        let item = item.trim();
        if item.is_empty() {
            return Err("A bucket-list item needs a text".into());
        }
        let bucket_item = BucketItem::new(item.to_string());
        let id = bucket_item.id().clone();
        self.document.bucket_list.push(bucket_item);
        Ok(id)
    }

    pub fn delete_bucket_item(&mut self, id: &ItemId) {
        self.document.bucket_list.retain(|item| item.id() != id);
    }

    //
    // Profile
    //

    pub fn set_profile(&mut self, profile: Profile) {
        self.document.profile = profile;
    }

    //
    // Backup and restore
    //

    /// Serialize the full document for a backup download
    /// (see [`settings::BACKUP_FILE_NAME`])
    pub fn export_backup(&self) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string(&self.document)?)
    }

    /// Replace the in-memory document wholesale with the contents of a backup file.
    ///
    /// Anything that parses as a JSON record is accepted; backups written by older versions
    /// go through the same migrations as a stored document. The replacement is not
    /// persisted until the next [`Store::save`].
    pub fn import_backup(&mut self, content: &str) -> Result<(), Box<dyn Error>> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err("A backup must contain a single record".into());
        }
        self.document = migration::load(Some(content));
        Ok(())
    }

    //
    // Preference keys
    //

    pub fn theme(&self) -> Theme {
        self.read_key(settings::THEME_FILE)
            .and_then(|token| Theme::from_token(&token))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), Box<dyn Error>> {
        self.write_key(settings::THEME_FILE, theme.token())
    }

    pub fn language(&self) -> Language {
        self.read_key(settings::LANGUAGE_FILE)
            .and_then(|token| Language::from_token(&token))
            .unwrap_or_default()
    }

    pub fn set_language(&self, language: Language) -> Result<(), Box<dyn Error>> {
        self.write_key(settings::LANGUAGE_FILE, language.token())
    }

    pub fn notify_permission(&self) -> NotifyPermission {
        self.read_key(settings::NOTIFY_PERMISSION_FILE)
            .and_then(|token| NotifyPermission::from_token(&token))
            .unwrap_or_default()
    }

    pub fn set_notify_permission(
        &self,
        permission: NotifyPermission,
    ) -> Result<(), Box<dyn Error>> {
        self.write_key(settings::NOTIFY_PERMISSION_FILE, permission.token())
    }

    pub fn onboarding_seen(&self) -> bool {
        self.read_key(settings::ONBOARDING_FILE).as_deref() == Some("true")
    }

    pub fn set_onboarding_seen(&self) -> Result<(), Box<dyn Error>> {
        self.write_key(settings::ONBOARDING_FILE, "true")
    }

    fn read_key(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.root.join(key))
            .ok()
            .map(|value| value.trim().to_string())
    }

    fn write_key(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.root.join(key), value)?;
        Ok(())
    }
}
