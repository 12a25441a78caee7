//! Chat messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// Who authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The local user
    Sent,
    /// The partner
    Received,
}

/// Delivery acknowledgement. Only meaningful for messages the local user sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Read,
}

/// One chat message: text, an image, a voice note, or any combination
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: ItemId,
    sender: Sender,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Image payload, kept as the opaque data-URL text the UI recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    /// Voice-note payload, same encoding as `image`
    #[serde(skip_serializing_if = "Option::is_none")]
    audio: Option<String>,
    pinned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<DeliveryStatus>,
}

impl Message {
    /// Create a new message. Own messages start in the `Sent` delivery state; messages from
    /// the partner carry no delivery state at all.
    pub fn new(
        sender: Sender,
        timestamp: DateTime<Utc>,
        text: Option<String>,
        image: Option<String>,
        audio: Option<String>,
    ) -> Self {
        let status = match sender {
            Sender::Sent => Some(DeliveryStatus::Sent),
            Sender::Received => None,
        };
        Self {
            id: ItemId::random(),
            sender,
            timestamp,
            text,
            image,
            audio,
            pinned: false,
            status,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn audio(&self) -> Option<&str> {
        self.audio.as_deref()
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn status(&self) -> Option<DeliveryStatus> {
        self.status
    }

    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }

    /// Flip an own message from `Sent` to `Read`. A no-op for anything else.
    pub fn mark_read(&mut self) {
        if let Some(DeliveryStatus::Sent) = self.status {
            self.status = Some(DeliveryStatus::Read);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_messages_start_sent_and_unpinned() {
        let msg = Message::new(Sender::Sent, Utc::now(), Some("hi".into()), None, None);
        assert_eq!(msg.status(), Some(DeliveryStatus::Sent));
        assert_eq!(msg.is_pinned(), false);

        let reply = Message::new(Sender::Received, Utc::now(), Some("hi!".into()), None, None);
        assert_eq!(reply.status(), None);
    }

    #[test]
    fn mark_read_only_touches_sent_messages() {
        let mut msg = Message::new(Sender::Sent, Utc::now(), Some("hi".into()), None, None);
        msg.mark_read();
        assert_eq!(msg.status(), Some(DeliveryStatus::Read));
        // a second acknowledgement changes nothing
        msg.mark_read();
        assert_eq!(msg.status(), Some(DeliveryStatus::Read));

        let mut reply = Message::new(Sender::Received, Utc::now(), Some("hi!".into()), None, None);
        reply.mark_read();
        assert_eq!(reply.status(), None);
    }
}
