//! Chat transcript state.
//!
//! DESIGN
//! ======
//! The transcript is append-only: messages are never edited or removed once
//! pushed, and ids increase monotonically. Feedback and scene edits are
//! tracked in separate state keyed by message id so the transcript itself
//! stays immutable.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use plans::Payload;

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Media attached to a message. All fields are optional URLs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attachments {
    pub images: Vec<String>,
    pub video: Option<String>,
    pub audio: Option<String>,
    pub generated_image: Option<String>,
    pub generated_video: Option<String>,
}

impl Attachments {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
            && self.video.is_none()
            && self.audio.is_none()
            && self.generated_image.is_none()
            && self.generated_video.is_none()
    }

    /// Attachments with only a video preview.
    #[must_use]
    pub fn video(url: impl Into<String>) -> Self {
        Self { video: Some(url.into()), ..Self::default() }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub attachments: Attachments,
    pub payload: Option<Payload>,
}

impl Message {
    #[must_use]
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// Ordered, append-only message sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageStore {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for MessageStore {
    fn default() -> Self {
        Self { messages: Vec::new(), next_id: 1 }
    }
}

impl MessageStore {
    /// Store preloaded with the opening exchange shown on first load.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::default();
        store.push(Role::User, "Create a business card for me".to_owned(), Attachments::default(), None);
        store.push(
            Role::Assistant,
            "Sure! I will create a business card for you.".to_owned(),
            Attachments::default(),
            None,
        );
        store
    }

    /// Append a user message. Whitespace-only input is not sent.
    ///
    /// Returns the id of the new message.
    pub fn send(&mut self, text: &str) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.push(Role::User, text.to_owned(), Attachments::default(), None))
    }

    /// Append an assistant message produced by an external event.
    pub fn push_assistant(&mut self, content: impl Into<String>, attachments: Attachments, payload: Option<Payload>) -> u64 {
        self.push(Role::Assistant, content.into(), attachments, payload)
    }

    fn push(&mut self, role: Role, content: String, attachments: Attachments, payload: Option<Payload>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message { id, role, content, attachments, payload });
        id
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Id of the newest assistant message, the only one eligible for feedback.
    #[must_use]
    pub fn last_assistant_id(&self) -> Option<u64> {
        self.messages.iter().rev().find(|m| m.is_assistant()).map(|m| m.id)
    }

    /// Messages carrying a structured payload, oldest first.
    pub fn with_payloads(&self) -> impl Iterator<Item = (u64, &Payload)> {
        self.messages.iter().filter_map(|m| m.payload.as_ref().map(|p| (m.id, p)))
    }

    /// First line of each user message, newest first, for the sidebar history.
    #[must_use]
    pub fn history_titles(&self, limit: usize) -> Vec<String> {
        self.messages
            .iter()
            .rev()
            .filter(|m| m.role == Role::User)
            .filter_map(|m| m.content.lines().map(str::trim).find(|l| !l.is_empty()))
            .take(limit)
            .map(str::to_owned)
            .collect()
    }
}
