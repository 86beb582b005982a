//! In-memory chat transcript.
//!
//! Messages are append-only and live only for the session; insertion order
//! is display order. Requests to the assistant are not cancellable once
//! issued, so a superseded request's response may still arrive; the
//! transcript appends completions in arrival order and lets the caller see
//! whether a completion belonged to the most recent request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// When the message was appended.
    pub at: DateTime<Utc>,
}

/// Correlates an in-flight generation request with its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Ordered, append-only message list for one chat view.
///
/// Cleared implicitly when the owning view unmounts (the transcript is just
/// dropped); nothing is persisted.
#[derive(Debug, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_request: u64,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message and issue a request id for its reply.
    pub fn push_user(&mut self, content: impl Into<String>) -> RequestId {
        self.append(ChatRole::User, content.into());
        let id = RequestId(self.next_request);
        self.next_request += 1;
        id
    }

    /// Append the assistant's reply for `request`.
    ///
    /// Completions apply in arrival order regardless of issue order: a
    /// stale response still lands in the transcript (last write wins by
    /// arrival). Returns `true` when `request` was the most recently
    /// issued one, so callers can decide whether to speak it aloud.
    pub fn complete(&mut self, request: RequestId, content: impl Into<String>) -> bool {
        self.append(ChatRole::Assistant, content.into());
        self.is_latest(request)
    }

    /// Whether `request` is the most recently issued request.
    pub fn is_latest(&self, request: RequestId) -> bool {
        self.next_request > 0 && request.0 == self.next_request - 1
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn append(&mut self, role: ChatRole, content: String) {
        self.messages.push(ChatMessage {
            role,
            content,
            at: Utc::now(),
        });
    }
}
