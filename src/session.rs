//! Chat transcripts and session storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default session timeout (30 minutes).
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// A single chat message.
///
/// Created once and never mutated afterwards; display order is insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message text.
    pub text: String,
    /// Whether the message was written by the user (`true`) or is a reply
    /// from the prediction service (`false`).
    pub is_user: bool,
}

impl ChatMessage {
    /// Build a user-authored entry.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    /// Build a reply entry from the prediction service.
    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

/// A single conversation transcript.
///
/// Transcripts are append-only: entries are never reordered, edited, or
/// removed for the life of the session.
#[derive(Debug)]
pub struct Transcript {
    inner: Arc<TranscriptInner>,
}

#[derive(Debug)]
struct TranscriptInner {
    /// Unique session identifier.
    id: String,
    /// Conversation messages.
    messages: RwLock<Vec<ChatMessage>>,
    /// Session creation time.
    created_at: DateTime<Utc>,
    /// Last activity time.
    last_activity: RwLock<DateTime<Utc>>,
}

impl Clone for Transcript {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Transcript {
    /// Create a new transcript with the given ID.
    fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(TranscriptInner {
                id,
                messages: RwLock::new(Vec::new()),
                created_at: now,
                last_activity: RwLock::new(now),
            }),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Session creation time.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Append a user message.
    pub fn push_user(&self, text: impl Into<String>) {
        self.push(ChatMessage::user(text));
    }

    /// Append a reply from the prediction service.
    pub fn push_bot(&self, text: impl Into<String>) {
        self.push(ChatMessage::bot(text));
    }

    /// Append a message.
    pub fn push(&self, message: ChatMessage) {
        let mut guard = self.inner.messages.write().unwrap();
        guard.push(message);
        drop(guard);
        self.touch();
    }

    /// Get all messages in display order.
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.inner.messages.read().unwrap().clone()
    }

    /// Get the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.messages.read().unwrap().len()
    }

    /// Check whether the transcript is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Update the last activity timestamp.
    fn touch(&self) {
        let mut guard = self.inner.last_activity.write().unwrap();
        *guard = Utc::now();
    }

    /// Check if the session has been inactive longer than the timeout.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self.inner.last_activity.read().unwrap();
        let now = Utc::now();
        if let Ok(duration) = (now - last).to_std() {
            duration > timeout
        } else {
            // Negative duration means clock skew or "last" is in the future.
            false
        }
    }
}

/// Thread-safe store for transcripts.
///
/// Provides methods for creating, retrieving, and cleaning up sessions.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    inner: Arc<TranscriptStoreInner>,
}

#[derive(Debug)]
struct TranscriptStoreInner {
    sessions: RwLock<HashMap<String, Transcript>>,
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptStore {
    /// Create a new store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TranscriptStoreInner {
                sessions: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Create a new transcript with a fresh ID and return it.
    #[must_use]
    pub fn create(&self) -> Transcript {
        let id = Uuid::new_v4().to_string();
        self.create_with_id(id)
    }

    /// Create a new transcript with a specific ID.
    #[must_use]
    pub fn create_with_id(&self, id: impl Into<String>) -> Transcript {
        let id = id.into();
        let transcript = Transcript::new(id.clone());
        let mut guard = self.inner.sessions.write().unwrap();
        guard.insert(id, transcript.clone());
        transcript
    }

    /// Get a transcript by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Transcript> {
        let guard = self.inner.sessions.read().unwrap();
        guard.get(id).cloned()
    }

    /// Get a transcript by ID, creating it if it doesn't exist.
    #[must_use]
    pub fn get_or_create(&self, id: &str) -> Transcript {
        // Try read-only first
        {
            let guard = self.inner.sessions.read().unwrap();
            if let Some(transcript) = guard.get(id) {
                return transcript.clone();
            }
        }

        self.create_with_id(id)
    }

    /// Remove a transcript by ID.
    pub fn remove(&self, id: &str) -> Option<Transcript> {
        let mut guard = self.inner.sessions.write().unwrap();
        guard.remove(id)
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.sessions.read().unwrap().len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions inactive longer than the timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.sessions.write().unwrap();
        let before = guard.len();
        guard.retain(|_, transcript| !transcript.is_expired_with_timeout(timeout));
        before - guard.len()
    }

    /// List all session IDs.
    #[must_use]
    pub fn list_ids(&self) -> Vec<String> {
        self.inner
            .sessions
            .read()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }
}
