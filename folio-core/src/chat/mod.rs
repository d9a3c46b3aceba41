//! Quota-limited chat session control.
//!
//! Each session owns its transcript and a counter of backend-served turns.
//! The first five turns go to the completion relay; after that the session
//! switches to the local fallback generator for good. Backend failures are
//! absorbed into an apologetic reply and never count against the quota.

pub mod backend;
pub mod fallback;
pub mod prompt;

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::constants::chat;
use crate::profile::Profile;
use backend::{CompletionBackend, WireMessage};

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

impl ChatRole {
    fn wire_name(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::System => "system",
        }
    }
}

/// One transcript entry. The transcript is append-only for the lifetime of
/// the session.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Which path answers the next turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Backend calls permitted.
    Live,
    /// Quota exhausted; local generation only.
    Fallback,
}

/// One user's conversation with the assistant.
///
/// Turns are serialized by `&mut self`: a second submission cannot start
/// while one is awaiting the backend.
pub struct ChatSession {
    profile: Arc<Profile>,
    backend: Box<dyn CompletionBackend>,
    transcript: Vec<ChatMessage>,
    answered_by_backend: u32,
}

impl ChatSession {
    pub fn new(profile: Arc<Profile>, backend: Box<dyn CompletionBackend>) -> Self {
        Self {
            profile,
            backend,
            transcript: vec![ChatMessage::new(ChatRole::Assistant, chat::GREETING)],
            answered_by_backend: 0,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Turns answered by the backend so far. Never decreases.
    pub fn backend_turns(&self) -> u32 {
        self.answered_by_backend
    }

    pub fn mode(&self) -> ChatMode {
        if self.answered_by_backend >= chat::MAX_BACKEND_TURNS {
            ChatMode::Fallback
        } else {
            ChatMode::Live
        }
    }

    /// Submit one user message and append the assistant's reply (or, on the
    /// quota-exhaustion turn, the reply plus the quota notice). Returns the
    /// messages appended this turn. Empty input appends nothing.
    pub async fn submit(&mut self, user_text: &str) -> Vec<ChatMessage> {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            return Vec::new();
        }

        let first_new = self.transcript.len();
        self.transcript
            .push(ChatMessage::new(ChatRole::User, user_text));

        match self.mode() {
            ChatMode::Live => self.answer_live().await,
            ChatMode::Fallback => self.answer_from_fallback(user_text),
        }

        self.transcript[first_new..].to_vec()
    }

    async fn answer_live(&mut self) {
        let messages = self.wire_transcript();
        match self.backend.complete(&messages).await {
            Ok(reply) => {
                self.transcript
                    .push(ChatMessage::new(ChatRole::Assistant, reply));
                self.answered_by_backend += 1;
                debug!(
                    turns = self.answered_by_backend,
                    "backend answered chat turn"
                );
                if self.answered_by_backend == chat::MAX_BACKEND_TURNS {
                    self.transcript
                        .push(ChatMessage::new(ChatRole::Assistant, chat::QUOTA_NOTICE));
                }
            }
            Err(err) => {
                // Failures are user-visible but non-fatal, and do not count
                // against the quota.
                warn!(error = %err, "chat backend call failed");
                self.transcript
                    .push(ChatMessage::new(ChatRole::Assistant, chat::CONNECTION_TROUBLE));
            }
        }
    }

    fn answer_from_fallback(&mut self, user_text: &str) {
        let reply = fallback::fallback_reply(user_text, &self.profile);
        self.transcript
            .push(ChatMessage::new(ChatRole::Assistant, reply));
    }

    /// The full transcript as wire messages, prefixed with the synthesized
    /// system prompt.
    fn wire_transcript(&self) -> Vec<WireMessage> {
        let mut messages = vec![WireMessage::new(
            "system",
            prompt::system_prompt(&self.profile),
        )];
        messages.extend(
            self.transcript
                .iter()
                .map(|msg| WireMessage::new(msg.role.wire_name(), msg.content.clone())),
        );
        messages
    }
}
