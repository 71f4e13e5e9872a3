//! Conversation history and call lifecycle state

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::ChatBackend;
use crate::Result;

/// Speaker of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One (role, content) entry in a transcript
#[derive(Debug, Clone)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    /// Create a turn stamped with the current time
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            at: Utc::now(),
        }
    }
}

/// A stateful conversation with the language model
///
/// Owns the ordered history sent with every request. Each successful
/// exchange appends a (user, text) then (assistant, reply) pair; a failed
/// exchange leaves the history untouched so the caller may simply retry.
pub struct ChatSession {
    backend: Arc<dyn ChatBackend>,
    system_prompt: String,
    history: Vec<Turn>,
}

impl ChatSession {
    /// Initialize a session with the persona system prompt
    #[must_use]
    pub fn new(backend: Arc<dyn ChatBackend>, system_prompt: String) -> Self {
        Self {
            backend,
            system_prompt,
            history: Vec::new(),
        }
    }

    /// Send a message and record the exchange
    ///
    /// # Errors
    ///
    /// Returns error when the backend call fails; the history is not
    /// modified in that case.
    pub async fn send(&mut self, text: &str) -> Result<String> {
        let reply = self
            .backend
            .send(&self.system_prompt, &self.history, text)
            .await?;

        self.history.push(Turn::new(Role::User, text));
        self.history.push(Turn::new(Role::Assistant, reply.clone()));

        Ok(reply)
    }

    /// The conversation history so far
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Clear the conversation history
    pub fn reset(&mut self) {
        self.history.clear();
    }
}

/// One bounded customer call: an active flag plus the display transcript
///
/// Created inactive. Starting appends a welcome turn; ending clears the
/// transcript after the farewell is delivered. Both transitions are
/// no-ops when the session is already in the target state.
#[derive(Debug, Default)]
pub struct CallSession {
    id: Option<Uuid>,
    active: bool,
    transcript: Vec<Turn>,
}

impl CallSession {
    /// Create an inactive session with an empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to active and append the welcome turn
    ///
    /// Returns false (and does nothing) when a call is already active.
    pub fn start(&mut self, welcome: &str) -> bool {
        if self.active {
            return false;
        }

        let id = Uuid::new_v4();
        tracing::info!(call = %id, "call started");

        self.id = Some(id);
        self.active = true;
        self.transcript.push(Turn::new(Role::Assistant, welcome));
        true
    }

    /// Transition to inactive and clear the transcript
    ///
    /// The caller renders and speaks the farewell turn before the
    /// transcript is dropped; the next call starts empty.
    ///
    /// Returns false (and does nothing) when no call is active.
    pub fn end(&mut self) -> bool {
        if !self.active {
            return false;
        }

        if let Some(id) = self.id.take() {
            tracing::info!(call = %id, turns = self.transcript.len(), "call ended");
        }

        self.active = false;
        self.transcript.clear();
        true
    }

    /// Append a customer turn to the transcript
    pub fn push_user(&mut self, text: &str) {
        self.transcript.push(Turn::new(Role::User, text));
    }

    /// Append an assistant turn to the transcript
    pub fn push_assistant(&mut self, text: &str) {
        self.transcript.push(Turn::new(Role::Assistant, text));
    }

    /// Whether a call is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The ordered transcript of the current call
    #[must_use]
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_inactive_and_empty() {
        let call = CallSession::new();
        assert!(!call.is_active());
        assert!(call.transcript().is_empty());
    }

    #[test]
    fn start_appends_welcome_turn() {
        let mut call = CallSession::new();
        assert!(call.start("Hello, this is Raj."));
        assert!(call.is_active());

        let transcript = call.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, Role::Assistant);
        assert_eq!(transcript[0].content, "Hello, this is Raj.");
    }

    #[test]
    fn start_when_active_is_a_no_op() {
        let mut call = CallSession::new();
        call.start("welcome");
        assert!(!call.start("welcome again"));
        assert_eq!(call.transcript().len(), 1);
    }

    #[test]
    fn end_when_inactive_is_a_no_op() {
        let mut call = CallSession::new();
        assert!(!call.end());
        assert!(call.transcript().is_empty());
    }

    #[test]
    fn end_clears_the_transcript() {
        let mut call = CallSession::new();
        call.start("welcome");
        call.push_user("question");
        call.push_assistant("answer");

        assert!(call.end());
        assert!(!call.is_active());
        assert!(call.transcript().is_empty());
    }

    #[test]
    fn restart_begins_with_single_fresh_welcome() {
        let mut call = CallSession::new();
        call.start("first welcome");
        call.push_user("question");
        call.end();

        call.start("second welcome");
        let transcript = call.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].content, "second welcome");
    }

    #[test]
    fn role_display_matches_wire_names() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
        assert_eq!(Role::System.to_string(), "system");
    }
}
