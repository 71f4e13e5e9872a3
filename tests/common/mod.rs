//! Shared test utilities

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use railvox_gateway::chat::{ChatBackend, Turn};
use railvox_gateway::{Error, Result};

/// Backend that replays canned replies and records every prompt it receives
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    #[must_use]
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(ToString::to_string).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn send(&self, _system_prompt: &str, _history: &[Turn], text: &str) -> Result<String> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(text.to_string());

        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .ok_or_else(|| Error::Chat("script exhausted".to_string()))
    }
}

/// Backend that always fails, like an unreachable remote model
pub struct FailingBackend;

#[async_trait]
impl ChatBackend for FailingBackend {
    async fn send(&self, _system_prompt: &str, _history: &[Turn], _text: &str) -> Result<String> {
        Err(Error::Chat("connection refused".to_string()))
    }
}
