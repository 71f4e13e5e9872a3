//! Conversation session over a remote language model

pub mod gemini;
pub mod session;

use async_trait::async_trait;

use crate::Result;

pub use gemini::GeminiChat;
pub use session::{CallSession, ChatSession, Role, Turn};

/// A conversational backend behind a narrow request/response seam
///
/// The gateway only ever needs one operation: given the persona system
/// prompt, the ordered conversation history and a new message, produce a
/// reply. Remote failures of any kind (network, authentication, quota)
/// surface as a single generic error.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one message and return the reply text
    ///
    /// # Errors
    ///
    /// Returns error when the remote call cannot be completed
    async fn send(&self, system_prompt: &str, history: &[Turn], text: &str) -> Result<String>;
}
