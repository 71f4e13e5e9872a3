//! Support agent: one enrich-and-reply turn per user action

use crate::chat::ChatSession;
use crate::enrich::QueryEnricher;

/// Fixed user-facing reply when the conversational backend fails
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't process that request.";

/// Runs the enrich -> send pipeline for each customer utterance
pub struct SupportAgent {
    enricher: QueryEnricher,
    session: ChatSession,
}

impl SupportAgent {
    /// Create an agent from an enricher and an initialized chat session
    #[must_use]
    pub fn new(enricher: QueryEnricher, session: ChatSession) -> Self {
        Self { enricher, session }
    }

    /// Answer one customer utterance
    ///
    /// The raw text is enriched with any matched structured context and
    /// handed to the conversation session unmodified. A backend failure
    /// degrades to the fixed fallback reply; the underlying error is
    /// logged, never shown to the customer.
    pub async fn handle(&mut self, raw_text: &str) -> String {
        let prompt = self.enricher.enrich(raw_text);

        match self.session.send(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "chat turn failed");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Clear the conversation history (call ended)
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// The conversation session's turn count, for diagnostics
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.session.history().len()
    }
}
