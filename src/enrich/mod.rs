//! Query enrichment: attach structured facts to free-text queries
//!
//! Scans raw user text for recognizable structured references (train
//! numbers, FAQ topics) and prepends the matched records as labeled context
//! blocks, producing the prompt handed to the conversation session.

pub mod matcher;

use std::fmt::Write;
use std::sync::Arc;

use crate::data::{RailwayData, TrainRecord};

pub use matcher::{Matcher, SubstringMatcher};

/// Enriches raw utterances with structured context from [`RailwayData`]
///
/// Reads the data store only; never mutates it.
pub struct QueryEnricher {
    data: Arc<RailwayData>,
    matcher: Box<dyn Matcher>,
}

impl QueryEnricher {
    /// Create an enricher with the default substring matcher
    #[must_use]
    pub fn new(data: Arc<RailwayData>) -> Self {
        Self::with_matcher(data, Box::new(SubstringMatcher))
    }

    /// Create an enricher with a custom matching strategy
    #[must_use]
    pub fn with_matcher(data: Arc<RailwayData>, matcher: Box<dyn Matcher>) -> Self {
        Self { data, matcher }
    }

    /// Build the enriched prompt for a raw utterance
    ///
    /// Output order: [train context if any] then [FAQ context blocks, one
    /// per matched topic] then the original text. Text matching nothing is
    /// returned unchanged.
    ///
    /// Train numbers are matched case-sensitively against the raw text; a
    /// single record is attached. Iteration is in ascending key order, so
    /// when several numbers match, the lexicographically smallest wins.
    /// FAQ topics are matched against the lower-cased text and every match
    /// is attached.
    #[must_use]
    pub fn enrich(&self, raw_text: &str) -> String {
        let mut context = String::new();

        let train_match = self
            .data
            .train_schedules
            .iter()
            .find(|(number, _)| self.matcher.is_match(raw_text, number));

        if let Some((number, record)) = train_match {
            tracing::debug!(train = %number, "train reference matched");
            let _ = writeln!(context, "Train Information: {}", train_json(record));
        }

        let lowered = raw_text.to_lowercase();
        for (topic, answer) in &self.data.faqs {
            // Topics are stored snake_case but spoken with spaces; accept both
            let spoken = topic.replace('_', " ");
            if self.matcher.is_match(&lowered, topic) || self.matcher.is_match(&lowered, &spoken) {
                tracing::debug!(topic = %topic, "FAQ topic matched");
                let _ = writeln!(context, "FAQ Information: {answer}");
            }
        }

        if context.is_empty() {
            raw_text.to_string()
        } else {
            format!("{context}{raw_text}")
        }
    }
}

/// Serialize a train record to its compact context form
fn train_json(record: &TrainRecord) -> String {
    serde_json::to_string(record).unwrap_or_default()
}
