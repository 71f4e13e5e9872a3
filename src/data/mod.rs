//! Read-only structured railway reference data
//!
//! Train schedules and FAQ answers ship as an embedded dataset loaded once
//! at startup; PNR records come from an external tabular file (see [`pnr`]).
//! All lookups are exact-match on normalized keys. No fuzzy matching.

pub mod pnr;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use pnr::{PnrRecord, PnrStore};

/// A single train's schedule entry
///
/// The train number is the map key in [`RailwayData`], not a field here,
/// mirroring how the records are keyed in the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainRecord {
    /// Display name, e.g. "Rajdhani Express"
    pub train_name: String,
    /// Departure time as shown to customers, e.g. "10:00 AM"
    pub departure_time: String,
    /// Arrival time as shown to customers, e.g. "8:00 PM"
    pub arrival_time: String,
    /// Operating days in display order, e.g. ["Monday", "Wednesday"] or ["Daily"]
    pub days_of_operation: Vec<String>,
}

/// Immutable reference data for train schedules and FAQs
///
/// Backed by ordered maps so iteration order is deterministic: when more
/// than one train number matches a query, the lexicographically smallest
/// key is always the first encountered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RailwayData {
    /// Train number -> schedule record
    pub train_schedules: BTreeMap<String, TrainRecord>,
    /// FAQ topic (lower-case) -> answer text
    pub faqs: BTreeMap<String, String>,
}

impl RailwayData {
    /// The embedded reference dataset loaded at startup
    #[must_use]
    pub fn builtin() -> Self {
        let mut train_schedules = BTreeMap::new();
        train_schedules.insert(
            "12345".to_string(),
            TrainRecord {
                train_name: "Rajdhani Express".to_string(),
                departure_time: "10:00 AM".to_string(),
                arrival_time: "8:00 PM".to_string(),
                days_of_operation: vec![
                    "Monday".to_string(),
                    "Wednesday".to_string(),
                    "Friday".to_string(),
                ],
            },
        );
        train_schedules.insert(
            "67890".to_string(),
            TrainRecord {
                train_name: "Shatabdi Express".to_string(),
                departure_time: "6:00 AM".to_string(),
                arrival_time: "2:00 PM".to_string(),
                days_of_operation: vec!["Daily".to_string()],
            },
        );

        let mut faqs = BTreeMap::new();
        faqs.insert(
            "ticket_cancellation".to_string(),
            "Tickets can be cancelled up to 4 hours before the train's departure.".to_string(),
        );
        faqs.insert(
            "luggage_allowance".to_string(),
            "Passengers are allowed to carry 40kg in sleeper class and 50kg in AC classes."
                .to_string(),
        );

        Self {
            train_schedules,
            faqs,
        }
    }

    /// Look up a train's schedule by its exact number
    #[must_use]
    pub fn train(&self, train_number: &str) -> Option<&TrainRecord> {
        self.train_schedules.get(train_number)
    }

    /// Look up an FAQ answer by topic (trimmed, case-insensitive)
    #[must_use]
    pub fn faq(&self, topic: &str) -> Option<&str> {
        self.faqs
            .get(&topic.trim().to_lowercase())
            .map(String::as_str)
    }

    /// All known train numbers in ascending key order
    pub fn train_numbers(&self) -> impl Iterator<Item = &str> {
        self.train_schedules.keys().map(String::as_str)
    }

    /// All known FAQ topics in ascending key order
    pub fn faq_topics(&self) -> impl Iterator<Item = &str> {
        self.faqs.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_has_expected_trains() {
        let data = RailwayData::builtin();

        let rajdhani = data.train("12345").unwrap();
        assert_eq!(rajdhani.train_name, "Rajdhani Express");
        assert_eq!(rajdhani.departure_time, "10:00 AM");
        assert_eq!(rajdhani.arrival_time, "8:00 PM");
        assert_eq!(
            rajdhani.days_of_operation,
            vec!["Monday", "Wednesday", "Friday"]
        );

        let shatabdi = data.train("67890").unwrap();
        assert_eq!(shatabdi.train_name, "Shatabdi Express");
        assert_eq!(shatabdi.days_of_operation, vec!["Daily"]);
    }

    #[test]
    fn train_lookup_is_exact() {
        let data = RailwayData::builtin();
        assert!(data.train("1234").is_none());
        assert!(data.train("123456").is_none());
        assert!(data.train("").is_none());
    }

    #[test]
    fn faq_lookup_normalizes_topic() {
        let data = RailwayData::builtin();

        let answer = data.faq("LUGGAGE_ALLOWANCE").unwrap();
        assert!(answer.contains("40kg"));

        assert_eq!(data.faq("  ticket_cancellation  "), data.faq("ticket_cancellation"));
        assert!(data.faq("refund_policy").is_none());
    }

    #[test]
    fn train_numbers_iterate_in_ascending_order() {
        let data = RailwayData::builtin();
        let numbers: Vec<&str> = data.train_numbers().collect();
        assert_eq!(numbers, vec!["12345", "67890"]);
    }
}
