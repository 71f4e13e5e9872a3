//! Query enrichment integration tests
//!
//! Exercises the documented enrichment contract end to end against the
//! embedded reference dataset.

use std::sync::Arc;

use railvox_gateway::{QueryEnricher, RailwayData};

fn enricher() -> QueryEnricher {
    QueryEnricher::new(Arc::new(RailwayData::builtin()))
}

#[test]
fn known_train_number_produces_schedule_context() {
    let raw = "What is the status of train 12345 today?";
    let enriched = enricher().enrich(raw);

    assert!(enriched.contains("Rajdhani Express"));
    assert!(enriched.contains("10:00 AM"));
    assert!(enriched.contains("8:00 PM"));
    assert!(enriched.ends_with(raw));
}

#[test]
fn every_known_train_number_is_detectable() {
    let data = RailwayData::builtin();
    let enricher = enricher();

    for number in data.train_numbers() {
        let query = format!("Is {number} running late?");
        let enriched = enricher.enrich(&query);
        let record = data.train(number).unwrap();

        assert!(
            enriched.contains(&record.train_name),
            "train {number} not enriched: {enriched}"
        );
    }
}

#[test]
fn luggage_policy_question_gets_the_configured_answer() {
    let enriched = enricher().enrich("What is your luggage allowance policy?");

    assert!(enriched.contains(
        "Passengers are allowed to carry 40kg in sleeper class and 50kg in AC classes."
    ));
}

#[test]
fn multiple_faq_topics_all_appear_exactly_once() {
    let enriched =
        enricher().enrich("Explain ticket cancellation and luggage allowance rules");

    assert_eq!(enriched.matches("FAQ Information:").count(), 2);
    assert!(enriched.contains("cancelled up to 4 hours"));
    assert!(enriched.contains("40kg in sleeper class"));
}

#[test]
fn unrelated_text_passes_through_unchanged() {
    let raw = "Do you sell platform tickets at the counter?";
    assert_eq!(enricher().enrich(raw), raw);
}

#[test]
fn context_blocks_precede_the_original_text() {
    let raw = "Is train 67890 covered by the luggage allowance rules?";
    let enriched = enricher().enrich(raw);

    let train_at = enriched.find("Train Information:").unwrap();
    let faq_at = enriched.find("FAQ Information:").unwrap();
    let original_at = enriched.rfind(raw).unwrap();

    assert!(train_at < faq_at);
    assert!(faq_at < original_at);
}
