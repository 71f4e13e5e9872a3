//! Call lifecycle and support-agent integration tests
//!
//! Uses scripted in-memory chat backends; nothing here touches the network.

use std::sync::Arc;

use railvox_gateway::agent::{FALLBACK_REPLY, SupportAgent};
use railvox_gateway::chat::{CallSession, ChatSession};
use railvox_gateway::persona::{Persona, build_system_prompt};
use railvox_gateway::{QueryEnricher, RailwayData};

mod common;

use common::{FailingBackend, ScriptedBackend};

fn agent_with(backend: Arc<ScriptedBackend>) -> SupportAgent {
    let data = Arc::new(RailwayData::builtin());
    let system_prompt = build_system_prompt(&Persona::default(), &data);
    let session = ChatSession::new(backend, system_prompt);
    SupportAgent::new(QueryEnricher::new(data), session)
}

#[tokio::test]
async fn reply_is_returned_verbatim() {
    let backend = Arc::new(ScriptedBackend::new(&["Your train departs at 10:00 AM."]));
    let mut agent = agent_with(Arc::clone(&backend));

    let reply = agent.handle("When does 12345 leave?").await;
    assert_eq!(reply, "Your train departs at 10:00 AM.");
}

#[tokio::test]
async fn backend_receives_the_enriched_prompt() {
    let backend = Arc::new(ScriptedBackend::new(&["ok"]));
    let mut agent = agent_with(Arc::clone(&backend));

    agent.handle("When does 12345 leave?").await;

    let prompts = backend.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Train Information:"));
    assert!(prompts[0].contains("Rajdhani Express"));
    assert!(prompts[0].ends_with("When does 12345 leave?"));
}

#[tokio::test]
async fn backend_failure_degrades_to_fixed_apology() {
    let data = Arc::new(RailwayData::builtin());
    let session = ChatSession::new(Arc::new(FailingBackend), String::new());
    let mut agent = SupportAgent::new(QueryEnricher::new(data), session);

    let reply = agent.handle("When does 12345 leave?").await;
    assert_eq!(reply, FALLBACK_REPLY);

    // The failed exchange is not recorded; an immediate retry starts clean
    assert_eq!(agent.history_len(), 0);
}

#[tokio::test]
async fn conversation_history_grows_by_a_pair_per_exchange() {
    let backend = Arc::new(ScriptedBackend::new(&["first", "second"]));
    let mut session = ChatSession::new(backend, "system".to_string());

    session.send("one").await.unwrap();
    assert_eq!(session.history().len(), 2);

    session.send("two").await.unwrap();
    assert_eq!(session.history().len(), 4);

    session.reset();
    assert!(session.history().is_empty());
}

#[test]
fn call_controls_are_idempotent() {
    let persona = Persona::default();
    let mut call = CallSession::new();

    assert!(call.start(&persona.welcome));
    assert!(!call.start(&persona.welcome), "second start is a no-op");

    assert!(call.end());
    assert!(!call.end(), "second end is a no-op");
}

#[test]
fn ending_a_call_resets_the_transcript() {
    let persona = Persona::default();
    let mut call = CallSession::new();

    call.start(&persona.welcome);
    call.push_user("Is my train on time?");
    call.push_assistant("Yes, it is running on schedule.");
    assert_eq!(call.transcript().len(), 3);

    call.end();
    assert!(call.transcript().is_empty());

    // The next call begins with just a fresh welcome turn
    call.start(&persona.welcome);
    assert_eq!(call.transcript().len(), 1);
    assert_eq!(call.transcript()[0].content, persona.welcome);
}
