//! Railvox Gateway - Voice customer-service gateway for railway operators
//!
//! This library provides the core functionality for the Railvox gateway:
//! - Query enrichment (structured schedule/FAQ/PNR context injection)
//! - Stateful conversation sessions over a remote language model
//! - Voice processing (push-to-talk capture, STT, TTS)
//! - An interactive call console
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  Call Console                        │
//! │   Start/End Call  │  Speak  │  Type  │  Transcript  │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                 Support Agent                        │
//! │   Query Enricher  │  Railway Data  │  PNR Store     │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │            Conversation Session                      │
//! │   Gemini generateContent  │  STT  │  TTS            │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod agent;
pub mod chat;
pub mod config;
pub mod console;
pub mod data;
pub mod enrich;
pub mod error;
pub mod persona;
pub mod voice;

pub use agent::{FALLBACK_REPLY, SupportAgent};
pub use chat::{CallSession, ChatBackend, ChatSession, GeminiChat, Role, Turn};
pub use config::{ApiKeys, Config, VoiceConfig};
pub use console::Console;
pub use data::{PnrRecord, PnrStore, RailwayData, TrainRecord};
pub use enrich::{Matcher, QueryEnricher, SubstringMatcher};
pub use error::{Error, Result};
pub use persona::{Persona, build_system_prompt};
