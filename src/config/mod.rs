//! Configuration management for the Railvox gateway
//!
//! Layering, lowest to highest precedence: built-in defaults, the TOML
//! config file, environment variables, CLI flags (applied by `main`).

pub mod file;

use std::path::PathBuf;

use secrecy::SecretString;

use crate::persona::Persona;
use crate::{Error, Result};

/// Railvox gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Call-center persona
    pub persona: Persona,

    /// Voice configuration
    pub voice: VoiceConfig,

    /// API keys
    pub api_keys: ApiKeys,

    /// LLM model identifier for chat completions
    pub llm_model: String,

    /// Path to the tabular PNR snapshot file, when configured
    pub pnr_file: Option<PathBuf>,
}

/// Voice processing configuration
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    /// Enable voice input/output
    pub enabled: bool,

    /// STT model (e.g. "whisper-1", "deepgram/nova-2")
    pub stt_model: String,

    /// TTS model (e.g. "tts-1", "elevenlabs/eleven_monolingual_v1")
    pub tts_model: String,

    /// TTS voice identifier
    pub tts_voice: String,

    /// TTS speed multiplier (0.25 to 4.0)
    pub tts_speed: f32,

    /// Seconds to record per "Speak" action
    pub capture_timeout_secs: u64,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            stt_model: "whisper-1".to_string(),
            tts_model: "tts-1".to_string(),
            tts_voice: "alloy".to_string(),
            tts_speed: 1.0,
            capture_timeout_secs: 5,
        }
    }
}

/// API keys for external services
///
/// The Gemini key is the only required credential; it is wrapped so it
/// never appears in Debug output or logs.
#[derive(Debug, Clone)]
pub struct ApiKeys {
    /// Gemini API key (conversational model, required)
    pub gemini: SecretString,

    /// `OpenAI` API key (Whisper STT and TTS)
    pub openai: Option<String>,

    /// `ElevenLabs` API key (optional TTS)
    pub elevenlabs: Option<String>,

    /// `Deepgram` API key (optional STT)
    pub deepgram: Option<String>,
}

impl Config {
    /// Load configuration from the config file and environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the conversational model
    /// credential is absent — a fatal condition at startup.
    pub fn load(disable_voice: bool) -> Result<Self> {
        let file = file::load_config_file();

        let gemini = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or(file.api_keys.gemini)
            .ok_or_else(|| {
                Error::Config(
                    "GEMINI_API_KEY not set (environment or config file); \
                     the conversational model credential is required"
                        .to_string(),
                )
            })?;

        let api_keys = ApiKeys {
            gemini: SecretString::from(gemini),
            openai: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .or(file.api_keys.openai),
            elevenlabs: std::env::var("ELEVENLABS_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .or(file.api_keys.elevenlabs),
            deepgram: std::env::var("DEEPGRAM_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .or(file.api_keys.deepgram),
        };

        let defaults = VoiceConfig::default();
        let mut voice = VoiceConfig {
            enabled: file.voice.enabled.unwrap_or(true),
            stt_model: file.voice.stt_model.unwrap_or(defaults.stt_model),
            tts_model: file.voice.tts_model.unwrap_or(defaults.tts_model),
            tts_voice: file.voice.tts_voice.unwrap_or(defaults.tts_voice),
            tts_speed: file.voice.tts_speed.unwrap_or(defaults.tts_speed),
            capture_timeout_secs: file
                .voice
                .capture_timeout_secs
                .unwrap_or(defaults.capture_timeout_secs),
        };

        if disable_voice {
            voice.enabled = false;
        } else if voice.enabled && !has_voice_keys(&api_keys, &voice) {
            tracing::info!("no STT/TTS credentials configured, voice disabled");
            voice.enabled = false;
        }

        let llm_model = std::env::var("RAILVOX_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .or(file.llm.model)
            .unwrap_or_else(|| "gemini-1.5-pro".to_string());

        let pnr_file = std::env::var("RAILVOX_PNR_FILE")
            .ok()
            .filter(|p| !p.is_empty())
            .or(file.data.pnr_file)
            .map(PathBuf::from);

        let stock = Persona::default();
        let persona = Persona {
            name: file.persona.name.unwrap_or(stock.name),
            operator: file.persona.operator.unwrap_or(stock.operator),
            welcome: file.persona.welcome.unwrap_or(stock.welcome),
            farewell: file.persona.farewell.unwrap_or(stock.farewell),
            emergency_contact: file
                .persona
                .emergency_contact
                .unwrap_or(stock.emergency_contact),
            customer_care: file.persona.customer_care.unwrap_or(stock.customer_care),
        };

        Ok(Self {
            persona,
            voice,
            api_keys,
            llm_model,
            pnr_file,
        })
    }
}

/// Whether the configured STT/TTS models have usable credentials
fn has_voice_keys(keys: &ApiKeys, voice: &VoiceConfig) -> bool {
    let stt_ok = if voice.stt_model.starts_with("deepgram/") {
        keys.deepgram.is_some()
    } else {
        keys.openai.is_some()
    };

    let tts_ok = if voice.tts_model.starts_with("elevenlabs/") {
        keys.elevenlabs.is_some()
    } else {
        keys.openai.is_some()
    };

    stt_ok && tts_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(openai: bool, deepgram: bool, elevenlabs: bool) -> ApiKeys {
        ApiKeys {
            gemini: SecretString::from("test-key"),
            openai: openai.then(|| "sk-test".to_string()),
            elevenlabs: elevenlabs.then(|| "el-test".to_string()),
            deepgram: deepgram.then(|| "dg-test".to_string()),
        }
    }

    #[test]
    fn openai_key_covers_default_models() {
        let voice = VoiceConfig::default();
        assert!(has_voice_keys(&keys(true, false, false), &voice));
        assert!(!has_voice_keys(&keys(false, true, true), &voice));
    }

    #[test]
    fn provider_prefixed_models_need_their_own_keys() {
        let voice = VoiceConfig {
            stt_model: "deepgram/nova-2".to_string(),
            tts_model: "elevenlabs/eleven_monolingual_v1".to_string(),
            ..VoiceConfig::default()
        };
        assert!(has_voice_keys(&keys(false, true, true), &voice));
        assert!(!has_voice_keys(&keys(true, false, true), &voice));
    }

    #[test]
    fn default_capture_window_is_five_seconds() {
        assert_eq!(VoiceConfig::default().capture_timeout_secs, 5);
    }
}
