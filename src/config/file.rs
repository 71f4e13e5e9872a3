//! TOML configuration file loading
//!
//! Supports `~/.config/omni/railvox/config.toml` as a persistent config
//! source. All fields are optional — the file is a partial overlay on top
//! of defaults and environment variables.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct RailvoxConfigFile {
    /// LLM configuration
    #[serde(default)]
    pub llm: LlmFileConfig,

    /// Voice/audio configuration
    #[serde(default)]
    pub voice: VoiceFileConfig,

    /// API keys for external services
    #[serde(default)]
    pub api_keys: ApiKeysFileConfig,

    /// Call-center persona overrides
    #[serde(default)]
    pub persona: PersonaFileConfig,

    /// Structured data sources
    #[serde(default)]
    pub data: DataFileConfig,
}

/// LLM-related configuration
#[derive(Debug, Default, Deserialize)]
pub struct LlmFileConfig {
    /// Model identifier (e.g. "gemini-1.5-pro")
    pub model: Option<String>,
}

/// Voice processing configuration
#[derive(Debug, Default, Deserialize)]
pub struct VoiceFileConfig {
    /// Enable voice input/output
    pub enabled: Option<bool>,

    /// STT model (e.g. "whisper-1", "deepgram/nova-2")
    pub stt_model: Option<String>,

    /// TTS model (e.g. "tts-1", "elevenlabs/eleven_monolingual_v1")
    pub tts_model: Option<String>,

    /// TTS voice identifier (e.g. "alloy")
    pub tts_voice: Option<String>,

    /// TTS speed multiplier
    pub tts_speed: Option<f32>,

    /// Seconds to record per "Speak" action
    pub capture_timeout_secs: Option<u64>,
}

/// API keys configuration
#[derive(Debug, Default, Deserialize)]
pub struct ApiKeysFileConfig {
    pub gemini: Option<String>,
    pub openai: Option<String>,
    pub elevenlabs: Option<String>,
    pub deepgram: Option<String>,
}

/// Persona overrides (defaults reproduce the stock operator branding)
#[derive(Debug, Default, Deserialize)]
pub struct PersonaFileConfig {
    pub name: Option<String>,
    pub operator: Option<String>,
    pub welcome: Option<String>,
    pub farewell: Option<String>,
    pub emergency_contact: Option<String>,
    pub customer_care: Option<String>,
}

/// Structured data source configuration
#[derive(Debug, Default, Deserialize)]
pub struct DataFileConfig {
    /// Path to the tabular PNR snapshot file
    pub pnr_file: Option<String>,
}

/// Load the TOML config file from the standard path
///
/// Returns `RailvoxConfigFile::default()` if the file doesn't exist or
/// can't be parsed.
pub fn load_config_file() -> RailvoxConfigFile {
    let Some(path) = config_file_path() else {
        return RailvoxConfigFile::default();
    };

    if !path.exists() {
        return RailvoxConfigFile::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                RailvoxConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            RailvoxConfigFile::default()
        }
    }
}

/// Return the config file path: `~/.config/omni/railvox/config.toml`
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| {
        d.config_dir()
            .join("omni")
            .join("railvox")
            .join("config.toml")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_parses_with_defaults() {
        let file: RailvoxConfigFile = toml::from_str(
            r#"
            [llm]
            model = "gemini-1.5-flash"

            [persona]
            name = "Asha"
            "#,
        )
        .unwrap();

        assert_eq!(file.llm.model.as_deref(), Some("gemini-1.5-flash"));
        assert_eq!(file.persona.name.as_deref(), Some("Asha"));
        assert!(file.voice.enabled.is_none());
        assert!(file.api_keys.gemini.is_none());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let file: RailvoxConfigFile = toml::from_str("").unwrap();
        assert!(file.llm.model.is_none());
        assert!(file.data.pnr_file.is_none());
    }
}
