//! Error types for the Railvox gateway

use thiserror::Error;

/// Result type alias for Railvox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Railvox gateway
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing credential, bad config file)
    #[error("configuration error: {0}")]
    Config(String),

    /// Conversational model error (remote call could not be completed)
    #[error("chat error: {0}")]
    Chat(String),

    /// Structured data error (unreadable or malformed data source)
    #[error("data error: {0}")]
    Data(String),

    /// Audio device error
    #[error("audio error: {0}")]
    Audio(String),

    /// Speech-to-text error
    #[error("STT error: {0}")]
    Stt(String),

    /// Text-to-speech error
    #[error("TTS error: {0}")]
    Tts(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
