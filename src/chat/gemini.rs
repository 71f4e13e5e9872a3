//! Gemini conversational backend
//!
//! Drives the `generateContent` endpoint of the Generative Language API.
//! The full conversation history travels with every request; the remote
//! side holds no session state.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{ChatBackend, Role, Turn};
use crate::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// One content part
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// A role-tagged message in the request/response body
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

/// Sampling parameters sent with every request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Chat client for the Gemini API
pub struct GeminiChat {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiChat {
    /// Create a new Gemini chat client
    ///
    /// # Errors
    ///
    /// Returns error if the API key is missing
    pub fn new(api_key: SecretString, model: String) -> Result<Self> {
        if api_key.expose_secret().is_empty() {
            return Err(Error::Config(
                "Gemini API key required for chat".to_string(),
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the base URL (useful for testing or proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// The configured model identifier
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Map a transcript role to the wire role name
///
/// Gemini calls the assistant side "model". System turns never appear in
/// `contents`; the system prompt travels in `systemInstruction`.
fn wire_role(role: Role) -> &'static str {
    match role {
        Role::Assistant => "model",
        Role::System | Role::User => "user",
    }
}

/// Convert history plus the new message into request contents
fn build_contents(history: &[Turn], text: &str) -> Vec<Content> {
    let mut contents: Vec<Content> = history
        .iter()
        .filter(|turn| turn.role != Role::System)
        .map(|turn| Content {
            role: Some(wire_role(turn.role).to_string()),
            parts: vec![Part {
                text: turn.content.clone(),
            }],
        })
        .collect();

    contents.push(Content {
        role: Some("user".to_string()),
        parts: vec![Part {
            text: text.to_string(),
        }],
    });

    contents
}

#[async_trait]
impl ChatBackend for GeminiChat {
    async fn send(&self, system_prompt: &str, history: &[Turn], text: &str) -> Result<String> {
        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_prompt.to_string(),
                }],
            },
            contents: build_contents(history, text),
            generation_config: GenerationConfig::default(),
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        tracing::debug!(model = %self.model, turns = history.len(), "sending chat request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "chat request failed");
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Gemini API error");
            return Err(Error::Chat(format!("Gemini API error {status}: {body}")));
        }

        let result: GenerateResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse chat response");
            e
        })?;

        let reply: String = result
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if reply.is_empty() {
            return Err(Error::Chat("empty response from model".to_string()));
        }

        tracing::debug!(reply_chars = reply.len(), "chat reply received");
        Ok(reply)
    }
}
