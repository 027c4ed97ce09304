//! NIM inference client
//!
//! Fallback resolver for GPU models missing from the static table. Sends a
//! strict-JSON prompt to an OpenAI-compatible chat-completions endpoint and
//! validates the reply into a [`GpuSpec`]. The API key comes from
//! `NVIDIA_API_KEY`, with a local `.env` file honored.

use crate::error::{RaplanError, Result};
use crate::spec::lookup::GpuSpec;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Base URL of the NVIDIA integrate endpoint
pub const NVIDIA_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";

/// Model used for spec resolution
pub const DEFAULT_MODEL: &str = "deepseek-ai/deepseek-v3.1-terminus";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "NVIDIA_API_KEY";

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Client for the OpenAI-compatible chat-completions API
pub struct NimClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl NimClient {
    /// Build a client from `NVIDIA_API_KEY`, loading `.env` first
    pub fn from_env() -> Result<Self> {
        // Ignore a missing .env file; the variable may be set directly.
        let _ = dotenvy::dotenv();
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| RaplanError::MissingApiKey {
            name: API_KEY_ENV.to_string(),
        })?;
        Ok(Self::new(NVIDIA_BASE_URL, api_key))
    }

    /// Build a client against an explicit endpoint (tests use a local one)
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Ask the model for a GPU's memory size, strict JSON only
    pub async fn resolve_gpu_spec(&self, gpu_name: &str) -> Result<GpuSpec> {
        let schema_hint = json!({
            "gpu": gpu_name,
            "memory_gb": 0,
            "notes": ["string"]
        });

        let prompt = format!(
            "Return ONLY valid JSON matching this exact shape (no markdown, no extra keys):\n\
             {}\n\n\
             Task: For the GPU model name \"{}\", fill in memory_gb (GiB) and set notes with any assumptions\n\
             (e.g. multiple variants). If you are unsure, set memory_gb to 0 and explain uncertainty in notes.",
            schema_hint, gpu_name
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You output strict JSON only.".to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.0,
            max_tokens: 200,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(%url, model = %self.model, gpu = gpu_name, "querying spec fallback");

        let response: ChatResponse = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let content = response
            .choices
            .first()
            .map(|c| c.message.content.trim())
            .ok_or_else(|| {
                RaplanError::SpecLookupResponse("response contained no choices".to_string())
            })?;

        let spec: GpuSpec = serde_json::from_str(content)?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: "hello".to_string(),
            }],
            temperature: 0.0,
            max_tokens: 200,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], DEFAULT_MODEL);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["max_tokens"], 200);
    }

    #[test]
    fn test_strict_json_reply_parses_into_spec() {
        let reply = r#"{"gpu": "NVIDIA B200", "memory_gb": 192, "notes": ["HBM3e config"]}"#;
        let spec: GpuSpec = serde_json::from_str(reply).unwrap();
        assert_eq!(spec.memory_gb, 192);
        assert_eq!(spec.notes.len(), 1);
    }

    #[test]
    fn test_markdown_reply_is_rejected() {
        let reply = "```json\n{\"gpu\": \"x\", \"memory_gb\": 1}\n```";
        assert!(serde_json::from_str::<GpuSpec>(reply).is_err());
    }
}
