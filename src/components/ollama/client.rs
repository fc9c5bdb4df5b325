use super::models::ModelProposal;
use crate::components::ModelGateway;
use crate::error::{ollama_error, BotResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Client for a local Ollama chat endpoint
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl ModelGateway for OllamaClient {
    /// Ask the model for a time slot. Sampling is deterministic (temperature
    /// zero), so identical prompts are expected to produce identical replies.
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> BotResult<ModelProposal> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "stream": false,
            "format": "json",
            "options": { "temperature": 0.0 },
        });

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ollama_error(&format!("Request to Ollama failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(ollama_error(&format!(
                "Ollama returned HTTP {} - {}",
                status, error_body
            )));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| ollama_error(&format!("Failed to parse Ollama response: {}", e)))?;

        let content = strip_code_fences(&reply.message.content);
        serde_json::from_str(content).map_err(|e| {
            ollama_error(&format!(
                "Model reply is not a JSON object: {} (reply was: {})",
                e, reply.message.content
            ))
        })
    }
}

/// Some models wrap their JSON in a Markdown code fence even when told not to
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
