// src/llm/gemini/client.rs
// Gemini generateContent client (non-streaming, single turn)

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use super::types::{
    block_none_safety_settings, GeminiContent, GeminiRequest, GeminiResponse,
    GeminiSystemInstruction, GeminiTextPart,
};
use crate::llm::ChatModel;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Create a new Gemini client with the default model
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    /// Create a new Gemini client with a custom model
    pub fn with_model(api_key: String, model: String) -> Self {
        Self::with_http_client(api_key, model, reqwest::Client::new())
    }

    /// Create a new Gemini client with a shared HTTP client
    pub fn with_http_client(api_key: String, model: String, http: reqwest::Client) -> Self {
        Self { api_key, model, http }
    }

    fn build_request(instruction: &str, message: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiTextPart {
                    text: message.to_string(),
                }],
            }],
            system_instruction: GeminiSystemInstruction {
                parts: vec![GeminiTextPart {
                    text: instruction.to_string(),
                }],
            },
            safety_settings: block_none_safety_settings(),
        }
    }

    /// First candidate, text parts concatenated
    fn extract_text(response: &GeminiResponse) -> Result<String> {
        let candidate = response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .ok_or_else(|| anyhow!("Gemini returned no candidates"))?;

        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            return Err(anyhow!("Gemini candidate contained no text"));
        }

        Ok(text)
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, instruction: &str, message: &str) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();

        info!(
            request_id = %request_id,
            model = %self.model,
            message_len = message.len(),
            "starting Gemini request"
        );

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        );
        let request = Self::build_request(instruction, message);

        // No per-request timeout: this call is the sole await point of
        // a chat turn and is not cancellable once issued
        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Gemini API error: {} - {}", status, body));
        }

        let data: GeminiResponse = response.json().await?;

        if let Some(error) = &data.error {
            return Err(anyhow!("Gemini error: {}", error.message));
        }

        let text = Self::extract_text(&data)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let usage = data.usage_metadata.as_ref();
        info!(
            request_id = %request_id,
            duration_ms,
            prompt_tokens = usage.and_then(|u| u.prompt_token_count).unwrap_or(0),
            completion_tokens = usage.and_then(|u| u.candidates_token_count).unwrap_or(0),
            "Gemini request complete"
        );
        debug!(request_id = %request_id, reply_len = text.len(), "Gemini reply received");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        let client = GeminiClient::new("test_key".to_string());
        assert_eq!(client.model_name(), "gemini-1.5-flash");
    }

    #[test]
    fn test_custom_model() {
        let client = GeminiClient::with_model("test_key".to_string(), "gemini-1.5-pro".to_string());
        assert_eq!(client.model_name(), "gemini-1.5-pro");
    }

    #[test]
    fn test_request_carries_system_instruction_and_safety_settings() {
        let request = GeminiClient::build_request("persona\n\nformat", "Hello");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["systemInstruction"]["parts"][0]["text"],
            "persona\n\nformat"
        );
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Hello");

        let settings = value["safetySettings"].as_array().unwrap();
        assert_eq!(settings.len(), 4);
        for setting in settings {
            assert_eq!(setting["threshold"], "BLOCK_NONE");
        }
        let categories: Vec<&str> = settings
            .iter()
            .map(|s| s["category"].as_str().unwrap())
            .collect();
        assert!(categories.contains(&"HARM_CATEGORY_HARASSMENT"));
        assert!(categories.contains(&"HARM_CATEGORY_HATE_SPEECH"));
        assert!(categories.contains(&"HARM_CATEGORY_SEXUALLY_EXPLICIT"));
        assert!(categories.contains(&"HARM_CATEGORY_DANGEROUS_CONTENT"));
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let data: GeminiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Hello "}, {"text": "world"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(GeminiClient::extract_text(&data).unwrap(), "Hello world");
    }

    #[test]
    fn test_extract_text_rejects_empty_candidates() {
        let data: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        let err = GeminiClient::extract_text(&data).unwrap_err();
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn test_extract_text_rejects_textless_candidate() {
        let data: GeminiResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        let err = GeminiClient::extract_text(&data).unwrap_err();
        assert!(err.to_string().contains("no text"));
    }

    #[test]
    fn test_error_body_parses() {
        let data: GeminiResponse =
            serde_json::from_str(r#"{"error": {"message": "API key not valid"}}"#).unwrap();
        assert_eq!(data.error.unwrap().message, "API key not valid");
    }
}
