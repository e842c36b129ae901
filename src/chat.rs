// src/chat.rs
// Canonical chat request, instruction composition, and the relay service

use std::sync::Arc;
use tracing::debug;

use crate::error::{PricelError, Result};
use crate::llm::ChatModel;
use crate::prompts::{Namespace, PromptStore};

pub const DEFAULT_CONSTRUCT: &str = "pricel";
pub const DEFAULT_FORMAT: &str = "short";

/// Canonical request, after wire-shape normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub text: String,
    pub construct: String,
    pub response_format: String,
}

impl ChatRequest {
    /// Request with the default selectors
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            construct: DEFAULT_CONSTRUCT.to_string(),
            response_format: DEFAULT_FORMAT.to_string(),
        }
    }
}

/// Join personality and format text into one system instruction.
///
/// Personality comes first: it takes precedence when the model reads
/// conflicting guidance.
pub fn compose_instruction(personality: &str, format: &str) -> String {
    format!("{personality}\n\n{format}")
}

/// Collapse every maximal run of whitespace (including newlines) to a
/// single space and trim the ends. Idempotent.
pub fn normalize_reply(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve prompts, call the model, normalize the reply
pub struct ChatService {
    prompts: Arc<dyn PromptStore>,
    model: Arc<dyn ChatModel>,
}

impl ChatService {
    pub fn new(prompts: Arc<dyn PromptStore>, model: Arc<dyn ChatModel>) -> Self {
        Self { prompts, model }
    }

    /// One stateless turn. Each call starts a fresh model conversation;
    /// no history is retained between requests.
    pub async fn respond(&self, request: &ChatRequest) -> Result<String> {
        let personality = self
            .prompts
            .resolve(Namespace::Construct, &request.construct)?;
        let format = self
            .prompts
            .resolve(Namespace::ResponseFormat, &request.response_format)?;
        let instruction = compose_instruction(&personality, &format);

        debug!(
            construct = %request.construct,
            response_format = %request.response_format,
            instruction_len = instruction.len(),
            "dispatching chat turn"
        );

        // No retry: any provider failure surfaces with its message intact
        let reply = self
            .model
            .generate(&instruction, &request.text)
            .await
            .map_err(|e| PricelError::Provider(e.to_string()))?;

        Ok(normalize_reply(&reply))
    }
}
