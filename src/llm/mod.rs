// src/llm/mod.rs
// Generative model provider abstraction

pub mod gemini;

pub use gemini::GeminiClient;

use anyhow::Result;
use async_trait::async_trait;

/// One-shot generative model call.
///
/// Each invocation is a fresh single-turn conversation under the given
/// system instruction; implementations thread no history.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, instruction: &str, message: &str) -> Result<String>;

    fn model_name(&self) -> &str;
}
