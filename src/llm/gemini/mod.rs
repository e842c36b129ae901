// src/llm/gemini/mod.rs
// Google Gemini generateContent client

mod client;
mod types;

pub use client::GeminiClient;
