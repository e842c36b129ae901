// src/lib.rs

pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompts;
pub mod web;

pub use error::{PricelError, Result};
