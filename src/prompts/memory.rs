// src/prompts/memory.rs
// In-memory prompt store for tests and embedded callers

use std::collections::HashMap;

use super::{resource_path, Namespace, PromptStore};
use crate::error::{PricelError, Result};

/// Map-backed store with the same name policy and error behavior as
/// [`FilePromptStore`](super::FilePromptStore).
#[derive(Debug, Default)]
pub struct MemoryPromptStore {
    entries: HashMap<(Namespace, String), String>,
}

impl MemoryPromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, namespace: Namespace, name: &str, text: &str) {
        self.entries
            .insert((namespace, name.to_string()), text.to_string());
    }
}

impl PromptStore for MemoryPromptStore {
    fn resolve(&self, namespace: Namespace, name: &str) -> Result<String> {
        let relative = resource_path(namespace, name)?;
        self.entries
            .get(&(namespace, name.to_string()))
            .cloned()
            .ok_or(PricelError::PromptNotFound(relative))
    }
}
