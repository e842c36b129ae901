// src/prompts/mod.rs
// Named prompt registry: any text file dropped into a namespace
// directory becomes a selectable construct or response format

mod file;
mod memory;

pub use file::FilePromptStore;
pub use memory::MemoryPromptStore;

use std::fmt;
use std::path::Component;

use crate::error::{PricelError, Result};

/// The two disjoint prompt namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Construct,
    ResponseFormat,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::Construct, Namespace::ResponseFormat];

    /// Directory name backing this namespace
    pub fn dir(&self) -> &'static str {
        match self {
            Self::Construct => "constructs",
            Self::ResponseFormat => "response_formats",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

/// Lookup capability over named prompt resources
///
/// Resolution returns the stored text byte-for-byte, with no
/// transformation. File-backed in production, in-memory in tests.
pub trait PromptStore: Send + Sync {
    fn resolve(&self, namespace: Namespace, name: &str) -> Result<String>;
}

/// Validated namespace-relative resource path: `<namespace-dir>/<name>.txt`.
///
/// Names are operator-facing selectors, not paths. An empty name, a name
/// carrying a path separator, or one with a non-normal path component
/// (`..`, `.`, a root) fails before any filesystem access.
pub(crate) fn resource_path(namespace: Namespace, name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(PricelError::InvalidName("name must not be empty".to_string()));
    }

    let has_separator = name.contains('/') || name.contains('\\');
    let has_odd_component = std::path::Path::new(name)
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));

    if has_separator || has_odd_component {
        return Err(PricelError::InvalidName(format!(
            "{:?} is not a valid {} name",
            name, namespace
        )));
    }

    Ok(format!("{}/{}.txt", namespace.dir(), name))
}
