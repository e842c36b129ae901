// src/prompts/file.rs
// Filesystem-backed prompt store: one .txt file per named resource

use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

use super::{resource_path, Namespace, PromptStore};
use crate::error::{PricelError, Result};

/// Prompt store rooted at a directory holding `constructs/` and
/// `response_formats/`.
///
/// Files are read fresh on every resolve, so operators can edit or add
/// prompts without restarting the relay.
pub struct FilePromptStore {
    root: PathBuf,
}

impl FilePromptStore {
    /// Open a store rooted at `root`, creating both namespace
    /// directories (empty) if they are missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        for namespace in Namespace::ALL {
            std::fs::create_dir_all(root.join(namespace.dir()))?;
        }
        Ok(Self { root })
    }
}

impl PromptStore for FilePromptStore {
    fn resolve(&self, namespace: Namespace, name: &str) -> Result<String> {
        let relative = resource_path(namespace, name)?;
        let path = self.root.join(&relative);
        debug!(path = %path.display(), "resolving prompt file");

        // The not-found message always reports the namespace-relative
        // path, independent of the store root.
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PricelError::PromptNotFound(relative),
            _ => PricelError::Io(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_namespace_directories() {
        let dir = TempDir::new().unwrap();
        FilePromptStore::open(dir.path()).unwrap();
        assert!(dir.path().join("constructs").is_dir());
        assert!(dir.path().join("response_formats").is_dir());
    }

    #[test]
    fn test_resolve_returns_file_contents_exactly() {
        let dir = TempDir::new().unwrap();
        let store = FilePromptStore::open(dir.path()).unwrap();
        // Trailing newline must survive: resolution never transforms
        std::fs::write(dir.path().join("constructs/pricel.txt"), "You are Pricel.\n").unwrap();

        let text = store.resolve(Namespace::Construct, "pricel").unwrap();
        assert_eq!(text, "You are Pricel.\n");
    }

    #[test]
    fn test_resolve_rereads_on_every_call() {
        let dir = TempDir::new().unwrap();
        let store = FilePromptStore::open(dir.path()).unwrap();
        let path = dir.path().join("response_formats/short.txt");

        std::fs::write(&path, "one sentence").unwrap();
        assert_eq!(
            store.resolve(Namespace::ResponseFormat, "short").unwrap(),
            "one sentence"
        );

        std::fs::write(&path, "two sentences").unwrap();
        assert_eq!(
            store.resolve(Namespace::ResponseFormat, "short").unwrap(),
            "two sentences"
        );
    }

    #[test]
    fn test_missing_file_reports_relative_path() {
        let dir = TempDir::new().unwrap();
        let store = FilePromptStore::open(dir.path()).unwrap();

        let err = store.resolve(Namespace::Construct, "nonexistent").unwrap_err();
        assert_eq!(err.to_string(), "File not found: constructs/nonexistent.txt");
    }

    #[test]
    fn test_invalid_name_fails_before_filesystem_access() {
        let dir = TempDir::new().unwrap();
        let store = FilePromptStore::open(dir.path()).unwrap();

        let err = store.resolve(Namespace::Construct, "../pricel").unwrap_err();
        assert!(matches!(err, PricelError::InvalidName(_)));
    }
}
