use crate::models::{Prompt, PromptId};
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub mod filesystem;

pub use filesystem::FileSystemStorage;

/// Failure conditions reported by a prompt storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("prompt '{0}' not found")]
    NotFound(PromptId),

    /// The id is taken and records are never updated in place.
    #[error("prompt '{0}' already exists")]
    AlreadyExists(PromptId),

    #[error("prompt record at '{}' is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize prompt '{id}': {source}")]
    Serialize {
        id: PromptId,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Trait defining the interface for prompt storage backends.
#[async_trait]
pub trait PromptStorage: Send + Sync + 'static { // Ensure Send + Sync for Arc<dyn T>
    /// Creates the record for `id`. Fails with `AlreadyExists` if one is present.
    async fn save_prompt(&self, id: &PromptId, prompt: &Prompt) -> Result<(), StorageError>;

    /// Loads the record for `id`.
    async fn get_prompt(&self, id: &PromptId) -> Result<Prompt, StorageError>;
}
