use crate::models::{Prompt, PromptId};
use crate::storage::{PromptStorage, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, warn};

pub const PROMPT_FILE: &str = "prompt.json";
/// Written first, then renamed over `PROMPT_FILE` once complete.
const PENDING_FILE: &str = "prompt.json.tmp";
/// Reserved for update authorization. Nothing reads or writes it yet.
pub const EDIT_KEY_FILE: &str = "edit_key.txt";

/// Files making up one stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPaths {
    pub dir: PathBuf,
    pub prompt_file: PathBuf,
    pub edit_key_file: PathBuf,
}

/// Stores each prompt as `<root>/<first char>/<id>/prompt.json`.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    root: PathBuf,
}

impl FileSystemStorage {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the record for `id`. Pure; touches no files.
    pub fn shard_path(&self, id: &PromptId) -> PathBuf {
        self.root.join(id.shard()).join(id.as_str())
    }

    pub fn record_paths(&self, id: &PromptId) -> RecordPaths {
        let dir = self.shard_path(id);
        RecordPaths {
            prompt_file: dir.join(PROMPT_FILE),
            edit_key_file: dir.join(EDIT_KEY_FILE),
            dir,
        }
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl PromptStorage for FileSystemStorage {
    async fn save_prompt(&self, id: &PromptId, prompt: &Prompt) -> Result<(), StorageError> {
        let paths = self.record_paths(id);
        info!(prompt_id = %id, dir = %paths.dir.display(), "Saving prompt");

        let contents = serde_json::to_string_pretty(prompt).map_err(|source| StorageError::Serialize {
            id: id.clone(),
            source,
        })?;

        if let Some(shard_dir) = paths.dir.parent() {
            fs::create_dir_all(shard_dir).await.map_err(io_error(shard_dir))?;
        }

        // Claiming the directory is the exclusive step: the first writer wins.
        match fs::create_dir(&paths.dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                warn!(prompt_id = %id, "Refusing to overwrite existing prompt");
                return Err(StorageError::AlreadyExists(id.clone()));
            }
            Err(e) => return Err(io_error(&paths.dir)(e)),
        }

        // A failure past this point leaves the claimed directory in place.
        // Readers see NotFound until the rename publishes the whole file.
        let pending = paths.dir.join(PENDING_FILE);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&pending)
            .await
            .map_err(io_error(&pending))?;
        file.write_all(contents.as_bytes())
            .await
            .map_err(io_error(&pending))?;
        file.flush().await.map_err(io_error(&pending))?;
        file.sync_all().await.map_err(io_error(&pending))?;
        drop(file);

        fs::rename(&pending, &paths.prompt_file)
            .await
            .map_err(io_error(&paths.prompt_file))?;
        Ok(())
    }

    async fn get_prompt(&self, id: &PromptId) -> Result<Prompt, StorageError> {
        let path = self.record_paths(id).prompt_file;
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(prompt_id = %id, path = %path.display(), "Prompt not found");
                return Err(StorageError::NotFound(id.clone()));
            }
            Err(e) => return Err(io_error(&path)(e)),
        };

        serde_json::from_str(&contents).map_err(|source| {
            error!(prompt_id = %id, path = %path.display(), error = %source, "Stored prompt failed to deserialize");
            StorageError::Corrupt { path, source }
        })
    }
}
