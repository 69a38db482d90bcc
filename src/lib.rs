pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod storage;

pub use config::Config;
pub use error::ApiError;
pub use models::{Prompt, PromptId};
pub use server::{configure, AppState};
pub use storage::{FileSystemStorage, PromptStorage, StorageError};
