pub mod prompt;
pub mod prompt_id;

pub use prompt::{Prompt, DEFAULT_TITLE};
pub use prompt_id::{PromptId, PromptIdError};
