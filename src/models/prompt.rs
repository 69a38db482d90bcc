use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Title used when a prompt is submitted without one.
pub const DEFAULT_TITLE: &str = "Untitled Prompt";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// A shareable prompt template with named string parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prompt {
    /// Schema version of the document shape.
    pub version: i64,
    pub prompt_text: String,
    pub parameters_dict: BTreeMap<String, String>,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Prompt {
    pub fn new(version: i64, prompt_text: impl Into<String>) -> Self {
        Self {
            version,
            prompt_text: prompt_text.into(),
            parameters_dict: BTreeMap::new(),
            title: default_title(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters_dict.insert(key.into(), value.into());
        self
    }
}
