use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Upper bound on identifier length, well under common filename limits.
pub const MAX_PROMPT_ID_LEN: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptIdError {
    #[error("prompt id must not be empty")]
    Empty,

    #[error("prompt id is {len} characters long, the maximum is {max}")]
    TooLong { len: usize, max: usize },

    #[error("prompt id contains invalid character {0:?}; allowed are ASCII letters, digits, '_' and '-'")]
    InvalidChar(char),
}

/// Identifier of a stored prompt record.
///
/// Only ASCII alphanumerics, `_` and `-` are accepted, so every id is safe to
/// use verbatim as a path segment. The first character names the shard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromptId(String);

impl PromptId {
    pub fn parse(raw: &str) -> Result<Self, PromptIdError> {
        if raw.is_empty() {
            return Err(PromptIdError::Empty);
        }
        let len = raw.chars().count();
        if len > MAX_PROMPT_ID_LEN {
            return Err(PromptIdError::TooLong {
                len,
                max: MAX_PROMPT_ID_LEN,
            });
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(PromptIdError::InvalidChar(bad));
        }
        Ok(Self(raw.to_string()))
    }

    /// A fresh random id for prompts created without a caller-chosen name.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The shard directory name: the first character, case preserved.
    pub fn shard(&self) -> &str {
        // Non-empty ASCII is guaranteed by `parse`.
        &self.0[..1]
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PromptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PromptId {
    type Error = PromptIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PromptId> for String {
    fn from(id: PromptId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_safe_identifiers() {
        for raw in ["a_prompt", "hello", "A-1", "9", "x_y-z"] {
            let id = PromptId::parse(raw).unwrap();
            assert_eq!(id.as_str(), raw);
        }
    }

    #[test]
    fn shard_is_first_character_case_sensitive() {
        assert_eq!(PromptId::parse("apple").unwrap().shard(), "a");
        assert_eq!(PromptId::parse("Apple").unwrap().shard(), "A");
        assert_eq!(PromptId::parse("_x").unwrap().shard(), "_");
    }

    #[test]
    fn rejects_empty_and_unsafe_identifiers() {
        assert_eq!(PromptId::parse(""), Err(PromptIdError::Empty));
        assert_eq!(PromptId::parse("../etc"), Err(PromptIdError::InvalidChar('.')));
        assert_eq!(PromptId::parse("a/b"), Err(PromptIdError::InvalidChar('/')));
        assert_eq!(PromptId::parse("with space"), Err(PromptIdError::InvalidChar(' ')));
        assert_eq!(PromptId::parse("é"), Err(PromptIdError::InvalidChar('é')));
    }

    #[test]
    fn rejects_overlong_identifiers() {
        let raw = "a".repeat(MAX_PROMPT_ID_LEN + 1);
        assert_eq!(
            PromptId::parse(&raw),
            Err(PromptIdError::TooLong {
                len: MAX_PROMPT_ID_LEN + 1,
                max: MAX_PROMPT_ID_LEN
            })
        );
        assert!(PromptId::parse(&"a".repeat(MAX_PROMPT_ID_LEN)).is_ok());
    }

    #[test]
    fn generated_ids_are_valid_and_distinct() {
        let a = PromptId::generate();
        let b = PromptId::generate();
        assert_ne!(a, b);
        assert!(PromptId::parse(a.as_str()).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let ok: PromptId = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(ok.as_str(), "hello");
        assert!(serde_json::from_str::<PromptId>("\"a/b\"").is_err());
    }
}
