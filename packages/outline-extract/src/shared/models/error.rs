//! Error types for extraction

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source does not conform to the grammar. No partial hierarchy is
    /// produced when this is returned.
    #[error("parse error at {line}:{col}: {message}")]
    Parse { message: String, line: u32, col: u32 },

    /// The tree-sitter language was rejected at parser setup
    #[error("grammar rejected: {0}")]
    Grammar(String),

    /// No registered rule set for the requested language/extension
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractError::Parse {
            message: "missing '}'".to_string(),
            line: 42,
            col: 7,
        };
        let msg = format!("{err}");
        assert!(msg.contains("42:7"));
        assert!(msg.contains("missing '}'"));
    }
}
