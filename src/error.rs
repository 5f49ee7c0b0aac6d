//! Error types for annotext

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for annotext
#[derive(Debug, Error)]
pub enum AnnotextError {
    #[error("Not an annotext workspace: {0}")]
    NotWorkspace(PathBuf),

    #[error("Tag normalizes to nothing: '{0}'")]
    EmptyTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AnnotextError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AnnotextError::NotWorkspace(_) => 2,
            AnnotextError::EmptyTag(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            AnnotextError::NotWorkspace(path) => {
                format!(
                    "Not an annotext workspace: {}\n\n\
                    Suggestions:\n\
                    • Run 'annotext init' in this directory to create a workspace\n\
                    • Navigate to an existing workspace\n\
                    • Set ANNOTEXT_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            AnnotextError::EmptyTag(raw) => {
                format!(
                    "Tag normalizes to nothing: '{}'\n\n\
                    Tags need at least one letter or digit (a-z, 0-9, or Arabic).\n\
                    Examples:\n\
                    annotext normalize 'Hello, World'\n\
                    annotext normalize 'فن رائع'",
                    raw
                )
            }
            AnnotextError::Config(msg) => {
                if msg.contains("Invalid format") {
                    format!(
                        "{}\n\n\
                        Valid formats: html, markdown\n\
                        Example: annotext render post.txt --format markdown",
                        msg
                    )
                } else if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: annotext config tag_route '/tags/{{tag}}'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using AnnotextError
pub type Result<T> = std::result::Result<T, AnnotextError>;
