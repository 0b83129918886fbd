// Error types for the task list

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A task with exactly this title already exists
    #[error("Task already registered: {title}")]
    DuplicateTitle { title: String },

    #[error("Unknown locale: {0} (expected en or pt-BR)")]
    UnknownLocale(String),

    #[error("Unknown id strategy: {0} (expected clock or sequential)")]
    UnknownIdStrategy(String),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, TaskError>;

impl TaskError {
    pub fn is_duplicate_title(&self) -> bool {
        matches!(self, TaskError::DuplicateTitle { .. })
    }
}
