// Error taxonomy for the task list core

use crate::models::TaskId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by stores and command handlers
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite failure reading or writing the task table
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File system failure on the preference file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Update referenced an id with no live row
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    /// Rejected user input, never reaches a store
    #[error("{0}")]
    Validation(String),

    /// A blocking storage job panicked or was cancelled
    #[error("Background storage job failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl Error {
    /// True for failures of the persistent storage itself
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Error::Database(_) | Error::Io(_) | Error::Serialization(_) | Error::Join(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_classification() {
        let io = Error::Io(std::io::Error::other("disk full"));
        assert!(io.is_storage());
        assert!(!Error::NotFound(3).is_storage());
        assert!(!Error::Validation("Name cannot be empty".to_string()).is_storage());
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::NotFound(42).to_string(), "Task not found: 42");
        assert_eq!(
            Error::Validation("Name cannot be empty".to_string()).to_string(),
            "Name cannot be empty"
        );
    }
}
