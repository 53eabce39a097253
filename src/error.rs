use thiserror::Error;

use crate::domain::inputs::ValidationErrors;

/// Invoice ROI application error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input rejected before the engine ran; carries every field violation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Internal failures that are never the caller's fault: stored rows that
    /// fail domain validation on read, failed health probes, and the like.
    #[error("Application error: {message}")]
    Application { message: String },
}

impl Error {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self::Application {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
