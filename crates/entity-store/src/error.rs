use thiserror::Error;

use common::EntityId;

/// Errors that can occur when interacting with the entity store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row exists for the given id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: EntityId },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The backend rejected the call because it is unavailable.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for entity store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
