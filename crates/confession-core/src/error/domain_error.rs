//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Confession not found")]
    ConfessionNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Message is required")]
    MessageRequired,

    #[error("Message too long (max {max} characters)")]
    MessageTooLong { max: usize },

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid reaction type")]
    InvalidReactionType(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfessionNotFound(_) => "UNKNOWN_CONFESSION",
            Self::MessageRequired => "MESSAGE_REQUIRED",
            Self::MessageTooLong { .. } => "MESSAGE_TOO_LONG",
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidReactionType(_) => "INVALID_REACTION_TYPE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfessionNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MessageRequired
                | Self::MessageTooLong { .. }
                | Self::MissingFields
                | Self::InvalidReactionType(_)
        )
    }

    /// Check if this error comes from the storage layer
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}
