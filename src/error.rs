//! Error types for desk-ticket
//!
//! All fallible operations in this crate return [`Result`], built on the
//! [`DeskTicketError`] enum. Validation failures are distinguishable by
//! variant so callers can react to invalid input differently from a missing
//! ticket or a broken store file.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, DeskTicketError>;

/// Errors that can occur in desk-ticket operations
#[derive(Error, Debug)]
pub enum DeskTicketError {
    /// No ticket in the store matches the given ID
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// Category value outside the closed enumeration
    #[error("Invalid category: '{value}'")]
    InvalidCategory { value: String },

    /// Priority value outside the closed enumeration
    #[error("Invalid priority: '{value}'")]
    InvalidPriority { value: String },

    /// Status value outside the closed enumeration
    #[error("Invalid status: '{value}'")]
    InvalidStatus { value: String },

    /// Underlying I/O failure, surfaced unhandled to the caller
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store file exists but does not parse
    #[error("Failed to parse ticket store: {0}")]
    ParseError(String),

    /// Serialization of tickets or the store failed
    #[error("Failed to serialize: {0}")]
    SerializationError(String),

    /// Catch-all for errors that don't fit other variants
    #[error("{0}")]
    Custom(String),
}

impl DeskTicketError {
    /// Create a custom error from any displayable value
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// User-facing message for CLI display
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Suggestions for resolving the error, shown by the CLI
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TicketNotFound { .. } => vec![
                "Run 'desk-ticket list' to see available ticket IDs".to_string(),
            ],
            Self::InvalidCategory { .. } => vec![
                "Valid categories: Hardware, Software, Network, Account, Other".to_string(),
            ],
            Self::InvalidPriority { .. } => vec![
                "Valid priorities: Low, Medium, High, Critical".to_string(),
            ],
            Self::InvalidStatus { .. } => vec![
                "Valid statuses: New, In Progress, Waiting, Resolved, Closed".to_string(),
            ],
            Self::ParseError(_) => vec![
                "The store file may be corrupted; check it by hand or start from a new file"
                    .to_string(),
            ],
            _ => vec![],
        }
    }

    /// Whether the operation can be retried without intervention
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::TicketNotFound { .. }
                | Self::InvalidCategory { .. }
                | Self::InvalidPriority { .. }
                | Self::InvalidStatus { .. }
        )
    }
}
