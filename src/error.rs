//! Error types for helpdesk
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is [`HelpdeskError`]. Errors fall into three families: authorization
//! failures, validation failures, and lookups that found nothing. None of
//! them are retried and none are fatal to the process.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// All errors that can occur in helpdesk operations
#[derive(Debug, Error)]
pub enum HelpdeskError {
    /// The actor's role or ownership relation does not permit the action
    #[error("Permission denied: {role} may not {action}")]
    PermissionDenied {
        /// The action that was attempted
        action: String,
        /// The role of the actor
        role: String,
    },

    /// Ticket lookup failed
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// User lookup failed
    #[error("User not found: {name}")]
    UserNotFound { name: String },

    /// A user with the same username already exists
    #[error("User already exists: {username}")]
    DuplicateUser { username: String },

    /// Input failed validation (empty title, unknown enum value, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested status change is not in the allowed-transition table
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// A technician tried to take a ticket that already has an assignee
    #[error("Ticket is already assigned to {assignee}")]
    TicketAlreadyAssigned { assignee: String },

    /// The storage directory has not been initialized
    #[error("Helpdesk is not initialized in this directory. Run 'helpdesk init' first")]
    NotInitialized,

    /// Failed to parse stored or supplied data
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data for storage or export
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HelpdeskError {
    /// Construct a permission-denied error for an action/role pair
    pub fn denied(action: impl Into<String>, role: impl std::fmt::Display) -> Self {
        Self::PermissionDenied {
            action: action.into(),
            role: role.to_string(),
        }
    }

    /// Whether this error is an authorization failure
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

impl From<serde_yaml::Error> for HelpdeskError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for HelpdeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<csv::Error> for HelpdeskError {
    fn from(err: csv::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
