//! Audit history
//!
//! Every mutating action on a ticket appends exactly one [`HistoryEntry`].
//! Entries are append-only: nothing in the crate mutates or removes one,
//! they only disappear when their ticket is deleted.

use crate::core::{Status, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of action recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Created,
    Assigned,
    StatusChanged,
    CommentAdded,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Created => "CREATED",
            Self::Assigned => "ASSIGNED",
            Self::StatusChanged => "STATUS_CHANGED",
            Self::CommentAdded => "COMMENT_ADDED",
        };
        write!(f, "{s}")
    }
}

/// One immutable audit record of an action taken on a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The user who performed the action
    pub actor: UserId,
    pub action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry with just an actor, kind and note
    #[must_use]
    pub fn new(actor: UserId, action: ActionKind, note: impl Into<String>) -> Self {
        Self {
            actor,
            action,
            from_status: None,
            to_status: None,
            note: Some(note.into()),
            created_at: Utc::now(),
        }
    }

    /// Create a status-change entry carrying the before/after values
    #[must_use]
    pub fn status_change(actor: UserId, from: Status, to: Status) -> Self {
        Self {
            actor,
            action: ActionKind::StatusChanged,
            from_status: Some(from),
            to_status: Some(to),
            note: Some("Status updated".to_string()),
            created_at: Utc::now(),
        }
    }

    /// Set the recorded to-status (used for creation entries)
    #[must_use]
    pub const fn with_to_status(mut self, status: Status) -> Self {
        self.to_status = Some(status);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_change_records_both_sides() {
        let entry = HistoryEntry::status_change(UserId::new(), Status::New, Status::InProgress);
        assert_eq!(entry.action, ActionKind::StatusChanged);
        assert_eq!(entry.from_status, Some(Status::New));
        assert_eq!(entry.to_status, Some(Status::InProgress));
    }

    #[test]
    fn test_creation_entry_has_to_status_only() {
        let entry = HistoryEntry::new(UserId::new(), ActionKind::Created, "Ticket created")
            .with_to_status(Status::New);
        assert_eq!(entry.from_status, None);
        assert_eq!(entry.to_status, Some(Status::New));
    }
}
