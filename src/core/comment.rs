//! Free-text comments attached to a ticket

use crate::core::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text note on a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub author: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment timestamped now
    #[must_use]
    pub fn new(author: UserId, content: impl Into<String>) -> Self {
        Self {
            author,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
