//! User accounts and roles
//!
//! Roles are a fixed three-way enum. A user's role never changes within a
//! request; authentication itself is outside this crate, the CLI selects an
//! actor by username.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random user ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a user ID from its string form
    pub fn parse_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of an account, driving the capability matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Files tickets, sees only their own
    #[default]
    User,
    /// Works tickets assigned to them, may take unassigned tickets
    Technician,
    /// Unrestricted view, assignment, status changes and deletion
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::User => "user",
            Self::Technician => "technician",
            Self::Admin => "admin",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Role {
    type Err = crate::error::HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "technician" | "tech" => Ok(Self::Technician),
            "admin" => Ok(Self::Admin),
            other => Err(crate::error::HelpdeskError::InvalidInput(format!(
                "Unknown role: '{other}'. Expected one of user, technician, admin"
            ))),
        }
    }
}

/// An account known to the helpdesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    /// Technician specialty, e.g. "network" or "software"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user account
    #[must_use]
    pub fn new(username: String, email: String, role: Role) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            role,
            specialty: None,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    #[must_use]
    pub const fn is_technician(&self) -> bool {
        matches!(self.role, Role::Technician)
    }
}
