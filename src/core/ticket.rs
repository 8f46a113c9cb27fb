//! Core ticket types
//!
//! A [`Ticket`] is one reported incident tracked through the lifecycle
//! New -> InProgress -> Resolved -> Closed. Comments and the audit history
//! are embedded in the ticket document, so deleting a ticket removes them
//! with it.

use crate::core::{Comment, HistoryEntry, UserId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a new random ticket ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a ticket ID from its string form
    pub fn parse_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    New,
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    /// All statuses in lifecycle order, for board columns and distributions
    pub const ALL: [Self; 4] = [Self::New, Self::InProgress, Self::Resolved, Self::Closed];

    /// Whether the ticket is still being worked (counts toward SLA)
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::New | Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::New => "NEW",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Status {
    type Err = crate::error::HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "NEW" => Ok(Self::New),
            "IN_PROGRESS" | "INPROGRESS" => Ok(Self::InProgress),
            "RESOLVED" => Ok(Self::Resolved),
            "CLOSED" => Ok(Self::Closed),
            other => Err(crate::error::HelpdeskError::InvalidInput(format!(
                "Unknown status: '{other}'. Expected one of NEW, IN_PROGRESS, RESOLVED, CLOSED"
            ))),
        }
    }
}

/// Urgency of a ticket, which determines its SLA threshold
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// All urgencies from lowest to highest
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Default SLA threshold in hours for this urgency
    #[must_use]
    pub const fn sla_hours(self) -> i64 {
        match self {
            Self::Critical => 4,
            Self::High => 24,
            Self::Medium => 72,
            Self::Low => 168,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Urgency {
    type Err = crate::error::HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(crate::error::HelpdeskError::InvalidInput(format!(
                "Unknown urgency: '{other}'. Expected one of LOW, MEDIUM, HIGH, CRITICAL"
            ))),
        }
    }
}

/// Incident category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Hardware,
    Software,
    Connectivity,
    Access,
    Infrastructure,
    Data,
    #[default]
    Other,
}

impl Category {
    /// All categories, for distribution reports
    pub const ALL: [Self; 7] = [
        Self::Hardware,
        Self::Software,
        Self::Connectivity,
        Self::Access,
        Self::Infrastructure,
        Self::Data,
        Self::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hardware => "HARDWARE",
            Self::Software => "SOFTWARE",
            Self::Connectivity => "CONNECTIVITY",
            Self::Access => "ACCESS",
            Self::Infrastructure => "INFRASTRUCTURE",
            Self::Data => "DATA",
            Self::Other => "OTHER",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Category {
    type Err = crate::error::HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HARDWARE" => Ok(Self::Hardware),
            "SOFTWARE" => Ok(Self::Software),
            "CONNECTIVITY" | "NETWORK" => Ok(Self::Connectivity),
            "ACCESS" => Ok(Self::Access),
            "INFRASTRUCTURE" => Ok(Self::Infrastructure),
            "DATA" => Ok(Self::Data),
            "OTHER" => Ok(Self::Other),
            other => Err(crate::error::HelpdeskError::InvalidInput(format!(
                "Unknown category: '{other}'"
            ))),
        }
    }
}

/// A reported incident tracked through its lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub urgency: Urgency,
    pub category: Category,
    /// The user who filed the ticket
    pub created_by: UserId,
    /// The technician working the ticket, if any
    pub assigned_to: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set once, on the first transition into Resolved
    pub resolved_at: Option<DateTime<Utc>>,
    /// Set once, on the first transition into Closed
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Ticket {
    /// Create a new ticket in status New
    #[must_use]
    pub fn new(
        title: String,
        description: String,
        urgency: Urgency,
        category: Category,
        created_by: UserId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TicketId::new(),
            title,
            description,
            status: Status::New,
            urgency,
            category,
            created_by,
            assigned_to: None,
            created_at: now,
            updated_at: now,
            resolved_at: None,
            closed_at: None,
            comments: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Apply a status change, setting lifecycle timestamps at most once.
    ///
    /// Entering Resolved sets `resolved_at` if unset; entering Closed sets
    /// `closed_at` if unset. Reopening clears neither. Transition validity
    /// is checked by the caller against the transition table, not here.
    pub fn apply_status(&mut self, new_status: Status, at: DateTime<Utc>) {
        self.status = new_status;
        self.updated_at = at;
        match new_status {
            Status::Resolved if self.resolved_at.is_none() => self.resolved_at = Some(at),
            Status::Closed if self.closed_at.is_none() => self.closed_at = Some(at),
            _ => {},
        }
    }

    /// Age of the ticket at the given instant
    #[must_use]
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.created_at
    }

    /// Whether the ticket has blown its SLA threshold.
    ///
    /// Always false for Resolved and Closed tickets, regardless of age.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_overdue_with(now, self.urgency.sla_hours())
    }

    /// Overdue check with an explicit SLA threshold (config overrides)
    #[must_use]
    pub fn is_overdue_with(&self, now: DateTime<Utc>, sla_hours: i64) -> bool {
        if !matches!(self.status, Status::New | Status::InProgress) {
            return false;
        }
        self.age_at(now) > Duration::hours(sla_hours)
    }

    /// Time from creation to resolution, if the ticket has been resolved
    #[must_use]
    pub fn resolution_time(&self) -> Option<Duration> {
        self.resolved_at.map(|resolved| resolved - self.created_at)
    }
}
