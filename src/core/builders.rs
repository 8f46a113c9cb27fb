use super::{Category, Role, Status, Ticket, TicketId, Urgency, User, UserId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    title: Option<String>,
    description: Option<String>,
    status: Option<Status>,
    urgency: Option<Urgency>,
    category: Option<Category>,
    created_by: Option<UserId>,
    assigned_to: Option<UserId>,
    created_at: Option<DateTime<Utc>>,
    resolved_at: Option<DateTime<Utc>>,
    closed_at: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the urgency
    #[must_use]
    pub const fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    /// Set the category
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the creating user
    #[must_use]
    pub const fn created_by(mut self, creator: UserId) -> Self {
        self.created_by = Some(creator);
        self
    }

    /// Set the assigned technician
    #[must_use]
    pub const fn assigned_to(mut self, technician: UserId) -> Self {
        self.assigned_to = Some(technician);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `resolved_at` timestamp
    #[must_use]
    pub const fn resolved_at(mut self, resolved_at: DateTime<Utc>) -> Self {
        self.resolved_at = Some(resolved_at);
        self
    }

    /// Set `closed_at` timestamp
    #[must_use]
    pub const fn closed_at(mut self, closed_at: DateTime<Utc>) -> Self {
        self.closed_at = Some(closed_at);
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Ticket {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status: self.status.unwrap_or(Status::New),
            urgency: self.urgency.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            created_by: self.created_by.unwrap_or_default(),
            assigned_to: self.assigned_to,
            created_at,
            updated_at: created_at,
            resolved_at: self.resolved_at,
            closed_at: self.closed_at,
            comments: Vec::new(),
            history: Vec::new(),
        }
    }
}

/// Builder for creating User instances
#[derive(Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    username: Option<String>,
    email: Option<String>,
    role: Option<Role>,
    specialty: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl UserBuilder {
    /// Create a new user builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user ID
    #[must_use]
    pub const fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the username
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the email address
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the role
    #[must_use]
    pub const fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the technician specialty
    #[must_use]
    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the user
    pub fn build(self) -> User {
        User {
            id: self.id.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            specialty: self.specialty,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}
