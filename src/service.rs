//! Ticket operations
//!
//! [`TicketService`] is the single entry point for every action an actor can
//! take. Each operation authorizes first, mutates the ticket, appends exactly
//! one history entry, then saves. Reads are scoped by the actor's role: users
//! see their own tickets, technicians the ones assigned to them, admins
//! everything.

use crate::auth::{Action, authorize, authorize_create, validate_transition};
use crate::config::HelpdeskConfig;
use crate::core::{
    ActionKind, Category, Comment, HistoryEntry, Role, Status, Ticket, TicketId, Urgency, User,
};
use crate::error::{HelpdeskError, Result};
use crate::store::FileStorage;
use chrono::Utc;
use regex::Regex;
use tracing::info;

/// Parameters for filing a new ticket
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub urgency: Urgency,
    pub category: Category,
}

/// Filters for listing tickets; everything optional, combined with AND
#[derive(Default)]
pub struct TicketQuery {
    pub status: Option<Status>,
    pub urgency: Option<Urgency>,
    pub category: Option<Category>,
    /// Substring match on the title, or a regex when `use_regex` is set
    pub search: Option<String>,
    pub use_regex: bool,
}

/// Service wrapping the storage with authorized ticket operations
pub struct TicketService<'a> {
    storage: &'a FileStorage,
    config: HelpdeskConfig,
}

impl<'a> TicketService<'a> {
    /// Create a service over the given storage, loading its config
    pub fn new(storage: &'a FileStorage) -> Result<Self> {
        let config = storage.load_config()?;
        Ok(Self { storage, config })
    }

    /// The loaded project configuration
    #[must_use]
    pub const fn config(&self) -> &HelpdeskConfig {
        &self.config
    }

    /// The underlying storage
    #[must_use]
    pub const fn storage(&self) -> &FileStorage {
        self.storage
    }

    // --- mutations ---

    /// File a new ticket on behalf of `actor`
    pub fn create(&self, actor: &User, params: NewTicket) -> Result<Ticket> {
        authorize_create(actor)?;

        let title = params.title.trim();
        let description = params.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(HelpdeskError::InvalidInput(
                "Title and description are required".to_string(),
            ));
        }

        let mut ticket = Ticket::new(
            title.to_string(),
            description.to_string(),
            params.urgency,
            params.category,
            actor.id,
        );
        ticket.history.push(
            HistoryEntry::new(actor.id, ActionKind::Created, "Ticket created")
                .with_to_status(ticket.status),
        );
        self.storage.save_ticket(&ticket)?;

        info!(ticket = %ticket.id, actor = %actor.username, "created ticket");
        Ok(ticket)
    }

    /// Assign a ticket to a technician (admin only)
    pub fn assign(&self, actor: &User, id: &TicketId, technician: &User) -> Result<Ticket> {
        let mut ticket = self.storage.load_ticket(id)?;
        authorize(actor, Action::Assign, &ticket)?;

        if !technician.is_technician() {
            return Err(HelpdeskError::InvalidInput(format!(
                "'{}' is not a technician",
                technician.username
            )));
        }

        ticket.assigned_to = Some(technician.id);
        ticket.updated_at = Utc::now();
        ticket.history.push(HistoryEntry::new(
            actor.id,
            ActionKind::Assigned,
            format!("Assigned to {}", technician.username),
        ));
        self.storage.save_ticket(&ticket)?;

        info!(ticket = %id, technician = %technician.username, "assigned ticket");
        Ok(ticket)
    }

    /// Technician self-assigns an unassigned ticket
    pub fn take(&self, actor: &User, id: &TicketId) -> Result<Ticket> {
        let mut ticket = self.storage.load_ticket(id)?;

        // Report the more specific error when a technician races for a
        // ticket someone else already holds
        if actor.is_technician() {
            if let Some(assignee) = ticket.assigned_to {
                let name = self
                    .storage
                    .load_user(&assignee)
                    .map_or_else(|_| assignee.to_string(), |u| u.username);
                return Err(HelpdeskError::TicketAlreadyAssigned { assignee: name });
            }
        }
        authorize(actor, Action::Take, &ticket)?;

        ticket.assigned_to = Some(actor.id);
        ticket.updated_at = Utc::now();
        ticket.history.push(HistoryEntry::new(
            actor.id,
            ActionKind::Assigned,
            "Technician took the ticket",
        ));
        self.storage.save_ticket(&ticket)?;

        info!(ticket = %id, technician = %actor.username, "took ticket");
        Ok(ticket)
    }

    /// Change a ticket's status, validated against the transition table
    pub fn change_status(&self, actor: &User, id: &TicketId, new_status: Status) -> Result<Ticket> {
        let mut ticket = self.storage.load_ticket(id)?;
        authorize(actor, Action::ChangeStatus, &ticket)?;
        validate_transition(ticket.status, new_status)?;

        let old_status = ticket.status;
        ticket.apply_status(new_status, Utc::now());
        ticket
            .history
            .push(HistoryEntry::status_change(actor.id, old_status, new_status));
        self.storage.save_ticket(&ticket)?;

        info!(ticket = %id, from = %old_status, to = %new_status, "changed status");
        Ok(ticket)
    }

    /// Add a free-text comment to a ticket
    pub fn add_comment(&self, actor: &User, id: &TicketId, text: &str) -> Result<Ticket> {
        let mut ticket = self.storage.load_ticket(id)?;
        authorize(actor, Action::Comment, &ticket)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(HelpdeskError::InvalidInput(
                "Comment text must not be empty".to_string(),
            ));
        }

        ticket.comments.push(Comment::new(actor.id, text));
        ticket.updated_at = Utc::now();
        ticket
            .history
            .push(HistoryEntry::new(actor.id, ActionKind::CommentAdded, "Comment added"));
        self.storage.save_ticket(&ticket)?;

        info!(ticket = %id, actor = %actor.username, "added comment");
        Ok(ticket)
    }

    /// Delete a ticket, cascading its comments and history
    pub fn delete(&self, actor: &User, id: &TicketId) -> Result<()> {
        let ticket = self.storage.load_ticket(id)?;
        authorize(actor, Action::Delete, &ticket)?;
        self.storage.delete_ticket(id)?;

        info!(ticket = %id, actor = %actor.username, "deleted ticket");
        Ok(())
    }

    // --- reads ---

    /// Load a single ticket the actor is allowed to view
    pub fn get(&self, actor: &User, id: &TicketId) -> Result<Ticket> {
        let ticket = self.storage.load_ticket(id)?;
        authorize(actor, Action::View, &ticket)?;
        Ok(ticket)
    }

    /// All tickets visible to the actor, unfiltered
    pub fn visible_tickets(&self, actor: &User) -> Result<Vec<Ticket>> {
        let tickets = self.storage.load_all_tickets()?;
        Ok(tickets
            .into_iter()
            .filter(|t| match actor.role {
                Role::Admin => true,
                Role::User => t.created_by == actor.id,
                Role::Technician => t.assigned_to == Some(actor.id),
            })
            .collect())
    }

    /// Role-scoped ticket listing with optional filters, newest first
    pub fn list(&self, actor: &User, query: &TicketQuery) -> Result<Vec<Ticket>> {
        let mut tickets = self.visible_tickets(actor)?;

        if let Some(status) = query.status {
            tickets.retain(|t| t.status == status);
        }
        if let Some(urgency) = query.urgency {
            tickets.retain(|t| t.urgency == urgency);
        }
        if let Some(category) = query.category {
            tickets.retain(|t| t.category == category);
        }
        if let Some(search) = &query.search {
            if query.use_regex {
                let re = Regex::new(search)
                    .map_err(|e| HelpdeskError::InvalidInput(format!("Invalid regex: {e}")))?;
                tickets.retain(|t| re.is_match(&t.title));
            } else {
                let needle = search.to_lowercase();
                tickets.retain(|t| t.title.to_lowercase().contains(&needle));
            }
        }

        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }

    // --- users ---

    /// Register a new account (admin only)
    pub fn add_user(
        &self,
        actor: &User,
        username: &str,
        email: &str,
        role: Role,
        specialty: Option<String>,
    ) -> Result<User> {
        if !actor.is_admin() {
            return Err(HelpdeskError::denied("add users", actor.role));
        }

        let username = username.trim();
        if username.is_empty() {
            return Err(HelpdeskError::InvalidInput("Username is required".to_string()));
        }
        if self.storage.find_user_by_username(username)?.is_some() {
            return Err(HelpdeskError::DuplicateUser {
                username: username.to_string(),
            });
        }

        let mut user = User::new(username.to_string(), email.trim().to_string(), role);
        user.specialty = specialty;
        self.storage.save_user(&user)?;

        info!(user = %user.username, role = %user.role, "added user");
        Ok(user)
    }

    /// All accounts, admin only
    pub fn list_users(&self, actor: &User) -> Result<Vec<User>> {
        if !actor.is_admin() {
            return Err(HelpdeskError::denied("list users", actor.role));
        }
        let mut users = self.storage.load_all_users()?;
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    /// Resolve an acting user by username
    pub fn actor_by_username(&self, username: &str) -> Result<User> {
        self.storage
            .find_user_by_username(username)?
            .ok_or_else(|| HelpdeskError::UserNotFound {
                name: username.to_string(),
            })
    }
}
