//! Shared context for command handlers

use crate::core::{Ticket, TicketId, User, UserId};
use crate::error::{HelpdeskError, Result};
use crate::service::TicketService;
use crate::store::FileStorage;
use std::collections::HashMap;
use std::path::Path;

/// Common context for all handler operations
pub struct HandlerContext {
    pub storage: FileStorage,
}

impl HandlerContext {
    /// Open the storage directory, failing if it is not initialized
    pub fn open(dir: &str) -> Result<Self> {
        let storage = FileStorage::new(Path::new(dir));
        storage.ensure_initialized()?;
        Ok(Self { storage })
    }

    /// Build a service over this context's storage
    pub fn service(&self) -> Result<TicketService<'_>> {
        TicketService::new(&self.storage)
    }

    /// Resolve the acting user from the `--as` flag
    pub fn actor(&self, acting_as: Option<&str>) -> Result<User> {
        let username = acting_as.ok_or_else(|| {
            HelpdeskError::InvalidInput(
                "No acting user. Pass --as <username>".to_string(),
            )
        })?;
        self.storage
            .find_user_by_username(username)?
            .ok_or_else(|| HelpdeskError::UserNotFound {
                name: username.to_string(),
            })
    }

    /// Map of user IDs to usernames, for display
    pub fn username_map(&self) -> Result<HashMap<UserId, String>> {
        let users = self.storage.load_all_users()?;
        Ok(users.into_iter().map(|u| (u.id, u.username)).collect())
    }

    /// Resolve a ticket reference: a full ID or a unique ID prefix
    pub fn resolve_ticket_ref(&self, ticket_ref: &str) -> Result<TicketId> {
        if let Ok(id) = TicketId::parse_str(ticket_ref) {
            return Ok(id);
        }

        let tickets = self.storage.load_all_tickets()?;
        let matches: Vec<&Ticket> = tickets
            .iter()
            .filter(|t| t.id.to_string().starts_with(ticket_ref))
            .collect();

        match matches.as_slice() {
            [ticket] => Ok(ticket.id),
            [] => Err(HelpdeskError::TicketNotFound {
                id: ticket_ref.to_string(),
            }),
            _ => Err(HelpdeskError::InvalidInput(format!(
                "Ticket reference '{ticket_ref}' is ambiguous ({} matches)",
                matches.len()
            ))),
        }
    }
}
