//! File-based storage
//!
//! Tickets and users are stored as one YAML document each under the
//! `.helpdesk/` directory:
//!
//! ```text
//! .helpdesk/
//!   config.yaml
//!   tickets/<uuid>.yaml
//!   users/<uuid>.yaml
//! ```
//!
//! Comments and history travel inside the ticket document, so deleting a
//! ticket file removes them with it. Concurrent edits to the same ticket are
//! last-write-wins; that matches the original system and is an accepted
//! limitation.

use crate::config::HelpdeskConfig;
use crate::core::{Ticket, TicketId, User, UserId};
use crate::error::{HelpdeskError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// YAML-per-record storage rooted at a `.helpdesk/` directory
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a storage handle for the given `.helpdesk` directory.
    ///
    /// Does not touch the filesystem; call [`FileStorage::init`] to create
    /// the layout.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of this storage
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the storage layout exists on disk
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.tickets_dir().is_dir() && self.users_dir().is_dir()
    }

    /// Create the directory layout and write the initial config
    pub fn init(&self, config: &HelpdeskConfig) -> Result<()> {
        fs::create_dir_all(self.tickets_dir())?;
        fs::create_dir_all(self.users_dir())?;
        self.save_config(config)?;
        debug!(root = %self.root.display(), "initialized storage");
        Ok(())
    }

    /// Fail with `NotInitialized` unless the layout exists
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(HelpdeskError::NotInitialized)
        }
    }

    fn tickets_dir(&self) -> PathBuf {
        self.root.join("tickets")
    }

    fn users_dir(&self) -> PathBuf {
        self.root.join("users")
    }

    fn ticket_path(&self, id: &TicketId) -> PathBuf {
        self.tickets_dir().join(format!("{id}.yaml"))
    }

    fn user_path(&self, id: &UserId) -> PathBuf {
        self.users_dir().join(format!("{id}.yaml"))
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    // --- tickets ---

    /// Persist a ticket (create or overwrite)
    pub fn save_ticket(&self, ticket: &Ticket) -> Result<()> {
        self.ensure_initialized()?;
        let yaml = serde_yaml::to_string(ticket)?;
        fs::write(self.ticket_path(&ticket.id), yaml)?;
        debug!(ticket = %ticket.id, "saved ticket");
        Ok(())
    }

    /// Load a ticket by ID
    pub fn load_ticket(&self, id: &TicketId) -> Result<Ticket> {
        let path = self.ticket_path(id);
        if !path.exists() {
            return Err(HelpdeskError::TicketNotFound { id: id.to_string() });
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| HelpdeskError::ParseError(format!("ticket {id}: {e}")))
    }

    /// Load every ticket in the store
    pub fn load_all_tickets(&self) -> Result<Vec<Ticket>> {
        self.ensure_initialized()?;
        let mut tickets = Vec::new();
        for entry in fs::read_dir(self.tickets_dir())? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let content = fs::read_to_string(&path)?;
                let ticket = serde_yaml::from_str(&content).map_err(|e| {
                    HelpdeskError::ParseError(format!("{}: {e}", path.display()))
                })?;
                tickets.push(ticket);
            }
        }
        Ok(tickets)
    }

    /// Delete a ticket file, cascading its comments and history
    pub fn delete_ticket(&self, id: &TicketId) -> Result<()> {
        let path = self.ticket_path(id);
        if !path.exists() {
            return Err(HelpdeskError::TicketNotFound { id: id.to_string() });
        }
        fs::remove_file(path)?;
        debug!(ticket = %id, "deleted ticket");
        Ok(())
    }

    // --- users ---

    /// Persist a user account
    pub fn save_user(&self, user: &User) -> Result<()> {
        self.ensure_initialized()?;
        let yaml = serde_yaml::to_string(user)?;
        fs::write(self.user_path(&user.id), yaml)?;
        debug!(user = %user.username, "saved user");
        Ok(())
    }

    /// Load a user by ID
    pub fn load_user(&self, id: &UserId) -> Result<User> {
        let path = self.user_path(id);
        if !path.exists() {
            return Err(HelpdeskError::UserNotFound { name: id.to_string() });
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| HelpdeskError::ParseError(format!("user {id}: {e}")))
    }

    /// Load every user account
    pub fn load_all_users(&self) -> Result<Vec<User>> {
        self.ensure_initialized()?;
        let mut users = Vec::new();
        for entry in fs::read_dir(self.users_dir())? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let content = fs::read_to_string(&path)?;
                let user = serde_yaml::from_str(&content).map_err(|e| {
                    HelpdeskError::ParseError(format!("{}: {e}", path.display()))
                })?;
                users.push(user);
            }
        }
        Ok(users)
    }

    /// Find a user by username
    pub fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.load_all_users()?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    // --- config ---

    /// Load the project config, falling back to defaults when absent
    pub fn load_config(&self) -> Result<HelpdeskConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(HelpdeskConfig::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| HelpdeskError::ParseError(format!("config: {e}")))
    }

    /// Persist the project config
    pub fn save_config(&self, config: &HelpdeskConfig) -> Result<()> {
        let yaml = serde_yaml::to_string(config)?;
        fs::write(self.config_path(), yaml)?;
        Ok(())
    }
}
