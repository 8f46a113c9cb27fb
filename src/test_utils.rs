//! Test utilities for helpdesk
//!
//! Common fixtures shared by the unit tests across the crate.

#![cfg(test)]

use crate::config::HelpdeskConfig;
use crate::core::{Category, Role, Status, Ticket, TicketBuilder, Urgency, User, UserBuilder};
use crate::store::FileStorage;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture wrapping an initialized temporary storage directory
pub struct TestProject {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub storage: FileStorage,
}

impl TestProject {
    /// Create a new initialized test project
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join(".helpdesk");
        let storage = FileStorage::new(root.clone());
        storage
            .init(&HelpdeskConfig::default())
            .expect("Failed to init storage");

        Self {
            temp_dir,
            root,
            storage,
        }
    }

    /// Create and persist a user with the given role
    pub fn user(&self, username: &str, role: Role) -> User {
        let user = UserBuilder::new()
            .username(username)
            .email(format!("{username}@corp.example"))
            .role(role)
            .build();
        self.storage.save_user(&user).expect("Failed to save user");
        user
    }

    /// Create and persist a ticket filed by `creator`
    pub fn ticket(&self, title: &str, creator: &User) -> Ticket {
        let ticket = create_test_ticket(title, creator);
        self.storage
            .save_ticket(&ticket)
            .expect("Failed to save ticket");
        ticket
    }
}

/// Create a test ticket with default values, not persisted
pub fn create_test_ticket(title: &str, creator: &User) -> Ticket {
    TicketBuilder::new()
        .title(title)
        .description(format!("Description for {title}"))
        .status(Status::New)
        .urgency(Urgency::Medium)
        .category(Category::Other)
        .created_by(creator.id)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = TestProject::new();
        assert!(project.root.join("tickets").exists());
        assert!(project.root.join("users").exists());
    }

    #[test]
    fn test_fixture_persists_users_and_tickets() {
        let project = TestProject::new();
        let alice = project.user("alice", Role::User);
        project.ticket("Sample", &alice);

        assert_eq!(project.storage.load_all_users().unwrap().len(), 1);
        assert_eq!(project.storage.load_all_tickets().unwrap().len(), 1);
    }
}
