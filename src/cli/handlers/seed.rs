//! Handler for the `seed` command
//!
//! Populates the helpdesk with a demo data set: a handful of reporters and
//! technicians plus a spread of tickets across statuses, urgencies and
//! categories, back-dated so the analytics view has something to show.

use crate::cli::OutputFormatter;
use crate::cli::handlers::common::HandlerContext;
use crate::core::{
    ActionKind, Category, Comment, HistoryEntry, Role, Status, TicketBuilder, Urgency, User,
    UserId,
};
use crate::error::{HelpdeskError, Result};
use chrono::{Duration, Utc};

struct SeedTicket {
    title: &'static str,
    description: &'static str,
    urgency: Urgency,
    category: Category,
    created_by: &'static str,
    assigned_to: Option<&'static str>,
    status: Status,
}

const SEED_USERS: &[(&str, Role, Option<&str>)] = &[
    ("user1", Role::User, None),
    ("user2", Role::User, None),
    ("user3", Role::User, None),
    ("tech1", Role::Technician, None),
    ("tech_network", Role::Technician, Some("network")),
    ("tech_software", Role::Technician, Some("software")),
];

const SEED_TICKETS: &[SeedTicket] = &[
    SeedTicket {
        title: "Server Down - Production Environment",
        description: "The main production server is not responding. All applications are offline.",
        urgency: Urgency::Critical,
        category: Category::Infrastructure,
        created_by: "user1",
        assigned_to: Some("tech1"),
        status: Status::InProgress,
    },
    SeedTicket {
        title: "Cannot Access Email System",
        description: "Unable to login to Outlook. Getting authentication error.",
        urgency: Urgency::High,
        category: Category::Access,
        created_by: "user2",
        assigned_to: Some("tech_software"),
        status: Status::New,
    },
    SeedTicket {
        title: "Slow Internet Connection in Building A",
        description: "Network speed is very slow, affecting all departments in Building A.",
        urgency: Urgency::Medium,
        category: Category::Connectivity,
        created_by: "user1",
        assigned_to: Some("tech_network"),
        status: Status::InProgress,
    },
    SeedTicket {
        title: "Printer Not Working - Finance Department",
        description: "HP LaserJet printer shows error code 49. Need urgent fix for reports.",
        urgency: Urgency::Medium,
        category: Category::Hardware,
        created_by: "user3",
        assigned_to: None,
        status: Status::New,
    },
    SeedTicket {
        title: "Software License Renewal",
        description: "Microsoft Office licenses expiring next week. Need renewal.",
        urgency: Urgency::Low,
        category: Category::Software,
        created_by: "user2",
        assigned_to: None,
        status: Status::New,
    },
    SeedTicket {
        title: "Database Performance Issues",
        description: "Queries taking too long to execute. Database needs optimization.",
        urgency: Urgency::High,
        category: Category::Data,
        created_by: "user1",
        assigned_to: Some("tech1"),
        status: Status::Resolved,
    },
    SeedTicket {
        title: "New Employee Workstation Setup",
        description: "Need to setup computer, email, and access rights for new employee starting Monday.",
        urgency: Urgency::Medium,
        category: Category::Other,
        created_by: "user3",
        assigned_to: Some("tech_software"),
        status: Status::Closed,
    },
];

/// Create the demo users and tickets (admin only)
pub fn handle_seed(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let admin = ctx.actor(acting_as)?;
    if !admin.is_admin() {
        return Err(HelpdeskError::denied("seed demo data", admin.role));
    }

    for (username, role, specialty) in SEED_USERS {
        if ctx.storage.find_user_by_username(username)?.is_none() {
            let mut user = User::new(
                (*username).to_string(),
                format!("{username}@corp.example"),
                *role,
            );
            user.specialty = specialty.map(str::to_string);
            ctx.storage.save_user(&user)?;
        }
    }

    let now = Utc::now();
    let mut created = 0;
    for (i, seed) in SEED_TICKETS.iter().enumerate() {
        let offset = i as i64 + 1;
        let created_at = now - Duration::days(offset) - Duration::hours(offset * 2);

        let creator = lookup(ctx, seed.created_by)?;
        let assignee = seed
            .assigned_to
            .map(|name| lookup(ctx, name))
            .transpose()?;

        let mut builder = TicketBuilder::new()
            .title(seed.title)
            .description(seed.description)
            .urgency(seed.urgency)
            .category(seed.category)
            .status(seed.status)
            .created_by(creator)
            .created_at(created_at);
        if let Some(assignee) = assignee {
            builder = builder.assigned_to(assignee);
        }
        match seed.status {
            Status::Resolved => {
                builder = builder.resolved_at(created_at + Duration::hours(12));
            },
            Status::Closed => {
                builder = builder
                    .resolved_at(created_at + Duration::hours(6))
                    .closed_at(created_at + Duration::hours(8));
            },
            _ => {},
        }
        let mut ticket = builder.build();

        ticket.history.push(HistoryEntry {
            actor: creator,
            action: ActionKind::Created,
            from_status: None,
            to_status: Some(seed.status),
            note: Some("Ticket created".to_string()),
            created_at,
        });
        if let Some(name) = seed.assigned_to {
            ticket.history.push(HistoryEntry {
                actor: admin.id,
                action: ActionKind::Assigned,
                from_status: None,
                to_status: None,
                note: Some(format!("Assigned to {name}")),
                created_at: created_at + Duration::minutes(30),
            });
        }

        // Comments on every other ticket, like a real back-and-forth
        if i % 2 == 1 {
            ticket.comments.push(Comment {
                author: creator,
                content: "This is affecting multiple users. Please prioritize.".to_string(),
                created_at: created_at + Duration::hours(1),
            });
            if let Some(assignee) = assignee {
                ticket.comments.push(Comment {
                    author: assignee,
                    content: "Working on it. Will update soon.".to_string(),
                    created_at: created_at + Duration::hours(2),
                });
            }
        }

        ctx.storage.save_ticket(&ticket)?;
        created += 1;
    }

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "users": SEED_USERS.len(),
            "tickets": created,
        }))?;
    } else {
        output.success(&format!(
            "Seeded {} users and {created} tickets",
            SEED_USERS.len()
        ));
    }
    Ok(())
}

fn lookup(ctx: &HandlerContext, username: &str) -> Result<UserId> {
    ctx.storage
        .find_user_by_username(username)?
        .map(|u| u.id)
        .ok_or_else(|| HelpdeskError::UserNotFound {
            name: username.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FileStorage;
    use crate::test_utils::TestProject;

    #[test]
    fn test_seed_populates_store() {
        let project = TestProject::new();
        project.user("admin", Role::Admin);
        let ctx = HandlerContext {
            storage: FileStorage::new(project.root.clone()),
        };
        let output = OutputFormatter::new(false, true);

        handle_seed(&ctx, Some("admin"), &output).unwrap();

        let tickets = ctx.storage.load_all_tickets().unwrap();
        assert_eq!(tickets.len(), SEED_TICKETS.len());
        // admin + the six seeded accounts
        assert_eq!(ctx.storage.load_all_users().unwrap().len(), 7);

        let closed = tickets
            .iter()
            .find(|t| t.status == Status::Closed)
            .expect("seed includes a closed ticket");
        assert!(closed.resolved_at.is_some());
        assert!(closed.closed_at.is_some());
        // Every seeded ticket carries at least its creation entry
        assert!(tickets.iter().all(|t| !t.history.is_empty()));
    }

    #[test]
    fn test_seed_requires_admin() {
        let project = TestProject::new();
        project.user("alice", Role::User);
        let ctx = HandlerContext {
            storage: FileStorage::new(project.root.clone()),
        };
        let output = OutputFormatter::new(false, true);

        let err = handle_seed(&ctx, Some("alice"), &output).unwrap_err();
        assert!(err.is_permission_denied());
    }
}
