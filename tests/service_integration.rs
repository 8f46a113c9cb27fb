//! End-to-end tests for the ticket service over real file storage

use chrono::{Duration, Utc};
use helpdesk::config::HelpdeskConfig;
use helpdesk::core::{ActionKind, Category, Role, Status, Urgency, User, UserBuilder};
use helpdesk::error::HelpdeskError;
use helpdesk::report;
use helpdesk::service::{NewTicket, TicketQuery, TicketService};
use helpdesk::store::FileStorage;
use tempfile::TempDir;

struct Fixture {
    _temp_dir: TempDir,
    storage: FileStorage,
}

impl Fixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::new(temp_dir.path().join(".helpdesk"));
        storage
            .init(&HelpdeskConfig::default())
            .expect("Failed to init storage");
        Self {
            _temp_dir: temp_dir,
            storage,
        }
    }

    fn user(&self, username: &str, role: Role) -> User {
        let user = UserBuilder::new()
            .username(username)
            .email(format!("{username}@corp.example"))
            .role(role)
            .build();
        self.storage.save_user(&user).expect("Failed to save user");
        user
    }
}

fn params(title: &str, urgency: Urgency) -> NewTicket {
    NewTicket {
        title: title.to_string(),
        description: "integration test ticket".to_string(),
        urgency,
        category: Category::Software,
    }
}

#[test]
fn full_ticket_lifecycle_with_audit_trail() {
    let fixture = Fixture::new();
    let service = TicketService::new(&fixture.storage).unwrap();
    let admin = fixture.user("admin", Role::Admin);
    let alice = fixture.user("alice", Role::User);
    let tech = fixture.user("tech1", Role::Technician);

    // Alice files a ticket
    let ticket = service
        .create(&alice, params("Outlook crashes on startup", Urgency::High))
        .unwrap();
    assert_eq!(ticket.status, Status::New);

    // Tech takes it and works it to closure
    service.take(&tech, &ticket.id).unwrap();
    service
        .change_status(&tech, &ticket.id, Status::InProgress)
        .unwrap();
    service
        .add_comment(&tech, &ticket.id, "Reproduced; profile corrupt")
        .unwrap();
    service
        .change_status(&tech, &ticket.id, Status::Resolved)
        .unwrap();
    let closed = service
        .change_status(&admin, &ticket.id, Status::Closed)
        .unwrap();

    assert_eq!(closed.status, Status::Closed);
    assert!(closed.resolved_at.is_some());
    assert!(closed.closed_at.is_some());

    // One history entry per mutation: create, take, 3 status changes, comment
    assert_eq!(closed.history.len(), 6);
    let kinds: Vec<ActionKind> = closed.history.iter().map(|h| h.action).collect();
    assert_eq!(kinds[0], ActionKind::Created);
    assert_eq!(kinds[1], ActionKind::Assigned);
    assert_eq!(
        kinds.iter().filter(|k| **k == ActionKind::StatusChanged).count(),
        3
    );
    assert_eq!(
        kinds.iter().filter(|k| **k == ActionKind::CommentAdded).count(),
        1
    );

    // Everyone sees it according to their role
    let all = TicketQuery::default();
    assert_eq!(service.list(&alice, &all).unwrap().len(), 1);
    assert_eq!(service.list(&tech, &all).unwrap().len(), 1);
    assert_eq!(service.list(&admin, &all).unwrap().len(), 1);
}

#[test]
fn permission_checks_across_roles() {
    let fixture = Fixture::new();
    let service = TicketService::new(&fixture.storage).unwrap();
    let alice = fixture.user("alice", Role::User);
    let bob = fixture.user("bob", Role::User);
    let tech = fixture.user("tech1", Role::Technician);

    let ticket = service
        .create(&alice, params("Screen flickers", Urgency::Low))
        .unwrap();

    // Bob cannot see, comment on, or delete Alice's ticket
    assert!(service.get(&bob, &ticket.id).unwrap_err().is_permission_denied());
    assert!(
        service
            .add_comment(&bob, &ticket.id, "same here")
            .unwrap_err()
            .is_permission_denied()
    );
    assert!(service.delete(&bob, &ticket.id).unwrap_err().is_permission_denied());

    // A user cannot change status even on their own ticket
    assert!(
        service
            .change_status(&alice, &ticket.id, Status::InProgress)
            .unwrap_err()
            .is_permission_denied()
    );

    // The technician cannot act before taking the ticket
    assert!(
        service
            .change_status(&tech, &ticket.id, Status::InProgress)
            .unwrap_err()
            .is_permission_denied()
    );
    service.take(&tech, &ticket.id).unwrap();
    service
        .change_status(&tech, &ticket.id, Status::InProgress)
        .unwrap();

    // Once assigned, Alice can no longer delete it herself
    assert!(service.delete(&alice, &ticket.id).unwrap_err().is_permission_denied());
}

#[test]
fn overdue_follows_sla_and_resolution() {
    let fixture = Fixture::new();
    let service = TicketService::new(&fixture.storage).unwrap();
    let admin = fixture.user("admin", Role::Admin);

    let ticket = service
        .create(&admin, params("Core switch unreachable", Urgency::Critical))
        .unwrap();

    // Critical SLA is 4 hours: overdue at +5h while still NEW
    let five_hours = ticket.created_at + Duration::hours(5);
    let stored = service.get(&admin, &ticket.id).unwrap();
    assert!(stored.is_overdue(five_hours));

    // Resolving stops the clock for good
    service
        .change_status(&admin, &ticket.id, Status::Resolved)
        .unwrap();
    let resolved = service.get(&admin, &ticket.id).unwrap();
    assert!(!resolved.is_overdue(five_hours + Duration::days(10)));
}

#[test]
fn analytics_respects_role_scope() {
    let fixture = Fixture::new();
    let service = TicketService::new(&fixture.storage).unwrap();
    let admin = fixture.user("admin", Role::Admin);
    let alice = fixture.user("alice", Role::User);
    let bob = fixture.user("bob", Role::User);
    let tech = fixture.user("tech1", Role::Technician);

    let t1 = service
        .create(&alice, params("Alice's issue", Urgency::Medium))
        .unwrap();
    service.create(&bob, params("Bob's issue", Urgency::High)).unwrap();
    service.assign(&admin, &t1.id, &tech).unwrap();

    let now = Utc::now();
    let admin_view = report::analytics(&service, &admin, now).unwrap();
    assert_eq!(admin_view.total, 2);
    assert_eq!(admin_view.workload.len(), 1);
    assert_eq!(admin_view.workload[0].technician, "tech1");

    let alice_view = report::analytics(&service, &alice, now).unwrap();
    assert_eq!(alice_view.total, 1);
    assert_eq!(alice_view.by_urgency.high, 0);

    let tech_view = report::analytics(&service, &tech, now).unwrap();
    assert_eq!(tech_view.total, 1);
}

#[test]
fn csv_export_is_scoped_and_well_formed() {
    let fixture = Fixture::new();
    let service = TicketService::new(&fixture.storage).unwrap();
    let admin = fixture.user("admin", Role::Admin);
    let alice = fixture.user("alice", Role::User);
    let bob = fixture.user("bob", Role::User);

    service
        .create(&alice, params("Keyboard sticky keys", Urgency::Low))
        .unwrap();
    service
        .create(&bob, params("Monitor dead pixels", Urgency::Low))
        .unwrap();

    let admin_csv = report::export_csv(&service, &admin).unwrap();
    let mut lines = admin_csv.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("id,title,status,"));
    assert_eq!(lines.count(), 2);
    assert!(admin_csv.contains("alice"));
    assert!(admin_csv.contains("bob"));

    let alice_csv = report::export_csv(&service, &alice).unwrap();
    assert_eq!(alice_csv.lines().count(), 2); // header + own ticket
    assert!(alice_csv.contains("Keyboard sticky keys"));
    assert!(!alice_csv.contains("Monitor dead pixels"));
}

#[test]
fn delete_cascades_comments_and_history() {
    let fixture = Fixture::new();
    let service = TicketService::new(&fixture.storage).unwrap();
    let admin = fixture.user("admin", Role::Admin);
    let alice = fixture.user("alice", Role::User);

    let ticket = service
        .create(&alice, params("Duplicate request", Urgency::Low))
        .unwrap();
    service
        .add_comment(&alice, &ticket.id, "opened twice by mistake")
        .unwrap();

    service.delete(&admin, &ticket.id).unwrap();

    assert!(matches!(
        service.get(&admin, &ticket.id),
        Err(HelpdeskError::TicketNotFound { .. })
    ));
    assert!(fixture.storage.load_all_tickets().unwrap().is_empty());
}

#[test]
fn actor_lookup_by_username() {
    let fixture = Fixture::new();
    let service = TicketService::new(&fixture.storage).unwrap();
    fixture.user("carol", Role::User);

    assert_eq!(service.actor_by_username("carol").unwrap().username, "carol");
    assert!(matches!(
        service.actor_by_username("nobody"),
        Err(HelpdeskError::UserNotFound { .. })
    ));
}
