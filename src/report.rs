//! Reporting: dashboard analytics and CSV export
//!
//! Read-only aggregation over the tickets visible to the caller. Scoping is
//! the same as for listing: users see their own tickets, technicians the
//! ones assigned to them, admins everything.

use crate::core::{Category, Status, Ticket, Urgency, User, UserId};
use crate::error::Result;
use crate::service::TicketService;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Ticket counts per status
#[derive(Debug, Default, Serialize)]
pub struct StatusCounts {
    pub new: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

/// Ticket counts per urgency
#[derive(Debug, Default, Serialize)]
pub struct UrgencyCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

/// Tickets created on one day of the trailing window
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub created: usize,
}

/// Open tickets per technician
#[derive(Debug, Serialize)]
pub struct TechnicianWorkload {
    pub technician: String,
    pub open_tickets: usize,
}

/// Aggregated dashboard numbers
#[derive(Debug, Serialize)]
pub struct Analytics {
    pub total: usize,
    pub by_status: StatusCounts,
    pub by_urgency: UrgencyCounts,
    pub by_category: BTreeMap<String, usize>,
    /// One entry per day of the trailing window, oldest first
    pub daily_created: Vec<DailyCount>,
    /// Mean of (resolved_at - created_at) over resolved tickets
    pub avg_resolution_hours: Option<f64>,
    pub workload: Vec<TechnicianWorkload>,
    pub overdue: usize,
}

/// Compute analytics over the tickets visible to `actor`.
pub fn analytics(service: &TicketService<'_>, actor: &User, now: DateTime<Utc>) -> Result<Analytics> {
    let tickets = service.visible_tickets(actor)?;
    let users = service.storage().load_all_users()?;
    let config = service.config();
    Ok(analyze(
        &tickets,
        &users,
        config.analytics_window_days,
        |t| t.is_overdue_with(now, config.sla.hours_for(t.urgency)),
        now,
    ))
}

/// Pure aggregation over a ticket set
fn analyze(
    tickets: &[Ticket],
    users: &[User],
    window_days: i64,
    is_overdue: impl Fn(&Ticket) -> bool,
    now: DateTime<Utc>,
) -> Analytics {
    let mut by_status = StatusCounts::default();
    let mut by_urgency = UrgencyCounts::default();
    let mut by_category: BTreeMap<String, usize> = Category::ALL
        .iter()
        .map(|c| (c.to_string(), 0))
        .collect();
    let mut open_by_assignee: HashMap<UserId, usize> = HashMap::new();
    let mut resolution_hours = Vec::new();
    let mut overdue = 0;

    for ticket in tickets {
        match ticket.status {
            Status::New => by_status.new += 1,
            Status::InProgress => by_status.in_progress += 1,
            Status::Resolved => by_status.resolved += 1,
            Status::Closed => by_status.closed += 1,
        }
        match ticket.urgency {
            Urgency::Low => by_urgency.low += 1,
            Urgency::Medium => by_urgency.medium += 1,
            Urgency::High => by_urgency.high += 1,
            Urgency::Critical => by_urgency.critical += 1,
        }
        *by_category.entry(ticket.category.to_string()).or_insert(0) += 1;

        if let Some(assignee) = ticket.assigned_to {
            if ticket.status.is_open() {
                *open_by_assignee.entry(assignee).or_insert(0) += 1;
            }
        }
        if let Some(duration) = ticket.resolution_time() {
            resolution_hours.push(duration.num_minutes() as f64 / 60.0);
        }
        if is_overdue(ticket) {
            overdue += 1;
        }
    }

    // Daily creation counts over the trailing window, zero-filled
    let today = now.date_naive();
    let mut daily_created: Vec<DailyCount> = (0..window_days)
        .rev()
        .map(|back| DailyCount {
            date: today - Duration::days(back),
            created: 0,
        })
        .collect();
    for ticket in tickets {
        let created = ticket.created_at.date_naive();
        if let Some(entry) = daily_created.iter_mut().find(|d| d.date == created) {
            entry.created += 1;
        }
    }

    let avg_resolution_hours = if resolution_hours.is_empty() {
        None
    } else {
        Some(resolution_hours.iter().sum::<f64>() / resolution_hours.len() as f64)
    };

    let names: HashMap<UserId, &str> =
        users.iter().map(|u| (u.id, u.username.as_str())).collect();
    let mut workload: Vec<TechnicianWorkload> = open_by_assignee
        .into_iter()
        .map(|(id, count)| TechnicianWorkload {
            technician: names.get(&id).map_or_else(|| id.to_string(), |n| (*n).to_string()),
            open_tickets: count,
        })
        .collect();
    workload.sort_by(|a, b| b.open_tickets.cmp(&a.open_tickets).then(a.technician.cmp(&b.technician)));

    Analytics {
        total: tickets.len(),
        by_status,
        by_urgency,
        by_category,
        daily_created,
        avg_resolution_hours,
        workload,
        overdue,
    }
}

/// Export the tickets visible to `actor` as CSV.
pub fn export_csv(service: &TicketService<'_>, actor: &User) -> Result<String> {
    let mut tickets = service.visible_tickets(actor)?;
    tickets.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    let users = service.storage().load_all_users()?;
    let names: HashMap<UserId, &str> =
        users.iter().map(|u| (u.id, u.username.as_str())).collect();
    let resolve = |id: &UserId| names.get(id).map_or_else(|| id.to_string(), |n| (*n).to_string());

    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "id",
        "title",
        "status",
        "urgency",
        "category",
        "created_by",
        "assigned_to",
        "created_at",
        "updated_at",
        "resolved_at",
        "closed_at",
    ])?;

    for ticket in &tickets {
        writer.write_record([
            ticket.id.to_string(),
            ticket.title.clone(),
            ticket.status.to_string(),
            ticket.urgency.to_string(),
            ticket.category.to_string(),
            resolve(&ticket.created_by),
            ticket.assigned_to.as_ref().map(&resolve).unwrap_or_default(),
            ticket.created_at.to_rfc3339(),
            ticket.updated_at.to_rfc3339(),
            ticket.resolved_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            ticket.closed_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::error::HelpdeskError::SerializationError(e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|e| crate::error::HelpdeskError::SerializationError(e.to_string()))
}
