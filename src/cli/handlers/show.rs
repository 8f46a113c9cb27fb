//! Handlers for the `show` and `history` commands

use crate::cli::OutputFormatter;
use crate::cli::handlers::common::HandlerContext;
use crate::core::{Ticket, UserId};
use crate::error::Result;
use chrono::Utc;
use std::collections::HashMap;

/// Display one ticket with its comments and history
pub fn handle_show(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    ticket_ref: &str,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let id = ctx.resolve_ticket_ref(ticket_ref)?;
    let ticket = service.get(&actor, &id)?;

    if output.is_json() {
        return output.print_json(&ticket);
    }

    let names = ctx.username_map()?;
    let sla_hours = service.config().sla.hours_for(ticket.urgency);
    display_ticket(&ticket, &names, sla_hours, output);
    Ok(())
}

/// Display a ticket's audit history
pub fn handle_history(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    ticket_ref: &str,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let id = ctx.resolve_ticket_ref(ticket_ref)?;
    let ticket = service.get(&actor, &id)?;

    if output.is_json() {
        return output.print_json(&ticket.history);
    }

    let names = ctx.username_map()?;
    output.info(&format!("History for {} '{}':", ticket.id, ticket.title));
    for entry in &ticket.history {
        let actor_name = display_name(&names, &entry.actor);
        let transition = match (entry.from_status, entry.to_status) {
            (Some(from), Some(to)) => format!(" {from} -> {to}"),
            (None, Some(to)) => format!(" -> {to}"),
            _ => String::new(),
        };
        let note = entry.note.as_deref().unwrap_or("");
        output.info(&format!(
            "  {} {:<14} {:<12}{} {}",
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.action.to_string(),
            actor_name,
            transition,
            note
        ));
    }
    Ok(())
}

fn display_ticket(
    ticket: &Ticket,
    names: &HashMap<UserId, String>,
    sla_hours: i64,
    output: &OutputFormatter,
) {
    output.info(&format!("Ticket:      {}", ticket.id));
    output.info(&format!("Title:       {}", ticket.title));
    output.info(&format!("Status:      {}", ticket.status));
    output.info(&format!("Urgency:     {}", ticket.urgency));
    output.info(&format!("Category:    {}", ticket.category));
    output.info(&format!(
        "Created by:  {}",
        display_name(names, &ticket.created_by)
    ));
    output.info(&format!(
        "Assigned to: {}",
        ticket
            .assigned_to
            .as_ref()
            .map_or_else(|| "-".to_string(), |id| display_name(names, id))
    ));
    output.info(&format!(
        "Created:     {}",
        ticket.created_at.format("%Y-%m-%d %H:%M")
    ));
    if let Some(resolved_at) = ticket.resolved_at {
        output.info(&format!("Resolved:    {}", resolved_at.format("%Y-%m-%d %H:%M")));
    }
    if let Some(closed_at) = ticket.closed_at {
        output.info(&format!("Closed:      {}", closed_at.format("%Y-%m-%d %H:%M")));
    }
    if ticket.is_overdue_with(Utc::now(), sla_hours) {
        output.warning(&format!("OVERDUE (SLA {sla_hours}h)"));
    }

    output.info("");
    output.info(&ticket.description);

    if !ticket.comments.is_empty() {
        output.info("");
        output.info(&format!("Comments ({}):", ticket.comments.len()));
        for comment in &ticket.comments {
            output.info(&format!(
                "  [{}] {}: {}",
                comment.created_at.format("%Y-%m-%d %H:%M"),
                display_name(names, &comment.author),
                comment.content
            ));
        }
    }
}

fn display_name(names: &HashMap<UserId, String>, id: &UserId) -> String {
    names.get(id).cloned().unwrap_or_else(|| id.to_string())
}
