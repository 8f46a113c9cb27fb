//! Handlers for the ticket mutation commands: assign, take, status, comment,
//! delete

use crate::cli::OutputFormatter;
use crate::cli::handlers::common::HandlerContext;
use crate::core::Status;
use crate::error::Result;
use std::str::FromStr;

/// Assign a ticket to a technician (admin only)
pub fn handle_assign(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    ticket_ref: &str,
    technician: &str,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let id = ctx.resolve_ticket_ref(ticket_ref)?;
    let technician = service.actor_by_username(technician)?;

    let ticket = service.assign(&actor, &id, &technician)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!(
            "Assigned '{}' to {}",
            ticket.title, technician.username
        ));
    }
    Ok(())
}

/// Take an unassigned ticket (technician only)
pub fn handle_take(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    ticket_ref: &str,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let id = ctx.resolve_ticket_ref(ticket_ref)?;

    let ticket = service.take(&actor, &id)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!("You took '{}'", ticket.title));
    }
    Ok(())
}

/// Change a ticket's status
pub fn handle_status(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    ticket_ref: &str,
    status: &str,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let id = ctx.resolve_ticket_ref(ticket_ref)?;
    let new_status = Status::from_str(status)?;

    let ticket = service.change_status(&actor, &id, new_status)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!("'{}' is now {}", ticket.title, ticket.status));
    }
    Ok(())
}

/// Add a comment to a ticket
pub fn handle_comment(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    ticket_ref: &str,
    text: &str,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let id = ctx.resolve_ticket_ref(ticket_ref)?;

    let ticket = service.add_comment(&actor, &id, text)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!(
            "Commented on '{}' ({} comment(s))",
            ticket.title,
            ticket.comments.len()
        ));
    }
    Ok(())
}

/// Delete a ticket and everything attached to it
pub fn handle_delete(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    ticket_ref: &str,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let id = ctx.resolve_ticket_ref(ticket_ref)?;

    service.delete(&actor, &id)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({ "deleted": id.to_string() }))?;
    } else {
        output.success(&format!("Deleted ticket {id}"));
    }
    Ok(())
}
