//! Handlers for the `list` and `board` commands

use crate::cli::OutputFormatter;
use crate::cli::handlers::common::HandlerContext;
use crate::core::{Category, Status, Ticket, Urgency};
use crate::error::Result;
use crate::service::TicketQuery;
use chrono::Utc;
use std::str::FromStr;

/// Arguments for the list command filters
pub struct ListArgs {
    pub status: Option<String>,
    pub urgency: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub regex: bool,
}

/// List the tickets visible to the acting user
pub fn handle_list(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    args: ListArgs,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;

    let query = TicketQuery {
        status: args.status.as_deref().map(Status::from_str).transpose()?,
        urgency: args.urgency.as_deref().map(Urgency::from_str).transpose()?,
        category: args.category.as_deref().map(Category::from_str).transpose()?,
        search: args.search,
        use_regex: args.regex,
    };
    let tickets = service.list(&actor, &query)?;

    if output.is_json() {
        return output.print_json(&tickets);
    }

    if tickets.is_empty() {
        output.info("No tickets found");
        return Ok(());
    }

    let now = Utc::now();
    let sla = &service.config().sla;
    output.info(&format!("{} ticket(s):", tickets.len()));
    for ticket in &tickets {
        output.info(&format_row(ticket, ticket.is_overdue_with(now, sla.hours_for(ticket.urgency))));
    }
    Ok(())
}

/// Show visible tickets grouped by status, in lifecycle order
pub fn handle_board(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let mut tickets = service.visible_tickets(&actor)?;
    tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    if output.is_json() {
        let board: serde_json::Map<String, serde_json::Value> = Status::ALL
            .iter()
            .map(|status| {
                let column: Vec<&Ticket> =
                    tickets.iter().filter(|t| t.status == *status).collect();
                Ok((status.to_string(), serde_json::to_value(column)?))
            })
            .collect::<Result<_>>()?;
        return output.print_json(&board);
    }

    let now = Utc::now();
    let sla = &service.config().sla;
    for status in Status::ALL {
        let column: Vec<&Ticket> = tickets.iter().filter(|t| t.status == status).collect();
        output.info(&format!("{status} ({})", column.len()));
        for ticket in column {
            output.info(&format!(
                "  {}",
                format_row(ticket, ticket.is_overdue_with(now, sla.hours_for(ticket.urgency)))
            ));
        }
        output.info("");
    }
    Ok(())
}

fn format_row(ticket: &Ticket, overdue: bool) -> String {
    let id = ticket.id.to_string();
    let marker = if overdue { "  !OVERDUE" } else { "" };
    format!(
        "{}  {:<12} {:<8} {:<14} {}{}",
        &id[..8],
        ticket.status.to_string(),
        ticket.urgency.to_string(),
        ticket.category.to_string(),
        ticket.title,
        marker
    )
}
