//! Handlers for the `analytics` and `export` commands

use crate::cli::OutputFormatter;
use crate::cli::handlers::common::HandlerContext;
use crate::error::Result;
use crate::report;
use chrono::Utc;
use std::fs;

/// Show aggregated dashboard numbers for the acting user's scope
pub fn handle_analytics(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let report = report::analytics(&service, &actor, Utc::now())?;

    if output.is_json() {
        return output.print_json(&report);
    }

    output.info(&format!("Total tickets: {}", report.total));
    output.info("");
    output.info("By status:");
    output.info(&format!("  NEW:         {}", report.by_status.new));
    output.info(&format!("  IN_PROGRESS: {}", report.by_status.in_progress));
    output.info(&format!("  RESOLVED:    {}", report.by_status.resolved));
    output.info(&format!("  CLOSED:      {}", report.by_status.closed));
    output.info("");
    output.info("By urgency:");
    output.info(&format!("  CRITICAL: {}", report.by_urgency.critical));
    output.info(&format!("  HIGH:     {}", report.by_urgency.high));
    output.info(&format!("  MEDIUM:   {}", report.by_urgency.medium));
    output.info(&format!("  LOW:      {}", report.by_urgency.low));
    output.info("");
    output.info("By category:");
    for (category, count) in &report.by_category {
        output.info(&format!("  {category:<16} {count}"));
    }
    output.info("");
    output.info(&format!(
        "Created per day (last {} days):",
        report.daily_created.len()
    ));
    for day in &report.daily_created {
        output.info(&format!("  {}  {}", day.date, day.created));
    }
    output.info("");
    match report.avg_resolution_hours {
        Some(hours) => output.info(&format!("Average resolution time: {hours:.1}h")),
        None => output.info("Average resolution time: n/a"),
    }
    if !report.workload.is_empty() {
        output.info("");
        output.info("Open tickets per technician:");
        for entry in &report.workload {
            output.info(&format!("  {:<20} {}", entry.technician, entry.open_tickets));
        }
    }
    output.info("");
    if report.overdue > 0 {
        output.warning(&format!("Overdue tickets: {}", report.overdue));
    } else {
        output.info("Overdue tickets: 0");
    }
    Ok(())
}

/// Export the visible tickets as CSV, to stdout or a file
pub fn handle_export(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    output_path: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let csv = report::export_csv(&service, &actor)?;

    match output_path {
        Some(path) => {
            fs::write(path, &csv)?;
            output.success(&format!("Exported tickets to {path}"));
        },
        None => print!("{csv}"),
    }
    Ok(())
}
