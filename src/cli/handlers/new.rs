//! Handler for the `new` command
//!
//! Files a ticket from command-line arguments, prompting for whatever is
//! missing.

use crate::cli::OutputFormatter;
use crate::cli::handlers::common::HandlerContext;
use crate::core::{Category, Urgency};
use crate::error::Result;
use crate::service::NewTicket;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::str::FromStr;

/// Arguments for filing a ticket
pub struct NewArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub urgency: Option<String>,
    pub category: Option<String>,
}

/// File a new ticket on behalf of the acting user
pub fn handle_new(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    args: NewArgs,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;

    let params = build_params(args, service.config().default_urgency)?;
    let ticket = service.create(&actor, params)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!(
            "Created ticket {} '{}' [{} {}]",
            ticket.id, ticket.title, ticket.urgency, ticket.category
        ));
    }
    Ok(())
}

/// Assemble ticket parameters, prompting for missing fields
fn build_params(args: NewArgs, default_urgency: Urgency) -> Result<NewTicket> {
    let theme = ColorfulTheme::default();

    let title = match args.title {
        Some(t) => t,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Title")
            .interact_text()
            .map_err(|e| crate::error::HelpdeskError::InvalidInput(e.to_string()))?,
    };

    let description = match args.description {
        Some(d) => d,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Description")
            .interact_text()
            .map_err(|e| crate::error::HelpdeskError::InvalidInput(e.to_string()))?,
    };

    let urgency = match args.urgency {
        Some(u) => Urgency::from_str(&u)?,
        None => prompt_urgency(&theme, default_urgency)?,
    };

    let category = match args.category {
        Some(c) => Category::from_str(&c)?,
        None => prompt_category(&theme)?,
    };

    Ok(NewTicket {
        title,
        description,
        urgency,
        category,
    })
}

fn prompt_category(theme: &ColorfulTheme) -> Result<Category> {
    let default_index = Category::ALL
        .iter()
        .position(|c| *c == Category::default())
        .unwrap_or(0);
    let labels: Vec<String> = Category::ALL.iter().map(ToString::to_string).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(|e| crate::error::HelpdeskError::InvalidInput(e.to_string()))?;
    Ok(Category::ALL[index])
}

fn prompt_urgency(theme: &ColorfulTheme, default: Urgency) -> Result<Urgency> {
    let default_index = Urgency::ALL
        .iter()
        .position(|u| *u == default)
        .unwrap_or(1);
    let labels: Vec<String> = Urgency::ALL.iter().map(ToString::to_string).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Urgency")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(|e| crate::error::HelpdeskError::InvalidInput(e.to_string()))?;
    Ok(Urgency::ALL[index])
}
