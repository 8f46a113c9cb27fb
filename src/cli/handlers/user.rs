//! Handlers for the `user` subcommands

use crate::cli::OutputFormatter;
use crate::cli::handlers::common::HandlerContext;
use crate::error::Result;
use std::str::FromStr;

/// Add a user account (admin only)
pub fn handle_user_add(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    username: &str,
    email: &str,
    role: &str,
    specialty: Option<String>,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let role = crate::core::Role::from_str(role)?;

    let user = service.add_user(&actor, username, email, role, specialty)?;

    if output.is_json() {
        output.print_json(&user)?;
    } else {
        output.success(&format!("Added {} '{}'", user.role, user.username));
    }
    Ok(())
}

/// List user accounts (admin only)
pub fn handle_user_list(
    ctx: &HandlerContext,
    acting_as: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let service = ctx.service()?;
    let actor = ctx.actor(acting_as)?;
    let users = service.list_users(&actor)?;

    if output.is_json() {
        output.print_json(&users)?;
    } else {
        output.info(&format!("{} account(s):", users.len()));
        for user in &users {
            let specialty = user
                .specialty
                .as_deref()
                .map(|s| format!(" [{s}]"))
                .unwrap_or_default();
            output.info(&format!(
                "  {:<12} {:<20} {}{}",
                user.role.to_string(),
                user.username,
                user.email,
                specialty
            ));
        }
    }
    Ok(())
}
