//! Handler for the `init` command

use crate::cli::OutputFormatter;
use crate::config::HelpdeskConfig;
use crate::core::{Role, User};
use crate::error::{HelpdeskError, Result};
use crate::store::FileStorage;
use std::path::Path;

/// Initialize the storage layout and create the first admin account.
pub fn handle_init(
    dir: &str,
    name: Option<&str>,
    admin_username: &str,
    admin_email: &str,
    output: &OutputFormatter,
) -> Result<()> {
    let storage = FileStorage::new(Path::new(dir));
    if storage.is_initialized() {
        return Err(HelpdeskError::InvalidInput(format!(
            "Helpdesk already initialized at {dir}"
        )));
    }

    let mut config = HelpdeskConfig::default();
    if let Some(name) = name {
        config.name = name.to_string();
    }
    storage.init(&config)?;

    let admin = User::new(
        admin_username.to_string(),
        admin_email.to_string(),
        Role::Admin,
    );
    storage.save_user(&admin)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "initialized": dir,
            "name": config.name,
            "admin": admin.username,
        }))?;
    } else {
        output.success(&format!("Initialized helpdesk '{}' at {dir}", config.name));
        output.info(&format!("Created admin account '{}'", admin.username));
    }
    Ok(())
}
