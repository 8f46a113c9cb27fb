//! helpdesk - internal IT-support ticketing
//!
//! Main entry point for the `helpdesk` CLI. Parses command-line arguments
//! and dispatches to the appropriate command handler.

use clap::Parser;
use helpdesk::cli::handlers::{
    self, HandlerContext, ListArgs, NewArgs, handle_init,
};
use helpdesk::cli::{Cli, Commands, OutputFormatter, UserCommands};
use helpdesk::error::Result;
use std::process;

fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        formatter.error(&format!("Error: {e}"));
        process::exit(1);
    }
}

/// Dispatch the parsed command to its handler
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    // Init is the only command that runs against an uninitialized directory
    if let Commands::Init { name, admin, admin_email } = &cli.command {
        return handle_init(&cli.dir, name.as_deref(), admin, admin_email, formatter);
    }

    let ctx = HandlerContext::open(&cli.dir)?;
    let acting_as = cli.acting_as.as_deref();

    match cli.command {
        Commands::Init { .. } => unreachable!("handled above"),
        Commands::User { command } => match command {
            UserCommands::Add { username, email, role, specialty } => handlers::handle_user_add(
                &ctx, acting_as, &username, &email, &role, specialty, formatter,
            ),
            UserCommands::List => handlers::handle_user_list(&ctx, acting_as, formatter),
        },
        Commands::New { title, description, urgency, category } => handlers::handle_new(
            &ctx,
            acting_as,
            NewArgs { title, description, urgency, category },
            formatter,
        ),
        Commands::Show { ticket } => handlers::handle_show(&ctx, acting_as, &ticket, formatter),
        Commands::List { status, urgency, category, search, regex } => handlers::handle_list(
            &ctx,
            acting_as,
            ListArgs { status, urgency, category, search, regex },
            formatter,
        ),
        Commands::Board => handlers::handle_board(&ctx, acting_as, formatter),
        Commands::Assign { ticket, technician } => {
            handlers::handle_assign(&ctx, acting_as, &ticket, &technician, formatter)
        },
        Commands::Take { ticket } => handlers::handle_take(&ctx, acting_as, &ticket, formatter),
        Commands::Status { ticket, status } => {
            handlers::handle_status(&ctx, acting_as, &ticket, &status, formatter)
        },
        Commands::Comment { ticket, text } => {
            handlers::handle_comment(&ctx, acting_as, &ticket, &text, formatter)
        },
        Commands::Delete { ticket } => handlers::handle_delete(&ctx, acting_as, &ticket, formatter),
        Commands::History { ticket } => {
            handlers::handle_history(&ctx, acting_as, &ticket, formatter)
        },
        Commands::Analytics => handlers::handle_analytics(&ctx, acting_as, formatter),
        Commands::Export { output } => {
            handlers::handle_export(&ctx, acting_as, output.as_deref(), formatter)
        },
        Commands::Seed => handlers::handle_seed(&ctx, acting_as, formatter),
    }
}
