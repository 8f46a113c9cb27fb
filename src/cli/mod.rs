//! Command-line interface
//!
//! Argument parsing with clap derive, plus the output formatter and the
//! per-command handlers. Authentication is out of scope: the acting user is
//! selected with the global `--as <username>` flag and role checks happen in
//! the service layer.

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};

/// helpdesk - internal IT-support ticketing
#[derive(Parser)]
#[command(name = "helpdesk", version, about, long_about = None)]
pub struct Cli {
    /// Storage directory (defaults to ./.helpdesk)
    #[arg(long, global = true, default_value = ".helpdesk")]
    pub dir: String,

    /// Acting username (most commands require one)
    #[arg(long = "as", global = true, value_name = "USERNAME")]
    pub acting_as: Option<String>,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a helpdesk in the storage directory
    Init {
        /// Display name for this helpdesk
        #[arg(long)]
        name: Option<String>,
        /// Username for the initial admin account
        #[arg(long, default_value = "admin")]
        admin: String,
        /// Email for the initial admin account
        #[arg(long, default_value = "admin@localhost")]
        admin_email: String,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// File a new ticket (prompts for missing fields)
    New {
        /// Short summary of the incident
        #[arg(long)]
        title: Option<String>,
        /// Full description
        #[arg(long)]
        description: Option<String>,
        /// LOW, MEDIUM, HIGH or CRITICAL
        #[arg(long)]
        urgency: Option<String>,
        /// HARDWARE, SOFTWARE, CONNECTIVITY, ACCESS, INFRASTRUCTURE, DATA or OTHER
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one ticket with its comments and history
    Show {
        /// Ticket ID (or unique prefix)
        ticket: String,
    },

    /// List visible tickets, newest first
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,
        /// Filter by urgency
        #[arg(long)]
        urgency: Option<String>,
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Match against ticket titles
        #[arg(long)]
        search: Option<String>,
        /// Treat the search string as a regular expression
        #[arg(long)]
        regex: bool,
    },

    /// Show visible tickets grouped by status
    Board,

    /// Assign a ticket to a technician (admin only)
    Assign {
        /// Ticket ID (or unique prefix)
        ticket: String,
        /// Username of the technician
        technician: String,
    },

    /// Take an unassigned ticket (technician only)
    Take {
        /// Ticket ID (or unique prefix)
        ticket: String,
    },

    /// Change a ticket's status
    Status {
        /// Ticket ID (or unique prefix)
        ticket: String,
        /// NEW, IN_PROGRESS, RESOLVED or CLOSED
        status: String,
    },

    /// Add a comment to a ticket
    Comment {
        /// Ticket ID (or unique prefix)
        ticket: String,
        /// Comment text
        text: String,
    },

    /// Delete a ticket
    Delete {
        /// Ticket ID (or unique prefix)
        ticket: String,
    },

    /// Show a ticket's audit history
    History {
        /// Ticket ID (or unique prefix)
        ticket: String,
    },

    /// Show aggregated dashboard numbers
    Analytics,

    /// Export visible tickets as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Populate the helpdesk with demo users and tickets
    Seed,
}

/// User management subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Add an account (admin only)
    Add {
        username: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// user, technician or admin
        #[arg(long, default_value = "user")]
        role: String,
        /// Technician specialty
        #[arg(long)]
        specialty: Option<String>,
    },
    /// List accounts (admin only)
    List,
}
