//! Command-line interface for desk-ticket
//!
//! The CLI is a thin driver over the library: every subcommand maps to one
//! lifecycle, query, or reporting operation and adds no semantics of its
//! own.

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Help desk ticket tracking with audit history
#[derive(Parser)]
#[command(name = "desk-ticket", version, about, long_about = None)]
pub struct Cli {
    /// Path to the ticket store file (defaults to the user data directory)
    #[arg(long, global = true, env = "DESK_TICKET_FILE")]
    pub file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new ticket
    New {
        /// Name of the person filing the request
        #[arg(long)]
        requester: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Category: Hardware, Software, Network, Account, or Other
        #[arg(long)]
        category: String,

        /// One-line summary
        #[arg(long)]
        subject: String,

        /// Full description of the problem
        #[arg(long, default_value = "")]
        description: String,

        /// Priority: Low, Medium, High, or Critical (default Medium)
        #[arg(long)]
        priority: Option<String>,
    },

    /// Update a ticket's status, priority, assignee, or add a note
    Update {
        /// Ticket ID
        id: String,

        /// New status (unrecognized values are ignored)
        #[arg(long)]
        status: Option<String>,

        /// New priority (unrecognized values are ignored)
        #[arg(long)]
        priority: Option<String>,

        /// New assignee; pass an empty string to unassign
        #[arg(long)]
        assignee: Option<String>,

        /// Note to record in the ticket history
        #[arg(long)]
        notes: Option<String>,

        /// Actor recorded in the history events
        #[arg(long, default_value = "System")]
        actor: String,
    },

    /// Show one ticket with its full history
    Show {
        /// Ticket ID
        id: String,
    },

    /// List tickets, optionally filtered
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by priority
        #[arg(long)]
        priority: Option<String>,

        /// Filter by assignee (exact match)
        #[arg(long)]
        assignee: Option<String>,
    },

    /// Print a report over the ticket store
    Report {
        /// Report kind (currently only "summary" is implemented)
        #[arg(default_value = "summary")]
        kind: String,
    },

    /// Export all tickets to JSON, YAML, or CSV
    Export {
        /// Export format
        #[arg(long, default_value = "json")]
        format: String,

        /// Output file; prints to stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Resolve the backing store file path
///
/// An explicit `--file` wins; otherwise the platform user data directory is
/// used, falling back to the current directory when no home is available.
#[must_use]
pub fn resolve_store_path(file: Option<PathBuf>) -> PathBuf {
    if let Some(path) = file {
        return path;
    }

    directories::ProjectDirs::from("", "", "desk-ticket").map_or_else(
        || PathBuf::from(".desk-ticket").join("tickets.yaml"),
        |dirs| dirs.data_dir().join("tickets.yaml"),
    )
}
