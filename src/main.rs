//! desk-ticket - Help desk ticket tracking CLI
//!
//! This is the main entry point for the desk-ticket CLI application.
//! It handles command-line argument parsing and dispatches to the
//! appropriate command handlers.

use clap::Parser;
use desk_ticket::cli::{Cli, Commands, OutputFormatter, handlers, resolve_store_path};
use desk_ticket::error::Result;
use desk_ticket::tracker::{NewTicket, UpdateRequest};
use std::process;

fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let store_path = resolve_store_path(cli.file);

    match cli.command {
        Commands::New {
            requester,
            email,
            category,
            subject,
            description,
            priority,
        } => handlers::handle_new_command(
            NewTicket {
                requester,
                email,
                category,
                subject,
                description,
                priority,
            },
            &store_path,
            formatter,
        ),
        Commands::Update {
            id,
            status,
            priority,
            assignee,
            notes,
            actor,
        } => handlers::handle_update_command(
            &id,
            UpdateRequest {
                status,
                priority,
                assigned_to: assignee,
                notes,
                actor,
            },
            &store_path,
            formatter,
        ),
        Commands::Show { id } => handlers::handle_show_command(&id, &store_path, formatter),
        Commands::List {
            status,
            priority,
            assignee,
        } => handlers::handle_list_command(
            status.as_deref(),
            priority.as_deref(),
            assignee.as_deref(),
            &store_path,
            formatter,
        ),
        Commands::Report { kind } => {
            handlers::handle_report_command(&kind, &store_path, formatter)
        }
        Commands::Export { format, output } => handlers::handle_export_command(
            &format,
            output.as_deref(),
            &store_path,
            formatter,
        ),
    }
}

/// Display an error with any suggestions, plus a JSON form in JSON mode
fn handle_error(error: &desk_ticket::error::DeskTicketError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.warning("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.warning(&format!("  - {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }
}
