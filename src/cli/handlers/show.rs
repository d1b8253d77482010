//! Handler for the `show` command

use crate::cli::OutputFormatter;
use crate::core::{Ticket, TicketId};
use crate::error::{DeskTicketError, Result};
use crate::storage::FileStore;
use crate::tracker::Tracker;
use std::path::Path;

/// Display a single ticket with its full audit history
pub fn handle_show_command(id: &str, store_path: &Path, output: &OutputFormatter) -> Result<()> {
    let tracker = Tracker::open(FileStore::new(store_path))?;
    let ticket_id = TicketId::from_string(id);

    let ticket = tracker
        .get(&ticket_id)
        .ok_or_else(|| DeskTicketError::TicketNotFound { id: id.to_string() })?;

    if output.is_json() {
        output.print_json(ticket)?;
    } else {
        display_ticket(ticket, output);
    }

    Ok(())
}

fn display_ticket(ticket: &Ticket, output: &OutputFormatter) {
    output.info(&format!("Ticket {}", ticket.id));
    output.info(&format!("  Subject: {}", ticket.subject));
    output.info(&format!("  Requester: {} <{}>", ticket.requester, ticket.email));
    output.info(&format!("  Category: {}", ticket.category));
    output.info(&format!("  Status: {}", ticket.status));
    output.info(&format!("  Priority: {}", ticket.priority));
    let assignee = if ticket.is_unassigned() {
        "Unassigned"
    } else {
        ticket.assigned_to.as_str()
    };
    output.info(&format!("  Assigned to: {assignee}"));
    output.info(&format!(
        "  Created: {}",
        ticket.created.format("%Y-%m-%d %H:%M")
    ));
    output.info(&format!(
        "  Updated: {}",
        ticket.updated.format("%Y-%m-%d %H:%M")
    ));

    if !ticket.description.is_empty() {
        output.info("");
        output.info(&format!("  {}", ticket.description));
    }

    output.info("");
    output.info("History:");
    for event in &ticket.history {
        output.info(&format!(
            "  {} [{}] {}",
            event.timestamp.format("%Y-%m-%d %H:%M"),
            event.actor,
            event.action
        ));
    }
}
