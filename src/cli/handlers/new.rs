//! Handler for the `new` command

use crate::cli::OutputFormatter;
use crate::error::{DeskTicketError, Result};
use crate::storage::FileStore;
use crate::tracker::{NewTicket, Tracker};
use std::path::Path;

/// Create a ticket and print its assigned ID
pub fn handle_new_command(
    input: NewTicket,
    store_path: &Path,
    output: &OutputFormatter,
) -> Result<()> {
    let mut tracker = Tracker::open(FileStore::new(store_path))?;
    let id = tracker.create(input)?;

    let ticket = tracker
        .get(&id)
        .ok_or_else(|| DeskTicketError::TicketNotFound { id: id.to_string() })?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket,
        }))?;
    } else {
        output.success(&format!("Created ticket {id}: {}", ticket.subject));
    }

    Ok(())
}
