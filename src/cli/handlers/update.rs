//! Handler for the `update` command

use crate::cli::OutputFormatter;
use crate::core::TicketId;
use crate::error::Result;
use crate::storage::FileStore;
use crate::tracker::{Tracker, UpdateRequest};
use std::path::Path;

/// Apply an update to a ticket and report whether anything changed
pub fn handle_update_command(
    id: &str,
    request: UpdateRequest,
    store_path: &Path,
    output: &OutputFormatter,
) -> Result<()> {
    let mut tracker = Tracker::open(FileStore::new(store_path))?;
    let ticket_id = TicketId::from_string(id);
    let changed = tracker.update(&ticket_id, request)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "changed": changed,
            "ticket": tracker.get(&ticket_id),
        }))?;
    } else if changed {
        output.success(&format!("Updated ticket {id}"));
    } else {
        output.info(&format!("No changes applied to ticket {id}"));
    }

    Ok(())
}
