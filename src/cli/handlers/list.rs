//! Handler for the `list` command

use crate::cli::OutputFormatter;
use crate::core::{Priority, Status};
use crate::error::Result;
use crate::report::render_table;
use crate::storage::FileStore;
use crate::tracker::{TicketFilter, Tracker};
use std::path::Path;

/// List tickets matching the given filters
///
/// Filter values are validated here: asking to list an unknown status is a
/// caller mistake and errors out, unlike `update` where unrecognized values
/// are dropped.
pub fn handle_list_command(
    status: Option<&str>,
    priority: Option<&str>,
    assignee: Option<&str>,
    store_path: &Path,
    output: &OutputFormatter,
) -> Result<()> {
    let mut filter = TicketFilter::new();
    if let Some(s) = status {
        filter = filter.status(s.parse::<Status>()?);
    }
    if let Some(p) = priority {
        filter = filter.priority(p.parse::<Priority>()?);
    }
    if let Some(a) = assignee {
        filter = filter.assigned_to(a);
    }

    let tracker = Tracker::open(FileStore::new(store_path))?;
    let tickets = tracker.list(&filter);

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "tickets": tickets,
            "count": tickets.len(),
        }))?;
    } else {
        output.info(&render_table(&tickets));
    }

    Ok(())
}
