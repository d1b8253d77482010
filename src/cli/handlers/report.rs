//! Handler for the `report` command

use crate::cli::OutputFormatter;
use crate::error::Result;
use crate::report::{ReportKind, Summary};
use crate::storage::{FileStore, StoreRepository};
use std::path::Path;

/// Print a report over the full ticket store
pub fn handle_report_command(kind: &str, store_path: &Path, output: &OutputFormatter) -> Result<()> {
    let store = FileStore::new(store_path).load()?;
    let kind = ReportKind::parse(kind);

    if output.is_json() {
        match kind {
            ReportKind::Summary => output.print_json(&Summary::from_store(&store))?,
            ReportKind::Other(name) => output.print_json(&serde_json::json!({
                "status": "unimplemented",
                "report": name,
            }))?,
        }
    } else {
        output.info(&kind.render(&store));
    }

    Ok(())
}
