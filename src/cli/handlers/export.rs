//! Handler for the `export` command

use crate::cli::OutputFormatter;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::storage::{FileStore, StoreRepository};
use std::fs;
use std::path::Path;

/// Export the full store, to a file or stdout
pub fn handle_export_command(
    format: &str,
    destination: Option<&Path>,
    store_path: &Path,
    output: &OutputFormatter,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let store = FileStore::new(store_path).load()?;
    let content = format.export(&store)?;

    match destination {
        Some(path) => {
            fs::write(path, &content)?;
            if output.is_json() {
                output.print_json(&serde_json::json!({
                    "status": "success",
                    "format": format.extension(),
                    "tickets": store.len(),
                    "path": path,
                }))?;
            } else {
                output.success(&format!(
                    "Exported {} tickets to {}",
                    store.len(),
                    path.display()
                ));
            }
        }
        None => {
            // Raw content on stdout so it can be piped
            print!("{content}");
        }
    }

    Ok(())
}
