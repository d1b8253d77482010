//! Export the ticket store to external formats
//!
//! JSON and YAML exports carry the full ticket records including history;
//! CSV flattens one row per ticket with a history length column, since
//! nested events don't fit a spreadsheet row.

use crate::core::Store;
use crate::error::{DeskTicketError, Result};
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// File extension for the format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }

    /// Export the store in this format
    pub fn export(&self, store: &Store) -> Result<String> {
        match self {
            Self::Json => export_json(store),
            Self::Yaml => export_yaml(store),
            Self::Csv => export_csv(store),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            _ => Err(DeskTicketError::custom(format!(
                "Unknown export format '{s}'. Supported: json, yaml, csv"
            ))),
        }
    }
}

fn export_json(store: &Store) -> Result<String> {
    serde_json::to_string_pretty(store.tickets())
        .map_err(|e| DeskTicketError::SerializationError(e.to_string()))
}

fn export_yaml(store: &Store) -> Result<String> {
    serde_yaml::to_string(store.tickets())
        .map_err(|e| DeskTicketError::SerializationError(e.to_string()))
}

fn export_csv(store: &Store) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record([
            "id",
            "requester",
            "email",
            "category",
            "subject",
            "status",
            "priority",
            "assigned_to",
            "created",
            "updated",
            "history_len",
        ])
        .map_err(|e| DeskTicketError::SerializationError(e.to_string()))?;

    for ticket in store {
        writer
            .write_record([
                ticket.id.to_string(),
                ticket.requester.clone(),
                ticket.email.clone(),
                ticket.category.to_string(),
                ticket.subject.clone(),
                ticket.status.to_string(),
                ticket.priority.to_string(),
                ticket.assigned_to.clone(),
                ticket.created.to_rfc3339(),
                ticket.updated.to_rfc3339(),
                ticket.history.len().to_string(),
            ])
            .map_err(|e| DeskTicketError::SerializationError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| DeskTicketError::SerializationError(e.to_string()))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| DeskTicketError::SerializationError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DeskTicketError::SerializationError(e.to_string()))
}
