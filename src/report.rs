//! Reporting and display layer
//!
//! Renders tickets as a plain-text table and aggregates summary counts over
//! the full status and priority enumerations, zero counts included.

use crate::core::{Priority, Status, Store, Ticket};
use serde::Serialize;
use std::fmt::Write;

const SUBJECT_WIDTH: usize = 30;

/// Kinds of report the reporting layer knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportKind {
    /// Ticket counts by status, priority, and assignment
    Summary,
    /// Anything else; rendered as an explicit not-implemented placeholder
    Other(String),
}

impl ReportKind {
    /// Parse a report kind; unknown names are carried through as `Other`
    /// so they can be reported as unimplemented rather than rejected
    #[must_use]
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_lowercase().as_str() {
            "summary" => Self::Summary,
            _ => Self::Other(kind.trim().to_string()),
        }
    }

    /// Render this report over the given store
    #[must_use]
    pub fn render(&self, store: &Store) -> String {
        match self {
            Self::Summary => Summary::from_store(store).render(),
            Self::Other(kind) => {
                format!("Report '{kind}' is not implemented")
            }
        }
    }
}

/// Aggregated ticket counts
#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub new: usize,
    pub in_progress: usize,
    pub waiting: usize,
    pub resolved: usize,
    pub closed: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
    pub unassigned: usize,
}

impl Summary {
    /// Count tickets in the store by status, priority, and assignment
    #[must_use]
    pub fn from_store(store: &Store) -> Self {
        let mut summary = Self {
            total: store.len(),
            new: 0,
            in_progress: 0,
            waiting: 0,
            resolved: 0,
            closed: 0,
            low: 0,
            medium: 0,
            high: 0,
            critical: 0,
            unassigned: 0,
        };

        for ticket in store {
            match ticket.status {
                Status::New => summary.new += 1,
                Status::InProgress => summary.in_progress += 1,
                Status::Waiting => summary.waiting += 1,
                Status::Resolved => summary.resolved += 1,
                Status::Closed => summary.closed += 1,
            }

            match ticket.priority {
                Priority::Low => summary.low += 1,
                Priority::Medium => summary.medium += 1,
                Priority::High => summary.high += 1,
                Priority::Critical => summary.critical += 1,
            }

            if ticket.is_unassigned() {
                summary.unassigned += 1;
            }
        }

        summary
    }

    /// Count for a given status
    #[must_use]
    pub const fn status_count(&self, status: Status) -> usize {
        match status {
            Status::New => self.new,
            Status::InProgress => self.in_progress,
            Status::Waiting => self.waiting,
            Status::Resolved => self.resolved,
            Status::Closed => self.closed,
        }
    }

    /// Count for a given priority
    #[must_use]
    pub const fn priority_count(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
            Priority::Critical => self.critical,
        }
    }

    /// Render the summary as plain text
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "Ticket Summary").unwrap();
        writeln!(out, "Total tickets: {}", self.total).unwrap();
        writeln!(out).unwrap();
        writeln!(out, "By status:").unwrap();
        for status in Status::ALL {
            writeln!(out, "  {}: {}", status, self.status_count(status)).unwrap();
        }
        writeln!(out).unwrap();
        writeln!(out, "By priority:").unwrap();
        for priority in Priority::ALL {
            writeln!(out, "  {}: {}", priority, self.priority_count(priority)).unwrap();
        }
        writeln!(out).unwrap();
        writeln!(out, "Unassigned: {}", self.unassigned).unwrap();
        out
    }
}

/// Render tickets as a plain-text table
///
/// Columns: id, subject (truncated), status, priority, requester, assignee,
/// last-updated. An empty input renders a "No tickets found" line instead
/// of an empty table.
#[must_use]
pub fn render_table(tickets: &[&Ticket]) -> String {
    if tickets.is_empty() {
        return "No tickets found".to_string();
    }

    let mut out = String::new();
    writeln!(
        out,
        "{:<10} {:<33} {:<12} {:<10} {:<20} {:<16} {}",
        "ID", "Subject", "Status", "Priority", "Requester", "Assigned To", "Updated"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(120)).unwrap();

    for ticket in tickets {
        let assignee = if ticket.is_unassigned() {
            "Unassigned"
        } else {
            ticket.assigned_to.as_str()
        };
        writeln!(
            out,
            "{:<10} {:<33} {:<12} {:<10} {:<20} {:<16} {}",
            ticket.id.to_string(),
            truncate_subject(&ticket.subject),
            ticket.status.to_string(),
            ticket.priority.to_string(),
            ticket.requester,
            assignee,
            ticket.updated.format("%Y-%m-%d %H:%M"),
        )
        .unwrap();
    }

    out
}

/// Truncate a subject to 30 characters, marking the cut with an ellipsis
fn truncate_subject(subject: &str) -> String {
    if subject.chars().count() > SUBJECT_WIDTH {
        let cut: String = subject.chars().take(SUBJECT_WIDTH).collect();
        format!("{cut}...")
    } else {
        subject.to_string()
    }
}
