use crate::core::{Priority, Status, Ticket};

/// Conjunctive ticket filter
///
/// Each populated field is an exact-match predicate; all populated fields
/// must match for a ticket to pass. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<String>,
}

impl TicketFilter {
    /// Create an empty filter that matches all tickets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to a priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restrict to an assignee (exact match)
    #[must_use]
    pub fn assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Check if a ticket matches all filter criteria
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = self.status {
            if ticket.status != status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if ticket.priority != priority {
                return false;
            }
        }

        if let Some(ref assignee) = self.assigned_to {
            if ticket.assigned_to != *assignee {
                return false;
            }
        }

        true
    }
}
